// Business domains
//
// Each domain owns its models and logic; infrastructure (HTTP clients,
// config, storage) lives in kernel.

pub mod analysis;

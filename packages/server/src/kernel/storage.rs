//! Best-effort on-disk store for past analysis results.
//!
//! A keyed JSON file, nothing more. Writes are serialized through a
//! mutex; every failure is logged and swallowed — the pipeline never
//! depends on this store succeeding.

use serde_json::{Map, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct JsonStorage {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonStorage {
    pub fn new(storage_dir: &str) -> Self {
        Self {
            path: PathBuf::from(storage_dir).join("analyses.json"),
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn load(&self) -> Map<String, Value> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => Map::new(),
        }
    }

    /// Save a result under its id. Best effort: failures are logged, not returned.
    pub async fn save(&self, id: &str, result: Value) {
        let _guard = self.lock.lock().await;

        let mut analyses = self.load().await;
        analyses.insert(id.to_string(), result);

        if let Some(parent) = self.path.parent() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                warn!(error = %e, "Failed to create storage directory");
                return;
            }
        }

        match serde_json::to_vec_pretty(&Value::Object(analyses)) {
            Ok(bytes) => {
                if let Err(e) = tokio::fs::write(&self.path, bytes).await {
                    warn!(error = %e, id = %id, "Failed to persist analysis");
                } else {
                    debug!(id = %id, "Analysis persisted");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize analyses"),
        }
    }

    /// Retrieve a stored result by id.
    pub async fn get(&self, id: &str) -> Option<Value> {
        let _guard = self.lock.lock().await;
        self.load().await.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().to_str().unwrap());

        storage.save("abc", json!({"verdict": "False"})).await;
        let loaded = storage.get("abc").await.unwrap();
        assert_eq!(loaded["verdict"], "False");
    }

    #[tokio::test]
    async fn get_unknown_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().to_str().unwrap());
        assert!(storage.get("missing").await.is_none());
    }
}

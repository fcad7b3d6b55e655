//! Category-indexed content tables.
//!
//! One data-driven table per category: explanation template, checklist
//! catalog, intelligence paragraphs. The assembler selects and renders
//! from here; the wording itself is opaque content, not logic.
//!
//! Explanation templates carry two placeholder slots,
//! `{fact_check_phrase}` and `{search_phrase}`, filled with live counts.

use super::models::Category;

pub struct CategoryTemplate {
    pub explanation: &'static str,
    /// Up to two category-specific checklist entries (point, explanation)
    pub checklist: &'static [(&'static str, &'static str)],
    pub intelligence: IntelligenceParagraphs,
}

#[derive(Default)]
pub struct IntelligenceParagraphs {
    pub political: Option<&'static str>,
    pub financial: Option<&'static str>,
    pub psychological: Option<&'static str>,
    pub scientific: Option<&'static str>,
    pub philosophical: Option<&'static str>,
    pub geopolitical: Option<&'static str>,
    pub technical: Option<&'static str>,
}

/// Universal checklist item prepended to every report.
pub const BASE_CHECKLIST_ITEM: (&str, &str) = (
    "Checked multiple credible sources",
    "Always verify claims through at least 2-3 independent, authoritative sources before \
     accepting as true. Look for consensus among reputable organizations.",
);

/// Recognized fact-check publishers: (match key, display name, reliability, base URL).
/// Matched against the lowercased publisher name reported by the API.
pub const FACT_CHECK_PUBLISHERS: &[(&str, &str, f64, &str)] = &[
    ("factcheck.org", "FactCheck.org", 0.95, "https://www.factcheck.org"),
    ("ap news", "Associated Press", 0.94, "https://apnews.com/hub/ap-fact-check"),
    ("reuters", "Reuters Fact Check", 0.93, "https://www.reuters.com/fact-check"),
    ("bbc", "BBC Reality Check", 0.92, "https://www.bbc.com/news/reality_check"),
    ("afp", "AFP Fact Check", 0.92, "https://factcheck.afp.com"),
    ("politifact", "PolitiFact", 0.91, "https://www.politifact.com"),
    ("snopes", "Snopes", 0.90, "https://www.snopes.com"),
];

/// Domains whose search results get the top reliability band.
pub const QUALITY_DOMAINS: &[&str] = &[
    "who.int", "cdc.gov", "nih.gov", "fda.gov", "nature.com", "nejm.org", "bmj.com", "gov.uk",
    "europa.eu",
];

static VACCINE: CategoryTemplate = CategoryTemplate {
    explanation: "This claim suggests that COVID-19 vaccines contain microchips or tracking \
devices, a conspiracy theory that has been thoroughly investigated and debunked by medical \
professionals worldwide.\n\n\
The theory typically alleges that governments or organizations use vaccination programs to \
secretly implant tracking devices. It fails basic technical and scientific scrutiny for several \
reasons.\n\n\
First, the physical impossibility: standard vaccination needles (typically 22-25 gauge) are far \
too small to accommodate any functional microchip. The smallest commercially available RFID \
chips are several millimeters across, while vaccine needles have inner diameters under 0.5mm.\n\n\
Second, ingredient transparency: all COVID-19 vaccine ingredients are publicly documented and \
regulated by health authorities including the FDA, EMA, and WHO. These vaccines contain mRNA or \
viral proteins, lipids, salts, and sugars - no electronic components whatsoever.\n\n\
Third, the missing infrastructure: even if chips could be injected, tracking billions of people \
would require a surveillance network that does not exist and would be technically and \
economically unfeasible.\n\n\
{fact_check_phrase} have verified that no credible evidence supports microchip vaccine claims, \
alongside {search_phrase} providing scientific context.\n\n\
Medical authorities worldwide, including the World Health Organization and the Centers for \
Disease Control and Prevention, have repeatedly confirmed that approved vaccines contain only \
the ingredients listed in their official documentation. For anyone concerned about vaccine \
safety, the recommended approach is to consult qualified healthcare providers who can give \
evidence-based information for individual circumstances.",
    checklist: &[
        (
            "Verified through medical authorities",
            "For health claims, consult WHO, CDC, or national health ministries - not social \
             media posts. Medical misinformation can be life-threatening.",
        ),
        (
            "Reviewed peer-reviewed research",
            "Scientific claims should be backed by studies published in reputable medical \
             journals like The Lancet, Nature, or New England Journal of Medicine.",
        ),
    ],
    intelligence: IntelligenceParagraphs {
        psychological: Some(
            "This conspiracy theory exploits deep-seated fears about government surveillance \
             and medical authority. Invoking imagery of 'microchips in vaccines' triggers \
             anxiety around bodily autonomy, making the claim emotionally sticky and likely to \
             be shared without verification.",
        ),
        scientific: Some(
            "No peer-reviewed studies support microchip insertion claims. Vaccine ingredients \
             are publicly available, rigorously tested through clinical trials, and monitored \
             by international health organizations including WHO, FDA, and EMA.",
        ),
        political: Some(
            "Anti-vaccine misinformation campaigns often serve to undermine public health \
             measures and institutional trust, turning medical decisions into identity markers \
             and making evidence-based health communication harder.",
        ),
        geopolitical: Some(
            "Similar vaccine misinformation campaigns have been documented across multiple \
             countries, often with coordinated messaging that suggests organized disinformation \
             efforts aimed at undermining public health responses.",
        ),
        technical: Some(
            "The technical impossibility is clear from vaccine delivery systems and chip \
             manufacturing: standard needles are too small for functional microchips, and no \
             infrastructure exists for the alleged tracking capabilities.",
        ),
        financial: Some(
            "Vaccine misinformation can financially benefit alternative health product sellers \
             and content creators who monetize conspiracy content, driving traffic toward \
             unproven treatments.",
        ),
        philosophical: Some(
            "The theory reflects broader tensions between individual autonomy and collective \
             public health responsibility, preferring conspiratorial explanations over \
             scientific evidence and established medical practice.",
        ),
    },
};

static ELECTION: CategoryTemplate = CategoryTemplate {
    explanation: "This claim relates to electoral integrity and voting processes. Electoral \
systems in democratic countries include multiple safeguards and verification mechanisms \
designed to ensure accuracy and prevent fraud.\n\n\
Modern electoral systems incorporate several layers of security: paper ballot backups, \
bipartisan poll monitoring, statistical audits, signature verification, and post-election \
reviews. These systems are designed and overseen by trained election officials bound by legal \
and ethical standards, often with oversight from independent and international observers.\n\n\
{fact_check_phrase} examined similar electoral claims, along with {search_phrase} providing \
context and verification.\n\n\
Electoral misinformation takes many forms: false claims about voting technology, incorrect \
information about voter eligibility, misleading turnout statistics, or unsubstantiated \
allegations of procedural irregularities. Such claims require verification through official \
channels - certified election results, reports from monitoring organizations, court decisions \
where challenges were pursued, and statements from bipartisan election officials.\n\n\
The integrity of democratic processes depends on accurate information and public trust in \
electoral institutions. Citizens concerned about electoral integrity are encouraged to engage \
through official processes: volunteering as poll workers, joining observer programs, or \
contacting election officials directly.",
    checklist: &[
        (
            "Consulted official election authorities",
            "Verify electoral claims through official election commissions and certified \
             results. These bodies have legal responsibility for election integrity.",
        ),
        (
            "Cross-referenced with independent monitors",
            "Check claims against reports from independent election monitoring organizations \
             with trained observers and established credibility.",
        ),
    ],
    intelligence: IntelligenceParagraphs {
        psychological: Some(
            "Electoral misinformation exploits partisan divisions and distrust in democratic \
             institutions, using confirmation bias to reinforce existing political beliefs \
             regardless of contradictory evidence.",
        ),
        political: Some(
            "False electoral claims directly undermine democratic legitimacy and can lead to \
             real-world violence and instability when significant parts of the population lose \
             faith in electoral processes.",
        ),
        geopolitical: Some(
            "Election misinformation campaigns are frequently linked to foreign interference \
             operations designed to reduce faith in democratic institutions and create internal \
             division within target countries.",
        ),
        technical: Some(
            "Modern electoral systems include multiple verification layers, audit procedures, \
             and oversight mechanisms - paper trails, statistical audits, and bipartisan \
             observation - that guard against the manipulation alleged in conspiracy theories.",
        ),
        financial: Some(
            "Electoral misinformation can be financially motivated through fundraising appeals \
             and donation drives that capitalize on outrage and distrust.",
        ),
        scientific: Some(
            "Statistical analysis and election security research consistently demonstrate the \
             accuracy and integrity of modern electoral systems.",
        ),
        philosophical: Some(
            "Election misinformation raises deeper questions about democratic legitimacy and \
             the role of expertise in validating electoral outcomes.",
        ),
    },
};

static HEALTH: CategoryTemplate = CategoryTemplate {
    explanation: "This claim involves health-related information that requires careful \
verification through established medical and scientific channels. Health misinformation can \
have serious consequences for individual and public health, making accurate assessment \
particularly important.\n\n\
Medical claims should be evaluated against peer-reviewed research, guidance from established \
health authorities, and consensus among qualified professionals. The scientific method's \
rigorous testing, peer review, and replication exist precisely to ensure the reliability of \
health information.\n\n\
{fact_check_phrase} have examined this type of claim, along with {search_phrase} providing \
scientific context.\n\n\
Health authorities such as the World Health Organization and the Centers for Disease Control \
and Prevention maintain updated guidance based on current evidence, continuously reviewed by \
medical professionals and researchers.\n\n\
Medical misinformation often exploits natural concerns about health and safety, presenting \
anecdotes or preliminary research as definitive conclusions, or legitimate studies out of \
context. When evaluating health claims, weigh the credentials of the source, peer-reviewed \
support, professional consensus, and official guidance. For personal health decisions, consult \
qualified healthcare providers who can assess individual circumstances.",
    checklist: &[
        (
            "Consulted health professionals",
            "Medical claims should be verified with qualified healthcare providers and official \
             health agencies with medical training and access to current research.",
        ),
        (
            "Checked scientific literature",
            "Health information should be supported by peer-reviewed research from medical \
             institutions, not anecdotal reports or unverified studies.",
        ),
    ],
    intelligence: IntelligenceParagraphs {
        psychological: Some(
            "Health misinformation preys on medical anxieties and fears about illness and \
             treatment, using personal anecdotes and emotional appeals to override scientific \
             evidence.",
        ),
        scientific: Some(
            "Medical misinformation contradicts evidence-based medicine and peer-reviewed \
             research, and can lead to harmful decisions, delayed treatment, and reduced trust \
             in healthcare professionals.",
        ),
        political: Some(
            "Health misinformation can be weaponized to undermine public health policies and \
             challenge medical expertise, turning health decisions into political identity \
             markers during crises.",
        ),
        technical: Some(
            "Medical research follows rigorous protocols - randomized controlled trials, peer \
             review, regulatory oversight, and post-market surveillance - that ensure approved \
             treatments meet safety and efficacy standards.",
        ),
        financial: Some(
            "Sellers of alternative health products and unproven treatments often benefit \
             financially from spreading medical misinformation that drives customers away from \
             established care.",
        ),
        geopolitical: Some(
            "Health misinformation campaigns can serve as information warfare, undermining \
             public health responses and trust in medical institutions during emergencies.",
        ),
        philosophical: Some(
            "Health misinformation embodies tensions between individual autonomy and collective \
             public health responsibility, and between intuitive and scientific understandings \
             of disease.",
        ),
    },
};

static GENERAL: CategoryTemplate = CategoryTemplate {
    explanation: "This claim requires careful verification to determine its accuracy and \
reliability. In an information-rich environment, distinguishing accurate from misleading \
information takes systematic evaluation with established verification methods.\n\n\
{fact_check_phrase} and {search_phrase} help provide context for evaluating this claim.\n\n\
Information verification rests on a few principles: check multiple independent sources, \
evaluate the credibility and expertise behind them, look for evidence-based support rather \
than opinion, and consider potential conflicts of interest.\n\n\
Misinformation spreads through social media amplification, emotional appeals that bypass \
critical thinking, and confirmation bias - the tendency to trust information that supports \
existing beliefs. Credible sources share recognizable traits: established accuracy records, \
transparent methodology, published corrections, and clear separation of news from opinion.\n\n\
For controversial or important claims, cross-referencing several reliable sources - academic \
institutions, established news organizations with editorial standards, government agencies \
with relevant expertise - builds confidence in accuracy. The goal of verification is not to \
suppress debate, but to ensure important decisions rest on accurate, well-sourced information.",
    checklist: &[
        (
            "Traced information to original source",
            "Always find the primary source rather than relying on forwarded messages. \
             Screenshots and forwards can be easily altered or taken out of context.",
        ),
        (
            "Evaluated source credibility",
            "Consider the reputation, expertise, and track record of information sources. Look \
             for established credibility and editorial standards.",
        ),
    ],
    intelligence: IntelligenceParagraphs {
        psychological: Some(
            "This misinformation pattern uses emotional triggers and confirmation bias to \
             spread rapidly, exploiting cognitive shortcuts and the preference for information \
             that confirms existing beliefs.",
        ),
        political: Some(
            "False information can significantly influence public opinion, policy decisions, \
             and social cohesion, often serving specific political or economic interests.",
        ),
        technical: Some(
            "Misinformation spreads through social media algorithms and echo chambers that \
             prioritize engagement over accuracy, making corrections slower than the original \
             false claims.",
        ),
        geopolitical: Some(
            "Information warfare is increasingly used by state and non-state actors to \
             influence foreign populations and undermine social stability.",
        ),
        financial: Some(
            "Misinformation can be financially motivated through advertising revenue, product \
             sales, fundraising, or market manipulation benefiting from misleading content.",
        ),
        scientific: Some(
            "Scientific misinformation undermines evidence-based decision making, often \
             misrepresenting research findings or promoting pseudoscientific explanations over \
             established knowledge.",
        ),
        philosophical: Some(
            "Misinformation reflects broader questions about truth, authority, expertise, and \
             the role of evidence in forming beliefs in complex modern societies.",
        ),
    },
};

/// Look up the content table for a category. Climate and financial claims
/// share the general catalog; only their scoring differs.
pub fn template_for(category: Category) -> &'static CategoryTemplate {
    match category {
        Category::VaccineConspiracy => &VACCINE,
        Category::ElectionMisinformation => &ELECTION,
        Category::HealthMisinformation => &HEALTH,
        Category::ClimateMisinformation
        | Category::FinancialMisinformation
        | Category::GeneralMisinformation => &GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_resolves_to_a_template() {
        for category in [
            Category::VaccineConspiracy,
            Category::ElectionMisinformation,
            Category::HealthMisinformation,
            Category::ClimateMisinformation,
            Category::FinancialMisinformation,
            Category::GeneralMisinformation,
        ] {
            let template = template_for(category);
            assert!(template.explanation.contains("{fact_check_phrase}"));
            assert!(template.explanation.contains("{search_phrase}"));
            assert_eq!(template.checklist.len(), 2);
        }
    }

    #[test]
    fn publisher_table_is_sorted_by_reliability() {
        let reliabilities: Vec<f64> = FACT_CHECK_PUBLISHERS.iter().map(|p| p.2).collect();
        let mut sorted = reliabilities.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(reliabilities, sorted);
    }
}

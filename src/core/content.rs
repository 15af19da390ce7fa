//! Content Template Engine: sector bundles come straight from the lookup
//! table, the general domain is synthesized from extracted features and
//! keyword cues in the description.

use crate::core::templates;
use crate::domain::model::{ContentBundle, Domain, ExtractedFeatures};
use regex::Regex;

/// The summary block never ships with fewer bullets than this.
const MIN_SUMMARY_BULLETS: usize = 12;

const FILLER_BULLETS: [&str; 4] = [
    "Advanced analytics and reporting dashboard for insights",
    "Integration with existing systems and third-party APIs",
    "Automated workflow management and process optimization",
    "Comprehensive user training and support documentation",
];

/// Keyword-conditional summary bullets; each test is independent.
const SUMMARY_FEATURE_LINES: [([&str; 2], &str); 9] = [
    (
        ["ai", "machine learning"],
        "AI-powered intelligent system with machine learning capabilities",
    ),
    (
        ["mobile", "app"],
        "Mobile-first application with cross-platform compatibility",
    ),
    (
        ["real-time", "monitoring"],
        "Real-time monitoring and alert system with dashboard analytics",
    ),
    (
        ["blockchain", "security"],
        "Blockchain-based security with end-to-end encryption",
    ),
    (
        ["iot", "sensor"],
        "IoT sensor integration for automated data collection",
    ),
    (
        ["cloud", "scalable"],
        "Cloud-native architecture ensuring scalability and reliability",
    ),
    (
        ["rural", "remote"],
        "Offline-first design for rural and remote area accessibility",
    ),
    (
        ["multilingual", "language"],
        "Multi-language support with voice-based interaction",
    ),
    (
        ["government", "policy"],
        "Government policy compliance with regulatory framework integration",
    ),
];

/// Assemble the five prose blocks for a classified problem. Total: every
/// field of the result is non-empty for any input.
pub fn build_content(
    domain: Domain,
    features: &ExtractedFeatures,
    title: &str,
    description: &str,
    enrichment_text: Option<&str>,
) -> ContentBundle {
    if let Some(bundle) = templates::domain_bundle(domain) {
        return bundle;
    }

    let desc = description.to_lowercase();
    ContentBundle {
        summary: build_summary(&desc, title, features, enrichment_text),
        technical_approach: build_technical_approach(&desc),
        feasibility: build_feasibility(&desc, features),
        impact: build_impact(&desc, features),
        references: build_references(&desc),
    }
}

fn mentions(desc: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| desc.contains(keyword))
}

fn bullet(text: impl AsRef<str>) -> String {
    format!("• {}", text.as_ref())
}

fn build_summary(
    desc: &str,
    title: &str,
    features: &ExtractedFeatures,
    enrichment_text: Option<&str>,
) -> String {
    let mut lines = vec![
        bullet(format!("Comprehensive solution addressing: {}", title)),
        bullet(format!(
            "Target stakeholders: {} with direct impact",
            features.stakeholders.join(", ")
        )),
    ];

    for (keywords, line) in &SUMMARY_FEATURE_LINES {
        if mentions(desc, keywords) {
            lines.push(bullet(line));
        }
    }

    if let Some(text) = enrichment_text {
        let cleaned = clean_enrichment(text);
        if cleaned.chars().count() > 50 {
            let first_sentence = cleaned.split('.').next().unwrap_or("").trim();
            lines.push(bullet(first_sentence));
        }
    }

    // The filler block is cycled so the floor holds from any base count.
    let mut filler = FILLER_BULLETS.iter().cycle();
    while lines.len() < MIN_SUMMARY_BULLETS {
        lines.push(bullet(*filler.next().expect("cycle never ends")));
    }

    lines.join("\n")
}

/// Strip the prompt-echo prefixes an upstream generator tends to parrot back.
fn clean_enrichment(text: &str) -> String {
    let echo = Regex::new(r"(?i)problem:|context:|solution:").unwrap();
    echo.replace_all(text, "").trim().to_string()
}

fn build_technical_approach(desc: &str) -> String {
    let mut lines = Vec::new();

    if mentions(desc, &["mobile", "app"]) {
        lines.push(bullet("React Native/Flutter for cross-platform mobile development"));
    } else {
        lines.push(bullet("React.js frontend with responsive design for web application"));
    }

    lines.push(bullet("Node.js/Express.js backend with RESTful API architecture"));

    if mentions(desc, &["blockchain"]) {
        lines.push(bullet("Hyperledger Fabric/Ethereum blockchain for immutable records"));
    }
    if mentions(desc, &["real-time", "monitoring"]) {
        lines.push(bullet("MongoDB/PostgreSQL with real-time data synchronization"));
    } else {
        lines.push(bullet("PostgreSQL/MySQL database with optimized query performance"));
    }

    if mentions(desc, &["ai", "machine learning"]) {
        lines.push(bullet("TensorFlow/PyTorch for machine learning model development"));
        lines.push(bullet("Python-based AI services with model training pipeline"));
    }

    if mentions(desc, &["iot", "sensor"]) {
        lines.push(bullet("IoT device integration with MQTT protocol for sensor data"));
        lines.push(bullet("Edge computing for local data processing and analysis"));
    }

    lines.push(bullet("AWS/Azure cloud infrastructure with auto-scaling capabilities"));
    lines.push(bullet("Docker containerization with Kubernetes orchestration"));
    lines.push(bullet("JWT authentication with role-based access control"));
    lines.push(bullet("End-to-end encryption for data security and privacy"));
    lines.push(bullet("CI/CD pipeline with automated testing and deployment"));
    lines.push(bullet("Comprehensive logging and monitoring with alerting system"));

    lines.join("\n")
}

fn build_feasibility(desc: &str, features: &ExtractedFeatures) -> String {
    let mut lines = vec![
        bullet("High technical feasibility using proven technology stack"),
        bullet(format!(
            "Strong market demand from {} community",
            features.stakeholders.join(", ")
        )),
    ];

    if mentions(desc, &["government", "ministry"]) {
        lines.push(bullet("Government support and policy alignment ensuring implementation"));
    }

    lines.push(bullet("Cost-effective solution with clear ROI within 18-24 months"));
    lines.push(bullet("Scalable architecture supporting growth from pilot to national level"));
    lines.push(bullet("Skilled development team availability in current market"));

    if mentions(desc, &["rural", "remote"]) {
        lines.push(bullet("Offline capabilities addressing connectivity challenges"));
    }

    lines.push(bullet("Regulatory compliance framework already established"));
    lines.push(bullet("Existing infrastructure compatibility reducing deployment costs"));
    lines.push(bullet("Strong vendor ecosystem support for technology components"));
    lines.push(bullet("Proven implementation methodology with risk mitigation"));
    lines.push(bullet("Clear success metrics and performance indicators defined"));

    lines.join("\n")
}

fn build_impact(desc: &str, features: &ExtractedFeatures) -> String {
    let user_scale = if mentions(desc, &["national", "india"]) {
        "1M+"
    } else if mentions(desc, &["state", "regional"]) {
        "500,000+"
    } else {
        "50,000+"
    };

    let beneficiary = features
        .stakeholders
        .first()
        .map(String::as_str)
        .unwrap_or("users");

    let mut lines = vec![bullet(format!(
        "Direct benefit to {} {} in first year of implementation",
        user_scale, beneficiary
    ))];

    if mentions(desc, &["automation", "digital"]) {
        lines.push(bullet("40-60% improvement in operational efficiency through automation"));
    } else {
        lines.push(bullet("25-35% improvement in process efficiency and user experience"));
    }

    lines.push(bullet("Annual cost savings of ₹10-50 crores through process optimization"));

    if mentions(desc, &["real-time", "monitoring"]) {
        lines.push(bullet("70% reduction in response time for critical operations"));
    } else {
        lines.push(bullet("50% reduction in manual processing time and errors"));
    }

    lines.push(bullet("Creation of 1,000+ direct and indirect employment opportunities"));

    if mentions(desc, &["health", "medical"]) {
        lines.push(bullet("Improved health outcomes for underserved populations"));
    } else if mentions(desc, &["education", "learning"]) {
        lines.push(bullet("Enhanced educational access and learning outcomes"));
    } else {
        lines.push(bullet("Improved quality of life for target beneficiary communities"));
    }

    if mentions(desc, &["environment", "green"]) {
        lines.push(bullet("Positive environmental impact through sustainable practices"));
    }

    lines.push(bullet("Contribution to Digital India mission and technology adoption"));

    if mentions(desc, &["government", "policy"]) {
        lines.push(bullet("Data-driven policy insights for evidence-based decision making"));
    }

    lines.push(bullet("Replicable model for similar challenges across other regions"));
    lines.push(bullet("Technology transfer and knowledge sharing opportunities"));
    lines.push(bullet("Enhanced India's position in global technology innovation"));

    lines.join("\n")
}

/// Reference buckets use their own keyword scan over the description,
/// independent of the domain classifier's table. Kept separate on purpose.
fn build_references(desc: &str) -> Vec<String> {
    let titles: [&str; 5] = if mentions(desc, &["health", "medical"]) {
        [
            "National Health Mission Guidelines",
            "WHO Digital Health Standards",
            "Ministry of Health Policy Framework",
            "Medical Device Regulations",
            "Healthcare Technology Assessment Reports",
        ]
    } else if mentions(desc, &["education", "learning"]) {
        [
            "National Education Policy 2020",
            "UNESCO Education Technology Reports",
            "NCERT Digital Learning Guidelines",
            "Educational Research Studies",
            "Ministry of Education Technology Framework",
        ]
    } else if mentions(desc, &["agriculture", "farm"]) {
        [
            "National Agriculture Policy",
            "ICAR Research Guidelines",
            "Ministry of Agriculture Technology Mission",
            "Precision Farming Case Studies",
            "Agricultural Innovation Reports",
        ]
    } else if mentions(desc, &["railway", "transport"]) {
        [
            "Ministry of Railways Technical Standards",
            "Transportation Research Papers",
            "Railway Safety Guidelines",
            "Infrastructure Development Reports",
            "Smart Transportation Studies",
        ]
    } else if mentions(desc, &["ayush", "ayurveda"]) {
        [
            "Ministry of AYUSH Guidelines",
            "Traditional Medicine Research",
            "Ayurvedic Standards and Protocols",
            "WHO Traditional Medicine Reports",
            "Herbal Medicine Quality Standards",
        ]
    } else {
        [
            "Government Policy Guidelines",
            "Digital India Initiative",
            "Technology Implementation Standards",
            "Industry Best Practices",
            "Research and Development Reports",
        ]
    };

    titles.iter().map(|t| t.to_string()).collect()
}

use httpmock::prelude::*;
use pitch_forge::adapters::dataset;
use pitch_forge::core::PitchRequest;
use pitch_forge::{CliConfig, ContentPipeline, InferenceChain, LocalStorage, PitchEngine};
use std::io::Read;
use tempfile::TempDir;

const DATASET: &str = r#"[
    {
        "problem_statement_id": "SIH-1425",
        "problem_statement_title": "Digital Health Monitoring Platform",
        "theme": "MedTech",
        "category": "Software",
        "description": "Develop a comprehensive digital platform for remote health monitoring and telemedicine."
    },
    {
        "problem_statement_id": "SIH-2200",
        "problem_statement_title": "Village Records Portal",
        "theme": "Governance",
        "category": "Software",
        "description": "Village offices keep paper files. Clerks need a faster filing flow. Citizens wait in queues."
    }
]"#;

fn test_config(output_path: &str, endpoints: Vec<String>) -> CliConfig {
    CliConfig {
        problems_file: String::new(),
        problem: String::new(),
        idea: String::new(),
        output_path: output_path.to_string(),
        endpoints,
        api_token: None,
        timeout_seconds: 5,
        no_enrich: false,
        verbose: false,
        monitor: false,
    }
}

async fn run_pipeline(
    output_path: &str,
    endpoints: Vec<String>,
    request: &PitchRequest,
) -> String {
    let problems = dataset::parse_problems(DATASET).unwrap();
    let config = test_config(output_path, endpoints.clone());
    let generator = InferenceChain::new(endpoints, None, 5);
    let storage = LocalStorage::new(output_path.to_string());
    let pipeline = ContentPipeline::new(problems, generator, storage, config);
    let engine = PitchEngine::new(pipeline);
    engine.run(request).await.unwrap()
}

fn read_zip_entry(zip_path: &std::path::Path, entry: &str) -> String {
    let bytes = std::fs::read(zip_path).unwrap();
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    let mut content = String::new();
    archive
        .by_name(entry)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[tokio::test]
async fn end_to_end_with_enrichment_endpoint() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let generation_mock = server.mock(|when, then| {
        when.method(POST).path("/models/bart-large-cnn");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([{
                "summary_text": "A district-level digitization drive pairs every clerk with a scanning workflow that clears the paper backlog. More detail follows."
            }]));
    });

    let request = PitchRequest {
        problem: "SIH-2200".into(),
        idea: "scan and index the ledgers".into(),
    };
    let result_path = run_pipeline(
        &output_path,
        vec![server.url("/models/bart-large-cnn")],
        &request,
    )
    .await;

    generation_mock.assert();
    assert!(result_path.ends_with("pitch_pack.zip"));

    let zip_path = temp_dir.path().join("pitch_pack.zip");
    assert!(zip_path.exists());

    let pack_json = read_zip_entry(&zip_path, "pack.json");
    let pack: serde_json::Value = serde_json::from_str(&pack_json).unwrap();
    assert_eq!(pack["aiGenerated"], true);
    assert_eq!(pack["domain"], "general");

    // The enrichment's first sentence lands in the summary as a bullet.
    let summary = read_zip_entry(&zip_path, "summary.txt");
    assert!(summary.contains("district-level digitization drive"));
    assert!(!summary.contains("More detail follows"));
}

#[tokio::test]
async fn all_endpoints_failing_matches_the_no_enrichment_run() {
    let failing_dir = TempDir::new().unwrap();
    let plain_dir = TempDir::new().unwrap();

    let server = MockServer::start();
    let broken_mock = server.mock(|when, then| {
        when.method(POST).path("/models/broken");
        then.status(500);
    });

    let request = PitchRequest {
        problem: "SIH-2200".into(),
        idea: "scan and index the ledgers".into(),
    };

    run_pipeline(
        failing_dir.path().to_str().unwrap(),
        vec![server.url("/models/broken")],
        &request,
    )
    .await;
    broken_mock.assert();

    run_pipeline(plain_dir.path().to_str().unwrap(), vec![], &request).await;

    for entry in [
        "summary.txt",
        "technical_approach.txt",
        "feasibility.txt",
        "impact.txt",
        "references.txt",
        "pack.json",
        "slides.json",
    ] {
        assert_eq!(
            read_zip_entry(&failing_dir.path().join("pitch_pack.zip"), entry),
            read_zip_entry(&plain_dir.path().join("pitch_pack.zip"), entry),
            "{} differs between failing-enrichment and no-enrichment runs",
            entry
        );
    }
}

#[tokio::test]
async fn identical_requests_produce_identical_packs() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let request = PitchRequest {
        problem: "Digital Health Monitoring Platform".into(),
        idea: "wearable vitals mesh for rural clinics".into(),
    };

    run_pipeline(first_dir.path().to_str().unwrap(), vec![], &request).await;
    run_pipeline(second_dir.path().to_str().unwrap(), vec![], &request).await;

    assert_eq!(
        read_zip_entry(&first_dir.path().join("pitch_pack.zip"), "pack.json"),
        read_zip_entry(&second_dir.path().join("pitch_pack.zip"), "pack.json"),
    );
}

#[tokio::test]
async fn healthcare_problem_routes_to_sector_content_and_documented_scores() {
    let temp_dir = TempDir::new().unwrap();

    let request = PitchRequest {
        problem: "SIH-1425".into(),
        idea: "AI-powered telemedicine assistant".into(),
    };
    run_pipeline(temp_dir.path().to_str().unwrap(), vec![], &request).await;

    let zip_path = temp_dir.path().join("pitch_pack.zip");
    let pack: serde_json::Value =
        serde_json::from_str(&read_zip_entry(&zip_path, "pack.json")).unwrap();

    assert_eq!(pack["domain"], "healthcare");
    assert_eq!(
        pack["references"][0],
        "National Health Mission Guidelines 2024"
    );
    assert_eq!(pack["references"].as_array().unwrap().len(), 5);

    // "ai" and "digital" hit the innovation list; scores stay in band.
    assert_eq!(pack["scores"]["novelty"], 10);
    let feasibility = pack["scores"]["feasibility"].as_u64().unwrap();
    let impact = pack["scores"]["impact"].as_u64().unwrap();
    assert!((9..=10).contains(&feasibility));
    assert!((9..=10).contains(&impact));

    let slides: serde_json::Value =
        serde_json::from_str(&read_zip_entry(&zip_path, "slides.json")).unwrap();
    assert_eq!(slides["keyFeatures"].as_array().unwrap().len(), 6);
    assert_eq!(slides["technologies"].as_array().unwrap().len(), 7);
    assert_eq!(slides["citations"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_problem_fails_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let problems = dataset::parse_problems(DATASET).unwrap();
    let config = test_config(&output_path, vec![]);
    let generator = InferenceChain::new(vec![], None, 5);
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ContentPipeline::new(problems, generator, storage, config);
    let engine = PitchEngine::new(pipeline);

    let result = engine
        .run(&PitchRequest {
            problem: "SIH-0000".into(),
            idea: String::new(),
        })
        .await;
    assert!(result.is_err());
}

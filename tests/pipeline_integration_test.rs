use blocklist_etl::domain::model::{Institution, ParsePolicy};
use blocklist_etl::{
    BlocklistPipeline, CliConfig, EtlEngine, HttpClient, LocalStorage, Registry, RetryPolicy,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn cli_config(server: &MockServer, output_path: &str) -> CliConfig {
    CliConfig {
        doh_endpoint: server.url("/resolve"),
        output_path: output_path.to_string(),
        registry: None,
        verbose: false,
    }
}

fn quick_http() -> HttpClient {
    HttpClient::new(RetryPolicy {
        max_attempts: 2,
        base_delay: Duration::from_millis(1),
        ..RetryPolicy::default()
    })
}

fn mock_doh(server: &MockServer, domain: &str, answer: Option<&str>) {
    let body = match answer {
        Some(ip) => serde_json::json!({
            "Status": 0,
            "Answer": [{"name": format!("{}.", domain), "type": 1, "TTL": 300, "data": ip}]
        }),
        None => serde_json::json!({"Status": 3}),
    };
    server.mock(|when, then| {
        when.method(GET)
            .path("/resolve")
            .query_param("name", domain)
            .query_param("type", "A");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(body);
    });
}

#[tokio::test]
async fn test_end_to_end_plain_line_institution() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/neleg.txt");
        then.status(200).body("a.example\n\nb.example\n");
    });
    mock_doh(&server, "a.example", Some("1.2.3.4"));
    mock_doh(&server, "b.example", None);

    let registry = Registry::new(vec![Institution {
        name: "Test Regulator".to_string(),
        source_url: server.url("/neleg.txt"),
        block_ips: vec!["127.0.0.1".to_string()],
        parsing_policy: ParsePolicy::PlainLines,
    }]);

    let storage = LocalStorage::new(output_path.clone());
    let config = cli_config(&server, &output_path);
    let pipeline = BlocklistPipeline::new(storage, config, registry, quick_http());
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_ok());
    list_mock.assert();

    // Pretty JSON: one institution report, two resolved domains in
    // source order, 4-space indentation.
    let pretty_path = temp_dir.path().join("isp-blocked-domains.json");
    let pretty = std::fs::read_to_string(&pretty_path).unwrap();
    assert!(pretty.starts_with("[\n    {"));

    let report: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(report.as_array().unwrap().len(), 1);
    assert_eq!(report[0]["institution"]["name"], "Test Regulator");

    let resolved = report[0]["resolved_domains"].as_array().unwrap();
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0]["domain"], "a.example");
    assert_eq!(resolved[0]["status"], 0);
    assert_eq!(resolved[0]["ips"][0], "1.2.3.4");
    assert_eq!(resolved[1]["domain"], "b.example");
    assert_eq!(resolved[1]["status"], 3);
    assert!(resolved[1]["ips"].as_array().unwrap().is_empty());

    // Compact JSON carries the same report without whitespace.
    let compact_path = temp_dir.path().join("isp-blocked-domains.min.json");
    let compact = std::fs::read_to_string(&compact_path).unwrap();
    assert!(!compact.contains('\n'));
    let compact_report: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(compact_report, report);

    // CSV: header plus exactly two data rows, in order.
    let csv_path = temp_dir.path().join("isp-blocked-domains.csv");
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        csv,
        "domain,record_exists,institution\n\
         a.example,1,Test Regulator\n\
         b.example,0,Test Regulator\n"
    );
}

#[tokio::test]
async fn test_end_to_end_csv_url_column_institution() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/illegalwww");
        then.status(200)
            .body("url;kind\nhttp://www.example.com/x;casino\nhttp://sub.example.com;betting\n");
    });
    mock_doh(&server, "example.com", Some("93.184.216.34"));
    mock_doh(&server, "sub.example.com", None);

    let registry = Registry::new(vec![Institution {
        name: "Bank Supervisor".to_string(),
        source_url: server.url("/illegalwww"),
        block_ips: vec!["10.0.0.1".to_string()],
        parsing_policy: ParsePolicy::CsvUrlColumn,
    }]);

    let storage = LocalStorage::new(output_path.clone());
    let config = cli_config(&server, &output_path);
    let pipeline = BlocklistPipeline::new(storage, config, registry, quick_http());
    let engine = EtlEngine::new(pipeline);

    engine.run().await.unwrap();

    let csv = std::fs::read_to_string(temp_dir.path().join("isp-blocked-domains.csv")).unwrap();
    assert_eq!(
        csv,
        "domain,record_exists,institution\n\
         example.com,1,Bank Supervisor\n\
         sub.example.com,0,Bank Supervisor\n"
    );
}

#[tokio::test]
async fn test_end_to_end_registry_from_toml_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/list.txt");
        then.status(200).body("a.example\n");
    });
    mock_doh(&server, "a.example", Some("1.2.3.4"));

    let registry_path = temp_dir.path().join("registry.toml");
    std::fs::write(
        &registry_path,
        format!(
            "[[institutions]]\n\
             name = \"File Regulator\"\n\
             source_url = \"{}\"\n\
             block_ips = [\"127.0.0.1\"]\n",
            server.url("/list.txt")
        ),
    )
    .unwrap();

    let registry = Registry::from_toml_file(&registry_path).unwrap();

    let storage = LocalStorage::new(output_path.clone());
    let config = cli_config(&server, &output_path);
    let pipeline = BlocklistPipeline::new(storage, config, registry, quick_http());
    let engine = EtlEngine::new(pipeline);

    engine.run().await.unwrap();

    let csv = std::fs::read_to_string(temp_dir.path().join("isp-blocked-domains.csv")).unwrap();
    assert_eq!(
        csv,
        "domain,record_exists,institution\na.example,1,File Regulator\n"
    );
}

#[tokio::test]
async fn test_failed_fetch_aborts_run_without_writing_files() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/missing.txt");
        then.status(404);
    });

    let registry = Registry::new(vec![Institution {
        name: "Gone Regulator".to_string(),
        source_url: server.url("/missing.txt"),
        block_ips: vec![],
        parsing_policy: ParsePolicy::PlainLines,
    }]);

    let storage = LocalStorage::new(output_path.clone());
    let config = cli_config(&server, &output_path);
    let pipeline = BlocklistPipeline::new(storage, config, registry, quick_http());
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_err());
    // 404 is not in the retryable set, so there is exactly one request.
    assert_eq!(list_mock.hits(), 1);

    assert!(!temp_dir.path().join("isp-blocked-domains.json").exists());
    assert!(!temp_dir.path().join("isp-blocked-domains.min.json").exists());
    assert!(!temp_dir.path().join("isp-blocked-domains.csv").exists());
}

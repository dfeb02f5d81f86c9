use franchise_app::server;
use franchise_app::CliConfig;
use serde_json::{json, Value};
use tempfile::TempDir;

async fn start(config: CliConfig) -> String {
    let app = server::build_app(&config).unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_end_to_end_with_redb_store() {
    let temp_dir = TempDir::new().unwrap();
    let config = CliConfig {
        store: "redb".to_string(),
        data_path: temp_dir
            .path()
            .join("franchises.redb")
            .to_str()
            .unwrap()
            .to_string(),
        ..CliConfig::default()
    };
    let base = start(config).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/franchises", base))
        .json(&json!({"name": "Acme"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let franchise: Value = response.json().await.unwrap();
    let id = franchise["id"].as_str().unwrap().to_string();

    let response = client
        .post(format!("{}/franchises/{}/branches", base, id))
        .json(&json!({
            "id": "b1",
            "name": "North",
            "products": [{"id": "p1", "name": "Soda", "stock": 3}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .put(format!(
            "{}/franchises/{}/branches/b1/products/p1/stock",
            base, id
        ))
        .query(&[("newStock", "12")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let product: Value = response.json().await.unwrap();
    assert_eq!(product["stock"], 12);

    let report: Value = client
        .get(format!("{}/franchises/{}/products/max-stock", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        report,
        json!([{"branchName": "North", "product": {"id": "p1", "name": "Soda", "stock": 12}}])
    );

    let response = client
        .delete(format!("{}/franchises/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/franchises/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_end_to_end_with_memory_store() {
    let config = CliConfig {
        store: "memory".to_string(),
        ..CliConfig::default()
    };
    let base = start(config).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/franchises", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let all: Value = response.json().await.unwrap();
    assert_eq!(all, json!([]));

    let response = client
        .put(format!("{}/franchises/missing/name", base))
        .query(&[("newName", "x")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "FRANCHISE_NOT_FOUND");
}

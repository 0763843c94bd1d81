use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tempfile::TempDir;

struct TestApp {
    base_url: String,
    cfg: AppConfig,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    async fn stop(mut self) -> anyhow::Result<AppConfig> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.task.await??;
        Ok(self.cfg)
    }
}

/// Isolated SQLite file per test; it is deleted when the `TempDir` drops.
fn temp_config() -> anyhow::Result<(AppConfig, TempDir)> {
    let dir = tempfile::Builder::new().prefix("rpg-store-e2e-").tempdir()?;
    let mut cfg = AppConfig::default();
    cfg.database.url = format!("sqlite://{}?mode=rwc", dir.path().join("rpg.db").display());
    Ok((cfg, dir))
}

async fn start_server(cfg: AppConfig) -> anyhow::Result<TestApp> {
    let (app, db) = server::startup::prepare(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let task = tokio::spawn(server::startup::serve(
        listener,
        app,
        db,
        async move {
            let _ = rx.await;
        },
        cfg.server.shutdown_grace(),
    ));

    Ok(TestApp { base_url, cfg, shutdown: Some(tx), task })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_liveness_probes() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let c = client();

    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    assert!(body["message"].is_string());
    assert!(body["timestamp"].is_string());

    let res = c.get(format!("{}/api/ping", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["timestamp"].as_i64().is_some());

    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_character_save_then_load() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let c = client();

    let res = c
        .post(format!("{}/api/character/save", app.base_url))
        .json(&json!({"username": "alice", "data": "{\"hp\":10}"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["success"], true);

    let res = c.get(format!("{}/api/character/load/alice", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"data": "{\"hp\":10}"}));

    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_missing_character_is_404() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let res = client()
        .get(format!("{}/api/character/load/nonexistent", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_room_players_and_default() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let c = client();

    let res = c
        .post(format!("{}/api/room/players", app.base_url))
        .json(&json!({"roomId": "r1", "players": "[\"a\",\"b\"]"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/room/players/r1", app.base_url)).send().await?;
    assert_eq!(res.json::<Value>().await?, json!({"players": "[\"a\",\"b\"]"}));

    let res = c.get(format!("{}/api/room/players/r-unused", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"players": "[]"}));

    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_inventory_missing_data_is_rejected() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let c = client();

    let res = c
        .post(format!("{}/api/inventory/save", app.base_url))
        .json(&json!({"username": "bob"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert!(res.json::<Value>().await?["error"].is_string());

    let res = c
        .post(format!("{}/api/inventory/save", app.base_url))
        .json(&json!({"username": "", "data": "x"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    // nothing was stored
    let res = c.get(format!("{}/api/inventory/load/bob", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_overwrite_and_namespace_isolation() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let c = client();
    let base = &app.base_url;

    for data in ["P1", "P2"] {
        let res = c
            .post(format!("{base}/api/inventory/save"))
            .json(&json!({"username": "dana", "data": data}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }
    let res = c.get(format!("{base}/api/inventory/load/dana")).send().await?;
    assert_eq!(res.json::<Value>().await?["data"], "P2");

    // same key, other namespaces untouched
    let res = c.get(format!("{base}/api/character/load/dana")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.get(format!("{base}/api/room/players/dana")).send().await?;
    assert_eq!(res.json::<Value>().await?["players"], "[]");

    app.stop().await?;
    Ok(())
}

#[tokio::test]
async fn e2e_records_survive_restart() -> anyhow::Result<()> {
    let (cfg, _dir) = temp_config()?;
    let app = start_server(cfg).await?;
    let res = client()
        .post(format!("{}/api/character/save", app.base_url))
        .json(&json!({"username": "erin", "data": "{\"lvl\":7}"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let cfg = app.stop().await?;

    let app = start_server(cfg).await?;
    let res = client().get(format!("{}/api/character/load/erin", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["data"], "{\"lvl\":7}");
    app.stop().await?;
    Ok(())
}

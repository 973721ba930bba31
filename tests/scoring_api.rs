//! End-to-end tests against an in-process stub of the prediction API.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use maintenance_dashboard::api::Session;
use maintenance_dashboard::error::PredictError;
use maintenance_dashboard::logic::model::{PredictionRequest, RiskThresholds};
use maintenance_dashboard::{
    Config, DashboardState, MachineType, PredictionClient, RawReading, RiskLevel, SubmitError,
};

type Seen = Arc<Mutex<Vec<Value>>>;

/// Scores by tool wear and bands the probability the way the real service does
async fn predict_by_wear(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    let wear = body["tool_wear_min"].as_f64().unwrap_or(0.0);
    seen.lock().unwrap().push(body);

    let p = (wear / 250.0).clamp(0.0, 1.0);
    let risk = RiskThresholds::default().classify(p);
    Json(json!({ "failure_probability": p, "risk_level": risk.as_str() }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_scoring_api() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/predict", post(predict_by_wear))
        .route("/health", get(health))
        .with_state(seen.clone());
    (spawn(router).await, seen)
}

fn client_for(url: &str) -> PredictionClient {
    PredictionClient::new(Config::default().with_api_url(Some(url))).unwrap()
}

fn m1() -> RawReading {
    RawReading {
        id: "M1".to_string(),
        machine_type: MachineType::H,
        air_temperature_k: 300.0,
        process_temperature_k: 310.0,
        rotational_speed_rpm: 1500.0,
        torque_nm: 40.0,
        tool_wear_min: 5.0,
    }
}

#[tokio::test]
async fn test_fixed_response_end_to_end() {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route(
            "/predict",
            post(|State(seen): State<Seen>, Json(body): Json<Value>| async move {
                seen.lock().unwrap().push(body);
                Json(json!({ "failure_probability": 0.37, "risk_level": "Yellow" }))
            }),
        )
        .with_state(seen.clone());
    let url = spawn(router).await;

    let mut state = DashboardState::new();
    let result = state.submit(&client_for(&url), m1()).await.unwrap();
    assert_eq!(result.failure_probability, 0.37);
    assert_eq!(result.risk_level, RiskLevel::Yellow);

    let assets = state.registry().all();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].id, "M1");
    assert_eq!(assets[0].risk_level, RiskLevel::Yellow);

    let bodies = seen.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert!(body.get("id").is_none());
    assert_eq!(body["type"], "H");
    assert_eq!(body["power"], 60_000.0);
    assert_eq!(body["temperature_difference"], 10.0);
    assert_eq!(body["power_wear"], 300_000.0);
    assert!((body["temperature_power"].as_f64().unwrap() - 10.0 / 60_000.0).abs() < 1e-12);
    assert_eq!(body["type_l"], 0);
    assert_eq!(body["type_m"], 0);
}

#[tokio::test]
async fn test_server_error_is_generic_and_leaves_registry() {
    let router = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );
    let url = spawn(router).await;
    let client = client_for(&url);

    let request = PredictionRequest::from_reading(&m1());
    assert_eq!(client.predict(&request).await, Err(PredictError::Server(500)));

    let mut state = DashboardState::new();
    let err = state.submit(&client, m1()).await.unwrap_err();
    assert!(matches!(err, SubmitError::PredictionUnavailable(PredictError::Server(500))));
    assert!(state.registry().is_empty());
    assert!(state.error().is_some());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let router = Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "probability": 0.2 })) }),
    );
    let url = spawn(router).await;

    let request = PredictionRequest::from_reading(&m1());
    let err = client_for(&url).predict(&request).await.unwrap_err();
    assert!(matches!(err, PredictError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut state = DashboardState::new();
    let err = state.submit(&client_for(&url), m1()).await.unwrap_err();
    assert!(matches!(err, SubmitError::PredictionUnavailable(PredictError::Network(_))));
    assert!(state.registry().is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let (url, _) = spawn_scoring_api().await;
    let status = client_for(&url).health_check().await.unwrap();
    assert!(status.is_ok());
}

#[tokio::test]
async fn test_zero_power_sends_null() {
    let (url, seen) = spawn_scoring_api().await;
    let idle = RawReading {
        id: "IDLE".to_string(),
        torque_nm: 0.0,
        ..m1()
    };

    let mut state = DashboardState::new();
    state.submit(&client_for(&url), idle).await.unwrap();

    let bodies = seen.lock().unwrap();
    assert!(bodies[0]["temperature_power"].is_null());
    assert_eq!(bodies[0]["power"], 0.0);
}

#[tokio::test]
async fn test_session_script() {
    let (url, seen) = spawn_scoring_api().await;
    let mut session = Session::new(client_for(&url));

    let script = "\
kpi
predict id=A type=L air=300 process=310 rpm=1500 torque=40 wear=10
predict id=B wear=200
predict id=C wear=60
predict id=A wear=240
bogus
table
summary
quit
predict id=NEVER
";
    let mut output = Vec::new();
    session
        .run(tokio::io::BufReader::new(script.as_bytes()), &mut output)
        .await
        .unwrap();
    let text = String::from_utf8(output).unwrap();

    assert!(text.contains("No assets yet"));
    assert!(text.contains("unknown command 'bogus'"));
    assert!(text.contains("Bye."));
    assert_eq!(seen.lock().unwrap().len(), 4);

    // B inherits A's form values except the edited fields
    let b = seen.lock().unwrap()[1].clone();
    assert_eq!(b["type"], "L");
    assert_eq!(b["tool_wear_min"], 200.0);

    let state = session.state();
    let ids: Vec<&str> = state.registry().all().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);

    let table: Vec<&str> = state.table().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(table, vec!["A", "B", "C"]);

    let summary = state.summary();
    assert_eq!(summary.count(RiskLevel::Red), 2);
    assert_eq!(summary.count(RiskLevel::Yellow), 1);
    assert_eq!(summary.count(RiskLevel::Green), 0);
    assert!(text.contains("Fleet health (3 assets)"));
}

#[tokio::test]
async fn test_load_csv_without_torque_does_not_call_api() {
    let (url, seen) = spawn_scoring_api().await;
    let mut session = Session::new(client_for(&url));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reading.csv");
    std::fs::write(
        &path,
        "UDI,Type,Air temperature [K],Process temperature [K],Rotational speed [rpm],Tool wear [min]\n1,H,300,310,1500,5\n",
    )
    .unwrap();

    let reply = session
        .execute(maintenance_dashboard::api::Command::Load(path))
        .await;
    assert!(!reply.success);
    assert!(reply.text.contains("Torque [Nm]"));
    assert!(seen.lock().unwrap().is_empty());
    assert!(session.state().registry().is_empty());
}

#[tokio::test]
async fn test_load_csv_scores_first_row() {
    let (url, seen) = spawn_scoring_api().await;
    let mut session = Session::new(client_for(&url));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reading.csv");
    std::fs::write(
        &path,
        "UDI,Product ID,Type,Air temperature [K],Process temperature [K],Rotational speed [rpm],Torque [Nm],Tool wear [min]\n\
         42,M14860,M,298.1,308.6,1551,42.8,50\n\
         43,L47181,L,298.2,308.7,1408,46.3,3\n",
    )
    .unwrap();

    let reply = session
        .execute(maintenance_dashboard::api::Command::Load(path))
        .await;
    assert!(reply.success, "{}", reply.text);
    assert!(reply.text.contains("Machine 42"));
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(seen.lock().unwrap()[0]["type_m"], 1);

    let asset = session.state().registry().get("42").unwrap();
    assert_eq!(asset.risk_level, RiskLevel::Yellow);
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let (url, _) = spawn_scoring_api().await;
    let mut session = Session::new(client_for(&url));

    let reply = session
        .execute(maintenance_dashboard::api::Command::Load("/nonexistent/reading.csv".into()))
        .await;
    assert!(!reply.success);
    assert!(reply.text.contains("Cannot read"));
}

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{router, state::AppState};

fn app() -> Router {
    router(AppState::standard())
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn roster() -> Value {
    json!([
        { "id": 1, "name": "Ana", "weight": 61.5 },
        { "id": 2, "name": "Bruno", "weight": 70 },
        { "id": 3, "name": "Carla", "weight": 64 }
    ])
}

#[tokio::test]
async fn test_catalog() {
    let (status, body) = get("/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["beltRanks"].as_array().unwrap().len(), 19);
    assert_eq!(body["ageCategories"].as_array().unwrap().len(), 14);
}

#[tokio::test]
async fn test_weight_classes_for_gender() {
    let (status, body) = get("/api/catalog/weight-classes?gender=FEMALE").await;
    assert_eq!(status, StatusCode::OK);
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 8);
    assert_eq!(classes[0]["value"], "ROOSTER");
    assert_eq!(classes[0]["max"], 48.5);

    let (_, body) = get("/api/catalog/weight-classes?gender=NOT_APPLICABLE").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_weight_classes_unknown_gender() {
    let (status, body) = get("/api/catalog/weight-classes?gender=OTHER").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown gender: 'OTHER'");
}

#[tokio::test]
async fn test_age() {
    let (status, body) = get("/api/age?dateOfBirth=2000-06-02&today=2025-06-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "age": 24, "display": "24" }));

    let (_, body) = get("/api/age?today=2025-06-01").await;
    assert_eq!(body, json!({ "age": null, "display": "N/A" }));

    let (_, body) = get("/api/age?dateOfBirth=2030-01-01&today=2025-06-01").await;
    assert_eq!(body["display"], "N/A");
}

#[tokio::test]
async fn test_age_rejects_bad_reference_date() {
    let (status, _) = get("/api/age?dateOfBirth=2000-01-01&today=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_match_time_for_youth_division() {
    let (status, body) = post(
        "/api/match-times",
        json!({ "ageCategory": "MIGHTY_MITE", "beltRank": "BLACK" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seconds"], 120);
    assert_eq!(body["clock"], "2:00");
    assert_eq!(body["isDefault"], false);
}

#[tokio::test]
async fn test_match_time_by_belt() {
    let (_, body) = post(
        "/api/match-times",
        json!({ "ageCategory": "ADULT", "beltRank": "BROWN" }),
    )
    .await;
    assert_eq!(body["seconds"], 480);
    assert_eq!(body["minutes"], 8.0);
}

#[tokio::test]
async fn test_match_time_without_division() {
    let request = Request::post("/api/match-times")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seconds"], 300);
    assert_eq!(body["isDefault"], true);

    let (_, body) = post("/api/match-times", json!({})).await;
    assert_eq!(body["seconds"], 300);
    assert_eq!(body["source"], "default (unrecognized division)");
}

#[tokio::test]
async fn test_match_time_malformed_body() {
    let request = Request::post("/api/match-times")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_pairings() {
    let (status, body) = post(
        "/api/pairings/validate",
        json!({
            "pairs": [
                { "athlete1": 1, "athlete2": 2 },
                { "athlete1": 2, "athlete2": 3 }
            ],
            "roster": roster()
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);
    assert_eq!(
        body["errors"],
        json!(["Match 2: athlete Bruno is already paired in match 1"])
    );

    let (_, body) = post(
        "/api/pairings/validate",
        json!({ "pairs": [{ "athlete1": 1, "athlete2": 3 }], "roster": roster() }),
    )
    .await;
    assert_eq!(body, json!({ "valid": true, "errors": [] }));
}

#[tokio::test]
async fn test_pairing_candidates() {
    let (status, body) = post(
        "/api/pairings/candidates",
        json!({
            "pairs": [
                { "athlete1": 1, "athlete2": null },
                { "athlete1": 2, "athlete2": null }
            ],
            "roster": roster(),
            "pairIndex": 0,
            "slot": "athlete2"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|athlete| athlete["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3]);
}

#[tokio::test]
async fn test_bracket_rounds() {
    let (status, body) = post(
        "/api/brackets/rounds",
        json!([
            { "id": 1, "roundNumber": 1, "matchNumber": 2, "status": "COMPLETED" },
            { "id": 2, "roundNumber": 1, "matchNumber": 1, "status": "COMPLETED" },
            { "id": 3, "roundNumber": 2, "matchNumber": 1, "status": "PENDING" }
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Semi-Finals");
    assert_eq!(body[0]["matches"][0]["id"], 2);
    assert_eq!(body[0]["completed"], 2);
    assert_eq!(body[1]["name"], "Final");
    assert_eq!(body[1]["pending"], 1);
}

#[tokio::test]
async fn test_validate_division() {
    let (status, body) = post(
        "/api/divisions/validate",
        json!({
            "beltRank": "BLUE",
            "ageCategory": "ADULT",
            "gender": "MALE",
            "weightClass": "MEDIUM_HEAVY"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "Adult Male Blue Belt Medium Heavy");
    assert_eq!(body["matchDuration"]["seconds"], 360);
}

#[tokio::test]
async fn test_validate_division_rejects_weight_without_gender() {
    let (status, body) = post(
        "/api/divisions/validate",
        json!({
            "beltRank": "BLUE",
            "ageCategory": "ADULT",
            "gender": "NOT_APPLICABLE",
            "weightClass": "LIGHT"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"],
        json!(["Weight class does not apply when gender is NOT_APPLICABLE"])
    );
}

#[tokio::test]
async fn test_validate_athlete() {
    let (status, body) = post(
        "/api/athletes/validate",
        json!({
            "name": "John Silva",
            "dateOfBirth": "1990-01-15",
            "gender": "MALE",
            "beltRank": "PURPLE",
            "weight": 82.5
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weightClass"], "MEDIUM_HEAVY");
    assert!(body["age"].as_u64().unwrap() >= 35);
}

#[tokio::test]
async fn test_validate_athlete_rejects_bad_fields() {
    let (status, body) = post(
        "/api/athletes/validate",
        json!({
            "name": "",
            "dateOfBirth": "1990-01-15",
            "gender": "FEMALE",
            "beltRank": "WHITE",
            "weight": 0,
            "email": "not-an-email"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_array().unwrap();
    assert_eq!(details.len(), 3);
    assert!(details.contains(&json!("weight: Weight must be greater than zero")));
}

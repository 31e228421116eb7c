//! Integration tests for the Pokerun API endpoints.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` over the
//! in-memory store, without starting a TCP server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use pokerun_roster::{MemoryStore, RosterService};
use pokerun_server::config::{SeedGame, SeedSection};
use pokerun_server::seed::seed_memory_store;
use pokerun_server::{AppState, PLAYER_HEADER, build_router};
use pokerun_species::{SpeciesConfig, SpeciesSource};
use pokerun_types::PlayerId;
use serde_json::{Value, json};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    admin: PlayerId,
}

fn offline_species() -> Arc<SpeciesSource> {
    // Nothing listens on the discard port, so every catalog load fails fast.
    Arc::new(
        SpeciesSource::new(SpeciesConfig {
            api_url: String::from("http://127.0.0.1:9"),
            catalog_limit: 10,
            request_timeout_ms: 500,
        })
        .unwrap(),
    )
}

async fn make_app_with(store: MemoryStore, call_timeout: Duration) -> TestApp {
    let admin = PlayerId::new();
    let seed = SeedSection {
        games: vec![
            SeedGame {
                name: String::from("Kanto"),
                routes: vec![String::from("Route 1"), String::from("Viridian Forest")],
            },
            SeedGame {
                name: String::from("Johto"),
                routes: vec![String::from("Route 29")],
            },
        ],
        admins: vec![admin.into_inner()],
        active_game: Some(String::from("Kanto")),
    };
    seed_memory_store(&store, &seed).await.unwrap();

    let roster = RosterService::new(Arc::new(store), call_timeout);
    TestApp {
        router: build_router(AppState::new(roster, offline_species())),
        admin,
    }
}

async fn make_app() -> TestApp {
    make_app_with(MemoryStore::new(), Duration::from_secs(2)).await
}

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    player: Option<PlayerId>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = player {
        builder = builder.header(PLAYER_HEADER, id.to_string());
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn route_id(app: &TestApp, name: &str) -> i64 {
    let (status, routes) = send(app, Method::GET, "/api/routes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    routes
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == name)
        .and_then(|r| r["id"].as_i64())
        .expect("seeded route")
}

async fn record(app: &TestApp, player: PlayerId, creature: &str, nickname: &str) -> Value {
    let route = route_id(app, "Route 1").await;
    let (status, capture) = send(
        app,
        Method::POST,
        "/api/me/captures",
        Some(player),
        Some(json!({
            "creature_name": creature,
            "nickname": nickname,
            "route_id": route,
            "status": "alive",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{capture}");
    capture
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_health() {
    let app = make_app().await;
    let (status, json) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_me_requires_identity() {
    let app = make_app().await;
    let (status, json) = send(&app, Method::GET, "/api/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["kind"], "unauthenticated");
    assert_eq!(json["status"], 401);
}

#[tokio::test]
async fn test_register_and_fetch_profile() {
    let app = make_app().await;
    let player = PlayerId::new();

    let (status, json) = send(&app, Method::GET, "/api/me", Some(player), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["kind"], "profile_not_found");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me",
        Some(player),
        Some(json!({"display_name": "  Misty "})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["display_name"], "Misty");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/avatar",
        Some(player),
        Some(json!({"avatar_key": "squirtle"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["avatar_key"], "squirtle");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/avatar",
        Some(player),
        Some(json!({"avatar_key": "missingno"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "unknown_avatar");

    let (status, json) = send(&app, Method::GET, "/api/players", None, None).await;
    assert_eq!(status, StatusCode::OK);
    // The seeded admin has a profile too.
    assert_eq!(json["count"], 2);
}

#[tokio::test]
async fn test_capture_validation_statuses() {
    let app = make_app().await;
    let player = PlayerId::new();
    let johto_route = route_id(&app, "Route 29").await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/me/captures",
        Some(player),
        Some(json!({
            "creature_name": "Sentret",
            "nickname": "Scout",
            "route_id": johto_route,
            "status": "alive",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "invalid_route");

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/me/captures",
        Some(player),
        Some(json!({
            "creature_name": "   ",
            "nickname": "Scout",
            "route_id": johto_route,
            "status": "alive",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "missing_field");
}

#[tokio::test]
async fn test_team_assignment_and_cascade() {
    let app = make_app().await;
    let player = PlayerId::new();
    let charmander = record(&app, player, "Charmander", "Flame").await;
    record(&app, player, "Pidgey", "Bird").await;

    let (status, slot) = send(
        &app,
        Method::PUT,
        "/api/me/team/1",
        Some(player),
        Some(json!({"creature_name": "charmander"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slot["creature_name"], "Charmander");
    assert_eq!(slot["nickname"], "Flame");
    assert_eq!(slot["slot"], 1);

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/team/2",
        Some(player),
        Some(json!({"creature_name": "Charmander "})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["kind"], "duplicate_in_roster");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/team/2",
        Some(player),
        Some(json!({"creature_name": "Mew"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "ineligible_creature");

    let (status, eligible) = send(
        &app,
        Method::GET,
        "/api/me/team/eligible?slot=2",
        Some(player),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = eligible
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["creature_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pidgey"]);

    let id = charmander["id"].as_i64().unwrap();
    let (status, update) = send(
        &app,
        Method::PATCH,
        &format!("/api/me/captures/{id}"),
        Some(player),
        Some(json!({"status": "dead"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(update["capture"]["status"], "dead");
    assert_eq!(update["cleared_slots"].as_array().unwrap().len(), 1);
    assert_eq!(update["cleared_slots"][0]["slot"], 1);

    let (status, team) = send(&app, Method::GET, "/api/me/team", Some(player), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(team.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_slot_path_validation_and_clear() {
    let app = make_app().await;
    let player = PlayerId::new();

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/team/7",
        Some(player),
        Some(json!({"creature_name": "Pikachu"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "invalid_slot");

    let (status, json) = send(&app, Method::DELETE, "/api/me/team/one", Some(player), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "bad_request");

    let (status, json) = send(&app, Method::DELETE, "/api/me/team/3", Some(player), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slot"], 3);
    assert!(json["cleared"].is_null());
}

#[tokio::test]
async fn test_other_players_capture_is_hidden() {
    let app = make_app().await;
    let owner = PlayerId::new();
    let intruder = PlayerId::new();
    let capture = record(&app, owner, "Rattata", "Rat").await;
    let id = capture["id"].as_i64().unwrap();

    let (status, json) = send(
        &app,
        Method::DELETE,
        &format!("/api/me/captures/{id}"),
        Some(intruder),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["kind"], "capture_not_found");

    let (status, json) = send(&app, Method::GET, "/api/me/captures", Some(owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_admin_only_mutations() {
    let app = make_app().await;
    let player = PlayerId::new();

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/rules",
        Some(player),
        Some(json!({"content": "Nuzlocke rules"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["kind"], "forbidden");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/rules",
        Some(app.admin),
        Some(json!({"content": "Nuzlocke rules"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"], "Nuzlocke rules");

    let (_, games) = send(&app, Method::GET, "/api/games", None, None).await;
    let johto = games
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["name"] == "Johto")
        .and_then(|g| g["id"].as_i64())
        .unwrap();

    let (status, run) = send(
        &app,
        Method::PUT,
        "/api/run",
        Some(app.admin),
        Some(json!({"active_game_id": johto})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(run["active_game_id"], johto);

    let (status, routes) = send(&app, Method::GET, "/api/routes/offerable", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(routes[0]["name"], "Route 29");

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/run",
        Some(app.admin),
        Some(json!({"active_game_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["kind"], "unknown_game");
}

#[tokio::test]
async fn test_progress_and_ranking() {
    let app = make_app().await;
    let brock = PlayerId::new();
    let misty = PlayerId::new();
    for (id, name) in [(brock, "Brock"), (misty, "Misty")] {
        send(&app, Method::PUT, "/api/me", Some(id), Some(json!({"display_name": name}))).await;
    }

    let (status, json) = send(&app, Method::GET, "/api/me/progress", Some(brock), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["badges"], 0);

    let (status, json) = send(
        &app,
        Method::PUT,
        "/api/me/progress",
        Some(brock),
        Some(json!({"badges": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["badges"], 8);

    send(
        &app,
        Method::PUT,
        "/api/me/progress",
        Some(misty),
        Some(json!({"badges": 3.7})),
    )
    .await;

    let (status, ranking) = send(&app, Method::GET, "/api/ranking", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranking[0]["display_name"], "Brock");
    assert_eq!(ranking[0]["position"], 1);
    assert_eq!(ranking[1]["display_name"], "Misty");
    assert_eq!(ranking[1]["badges"], 3);
}

#[tokio::test]
async fn test_boards() {
    let app = make_app().await;
    let player = PlayerId::new();
    send(&app, Method::PUT, "/api/me", Some(player), Some(json!({"display_name": "Red"}))).await;
    record(&app, player, "Pikachu", "Sparky").await;
    send(
        &app,
        Method::PUT,
        "/api/me/team/1",
        Some(player),
        Some(json!({"creature_name": "Pikachu"})),
    )
    .await;

    let (status, teams) = send(&app, Method::GET, "/api/teams", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let red = teams
        .as_array()
        .unwrap()
        .iter()
        .find(|card| card["display_name"] == "Red")
        .unwrap();
    assert_eq!(red["filled"], 1);
    assert_eq!(red["slots"].as_array().unwrap().len(), 6);

    let (status, board) = send(&app, Method::GET, "/api/captures?status=dead", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let red = board
        .as_array()
        .unwrap()
        .iter()
        .find(|card| card["display_name"] == "Red")
        .unwrap();
    assert_eq!(red["total"], 1);
    assert_eq!(red["shown"], 0);

    let (status, json) = send(&app, Method::GET, "/api/captures?status=fainted", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "bad_request");
}

#[tokio::test]
async fn test_species_degrades_when_catalog_unreachable() {
    let app = make_app().await;

    let (status, json) = send(&app, Method::GET, "/api/species/sprite?name=eevee", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"kind": "placeholder", "letter": "E"}));

    let (status, json) = send(&app, Method::GET, "/api/species/search?q=char", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);

    let (status, _) = send(&app, Method::GET, "/api/species/sprite", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_slow_store_times_out() {
    let store = MemoryStore::new().with_latency(Duration::from_secs(10));
    let app = make_app_with(store, Duration::from_millis(6000)).await;

    let (status, json) = send(&app, Method::GET, "/api/me/team", Some(PlayerId::new()), None).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["kind"], "timeout");
}

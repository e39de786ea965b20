//! Integration tests for the HTTP endpoints and the full request flow.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};
use skylords_bot::prelude::*;

// =========================================================================
// Mock bot
// =========================================================================

/// Offers one deck and walks every own squad to the origin each tick.
#[derive(Clone, Default)]
struct Walker {
    tick_calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl Bot for Walker {
    fn name(&self) -> String {
        "Walker".to_string()
    }

    fn decks_for_map(&mut self, _map: &MapDescriptor) -> Vec<Deck> {
        vec![Deck::normalize("Walk Deck", 0, [CardId(1001)]).unwrap()]
    }

    fn on_tick(&mut self, _deck: &Deck, state: &GameState) -> Vec<Command> {
        self.tick_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        let squads: Vec<_> = state.entities.squads.iter().map(|s| s.entity.id).collect();
        if squads.is_empty() {
            return Vec::new();
        }
        vec![Command::GroupGoto {
            squads,
            positions: vec![Position2D::ZERO],
            walk_mode: WalkMode::Normal,
            orientation: 0.0,
        }]
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn hello_body(version: u64) -> Value {
    json!({"version": version, "map": {"map": "Fyre"}})
}

fn prepare_body(deck: &str) -> Value {
    json!({"deck": deck, "map": {"map": "Fyre"}})
}

fn start_body() -> Value {
    json!({"your_player_id": 1, "players": [], "entities": {}})
}

fn tick_body(tick: u32) -> Value {
    json!({
        "current_tick": tick,
        "players": [],
        "entities": {
            "squads": [{
                "entity": {
                    "id": 55,
                    "job": {"Idle": {}},
                    "position": {"x": 0.0, "y": 0.0, "z": 0.0},
                    "player_entity_id": 1
                },
                "card_id": 1001,
                "res_squad_id": 3,
                "bound_power": 50.0,
                "squad_size": 1,
                "figures": [56]
            }]
        }
    })
}

fn post(path: &str, body: &Value) -> test::TestRequest {
    test::TestRequest::post().uri(path).set_json(body)
}

macro_rules! service {
    ($server:expr) => {
        test::init_service(App::new().configure($server.configure())).await
    };
}

// =========================================================================
// Happy path
// =========================================================================

#[actix_web::test]
async fn test_full_match_flow() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    let resp = test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let offer: Value = test::read_body_json(resp).await;
    assert_eq!(offer["name"], "Walker");
    assert_eq!(offer["decks"][0]["name"], "Walk_Deck");
    assert_eq!(offer["decks"][0]["cards"].as_array().map(Vec::len), Some(20));

    let resp = test::call_service(&app, post("/prepare", &prepare_body("Walk_Deck")).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, post("/start", &start_body()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, post("/tick", &tick_body(1)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let commands: Value = test::read_body_json(resp).await;
    assert_eq!(
        commands,
        json!([{"GroupGoto": {
            "squads": [55],
            "positions": [{"x": 0.0, "y": 0.0}],
            "walk_mode": 4,
            "orientation": 0.0
        }}])
    );
}

#[actix_web::test]
async fn test_prepare_accepts_map_info_key() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    let body = json!({"deck": "Walk_Deck", "map_info": {"map": "Fyre"}});
    let resp = test::call_service(&app, post("/prepare", &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_redelivered_tick_gets_same_answer() {
    let bot = Walker::default();
    let calls = Arc::clone(&bot.tick_calls);
    let server = BotServer::<Walker>::builder().build(bot);
    let app = service!(server);

    test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    test::call_service(&app, post("/prepare", &prepare_body("Walk_Deck")).to_request()).await;
    test::call_service(&app, post("/start", &start_body()).to_request()).await;

    let first: Value =
        test::call_and_read_body_json(&app, post("/tick", &tick_body(8)).to_request()).await;
    let second: Value =
        test::call_and_read_body_json(&app, post("/tick", &tick_body(8)).to_request()).await;
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =========================================================================
// Errors
// =========================================================================

#[actix_web::test]
async fn test_version_mismatch_is_422() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    let resp = test::call_service(&app, post("/hello", &hello_body(15)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("expected 16, got 15"));

    let resp = test::call_service(&app, post("/prepare", &prepare_body("Walk_Deck")).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_unknown_deck_is_400() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    let resp = test::call_service(&app, post("/prepare", &prepare_body("Nope")).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Nope"));
}

#[actix_web::test]
async fn test_tick_before_start_is_400() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    let resp = test::call_service(&app, post("/tick", &tick_body(1)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_variant_is_400() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    let app = service!(server);

    test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    test::call_service(&app, post("/prepare", &prepare_body("Walk_Deck")).to_request()).await;
    test::call_service(&app, post("/start", &start_body()).to_request()).await;

    let mut body = tick_body(2);
    body["entities"]["squads"][0]["entity"]["job"] = json!({"Idle": {}, "NoJob": {}});
    let resp = test::call_service(&app, post("/tick", &body).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("conflicting shapes"));
}

// =========================================================================
// Tick budget
// =========================================================================

#[actix_web::test]
async fn test_slow_tick_answers_empty_within_budget() {
    let bot = Walker { delay: Some(Duration::from_millis(300)), ..Walker::default() };
    let config = SessionConfig { tick_budget: Duration::from_millis(20), ..SessionConfig::default() };
    let server = BotServer::<Walker>::builder().session_config(config).build(bot);
    let app = service!(server);

    test::call_service(&app, post("/hello", &hello_body(16)).to_request()).await;
    test::call_service(&app, post("/prepare", &prepare_body("Walk_Deck")).to_request()).await;
    test::call_service(&app, post("/start", &start_body()).to_request()).await;

    let started = std::time::Instant::now();
    let resp = test::call_service(&app, post("/tick", &tick_body(1)).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() < Duration::from_millis(250));
    let commands: Value = test::read_body_json(resp).await;
    assert_eq!(commands, json!([]));
}

#[::core::prelude::v1::test]
fn test_builder_defaults() {
    let server = BotServer::<Walker>::builder().build(Walker::default());
    assert_eq!(server.bind_addr(), "127.0.0.1:6565");

    let server = BotServerBuilder::default().bind("0.0.0.0:7000").build(Walker::default());
    assert_eq!(server.bind_addr(), "0.0.0.0:7000");
}

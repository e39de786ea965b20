//! HTTP handlers for the four host requests.
//!
//! Each handler decodes the body with the server's codec, runs the
//! matching session step on the blocking pool and encodes the answer.
//!   1. POST /hello   → `AiForMap`
//!   2. POST /prepare → empty
//!   3. POST /start   → empty
//!   4. POST /tick    → `[Command]`, bounded by the tick budget

use actix_web::{HttpResponse, web};
use serde::Serialize;
use skylords_protocol::{ApiHello, Codec, Command, GameStartState, GameState, Prepare};
use skylords_session::Bot;

use crate::BotError;
use crate::server::ServerState;

fn respond<C: Codec, T: Serialize>(codec: &C, value: &T) -> Result<HttpResponse, BotError> {
    let body = codec.encode(value)?;
    Ok(HttpResponse::Ok().content_type(codec.content_type()).body(body))
}

pub(crate) async fn hello<B: Bot, C: Codec>(
    body: web::Bytes,
    state: web::Data<ServerState<B, C>>,
) -> Result<HttpResponse, BotError> {
    let hello: ApiHello = state.codec.decode(&body)?;
    tracing::debug!(version = hello.version, map = %hello.map, "hello");

    let answer = state.with_session(move |s| s.hello(hello)).await??;
    respond(&state.codec, &answer)
}

pub(crate) async fn prepare<B: Bot, C: Codec>(
    body: web::Bytes,
    state: web::Data<ServerState<B, C>>,
) -> Result<HttpResponse, BotError> {
    let prepare: Prepare = state.codec.decode(&body)?;
    state.with_session(move |s| s.prepare(prepare)).await??;
    Ok(HttpResponse::Ok().finish())
}

pub(crate) async fn start<B: Bot, C: Codec>(
    body: web::Bytes,
    state: web::Data<ServerState<B, C>>,
) -> Result<HttpResponse, BotError> {
    let start: GameStartState = state.codec.decode(&body)?;
    state.with_session(move |s| s.start(start)).await??;
    Ok(HttpResponse::Ok().finish())
}

/// Answers a tick within the budget.
///
/// If the bot has not answered in time the host gets an empty command
/// list. The late callback still finishes on the blocking pool and
/// records its tick in the session.
pub(crate) async fn tick<B: Bot, C: Codec>(
    body: web::Bytes,
    state: web::Data<ServerState<B, C>>,
) -> Result<HttpResponse, BotError> {
    let game_state: GameState = state.codec.decode(&body)?;
    let current = game_state.current_tick;

    let pending = state.with_session(move |s| s.tick(game_state));
    let commands: Vec<Command> = match tokio::time::timeout(state.tick_budget, pending).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!(
                tick = %current,
                budget_ms = state.tick_budget.as_millis() as u64,
                "tick budget exceeded, answering with no commands"
            );
            Vec::new()
        }
    };

    respond(&state.codec, &commands)
}

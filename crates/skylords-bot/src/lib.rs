//! # Skylords Bot
//!
//! HTTP bot server for Skylords Reborn matches.
//!
//! Bot authors implement the [`Bot`](skylords_session::Bot) trait; this
//! crate answers the match host's `/hello`, `/prepare`, `/start` and
//! `/tick` requests, keeps the session in order and makes sure every
//! tick gets an answer within the budget.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skylords_bot::prelude::*;
//!
//! struct Idle;
//!
//! impl Bot for Idle {
//!     fn name(&self) -> String {
//!         "Idle".into()
//!     }
//!
//!     fn decks_for_map(&mut self, _map: &MapDescriptor) -> Vec<Deck> {
//!         Vec::new()
//!     }
//!
//!     fn on_tick(&mut self, _deck: &Deck, _state: &GameState) -> Vec<Command> {
//!         Vec::new()
//!     }
//! }
//!
//! # async fn run() -> Result<(), BotError> {
//! skylords_bot::init_logging();
//! BotServer::<Idle>::builder().bind("127.0.0.1:6565").build(Idle).run().await
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::BotError;
pub use server::{BotServer, BotServerBuilder, DEFAULT_BIND};

pub use skylords_protocol as protocol;
pub use skylords_session as session;

/// Installs a `tracing` subscriber driven by `RUST_LOG`, defaulting to
/// `info`. Does nothing if a subscriber is already set.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Everything a bot binary usually needs.
pub mod prelude {
    pub use skylords_protocol::{
        AiForMap, ApiHello, Aspect, Card, CardId, CardTemplate, Command, Deck, EntityId,
        GameStartState, GameState, Job, MapDescriptor, MapEntities, OrbColor, Position,
        Position2D, Prepare, SingleTarget, Target, TemplateCatalog, Tick, Upgrade, WalkMode,
    };
    pub use skylords_session::{Bot, Phase, Session, SessionConfig, SessionError};

    pub use crate::{BotError, BotServer, BotServerBuilder};
}

//! `BotServer` builder and HTTP server.
//!
//! This is the entry point for running a bot. It ties together the
//! layers: HTTP → protocol → session → bot.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use skylords_protocol::{Codec, JsonCodec};
use skylords_session::{Bot, Session, SessionConfig};
use tokio::sync::Mutex;

use crate::BotError;
use crate::handler;

/// Default listen address. The host expects bots on port 6565.
pub const DEFAULT_BIND: &str = "127.0.0.1:6565";

/// Shared state handed to every request handler.
///
/// The session sits behind an `Arc` so a callback on the blocking pool
/// can own its lock guard past a tick timeout.
pub(crate) struct ServerState<B: Bot, C: Codec> {
    pub(crate) session: Arc<Mutex<Session<B>>>,
    pub(crate) codec: C,
    pub(crate) tick_budget: Duration,
}

impl<B: Bot, C: Codec> ServerState<B, C> {
    /// Runs `f` against the session on the blocking pool.
    ///
    /// # Errors
    /// Returns [`BotError::Callback`] if `f` panics.
    pub(crate) async fn with_session<F, T>(&self, f: F) -> Result<T, BotError>
    where
        F: FnOnce(&mut Session<B>) -> T + Send + 'static,
        T: Send + 'static,
    {
        let mut session = Arc::clone(&self.session).lock_owned().await;
        let result = tokio::task::spawn_blocking(move || f(&mut session)).await?;
        Ok(result)
    }
}

/// Builder for configuring a bot server.
///
/// # Example
///
/// ```rust,ignore
/// use skylords_bot::prelude::*;
///
/// let server = BotServer::builder()
///     .bind("0.0.0.0:6565")
///     .build(MyBot::default());
/// server.run().await
/// ```
pub struct BotServerBuilder {
    bind_addr: String,
    session_config: SessionConfig,
}

impl BotServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: DEFAULT_BIND.to_string(),
            session_config: SessionConfig::default(),
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the session configuration.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Builds the server around `bot`, calling its
    /// [`initialize`](Bot::initialize) hook once.
    ///
    /// Uses `JsonCodec` for request and response bodies.
    pub fn build<B: Bot>(self, mut bot: B) -> BotServer<B> {
        bot.initialize();
        tracing::info!(bot = %bot.name(), "bot initialized");

        let tick_budget = self.session_config.tick_budget;
        let state = web::Data::new(ServerState {
            session: Arc::new(Mutex::new(Session::new(bot, self.session_config))),
            codec: JsonCodec,
            tick_budget,
        });

        BotServer { bind_addr: self.bind_addr, state }
    }
}

impl Default for BotServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bot ready to serve the match host.
///
/// Call [`run()`](Self::run) to start accepting requests.
pub struct BotServer<B: Bot> {
    bind_addr: String,
    state: web::Data<ServerState<B, JsonCodec>>,
}

impl<B: Bot> BotServer<B> {
    /// Creates a new builder.
    pub fn builder() -> BotServerBuilder {
        BotServerBuilder::new()
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Route and state registration for an actix `App`.
    ///
    /// [`run()`](Self::run) uses this; tests can mount it on a test
    /// service instead of a socket.
    pub fn configure(&self) -> impl Fn(&mut web::ServiceConfig) + Clone + Send + 'static {
        let state = self.state.clone();
        move |cfg: &mut web::ServiceConfig| {
            cfg.app_data(state.clone())
                .route("/hello", web::post().to(handler::hello::<B, JsonCodec>))
                .route("/prepare", web::post().to(handler::prepare::<B, JsonCodec>))
                .route("/start", web::post().to(handler::start::<B, JsonCodec>))
                .route("/tick", web::post().to(handler::tick::<B, JsonCodec>));
        }
    }

    /// Binds and serves until the process is stopped. The match in
    /// progress, if any, is marked ended on shutdown.
    ///
    /// # Errors
    /// Returns [`BotError::Io`] if the address cannot be bound.
    pub async fn run(self) -> Result<(), BotError> {
        let configure = self.configure();
        tracing::info!(addr = %self.bind_addr, "bot server listening");

        HttpServer::new(move || App::new().configure(configure.clone()))
            .bind(&self.bind_addr)?
            .run()
            .await?;

        self.state.session.lock().await.end();
        tracing::info!("bot server stopped");
        Ok(())
    }
}

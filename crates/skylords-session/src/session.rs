//! The per-connection session: phase machine plus the bot it drives.
//!
//! A session takes exactly one decoded request per step and produces
//! exactly one response. It does no I/O; the server crate feeds it.

use std::time::Duration;

use skylords_protocol::{
    AiForMap, ApiHello, Command, Deck, GameStartState, GameState, MapDescriptor,
    PROTOCOL_VERSION, Prepare, ProtocolError, Tick,
};

use crate::{Bot, SessionError, map_supported};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration for session behavior.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Wall-clock budget for one tick callback. The host ticks every
    /// 100 ms; a slower answer is replaced by an empty command list.
    ///
    /// Default: 90 ms.
    pub tick_budget: Duration,

    /// Whether a tick the session already answered may be delivered
    /// again. When `true` the cached answer is replayed; when `false`
    /// the repeat is a [`SessionError::StaleTick`].
    ///
    /// Default: `true`.
    pub accept_redelivered_ticks: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_budget: Duration::from_millis(90),
            accept_redelivered_ticks: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where a session is in the protocol.
///
/// ```text
/// Uninitialized ─hello─▶ Negotiated ─prepare─▶ Prepared ─start─▶ Running ─end─▶ Ended
///       │                                                         ↺ tick
///       └─hello (bad version)─▶ Rejected
/// ```
///
/// A hello is accepted from every phase and starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Negotiated,
    Prepared,
    Running,
    Ended,
    Rejected,
}

impl Phase {
    /// Returns `true` if moving to `target` is a valid step.
    pub fn can_transition_to(self, target: Self) -> bool {
        match target {
            Self::Negotiated | Self::Rejected => true,
            Self::Prepared => self == Self::Negotiated,
            Self::Running => matches!(self, Self::Prepared | Self::Running),
            Self::Ended => self == Self::Running,
            Self::Uninitialized => false,
        }
    }

    /// Returns `true` while a match is being played.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Prepared | Self::Running)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Negotiated => write!(f, "Negotiated"),
            Self::Prepared => write!(f, "Prepared"),
            Self::Running => write!(f, "Running"),
            Self::Ended => write!(f, "Ended"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One bot's session with the match host.
///
/// Owns the bot and everything the protocol needs remembered between
/// requests: the map, the decks offered for it, the deck the host chose
/// and the last answered tick.
pub struct Session<B: Bot> {
    bot: B,
    config: SessionConfig,
    phase: Phase,
    map: Option<MapDescriptor>,
    offered: Vec<Deck>,
    selected: Option<Deck>,
    last_tick: Option<(Tick, Vec<Command>)>,
}

impl<B: Bot> Session<B> {
    pub fn new(bot: B, config: SessionConfig) -> Self {
        Self {
            bot,
            config,
            phase: Phase::Uninitialized,
            map: None,
            offered: Vec::new(),
            selected: None,
            last_tick: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn bot(&self) -> &B {
        &self.bot
    }

    pub fn bot_mut(&mut self) -> &mut B {
        &mut self.bot
    }

    /// The map of the current handshake.
    pub fn map(&self) -> Option<&MapDescriptor> {
        self.map.as_ref()
    }

    /// Decks offered in the current handshake, normalized.
    pub fn offered_decks(&self) -> &[Deck] {
        &self.offered
    }

    /// The deck the host chose, once prepared.
    pub fn selected_deck(&self) -> Option<&Deck> {
        self.selected.as_ref()
    }

    /// The last tick answered in this match.
    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick.as_ref().map(|(tick, _)| *tick)
    }

    /// Handles the handshake.
    ///
    /// Resets all match state first, so a hello in any phase starts a
    /// fresh session. Offered decks are normalized before they leave.
    ///
    /// # Errors
    /// - [`SessionError::VersionMismatch`] if the version differs from
    ///   [`PROTOCOL_VERSION`]; the phase becomes [`Phase::Rejected`].
    /// - [`SessionError::Protocol`] if the bot offers a deck with no
    ///   real card.
    pub fn hello(&mut self, hello: ApiHello) -> Result<AiForMap, SessionError> {
        if self.phase.is_active() {
            tracing::info!(phase = %self.phase, "new handshake during a match, starting over");
        }
        self.reset();

        if hello.version != PROTOCOL_VERSION {
            self.phase = Phase::Rejected;
            tracing::error!(
                expected = PROTOCOL_VERSION,
                got = hello.version,
                "handshake rejected"
            );
            return Err(SessionError::VersionMismatch {
                expected: PROTOCOL_VERSION,
                got: hello.version,
            });
        }

        let decks = if map_supported(&self.bot.supported_maps(), &hello.map) {
            self.bot
                .decks_for_map(&hello.map)
                .iter()
                .map(Deck::normalized)
                .collect::<Result<Vec<_>, _>>()
                .map_err(ProtocolError::from)?
        } else {
            tracing::info!(map = %hello.map, "map not supported, offering no decks");
            Vec::new()
        };

        self.offered = decks.clone();
        self.phase = Phase::Negotiated;
        tracing::info!(map = %hello.map, decks = decks.len(), "handshake accepted");
        self.map = Some(hello.map);

        Ok(AiForMap { name: self.bot.name(), decks })
    }

    /// Handles the deck choice.
    ///
    /// # Errors
    /// - [`SessionError::UnknownDeck`] if the name was not offered; the
    ///   phase stays [`Phase::Negotiated`].
    /// - [`SessionError::UnexpectedPhase`] outside [`Phase::Negotiated`].
    pub fn prepare(&mut self, prepare: Prepare) -> Result<(), SessionError> {
        self.expect_phase(Phase::Negotiated)?;

        let deck = self
            .offered
            .iter()
            .find(|d| d.name == prepare.deck)
            .cloned()
            .ok_or_else(|| SessionError::UnknownDeck(prepare.deck.clone()))?;

        self.bot.prepare(&deck, &prepare.map);
        tracing::info!(deck = %deck.name, map = %prepare.map, "prepared");

        self.selected = Some(deck);
        self.map = Some(prepare.map);
        self.phase = Phase::Prepared;
        Ok(())
    }

    /// Handles the match-start snapshot.
    ///
    /// # Errors
    /// [`SessionError::UnexpectedPhase`] outside [`Phase::Prepared`].
    pub fn start(&mut self, state: GameStartState) -> Result<(), SessionError> {
        self.expect_phase(Phase::Prepared)?;
        let deck = self.selected.as_ref().ok_or(SessionError::UnexpectedPhase {
            phase: self.phase,
            expected: Phase::Prepared,
        })?;

        self.bot.match_start(deck, &state);
        self.last_tick = None;
        self.phase = Phase::Running;
        tracing::info!(player = %state.your_player_id, players = state.players.len(), "match started");
        Ok(())
    }

    /// Handles one tick and returns the bot's commands.
    ///
    /// A re-delivery of the last answered tick replays the cached answer
    /// when the config allows it, without calling the bot again.
    ///
    /// # Errors
    /// - [`SessionError::StaleTick`] for a tick older than the last one,
    ///   or a repeat when re-delivery is not accepted.
    /// - [`SessionError::UnexpectedPhase`] outside [`Phase::Running`].
    pub fn tick(&mut self, state: GameState) -> Result<Vec<Command>, SessionError> {
        self.expect_phase(Phase::Running)?;

        let got = state.current_tick;
        if let Some((last, cached)) = &self.last_tick {
            if got == *last && self.config.accept_redelivered_ticks {
                tracing::debug!(tick = %got, "re-delivered tick, replaying answer");
                return Ok(cached.clone());
            }
            if got <= *last {
                tracing::warn!(%last, %got, "stale tick");
                return Err(SessionError::StaleTick { last: *last, got });
            }
        }

        let deck = self.selected.as_ref().ok_or(SessionError::UnexpectedPhase {
            phase: self.phase,
            expected: Phase::Running,
        })?;
        let commands = self.bot.on_tick(deck, &state);

        tracing::debug!(tick = %got, commands = commands.len(), "tick answered");
        self.last_tick = Some((got, commands.clone()));
        Ok(commands)
    }

    /// Marks the match as over. Only meaningful while running; a no-op
    /// otherwise.
    pub fn end(&mut self) {
        if self.phase.can_transition_to(Phase::Ended) {
            tracing::info!(last_tick = ?self.last_tick(), "match ended");
            self.phase = Phase::Ended;
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Uninitialized;
        self.map = None;
        self.offered.clear();
        self.selected = None;
        self.last_tick = None;
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == Phase::Rejected {
            return Err(SessionError::Rejected);
        }
        if self.phase != expected {
            return Err(SessionError::UnexpectedPhase {
                phase: self.phase,
                expected,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylords_protocol::{CardId, MapEntities};

    // =====================================================================
    // Helpers
    // =====================================================================

    struct Counter {
        ticks_seen: Vec<Tick>,
        panic_on: Option<Tick>,
    }

    impl Bot for Counter {
        fn name(&self) -> String {
            "counter".to_string()
        }

        fn decks_for_map(&mut self, _map: &MapDescriptor) -> Vec<Deck> {
            vec![Deck::normalize("Only Deck", 0, [CardId(1001)]).unwrap()]
        }

        fn on_tick(&mut self, _deck: &Deck, state: &GameState) -> Vec<Command> {
            if self.panic_on.take() == Some(state.current_tick) {
                panic!("bot failed on tick {}", state.current_tick);
            }
            self.ticks_seen.push(state.current_tick);
            vec![Command::Surrender {}]
        }
    }

    fn session() -> Session<Counter> {
        Session::new(Counter { ticks_seen: Vec::new(), panic_on: None }, SessionConfig::default())
    }

    fn game_state(tick: u32) -> GameState {
        GameState {
            current_tick: Tick(tick),
            commands: Vec::new(),
            rejected_commands: Vec::new(),
            players: Vec::new(),
            entities: MapEntities::default(),
        }
    }

    fn running() -> Session<Counter> {
        let mut s = session();
        s.hello(ApiHello::current(MapDescriptor::named("Fyre"))).unwrap();
        s.prepare(Prepare { deck: "Only_Deck".into(), map: MapDescriptor::named("Fyre") })
            .unwrap();
        s.start(GameStartState {
            your_player_id: skylords_protocol::EntityId(1),
            players: Vec::new(),
            entities: MapEntities::default(),
        })
        .unwrap();
        s
    }

    // =====================================================================
    // Phase
    // =====================================================================

    #[test]
    fn test_phase_can_transition_to() {
        assert!(Phase::Uninitialized.can_transition_to(Phase::Negotiated));
        assert!(Phase::Running.can_transition_to(Phase::Negotiated));
        assert!(Phase::Negotiated.can_transition_to(Phase::Prepared));
        assert!(!Phase::Uninitialized.can_transition_to(Phase::Prepared));
        assert!(!Phase::Negotiated.can_transition_to(Phase::Running));
        assert!(Phase::Running.can_transition_to(Phase::Running));
        assert!(!Phase::Prepared.can_transition_to(Phase::Ended));
        assert!(!Phase::Ended.can_transition_to(Phase::Uninitialized));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Negotiated.to_string(), "Negotiated");
        assert_eq!(Phase::Rejected.to_string(), "Rejected");
    }

    #[test]
    fn test_session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.tick_budget, Duration::from_millis(90));
        assert!(config.accept_redelivered_ticks);
    }

    // =====================================================================
    // Session
    // =====================================================================

    #[test]
    fn test_hello_offers_normalized_decks() {
        let mut s = session();
        let answer = s.hello(ApiHello::current(MapDescriptor::named("Fyre"))).unwrap();
        assert_eq!(answer.name, "counter");
        assert_eq!(answer.decks[0].name, "Only_Deck");
        assert_eq!(answer.decks[0].cards.len(), 20);
        assert_eq!(s.phase(), Phase::Negotiated);
    }

    #[test]
    fn test_redelivered_tick_replays_without_calling_bot() {
        let mut s = running();
        s.tick(game_state(5)).unwrap();
        let again = s.tick(game_state(5)).unwrap();
        assert_eq!(again, vec![Command::Surrender {}]);
        assert_eq!(s.bot().ticks_seen, vec![Tick(5)]);
    }

    #[test]
    fn test_redelivered_tick_refused_when_disabled() {
        let mut s = running();
        s.config.accept_redelivered_ticks = false;
        s.tick(game_state(5)).unwrap();
        let err = s.tick(game_state(5)).unwrap_err();
        assert!(matches!(err, SessionError::StaleTick { last: Tick(5), got: Tick(5) }));
    }

    #[test]
    fn test_tick_keeps_selected_deck() {
        let mut s = running();
        s.tick(game_state(1)).unwrap();
        assert_eq!(s.selected_deck().map(|d| d.name.as_str()), Some("Only_Deck"));
    }

    #[test]
    fn test_panicking_tick_keeps_session_usable() {
        let mut s = running();
        s.bot_mut().panic_on = Some(Tick(1));

        let outcome =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| s.tick(game_state(1))));
        assert!(outcome.is_err());
        assert_eq!(s.phase(), Phase::Running);
        assert_eq!(s.selected_deck().map(|d| d.name.as_str()), Some("Only_Deck"));
        assert_eq!(s.last_tick(), None);

        assert_eq!(s.tick(game_state(2)).unwrap(), vec![Command::Surrender {}]);
        assert_eq!(s.bot().ticks_seen, vec![Tick(2)]);
    }

    #[test]
    fn test_end_only_from_running() {
        let mut s = session();
        s.end();
        assert_eq!(s.phase(), Phase::Uninitialized);

        let mut s = running();
        s.end();
        assert_eq!(s.phase(), Phase::Ended);
    }
}

//! The `Bot` trait: the extension point bot authors implement.
//!
//! The session calls these methods in protocol order; the bot only
//! decides which decks to offer and which commands to issue.

use skylords_protocol::{Command, Deck, GameStartState, GameState, MapDescriptor};

/// A bot that can play Skylords Reborn matches.
///
/// Methods take `&mut self` so a bot can keep whatever match state it
/// likes between ticks. The server runs them on the blocking pool, hence
/// `Send + 'static`.
///
/// Only [`name`](Bot::name), [`decks_for_map`](Bot::decks_for_map) and
/// [`on_tick`](Bot::on_tick) are required.
pub trait Bot: Send + 'static {
    /// Name reported in the handshake.
    fn name(&self) -> String;

    /// Called once when the server starts, before any handshake.
    fn initialize(&mut self) {}

    /// Maps this bot can play. Empty means every map.
    fn supported_maps(&self) -> Vec<MapDescriptor> {
        Vec::new()
    }

    /// Decks offered for `map`. Only called for supported maps. An empty
    /// list tells the host the bot cannot play here.
    fn decks_for_map(&mut self, map: &MapDescriptor) -> Vec<Deck>;

    /// The host picked `deck` for `map`.
    fn prepare(&mut self, _deck: &Deck, _map: &MapDescriptor) {}

    /// First full snapshot of the match.
    fn match_start(&mut self, _deck: &Deck, _state: &GameStartState) {}

    /// Commands for this tick, in the order they should be issued.
    fn on_tick(&mut self, deck: &Deck, state: &GameState) -> Vec<Command>;
}

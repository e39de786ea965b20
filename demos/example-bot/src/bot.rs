//! A small bot that spawns its first affordable squad and sends every
//! squad it owns at an enemy token slot.

use skylords_bot::prelude::*;
use skylords_bot::protocol::{DeckError, PlayerEntity};

const NAME: &str = "RustExampleBot";

const TUTORIAL: &[&str] = &[
    "MasterArchers",
    "Northguards",
    "Eruption",
    "CannonTower",
    "FireStalker",
    "MagmaHurler",
    "Tremor",
];

const TAINTED_FLORA: &[&str] = &[
    "Swiftclaw",
    "DryadAFrost",
    "Windweavers",
    "Shaman",
    "Spearmen",
    "EnsnaringRoots",
    "Hurricane",
    "SurgeOfLight",
    "NastySurprise",
    "DarkelfAssassins",
    "Nightcrawler",
    "AmiiPaladins",
    "AmiiPhantom",
    "Burrower",
    "ShadowPhoenix",
    "AuraofCorruption",
    "Tranquility",
    "CurseofOink",
    "CultistMaster",
    "AshbonePyro",
];

/// Builds a deck of fully upgraded cards from template names.
fn deck_of(catalog: &TemplateCatalog, name: &str, cover: u8, cards: &[&str]) -> Result<Deck, DeckError> {
    let cards = cards.iter().filter_map(|&card| {
        match catalog.by_name(card).map(|template| Card::max_upgrade(template).id()) {
            Some(Ok(id)) => Some(id),
            Some(Err(err)) => {
                tracing::warn!(deck = name, card, %err, "card does not pack, leaving slot empty");
                None
            }
            None => {
                tracing::warn!(deck = name, card, "card not in catalog, leaving slot empty");
                None
            }
        }
    });
    Deck::normalize(name, cover, cards)
}

pub struct ExampleBot {
    tutorial: Deck,
    tainted_flora: Deck,
    my_id: EntityId,
    opponents: Vec<EntityId>,
    start_position: Position2D,
}

impl ExampleBot {
    /// # Errors
    /// Fails if the catalog knows none of a deck's cards.
    pub fn new(catalog: &TemplateCatalog) -> Result<Self, DeckError> {
        Ok(Self {
            tutorial: deck_of(catalog, "Tutorial", 3, TUTORIAL)?,
            tainted_flora: deck_of(catalog, "TaintedFlora", 0, TAINTED_FLORA)?,
            my_id: EntityId(0),
            opponents: Vec::new(),
            start_position: Position2D::ZERO,
        })
    }

    fn spawn(&self, deck: &Deck, power: f32) -> Option<Command> {
        let card_position = match deck.name.as_str() {
            "Tutorial" if power >= 50.0 => 1,
            "TaintedFlora" if power >= 70.0 => 2,
            _ => return None,
        };
        Some(Command::ProduceSquad { card_position, xy: self.start_position })
    }

    fn attack(target: Option<EntityId>, squads: Vec<EntityId>) -> Option<Command> {
        let target_entity_id = target?;
        if squads.is_empty() {
            return None;
        }
        Some(Command::GroupAttack { squads, target_entity_id, force_attack: false })
    }
}

impl Bot for ExampleBot {
    fn name(&self) -> String {
        NAME.to_string()
    }

    fn initialize(&mut self) {
        tracing::info!(
            decks = ?[&self.tutorial.name, &self.tainted_flora.name],
            "ready, playing on any map"
        );
    }

    fn decks_for_map(&mut self, map: &MapDescriptor) -> Vec<Deck> {
        match map.map.as_str() {
            "LajeshSpectator" => vec![self.tutorial.clone()],
            "YrmiaSpectator" | "FyreSpectator" => {
                vec![self.tainted_flora.clone(), self.tutorial.clone()]
            }
            _ => vec![self.tainted_flora.clone()],
        }
    }

    fn match_start(&mut self, deck: &Deck, state: &GameStartState) {
        self.my_id = state.your_player_id;
        let me = self.my_id;

        let my_team = state
            .players
            .iter()
            .map(|p| &p.entity)
            .find(|e| e.id == me)
            .map(|e: &PlayerEntity| e.team);
        self.opponents = state
            .players
            .iter()
            .filter(|p| Some(p.entity.team) != my_team)
            .map(|p| p.entity.id)
            .collect();

        for slot in state.entities.power_slots.iter().filter(|s| s.entity.owned_by(me)) {
            self.start_position = slot.entity.position.to_2d();
        }

        tracing::info!(
            player = %me,
            deck = %deck.name,
            opponents = self.opponents.len(),
            start = ?self.start_position,
            "match started"
        );
    }

    fn on_tick(&mut self, deck: &Deck, state: &GameState) -> Vec<Command> {
        let entities = &state.entities;

        let army: Vec<EntityId> = entities.squads_of(self.my_id).map(|s| s.entity.id).collect();
        let target = entities
            .token_slots
            .iter()
            .find(|t| {
                t.entity
                    .player_entity_id
                    .is_some_and(|owner| self.opponents.contains(&owner))
            })
            .map(|t| t.entity.id);
        let power = state.player(self.my_id).map_or(0.0, |p| p.power);

        tracing::debug!(
            tick = %state.current_tick,
            target = ?target,
            power,
            army = army.len(),
            "tick"
        );

        self.spawn(deck, power)
            .into_iter()
            .chain(Self::attack(target, army))
            .collect()
    }
}

//! Decks: a name, a cover card, and exactly twenty card slots.
//!
//! [`Deck::normalize`] is the only way bots should build decks. It
//! applies the host's rules in a fixed order:
//!
//! 1. trim the name and turn spaces into underscores
//! 2. keep at most the first 20 cards
//! 3. replace repeated templates with the placeholder (first one wins;
//!    the placeholder itself may repeat)
//! 4. pad with the placeholder up to 20
//! 5. refuse the deck if no real card is left
//!
//! The cover index is passed through untouched. Pointing it at a real
//! card is the caller's job.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{CardId, DeckError};

/// Number of card slots in every deck.
pub const DECK_SIZE: usize = 20;

/// A deck as it travels on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    /// Slot of the card shown as the deck icon, 0-19.
    pub cover_card_index: u8,
    pub cards: Vec<CardId>,
}

impl Deck {
    /// Builds a deck following the host's deck rules.
    pub fn normalize<I>(name: &str, cover_card_index: u8, cards: I) -> Result<Deck, DeckError>
    where
        I: IntoIterator,
        I::Item: Into<CardId>,
    {
        let name = name.trim().replace(' ', "_");

        let mut cards: Vec<CardId> = cards.into_iter().map(Into::into).collect();
        if cards.len() > DECK_SIZE {
            tracing::warn!(
                deck = %name,
                given = cards.len(),
                max = DECK_SIZE,
                "deck too long, extra cards dropped"
            );
            cards.truncate(DECK_SIZE);
        }

        let mut seen = HashSet::new();
        for card in cards.iter_mut() {
            let Ok(template) = card.template() else {
                continue;
            };
            if template.is_placeholder() {
                continue;
            }
            if !seen.insert(template) {
                tracing::warn!(deck = %name, card = %card, "removed duplicate card from deck");
                *card = CardId::NOT_A_CARD;
            }
        }

        cards.resize(DECK_SIZE, CardId::NOT_A_CARD);

        let deck = Deck { name, cover_card_index, cards };
        if deck.real_cards() == 0 {
            return Err(DeckError::EmptyDeck);
        }
        Ok(deck)
    }

    /// Re-applies [`Deck::normalize`] to a deck received from elsewhere.
    pub fn normalized(&self) -> Result<Deck, DeckError> {
        Deck::normalize(&self.name, self.cover_card_index, self.cards.iter().copied())
    }

    /// Card in the given slot, ignoring placeholders.
    pub fn card_at(&self, slot: usize) -> Option<CardId> {
        self.cards.get(slot).copied().filter(|c| !c.is_placeholder())
    }

    /// Number of non-placeholder cards.
    pub fn real_cards(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_placeholder()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, CardTemplate, Upgrade};

    fn card(template: u32) -> CardId {
        Card::max_upgrade(CardTemplate(template)).id().unwrap()
    }

    // =====================================================================
    // normalize()
    // =====================================================================

    #[test]
    fn test_normalize_sanitizes_name() {
        let deck = Deck::normalize("  Tainted Flora ", 0, [card(1)]).unwrap();
        assert_eq!(deck.name, "Tainted_Flora");
    }

    #[test]
    fn test_normalize_empty_deck_fails() {
        let err = Deck::normalize("x", 0, Vec::<CardId>::new()).unwrap_err();
        assert_eq!(err, DeckError::EmptyDeck);
    }

    #[test]
    fn test_normalize_only_placeholders_fails() {
        let err = Deck::normalize("x", 0, [CardId::NOT_A_CARD]).unwrap_err();
        assert_eq!(err, DeckError::EmptyDeck);

        // Every tier of the placeholder template counts as a placeholder.
        let err = Deck::normalize("x", 0, [CardId(3_000_000), CardId(1_000_000)]).unwrap_err();
        assert_eq!(err, DeckError::EmptyDeck);

        let padded = Deck {
            name: "x".into(),
            cover_card_index: 0,
            cards: vec![CardId::NOT_A_CARD; DECK_SIZE],
        };
        assert_eq!(padded.normalized(), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn test_normalize_pads_short_list() {
        let deck = Deck::normalize("short", 0, [card(1), card(2)]).unwrap();
        assert_eq!(deck.cards.len(), DECK_SIZE);
        assert_eq!(deck.real_cards(), 2);
        assert!(deck.cards[2..].iter().all(|c| *c == CardId::NOT_A_CARD));
    }

    #[test]
    fn test_normalize_truncates_and_dedups_twenty_one_cards() {
        // 21 distinct templates, then make card #9 repeat card #5.
        let mut input: Vec<CardId> = (1..=21).map(card).collect();
        input[8] = input[4];

        let deck = Deck::normalize("long", 0, input.clone()).unwrap();

        assert_eq!(deck.cards.len(), DECK_SIZE);
        assert_eq!(deck.cards[4], input[4]);
        assert_eq!(deck.cards[8], CardId::NOT_A_CARD);
        assert_eq!(deck.cards[19], input[19]);
        assert!(!deck.cards.contains(&input[20]));
    }

    #[test]
    fn test_normalize_dedups_across_tiers() {
        let u1 = Card::new(CardTemplate(7), Upgrade::U1).id().unwrap();
        let u3 = Card::new(CardTemplate(7), Upgrade::U3).id().unwrap();
        let deck = Deck::normalize("tiers", 0, [u3, u1]).unwrap();
        assert_eq!(deck.cards[0], u3);
        assert_eq!(deck.cards[1], CardId::NOT_A_CARD);
    }

    #[test]
    fn test_normalize_placeholder_may_repeat() {
        let deck = Deck::normalize(
            "gaps",
            0,
            [card(1), CardId::NOT_A_CARD, CardId::NOT_A_CARD, card(2)],
        )
        .unwrap();
        assert_eq!(deck.cards[3], card(2));
    }

    #[test]
    fn test_normalize_keeps_packed_ids() {
        let deck = Deck::normalize("c", 3, [card(9)]).unwrap();
        assert_eq!(deck.cards[0], CardId(3_000_009));
        assert_eq!(deck.cover_card_index, 3);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut input: Vec<CardId> = (1..=25).map(card).collect();
        input[2] = input[0];
        let once = Deck::normalize(" my deck", 4, input).unwrap();
        let twice = once.normalized().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_keeps_out_of_range_cover_index() {
        let deck = Deck::normalize("cover", 19, [card(1)]).unwrap();
        assert_eq!(deck.cover_card_index, 19);
        assert_eq!(deck.card_at(19), None);
    }

    // =====================================================================
    // Wire format
    // =====================================================================

    #[test]
    fn test_deck_wire_format() {
        let deck = Deck::normalize("w", 0, [card(1)]).unwrap();
        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["name"], "w");
        assert_eq!(json["cover_card_index"], 0);
        assert_eq!(json["cards"][0], 3_000_001);
        assert_eq!(json["cards"].as_array().unwrap().len(), 20);
    }
}

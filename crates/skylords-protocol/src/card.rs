//! Card identity: one integer on the wire, a (template, upgrade) pair in
//! memory.
//!
//! The host packs the upgrade tier into the card id by adding a fixed
//! offset to the base template id:
//!
//! ```text
//! U0: template + 0
//! U1: template + 1_000_000
//! U2: template + 2_000_000
//! U3: template + 3_000_000
//! ```
//!
//! Unpacking must pick the *largest* offset that does not exceed the raw
//! value, so tiers are checked from U3 downwards. An ascending check
//! would read 3_000_500 as U2 with template 1_000_500.
//!
//! Template ids therefore stay below the U1 offset; packing refuses
//! anything at or above [`CardTemplate::LIMIT`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::BUILTIN_TEMPLATES;
use crate::{CardError, ProtocolError};

// ---------------------------------------------------------------------------
// Upgrade
// ---------------------------------------------------------------------------

/// Upgrade tier of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Upgrade {
    U0,
    U1,
    U2,
    U3,
}

impl Upgrade {
    /// All tiers, highest offset first. Unpacking walks this order.
    pub const DESCENDING: [Upgrade; 4] = [Upgrade::U3, Upgrade::U2, Upgrade::U1, Upgrade::U0];

    /// The amount this tier adds to the base template id.
    pub fn offset(self) -> u32 {
        match self {
            Upgrade::U0 => 0,
            Upgrade::U1 => 1_000_000,
            Upgrade::U2 => 2_000_000,
            Upgrade::U3 => 3_000_000,
        }
    }

    /// The highest tier whose offset does not exceed `raw`.
    pub fn for_raw(raw: u32) -> Option<Upgrade> {
        Self::DESCENDING.into_iter().find(|tier| raw >= tier.offset())
    }
}

// ---------------------------------------------------------------------------
// CardTemplate
// ---------------------------------------------------------------------------

/// The base card, without upgrade tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardTemplate(pub u32);

impl CardTemplate {
    /// The placeholder used to fill empty deck slots. Has no upgrades.
    pub const NOT_A_CARD: CardTemplate = CardTemplate(0);

    /// First id that would collide with the `U1` offset.
    pub const LIMIT: u32 = 1_000_000;

    pub fn is_placeholder(self) -> bool {
        self == Self::NOT_A_CARD
    }

    /// Refuses ids that cannot be packed with an upgrade tier.
    pub fn checked(self) -> Result<CardTemplate, CardError> {
        if self.0 >= Self::LIMIT {
            return Err(CardError::TemplateOutOfRange { template: self.0 });
        }
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// CardId
// ---------------------------------------------------------------------------

/// A packed card identity as it travels on the wire: a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// The packed id of the placeholder card.
    pub const NOT_A_CARD: CardId = CardId(0);

    /// Packs a template and tier. No placeholder normalization here; use
    /// [`Card::new`] for that.
    ///
    /// # Errors
    /// Fails for templates at or above [`CardTemplate::LIMIT`].
    pub fn pack(template: CardTemplate, upgrade: Upgrade) -> Result<CardId, CardError> {
        let template = template.checked()?;
        template
            .0
            .checked_add(upgrade.offset())
            .map(CardId)
            .ok_or(CardError::TemplateOutOfRange { template: template.0 })
    }

    /// Splits the raw value into base template and tier, without
    /// consulting any catalog.
    pub fn split(self) -> Result<(CardTemplate, Upgrade), CardError> {
        let upgrade = Upgrade::for_raw(self.0).ok_or(CardError::InvalidCardId { raw: self.0 })?;
        Ok((CardTemplate(self.0 - upgrade.offset()), upgrade))
    }

    /// The base template, without consulting any catalog.
    pub fn template(self) -> Result<CardTemplate, CardError> {
        self.split().map(|(template, _)| template)
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self.template(), Ok(t) if t.is_placeholder())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.split() {
            Ok((template, upgrade)) => write!(f, "{}[{:?}]", template.0, upgrade),
            Err(_) => write!(f, "{}[?]", self.0),
        }
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// An unpacked card: template plus upgrade tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub template: CardTemplate,
    pub upgrade: Upgrade,
}

impl Card {
    /// A card at the given tier. The placeholder always gets `U0`, since
    /// it has no upgraded versions.
    pub fn new(template: CardTemplate, upgrade: Upgrade) -> Card {
        let upgrade = if template.is_placeholder() { Upgrade::U0 } else { upgrade };
        Card { template, upgrade }
    }

    /// A card at the highest tier (`U3`), or `U0` for the placeholder.
    pub fn max_upgrade(template: CardTemplate) -> Card {
        Card::new(template, Upgrade::U3)
    }

    /// The placeholder card.
    pub fn not_a_card() -> Card {
        Card::new(CardTemplate::NOT_A_CARD, Upgrade::U0)
    }

    /// Packs this card into its wire id.
    pub fn id(self) -> Result<CardId, CardError> {
        CardId::pack(self.template, self.upgrade)
    }
}

impl TryFrom<Card> for CardId {
    type Error = CardError;

    fn try_from(card: Card) -> Result<CardId, CardError> {
        card.id()
    }
}

// ---------------------------------------------------------------------------
// TemplateCatalog
// ---------------------------------------------------------------------------

/// Lookup table from template id to card name.
///
/// The catalog is plain data. [`TemplateCatalog::builtin`] ships the
/// templates the bundled decks use; a full table can be loaded from JSON:
///
/// ```json
/// { "templates": { "0": "NotACard", "1204": "MasterArchers" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: BTreeMap<u32, String>,
}

impl TemplateCatalog {
    /// The compiled-in table.
    pub fn builtin() -> TemplateCatalog {
        TemplateCatalog {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|&(id, name)| (id, name.to_string()))
                .collect(),
        }
    }

    /// Parses a catalog from its JSON form.
    ///
    /// # Errors
    /// Fails on malformed JSON, and with [`CardError::TemplateOutOfRange`]
    /// when a key does not fit below [`CardTemplate::LIMIT`].
    pub fn from_json(json: &str) -> Result<TemplateCatalog, ProtocolError> {
        let mut catalog: TemplateCatalog =
            serde_json::from_str(json).map_err(ProtocolError::Decode)?;
        for &id in catalog.templates.keys() {
            CardTemplate(id).checked()?;
        }
        catalog
            .templates
            .entry(CardTemplate::NOT_A_CARD.0)
            .or_insert_with(|| "NotACard".to_string());
        Ok(catalog)
    }

    /// # Errors
    /// Fails for templates at or above [`CardTemplate::LIMIT`].
    pub fn insert(
        &mut self,
        template: CardTemplate,
        name: impl Into<String>,
    ) -> Result<(), CardError> {
        let template = template.checked()?;
        self.templates.insert(template.0, name.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn contains(&self, template: CardTemplate) -> bool {
        self.templates.contains_key(&template.0)
    }

    /// Name of a template, if known.
    pub fn name(&self, template: CardTemplate) -> Option<&str> {
        self.templates.get(&template.0).map(String::as_str)
    }

    /// Template with the given name, if known.
    pub fn by_name(&self, name: &str) -> Option<CardTemplate> {
        self.templates
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(&id, _)| CardTemplate(id))
    }

    /// Unpacks a wire id and checks the template against this catalog.
    ///
    /// The tier is kept as decoded, so `3_000_000` resolves to the
    /// placeholder at `U3`.
    pub fn resolve(&self, id: CardId) -> Result<Card, CardError> {
        let (template, upgrade) = id.split()?;
        if !self.contains(template) {
            return Err(CardError::UnknownTemplate { raw: id.0 });
        }
        Ok(Card { template, upgrade })
    }

    /// Human-readable `Name[U3]` label, falling back to the raw id.
    pub fn describe(&self, id: CardId) -> String {
        match self.resolve(id) {
            Ok(card) => format!(
                "{}[{:?}]",
                self.name(card.template).unwrap_or("?"),
                card.upgrade
            ),
            Err(_) => id.to_string(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

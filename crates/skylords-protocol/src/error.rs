//! Error types for the protocol layer.
//!
//! The protocol crate has one umbrella error, [`ProtocolError`], plus a
//! small error enum per concern (variant decoding, card identity, deck
//! rules). The narrow enums are what the pure functions return; the
//! umbrella is what codec users see, with `#[from]` doing the lifting.

/// Errors raised while turning a wire object into a variant family value
/// (or back).
///
/// A variant object is a JSON map whose keys are shape names. Exactly one
/// key may carry a non-null value; anything else lands here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariantError {
    /// The object had no populated shape key at all.
    #[error("{family}: no shape present")]
    Missing { family: &'static str },

    /// More than one shape key was populated. The host never sends
    /// this; it is refused rather than resolved by key order.
    #[error("{family}: conflicting shapes {shapes:?}")]
    Conflicting {
        family: &'static str,
        shapes: Vec<String>,
    },

    /// The shape key was known but its body did not match the shape's
    /// fields (wrong type, missing required field, ...).
    #[error("{family}::{shape}: {reason}")]
    Malformed {
        family: &'static str,
        shape: String,
        reason: String,
    },

    /// The wire value was not a JSON object.
    #[error("{family}: expected an object keyed by shape name")]
    NotAnObject { family: &'static str },
}

/// Errors from packing or unpacking a [`CardId`](crate::CardId).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    /// No upgrade offset fits the raw value.
    ///
    /// Unreachable while `U0` has offset zero.
    #[error("card id {raw} does not decode to any upgrade tier")]
    InvalidCardId { raw: u32 },

    /// The base template left after removing the tier offset is not in
    /// the catalog.
    #[error("card id {raw} does not name a known card template")]
    UnknownTemplate { raw: u32 },

    /// The template id reaches into the upgrade offsets and cannot be
    /// packed.
    #[error("card template {template} is outside the template range")]
    TemplateOutOfRange { template: u32 },
}

/// Errors from deck normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// A deck needs at least one real card; placeholders do not count.
    #[error("a deck must contain at least one real card")]
    EmptyDeck,
}

/// Errors that can occur in the protocol layer.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a Rust type into bytes).
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning bytes into a Rust type).
    ///
    /// Variant decoding failures nested deep inside a message surface
    /// here too, with the [`VariantError`] text in the message.
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A standalone variant encode/decode failed.
    #[error(transparent)]
    Variant(#[from] VariantError),

    /// Card identity could not be resolved.
    #[error(transparent)]
    Card(#[from] CardError),

    /// Deck rules were violated.
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// The message is invalid at the protocol level.
    ///
    /// For logical errors that pass deserialization but violate protocol
    /// rules, e.g. a catalog file whose keys are not numbers.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

//! Variant families: "exactly one of N shapes" on the wire.
//!
//! Every extensible union in the protocol (jobs, commands, aspects,
//! targets, rejection reasons, ...) travels as a JSON object keyed by
//! shape name, with exactly one key populated:
//!
//! ```text
//! {"Goto": {"waypoints": [...], "walk_mode": 4}}
//! {"NoJob": {}}
//! ```
//!
//! In memory each family is a plain Rust enum. The [`variant_family!`]
//! macro declares the enum and wires it to the shared decoder in this
//! module, which enforces the wire rules:
//!
//! - zero populated keys → [`VariantError::Missing`]
//! - more than one       → [`VariantError::Conflicting`]
//! - a known key whose body does not fit → [`VariantError::Malformed`]
//! - an unknown key      → the family's `Unrecognized` case, with a
//!   `tracing` warning so protocol drift shows up in the logs
//!
//! `null` values are treated as absent, so a sender that writes every
//! shape key and nulls the inactive ones still decodes.

use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::{Map, Value};

use crate::VariantError;

// ---------------------------------------------------------------------------
// VariantFamily
// ---------------------------------------------------------------------------

/// A closed set of wire shapes with a forward-compatible fallback.
///
/// Implemented by [`variant_family!`]; there is rarely a reason to
/// implement it by hand.
pub trait VariantFamily: Sized {
    /// Family name used in errors and logs, e.g. `"Job"`.
    const FAMILY: &'static str;

    /// Every shape name this build understands, in declaration order.
    const SHAPES: &'static [&'static str];

    /// Name of the active shape. For an unrecognized value this is the
    /// raw key the sender used.
    fn shape(&self) -> &str;

    /// Whether this value came from a shape this build does not know.
    fn is_unrecognized(&self) -> bool;

    /// Builds a known shape from its body.
    fn from_known(shape: &str, body: Value) -> Result<Self, serde_json::Error>;

    /// Wraps an unknown shape.
    fn from_unrecognized(unknown: UnknownShape) -> Self;

    /// Whether `shape` is one of [`Self::SHAPES`].
    fn knows(shape: &str) -> bool {
        Self::SHAPES.contains(&shape)
    }
}

// ---------------------------------------------------------------------------
// UnknownShape
// ---------------------------------------------------------------------------

/// A shape from a newer protocol revision, kept verbatim.
///
/// Re-encoding an unknown shape produces the same `{shape: body}` object
/// it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownShape {
    pub shape: String,
    pub body: Value,
}

impl Serialize for UnknownShape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.shape, &self.body)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// encode / decode
// ---------------------------------------------------------------------------

/// Encodes a family value as its single-key wire object.
pub fn encode<F>(value: &F) -> Result<Value, VariantError>
where
    F: VariantFamily + Serialize,
{
    serde_json::to_value(value).map_err(|e| VariantError::Malformed {
        family: F::FAMILY,
        shape: value.shape().to_string(),
        reason: e.to_string(),
    })
}

/// Decodes a single-key wire object into a family value.
pub fn decode<F: VariantFamily>(value: Value) -> Result<F, VariantError> {
    let Value::Object(map) = value else {
        return Err(VariantError::NotAnObject { family: F::FAMILY });
    };
    let (shape, body) = single_entry::<F>(map)?;

    if F::knows(&shape) {
        return F::from_known(&shape, body).map_err(|e| VariantError::Malformed {
            family: F::FAMILY,
            shape,
            reason: e.to_string(),
        });
    }

    tracing::warn!(
        family = F::FAMILY,
        %shape,
        "unrecognized variant shape, keeping it as opaque data"
    );
    Ok(F::from_unrecognized(UnknownShape { shape, body }))
}

/// Pulls the one populated entry out of a shape map.
fn single_entry<F: VariantFamily>(map: Map<String, Value>) -> Result<(String, Value), VariantError> {
    let mut populated: Vec<(String, Value)> =
        map.into_iter().filter(|(_, body)| !body.is_null()).collect();

    match populated.len() {
        0 => Err(VariantError::Missing { family: F::FAMILY }),
        1 => Ok(populated.remove(0)),
        _ => Err(VariantError::Conflicting {
            family: F::FAMILY,
            shapes: populated.into_iter().map(|(shape, _)| shape).collect(),
        }),
    }
}

// ---------------------------------------------------------------------------
// variant_family!
// ---------------------------------------------------------------------------

/// Declares a variant family enum.
///
/// Each shape is written as a struct variant, with `{}` for marker
/// shapes. The macro appends an `Unrecognized(UnknownShape)` case and
/// implements [`VariantFamily`], `Serialize` and `Deserialize`.
///
/// Under the hood the enum also derives serde's externally tagged
/// representation with `#[serde(remote = "Self")]`. That derive is only
/// reachable through the inherent `serialize`/`deserialize` functions it
/// generates, which the hand-written trait impls call for known shapes.
macro_rules! variant_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $shape:tt
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(remote = "Self")]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $shape,
            )*
            /// A shape this build does not know, kept verbatim.
            #[serde(skip)]
            Unrecognized($crate::variant::UnknownShape),
        }

        impl $crate::variant::VariantFamily for $name {
            const FAMILY: &'static str = $family;
            const SHAPES: &'static [&'static str] = &[$(stringify!($variant)),*];

            fn shape(&self) -> &str {
                match self {
                    $( $name::$variant { .. } => stringify!($variant), )*
                    $name::Unrecognized(unknown) => unknown.shape.as_str(),
                }
            }

            fn is_unrecognized(&self) -> bool {
                matches!(self, $name::Unrecognized(_))
            }

            fn from_known(shape: &str, body: serde_json::Value) -> Result<Self, serde_json::Error> {
                let mut wire = serde_json::Map::new();
                wire.insert(shape.to_string(), body);
                $name::deserialize(serde_json::Value::Object(wire))
            }

            fn from_unrecognized(unknown: $crate::variant::UnknownShape) -> Self {
                $name::Unrecognized(unknown)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $name::Unrecognized(unknown) => serde::Serialize::serialize(unknown, serializer),
                    known => $name::serialize(known, serializer),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let wire = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $crate::variant::decode(wire).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use variant_family;

// =========================================================================
// Tests
// =========================================================================

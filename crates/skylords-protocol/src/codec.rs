//! Codec trait and the JSON implementation.
//!
//! The bot protocol is JSON on the wire, but the HTTP layer only talks
//! to a [`Codec`]. Request bodies go through [`Codec::decode`] and
//! response bodies through [`Codec::encode`], so every decoding failure
//! (including variant errors deep inside a tick) comes back as one
//! [`ProtocolError`].

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes typed messages to bytes and decodes them back.
///
/// `Send + Sync + 'static` because the server shares one codec across
/// all worker threads.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or do
    /// not match `T`, including any variant object with zero or several
    /// shapes.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;

    /// MIME type for HTTP bodies.
    fn content_type(&self) -> &'static str;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] using `serde_json`.
///
/// ```rust
/// use skylords_protocol::{ApiHello, Codec, JsonCodec, MapDescriptor};
///
/// let codec = JsonCodec;
/// let hello = ApiHello::current(MapDescriptor::named("Fyre"));
///
/// let bytes = codec.encode(&hello).unwrap();
/// let decoded: ApiHello = codec.decode(&bytes).unwrap();
/// assert_eq!(hello, decoded);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

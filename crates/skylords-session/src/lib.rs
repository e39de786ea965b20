//! Bot sessions for Skylords Reborn.
//!
//! This crate sequences the four requests of a match:
//!
//! 1. **Handshake** ([`Session::hello`]): version check and deck offer
//! 2. **Prepare** ([`Session::prepare`]): the host's deck choice
//! 3. **Start** ([`Session::start`]): the first full snapshot
//! 4. **Tick** ([`Session::tick`]): one snapshot in, commands out, repeated
//!
//! Bot authors implement [`Bot`]; the [`Session`] calls it in order and
//! refuses anything out of order.
//!
//! # How it fits in the stack
//!
//! ```text
//! Server Layer (above)  ← decodes HTTP bodies, enforces the tick budget
//!     ↕
//! Session Layer (this crate)  ← phase machine, deck bookkeeping
//!     ↕
//! Protocol Layer (below)  ← message and variant types
//! ```

mod bot;
mod error;
mod maps;
mod session;

pub use bot::Bot;
pub use error::SessionError;
pub use maps::map_supported;
pub use session::{Phase, Session, SessionConfig};

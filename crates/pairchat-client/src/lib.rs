//! Chat-matching client — cookie reading, search initiation, room calls.
//!
//! The server side (matching algorithm, room lifecycle, message storage)
//! is an external collaborator; this crate implements the contract the
//! original web front-end had with it, with explicit configuration and
//! explicit error paths instead of page globals and unhandled rejections.

pub mod client;
pub mod cookie;
pub mod types;

pub use client::ChatClient;
pub use cookie::{cookie_value, parse_cookie_header, CookiePair};
pub use types::*;

//! Resource bindings for the LeanKit Kanban API.
//!
//! [`CardResource`] and [`BoardResource`] turn typed calls into
//! `(verb, path, body)` requests and hand them to an [`HttpClient`]. The
//! client's result comes back unchanged. [`HttpTransport`] is a ready-made
//! blocking client for the hosted service.
//!
//! ```no_run
//! use leankit::{BoardId, CardId, CardResource, HttpTransport};
//!
//! let transport = HttpTransport::from_env()?;
//! let cards = CardResource::new(&transport);
//! let card = cards.find(&BoardId::from(101), &CardId::from(202))?;
//! println!("{card}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod card;
pub mod client;
pub mod config;
pub mod model;
pub mod transport;

pub use board::BoardResource;
pub use card::CardResource;
pub use client::{HttpClient, Method, Request};
pub use config::{Config, ConfigError};
pub use model::{
    BoardId, BoardVersion, CardBatch, CardId, CardPayload, ExternalId, LaneId, Position, Reply,
};
pub use transport::{HttpTransport, TransportError};

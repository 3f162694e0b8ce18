//! Core of the relaykit workspace: cursor pagination over ordered arrays.
//!
//! This crate is pure and synchronous. It takes an already ordered,
//! already filtered sequence (or a contiguous slice of one) and computes a
//! Relay-style connection window. Fetching, sorting and rendering belong to
//! the caller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     relaykit (binary)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    relaykit-graphql                         │
//! │            (async-graphql types, demo schema)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  relaykit-core  ← YOU ARE HERE              │
//! │        (cursor codec, windowing engine, global ids)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`connection`] - Connection model and the windowing engine
//! - [`cursor`] - Offset cursor codec
//! - [`global_id`] - Global object identifier codec
//! - [`plural`] - Plural identifying lookups
//! - [`error`] - Error types
//! - [`metrics`] - Metric definitions
//!
//! # Example
//!
//! ```
//! use relaykit_core::connection::{connection_from_array, ConnectionArguments};
//! use relaykit_core::cursor::offset_to_cursor;
//!
//! let letters = ["A", "B", "C", "D", "E"];
//! let args = ConnectionArguments {
//!     first: Some(2),
//!     after: Some(offset_to_cursor(1)),
//!     ..Default::default()
//! };
//!
//! let page = connection_from_array(&letters, &args);
//! assert_eq!(page.nodes().copied().collect::<Vec<_>>(), ["C", "D"]);
//! assert!(page.page_info.has_next_page);
//! assert!(!page.page_info.has_previous_page);
//! ```

pub mod connection;
pub mod cursor;
pub mod error;
pub mod global_id;
pub mod metrics;
pub mod plural;

pub use connection::{
    Connection, ConnectionArguments, Cursor, Edge, PageInfo, SliceMetadata, connection_from_array,
    connection_from_array_slice,
};

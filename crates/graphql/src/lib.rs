//! GraphQL rendering of Relay connections.
//!
//! Turns [`relaykit_core`] connections into async-graphql objects and
//! serves them over HTTP. A Star Wars demo schema exercises the whole
//! surface: connections, global ids, node refetching, plural lookups
//! and a mutation.
//!
//! # Rendering a Connection
//!
//! ```ignore
//! use relaykit_graphql::{connection_arguments, define_connection};
//!
//! define_connection!(Ship, ShipEdge, ShipConnection);
//!
//! let args = connection_arguments(first, after, last, before)?;
//! let page = ShipConnection::from(connection_from_array(&ships, &args));
//! ```

mod connection;
mod schema;
mod server;
pub mod starwars;
mod types;

pub use relaykit_core;

pub use connection::{PageInfo, connection_arguments};
pub use schema::{MAX_QUERY_COMPLEXITY, MAX_QUERY_DEPTH, limited_schema_builder};
pub use server::{ServerConfig, router, serve_with_shutdown};
pub use starwars::build_star_wars_schema;
pub use types::StarWarsSchema;

//! Star Wars demo schema.
//!
//! Rebels and Empire factions own fleets of ships, exposed as Relay
//! connections with global ids and a ship-introducing mutation.

mod data;
mod schema;

pub use data::{EMPIRE_ID, FactionRecord, IdAllocator, REBELS_ID, ShipRecord, StarWarsData};
pub use schema::{
    Faction, IntroduceShipInput, IntroduceShipPayload, Mutation, Node, Query, Ship,
    ShipConnection, ShipEdge, build_star_wars_schema,
};

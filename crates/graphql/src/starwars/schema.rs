//! Relay-compliant Star Wars schema.
//!
//! ```text
//! interface Node { id: ID! }
//!
//! type Faction implements Node { id: ID!  name: String!  ships(...): ShipConnection! }
//! type Ship implements Node { id: ID!  name: String! }
//!
//! type Query {
//!   rebels: Faction
//!   empire: Faction
//!   node(id: ID!): Node
//!   ships(names: [String!]!): [Ship]!
//! }
//!
//! type Mutation {
//!   introduceShip(input: IntroduceShipInput!): IntroduceShipPayload!
//! }
//! ```

use std::sync::Arc;

use async_graphql::{Context, ID, InputObject, Interface, Object, Result, SimpleObject};
use tracing::debug;

use relaykit_core::connection_from_array;
use relaykit_core::global_id::{from_global_id, to_global_id};
use relaykit_core::plural::resolve_plural;

use crate::connection::connection_arguments;
use crate::define_connection;
use crate::schema::limited_schema_builder;
use crate::types::StarWarsSchema;

use super::data::{EMPIRE_ID, FactionRecord, REBELS_ID, ShipRecord, StarWarsData};

const SHIP_TYPE: &str = "Ship";
const FACTION_TYPE: &str = "Faction";

/// Build the Star Wars schema over a dataset.
pub fn build_star_wars_schema(data: Arc<StarWarsData>) -> StarWarsSchema {
    limited_schema_builder(Query, Mutation).data(data).finish()
}

// -----------------------------------------------------------------------------
// Node Types
// -----------------------------------------------------------------------------

/// An object with an ID.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The id of the object."))]
pub enum Node {
    Faction(Faction),
    Ship(Ship),
}

/// A ship in the Star Wars saga.
pub struct Ship(ShipRecord);

impl From<ShipRecord> for Ship {
    fn from(record: ShipRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Ship {
    /// The id of the object.
    async fn id(&self) -> ID {
        ID(to_global_id(SHIP_TYPE, &self.0.id))
    }

    /// The name of the ship.
    async fn name(&self) -> &str {
        &self.0.name
    }
}

define_connection!(Ship, ShipEdge, ShipConnection);

/// A faction in the Star Wars saga.
pub struct Faction(FactionRecord);

impl From<FactionRecord> for Faction {
    fn from(record: FactionRecord) -> Self {
        Self(record)
    }
}

#[Object]
impl Faction {
    /// The id of the object.
    async fn id(&self) -> ID {
        ID(to_global_id(FACTION_TYPE, &self.0.id))
    }

    /// The name of the faction.
    async fn name(&self) -> &str {
        &self.0.name
    }

    /// The ships used by the faction.
    async fn ships<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        first: Option<i32>,
        after: Option<String>,
        last: Option<i32>,
        before: Option<String>,
    ) -> Result<ShipConnection> {
        let args = connection_arguments(first, after, last, before)?;
        let data = ctx.data::<Arc<StarWarsData>>()?;

        let ships = data.ships_of(&self.0.id).await;
        Ok(ShipConnection::from(connection_from_array(&ships, &args)))
    }
}

// -----------------------------------------------------------------------------
// Query
// -----------------------------------------------------------------------------

/// Query root of the Star Wars schema.
#[derive(Default)]
pub struct Query;

#[Object]
impl Query {
    async fn rebels<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Faction>> {
        let data = ctx.data::<Arc<StarWarsData>>()?;
        Ok(data.faction(REBELS_ID).await.map(Faction::from))
    }

    async fn empire<'ctx>(&self, ctx: &Context<'ctx>) -> Result<Option<Faction>> {
        let data = ctx.data::<Arc<StarWarsData>>()?;
        Ok(data.faction(EMPIRE_ID).await.map(Faction::from))
    }

    /// Fetches an object given its ID.
    ///
    /// Malformed ids and ids of unknown types resolve to null.
    async fn node<'ctx>(&self, ctx: &Context<'ctx>, id: ID) -> Result<Option<Node>> {
        let data = ctx.data::<Arc<StarWarsData>>()?;

        let resolved = match from_global_id(&id) {
            Ok(resolved) => resolved,
            Err(e) => {
                debug!(id = %id.as_str(), error = %e, "Unresolvable node id");
                return Ok(None);
            }
        };

        let node = match resolved.type_name.as_str() {
            FACTION_TYPE => data
                .faction(&resolved.id)
                .await
                .map(|f| Node::Faction(f.into())),
            SHIP_TYPE => data.ship(&resolved.id).await.map(|s| Node::Ship(s.into())),
            _ => None,
        };
        Ok(node)
    }

    /// Map from ship names to ships, one entry per name.
    ///
    /// Duplicate names resolve to the oldest ship carrying them.
    async fn ships<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        names: Vec<String>,
    ) -> Result<Vec<Option<Ship>>> {
        let data = ctx.data::<Arc<StarWarsData>>()?;
        let ships = data.all_ships().await;

        Ok(resolve_plural(names, |name| {
            ships
                .iter()
                .find(|ship| ship.name == name)
                .cloned()
                .map(Ship::from)
        }))
    }
}

// -----------------------------------------------------------------------------
// Mutation
// -----------------------------------------------------------------------------

#[derive(InputObject)]
pub struct IntroduceShipInput {
    pub client_mutation_id: String,
    pub ship_name: String,
    /// Local or global id of the faction receiving the ship.
    pub faction_id: ID,
}

#[derive(SimpleObject)]
pub struct IntroduceShipPayload {
    pub client_mutation_id: String,
    pub ship: Option<Ship>,
    pub faction: Option<Faction>,
}

/// Mutation root of the Star Wars schema.
#[derive(Default)]
pub struct Mutation;

#[Object]
impl Mutation {
    /// Add a new ship to a faction.
    async fn introduce_ship<'ctx>(
        &self,
        ctx: &Context<'ctx>,
        input: IntroduceShipInput,
    ) -> Result<IntroduceShipPayload> {
        let data = ctx.data::<Arc<StarWarsData>>()?;
        let faction_id = local_faction_id(&input.faction_id);

        let (ship, faction) = data
            .create_ship(&input.ship_name, &faction_id)
            .await
            .ok_or_else(|| {
                async_graphql::Error::new(format!(
                    "Unknown faction: {}",
                    input.faction_id.as_str()
                ))
            })?;

        Ok(IntroduceShipPayload {
            client_mutation_id: input.client_mutation_id,
            ship: Some(ship.into()),
            faction: Some(faction.into()),
        })
    }
}

/// Accept either a faction's global id or its local id.
fn local_faction_id(id: &ID) -> String {
    match from_global_id(id) {
        Ok(resolved) if resolved.type_name == FACTION_TYPE => resolved.id,
        _ => id.to_string(),
    }
}

//! In-memory dataset for the Star Wars demo schema.
//!
//! The data is hard coded for the demo; a real server would fetch it from a
//! backend and hand the ordered result to the connection core.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

/// A ship in the Star Wars saga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipRecord {
    pub id: String,
    pub name: String,
}

/// A faction in the Star Wars saga, with its ships in fleet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionRecord {
    pub id: String,
    pub name: String,
    pub ships: Vec<String>,
}

/// Hands out local ids for newly created records.
///
/// Owned by the dataset it serves.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Allocator whose first id is `next`.
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}

#[derive(Debug)]
struct Dataset {
    ships: HashMap<String, ShipRecord>,
    /// Ship ids in creation order.
    ship_order: Vec<String>,
    factions: HashMap<String, FactionRecord>,
    ids: IdAllocator,
}

/// Local id of the Rebel Alliance.
pub const REBELS_ID: &str = "1";
/// Local id of the Galactic Empire.
pub const EMPIRE_ID: &str = "2";

/// Shared, mutable Star Wars dataset.
#[derive(Debug)]
pub struct StarWarsData {
    inner: RwLock<Dataset>,
}

impl StarWarsData {
    /// The original trilogy's factions and ships.
    pub fn new() -> Self {
        let seed = [
            ("1", "X-Wing"),
            ("2", "Y-Wing"),
            ("3", "A-Wing"),
            // Technically Corellian, but it flew in the service of the rebels.
            ("4", "Millenium Falcon"),
            ("5", "Home One"),
            ("6", "TIE Fighter"),
            ("7", "TIE Interceptor"),
            ("8", "Executor"),
        ];
        let ship_order = seed.iter().map(|(id, _)| id.to_string()).collect();
        let ships = seed
            .into_iter()
            .map(|(id, name)| {
                (
                    id.to_string(),
                    ShipRecord {
                        id: id.to_string(),
                        name: name.to_string(),
                    },
                )
            })
            .collect();

        let factions = [
            (
                REBELS_ID,
                "Alliance to Restore the Republic",
                &["1", "2", "3", "4", "5"][..],
            ),
            (EMPIRE_ID, "Galactic Empire", &["6", "7", "8"][..]),
        ]
        .into_iter()
        .map(|(id, name, ships)| {
            (
                id.to_string(),
                FactionRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    ships: ships.iter().map(|s| s.to_string()).collect(),
                },
            )
        })
        .collect();

        Self {
            inner: RwLock::new(Dataset {
                ships,
                ship_order,
                factions,
                ids: IdAllocator::starting_at(10),
            }),
        }
    }

    pub async fn ship(&self, id: &str) -> Option<ShipRecord> {
        self.inner.read().await.ships.get(id).cloned()
    }

    pub async fn faction(&self, id: &str) -> Option<FactionRecord> {
        self.inner.read().await.factions.get(id).cloned()
    }

    /// Every ship, in creation order.
    pub async fn all_ships(&self) -> Vec<ShipRecord> {
        let data = self.inner.read().await;
        data.ship_order
            .iter()
            .filter_map(|id| data.ships.get(id).cloned())
            .collect()
    }

    /// Ships of a faction, in fleet order.
    pub async fn ships_of(&self, faction_id: &str) -> Vec<ShipRecord> {
        let data = self.inner.read().await;
        let Some(faction) = data.factions.get(faction_id) else {
            return Vec::new();
        };

        faction
            .ships
            .iter()
            .filter_map(|id| data.ships.get(id).cloned())
            .collect()
    }

    /// Create a ship and append it to a faction's fleet.
    ///
    /// Returns `None`, creating nothing, when the faction does not exist.
    pub async fn create_ship(
        &self,
        ship_name: &str,
        faction_id: &str,
    ) -> Option<(ShipRecord, FactionRecord)> {
        let mut data = self.inner.write().await;
        if !data.factions.contains_key(faction_id) {
            return None;
        }

        let ship = ShipRecord {
            id: data.ids.allocate(),
            name: ship_name.to_string(),
        };
        data.ships.insert(ship.id.clone(), ship.clone());
        data.ship_order.push(ship.id.clone());

        let faction = data.factions.get_mut(faction_id)?;
        faction.ships.push(ship.id.clone());
        let faction = faction.clone();

        debug!(ship = %ship.id, faction = %faction.id, "Ship introduced");
        Some((ship, faction))
    }
}

impl Default for StarWarsData {
    fn default() -> Self {
        Self::new()
    }
}

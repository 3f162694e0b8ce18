//! GraphQL type definitions.

use async_graphql::{EmptySubscription, Schema};

use crate::starwars::{Mutation, Query};

/// The Star Wars demo schema type.
pub type StarWarsSchema = Schema<Query, Mutation, EmptySubscription>;

//! GraphQL schema configuration.
//!
//! Shared limits and the builder entry point used by every schema served
//! from this crate.

use async_graphql::{EmptySubscription, ObjectType, Schema, SchemaBuilder};

// -----------------------------------------------------------------------------
// Schema Configuration
// -----------------------------------------------------------------------------

/// Maximum query depth to prevent deeply nested queries (DoS protection).
/// Note: GraphQL introspection requires depth ~13, so we use 15 to allow it.
pub const MAX_QUERY_DEPTH: usize = 15;

/// Maximum query complexity score (DoS protection).
/// Each field has a default complexity of 1, nested objects multiply.
pub const MAX_QUERY_COMPLEXITY: usize = 500;

// -----------------------------------------------------------------------------
// Schema Builder
// -----------------------------------------------------------------------------

/// Create a schema builder with the depth and complexity limits applied.
///
/// # Example
///
/// ```ignore
/// let schema = limited_schema_builder(Query, Mutation)
///     .data(dataset)
///     .finish();
/// ```
pub fn limited_schema_builder<Q, M>(query: Q, mutation: M) -> SchemaBuilder<Q, M, EmptySubscription>
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
{
    Schema::build(query, mutation, EmptySubscription)
        .limit_depth(MAX_QUERY_DEPTH)
        .limit_complexity(MAX_QUERY_COMPLEXITY)
}

//! Relay connection types for async-graphql.
//!
//! Core [`relaykit_core::Connection`] values are rendered into per-node
//! `XEdge` / `XConnection` objects sharing one [`PageInfo`] type.

use async_graphql::Result;

use relaykit_core::{ConnectionArguments, Cursor};

/// Information about pagination in a connection.
#[derive(async_graphql::SimpleObject, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,
    /// When paginating backwards, the cursor to continue.
    pub start_cursor: Option<String>,
    /// When paginating forwards, the cursor to continue.
    pub end_cursor: Option<String>,
}

impl From<relaykit_core::PageInfo> for PageInfo {
    fn from(info: relaykit_core::PageInfo) -> Self {
        Self {
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
            start_cursor: info.start_cursor.map(|c| c.value),
            end_cursor: info.end_cursor.map(|c| c.value),
        }
    }
}

/// Generate Relay-style connection types (Edge + Connection) with From impl.
///
/// Any core connection whose node converts into `$node` can be rendered.
#[macro_export]
macro_rules! define_connection {
    ($node:ty, $edge:ident, $connection:ident) => {
        /// An edge in a connection.
        #[derive(async_graphql::SimpleObject)]
        pub struct $edge {
            /// The item at the end of the edge.
            pub node: $node,
            /// A cursor for use in pagination.
            pub cursor: String,
        }

        /// A connection to a list of items.
        #[derive(async_graphql::SimpleObject)]
        pub struct $connection {
            /// A list of edges.
            pub edges: Vec<$edge>,
            /// Information to aid in pagination.
            pub page_info: $crate::PageInfo,
        }

        impl<M: Into<$node>> From<$crate::relaykit_core::Connection<M>> for $connection {
            fn from(conn: $crate::relaykit_core::Connection<M>) -> Self {
                Self {
                    edges: conn
                        .edges
                        .into_iter()
                        .map(|e| $edge {
                            node: e.node.into(),
                            cursor: e.cursor.value,
                        })
                        .collect(),
                    page_info: $crate::PageInfo::from(conn.page_info),
                }
            }
        }
    };
}

/// Normalize GraphQL connection arguments.
///
/// Negative `first` / `last` are rejected with a GraphQL error.
pub fn connection_arguments(
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>,
) -> Result<ConnectionArguments> {
    ConnectionArguments::from_signed(first, after.map(Cursor::from), last, before.map(Cursor::from))
        .map_err(|e| async_graphql::Error::new(e.to_string()))
}

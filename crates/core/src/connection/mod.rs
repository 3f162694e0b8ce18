//! Connection types for cursor pagination.
//!
//! These types implement Relay-style cursor pagination, commonly used
//! with GraphQL but also applicable to other APIs.

mod array;

use std::fmt;

use serde::Serialize;

use crate::error::{ArgumentError, ArgumentResult};

pub use array::{connection_from_array, connection_from_array_slice};

/// Opaque cursor for pagination.
///
/// The cursor value is implementation-specific and should be treated
/// as an opaque token by clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cursor {
    pub value: String,
}

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self { value }
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Pagination arguments for a connection field.
///
/// Supports forward pagination (`first`/`after`) and backward
/// pagination (`last`/`before`), alone or combined. `first` is applied
/// before `last`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionArguments {
    /// Maximum number of items to keep from the front of the window.
    pub first: Option<usize>,
    /// Only items after this cursor.
    pub after: Option<Cursor>,
    /// Maximum number of items to keep from the back of the window.
    pub last: Option<usize>,
    /// Only items before this cursor.
    pub before: Option<Cursor>,
}

impl ConnectionArguments {
    /// Build arguments from signed limits as carried by GraphQL `Int`.
    ///
    /// Negative limits are rejected rather than clamped.
    pub fn from_signed(
        first: Option<i32>,
        after: Option<Cursor>,
        last: Option<i32>,
        before: Option<Cursor>,
    ) -> ArgumentResult<Self> {
        let first = first
            .map(|n| usize::try_from(n).map_err(|_| ArgumentError::NegativeFirst(n)))
            .transpose()?;
        let last = last
            .map(|n| usize::try_from(n).map_err(|_| ArgumentError::NegativeLast(n)))
            .transpose()?;

        Ok(Self {
            first,
            after,
            last,
            before,
        })
    }
}

/// Position of a supplied sub-slice within the full logical collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceMetadata {
    /// Offset of the slice's first element in the full collection.
    pub slice_start: usize,
    /// Total length of the full collection.
    pub array_length: usize,
}

/// Paginated result set with edges and page info.
///
/// This is the Relay connection pattern for cursor-based pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// List of edges (node + cursor pairs).
    pub edges: Vec<Edge<T>>,
    /// Information about the current page.
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// A connection with no edges and default page info.
    pub fn empty() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the nodes of this page, in order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Convert every node, keeping cursors and page info.
    pub fn map<U, F>(self, mut f: F) -> Connection<U>
    where
        F: FnMut(T) -> U,
    {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    node: f(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single item in a paginated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<T> {
    /// The actual item.
    pub node: T,
    /// Cursor for this item (used for pagination).
    pub cursor: Cursor,
}

/// Information about the current page in a paginated result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Cursor of the first item in this page.
    pub start_cursor: Option<Cursor>,
    /// Cursor of the last item in this page.
    pub end_cursor: Option<Cursor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_rejects_negative_limits() {
        assert_eq!(
            ConnectionArguments::from_signed(Some(-1), None, None, None),
            Err(ArgumentError::NegativeFirst(-1))
        );
        assert_eq!(
            ConnectionArguments::from_signed(None, None, Some(-5), None),
            Err(ArgumentError::NegativeLast(-5))
        );
    }

    #[test]
    fn test_from_signed_keeps_zero_and_cursors() {
        let args =
            ConnectionArguments::from_signed(Some(0), Some("a".into()), Some(3), None).unwrap();

        assert_eq!(args.first, Some(0));
        assert_eq!(args.last, Some(3));
        assert_eq!(args.after, Some(Cursor::new("a")));
        assert_eq!(args.before, None);
    }

    #[test]
    fn test_map_keeps_cursors_and_page_info() {
        let conn = Connection {
            edges: vec![Edge {
                node: 7,
                cursor: Cursor::new("c7"),
            }],
            page_info: PageInfo {
                has_next_page: true,
                ..Default::default()
            },
        };

        let mapped = conn.map(|n| n.to_string());
        assert_eq!(mapped.edges[0].node, "7");
        assert_eq!(mapped.edges[0].cursor.as_str(), "c7");
        assert!(mapped.page_info.has_next_page);
    }

    #[test]
    fn test_serializes_with_relay_field_names() {
        let conn = Connection {
            edges: vec![Edge {
                node: "A",
                cursor: Cursor::new("YXJyYXljb25uZWN0aW9uOjA="),
            }],
            page_info: PageInfo {
                has_next_page: false,
                has_previous_page: false,
                start_cursor: Some(Cursor::new("YXJyYXljb25uZWN0aW9uOjA=")),
                end_cursor: Some(Cursor::new("YXJyYXljb25uZWN0aW9uOjA=")),
            },
        };

        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "edges": [{ "node": "A", "cursor": "YXJyYXljb25uZWN0aW9uOjA=" }],
                "pageInfo": {
                    "hasNextPage": false,
                    "hasPreviousPage": false,
                    "startCursor": "YXJyYXljb25uZWN0aW9uOjA=",
                    "endCursor": "YXJyYXljb25uZWN0aW9uOjA="
                }
            })
        );
    }

    #[test]
    fn test_empty_page_info_serializes_null_cursors() {
        let json = serde_json::to_value(Connection::<u8>::empty()).unwrap();
        assert_eq!(json["edges"], serde_json::json!([]));
        assert_eq!(json["pageInfo"]["startCursor"], serde_json::Value::Null);
        assert_eq!(json["pageInfo"]["endCursor"], serde_json::Value::Null);
    }
}

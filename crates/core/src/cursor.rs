//! Offset cursor codec.
//!
//! A cursor is the standard base64 encoding of `"arrayconnection:" + offset`.
//! The format is kept bit-for-bit compatible with other Relay servers so that
//! clients holding cursors keep working, but callers must treat it as opaque.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::connection::Cursor;
use crate::error::{CursorError, CursorResult};
use crate::metrics::record_cursor_decode_failure;

/// Prefix carried by every offset cursor before encoding.
pub const CURSOR_PREFIX: &str = "arrayconnection:";

/// Create the cursor for an offset.
pub fn offset_to_cursor(offset: i64) -> Cursor {
    Cursor::new(STANDARD.encode(format!("{CURSOR_PREFIX}{offset}")))
}

/// Re-derive the offset from a cursor.
pub fn cursor_to_offset(cursor: &Cursor) -> CursorResult<i64> {
    let bytes = STANDARD
        .decode(cursor.as_str())
        .map_err(|e| CursorError::InvalidEncoding(e.to_string()))?;
    let text = std::str::from_utf8(&bytes).map_err(|_| CursorError::InvalidUtf8)?;
    let offset = text
        .strip_prefix(CURSOR_PREFIX)
        .ok_or(CursorError::MissingPrefix {
            prefix: CURSOR_PREFIX,
        })?;

    offset
        .parse::<i64>()
        .map_err(|_| CursorError::InvalidOffset(offset.to_string()))
}

/// Offset of an optional cursor, or `default` when it is absent or invalid.
///
/// This is the only decode path used by the windowing engine: an unusable
/// cursor simply stops constraining the window.
pub fn offset_with_default(cursor: Option<&Cursor>, default: i64) -> i64 {
    let Some(cursor) = cursor else {
        return default;
    };

    match cursor_to_offset(cursor) {
        Ok(offset) => offset,
        Err(e) => {
            debug!(cursor = %cursor, error = %e, default, "Ignoring invalid cursor");
            record_cursor_decode_failure();
            default
        }
    }
}

/// Cursor of the first element in `data` equal to `object`.
///
/// Returns `None` when `object` is not a member of `data`.
pub fn cursor_for_object_in_connection<T: PartialEq>(data: &[T], object: &T) -> Option<Cursor> {
    data.iter()
        .position(|item| item == object)
        .map(|index| offset_to_cursor(i64::try_from(index).unwrap_or(i64::MAX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_wire_format_is_stable() {
        // Cursors issued by other Relay servers for the same offsets.
        assert_eq!(offset_to_cursor(0).as_str(), "YXJyYXljb25uZWN0aW9uOjA=");
        assert_eq!(offset_to_cursor(4).as_str(), "YXJyYXljb25uZWN0aW9uOjQ=");
        assert_eq!(offset_to_cursor(-1).as_str(), "YXJyYXljb25uZWN0aW9uOi0x");
    }

    #[test]
    fn test_decode_rejects_each_failure_mode() {
        assert!(matches!(
            cursor_to_offset(&Cursor::new("not base64!")),
            Err(CursorError::InvalidEncoding(_))
        ));

        // base64("Ship:1")
        assert_eq!(
            cursor_to_offset(&Cursor::new("U2hpcDox")),
            Err(CursorError::MissingPrefix {
                prefix: CURSOR_PREFIX
            })
        );

        // base64("arrayconnection:six")
        let cursor = Cursor::new(STANDARD.encode("arrayconnection:six"));
        assert_eq!(
            cursor_to_offset(&cursor),
            Err(CursorError::InvalidOffset("six".into()))
        );

        // base64([0xff, 0xfe])
        assert_eq!(
            cursor_to_offset(&Cursor::new("//4=")),
            Err(CursorError::InvalidUtf8)
        );
    }

    #[test]
    fn test_trailing_newline_makes_offset_invalid() {
        // base64("arrayconnection:6\n")
        let cursor = Cursor::new("YXJyYXljb25uZWN0aW9uOjYK");
        assert!(matches!(
            cursor_to_offset(&cursor),
            Err(CursorError::InvalidOffset(_))
        ));
        assert_eq!(offset_with_default(Some(&cursor), 42), 42);
    }

    #[test]
    fn test_offset_with_default_handles_absent_and_empty() {
        assert_eq!(offset_with_default(None, -1), -1);
        assert_eq!(offset_with_default(Some(&Cursor::new("")), 7), 7);
        assert_eq!(offset_with_default(Some(&offset_to_cursor(3)), 7), 3);
    }

    #[test]
    fn test_cursor_for_object_in_connection() {
        let letters = ["A", "B", "C", "D", "E"];

        assert_eq!(
            cursor_for_object_in_connection(&letters, &"B"),
            Some(Cursor::new("YXJyYXljb25uZWN0aW9uOjE="))
        );
        assert_eq!(cursor_for_object_in_connection(&letters, &"F"), None);
    }

    #[test]
    fn test_object_cursor_matches_connection_edges() {
        use crate::connection::{ConnectionArguments, connection_from_array};

        let letters = ["A", "B", "C", "D", "E"];
        let conn = connection_from_array(&letters, &ConnectionArguments::default());

        for edge in &conn.edges {
            assert_eq!(
                cursor_for_object_in_connection(&letters, &edge.node),
                Some(edge.cursor.clone())
            );
        }
    }

    proptest! {
        #[test]
        fn prop_offset_round_trip(offset in any::<i64>()) {
            prop_assert_eq!(cursor_to_offset(&offset_to_cursor(offset)), Ok(offset));
        }

        #[test]
        fn prop_unprefixed_strings_collapse_to_default(
            text in "[a-zA-Z0-9:]{0,24}",
            default in any::<i64>(),
        ) {
            prop_assume!(!text.starts_with(CURSOR_PREFIX));

            let raw = Cursor::new(text.clone());
            let encoded = Cursor::new(STANDARD.encode(&text));
            prop_assert_eq!(offset_with_default(Some(&encoded), default), default);

            // A raw string only decodes if it happens to be a valid offset cursor.
            if cursor_to_offset(&raw).is_err() {
                prop_assert_eq!(offset_with_default(Some(&raw), default), default);
            }
        }
    }
}

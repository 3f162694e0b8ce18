//! Connections over in-memory arrays.
//!
//! Pagination uses array offsets as cursors, so it is only stable while the
//! underlying array is. Both entry points share [`build_connection`], which
//! works in offsets of the full logical collection.

use tracing::trace;

use crate::cursor::{offset_to_cursor, offset_with_default};
use crate::metrics::record_connection_built;

use super::{Connection, ConnectionArguments, Edge, PageInfo, SliceMetadata};

/// Build a connection over a fully materialized, ordered array.
pub fn connection_from_array<T: Clone>(data: &[T], args: &ConnectionArguments) -> Connection<T> {
    let meta = SliceMetadata {
        slice_start: 0,
        array_length: data.len(),
    };

    let connection = build_connection(data, args, meta);
    record_connection_built("array", connection.len());
    connection
}

/// Build a connection over a contiguous sub-slice of a larger collection.
///
/// `meta` locates `slice` within the full collection. The slice is trusted to
/// be exactly `full[slice_start..slice_start + slice.len()]`; items it does
/// not contain are never returned, even when the arguments would select them.
pub fn connection_from_array_slice<T: Clone>(
    slice: &[T],
    args: &ConnectionArguments,
    meta: SliceMetadata,
) -> Connection<T> {
    let connection = build_connection(slice, args, meta);
    record_connection_built("slice", connection.len());
    connection
}

fn build_connection<T: Clone>(
    slice: &[T],
    args: &ConnectionArguments,
    meta: SliceMetadata,
) -> Connection<T> {
    let array_length = to_offset(meta.array_length);
    let slice_start = to_offset(meta.slice_start);
    let slice_end = slice_start
        .saturating_add(to_offset(slice.len()))
        .min(array_length);

    let after_offset = offset_with_default(args.after.as_ref(), -1);
    let before_offset = offset_with_default(args.before.as_ref(), array_length.saturating_add(1));

    // Cursor bounds, before any limit is applied.
    let lower = after_offset.max(-1).saturating_add(1);
    let upper = before_offset.min(array_length);
    if lower >= upper {
        return Connection::empty();
    }

    let mut start = lower;
    let mut end = upper;
    if let Some(first) = args.first {
        end = end.min(start.saturating_add(to_offset(first)));
    }
    if let Some(last) = args.last {
        start = start.max(end.saturating_sub(to_offset(last)));
    }

    let start = start.max(slice_start);
    let end = end.min(slice_end);

    trace!(lower, upper, start, end, slice_start, slice_end, "Connection window");

    if start >= end {
        return Connection::empty();
    }

    let local = (start - slice_start) as usize..(end - slice_start) as usize;
    let edges: Vec<Edge<T>> = slice[local]
        .iter()
        .zip(start..)
        .map(|(node, offset)| Edge {
            node: node.clone(),
            cursor: offset_to_cursor(offset),
        })
        .collect();

    // The first and last pre-limit edges sit at `lower` and `upper - 1`.
    let page_info = PageInfo {
        has_previous_page: start != lower,
        has_next_page: end != upper,
        start_cursor: edges.first().map(|e| e.cursor.clone()),
        end_cursor: edges.last().map(|e| e.cursor.clone()),
    };

    Connection { edges, page_info }
}

fn to_offset(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

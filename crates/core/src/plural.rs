//! Plural identifying lookups.
//!
//! A plural identifying field takes a list of inputs (usernames, slugs, ...)
//! and returns one result per input, in the same order.

/// Resolve every input independently.
///
/// An input that resolves to nothing leaves `None` at its position; it never
/// shortens the list or fails the others.
pub fn resolve_plural<I, O, F>(
    inputs: impl IntoIterator<Item = I>,
    resolve_single: F,
) -> Vec<Option<O>>
where
    F: FnMut(I) -> Option<O>,
{
    inputs.into_iter().map(resolve_single).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_follow_input_order() {
        let urls = resolve_plural(["dschafer", "leebyron", "schrockn"], |name| {
            Some(format!("www.facebook.com/{name}"))
        });

        assert_eq!(
            urls,
            [
                Some("www.facebook.com/dschafer".to_string()),
                Some("www.facebook.com/leebyron".to_string()),
                Some("www.facebook.com/schrockn".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_results_keep_their_slot() {
        let found = resolve_plural([1, 2, 3], |n| (n != 2).then_some(n * 10));
        assert_eq!(found, [Some(10), None, Some(30)]);
    }
}

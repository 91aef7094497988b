//! Scalar and list values for the detail view.

use std::borrow::Borrow;

/// Formats a boolean as `True` or `False`.
#[must_use]
pub const fn format_bool(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Joins items with `", "`. An empty slice yields an empty string.
#[must_use]
pub fn format_list<S: Borrow<str>>(items: &[S]) -> String {
    items.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bool_is_title_cased() {
        assert_eq!(format_bool(true), "True");
        assert_eq!(format_bool(false), "False");
    }

    #[test]
    fn format_list_joins_with_comma_space() {
        assert_eq!(format_list(&["a", "b"]), "a, b");
        assert_eq!(format_list(&["root".to_string()]), "root");
    }

    #[test]
    fn format_list_empty_is_empty_string() {
        let empty: [&str; 0] = [];
        assert_eq!(format_list(&empty), "");
    }
}

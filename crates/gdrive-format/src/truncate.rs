//! Center-ellipsis shortening of display strings.
//!
//! Widths are counted in Unicode scalar values, so multi-byte characters
//! count as one unit and are never split.

/// Marker inserted in place of the dropped characters.
pub const ELLIPSIS: &str = "...";

/// Smallest width that still gets truncated. Narrower limits leave the
/// input untouched.
pub const MIN_TRUNCATE_WIDTH: usize = 9;

/// Shortens `text` to exactly `max_width` characters by replacing a run
/// in the middle with [`ELLIPSIS`].
///
/// Text that already fits, or a `max_width` below [`MIN_TRUNCATE_WIDTH`],
/// is returned unchanged.
///
/// The cut starts at the first position where the left offset reaches
/// the mirrored right offset, so when the kept characters cannot be split
/// evenly the head keeps one more than the tail.
///
/// ```rust
/// use gdrive_format::truncate::truncate;
///
/// assert_eq!(truncate("abcdefghij", 9), "abc...hij");
/// assert_eq!(truncate("abcdefghijk", 10), "abcd...ijk");
/// assert_eq!(truncate("short", 3), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width || max_width < MIN_TRUNCATE_WIDTH {
        return text.to_owned();
    }

    // Characters to drop, including room for the marker itself.
    let mut remaining = char_count - max_width + ELLIPSIS.chars().count();

    let mut truncated = String::with_capacity(text.len());
    let mut skipping = false;

    for (left_offset, ch) in text.chars().enumerate() {
        if !skipping {
            let right_offset = char_count.saturating_sub(left_offset + remaining);
            if left_offset >= right_offset {
                skipping = true;
                truncated.push_str(ELLIPSIS);
            }
        }

        if skipping && remaining > 0 {
            remaining -= 1;
            continue;
        }

        truncated.push(ch);
    }

    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn empty_string_is_unchanged() {
        assert_eq!(truncate("", 9), "");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn text_that_fits_is_unchanged() {
        assert_eq!(truncate("abcdefghi", 9), "abcdefghi");
        assert_eq!(truncate("abc", 40), "abc");
    }

    #[test]
    fn width_below_minimum_is_ignored() {
        let long = "a-very-long-file-name.tar.gz";
        for w in 0..MIN_TRUNCATE_WIDTH {
            assert_eq!(truncate(long, w), long, "width {w}");
        }
    }

    #[test]
    fn even_split_keeps_head_and_tail_equal() {
        assert_eq!(truncate("abcdefghij", 9), "abc...hij");
        assert_eq!(truncate("abcdefghijkl", 9), "abc...jkl");
    }

    #[test]
    fn uneven_split_favours_the_head() {
        assert_eq!(truncate("abcdefghijk", 10), "abcd...ijk");
        assert_eq!(truncate("0123456789abcdef", 12), "01234...cdef");
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(truncate("åäöåäöåäöå", 9), "åäö...äöå");
        assert_eq!(truncate("日本語のファイル名です", 9), "日本語...名です");
    }

    #[test]
    fn emoji_are_never_split() {
        let input = "🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀🦀";
        let out = truncate(input, 9);
        assert_eq!(width(&out), 9);
        assert!(out.starts_with("🦀🦀🦀"));
        assert!(out.ends_with("🦀🦀🦀"));
    }

    #[test]
    fn output_has_requested_width_and_one_marker() {
        let input = "The quick brown fox jumps over the lazy dog";
        for w in MIN_TRUNCATE_WIDTH..width(input) {
            let out = truncate(input, w);
            assert_eq!(width(&out), w, "width {w}: {out:?}");
            assert_eq!(out.matches(ELLIPSIS).count(), 1, "width {w}: {out:?}");
        }
    }

    #[test]
    fn output_keeps_original_head_and_tail() {
        let input = "quarterly-financial-report-final-v2.xlsx";
        for w in MIN_TRUNCATE_WIDTH..width(input) {
            let out = truncate(input, w);
            let (head, tail) = out.split_once(ELLIPSIS).expect("marker present");
            assert!(input.starts_with(head), "width {w}: {out:?}");
            assert!(input.ends_with(tail), "width {w}: {out:?}");
            assert!(width(head) >= width(tail), "width {w}: {out:?}");
            assert!(width(head) - width(tail) <= 1, "width {w}: {out:?}");
        }
    }
}

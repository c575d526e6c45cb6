//! Greedy word wrapping for transcript text.
//!
//! Tokens are never split: a token wider than the column budget gets a line
//! of its own and overflows it. Widths are terminal display columns.

use textwrap::{Options, WordSeparator, WrapAlgorithm};

/// Wrap `text` into lines no wider than `width` display columns.
///
/// Runs of whitespace (including newlines) collapse to a single separator.
/// Whitespace-only input produces no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }

    // Every token is at least one column wide, so width 1 already isolates them
    let options = Options::new(width.max(1))
        .break_words(false)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn wrap_empty_text() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \n\t ", 10).is_empty());
    }

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("hello world", 11), vec!["hello world"]);
    }

    #[test]
    fn wrap_breaks_at_token_boundary() {
        assert_eq!(wrap("hello world", 10), vec!["hello", "world"]);
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn wrap_collapses_whitespace_runs() {
        assert_eq!(wrap("a   b\n\nc", 80), vec!["a b c"]);
    }

    #[test]
    fn wrap_long_token_gets_own_line_unsplit() {
        let lines = wrap("tiny supercalifragilistic end", 8);
        assert_eq!(lines, vec!["tiny", "supercalifragilistic", "end"]);
    }

    #[test]
    fn wrap_zero_width_puts_each_token_alone() {
        assert_eq!(wrap("a b c", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn wrap_measures_display_columns() {
        // Each CJK glyph is two columns wide
        assert_eq!(wrap("日本 語", 4), vec!["日本", "語"]);
        assert_eq!(wrap("日本 語", 7), vec!["日本 語"]);
    }

    #[test]
    fn wrap_respects_width_unless_single_long_token() {
        let text = "Fascinating! This reminds me of something... but I'm just a mock AI \
                    so I'll make something up: Did you know that honey never spoils? \
                    pneumonoultramicroscopicsilicovolcanoconiosis";
        for width in 1..40 {
            for line in wrap(text, width) {
                let w = line.width();
                if w > width {
                    assert!(!line.contains(' '), "overflowing line {line:?} has several tokens");
                }
            }
        }
    }

    #[test]
    fn wrap_joins_greedily_after_an_overflowing_token() {
        assert_eq!(
            wrap("a bb cccccccccc d ee", 4),
            vec!["a bb", "cccccccccc", "d ee"]
        );
    }

    #[test]
    fn wrap_is_deterministic() {
        let text = "one two three four five six";
        assert_eq!(wrap(text, 9), wrap(text, 9));
    }
}

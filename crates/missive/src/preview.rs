//! Post preview trimming.
//!
//! Messages of the post category render as markdown; conversation lists and
//! notifications show a short plain-text preview instead. The preview keeps
//! the first line, capped at [`PREVIEW_LIMIT`] characters, with markdown
//! control codes stripped.

use pulldown_cmark::{Event, Parser};

/// Maximum number of characters kept in a preview.
pub const PREVIEW_LIMIT: usize = 60;

/// Trim post content down to its one-line plain-text preview.
///
/// The content is cut at the first line break or after [`PREVIEW_LIMIT`]
/// characters, whichever comes first; a cut at the limit appends `"..."`,
/// even when a line break lands on the same position. Cuts land on character
/// boundaries, never inside a multi-byte sequence.
pub fn post_preview(content: &str) -> String {
    let mut end = content.len();
    let mut suffix = "";

    for (count, (index, character)) in content.char_indices().enumerate() {
        if character == '\n' || count == PREVIEW_LIMIT {
            end = index;
            if count == PREVIEW_LIMIT {
                suffix = "...";
            }
            break;
        }
    }

    let mut preview = strip_markdown(&content[..end]);
    preview.push_str(suffix);
    preview
}

fn strip_markdown(source: &str) -> String {
    let mut text = String::with_capacity(source.len());

    for event in Parser::new(source) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_single_line_passes_through() {
        assert_eq!(post_preview("hello"), "hello");
    }

    #[test]
    fn test_cuts_at_first_line_break_without_ellipsis() {
        assert_eq!(post_preview("# Release notes\nLots of body text"), "Release notes");
    }

    #[test]
    fn test_long_content_is_capped_with_ellipsis() {
        let content = "a".repeat(80);

        assert_eq!(post_preview(&content), format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn test_content_at_exactly_the_limit_is_untouched() {
        let content = "b".repeat(60);

        assert_eq!(post_preview(&content), content);
    }

    #[test]
    fn test_line_break_at_the_limit_still_gets_the_ellipsis() {
        let content = format!("{}\nsecond line", "a".repeat(60));

        assert_eq!(post_preview(&content), format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn test_cap_lands_on_character_boundaries() {
        let content = "語".repeat(70);

        assert_eq!(post_preview(&content), format!("{}...", "語".repeat(60)));
    }

    #[test]
    fn test_markdown_controls_are_stripped() {
        assert_eq!(
            post_preview("**bold** and [a link](https://example.com)"),
            "bold and a link"
        );
    }

    #[test]
    fn test_inline_code_text_is_kept() {
        assert_eq!(post_preview("run `missive --help` first"), "run missive --help first");
    }
}

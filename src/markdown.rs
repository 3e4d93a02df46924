//! Markdown Flattening
//!
//! Item content is stored as Markdown. The list only shows a single line of it,
//! so markup is dropped and block boundaries collapse to single spaces.

use pulldown_cmark::{Event, Options, Parser, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

/// Render markdown as plain text on one line
pub fn plain_text(text: &str) -> String {
    let mut out = String::new();

    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak | Event::Rule => out.push(' '),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::TableCell
                | TagEnd::CodeBlock,
            ) => out.push(' '),
            // Raw HTML carries no readable text
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_markup_is_dropped() {
        assert_eq!(plain_text("Hello *world*, see `main()`"), "Hello world, see main()");
        assert_eq!(plain_text("[docs](https://example.com) ~~old~~"), "docs old");
    }

    #[test]
    fn test_blocks_join_with_spaces() {
        let md = "# Title\n\nFirst line\nsecond line\n\n- one\n- two\n";
        assert_eq!(plain_text(md), "Title First line second line one two");
    }

    #[test]
    fn test_html_and_images_are_skipped() {
        assert_eq!(plain_text("<div>raw</div>\n\n![alt](a.png) after"), "alt after");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(plain_text(""), "");
        assert_eq!(plain_text("   \n\n"), "");
    }
}

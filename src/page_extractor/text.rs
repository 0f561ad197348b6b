//! Visible-text extraction from HTML
//!
//! Walks the parsed document in order, collects every text node that a reader
//! would actually see, and joins the trimmed fragments with single spaces.
//! html5ever recovers from any input, so malformed markup yields best-effort
//! text instead of an error.

use ego_tree::iter::Edge;
use scraper::{Html, node::Node};

use crate::utils::{PLACEHOLDER, visible_text_join};

/// Elements whose text content is never rendered
pub const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extract a plain-text detail snippet from page markup
///
/// Returns [`PLACEHOLDER`] (`"N/A"`) for empty input. Otherwise returns the
/// visible text in document order, at most `char_limit` characters long.
/// Markup that contains no visible text yields an empty string.
///
/// # Examples
/// ```
/// # use placescrape::page_extractor::extract_details;
/// assert_eq!(extract_details("", 600), "N/A");
/// assert_eq!(extract_details("<p>Hello</p>", 600), "Hello");
/// assert_eq!(
///     extract_details("<h1> Brew </h1><script>track()</script><p>Bar</p>", 600),
///     "Brew Bar"
/// );
/// assert_eq!(extract_details("<p>Hello</p>", 3), "Hel");
/// ```
#[must_use]
pub fn extract_details(html: &str, char_limit: usize) -> String {
    if html.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let document = Html::parse_document(html);
    visible_text_join(visible_text_nodes(&document), char_limit)
}

/// Iterate over text nodes outside of [`HIDDEN_ELEMENTS`], in document order
fn visible_text_nodes(document: &Html) -> impl Iterator<Item = &str> {
    // Depth inside hidden subtrees; text is only emitted at depth 0.
    let mut hidden_depth = 0usize;

    document
        .tree
        .root()
        .traverse()
        .filter_map(move |edge| match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) if is_hidden(element.name()) => {
                    hidden_depth += 1;
                    None
                }
                Node::Text(text) if hidden_depth == 0 => Some(&**text),
                _ => None,
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value()
                    && is_hidden(element.name())
                {
                    hidden_depth = hidden_depth.saturating_sub(1);
                }
                None
            }
        })
}

fn is_hidden(name: &str) -> bool {
    HIDDEN_ELEMENTS.iter().any(|hidden| name.eq_ignore_ascii_case(hidden))
}

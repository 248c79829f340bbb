//! Escaping utilities for Markdown report generation.
//!
//! Product names come from an external manifest and URLs from scraped
//! pages. Both are escaped before they are embedded in the Markdown table so
//! that a stray `|` or `)` cannot break the layout.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Markdown tables use `|` as column separators and end a row at a line
/// break. Only those are rewritten; names otherwise appear literally.
///
/// # Examples
///
/// ```
/// use landing_links::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("GroupDocs.Total"), "GroupDocs.Total");
/// assert_eq!(escape_markdown_table("[Beta] `Viewer`"), "[Beta] `Viewer`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a URL for use as a Markdown link destination.
///
/// Parentheses, spaces and pipes are percent-encoded; everything else is
/// left untouched.
///
/// # Examples
///
/// ```
/// use landing_links::reports::escape::escape_markdown_url;
///
/// assert_eq!(
///     escape_markdown_url("https://products.groupdocs.com/total/net/"),
///     "https://products.groupdocs.com/total/net/"
/// );
/// assert_eq!(escape_markdown_url("https://x/a (b)/"), "https://x/a%20%28b%29/");
/// ```
pub fn escape_markdown_url(url: &str) -> String {
    let mut result = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '(' => result.push_str("%28"),
            ')' => result.push_str("%29"),
            ' ' => result.push_str("%20"),
            '|' => result.push_str("%7C"),
            _ => result.push(c),
        }
    }
    result
}

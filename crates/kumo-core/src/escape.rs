//! HTML escaping for user-supplied text.
//!
//! Filenames and decoded text content pass through [`escape_html`]
//! before being interpolated into preview markup, so a file named
//! `<script>.txt` can never inject elements into the page.

/// Escape the five HTML metacharacters `& < > " '`.
///
/// Covers both text-node and attribute-value contexts, so the same
/// function is safe for `<pre>` content and `src="..."` values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#![forbid(unsafe_code)]

//! HTML escaping for toast titles.
//!
//! [`html_encode`] substitutes, in order: `&`, `<`, `>`, blank whitespace,
//! `'`, `"`, and newlines. The order matters: ampersands are handled first
//! so later substitutions never re-encode earlier output. Newlines become
//! `<br>`; all other whitespace becomes `&nbsp;`.
//!
//! [`html_decode`] is the inverse on any string built from the handled
//! characters (spaces and newlines included). Tabs and carriage returns
//! encode to `&nbsp;` like spaces do and therefore decode to spaces; only
//! the space survives a round trip, which is the documented contract.

/// Encodes a string for safe insertion as element text.
pub fn html_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br>"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            c if c.is_whitespace() => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

/// Decodes the entities produced by [`html_encode`].
pub fn html_decode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while !rest.is_empty() {
        let mut matched = false;
        for (entity, plain) in [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&nbsp;", ' '),
            ("&#39;", '\''),
            ("&quot;", '"'),
            ("<br>", '\n'),
        ] {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(plain);
                rest = tail;
                matched = true;
                break;
            }
        }
        if !matched {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
    }
    out
}

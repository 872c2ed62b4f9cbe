//! Rich-text reduction.
//!
//! Part details are authored as HTML. The S-124 information text is plain,
//! so tags are stripped, block-level boundaries become line breaks and
//! entities are decoded.

use quick_xml::escape::{resolve_predefined_entity, unescape_with};

/// Tags whose start or end marks a line break.
const BREAK_TAGS: &[&str] = &["br", "p", "div", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6"];

/// HTML named entities beyond the five predefined XML ones.
fn html_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "nbsp" => " ",
        "deg" => "°",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "lsquo" => "‘",
        "rsquo" => "’",
        "ldquo" => "“",
        "rdquo" => "”",
        "aelig" => "æ",
        "AElig" => "Æ",
        "oslash" => "ø",
        "Oslash" => "Ø",
        "aring" => "å",
        "Aring" => "Å",
        "auml" => "ä",
        "ouml" => "ö",
        "uuml" => "ü",
        "Auml" => "Ä",
        "Ouml" => "Ö",
        "Uuml" => "Ü",
        "szlig" => "ß",
        "prime" => "′",
        "Prime" => "″",
        "middot" => "·",
        "times" => "×",
        _ => return resolve_predefined_entity(name),
    })
}

/// Remove tags, turning block boundaries into newlines.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            out.push_str(&rest[start..]);
            return out;
        };
        let tag = rest[start + 1..start + len]
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if BREAK_TAGS.contains(&tag.as_str()) {
            out.push('\n');
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Longest entity reference considered, `&` and `;` included.
const MAX_ENTITY_LEN: usize = 12;

/// Decode entities one by one, leaving unknown ones and stray ampersands
/// verbatim.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let decoded = candidate
            .char_indices()
            .take_while(|(i, _)| *i < MAX_ENTITY_LEN)
            .find(|(_, c)| *c == ';')
            .and_then(|(semi, _)| {
                let reference = &candidate[..=semi];
                unescape_with(reference, html_entity)
                    .ok()
                    .map(|value| (value.into_owned(), semi + 1))
            });
        match decoded {
            Some((value, consumed)) => {
                out.push_str(&value);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapse whitespace within lines and drop blank lines.
fn normalize(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert HTML to plain text.
///
/// # Examples
///
/// ```
/// use navwarn_s124::html_to_text;
///
/// let text = html_to_text("<p>Light <b>unlit</b></p><p>Pos. 57&deg;43&prime;N</p>");
/// assert_eq!(text, "Light unlit\nPos. 57°43′N");
/// ```
pub fn html_to_text(html: &str) -> String {
    normalize(&decode_entities(&strip_tags(html)))
}

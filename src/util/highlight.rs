//! Query-term highlighting for search result snippets.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// A run of snippet text, either matching the query or not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

/// Split `text` around every occurrence of `needle`, case-insensitive.
///
/// Case folding is per character and Unicode-aware ("Æble" matches "æble").
/// Matched runs keep the casing found in `text`. An empty needle yields the
/// whole text as one plain segment.
#[must_use]
pub fn highlight_segments<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    let needle = needle.trim();
    if text.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < text.len() {
        if let Some(len) = match_len(&text[i..], needle) {
            if plain_start < i {
                segments.push(Segment::Plain(&text[plain_start..i]));
            }
            segments.push(Segment::Match(&text[i..i + len]));
            i += len;
            plain_start = i;
        } else {
            i += text[i..].chars().next().map_or(1, char::len_utf8);
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }
    segments
}

/// Byte length of the prefix of `text` that equals `needle` ignoring case.
fn match_len(text: &str, needle: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in needle.chars() {
        let (start, found) = chars.next()?;
        if !same_ignoring_case(found, expected) {
            return None;
        }
        end = start + found.len_utf8();
    }
    Some(end)
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

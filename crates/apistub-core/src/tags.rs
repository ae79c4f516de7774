//! Documentation block parsing.
//!
//! A documentation block is the `/** ... */` comment attached to a class or
//! method. [`parse_block`] turns it into a [`TagMap`]: the free-form leading
//! description plus every `@tag body` span, with repeated tags collected in
//! source order. [`get_tag`] answers "is this tag present, and what does its
//! first occurrence say" without building the whole map.
//!
//! Splitting is done by a small hand-written lexer rather than a regex. An `@`
//! only introduces a tag when it is not glued to a preceding word character,
//! brace or backslash and is not followed by a brace, so e-mail addresses and
//! inline markup such as `{@link Foo}` stay inside the surrounding text.
//!
//! # Examples
//!
//! ```
//! use apistub_core::tags::{parse_block, TagValue};
//!
//! let tags = parse_block(Some(
//!     "/**\n * Load an item.\n *\n * @param int $id Item id\n * @param bool $full\n * @api\n */",
//! ));
//! assert_eq!(tags.description(), "Load an item.");
//! assert_eq!(
//!     tags.get("param"),
//!     Some(&TagValue::Many(vec!["int $id Item id".into(), "bool $full".into()]))
//! );
//! assert!(tags.contains("api"));
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

/// Character that starts a tag.
pub const TAG_INTRODUCER: char = '@';

/// Key under which the leading description is stored.
pub const DESCRIPTION_KEY: &str = "description";

/// Tags the generator consumes. Anything else is kept in the map but unused.
pub mod vocabulary {
    /// Marks a method as exposed to clients
    pub const API: &str = "api";
    pub const ALIAS: &str = "alias";
    /// `<type> $<name> <description>`
    pub const PARAM: &str = "param";
    /// `<type> <name> <description>`
    pub const QUERY: &str = "query";
    /// Optional type argument: `array`, `array[]` or a type name
    pub const PAYLOAD: &str = "payload";
    /// `<name>:<type> <description>`
    pub const PAYLOAD_FIELD: &str = "payload-field";
    /// `<name>:<type> <description>`
    pub const OUTPUT: &str = "output";
    /// `<type> <description>`, written `@return` or `@returns`
    pub const RETURNS: &str = "returns";
}

/// One tag slot: a single body, or every body of a repeated tag in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Single(String),
    Many(Vec<String>),
}

impl TagValue {
    /// Body of the first occurrence
    pub fn first(&self) -> &str {
        match self {
            TagValue::Single(body) => body,
            TagValue::Many(bodies) => bodies.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// Every occurrence, in source order
    pub fn all(&self) -> Vec<&str> {
        match self {
            TagValue::Single(body) => vec![body.as_str()],
            TagValue::Many(bodies) => bodies.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, body: String) {
        match self {
            TagValue::Single(first) => {
                let first = std::mem::take(first);
                *self = TagValue::Many(vec![first, body]);
            }
            TagValue::Many(bodies) => bodies.push(body),
        }
    }
}

/// Structured view of one documentation block.
///
/// Always holds a `description` entry, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagMap {
    tags: BTreeMap<String, TagValue>,
}

impl Default for TagMap {
    fn default() -> Self {
        Self::with_description(String::new())
    }
}

impl TagMap {
    fn with_description(description: String) -> Self {
        let mut tags = BTreeMap::new();
        tags.insert(DESCRIPTION_KEY.to_string(), TagValue::Single(description));
        Self { tags }
    }

    fn insert(&mut self, name: String, body: String) {
        match self.tags.get_mut(&name) {
            Some(slot) => slot.push(body),
            None => {
                self.tags.insert(name, TagValue::Single(body));
            }
        }
    }

    /// The text preceding the first tag
    pub fn description(&self) -> &str {
        self.first(DESCRIPTION_KEY).unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Body of the first occurrence of `name`
    pub fn first(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(TagValue::first)
    }

    /// Bodies of every occurrence of `name`; empty when the tag is absent
    pub fn all(&self, name: &str) -> Vec<&str> {
        self.tags.get(name).map(TagValue::all).unwrap_or_default()
    }

    /// Number of distinct tag names, the description included
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Pairs with `len` for clippy's `len_without_is_empty`; a parsed map
    /// always holds `description`, so this is false for every parsed block
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A `@name body` span found by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TagSpan<'a> {
    name: &'a str,
    body: &'a str,
}

impl TagSpan<'_> {
    fn normalized_name(&self) -> &str {
        match self.name {
            "return" => "returns",
            other => other,
        }
    }
}

/// Parse a raw documentation block into a [`TagMap`].
///
/// An absent block yields a map holding only an empty description. Spans that
/// carry no tag name (`@ foo`, `@!`) are dropped without failing the block.
pub fn parse_block(raw: Option<&str>) -> TagMap {
    let Some(raw) = raw else {
        return TagMap::default();
    };

    let text = strip_decoration(raw);
    let introducers = introducer_positions(&text);
    let description = match introducers.first() {
        Some(&start) => trim_body(&text[..start]),
        None => trim_body(&text),
    };

    let mut tags = TagMap::with_description(description);
    for span in spans(&text, &introducers) {
        match span {
            Some(span) => tags.insert(span.normalized_name().to_string(), trim_body(span.body)),
            None => log::debug!("skipping tag span without a name"),
        }
    }
    tags
}

/// Body of the first occurrence of tag `name` in `raw`, if present.
pub fn get_tag(name: &str, raw: Option<&str>) -> Option<String> {
    let text = strip_decoration(raw?);
    let introducers = introducer_positions(&text);
    let body = spans(&text, &introducers)
        .flatten()
        .find(|span| span.normalized_name() == name)
        .map(|span| trim_body(span.body));
    body
}

/// Remove comment delimiters and per-line leading `*` decoration.
fn strip_decoration(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("/**") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("/*") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("*/") {
        text = rest;
    }

    let lines: Vec<&str> = text
        .lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.trim_start(),
                None => line,
            };
            line.trim_end()
        })
        .collect();
    lines.join("\n").trim().to_string()
}

/// Trim trailing whitespace on every line and blank lines around the body.
fn trim_body(body: &str) -> String {
    body.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Byte offsets of every `@` that starts a tag.
fn introducer_positions(text: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch == TAG_INTRODUCER {
            let glued = matches!(prev, Some(p) if is_word_char(p) || p == '{' || p == '\\');
            let braced = matches!(chars.peek(), Some(&(_, '{')));
            if !glued && !braced {
                positions.push(idx);
            }
        }
        prev = Some(ch);
    }
    positions
}

/// One entry per introducer; `None` marks a span without a usable name.
fn spans<'a>(
    text: &'a str,
    introducers: &'a [usize],
) -> impl Iterator<Item = Option<TagSpan<'a>>> + 'a {
    introducers.iter().enumerate().map(move |(i, &start)| {
        let end = introducers.get(i + 1).copied().unwrap_or(text.len());
        let span = &text[start + TAG_INTRODUCER.len_utf8()..end];
        let name_len = span
            .char_indices()
            .find(|&(_, ch)| !is_name_char(ch))
            .map(|(idx, _)| idx)
            .unwrap_or(span.len());
        if name_len == 0 {
            return None;
        }
        Some(TagSpan {
            name: &span[..name_len],
            body: &span[name_len..],
        })
    })
}

//! Display-width measurement for style-tagged strings.
//!
//! Labels may carry inline style tags such as `[red]`, `[white:blue:b]` or
//! `[-]`. Tags never occupy cells, so they are removed before measuring.
//! Width accounts for wide (CJK, emoji) and zero-width characters.
//!
//! [`segments`] splits a label into text runs and parsed tags for renderers
//! that apply the styles.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// Matches `[fg]`, `[fg:bg]`, `[fg:bg:attrs]` and the reset form `[-]`.
/// Colors are names or `#rrggbb`; attributes are any of `lbidrsu`.
static STYLE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\[(?:[a-zA-Z]+|#[0-9a-fA-F]{6}|-)?(?::(?:[a-zA-Z]+|#[0-9a-fA-F]{6}|-)?)?(?::(?:[lbidrsu]+|-)?)?\]",
    )
    .expect("Invalid style tag regex")
});

/// Remove style tags from `text`. A bare `[]` is literal text, not a tag.
pub fn strip_tags(text: &str) -> String {
    STYLE_TAG_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            let tag = &caps[0];
            if tag == "[]" {
                tag.to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// One `fg`, `bg` or attribute field of a style tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagField {
    /// Field left empty, the current value stays
    Keep,
    /// `-`, back to the base style
    Reset,
    Set(String),
}

impl TagField {
    fn parse(field: Option<&str>) -> Self {
        match field {
            None | Some("") => Self::Keep,
            Some("-") => Self::Reset,
            Some(value) => Self::Set(value.to_string()),
        }
    }
}

/// A parsed `[fg:bg:attrs]` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTag {
    pub fg: TagField,
    pub bg: TagField,
    pub attrs: TagField,
}

impl StyleTag {
    fn parse(tag: &str) -> Self {
        let body = &tag[1..tag.len() - 1];
        let mut fields = body.split(':');
        Self {
            fg: TagField::parse(fields.next()),
            bg: TagField::parse(fields.next()),
            attrs: TagField::parse(fields.next()),
        }
    }
}

/// A piece of a tagged label, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Tag(StyleTag),
}

/// Split `text` into text runs and style tags. Empty runs are omitted and a
/// bare `[]` stays text.
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut last = 0;

    for tag in STYLE_TAG_REGEX.find_iter(text) {
        if tag.as_str() == "[]" {
            continue;
        }
        if tag.start() > last {
            out.push(Segment::Text(&text[last..tag.start()]));
        }
        out.push(Segment::Tag(StyleTag::parse(tag.as_str())));
        last = tag.end();
    }
    if last < text.len() {
        out.push(Segment::Text(&text[last..]));
    }
    out
}

/// On-screen cell width of `text` once style tags are removed.
pub fn tagged_width(text: &str) -> usize {
    if !text.contains('[') {
        return text.width();
    }
    strip_tags(text).width()
}

/// [`tagged_width`] as a signed cell count, for geometry arithmetic.
pub fn tagged_width_i32(text: &str) -> i32 {
    i32::try_from(tagged_width(text)).unwrap_or(i32::MAX)
}

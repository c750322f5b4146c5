//! Placeholder template tokenizer and code rendering
//!
//! Splitting a string into literal text and placeholder tokens happens once,
//! up front; the expander then walks the resulting segments. The full-match
//! case (one placeholder spanning the entire string) is exposed as its own
//! query instead of being inferred from string lengths.

use autowire_domain::constants::PLACEHOLDER_PATTERN;
use autowire_domain::value_objects::CodeLiteral;
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("Invalid placeholder regex"));

/// Piece of a tokenized template, in source order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside placeholders, never empty
    Literal(&'a str),
    /// Placeholder name between delimiters; empty for an escaped delimiter
    Placeholder(&'a str),
}

/// Tokenized string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Self {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for captures in PLACEHOLDER.captures_iter(source) {
            let (Some(token), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if token.start() > cursor {
                segments.push(Segment::Literal(&source[cursor..token.start()]));
            }
            segments.push(Segment::Placeholder(name.as_str()));
            cursor = token.end();
        }
        if cursor < source.len() {
            segments.push(Segment::Literal(&source[cursor..]));
        }
        Self { source, segments }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
    }

    /// Name of the single placeholder spanning the whole string
    ///
    /// `"%db.port%"` yields `Some("db.port")`; `"x%db.port%"`, `"%a%%b%"` and
    /// `"%%"` yield `None`.
    pub fn full_match(&self) -> Option<&'a str> {
        match self.segments.as_slice() {
            [Segment::Placeholder(name)] if !name.is_empty() => Some(*name),
            _ => None,
        }
    }
}

/// Fragment of an expanded string before it is joined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Code(CodeLiteral),
}

/// Quote `text` as a single-quoted string literal
pub fn quote_literal(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        if matches!(ch, '\\' | '\'') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

/// Join fragments into one code literal
///
/// Empty text fragments are dropped, remaining text is quoted and code is
/// kept verbatim.
pub fn render_code(fragments: Vec<Fragment>, concat_operator: &str) -> CodeLiteral {
    let parts: Vec<String> = fragments
        .into_iter()
        .filter_map(|fragment| match fragment {
            Fragment::Text(text) if text.is_empty() => None,
            Fragment::Text(text) => Some(quote_literal(&text)),
            Fragment::Code(code) => Some(code.into_inner()),
        })
        .collect();
    CodeLiteral::new(parts.join(concat_operator))
}

/// Join fragments as plain text
pub fn render_text(fragments: Vec<Fragment>) -> String {
    fragments
        .into_iter()
        .map(|fragment| match fragment {
            Fragment::Text(text) => text,
            Fragment::Code(code) => code.into_inner(),
        })
        .collect()
}

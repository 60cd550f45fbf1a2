//! Markdown-aware text extraction.
//!
//! Each stage is a table of `(pattern, replacement)` rewrites applied in
//! order. Later stages assume earlier noise is already gone, so the order
//! of both the stages and the rows inside each table is significant.

use crate::{ExtractedDocument, RawDocument};
use lazy_static::lazy_static;
use regex::Regex;

type Rewrite = (Regex, &'static str);

fn rule(pattern: &str, replacement: &'static str) -> Rewrite {
    (Regex::new(pattern).expect("valid regex"), replacement)
}

lazy_static! {
    // Opening `---` line through the first closing `---` line. The newline
    // after the closing delimiter is kept.
    static ref FRONTMATTER: Regex =
        Regex::new(r"(?s)\A---[ \t]*\r?\n(?:.*?\r?\n)?---[ \t]*(\r?\n|\z)").expect("valid regex");

    static ref CODE_BLOCKS: Vec<Rewrite> = vec![
        rule(r"(?s)```.*?```", " "),
        rule(r"(?s)~~~.*?~~~", " "),
        rule(r"(?m)^(?:    |\t).*$", " "),
    ];

    static ref INLINE_CODE: Vec<Rewrite> = vec![
        rule(r"`[^`\n]+`", " "),
    ];

    static ref LINKS: Vec<Rewrite> = vec![
        // embeds
        rule(r"!\[\[[^\]]+\]\]", " "),
        // [[target|display]]
        rule(r"\[\[([^\]|]+)\|([^\]]+)\]\]", "${2}"),
        rule(r"\[\[([^\]]+)\]\]", "${1}"),
        // ![alt](url)
        rule(r"!\[([^\]]*)\]\([^)]+\)", "${1}"),
        rule(r"\[([^\]]+)\]\([^)]+\)", "${1}"),
    ];

    static ref MARKUP: Vec<Rewrite> = vec![
        rule(r"(?m)^#{1,6}\s+", ""),
        rule(r"\*\*([^*]+)\*\*", "${1}"),
        rule(r"__([^_]+)__", "${1}"),
        rule(r"\*([^*]+)\*", "${1}"),
        rule(r"_([^_]+)_", "${1}"),
        rule(r"~~([^~]+)~~", "${1}"),
        rule(r"==([^=]+)==", "${1}"),
        rule(r"(?m)^>\s*", ""),
        rule(r"(?m)^\s*[-*+]\s+", ""),
        rule(r"(?m)^\s*\d+\.\s+", ""),
        rule(r"(?m)^[-*_]{3,}$", " "),
        rule(r"#[a-zA-Z0-9_/-]+", " "),
        rule(r"(?s)<!--.*?-->", " "),
        rule(r"<[^>]+>", " "),
    ];
}

fn apply(text: String, rewrites: &[Rewrite]) -> String {
    rewrites
        .iter()
        .fold(text, |acc, (re, replacement)| re.replace_all(&acc, *replacement).into_owned())
}

/// Strip a leading metadata block. Left untouched when the block is never closed.
pub fn strip_frontmatter(text: &str) -> String {
    FRONTMATTER.replace(text, "${1}").into_owned()
}

/// Reduce raw markdown to natural-language text. Never fails; unbalanced
/// delimiters are left in place as literal text.
pub fn extract(raw: &str) -> String {
    let text = strip_frontmatter(raw);
    let text = apply(text, &CODE_BLOCKS);
    let text = apply(text, &INLINE_CODE);
    let text = apply(text, &LINKS);
    apply(text, &MARKUP)
}

pub fn extract_document(doc: &RawDocument) -> ExtractedDocument {
    ExtractedDocument {
        id: doc.id.clone(),
        display_name: doc.display_name.clone(),
        clean_text: extract(&doc.raw_text),
    }
}

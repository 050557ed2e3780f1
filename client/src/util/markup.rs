//! Custom-tag expansion for generated document text.
//!
//! SYSTEM CONTEXT
//! ==============
//! Generated articles arrive as markdown sprinkled with three custom markup
//! forms: `<CITE: Source, url>` citations, `<highlight>…</highlight>` spans,
//! and `<question_area>` blocks holding `<question>`/`<answer>` pairs. The
//! viewer expands these before markdown rendering; question placeholders are
//! later swapped for interactive widgets by the render layer.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;

use pulldown_cmark::{Options, Parser, html};
use regex::{Captures, Regex};

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<CITE:\s*([^,>]+),\s*([^>]+)>").expect("citation regex"));

static HIGHLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<highlight>(.*?)</highlight>").expect("highlight regex"));

static QUESTION_AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<question_area>(.*?)</question_area>").expect("question area regex")
});

static QA_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<question>(.*?)</question>\s*(?:<answer>(.*?)</answer>)?")
        .expect("qa pair regex")
});

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div id="(qa-[0-9a-f]{16})"></div>"#).expect("placeholder regex")
});

/// An interactive question/answer widget extracted from the document text.
///
/// `answer` is the empty string when the source carried no `<answer>` block;
/// such widgets fetch their answer on first interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QaWidget {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// Result of one preprocessing pass: the rewritten text plus the widget
/// side-table keyed by placeholder id, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expansion {
    pub text: String,
    pub widgets: Vec<QaWidget>,
}

/// One run of rewritten text: either a markdown chunk or a widget slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Markdown(String),
    Widget(String),
}

/// Expand all custom markup in `raw`.
///
/// Passes run in a fixed order — citations, then highlights, then question
/// areas — each over the previous pass's output, so markup nested inside a
/// question block is expanded before the block itself is rewritten. The
/// function is total: malformed or unterminated tags simply never match and
/// pass through as literal text.
///
/// Widget ids are derived from `(conversation_id, ordinal, question)`, so
/// re-running the pass over a re-polled document yields stable ids and
/// widget open/closed state survives re-renders.
pub fn expand(raw: &str, conversation_id: &str) -> Expansion {
    if raw.is_empty() {
        return Expansion::default();
    }

    let text = CITATION.replace_all(raw, |caps: &Captures| {
        citation_link(caps[1].trim(), caps[2].trim())
    });

    let text = HIGHLIGHT.replace_all(&text, r#"<span class="markup-highlight">$1</span>"#);

    let mut widgets = Vec::new();
    let mut ordinal = 0usize;
    let text = QUESTION_AREA.replace_all(&text, |area: &Captures| {
        QA_PAIR
            .replace_all(&area[1], |pair: &Captures| {
                let question = pair[1].trim().to_owned();
                let answer = pair
                    .get(2)
                    .map(|m| m.as_str().trim().to_owned())
                    .unwrap_or_default();
                let id = widget_id(conversation_id, ordinal, &question);
                ordinal += 1;
                let placeholder = format!(r#"<div id="{id}"></div>"#);
                widgets.push(QaWidget { id, question, answer });
                placeholder
            })
            .into_owned()
    });

    Expansion { text: text.into_owned(), widgets }
}

/// Split rewritten text into markdown runs and widget slots for rendering.
/// Whitespace-only markdown runs between adjacent placeholders are dropped.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for caps in PLACEHOLDER.captures_iter(text) {
        let whole = caps.get(0).expect("match 0 always present");
        let before = &text[cursor..whole.start()];
        if !before.trim().is_empty() {
            out.push(Segment::Markdown(before.to_owned()));
        }
        out.push(Segment::Widget(caps[1].to_owned()));
        cursor = whole.end();
    }
    let rest = &text[cursor..];
    if !rest.trim().is_empty() {
        out.push(Segment::Markdown(rest.to_owned()));
    }
    out
}

/// Render a markdown run to HTML. Inline HTML produced by the expansion
/// passes (citation anchors, highlight spans) is passed through verbatim.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn citation_link(source: &str, url: &str) -> String {
    format!(
        r#"<a class="citation-chip" href="{url}" target="_blank" rel="noopener noreferrer">{source}</a>"#
    )
}

fn widget_id(conversation_id: &str, ordinal: usize, question: &str) -> String {
    let mut hasher = DefaultHasher::new();
    conversation_id.hash(&mut hasher);
    ordinal.hash(&mut hasher);
    question.hash(&mut hasher);
    format!("qa-{:016x}", hasher.finish())
}

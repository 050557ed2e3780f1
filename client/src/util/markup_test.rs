use super::*;

const CONV: &str = "conv-1";

// =============================================================
// Plain text passes through
// =============================================================

#[test]
fn plain_text_is_unchanged() {
    let input = "# Heading\n\nJust some *markdown* with no custom tags.";
    let result = expand(input, CONV);
    assert_eq!(result.text, input);
    assert!(result.widgets.is_empty());
}

#[test]
fn empty_input_yields_empty_expansion() {
    let result = expand("", CONV);
    assert_eq!(result, Expansion::default());
}

#[test]
fn angle_brackets_without_known_tags_pass_through() {
    let input = "inequality: a < b > c and <em>html</em>";
    let result = expand(input, CONV);
    assert_eq!(result.text, input);
}

// =============================================================
// Citations
// =============================================================

#[test]
fn citation_expands_to_anchor_with_trimmed_parts() {
    let result = expand("See <CITE:  Source , https://x >.", CONV);
    assert!(result.text.contains(r#"href="https://x""#));
    assert!(result.text.contains(">Source</a>"));
    assert!(result.widgets.is_empty());
}

#[test]
fn citation_opens_in_new_tab() {
    let result = expand("<CITE: Wiki, https://wiki.example>", CONV);
    assert!(result.text.contains(r#"target="_blank""#));
    assert!(result.text.contains(r#"rel="noopener noreferrer""#));
}

#[test]
fn unterminated_citation_is_left_literal() {
    let input = "<CITE: Source, https://x";
    let result = expand(input, CONV);
    assert_eq!(result.text, input);
}

#[test]
fn multiple_citations_all_expand() {
    let result = expand("<CITE: A, https://a> and <CITE: B, https://b>", CONV);
    assert!(result.text.contains(r#"href="https://a""#));
    assert!(result.text.contains(r#"href="https://b""#));
    assert!(!result.text.contains("<CITE:"));
}

// =============================================================
// Highlights
// =============================================================

#[test]
fn highlight_expands_to_span() {
    let result = expand("a <highlight>key idea</highlight> here", CONV);
    assert_eq!(
        result.text,
        r#"a <span class="markup-highlight">key idea</span> here"#
    );
}

#[test]
fn unterminated_highlight_is_left_literal() {
    let input = "a <highlight>dangling";
    assert_eq!(expand(input, CONV).text, input);
}

// =============================================================
// Question areas
// =============================================================

fn qa_input(n: usize) -> String {
    let mut s = String::from("intro\n<question_area>\n");
    for i in 0..n {
        s.push_str(&format!(
            "<question>Q{i}?</question>\n<answer>A{i}.</answer>\n"
        ));
    }
    s.push_str("</question_area>\nfin");
    s
}

#[test]
fn each_pair_yields_one_widget_in_source_order() {
    let result = expand(&qa_input(3), CONV);
    assert_eq!(result.widgets.len(), 3);
    for (i, widget) in result.widgets.iter().enumerate() {
        assert_eq!(widget.question, format!("Q{i}?"));
        assert_eq!(widget.answer, format!("A{i}."));
    }
}

#[test]
fn each_widget_id_is_unique_and_referenced_exactly_once() {
    let result = expand(&qa_input(4), CONV);
    for widget in &result.widgets {
        let placeholder = format!(r#"<div id="{}"></div>"#, widget.id);
        assert_eq!(result.text.matches(&placeholder).count(), 1);
    }
    let mut ids: Vec<_> = result.widgets.iter().map(|w| w.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn missing_answer_defaults_to_empty_string() {
    let input = "<question_area><question>Why?</question></question_area>";
    let result = expand(input, CONV);
    assert_eq!(result.widgets.len(), 1);
    assert_eq!(result.widgets[0].question, "Why?");
    assert_eq!(result.widgets[0].answer, "");
}

#[test]
fn questions_outside_an_area_are_left_literal() {
    let input = "<question>stray?</question>";
    let result = expand(input, CONV);
    assert_eq!(result.text, input);
    assert!(result.widgets.is_empty());
}

#[test]
fn widgets_across_multiple_areas_keep_document_order() {
    let input = "<question_area><question>first?</question></question_area>\n\
                 mid\n\
                 <question_area><question>second?</question></question_area>";
    let result = expand(input, CONV);
    assert_eq!(result.widgets.len(), 2);
    assert_eq!(result.widgets[0].question, "first?");
    assert_eq!(result.widgets[1].question, "second?");
    assert_ne!(result.widgets[0].id, result.widgets[1].id);
}

// =============================================================
// Pass ordering
// =============================================================

#[test]
fn citation_inside_question_is_expanded_first() {
    let input =
        "<question_area><question>Per <CITE: Src, https://s>, why?</question></question_area>";
    let result = expand(input, CONV);
    assert_eq!(result.widgets.len(), 1);
    assert!(result.widgets[0].question.contains(r#"href="https://s""#));
    assert!(!result.widgets[0].question.contains("<CITE:"));
}

#[test]
fn highlight_inside_answer_is_expanded_first() {
    let input = "<question_area><question>Q?</question>\
                 <answer>the <highlight>key</highlight> part</answer></question_area>";
    let result = expand(input, CONV);
    assert!(result.widgets[0].answer.contains("markup-highlight"));
}

// =============================================================
// Deterministic ids
// =============================================================

#[test]
fn same_input_yields_same_ids_across_calls() {
    let a = expand(&qa_input(2), CONV);
    let b = expand(&qa_input(2), CONV);
    assert_eq!(a.widgets[0].id, b.widgets[0].id);
    assert_eq!(a.widgets[1].id, b.widgets[1].id);
}

#[test]
fn different_conversation_yields_different_ids() {
    let a = expand(&qa_input(1), "conv-1");
    let b = expand(&qa_input(1), "conv-2");
    assert_ne!(a.widgets[0].id, b.widgets[0].id);
}

#[test]
fn identical_questions_at_different_positions_get_distinct_ids() {
    let input = "<question_area><question>same?</question>\
                 <question>same?</question></question_area>";
    let result = expand(input, CONV);
    assert_eq!(result.widgets.len(), 2);
    assert_ne!(result.widgets[0].id, result.widgets[1].id);
}

// =============================================================
// Segments
// =============================================================

#[test]
fn segments_of_plain_text_is_one_markdown_run() {
    let segs = segments("just text");
    assert_eq!(segs, vec![Segment::Markdown("just text".to_owned())]);
}

#[test]
fn segments_interleave_markdown_and_widgets() {
    let result = expand(&qa_input(2), CONV);
    let segs = segments(&result.text);
    let widget_count = segs
        .iter()
        .filter(|s| matches!(s, Segment::Widget(_)))
        .count();
    assert_eq!(widget_count, 2);
    assert!(matches!(&segs[0], Segment::Markdown(text) if text.contains("intro")));
    assert!(matches!(segs.last(), Some(Segment::Markdown(text)) if text.contains("fin")));
}

#[test]
fn segments_drop_whitespace_between_adjacent_widgets() {
    let result = expand(&qa_input(2), CONV);
    let segs = segments(&result.text);
    // intro, widget, widget, fin — the newline between placeholders is dropped.
    assert_eq!(segs.len(), 4);
}

// =============================================================
// Markdown rendering
// =============================================================

#[test]
fn render_markdown_produces_headings() {
    let html = render_markdown("# Title");
    assert!(html.contains("<h1>Title</h1>"));
}

#[test]
fn render_markdown_passes_inline_html_through() {
    let html = render_markdown(r#"before <span class="markup-highlight">hot</span> after"#);
    assert!(html.contains(r#"<span class="markup-highlight">hot</span>"#));
}

#[test]
fn render_markdown_supports_tables() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

use super::{
    DisplayBlock, HEADER_MAX_CHARS, InlineSpan, ListMarker, SpanRun, SpanStyle, format_inline,
    format_message,
};

const STRONG: SpanStyle = SpanStyle {
    strong: true,
    emphasis: false,
    code: false,
};
const EM: SpanStyle = SpanStyle {
    strong: false,
    emphasis: true,
    code: false,
};
const CODE: SpanStyle = SpanStyle {
    strong: false,
    emphasis: false,
    code: true,
};
const PLAIN: SpanStyle = SpanStyle {
    strong: false,
    emphasis: false,
    code: false,
};

fn run(text: &str, style: SpanStyle) -> SpanRun {
    SpanRun {
        text: text.to_string(),
        style,
    }
}

fn text(s: &str) -> DisplayBlock {
    DisplayBlock::Text {
        content: InlineSpan::plain(s),
    }
}

fn bullet(s: &str) -> DisplayBlock {
    DisplayBlock::ListItem {
        marker: ListMarker::Bullet,
        content: InlineSpan::plain(s),
    }
}

fn header(s: &str) -> DisplayBlock {
    DisplayBlock::Header {
        text: s.to_string(),
    }
}

#[test]
fn format_message_empty_input_yields_no_blocks() {
    assert!(format_message("").is_empty());
}

#[test]
fn format_message_plain_lines_become_text_blocks() {
    let blocks = format_message("hello world\nsecond line");
    assert_eq!(blocks, vec![text("hello world"), text("second line")]);
}

#[test]
fn format_message_keeps_leading_whitespace_on_text() {
    let blocks = format_message("   indented words");
    assert_eq!(blocks, vec![text("   indented words")]);
}

#[test]
fn format_message_blank_lines_become_breaks() {
    let blocks = format_message("a\n\n   \nb");
    assert_eq!(
        blocks,
        vec![text("a"), DisplayBlock::Break, DisplayBlock::Break, text("b")]
    );
}

#[test]
fn format_message_lone_newline_is_two_breaks() {
    assert_eq!(
        format_message("\n"),
        vec![DisplayBlock::Break, DisplayBlock::Break]
    );
}

#[test]
fn format_message_bullet_markers() {
    let blocks = format_message("- dash\n* star\n• dot");
    assert_eq!(blocks, vec![bullet("dash"), bullet("star"), bullet("dot")]);
}

#[test]
fn format_message_bullet_needs_whitespace_after_marker() {
    let blocks = format_message("-5 degrees");
    assert_eq!(blocks, vec![text("-5 degrees")]);
}

#[test]
fn format_message_indented_bullet_is_stripped() {
    assert_eq!(format_message("    - nested"), vec![bullet("nested")]);
}

#[test]
fn format_message_bullet_wins_over_header() {
    assert_eq!(format_message("- Note:"), vec![bullet("Note:")]);
}

#[test]
fn format_message_numbered_item() {
    let blocks = format_message("3. third");
    assert_eq!(
        blocks,
        vec![DisplayBlock::ListItem {
            marker: ListMarker::Number("3".to_string()),
            content: InlineSpan::plain("third"),
        }]
    );
}

#[test]
fn format_message_numbered_item_keeps_digits_verbatim() {
    let blocks = format_message("  01.   first");
    assert_eq!(
        blocks,
        vec![DisplayBlock::ListItem {
            marker: ListMarker::Number("01".to_string()),
            content: InlineSpan::plain("first"),
        }]
    );
}

#[test]
fn format_message_decimal_is_not_a_numbered_item() {
    assert_eq!(format_message("3.14 is pi"), vec![text("3.14 is pi")]);
}

#[test]
fn format_message_header_is_verbatim() {
    let blocks = format_message("Use **this** one:");
    assert_eq!(blocks, vec![header("Use **this** one:")]);
}

#[test]
fn format_message_header_length_limit() {
    let short = format!("{}:", "a".repeat(HEADER_MAX_CHARS - 2));
    let long = format!("{}:", "a".repeat(HEADER_MAX_CHARS - 1));
    assert_eq!(format_message(&short), vec![header(&short)]);
    assert_eq!(format_message(&long), vec![text(&long)]);
}

#[test]
fn format_message_header_length_includes_indentation() {
    // 97 chars once trimmed, 101 with the leading spaces.
    let line = format!("    {}:", "a".repeat(96));
    assert_eq!(format_message(&line), vec![text(&line)]);

    let indented = format!("  {}:", "a".repeat(20));
    assert_eq!(format_message(&indented), vec![header(&indented)]);
}

#[test]
fn format_message_header_keeps_trailing_spaces() {
    assert_eq!(format_message("Summary:  "), vec![header("Summary:  ")]);
}

#[test]
fn format_message_header_length_counts_characters() {
    // 98 multi-byte chars + ':' is well over 100 bytes but under 100 chars.
    let line = format!("{}:", "é".repeat(HEADER_MAX_CHARS - 2));
    assert_eq!(format_message(&line), vec![header(&line)]);
}

#[test]
fn format_message_bold_bullet_content() {
    let blocks = format_message("- **Math**: 92%");
    let DisplayBlock::ListItem { marker, content } = &blocks[0] else {
        panic!("expected ListItem, got {:?}", blocks[0]);
    };
    assert_eq!(*marker, ListMarker::Bullet);
    assert_eq!(content.runs(), [run("Math", STRONG), run(": 92%", PLAIN)]);
}

#[test]
fn format_message_italic_at_line_start_is_not_a_bullet() {
    let blocks = format_message("*italic* start");
    let DisplayBlock::Text { content } = &blocks[0] else {
        panic!("expected Text, got {:?}", blocks[0]);
    };
    assert_eq!(content.runs(), [run("italic", EM), run(" start", PLAIN)]);
}

#[test]
fn format_message_end_to_end_summary() {
    let raw = "Here are your subjects:\n- Math: 92%\n- Science: 88%\n\nGood job!";
    assert_eq!(
        format_message(raw),
        vec![
            header("Here are your subjects:"),
            bullet("Math: 92%"),
            bullet("Science: 88%"),
            DisplayBlock::Break,
            text("Good job!"),
        ]
    );
}

#[test]
fn format_inline_bold_italic_code_each_once() {
    let span = format_inline("**bold** and *italic* and `code`");
    assert_eq!(
        span.runs(),
        [
            run("bold", STRONG),
            run(" and ", PLAIN),
            run("italic", EM),
            run(" and ", PLAIN),
            run("code", CODE),
        ]
    );
}

#[test]
fn format_inline_underscore_variants() {
    let span = format_inline("__strong__ and _light_");
    assert_eq!(
        span.runs(),
        [run("strong", STRONG), run(" and ", PLAIN), run("light", EM)]
    );
}

#[test]
fn format_inline_two_italics_stay_separate() {
    let span = format_inline("*a* and *b*");
    assert_eq!(span.runs(), [run("a", EM), run(" and ", PLAIN), run("b", EM)]);
}

#[test]
fn format_inline_unterminated_markers_stay_literal() {
    assert_eq!(format_inline("**bold").runs(), [run("**bold", PLAIN)]);
    assert_eq!(format_inline("2 * 3 = 6").runs(), [run("2 * 3 = 6", PLAIN)]);
    assert_eq!(format_inline("`open").runs(), [run("`open", PLAIN)]);
}

#[test]
fn format_inline_snake_case_picks_up_emphasis() {
    let span = format_inline("set my_var_name now");
    assert_eq!(
        span.runs(),
        [run("set my", PLAIN), run("var", EM), run("name now", PLAIN)]
    );
}

#[test]
fn format_inline_italic_nested_in_bold() {
    let span = format_inline("**a *b* c**");
    let strong_em = SpanStyle {
        strong: true,
        emphasis: true,
        code: false,
    };
    assert_eq!(
        span.runs(),
        [run("a ", STRONG), run("b", strong_em), run(" c", STRONG)]
    );
}

#[test]
fn format_inline_code_does_not_shield_contents() {
    let span = format_inline("`a*b*c`");
    let code_em = SpanStyle {
        strong: false,
        emphasis: true,
        code: true,
    };
    assert_eq!(
        span.runs(),
        [run("a", CODE), run("b", code_em), run("c", CODE)]
    );
}

#[test]
fn format_inline_markup_in_input_stays_text() {
    let span = format_inline("<script>alert(1)</script>");
    assert_eq!(span.runs(), [run("<script>alert(1)</script>", PLAIN)]);
}

#[test]
fn format_inline_strips_forged_sentinels() {
    let span = format_inline("\u{E000}x\u{E001}");
    assert_eq!(span.runs(), [run("x", PLAIN)]);
}

#[test]
fn format_inline_reapplying_to_output_text_is_not_idempotent() {
    let once = format_inline("**a*");
    assert_eq!(once.runs(), [run("*a", EM)]);
    let twice = format_inline(&once.plain_text());
    assert_eq!(twice.runs(), [run("*a", PLAIN)]);
    assert_ne!(once, twice);
}

#[test]
fn format_inline_empty_is_empty() {
    assert!(format_inline("").is_empty());
}

//! Inline emphasis: **strong**, __strong__, *em*, _em_, `code`.
//!
//! The substitutions run as an ordered chain over the whole line, each one
//! seeing the output of the previous pass. Matched spans are marked with
//! private-use sentinel characters rather than markup, then the marked
//! string is split into styled runs. Spans can therefore nest (or cross)
//! exactly as the chain produces them, and no text from the reply is ever
//! interpreted as markup.

use std::sync::LazyLock;

use regex::Regex;

const STRONG_OPEN: char = '\u{E000}';
const STRONG_CLOSE: char = '\u{E001}';
const EM_OPEN: char = '\u{E002}';
const EM_CLOSE: char = '\u{E003}';
const CODE_OPEN: char = '\u{E004}';
const CODE_CLOSE: char = '\u{E005}';

/// (pattern, replacement) in application order. Bold runs before italic so
/// `**x**` is consumed before `*x*` can see it.
static PASSES: LazyLock<[(Regex, &'static str); 5]> = LazyLock::new(|| {
    let re = |p: &str| Regex::new(p).expect("inline emphasis regex");
    [
        (re(r"\*\*(.+?)\*\*"), "\u{E000}${1}\u{E001}"),
        (re(r"__(.+?)__"), "\u{E000}${1}\u{E001}"),
        (re(r"\*(.+?)\*"), "\u{E002}${1}\u{E003}"),
        (re(r"_(.+?)_"), "\u{E002}${1}\u{E003}"),
        (re(r"`(.+?)`"), "\u{E004}${1}\u{E005}"),
    ]
});

/// Emphasis applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

impl SpanStyle {
    pub fn is_plain(&self) -> bool {
        !self.strong && !self.emphasis && !self.code
    }
}

/// Literal text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRun {
    pub text: String,
    pub style: SpanStyle,
}

/// A line after inline formatting: ordered runs of literal text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InlineSpan {
    runs: Vec<SpanRun>,
}

impl InlineSpan {
    /// A span with no emphasis at all.
    pub fn plain(text: &str) -> Self {
        let mut span = Self::default();
        span.push(text, SpanStyle::default());
        span
    }

    pub fn runs(&self) -> &[SpanRun] {
        &self.runs
    }

    /// Concatenated text of all runs, styles dropped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Append text, merging with the previous run when the style matches.
    fn push(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.runs.push(SpanRun {
                text: text.to_string(),
                style,
            }),
        }
    }
}

fn is_sentinel(c: char) -> bool {
    (STRONG_OPEN..=CODE_CLOSE).contains(&c)
}

/// Apply the inline substitution chain to one line of text.
pub fn format_inline(text: &str) -> InlineSpan {
    // Sentinels already in the input would forge emphasis; drop them.
    let mut marked: String = text.chars().filter(|c| !is_sentinel(*c)).collect();
    for (re, replacement) in PASSES.iter() {
        marked = re.replace_all(&marked, *replacement).into_owned();
    }
    split_runs(&marked)
}

/// Walk the marked string and cut it into runs. Depth counters let crossed
/// spans (`*a **b* c**`) degrade to overlapping styles instead of failing.
fn split_runs(marked: &str) -> InlineSpan {
    let mut span = InlineSpan::default();
    let (mut strong, mut em, mut code) = (0u32, 0u32, 0u32);
    let mut buf = String::new();

    for c in marked.chars() {
        if !is_sentinel(c) {
            buf.push(c);
            continue;
        }
        let style = SpanStyle {
            strong: strong > 0,
            emphasis: em > 0,
            code: code > 0,
        };
        span.push(&buf, style);
        buf.clear();
        match c {
            STRONG_OPEN => strong += 1,
            STRONG_CLOSE => strong = strong.saturating_sub(1),
            EM_OPEN => em += 1,
            EM_CLOSE => em = em.saturating_sub(1),
            CODE_OPEN => code += 1,
            _ => code = code.saturating_sub(1),
        }
    }
    let style = SpanStyle {
        strong: strong > 0,
        emphasis: em > 0,
        code: code > 0,
    };
    span.push(&buf, style);
    span
}

//! Markdown stripping for model replies shown as plain text.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rule(pattern: &str, replacement: &'static str) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("markdown rule pattern"),
        replacement,
    }
}

/// Applied in order. Every rule either leaves the text unchanged or makes it
/// strictly shorter, which is what lets [`normalize`] iterate to a fixpoint.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // fenced code blocks, content included
        rule(r"(?s)```.*?```", ""),
        rule(r"\*\*(.*?)\*\*", "$1"),
        rule(r"\*([^*\n]+)\*", "$1"),
        rule(r"`([^`\n]*)`", "$1"),
        rule(r"(?m)^[ \t]*#{1,6}[ \t]*", ""),
        // bullets and numbered markers, possibly stacked ("1. - item")
        rule(r"(?m)^[ \t]*(?:(?:[-*+•]|\d+[.)])[ \t]+)+", ""),
        rule(r"[_~`]", ""),
        rule(r"\n[ \t]*(?:\n[ \t]*)+", "\n\n"),
    ]
});

static SENTENCE_GAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?!])[ \t]*(\p{Lu})").expect("sentence gap pattern"));

fn single_pass(text: &str) -> String {
    let mut out = text.to_string();
    for r in RULES.iter() {
        if let std::borrow::Cow::Owned(replaced) = r.pattern.replace_all(&out, r.replacement) {
            out = replaced;
        }
    }
    out.trim().to_string()
}

/// Strip markdown from a model reply: emphasis, code fences, inline code,
/// headers, bullet and numbered list markers, stray `_ ~ `` ` `` characters;
/// collapse runs of blank lines into one; trim.
///
/// The result is a fixpoint: `normalize(&normalize(x)) == normalize(x)`.
///
/// ```rust
/// use agri_advisor::structured::normalize;
///
/// let raw = "## Advice\n\n**Water** early.\n\n\n- Check soil\n1. Add compost";
/// assert_eq!(normalize(raw), "Advice\n\nWater early.\n\nCheck soil\nAdd compost");
/// ```
pub fn normalize(text: &str) -> String {
    let mut current = single_pass(text);
    loop {
        let next = single_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// [`normalize`], then make sure sentence punctuation is followed by one space
/// before a capitalised word.
pub fn format_for_display(text: &str) -> String {
    let clean = normalize(text);
    SENTENCE_GAP.replace_all(&clean, "$1 $2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_and_code() {
        assert_eq!(normalize("**Rice** is *cheap* with `urea`"), "Rice is cheap with urea");
        assert_eq!(normalize("before\n```\nlet x = 1;\n```\nafter"), "before\n\nafter");
    }

    #[test]
    fn headers_and_lists() {
        let raw = "# Title\n### Sub\n- one\n* two\n+ three\n1. four\n12) five";
        assert_eq!(normalize(raw), "Title\nSub\none\ntwo\nthree\nfour\nfive");
    }

    #[test]
    fn blank_lines_collapse() {
        assert_eq!(normalize("a\n\n\n\nb\n  \n\t\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn stray_characters_removed_and_trimmed() {
        assert_eq!(normalize("  ~~old~~ new_price  "), "old newprice");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n "), "");
    }

    #[test]
    fn idempotent_on_representative_inputs() {
        let samples = [
            "**Bold** and *italic* text",
            "- item one\n- item two\n  - nested",
            "1. first\n2. second\n10. tenth",
            "1. 2. stacked markers",
            "```rust\nfn main() {}\n```\nText after fence",
            "``` unterminated fence",
            "## Header\n\n\n\nBody with `code`",
            "****x****",
            "* **bold bullet**",
            "# - mixed\n- # mixed",
            "गेहूं की **कीमत** बढ़ी है।\n\n\n- मंडी देखें",
            "a * b * c",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn display_spacing() {
        assert_eq!(
            format_for_display("Sell now.Prices drop soon!Wait?Maybe"),
            "Sell now. Prices drop soon! Wait? Maybe"
        );
        assert_eq!(format_for_display("₹25.50 per kg"), "₹25.50 per kg");
    }
}

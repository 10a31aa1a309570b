//! Parenthetical segmentation
//!
//! Splits an utterance into spoken text and full-width parenthesized
//! directions such as `（笑）`.
//!
//! Brackets are not nested: a parenthetical ends at the first `）`, so
//! `（a（b）c）` yields `（a（b）` followed by speech `c）`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::models::Span;

static PARENTHETICAL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"（[^）]*）").unwrap());

/// Segment an utterance into speech and parenthetical spans, in order.
///
/// Empty gaps produce no span, so the concatenated span text is always
/// the input.
pub fn segment_utterance(utterance: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last_end = 0;

    for mat in PARENTHETICAL_PATTERN.find_iter(utterance) {
        if mat.start() > last_end {
            spans.push(Span::Speech(utterance[last_end..mat.start()].to_string()));
        }
        spans.push(Span::Parenthetical(mat.as_str().to_string()));
        last_end = mat.end();
    }

    if last_end < utterance.len() {
        spans.push(Span::Speech(utterance[last_end..].to_string()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speech(text: &str) -> Span {
        Span::Speech(text.to_string())
    }

    fn paren(text: &str) -> Span {
        Span::Parenthetical(text.to_string())
    }

    #[test]
    fn test_parenthetical_between_speech() {
        assert_eq!(
            segment_utterance("我们走吧（停顿）然后继续"),
            vec![speech("我们走吧"), paren("（停顿）"), speech("然后继续")]
        );
    }

    #[test]
    fn test_empty_utterance() {
        assert!(segment_utterance("").is_empty());
    }

    #[test]
    fn test_only_parenthetical() {
        assert_eq!(segment_utterance("（沉默）"), vec![paren("（沉默）")]);
    }

    #[test]
    fn test_adjacent_and_leading_parentheticals() {
        assert_eq!(
            segment_utterance("（笑）（摇头）不行"),
            vec![paren("（笑）"), paren("（摇头）"), speech("不行")]
        );
    }

    #[test]
    fn test_unbalanced_bracket_is_speech() {
        assert_eq!(
            segment_utterance("等等（他还没来"),
            vec![speech("等等（他还没来")]
        );
        assert_eq!(segment_utterance("好）吧"), vec![speech("好）吧")]);
    }

    #[test]
    fn test_ascii_parentheses_are_speech() {
        assert_eq!(segment_utterance("ok (laughs)"), vec![speech("ok (laughs)")]);
    }

    #[test]
    fn test_nested_brackets_close_at_first_closer() {
        assert_eq!(
            segment_utterance("说（a（b）c）完"),
            vec![speech("说"), paren("（a（b）"), speech("c）完")]
        );
    }

    #[test]
    fn test_empty_parenthetical() {
        assert_eq!(
            segment_utterance("嗯（）嗯"),
            vec![speech("嗯"), paren("（）"), speech("嗯")]
        );
    }
}

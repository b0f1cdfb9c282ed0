//! Segment model of a text being normalized.
//!
//! The masked text is split into protected placeholders and literal prose.
//! Each rule then scans only the literal segments, carving recognized
//! numeric tokens out of them, so a later rule can never see text an earlier
//! rule already claimed and no rule ever sees a placeholder.

use regex::Regex;
use tracing::{debug, trace};

use norm_core::NumericToken;

use crate::rules::{Rule, RuleContext};

/// A piece of the text being normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Unclassified prose, still open to later rules.
    Literal(String),
    /// A placeholder token standing for masked text.
    Protected(String),
    /// A classified numeric expression.
    Numeric(NumericToken),
}

/// Split masked text into literal and protected segments.
pub fn split_protected(masked: &str, token_pattern: &Regex) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;
    for m in token_pattern.find_iter(masked) {
        if m.start() > last {
            segments.push(Segment::Literal(masked[last..m.start()].to_string()));
        }
        segments.push(Segment::Protected(m.as_str().to_string()));
        last = m.end();
    }
    if last < masked.len() {
        segments.push(Segment::Literal(masked[last..].to_string()));
    }
    segments
}

/// Rewrite every literal segment with `f`.
pub fn map_literals<F>(segments: Vec<Segment>, f: F) -> Vec<Segment>
where
    F: Fn(&str) -> String,
{
    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => Segment::Literal(f(&text)),
            other => other,
        })
        .collect()
}

/// Apply one rule to every literal segment.
pub fn apply_rule(segments: Vec<Segment>, rule: &dyn Rule, ctx: &RuleContext<'_>) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => classify_literal(&text, rule, ctx, &mut out),
            other => out.push(other),
        }
    }
    out
}

fn classify_literal(text: &str, rule: &dyn Rule, ctx: &RuleContext<'_>, out: &mut Vec<Segment>) {
    let mut last = 0;
    for caps in rule.pattern().captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some(spoken) = rule.render(&caps, ctx) else {
            debug!(
                rule = rule.name(),
                token = whole.as_str(),
                "leaving unparsable numeric token unchanged"
            );
            continue;
        };

        trace!(rule = rule.name(), token = whole.as_str(), spoken = %spoken, "classified");
        if whole.start() > last {
            out.push(Segment::Literal(text[last..whole.start()].to_string()));
        }
        out.push(Segment::Numeric(NumericToken::new(
            rule.category(),
            whole.as_str(),
            spoken,
        )));
        last = whole.end();
    }
    if last < text.len() {
        out.push(Segment::Literal(text[last..].to_string()));
    }
}

/// Concatenate segments back into (still masked) text.
pub fn render(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) | Segment::Protected(text) => out.push_str(text),
            Segment::Numeric(token) => out.push_str(&token.spoken),
        }
    }
    out
}

/// Numeric tokens in text order.
pub fn into_tokens(segments: Vec<Segment>) -> Vec<NumericToken> {
    segments
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Numeric(token) => Some(token),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::rules_for;
    use crate::mask::Masker;
    use crate::rules::{IntegerRule, PercentageRule};
    use norm_core::{Category, Lang, NormalizerConfig};

    #[test]
    fn test_split_protected() {
        let masker = Masker::new().unwrap();
        let segments = split_protected("a __URL_0__ b__TIME_1__", masker.token_pattern());
        assert_eq!(
            segments,
            vec![
                Segment::Literal("a ".to_string()),
                Segment::Protected("__URL_0__".to_string()),
                Segment::Literal(" b".to_string()),
                Segment::Protected("__TIME_1__".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_rule_carves_tokens() {
        let config = NormalizerConfig::for_language(Lang::En);
        let ctx = RuleContext {
            lang: rules_for(Lang::En),
            config: &config,
        };
        let rule = IntegerRule::new().unwrap();

        let segments = apply_rule(vec![Segment::Literal("I have 3 cats".to_string())], &rule, &ctx);
        assert_eq!(segments.len(), 3);
        assert_eq!(render(&segments), "I have three cats");

        let tokens = into_tokens(segments);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, Category::Integer);
        assert_eq!(tokens[0].source, "3");
    }

    #[test]
    fn test_later_rules_skip_claimed_and_protected_segments() {
        let config = NormalizerConfig::for_language(Lang::En);
        let ctx = RuleContext {
            lang: rules_for(Lang::En),
            config: &config,
        };

        let segments = vec![
            Segment::Literal("50% of ".to_string()),
            Segment::Protected("__URL_0__".to_string()),
        ];
        let segments = apply_rule(segments, &PercentageRule::new().unwrap(), &ctx);
        let segments = apply_rule(segments, &IntegerRule::new().unwrap(), &ctx);

        assert_eq!(render(&segments), "fifty percent of __URL_0__");
        assert_eq!(into_tokens(segments).len(), 1);
    }

    #[test]
    fn test_declined_match_stays_literal() {
        let config = NormalizerConfig::for_language(Lang::En);
        let ctx = RuleContext {
            lang: rules_for(Lang::En),
            config: &config,
        };
        let text = "rate 99999999999999999999999% today";
        let segments = apply_rule(
            vec![Segment::Literal(text.to_string())],
            &PercentageRule::new().unwrap(),
            &ctx,
        );
        assert_eq!(segments, vec![Segment::Literal(text.to_string())]);
    }

    #[test]
    fn test_map_literals_leaves_other_segments() {
        let segments = vec![
            Segment::Literal("a".to_string()),
            Segment::Protected("__MAIL_0__".to_string()),
        ];
        let mapped = map_literals(segments, |s| s.to_uppercase());
        assert_eq!(render(&mapped), "A__MAIL_0__");
    }
}

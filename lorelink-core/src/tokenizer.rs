//! Splits free text into plain-text and `@mention` segments.
//!
//! At every trigger the tokenizer tries the known target names from longest
//! to shortest (input order breaks ties) and takes the first name that
//! matches case-insensitively and ends on a match boundary. Unmatched
//! triggers stay in the surrounding text.

use std::cmp::Reverse;

use tracing::{Level, debug, trace};

use crate::boundary::{MENTION_TRIGGER, MentionRules};
use crate::diagnostics::find_shadowed_names;
use crate::target::MentionTarget;
use crate::token::MentionToken;

/// Byte range of a resolved mention, trigger included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub target: &'a MentionTarget,
}

/// Reusable tokenizer over one target list.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rules: MentionRules,
    candidates: Vec<&'a MentionTarget>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(targets: &'a [MentionTarget]) -> Self {
        Self::with_rules(targets, MentionRules::default())
    }

    pub fn with_rules(targets: &'a [MentionTarget], rules: MentionRules) -> Self {
        let mut candidates: Vec<&'a MentionTarget> = targets.iter().collect();
        candidates.sort_by_cached_key(|target| Reverse(target.name_len()));

        if tracing::enabled!(Level::DEBUG) {
            let shadowed = find_shadowed_names(targets);
            if !shadowed.is_empty() {
                debug!(
                    shadowed = shadowed.len(),
                    "targets share case-insensitive names; the first listed wins"
                );
            }
        }

        Self { rules, candidates }
    }

    pub fn rules(&self) -> &MentionRules {
        &self.rules
    }

    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<MentionToken<'t>>
    where
        'a: 't,
    {
        if text.is_empty() {
            return Vec::new();
        }
        if self.candidates.is_empty() {
            return vec![MentionToken::Text { value: text }];
        }

        let mut tokens = Vec::new();
        // Start of the plain-text run not yet emitted.
        let mut run_start = 0;

        for span in self.mentions(text) {
            let Some(value) = text.get(span.start..span.end) else {
                continue;
            };
            if let Some(plain) = text
                .get(run_start..span.start)
                .filter(|run| !run.is_empty())
            {
                tokens.push(MentionToken::Text { value: plain });
            }
            tokens.push(MentionToken::Mention {
                value,
                target: span.target,
            });
            run_start = span.end;
        }

        if let Some(plain) = text.get(run_start..).filter(|run| !run.is_empty()) {
            tokens.push(MentionToken::Text { value: plain });
        }

        trace!(
            bytes = text.len(),
            tokens = tokens.len(),
            "tokenized mention text"
        );
        tokens
    }

    /// Every resolved mention in `text`, left to right.
    pub fn mentions(&self, text: &str) -> Vec<MentionSpan<'a>> {
        let mut spans = Vec::new();
        if self.candidates.is_empty() {
            return spans;
        }

        let mut cursor = 0;
        while let Some(offset) = text
            .get(cursor..)
            .and_then(|rest| rest.find(MENTION_TRIGGER))
        {
            let at = cursor + offset;
            let name_start = at + MENTION_TRIGGER.len_utf8();

            let matched = if self.rules.opens_mention(text, at) {
                self.match_at(text, name_start)
            } else {
                None
            };
            match matched {
                Some((target, end)) => {
                    spans.push(MentionSpan {
                        start: at,
                        end,
                        target,
                    });
                    cursor = end;
                }
                None => cursor = name_start,
            }
        }

        spans
    }

    /// Longest eligible target whose name starts at `name_start`, with the
    /// byte offset just past the matched name.
    fn match_at(&self, text: &str, name_start: usize) -> Option<(&'a MentionTarget, usize)> {
        let rest = text.get(name_start..)?;
        self.candidates.iter().find_map(|target| {
            let len = prefix_len_ignore_case(rest, target.name())?;
            let terminated = rest
                .get(len..)
                .and_then(|after| after.chars().next())
                .is_none_or(|next| self.rules.is_match_boundary(next));
            terminated.then_some((*target, name_start + len))
        })
    }
}

/// Tokenize `text` against `targets` with the default boundary rules.
pub fn tokenize<'a>(text: &'a str, targets: &'a [MentionTarget]) -> Vec<MentionToken<'a>> {
    Tokenizer::new(targets).tokenize(text)
}

/// Byte length of the prefix of `haystack` that equals `name` ignoring case,
/// compared character by character.
fn prefix_len_ignore_case(haystack: &str, name: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for expected in name.chars() {
        let (_, found) = chars.next()?;
        if !chars_eq_ignore_case(found, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(idx, _)| idx))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MentionKind;

    fn target(id: &str, name: &str) -> MentionTarget {
        MentionTarget::new(id, name, MentionKind::Character, format!("/c/{id}")).expect("target")
    }

    fn values<'a>(tokens: &[MentionToken<'a>]) -> Vec<(&'a str, Option<&'a str>)> {
        tokens
            .iter()
            .map(|token| (token.value(), token.target().map(MentionTarget::id)))
            .collect()
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        let targets = vec![target("1", "Bob")];
        assert!(tokenize("", &targets).is_empty());
        assert!(tokenize("", &[]).is_empty());
    }

    #[test]
    fn no_targets_passes_text_through() {
        let tokens = tokenize("hello @Bob", &[]);
        assert_eq!(tokens, vec![MentionToken::Text { value: "hello @Bob" }]);
    }

    #[test]
    fn unmatched_triggers_merge_into_text() {
        let targets = vec![target("1", "Bob")];
        let tokens = tokenize("mail me @ home or @Alice", &targets);
        assert_eq!(values(&tokens), vec![("mail me @ home or @Alice", None)]);
    }

    #[test]
    fn mention_at_end_of_text() {
        let targets = vec![target("1", "Bob")];
        let tokens = tokenize("ask @bob", &targets);
        assert_eq!(values(&tokens), vec![("ask ", None), ("@bob", Some("1"))]);
    }

    #[test]
    fn adjacent_mentions_separated_by_punctuation() {
        let targets = vec![target("1", "Bob"), target("2", "Ann")];
        let tokens = tokenize("@Bob,@Ann!", &targets);
        assert_eq!(
            values(&tokens),
            vec![
                ("@Bob", Some("1")),
                (",", None),
                ("@Ann", Some("2")),
                ("!", None)
            ]
        );
    }

    #[test]
    fn glued_trigger_is_not_a_mention() {
        let targets = vec![target("1", "Bob")];
        let tokens = tokenize("write foo@Bob today", &targets);
        assert_eq!(values(&tokens), vec![("write foo@Bob today", None)]);
    }

    #[test]
    fn double_trigger_does_not_open_mention() {
        let targets = vec![target("1", "Bob")];
        let tokens = tokenize("@@Bob", &targets);
        assert_eq!(values(&tokens), vec![("@@Bob", None)]);
    }

    #[test]
    fn equal_length_names_prefer_first_listed() {
        let targets = vec![target("first", "Mira"), target("second", "mira")];
        let tokens = tokenize("@MIRA waves", &targets);
        assert_eq!(
            values(&tokens),
            vec![("@MIRA", Some("first")), (" waves", None)]
        );
    }

    #[test]
    fn shorter_name_wins_when_longer_is_not_terminated() {
        let targets = vec![target("1", "Session"), target("2", "Session Zero")];
        let tokens = tokenize("@Session Zeroth", &targets);
        assert_eq!(
            values(&tokens),
            vec![("@Session", Some("1")), (" Zeroth", None)]
        );
    }

    #[test]
    fn multibyte_names_match_case_insensitively() {
        let targets = vec![target("1", "Ærwyn Þórr")];
        let tokens = tokenize("met @ærwyn þÓrr.", &targets);
        assert_eq!(
            values(&tokens),
            vec![("met ", None), ("@ærwyn þÓrr", Some("1")), (".", None)]
        );
    }

    #[test]
    fn custom_rules_change_termination() {
        let targets = vec![target("1", "Bob")];
        let rules = MentionRules::with_terminators(['-']);
        let tokenizer = Tokenizer::with_rules(&targets, rules);
        assert_eq!(
            values(&tokenizer.tokenize("@Bob-ish")),
            vec![("@Bob", Some("1")), ("-ish", None)]
        );
        assert_eq!(values(&tokenizer.tokenize("@Bob.")), vec![("@Bob.", None)]);
    }

    #[test]
    fn prefix_comparison_reports_byte_length() {
        assert_eq!(prefix_len_ignore_case("ÉLAN rest", "élan"), Some(5));
        assert_eq!(prefix_len_ignore_case("El", "Elan"), None);
        assert_eq!(prefix_len_ignore_case("Elan", "Elan"), Some(4));
    }
}

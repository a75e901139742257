//! Boundary predicates shared by the tokenizer and the composer.
//!
//! Two related sets are in play:
//! - the *query* boundary (any whitespace) ends a live `@query` run;
//! - the *match* boundary (whitespace plus closing punctuation) decides
//!   whether a matched name is complete, and whether an `@` may open a
//!   mention at all.

/// Character that introduces a mention.
pub const MENTION_TRIGGER: char = '@';

/// Closing punctuation that terminates a mention in addition to whitespace.
pub const DEFAULT_TERMINATORS: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', ')', ']'];

/// Whitespace ends a live `@query`; punctuation does not, so names such as
/// "St. Ives" can be typed.
pub fn is_query_boundary(ch: char) -> bool {
    ch.is_whitespace()
}

/// Boundary rules used while scanning for mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRules {
    terminators: Vec<char>,
}

impl Default for MentionRules {
    fn default() -> Self {
        Self {
            terminators: DEFAULT_TERMINATORS.to_vec(),
        }
    }
}

impl MentionRules {
    /// Build rules from a custom terminator set. Whitespace and the trigger
    /// character are dropped from the set: whitespace always terminates, and
    /// the trigger can never end a name.
    pub fn with_terminators(terminators: impl IntoIterator<Item = char>) -> Self {
        let mut set: Vec<char> = Vec::new();
        for ch in terminators {
            if ch.is_whitespace() || ch == MENTION_TRIGGER || set.contains(&ch) {
                continue;
            }
            set.push(ch);
        }
        Self { terminators: set }
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    /// Whitespace or a terminator completes a matched name.
    pub fn is_match_boundary(&self, ch: char) -> bool {
        ch.is_whitespace() || self.terminators.contains(&ch)
    }

    /// Whether the trigger at byte offset `at` may open a mention: it must
    /// start the text or follow a match boundary.
    pub fn opens_mention(&self, text: &str, at: usize) -> bool {
        match text.get(..at).and_then(|before| before.chars().next_back()) {
            Some(prev) => self.is_match_boundary(prev),
            None => at == 0,
        }
    }
}

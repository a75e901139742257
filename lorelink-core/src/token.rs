use serde::Serialize;

use crate::target::MentionTarget;

/// One segment of tokenized text. Tokens borrow from the scanned text and
/// the target list; concatenating every [`MentionToken::value`] in order
/// yields the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MentionToken<'a> {
    /// Plain text with no special meaning.
    Text { value: &'a str },
    /// A resolved reference. `value` is the exact text consumed, starting
    /// with the trigger and keeping the casing found in the source.
    Mention {
        value: &'a str,
        target: &'a MentionTarget,
    },
}

impl<'a> MentionToken<'a> {
    pub fn value(&self) -> &'a str {
        match self {
            Self::Text { value } | Self::Mention { value, .. } => *value,
        }
    }

    pub fn target(&self) -> Option<&'a MentionTarget> {
        match self {
            Self::Text { .. } => None,
            Self::Mention { target, .. } => Some(*target),
        }
    }

    pub fn is_mention(&self) -> bool {
        matches!(self, Self::Mention { .. })
    }
}

/// Rebuild the source text from a token sequence.
pub fn reassemble(tokens: &[MentionToken<'_>]) -> String {
    tokens.iter().map(MentionToken::value).collect()
}

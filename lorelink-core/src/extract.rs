use rustc_hash::FxHashSet;

use crate::target::{MentionKind, MentionTarget};
use crate::tokenizer::Tokenizer;

/// Distinct targets mentioned in `text`, in order of first mention,
/// optionally restricted to one kind.
pub fn collect_mentions<'a>(
    text: &str,
    targets: &'a [MentionTarget],
    kind: Option<MentionKind>,
) -> Vec<&'a MentionTarget> {
    collect_with(&Tokenizer::new(targets), text, kind)
}

/// Same as [`collect_mentions`], reusing an existing tokenizer.
pub fn collect_with<'a>(
    tokenizer: &Tokenizer<'a>,
    text: &str,
    kind: Option<MentionKind>,
) -> Vec<&'a MentionTarget> {
    let mut seen: FxHashSet<&'a str> = FxHashSet::default();
    let mut mentioned = Vec::new();

    for span in tokenizer.mentions(text) {
        let target = span.target;
        if kind.is_some_and(|wanted| target.kind() != wanted) {
            continue;
        }
        if seen.insert(target.id()) {
            mentioned.push(target);
        }
    }

    mentioned
}

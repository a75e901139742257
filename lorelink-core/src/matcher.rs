use crate::target::MentionTarget;

/// Suggestion menu size used when the host does not configure one.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 12;

/// Filter targets for an autocomplete query typed after `@`.
///
/// An empty query keeps every target; otherwise a target survives when its
/// name contains `query` anywhere, ignoring case. Input order is preserved
/// and the result holds at most `limit` entries.
pub fn match_targets<'a>(
    query: &str,
    targets: &'a [MentionTarget],
    limit: usize,
) -> Vec<&'a MentionTarget> {
    if query.is_empty() {
        return targets.iter().take(limit).collect();
    }

    let needle = query.to_lowercase();
    targets
        .iter()
        .filter(|target| target.name().to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MentionKind;

    fn targets(names: &[&str]) -> Vec<MentionTarget> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                MentionTarget::new(idx.to_string(), *name, MentionKind::Character, "")
                    .expect("target")
            })
            .collect()
    }

    fn names<'a>(matches: &[&'a MentionTarget]) -> Vec<&'a str> {
        matches.iter().map(|target| target.name()).collect()
    }

    #[test]
    fn substring_matches_anywhere_in_name() {
        let pool = targets(&["Dogezerker", "Zera", "Bob", "Session Zero"]);
        assert_eq!(
            names(&match_targets("zer", &pool, 12)),
            vec!["Dogezerker", "Zera", "Session Zero"]
        );
    }

    #[test]
    fn empty_query_returns_leading_targets_in_order() {
        let pool = targets(&["c", "a", "b"]);
        assert_eq!(names(&match_targets("", &pool, 2)), vec!["c", "a"]);
        assert_eq!(names(&match_targets("", &pool, 10)), vec!["c", "a", "b"]);
    }

    #[test]
    fn limit_caps_results() {
        let pool = targets(&["Ann", "Anna", "Annabel", "Joann"]);
        assert_eq!(names(&match_targets("ann", &pool, 3)), vec!["Ann", "Anna", "Annabel"]);
        assert!(match_targets("ann", &pool, 0).is_empty());
    }

    #[test]
    fn query_may_contain_punctuation() {
        let pool = targets(&["Dr. Voss", "Voss"]);
        assert_eq!(names(&match_targets("dr.", &pool, 12)), vec!["Dr. Voss"]);
    }
}

//! Reports target names that collide case-insensitively.
//!
//! Matching resolves such collisions silently in favor of the first target
//! listed; this module makes the losers visible so hosts can warn about them.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::target::MentionTarget;

/// A case-insensitive name claimed by more than one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedName<'a> {
    /// Target that wins every match on this name (first in input order).
    pub winner: &'a MentionTarget,
    /// Targets that can never be matched by name, in input order.
    pub shadowed: Vec<&'a MentionTarget>,
}

impl ShadowedName<'_> {
    pub fn name(&self) -> &str {
        self.winner.name()
    }
}

/// Group targets by lowercase name and return every group with more than
/// one member, ordered by the position of its winner.
pub fn find_shadowed_names(targets: &[MentionTarget]) -> Vec<ShadowedName<'_>> {
    let mut index_by_name: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<ShadowedName<'_>> = Vec::new();

    for target in targets {
        let key = target.name().to_lowercase();
        match index_by_name.get(&key).and_then(|&idx| groups.get_mut(idx)) {
            Some(group) => group.shadowed.push(target),
            None => {
                index_by_name.insert(key, groups.len());
                groups.push(ShadowedName {
                    winner: target,
                    shadowed: Vec::new(),
                });
            }
        }
    }

    groups.retain(|group| !group.shadowed.is_empty());
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MentionKind;

    fn target(id: &str, name: &str, kind: MentionKind) -> MentionTarget {
        MentionTarget::new(id, name, kind, "").expect("target")
    }

    #[test]
    fn unique_names_report_nothing() {
        let targets = vec![
            target("1", "Bob", MentionKind::Character),
            target("2", "Bobby", MentionKind::Character),
        ];
        assert!(find_shadowed_names(&targets).is_empty());
    }

    #[test]
    fn collisions_group_by_first_seen() {
        let targets = vec![
            target("org", "The Guild", MentionKind::Organization),
            target("c1", "Ash", MentionKind::Character),
            target("loc", "the guild", MentionKind::Location),
            target("c2", "ASH", MentionKind::Character),
            target("s1", "THE GUILD", MentionKind::Session),
        ];
        let report = find_shadowed_names(&targets);
        assert_eq!(report.len(), 2);

        let guild = report.first().expect("guild group");
        assert_eq!(guild.name(), "The Guild");
        assert_eq!(guild.winner.id(), "org");
        let losers: Vec<&str> = guild.shadowed.iter().map(|t| t.id()).collect();
        assert_eq!(losers, vec!["loc", "s1"]);

        let ash = report.get(1).expect("ash group");
        assert_eq!(ash.winner.id(), "c1");
        assert_eq!(ash.shadowed.len(), 1);
    }
}

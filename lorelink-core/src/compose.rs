//! Live `@mention` composition for text inputs.
//!
//! The composing state is re-derived from the text and cursor on every
//! change rather than updated incrementally: scanning backward from the
//! cursor either finds a trigger that may open a mention, with no whitespace
//! in between, or the input is idle.
//!
//! Cursor positions are UTF-8 byte offsets into the text.

use crate::boundary::{MENTION_TRIGGER, MentionRules, is_query_boundary};
use crate::matcher::{DEFAULT_SUGGESTION_LIMIT, match_targets};
use crate::target::MentionTarget;

/// A mention being typed: the trigger offset, the cursor, and the text
/// between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuery {
    pub at: usize,
    pub cursor: usize,
    pub query: String,
}

/// Result of accepting a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub text: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComposeState {
    #[default]
    Idle,
    Composing(ActiveQuery),
}

/// Derive the active query at `cursor` with the default rules.
pub fn active_query(text: &str, cursor: usize) -> Option<ActiveQuery> {
    active_query_with(text, cursor, &MentionRules::default())
}

pub fn active_query_with(text: &str, cursor: usize, rules: &MentionRules) -> Option<ActiveQuery> {
    let before = text.get(..cursor)?;

    for (idx, ch) in before.char_indices().rev() {
        if ch == MENTION_TRIGGER {
            if !rules.opens_mention(text, idx) {
                return None;
            }
            let query = before.get(idx + MENTION_TRIGGER.len_utf8()..)?;
            return Some(ActiveQuery {
                at: idx,
                cursor,
                query: query.to_string(),
            });
        }
        if is_query_boundary(ch) {
            return None;
        }
    }

    None
}

/// Replace the mention being typed at `cursor` with `@` + the target name.
///
/// A single space follows the name unless the next character already ends
/// a mention. Returns `None` when no mention is being composed at `cursor`.
pub fn insert_mention(text: &str, cursor: usize, target: &MentionTarget) -> Option<Insertion> {
    insert_mention_with(text, cursor, target, &MentionRules::default())
}

pub fn insert_mention_with(
    text: &str,
    cursor: usize,
    target: &MentionTarget,
    rules: &MentionRules,
) -> Option<Insertion> {
    let active = active_query_with(text, cursor, rules)?;
    let head = text.get(..active.at)?;
    let tail = text.get(cursor..)?;

    let mut replaced =
        String::with_capacity(text.len() + target.name().len() + MENTION_TRIGGER.len_utf8() + 1);
    replaced.push_str(head);
    replaced.push(MENTION_TRIGGER);
    replaced.push_str(target.name());

    let needs_space = tail
        .chars()
        .next()
        .is_none_or(|next| !rules.is_match_boundary(next));
    if needs_space {
        replaced.push(' ');
    }

    let new_cursor = replaced.len();
    replaced.push_str(tail);
    Some(Insertion {
        text: replaced,
        cursor: new_cursor,
    })
}

/// Headless autocomplete state for one text input.
///
/// Holds the text, cursor and target pool; rendering and key handling stay
/// with the host.
#[derive(Debug, Clone)]
pub struct MentionComposer<'a> {
    targets: &'a [MentionTarget],
    rules: MentionRules,
    limit: usize,
    text: String,
    cursor: usize,
    state: ComposeState,
    selected: usize,
}

impl<'a> MentionComposer<'a> {
    pub fn new(targets: &'a [MentionTarget]) -> Self {
        Self {
            targets,
            rules: MentionRules::default(),
            limit: DEFAULT_SUGGESTION_LIMIT,
            text: String::new(),
            cursor: 0,
            state: ComposeState::Idle,
            selected: 0,
        }
    }

    pub fn with_rules(mut self, rules: MentionRules) -> Self {
        self.rules = rules;
        self.refresh();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> &ComposeState {
        &self.state
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, ComposeState::Composing(_))
    }

    pub fn query(&self) -> Option<&str> {
        match &self.state {
            ComposeState::Idle => None,
            ComposeState::Composing(active) => Some(&active.query),
        }
    }

    /// Replace the text and cursor, as after any edit.
    pub fn set_text(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.cursor = cursor;
        self.refresh();
    }

    /// Move the cursor without editing.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.refresh();
    }

    /// Close the suggestion menu until the next edit or cursor move.
    pub fn cancel(&mut self) {
        self.state = ComposeState::Idle;
        self.selected = 0;
    }

    pub fn suggestions(&self) -> Vec<&'a MentionTarget> {
        match &self.state {
            ComposeState::Idle => Vec::new(),
            ComposeState::Composing(active) => {
                match_targets(&active.query, self.targets, self.limit)
            }
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.is_composing().then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&'a MentionTarget> {
        self.suggestions().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.suggestions().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.suggestions().len();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Insert `target` in place of the active query. Returns `false` and
    /// leaves the text untouched when nothing is being composed.
    pub fn accept(&mut self, target: &MentionTarget) -> bool {
        if !self.is_composing() {
            return false;
        }
        let Some(insertion) = insert_mention_with(&self.text, self.cursor, target, &self.rules)
        else {
            return false;
        };

        tracing::debug!(target_id = target.id(), "accepted mention suggestion");
        self.text = insertion.text;
        self.cursor = insertion.cursor;
        self.cancel();
        true
    }

    pub fn accept_selected(&mut self) -> bool {
        match self.selected() {
            Some(target) => self.accept(target),
            None => false,
        }
    }

    fn refresh(&mut self) {
        let next = match active_query_with(&self.text, self.cursor, &self.rules) {
            Some(active) => ComposeState::Composing(active),
            None => ComposeState::Idle,
        };
        let same_query = match (&self.state, &next) {
            (ComposeState::Composing(prev), ComposeState::Composing(active)) => {
                prev.query == active.query
            }
            _ => false,
        };
        if !same_query {
            self.selected = 0;
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MentionKind;

    fn pool() -> Vec<MentionTarget> {
        ["Bob", "Bobbin", "Elowen", "The Rusted Anchor"]
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                MentionTarget::new(format!("t{idx}"), *name, MentionKind::Character, "")
                    .expect("target")
            })
            .collect()
    }

    #[test]
    fn bare_trigger_opens_empty_query() {
        assert_eq!(
            active_query("@", 1),
            Some(ActiveQuery {
                at: 0,
                cursor: 1,
                query: String::new()
            })
        );
    }

    #[test]
    fn query_runs_from_trigger_to_cursor() {
        let text = "check @Elo for errors";
        let active = active_query(text, 10).expect("composing");
        assert_eq!(active.at, 6);
        assert_eq!(active.query, "Elo");

        let mid = active_query(text, 8).expect("composing mid-word");
        assert_eq!(mid.query, "E");
    }

    #[test]
    fn whitespace_or_missing_trigger_is_idle() {
        assert_eq!(active_query("no reference here", 5), None);
        assert_eq!(active_query("@Bob and", 8), None);
        assert_eq!(active_query("@Bob\n", 5), None);
        assert_eq!(active_query("", 0), None);
    }

    #[test]
    fn glued_trigger_does_not_compose() {
        assert_eq!(active_query("foo@ba", 6), None);
        assert!(active_query("(x) @ba", 7).is_some());
        assert!(active_query("said \"@ba", 9).is_some());
    }

    #[test]
    fn cursor_out_of_range_or_mid_char_is_idle() {
        assert_eq!(active_query("@Bob", 9), None);
        assert_eq!(active_query("@é", 2), None);
        assert!(active_query("@é", 3).is_some());
    }

    #[test]
    fn insertion_adds_space_before_plain_text() {
        let targets = pool();
        let elowen = targets.get(2).expect("Elowen");
        let inserted = insert_mention("met @elo", 8, elowen).expect("inserted");
        assert_eq!(inserted.text, "met @Elowen ");
        assert_eq!(inserted.cursor, inserted.text.len());

        let inserted = insert_mention("met @eloyesterday", 8, elowen).expect("inserted");
        assert_eq!(inserted.text, "met @Elowen yesterday");
        assert_eq!(inserted.cursor, "met @Elowen ".len());
    }

    #[test]
    fn insertion_skips_space_before_boundary() {
        let targets = pool();
        let anchor = targets.get(3).expect("anchor");
        let inserted = insert_mention("at @the rus.", 11, anchor);
        assert_eq!(inserted, None, "space inside the run closes composition");

        let inserted = insert_mention("at @the.", 7, anchor).expect("inserted");
        assert_eq!(inserted.text, "at @The Rusted Anchor.");
        assert_eq!(inserted.cursor, "at @The Rusted Anchor".len());

        let inserted = insert_mention("at @the now", 7, anchor).expect("inserted");
        assert_eq!(inserted.text, "at @The Rusted Anchor now");
        assert_eq!(inserted.cursor, "at @The Rusted Anchor".len());
    }

    #[test]
    fn composer_follows_edits_and_cursor_moves() {
        let targets = pool();
        let mut composer = MentionComposer::new(&targets);
        assert_eq!(composer.state(), &ComposeState::Idle);

        composer.set_text("hi @bo", 6);
        assert_eq!(composer.query(), Some("bo"));
        let names: Vec<&str> = composer.suggestions().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Bob", "Bobbin"]);

        composer.set_text("hi @bo ", 7);
        assert!(!composer.is_composing());
        assert!(composer.suggestions().is_empty());

        composer.set_cursor(6);
        assert_eq!(composer.query(), Some("bo"));

        composer.set_cursor(2);
        assert!(!composer.is_composing());
    }

    #[test]
    fn cancel_closes_until_next_event() {
        let targets = pool();
        let mut composer = MentionComposer::new(&targets);
        composer.set_text("@el", 3);
        assert!(composer.is_composing());

        composer.cancel();
        assert!(!composer.is_composing());
        assert_eq!(composer.selected_index(), None);

        composer.set_text("@elo", 4);
        assert_eq!(composer.query(), Some("elo"));
    }

    #[test]
    fn selection_wraps_and_accepts() {
        let targets = pool();
        let mut composer = MentionComposer::new(&targets).with_limit(2);
        composer.set_text("ping @", 6);
        assert_eq!(composer.suggestions().len(), 2);
        assert_eq!(composer.selected_index(), Some(0));

        composer.select_previous();
        assert_eq!(composer.selected_index(), Some(1));
        composer.select_next();
        assert_eq!(composer.selected_index(), Some(0));
        composer.select_next();
        assert_eq!(composer.selected().map(MentionTarget::name), Some("Bobbin"));

        assert!(composer.accept_selected());
        assert_eq!(composer.text(), "ping @Bobbin ");
        assert_eq!(composer.cursor(), composer.text().len());
        assert_eq!(composer.state(), &ComposeState::Idle);
        assert!(!composer.accept_selected());
    }

    #[test]
    fn accept_before_punctuation_stays_idle() {
        let targets = pool();
        let bob = targets.first().expect("Bob");
        let mut composer = MentionComposer::new(&targets);
        composer.set_text("@b.", 2);
        assert!(composer.accept(bob));
        assert_eq!(composer.text(), "@Bob.");
        assert_eq!(composer.cursor(), 4);
        assert!(!composer.is_composing());
    }

    #[test]
    fn selection_resets_when_query_changes() {
        let targets = pool();
        let mut composer = MentionComposer::new(&targets);
        composer.set_text("@b", 2);
        composer.select_next();
        assert_eq!(composer.selected_index(), Some(1));

        composer.set_cursor(2);
        assert_eq!(composer.selected_index(), Some(1), "same query keeps selection");

        composer.set_text("@bo", 3);
        assert_eq!(composer.selected_index(), Some(0));
    }
}

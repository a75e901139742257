//! Mention engine for campaign notes.
//!
//! Finds `@Name` references in free text and resolves them against a list of
//! named entities (characters, sessions, organizations, campaigns,
//! locations). The engine is pure and synchronous: every call takes the text
//! and the target list and returns a fresh result.
//!
//! - [`tokenize`] splits text into plain-text and mention tokens, preferring
//!   the longest name that ends on a word boundary.
//! - [`match_targets`] filters targets for an autocomplete query, and
//!   [`MentionComposer`] tracks whether a mention is being typed and splices
//!   an accepted suggestion back into the text.
//! - [`collect_mentions`] lists the distinct targets a text refers to.
//! - [`find_shadowed_names`] reports targets whose names collide.
//!
//! ```
//! use lorelink_core::{MentionKind, MentionTarget, MentionToken, tokenize};
//!
//! let targets = vec![
//!     MentionTarget::new("1", "Elowen", MentionKind::Character, "/characters/1")?,
//! ];
//! let tokens = tokenize("ask @elowen.", &targets);
//! assert_eq!(tokens.len(), 3);
//! assert!(matches!(tokens.get(1), Some(MentionToken::Mention { value: "@elowen", .. })));
//! # Ok::<(), lorelink_core::TargetError>(())
//! ```

pub mod boundary;
pub mod compose;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod target;
pub mod token;
pub mod tokenizer;

pub use boundary::{DEFAULT_TERMINATORS, MENTION_TRIGGER, MentionRules, is_query_boundary};
pub use compose::{
    ActiveQuery, ComposeState, Insertion, MentionComposer, active_query, active_query_with,
    insert_mention, insert_mention_with,
};
pub use diagnostics::{ShadowedName, find_shadowed_names};
pub use error::TargetError;
pub use extract::{collect_mentions, collect_with};
pub use matcher::{DEFAULT_SUGGESTION_LIMIT, match_targets};
pub use target::{MentionKind, MentionTarget, RawTarget, sort_by_name};
pub use token::{MentionToken, reassemble};
pub use tokenizer::{MentionSpan, Tokenizer, tokenize};

//! Mention targets: the named entities an `@Name` reference can resolve to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TargetError;

/// Category of a mention target. Only used for presentation; it never
/// changes which target a reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    Character,
    Session,
    Organization,
    Campaign,
    Location,
}

impl MentionKind {
    pub const ALL: [Self; 5] = [
        Self::Character,
        Self::Session,
        Self::Organization,
        Self::Campaign,
        Self::Location,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Session => "session",
            Self::Organization => "organization",
            Self::Campaign => "campaign",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MentionKind {
    type Err = TargetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| TargetError::UnknownKind(value.trim().to_string()))
    }
}

/// Unvalidated target record as it arrives from the host application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTarget {
    pub id: String,
    pub name: String,
    pub kind: MentionKind,
    #[serde(default)]
    pub href: String,
}

/// An entity that can be referenced by name in free text.
///
/// Construction validates the record once, so every `MentionTarget` in the
/// engine has a non-empty id and a name with at least one non-whitespace
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTarget")]
pub struct MentionTarget {
    id: String,
    name: String,
    kind: MentionKind,
    href: String,
}

impl MentionTarget {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: MentionKind,
        href: impl Into<String>,
    ) -> Result<Self, TargetError> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() {
            return Err(TargetError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(TargetError::EmptyName { id });
        }
        Ok(Self {
            id,
            name,
            kind,
            href: href.into(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name, matched after `@` and inserted verbatim on accept.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MentionKind {
        self.kind
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub(crate) fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}

impl TryFrom<RawTarget> for MentionTarget {
    type Error = TargetError;

    fn try_from(raw: RawTarget) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.name, raw.kind, raw.href)
    }
}

/// Sort targets alphabetically by case-insensitive name. Equal names keep
/// their relative order.
pub fn sort_by_name(targets: &mut [MentionTarget]) {
    targets.sort_by_cached_key(|target| target.name.to_lowercase());
}

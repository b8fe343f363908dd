//! Team directory: exact-match lookup from team display name to metadata.

use std::collections::HashMap;

use thiserror::Error;

use super::model::TeamDirectoryEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Two entries share a name. The whole build is rejected.
    #[error("duplicate team name in directory: {name:?}")]
    DuplicateKey { name: String },
}

/// Result of a directory lookup. `Unmapped` is an expected outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamLookup<'a> {
    Mapped(&'a TeamDirectoryEntry),
    Unmapped,
}

impl<'a> TeamLookup<'a> {
    pub fn entry(self) -> Option<&'a TeamDirectoryEntry> {
        match self {
            Self::Mapped(entry) => Some(entry),
            Self::Unmapped => None,
        }
    }

    pub fn is_mapped(self) -> bool {
        matches!(self, Self::Mapped(_))
    }
}

/// Immutable name-keyed snapshot of the team list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDirectory {
    entries: Vec<TeamDirectoryEntry>,
    by_name: HashMap<String, usize>,
}

impl TeamDirectory {
    /// Build a directory, rejecting repeated names instead of letting the last one win.
    pub fn build(entries: Vec<TeamDirectoryEntry>) -> Result<Self, DirectoryError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.name.clone(), index).is_some() {
                log::warn!("Rejecting team list: {:?} appears more than once", entry.name);
                return Err(DirectoryError::DuplicateKey {
                    name: entry.name.clone(),
                });
            }
        }
        log::debug!("Team directory built with {} entries", entries.len());
        Ok(Self { entries, by_name })
    }

    pub fn resolve(&self, team_name: &str) -> TeamLookup<'_> {
        if team_name.trim().is_empty() {
            return TeamLookup::Unmapped;
        }
        match self.by_name.get(team_name) {
            Some(&index) => TeamLookup::Mapped(&self.entries[index]),
            None => TeamLookup::Unmapped,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

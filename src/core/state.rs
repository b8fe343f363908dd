use super::aggregator::{self, Grid};
use super::directory::{DirectoryError, TeamDirectory};
use super::model::{SiteRecord, TeamDirectoryEntry};

/// Per-session holder of the current team directory snapshot.
pub struct SiteBoard {
    directory: TeamDirectory,
}

impl SiteBoard {
    pub fn new() -> Self {
        Self {
            directory: TeamDirectory::default(),
        }
    }

    pub fn with_teams(entries: Vec<TeamDirectoryEntry>) -> Result<Self, DirectoryError> {
        Ok(Self {
            directory: TeamDirectory::build(entries)?,
        })
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    /// Swap in a directory built from a fresh team list.
    /// On failure the previous snapshot stays in place.
    pub fn replace_directory(&mut self, entries: Vec<TeamDirectoryEntry>) -> Result<(), DirectoryError> {
        match TeamDirectory::build(entries) {
            Ok(directory) => {
                self.directory = directory;
                Ok(())
            }
            Err(e) => {
                log::warn!("Keeping previous team directory: {}", e);
                Err(e)
            }
        }
    }

    pub fn grid<'a>(&self, sites: &'a [SiteRecord]) -> Grid<'a> {
        aggregator::aggregate(sites, &self.directory)
    }
}

impl Default for SiteBoard {
    fn default() -> Self {
        Self::new()
    }
}

//! Summary views derived from a grid: per-team progress for the legend and
//! overall site counts for the status header.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::aggregator::Grid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStatistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub maintenance: usize,
    pub needs_attention: usize,
}

impl SiteStatistics {
    /// Completed wins over the maintenance tag; everything else is pending.
    pub fn collect(grid: &Grid<'_>, maintenance_tag: &str) -> Self {
        let mut stats = Self::default();
        for cell in grid.cells() {
            stats.total += 1;
            if cell.site.is_completed {
                stats.completed += 1;
            } else if !maintenance_tag.is_empty() && cell.site.has_tag(maintenance_tag) {
                stats.maintenance += 1;
            } else {
                stats.pending += 1;
            }
            if cell.show_notification {
                stats.needs_attention += 1;
            }
        }
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub team_id: String,
    pub name: String,
    pub abbreviation: String,
    pub site_count: usize,
    pub completed_count: usize,
}

impl TeamStats {
    /// Completion share rounded to a whole percent.
    pub fn percentage(&self) -> u32 {
        if self.site_count == 0 {
            return 0;
        }
        ((self.completed_count as f64 / self.site_count as f64) * 100.0).round() as u32
    }
}

/// Who is looking at the legend. Non-admins bound to teams only see those teams.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub is_admin: bool,
    pub team_names: HashSet<String>,
}

impl Viewer {
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            team_names: HashSet::new(),
        }
    }

    pub fn member_of<I, S>(teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_admin: false,
            team_names: teams.into_iter().map(Into::into).collect(),
        }
    }

    pub fn can_see(&self, team_name: &str) -> bool {
        self.is_admin || self.team_names.is_empty() || self.team_names.contains(team_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLegend {
    pub teams: Vec<TeamStats>,
    /// Sites with no team name at all.
    pub unassigned_count: usize,
    /// Team names present on sites but missing from the directory.
    pub unmapped_names: Vec<String>,
}

impl TeamLegend {
    pub fn from_grid(grid: &Grid<'_>) -> Self {
        let mut teams: Vec<TeamStats> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut unassigned_count = 0;
        let mut unmapped_names: Vec<String> = Vec::new();
        let mut unmapped_seen: HashSet<&str> = HashSet::new();

        for cell in grid.cells() {
            let site = cell.site;
            let Some(resolved) = &cell.resolved_team else {
                if site.team_name.trim().is_empty() {
                    unassigned_count += 1;
                } else if unmapped_seen.insert(site.team_name.as_str()) {
                    unmapped_names.push(site.team_name.clone());
                }
                continue;
            };

            let idx = *slots.entry(resolved.team_id.clone()).or_insert_with(|| {
                teams.push(TeamStats {
                    team_id: resolved.team_id.clone(),
                    name: site.team_name.clone(),
                    abbreviation: resolved.abbreviation.clone(),
                    site_count: 0,
                    completed_count: 0,
                });
                teams.len() - 1
            });
            teams[idx].site_count += 1;
            if site.is_completed {
                teams[idx].completed_count += 1;
            }
        }

        // Byte order on names, not locale collation.
        teams.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.team_id.cmp(&b.team_id)));

        Self {
            teams,
            unassigned_count,
            unmapped_names,
        }
    }

    pub fn visible_to(&self, viewer: &Viewer) -> Self {
        Self {
            teams: self
                .teams
                .iter()
                .filter(|team| viewer.can_see(&team.name))
                .cloned()
                .collect(),
            unassigned_count: self.unassigned_count,
            unmapped_names: self.unmapped_names.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

pub type SiteId = String;
pub type TeamName = String;

/// One constructible unit as delivered by the data-fetch layer.
/// Already decoded; the core never sees raw backend field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub id: SiteId,
    pub name: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor_unit: String,
    #[serde(default)]
    pub team_name: TeamName,
    #[serde(default)]
    pub pre_construction_note: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl SiteRecord {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDirectoryEntry {
    pub name: TeamName,
    pub team_id: String,
    #[serde(default)]
    pub abbreviation: String,
}

impl TeamDirectoryEntry {
    pub fn new(name: impl Into<String>, team_id: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team_id: team_id.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// Display metadata attached to a cell when its team name is mapped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTeam {
    pub team_id: String,
    pub abbreviation: String,
}

impl From<&TeamDirectoryEntry> for ResolvedTeam {
    fn from(entry: &TeamDirectoryEntry) -> Self {
        Self {
            team_id: entry.team_id.clone(),
            abbreviation: entry.abbreviation.clone(),
        }
    }
}

/// Grouping coordinate for buildings and floors.
///
/// `Unknown` is a sentinel for a missing code and never collides with a
/// record whose code happens to be the literal text "unknown".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketKey {
    Known(String),
    Unknown,
}

impl BucketKey {
    /// Empty or whitespace-only codes map to `Unknown`.
    pub fn from_code(code: &str) -> Self {
        if code.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Known(code.to_string())
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Text to show for this bucket; `fallback` is used for the sentinel.
    pub fn label<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Self::Known(code) => code,
            Self::Unknown => fallback,
        }
    }
}

/// One placed site in the grid.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell<'a> {
    pub site: &'a SiteRecord,
    pub resolved_team: Option<ResolvedTeam>,
    pub show_notification: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorBucket<'a> {
    pub key: BucketKey,
    pub cells: Vec<GridCell<'a>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingBucket<'a> {
    pub key: BucketKey,
    pub floors: Vec<FloorBucket<'a>>,
}

impl<'a> BuildingBucket<'a> {
    pub fn floor(&self, key: &BucketKey) -> Option<&FloorBucket<'a>> {
        self.floors.iter().find(|floor| floor.key == *key)
    }

    pub fn cell_count(&self) -> usize {
        self.floors.iter().map(|floor| floor.cells.len()).sum()
    }
}

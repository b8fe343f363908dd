use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::directory::TeamDirectory;
use super::model::{BucketKey, BuildingBucket, FloorBucket, GridCell, ResolvedTeam, SiteRecord};
use super::notification::should_notify;

/// Building → floor → cells, each level in first-appearance order of the input.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid<'a> {
    buildings: Vec<BuildingBucket<'a>>,
}

impl<'a> Grid<'a> {
    pub fn buildings(&self) -> &[BuildingBucket<'a>] {
        &self.buildings
    }

    pub fn building(&self, key: &BucketKey) -> Option<&BuildingBucket<'a>> {
        self.buildings.iter().find(|building| building.key == *key)
    }

    /// Cells at one coordinate; empty when the coordinate does not exist.
    pub fn cells_at(&self, building: &BucketKey, floor: &BucketKey) -> &[GridCell<'a>] {
        self.building(building)
            .and_then(|b| b.floor(floor))
            .map(|f| f.cells.as_slice())
            .unwrap_or(&[])
    }

    /// Walks every cell building-then-floor, in grid order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell<'a>> + '_ {
        self.buildings
            .iter()
            .flat_map(|building| building.floors.iter())
            .flat_map(|floor| floor.cells.iter())
    }

    pub fn len(&self) -> usize {
        self.buildings.iter().map(BuildingBucket::cell_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

/// Group `sites` into a fresh grid using the given directory snapshot.
///
/// Single pass, no per-record failure: blank coordinates land in the
/// `Unknown` buckets and unmapped teams get `resolved_team = None`.
pub fn aggregate<'a>(sites: &'a [SiteRecord], directory: &TeamDirectory) -> Grid<'a> {
    let mut buildings: Vec<BuildingBucket<'a>> = Vec::new();
    let mut building_slots: HashMap<BucketKey, usize> = HashMap::new();
    let mut floor_slots: HashMap<(usize, BucketKey), usize> = HashMap::new();
    let mut seen_ids: HashSet<&str> = HashSet::with_capacity(sites.len());

    for site in sites {
        if !seen_ids.insert(site.id.as_str()) {
            log::warn!("Site id {:?} appears more than once in one aggregation input", site.id);
        }

        let building_key = BucketKey::from_code(&site.building);
        let floor_key = BucketKey::from_code(&site.floor_unit);

        let lookup = directory.resolve(&site.team_name);
        if !lookup.is_mapped() && !site.team_name.trim().is_empty() {
            log::debug!("Team {:?} on site {:?} has no directory entry", site.team_name, site.id);
        }

        let cell = GridCell {
            site,
            resolved_team: lookup.entry().map(ResolvedTeam::from),
            show_notification: should_notify(&site.pre_construction_note, site.is_completed),
        };

        let building_idx = *building_slots.entry(building_key.clone()).or_insert_with(|| {
            buildings.push(BuildingBucket {
                key: building_key,
                floors: Vec::new(),
            });
            buildings.len() - 1
        });

        let floors = &mut buildings[building_idx].floors;
        let floor_idx = *floor_slots
            .entry((building_idx, floor_key.clone()))
            .or_insert_with(|| {
                floors.push(FloorBucket {
                    key: floor_key,
                    cells: Vec::new(),
                });
                floors.len() - 1
            });

        floors[floor_idx].cells.push(cell);
    }

    log::debug!(
        "Aggregated {} sites into {} buildings",
        sites.len(),
        buildings.len()
    );

    Grid { buildings }
}

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// Raw backend field names read by the decode step.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FieldMapping {
    pub id: String,
    pub name: String,
    pub building: String,
    pub floor_unit: String,
    pub team_name: String,
    pub pre_construction_note: String,
    pub is_completed: String,
    pub tags: String,
    pub team_id: String,
    pub team_name_key: String,
    pub team_abbreviation: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        // CRM object field ids for the site (object_8W9cb__c) and team (object_50HJ8__c) records
        Self {
            id: "_id".to_string(),
            name: "name".to_string(),
            building: "field_WD7k1__c".to_string(),
            floor_unit: "field_XuJP2__c".to_string(),
            team_name: "shift_time__c".to_string(),
            pre_construction_note: "field_sF6fn__c".to_string(),
            is_completed: "construction_completed__c".to_string(),
            tags: "field_23Z5i__c".to_string(),
            team_id: "_id".to_string(),
            team_name_key: "name".to_string(),
            team_abbreviation: "abbreviation__c".to_string(),
        }
    }
}

/// Board settings, persisted as settings.json.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub field_mapping: FieldMapping,
    /// Tag that marks an open site as waiting on maintenance
    #[serde(default = "default_maintenance_tag")]
    pub maintenance_tag: String,
    #[serde(default = "default_unknown_label")]
    pub unknown_building_label: String,
    #[serde(default = "default_unknown_label")]
    pub unknown_floor_label: String,
}

fn default_maintenance_tag() -> String {
    "需維修".to_string()
}

fn default_unknown_label() -> String {
    "Unknown".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_mapping: FieldMapping::default(),
            maintenance_tag: default_maintenance_tag(),
            unknown_building_label: default_unknown_label(),
            unknown_floor_label: default_unknown_label(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join("settings.json"),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            return Settings::default();
        }
        match fs::read_to_string(&self.config_path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("Ignoring unparseable {:?}: {}", self.config_path, e),
            },
            Err(e) => log::warn!("Could not read {:?}: {}", self.config_path, e),
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

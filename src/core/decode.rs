//! Decode boundary between raw backend payloads and the core model.
//!
//! Raw site and team records arrive as JSON objects keyed by CRM field ids.
//! They are normalized here once, using the configured [`FieldMapping`], so
//! nothing downstream reads raw field names.

use serde_json::{Map, Value};
use thiserror::Error;

use super::config::FieldMapping;
use super::model::{SiteRecord, TeamDirectoryEntry};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected a list of records or an envelope object containing one")]
    NotAList,
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("record {index} has no `{field}` id")]
    MissingId { index: usize, field: String },
}

const SITE_ENVELOPE_KEYS: &[&str] = &["sites", "projectSites"];
const TEAM_ENVELOPE_KEYS: &[&str] = &["teams", "projectTeams"];

pub struct SiteDecoder<'m> {
    mapping: &'m FieldMapping,
}

impl<'m> SiteDecoder<'m> {
    pub fn new(mapping: &'m FieldMapping) -> Self {
        Self { mapping }
    }

    pub fn decode_site(&self, index: usize, raw: &Value) -> Result<SiteRecord, DecodeError> {
        let object = raw.as_object().ok_or(DecodeError::NotAnObject { index })?;
        let m = self.mapping;

        let id = id_field(object, &m.id).ok_or_else(|| DecodeError::MissingId {
            index,
            field: m.id.clone(),
        })?;

        Ok(SiteRecord {
            id,
            name: text_field(object, &m.name),
            building: text_field(object, &m.building),
            floor_unit: text_field(object, &m.floor_unit),
            team_name: text_field(object, &m.team_name),
            pre_construction_note: text_field(object, &m.pre_construction_note),
            is_completed: flag_field(object, &m.is_completed),
            tags: tags_field(object, &m.tags),
        })
    }

    pub fn decode_sites(&self, payload: &Value) -> Result<Vec<SiteRecord>, DecodeError> {
        let records = record_list(payload, SITE_ENVELOPE_KEYS)?;
        records
            .iter()
            .enumerate()
            .map(|(index, raw)| self.decode_site(index, raw))
            .collect()
    }

    pub fn decode_team(&self, index: usize, raw: &Value) -> Result<TeamDirectoryEntry, DecodeError> {
        let object = raw.as_object().ok_or(DecodeError::NotAnObject { index })?;
        let m = self.mapping;

        let team_id = id_field(object, &m.team_id).ok_or_else(|| DecodeError::MissingId {
            index,
            field: m.team_id.clone(),
        })?;

        Ok(TeamDirectoryEntry {
            name: text_field(object, &m.team_name_key),
            team_id,
            abbreviation: text_field(object, &m.team_abbreviation),
        })
    }

    pub fn decode_teams(&self, payload: &Value) -> Result<Vec<TeamDirectoryEntry>, DecodeError> {
        let records = record_list(payload, TEAM_ENVELOPE_KEYS)?;
        records
            .iter()
            .enumerate()
            .map(|(index, raw)| self.decode_team(index, raw))
            .collect()
    }
}

/// Accept a bare array, or an API envelope holding the array under one of `keys`.
fn record_list<'v>(payload: &'v Value, keys: &[&str]) -> Result<&'v Vec<Value>, DecodeError> {
    match payload {
        Value::Array(records) => Ok(records),
        Value::Object(envelope) => {
            for key in keys {
                if let Some(Value::Array(records)) = envelope.get(*key) {
                    return Ok(records);
                }
            }
            log::warn!("Envelope has none of {:?}", keys);
            Err(DecodeError::NotAList)
        }
        _ => Err(DecodeError::NotAList),
    }
}

fn id_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn flag_field(object: &Map<String, Value>, key: &str) -> bool {
    match object.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "1"),
        Some(Value::Number(n)) => n.as_f64().map_or(false, |v| v != 0.0),
        _ => false,
    }
}

fn tags_field(object: &Map<String, Value>, key: &str) -> Vec<String> {
    match object.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

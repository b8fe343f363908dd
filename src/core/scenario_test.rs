#[cfg(test)]
mod scenario_tests {
    use crate::core::config::{ConfigManager, Settings};
    use crate::core::decode::SiteDecoder;
    use crate::core::legend::{SiteStatistics, TeamLegend, Viewer};
    use crate::core::model::BucketKey;
    use crate::core::state::SiteBoard;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn raw_project_payload_to_board() {
        let settings = Settings::default();
        let decoder = SiteDecoder::new(&settings.field_mapping);

        let response = json!({
            "project": { "id": "proj_1755824357367" },
            "teams": [
                { "_id": "t1", "name": "Crew X", "abbreviation__c": "CX" },
                { "_id": "t2", "name": "Crew Y", "abbreviation__c": "CY" }
            ],
            "sites": [
                { "_id": "s1", "name": "C-3F-01", "field_WD7k1__c": "C", "field_XuJP2__c": "3F",
                  "shift_time__c": "Crew X", "field_sF6fn__c": "測試施工前備註內容",
                  "construction_completed__c": false },
                { "_id": "s2", "name": "C-3F-02", "field_WD7k1__c": "C", "field_XuJP2__c": "3F",
                  "shift_time__c": "Crew Y", "field_sF6fn__c": "  \n",
                  "construction_completed__c": false },
                { "_id": "s3", "name": "A-1F-01", "field_WD7k1__c": "A", "field_XuJP2__c": "1F",
                  "shift_time__c": "Crew X", "field_sF6fn__c": "old note",
                  "construction_completed__c": true, "field_23Z5i__c": ["需維修"] },
                { "_id": "s4", "name": "orphan", "shift_time__c": "",
                  "field_23Z5i__c": "需維修" }
            ]
        });

        let teams = decoder.decode_teams(&response).unwrap();
        let sites = decoder.decode_sites(&response).unwrap();
        let board = SiteBoard::with_teams(teams).unwrap();
        let grid = board.grid(&sites);

        let keys: Vec<_> = grid
            .buildings()
            .iter()
            .map(|b| b.key.label(&settings.unknown_building_label).to_string())
            .collect();
        assert_eq!(keys, vec!["C", "A", "Unknown"]);

        let c3 = grid.cells_at(&BucketKey::Known("C".to_string()), &BucketKey::Known("3F".to_string()));
        assert_eq!(c3.len(), 2);
        assert!(c3[0].show_notification);
        assert!(!c3[1].show_notification, "whitespace-only note must not notify");
        assert_eq!(c3[1].resolved_team.as_ref().unwrap().abbreviation, "CY");

        let orphan = grid.cells_at(&BucketKey::Unknown, &BucketKey::Unknown);
        assert_eq!(orphan.len(), 1);
        assert_eq!(orphan[0].site.id, "s4");
        assert_eq!(orphan[0].resolved_team, None);

        let stats = SiteStatistics::collect(&grid, &settings.maintenance_tag);
        assert_eq!((stats.total, stats.completed, stats.maintenance, stats.pending), (4, 1, 1, 2));
        assert_eq!(stats.needs_attention, 1);

        let legend = TeamLegend::from_grid(&grid);
        assert_eq!(legend.unassigned_count, 1);
        let crew_x = &legend.teams[0];
        assert_eq!((crew_x.site_count, crew_x.completed_count, crew_x.percentage()), (2, 1, 50));
        assert_eq!(legend.visible_to(&Viewer::member_of(["Crew Y"])).teams.len(), 1);
    }

    #[test]
    fn grid_serializes_sentinel_apart_from_literal_unknown() {
        let settings = Settings::default();
        let decoder = SiteDecoder::new(&settings.field_mapping);
        let sites = decoder
            .decode_sites(&json!([
                { "_id": "1", "field_WD7k1__c": "" },
                { "_id": "2", "field_WD7k1__c": "unknown" }
            ]))
            .unwrap();

        let grid = SiteBoard::new().grid(&sites);
        let encoded = serde_json::to_value(&grid).unwrap();

        assert_eq!(encoded["buildings"][0]["key"], json!("unknown"));
        assert_eq!(encoded["buildings"][1]["key"], json!({ "known": "unknown" }));
        assert_eq!(encoded["buildings"][0]["floors"][0]["cells"][0]["site"]["id"], json!("1"));
        assert_eq!(encoded["buildings"][0]["floors"][0]["cells"][0]["resolvedTeam"], json!(null));
    }

    #[test]
    fn configured_mapping_drives_decoding() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.field_mapping.id = "id".to_string();
        settings.field_mapping.building = "building".to_string();
        settings.field_mapping.floor_unit = "floor".to_string();
        manager.save(&settings).unwrap();

        let loaded = manager.load();
        let decoder = SiteDecoder::new(&loaded.field_mapping);
        let sites = decoder
            .decode_sites(&json!([{ "id": "x1", "building": "B", "floor": "2F" }]))
            .unwrap();

        let grid = SiteBoard::new().grid(&sites);
        assert_eq!(
            grid.cells_at(&BucketKey::Known("B".to_string()), &BucketKey::Known("2F".to_string())).len(),
            1
        );
    }
}

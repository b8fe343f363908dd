use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::core::{
    aggregator::Grid,
    config::{ConfigManager, Settings},
    decode::SiteDecoder,
    legend::{SiteStatistics, TeamLegend, Viewer},
    model::SiteRecord,
    state::SiteBoard,
};

const USAGE: &str = "usage: site-grid <sites.json> <teams.json> [--config <dir>] [--viewer-team <name>]...";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    sites_path: PathBuf,
    teams_path: PathBuf,
    config_dir: PathBuf,
    viewer_teams: Vec<String>,
}

fn parse_args<I>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut config_dir = PathBuf::from(".");
    let mut viewer_teams = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let dir = iter.next().context("--config needs a directory")?;
                config_dir = PathBuf::from(dir);
            }
            "--viewer-team" => {
                viewer_teams.push(iter.next().context("--viewer-team needs a team name")?);
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [sites_path, teams_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| anyhow::anyhow!(USAGE))?;

    Ok(Args {
        sites_path,
        teams_path,
        config_dir,
        viewer_teams,
    })
}

/// Display text for the sentinel buckets, so the renderer never hardcodes it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketLabels<'a> {
    unknown_building: &'a str,
    unknown_floor: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    grid: Grid<'a>,
    labels: BucketLabels<'a>,
    statistics: SiteStatistics,
    legend: TeamLegend,
}

fn build_report<'a>(sites: &'a [SiteRecord], board: &SiteBoard, settings: &'a Settings, viewer: &Viewer) -> Report<'a> {
    let grid = board.grid(sites);
    let statistics = SiteStatistics::collect(&grid, &settings.maintenance_tag);
    let legend = TeamLegend::from_grid(&grid).visible_to(viewer);
    Report {
        grid,
        labels: BucketLabels {
            unknown_building: &settings.unknown_building_label,
            unknown_floor: &settings.unknown_floor_label,
        },
        statistics,
        legend,
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Decode the raw exports, aggregate them and print the report as JSON.
pub fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    let settings = ConfigManager::new(args.config_dir.clone()).load();
    let decoder = SiteDecoder::new(&settings.field_mapping);

    let sites = decoder
        .decode_sites(&read_json(&args.sites_path)?)
        .with_context(|| format!("decoding sites from {}", args.sites_path.display()))?;
    let teams = decoder
        .decode_teams(&read_json(&args.teams_path)?)
        .with_context(|| format!("decoding teams from {}", args.teams_path.display()))?;
    log::info!("Loaded {} sites and {} teams", sites.len(), teams.len());

    let board = SiteBoard::with_teams(teams)?;
    let viewer = if args.viewer_teams.is_empty() {
        Viewer::admin()
    } else {
        Viewer::member_of(args.viewer_teams)
    };

    let report = build_report(&sites, &board, &settings, &viewer);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

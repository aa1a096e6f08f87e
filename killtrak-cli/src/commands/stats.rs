//! Stats command - show or adjust the persisted record.

use std::path::{Path, PathBuf};

use killtrak::config::ConfigFile;
use killtrak::store::{JsonStatsStore, StatsRecord, StatsStore};

use crate::error::CliError;

/// Print the persisted totals and resolution, optionally forgetting the
/// resolution.
pub fn run(data: Option<PathBuf>, reset_resolution: bool) -> Result<(), CliError> {
    let path = match data {
        Some(path) => path,
        None => ConfigFile::load()?.storage.data_file,
    };
    for line in report(&path, reset_resolution)? {
        println!("{}", line);
    }
    Ok(())
}

/// Build the stats report. Only `--reset-resolution` writes to the stats
/// file; a missing file is reported, not created.
fn report(path: &Path, reset_resolution: bool) -> Result<Vec<String>, CliError> {
    if !path.exists() && !reset_resolution {
        return Ok(vec![
            "(no stats yet)".to_string(),
            format!("  File:           {}", path.display()),
        ]);
    }

    let mut store = JsonStatsStore::new(path);
    let mut record = store.load()?;

    if reset_resolution {
        record.resolution = None;
        store.save(&record)?;
        tracing::info!(path = %path.display(), "Saved resolution cleared");
    }

    let mut lines = describe(&record);
    lines.push(format!("  File:           {}", path.display()));
    if reset_resolution {
        lines.push(String::new());
        lines.push("Resolution cleared; the next run will ask for it.".to_string());
    }
    Ok(lines)
}

fn describe(record: &StatsRecord) -> Vec<String> {
    let resolution = match record.resolution() {
        Ok(Some(resolution)) => resolution.to_string(),
        Ok(None) => "(not set)".to_string(),
        Err(e) => format!("(invalid: {})", e),
    };

    vec![
        "Stats".to_string(),
        "─────".to_string(),
        format!("  Kills:          {}", record.kills),
        format!("  Vehicle kills:  {}", record.vehicle_kills),
        format!("  Combined:       {}", record.totals().combined()),
        format!("  Resolution:     {}", resolution),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use killtrak::resolution::Resolution;
    use killtrak::tracker::Totals;

    #[test]
    fn test_describe_record() {
        let record = StatsRecord::new(Totals::new(40, 2), Some(Resolution::FullHd));
        let lines = describe(&record);

        assert_eq!(lines[2], "  Kills:          40");
        assert_eq!(lines[4], "  Combined:       42");
        assert_eq!(lines[5], "  Resolution:     1920x1080");
    }

    #[test]
    fn test_describe_unsupported_resolution() {
        let record = StatsRecord {
            resolution: Some((1024, 768)),
            ..Default::default()
        };
        assert!(describe(&record)[5].contains("invalid"));
    }

    #[test]
    fn test_reset_resolution_keeps_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut store = JsonStatsStore::new(&path);
        store
            .save(&StatsRecord::new(Totals::new(7, 1), Some(Resolution::Wide1728)))
            .unwrap();

        let lines = report(&path, true).unwrap();

        assert_eq!(lines.last().unwrap(), "Resolution cleared; the next run will ask for it.");
        let record = JsonStatsStore::new(&path).load().unwrap();
        assert_eq!(record.resolution, None);
        assert_eq!(record.totals(), Totals::new(7, 1));
    }

    #[test]
    fn test_missing_file_is_reported_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let lines = report(&path, false).unwrap();

        assert_eq!(lines[0], "(no stats yet)");
        assert!(!path.exists());
    }

    #[test]
    fn test_reset_on_missing_file_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        report(&path, true).unwrap();

        let record = JsonStatsStore::new(&path).load().unwrap();
        assert_eq!(record, StatsRecord::default());
    }
}

//! Capture command - one-shot OCR check of both counter regions.
//!
//! Saves the two regions as PNGs in the debug directory and prints what the
//! recognizer read, so region tables and the confidence threshold can be
//! checked against the running game.

use std::path::PathBuf;

use killtrak::app::TrackerSettings;
use killtrak::reading::{CounterReading, ReadingSource, RecognizedText};
use killtrak::resolution::Resolution;
use killtrak::store::{JsonStatsStore, StatsStore};
use killtrak::tracker::CounterKind;

use super::common::{apply_data_override, screen_reader};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the capture command.
pub fn run(resolution: Option<Resolution>, data: Option<PathBuf>) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("capture");

    let settings = apply_data_override(TrackerSettings::from_config_file(runner.config()), data)
        .with_debug_captures(true);

    let resolution = match resolution {
        Some(resolution) => resolution,
        None => JsonStatsStore::new(&settings.data_file)
            .load()?
            .resolution()?
            .ok_or_else(|| {
                CliError::Config(
                    "No resolution saved yet. Pass --resolution or start 'killtrak run' once."
                        .to_string(),
                )
            })?,
    };

    let layout = resolution.layout();
    let mut source = screen_reader(&settings);

    println!("Capturing at {}", resolution);
    println!();
    for counter in CounterKind::ALL {
        let region = layout.region(counter);
        let recognized = source.read(counter, &region)?;
        let reading = CounterReading::from_recognized(&recognized, settings.confidence_threshold);
        println!(
            "{}",
            describe(counter, &region.to_string(), &recognized, &reading)
        );
    }
    println!();
    println!("Images saved to {}", settings.debug_dir.display());
    Ok(())
}

fn describe(
    counter: CounterKind,
    region: &str,
    recognized: &RecognizedText,
    reading: &CounterReading,
) -> String {
    let value = match reading.value {
        Some(value) => value.to_string(),
        None => "(dropped)".to_string(),
    };
    format!(
        "{:<14} {}  text={:?} confidence={} value={}",
        counter.label(),
        region,
        recognized.text.trim(),
        recognized.confidence,
        value
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_accepted_reading() {
        let recognized = RecognizedText::new("Kills: 14\n", 93);
        let reading = CounterReading::from_recognized(&recognized, 88);

        let line = describe(CounterKind::Kills, "(1, 2)-(3, 4)", &recognized, &reading);

        assert!(line.starts_with("kills"));
        assert!(line.contains("text=\"Kills: 14\""));
        assert!(line.ends_with("confidence=93 value=14"));
    }

    #[test]
    fn test_describe_dropped_reading() {
        let recognized = RecognizedText::new("14", 60);
        let reading = CounterReading::from_recognized(&recognized, 88);

        let line = describe(CounterKind::VehicleKills, "(1, 2)-(3, 4)", &recognized, &reading);

        assert!(line.contains("value=(dropped)"));
    }
}

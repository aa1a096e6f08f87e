//! Startup sequence.
//!
//! Loads the persisted record, settles on a screen resolution and makes sure
//! the choice is on disk before the first tick.

use std::io;

use tracing::info;

use super::error::AppError;
use crate::resolution::Resolution;
use crate::store::{StatsRecord, StatsStore};
use crate::tracker::Totals;

/// State the tracker loop starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Startup {
    pub totals: Totals,
    pub resolution: Resolution,
}

/// Load totals and determine the resolution.
///
/// Resolution precedence:
/// 1. `requested`, typically from a command line flag
/// 2. the persisted resolution
/// 3. the answer returned by `prompt`, where empty input means `1920x1080`
///
/// A persisted resolution outside the supported set is an error rather than
/// a reason to prompt, unless `requested` replaces it. Whenever the
/// resolution did not come from disk the record is saved right away so the
/// next start skips the prompt.
pub fn bootstrap<S, F>(
    store: &mut S,
    requested: Option<Resolution>,
    prompt: F,
) -> Result<Startup, AppError>
where
    S: StatsStore + ?Sized,
    F: FnOnce() -> io::Result<String>,
{
    let record = store.load()?;
    let totals = record.totals();
    let resolution = match requested {
        Some(requested) => {
            if record.resolution != Some(requested.dimensions()) {
                store.save(&StatsRecord::new(totals, Some(requested)))?;
            }
            requested
        }
        None => match record.resolution()? {
            Some(persisted) => persisted,
            None => {
                let input = prompt().map_err(AppError::Prompt)?;
                let chosen = Resolution::parse_input(&input)?;
                store.save(&StatsRecord::new(totals, Some(chosen)))?;
                chosen
            }
        },
    };

    info!(
        %resolution,
        kills = totals.kills,
        vehicle_kills = totals.vehicle_kills,
        "Tracker state loaded"
    );

    Ok(Startup { totals, resolution })
}

//! Supported screen layouts and their counter regions.
//!
//! The game draws its counters at fixed pixel positions, so each supported
//! resolution carries a hard-coded table of the two regions to read. Only
//! two layouts are known; anything else is rejected at startup.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tracker::CounterKind;

/// Errors raised while choosing a resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// Input was not of the form `WIDTHxHEIGHT`.
    #[error("Invalid resolution '{0}', expected WIDTHxHEIGHT (e.g. 1920x1080)")]
    Unparsable(String),

    /// Well-formed but not one of the supported layouts.
    #[error("Unsupported resolution {width}x{height}, only 1728x1080 or 1920x1080 allowed")]
    Unsupported { width: u32, height: u32 },
}

/// A rectangle on screen, in absolute pixel coordinates.
///
/// `right` and `bottom` are exclusive, matching the bounding boxes the region
/// tables were measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl ScreenRegion {
    /// Create a region from its bounding box.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

impl fmt::Display for ScreenRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// The pair of regions read every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionLayout {
    pub kills: ScreenRegion,
    pub vehicle_kills: ScreenRegion,
}

impl RegionLayout {
    /// Region holding `counter`.
    pub fn region(&self, counter: CounterKind) -> ScreenRegion {
        match counter {
            CounterKind::Kills => self.kills,
            CounterKind::VehicleKills => self.vehicle_kills,
        }
    }
}

/// Supported screen resolutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Resolution {
    /// 1728x1080.
    Wide1728,
    /// 1920x1080, the default when the user just presses Enter.
    #[default]
    FullHd,
}

impl Resolution {
    /// Every supported resolution.
    pub const ALL: [Resolution; 2] = [Resolution::Wide1728, Resolution::FullHd];

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::Wide1728 => (1728, 1080),
            Resolution::FullHd => (1920, 1080),
        }
    }

    /// Look up a supported resolution by its dimensions.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, ResolutionError> {
        Self::ALL
            .into_iter()
            .find(|r| r.dimensions() == (width, height))
            .ok_or(ResolutionError::Unsupported { width, height })
    }

    /// Parse interactive input.
    ///
    /// Empty (or whitespace-only) input selects the default `1920x1080`.
    pub fn parse_input(input: &str) -> Result<Self, ResolutionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Resolution::default());
        }
        trimmed.parse()
    }

    /// Counter regions for this layout.
    pub fn layout(&self) -> RegionLayout {
        match self {
            Resolution::Wide1728 => RegionLayout {
                kills: ScreenRegion::new(1300, 800, 1431, 825),
                vehicle_kills: ScreenRegion::new(1300, 830, 1470, 855),
            },
            Resolution::FullHd => RegionLayout {
                kills: ScreenRegion::new(1440, 830, 1525, 860),
                vehicle_kills: ScreenRegion::new(1440, 860, 1600, 890),
            },
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        write!(f, "{}x{}", width, height)
    }
}

impl FromStr for Resolution {
    type Err = ResolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let mut parts = lowered.split('x');
        let dims = match (parts.next(), parts.next(), parts.next()) {
            (Some(w), Some(h), None) => w
                .trim()
                .parse::<u32>()
                .ok()
                .zip(h.trim().parse::<u32>().ok()),
            _ => None,
        };
        let (width, height) = dims.ok_or_else(|| ResolutionError::Unparsable(s.to_string()))?;
        Self::from_dimensions(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_defaults_to_full_hd() {
        assert_eq!(Resolution::parse_input(""), Ok(Resolution::FullHd));
        assert_eq!(Resolution::parse_input("   \n"), Ok(Resolution::FullHd));
    }

    #[test]
    fn test_parse_supported() {
        assert_eq!(Resolution::parse_input("1728x1080"), Ok(Resolution::Wide1728));
        assert_eq!(Resolution::parse_input("1920X1080"), Ok(Resolution::FullHd));
        assert_eq!(Resolution::parse_input(" 1920 x 1080 "), Ok(Resolution::FullHd));
    }

    #[test]
    fn test_parse_unsupported() {
        assert_eq!(
            Resolution::parse_input("2560x1440"),
            Err(ResolutionError::Unsupported {
                width: 2560,
                height: 1440
            })
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            Resolution::parse_input("full hd"),
            Err(ResolutionError::Unparsable(_))
        ));
        assert!(matches!(
            Resolution::parse_input("1920x1080x32"),
            Err(ResolutionError::Unparsable(_))
        ));
        assert!(matches!(
            Resolution::parse_input("1920"),
            Err(ResolutionError::Unparsable(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for resolution in Resolution::ALL {
            assert_eq!(resolution.to_string().parse(), Ok(resolution));
        }
    }

    #[test]
    fn test_layout_tables() {
        let layout = Resolution::FullHd.layout();
        assert_eq!(layout.kills, ScreenRegion::new(1440, 830, 1525, 860));
        assert_eq!(layout.vehicle_kills.width(), 160);
        assert_eq!(layout.vehicle_kills.height(), 30);

        let layout = Resolution::Wide1728.layout();
        assert_eq!(layout.kills.width(), 131);
        assert_eq!(layout.vehicle_kills, ScreenRegion::new(1300, 830, 1470, 855));
    }

    #[test]
    fn test_regions_fit_on_screen() {
        for resolution in Resolution::ALL {
            let (width, height) = resolution.dimensions();
            let layout = resolution.layout();
            for region in [layout.kills, layout.vehicle_kills] {
                assert!(region.right <= width, "{} overflows {}", region, resolution);
                assert!(region.bottom <= height, "{} overflows {}", region, resolution);
            }
        }
    }
}

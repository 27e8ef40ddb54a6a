//! Display painter trait

use quadrant_protocol::REGION_COUNT;

/// Errors reported by the display painter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display layer not loaded yet
    NotLoaded,
    /// Text did not fit the layer buffer
    BufferOverflow,
}

/// One of the four configurable display regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Region {
    /// All regions, in paint order
    pub const ALL: [Region; REGION_COUNT] = [
        Region::TopLeft,
        Region::TopRight,
        Region::BottomLeft,
        Region::BottomRight,
    ];

    /// Position of this region in settings and frame arrays
    pub fn index(self) -> usize {
        match self {
            Region::TopLeft => 0,
            Region::TopRight => 1,
            Region::BottomLeft => 2,
            Region::BottomRight => 3,
        }
    }
}

/// Trait for painting watchface text
///
/// Called once per region and once for the time region on every render
/// pass. Implementations must accept any text up to the documented buffer
/// sizes (31 bytes per region, 7 bytes for the time).
pub trait FaceDisplay {
    /// Replace the text of a region
    fn set_region_text(&mut self, region: Region, text: &str) -> Result<(), DisplayError>;

    /// Replace the text of the central time region
    fn set_time_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_index_matches_paint_order() {
        for (i, region) in Region::ALL.into_iter().enumerate() {
            assert_eq!(region.index(), i);
        }
    }
}

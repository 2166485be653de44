//! Workspace tuning knobs and their validation.

use thiserror::Error;

use crate::constants::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_Z_BASE, MAX_CELL_SCALE};
use crate::layout::{CellScale, Size};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum window size must be at least 1x1, got {width}x{height}")]
    EmptyMinSize { width: u32, height: u32 },
    #[error("cell {axis} must be between 1 and {max} logical units, got {value}", max = MAX_CELL_SCALE)]
    CellScaleOutOfRange { axis: &'static str, value: u16 },
    #[error("unknown log level `{0}` (expected trace, debug, info, warn or error)")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Floor applied to every window while resizing, in logical units.
    pub min_size: Size,
    /// Logical units per terminal cell.
    pub cell_scale: CellScale,
    /// Z-index of the front-most window; each step back subtracts one.
    pub z_base: i32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT),
            cell_scale: CellScale::default(),
            z_base: DEFAULT_Z_BASE,
        }
    }
}

impl WorkspaceConfig {
    /// Build a config from raw user input, rejecting values the workspace
    /// cannot honour.
    pub fn validated(
        min_width: u32,
        min_height: u32,
        cell_width: u16,
        cell_height: u16,
    ) -> Result<Self, ConfigError> {
        if min_width == 0 || min_height == 0 {
            return Err(ConfigError::EmptyMinSize {
                width: min_width,
                height: min_height,
            });
        }
        for (axis, value) in [("width", cell_width), ("height", cell_height)] {
            if !(1..=MAX_CELL_SCALE).contains(&value) {
                return Err(ConfigError::CellScaleOutOfRange { axis, value });
            }
        }
        Ok(Self::default()
            .with_min_size(Size::new(min_width, min_height))
            .with_cell_scale(CellScale::new(cell_width, cell_height)))
    }

    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_cell_scale(mut self, cell_scale: CellScale) -> Self {
        self.cell_scale = cell_scale;
        self
    }

    pub fn with_z_base(mut self, z_base: i32) -> Self {
        self.z_base = z_base;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_desktop_floor() {
        let config = WorkspaceConfig::default();
        assert_eq!(config.min_size, Size::new(200, 150));
        assert_eq!(config.z_base, 1000);
        assert_eq!(config.cell_scale, CellScale::new(8, 16));
    }

    #[test]
    fn validated_rejects_degenerate_values() {
        assert_eq!(
            WorkspaceConfig::validated(0, 150, 8, 16),
            Err(ConfigError::EmptyMinSize {
                width: 0,
                height: 150
            })
        );
        assert_eq!(
            WorkspaceConfig::validated(200, 150, 0, 16),
            Err(ConfigError::CellScaleOutOfRange {
                axis: "width",
                value: 0
            })
        );
        assert!(matches!(
            WorkspaceConfig::validated(200, 150, 8, 500),
            Err(ConfigError::CellScaleOutOfRange { axis: "height", .. })
        ));
    }

    #[test]
    fn validated_accepts_custom_scale() {
        let config = WorkspaceConfig::validated(120, 90, 4, 8).expect("valid config");
        assert_eq!(config.min_size, Size::new(120, 90));
        assert_eq!(config.cell_scale.cell_width(), 4);
        assert_eq!(config.z_base, DEFAULT_Z_BASE);
    }
}

//! Chart color table
//!
//! The fixed RGBA strings used for axis ticks, grid lines and legend labels,
//! plus the policy that decides which pair an axis gets.

use serde::{Deserialize, Serialize};

/// One color per theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub dark: &'static str,
    pub light: &'static str,
}

impl ColorPair {
    /// Select the color for the given theme mode
    pub const fn pick(&self, dark: bool) -> &'static str {
        if dark {
            self.dark
        } else {
            self.light
        }
    }
}

/// Chart colors for both theme modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPalette {
    /// Legend labels and the first axis
    pub primary: ColorPair,
    /// Every axis after the first (lower opacity)
    pub secondary: ColorPair,
}

/// The chart palette shared by every themed chart
pub const CHART_PALETTE: ChartPalette = ChartPalette {
    primary: ColorPair {
        dark: "rgba(255,255,255,0.8)",
        light: "rgba(0,0,0,0.8)",
    },
    secondary: ColorPair {
        dark: "rgba(255,255,255,0.5)",
        light: "rgba(0,0,0,0.5)",
    },
};

/// How colors are assigned across a list of axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisColorPolicy {
    /// Primary pair on the first axis, secondary pair on the rest
    #[default]
    PrimaryThenSecondary,
    /// Primary pair on every axis
    Uniform,
}

impl AxisColorPolicy {
    /// Color for the axis at `index` (zero-based)
    pub fn color_for(self, index: usize, dark: bool) -> &'static str {
        match self {
            AxisColorPolicy::PrimaryThenSecondary if index > 0 => {
                CHART_PALETTE.secondary.pick(dark)
            }
            _ => CHART_PALETTE.primary.pick(dark),
        }
    }
}

//! Chart configuration model
//!
//! Mirrors the subset of chart options the theme touches (`scales.yAxes`,
//! `scales.xAxes`, `legend.labels`). Every object keeps unknown keys in an
//! `extra` map so a round trip through the theme never drops options it does
//! not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::colors::{AxisColorPolicy, CHART_PALETTE};

/// Tick label settings of one axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Grid line settings of one axis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `scales.yAxes` or `scales.xAxes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<GridLines>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AxisConfig {
    /// Tick font color, if set
    pub fn tick_color(&self) -> Option<&str> {
        self.ticks.as_ref()?.font_color.as_deref()
    }

    /// Grid line color, if set
    pub fn grid_color(&self) -> Option<&str> {
        self.grid_lines.as_ref()?.color.as_deref()
    }

    /// Create missing tick and grid line objects, leaving existing ones alone
    fn normalize(&mut self) -> (&mut Ticks, &mut GridLines) {
        let ticks = self.ticks.get_or_insert_with(Ticks::default);
        let grid_lines = self.grid_lines.get_or_insert_with(GridLines::default);
        (ticks, grid_lines)
    }

    fn paint(&mut self, color: &str) {
        let (ticks, grid_lines) = self.normalize();
        ticks.font_color = Some(color.to_string());
        grid_lines.color = Some(color.to_string());
    }
}

/// Legend label settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    #[serde(default)]
    pub font_color: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Legend settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LegendConfig {
    /// A fresh legend: a labels object holding an unset color
    pub fn with_unset_labels() -> Self {
        Self {
            labels: Some(LegendLabels::default()),
            extra: Map::new(),
        }
    }

    /// Label font color, if set
    pub fn label_color(&self) -> Option<&str> {
        self.labels.as_ref()?.font_color.as_deref()
    }
}

/// Axis lists of a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axes: Option<Vec<AxisConfig>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axes: Option<Vec<AxisConfig>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options object handed to the chart renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub scales: Scales,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartOptions {
    /// Recolor both axis lists and the legend for the given theme mode
    pub fn apply_theme(&mut self, dark: bool, policy: AxisColorPolicy) {
        self.scales.y_axes = Some(apply_theme_with(self.scales.y_axes.take(), dark, policy));
        self.scales.x_axes = Some(apply_theme_with(self.scales.x_axes.take(), dark, policy));
        self.legend = Some(apply_legend_theme(self.legend.take(), dark));
    }
}

/// Recolor axes with the default policy
///
/// Absent axes become a single empty axis so the renderer always gets at
/// least one entry. Present lists keep their order and length.
pub fn apply_theme(axes: Option<Vec<AxisConfig>>, dark: bool) -> Vec<AxisConfig> {
    apply_theme_with(axes, dark, AxisColorPolicy::default())
}

/// Recolor axes with an explicit policy
pub fn apply_theme_with(
    axes: Option<Vec<AxisConfig>>,
    dark: bool,
    policy: AxisColorPolicy,
) -> Vec<AxisConfig> {
    let mut axes = axes.unwrap_or_else(|| vec![AxisConfig::default()]);

    for (index, axis) in axes.iter_mut().enumerate() {
        axis.paint(policy.color_for(index, dark));
    }

    axes
}

/// Recolor the legend labels, creating the legend if needed
pub fn apply_legend_theme(legend: Option<LegendConfig>, dark: bool) -> LegendConfig {
    let mut legend = legend.unwrap_or_else(LegendConfig::with_unset_labels);

    legend
        .labels
        .get_or_insert_with(LegendLabels::default)
        .font_color = Some(CHART_PALETTE.primary.pick(dark).to_string());

    legend
}

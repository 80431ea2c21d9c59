//! Category gauges

use serde::{Deserialize, Serialize};

use crate::classify::RiskColor;
use crate::scorer::ScoreReport;
use riskdash_utils::GaugeVariant;

/// Coloured section of a gauge axis, `[from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub from: f64,
    pub to: f64,
    pub color: RiskColor,
}

impl GaugeBand {
    pub const fn new(from: f64, to: f64, color: RiskColor) -> Self {
        Self { from, to, color }
    }
}

/// Axis, bands and optional delta reference shared by all category gauges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeStyle {
    pub min: f64,
    pub max: f64,
    pub bands: Vec<GaugeBand>,
    /// When set, each gauge shows its score minus this value
    pub delta_reference: Option<i64>,
}

impl GaugeStyle {
    /// Axis 0..5: green 0-2, yellow 2-3, red 3-5
    pub fn five_point() -> Self {
        Self {
            min: 0.0,
            max: 5.0,
            bands: vec![
                GaugeBand::new(0.0, 2.0, RiskColor::Green),
                GaugeBand::new(2.0, 3.0, RiskColor::Yellow),
                GaugeBand::new(3.0, 5.0, RiskColor::Red),
            ],
            delta_reference: None,
        }
    }

    /// Axis 0..10: green 0-4, yellow 4-6, red 6-10
    pub fn ten_point() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
            bands: vec![
                GaugeBand::new(0.0, 4.0, RiskColor::Green),
                GaugeBand::new(4.0, 6.0, RiskColor::Yellow),
                GaugeBand::new(6.0, 10.0, RiskColor::Red),
            ],
            delta_reference: None,
        }
    }

    pub fn from_variant(variant: GaugeVariant) -> Self {
        match variant {
            GaugeVariant::Five => Self::five_point(),
            GaugeVariant::Ten => Self::ten_point(),
        }
    }

    pub fn with_delta_reference(mut self, reference: i64) -> Self {
        self.delta_reference = Some(reference);
        self
    }

    /// Band containing `value`; the axis maximum belongs to the last band
    pub fn band_for(&self, value: f64) -> Option<RiskColor> {
        self.bands
            .iter()
            .find(|band| value >= band.from && (value < band.to || (value == band.to && band.to == self.max)))
            .map(|band| band.color)
    }
}

impl Default for GaugeStyle {
    fn default() -> Self {
        Self::five_point()
    }
}

/// One category's gauge reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub title: String,
    pub value: i64,
    /// Green for a positive score, red otherwise
    pub headline: RiskColor,
    /// Band the needle sits in; `None` when off the axis
    pub band: Option<RiskColor>,
    pub delta: Option<i64>,
}

impl Gauge {
    pub fn new(title: impl Into<String>, value: i64, style: &GaugeStyle) -> Self {
        Self {
            title: title.into(),
            value,
            headline: if value > 0 { RiskColor::Green } else { RiskColor::Red },
            band: style.band_for(value as f64),
            delta: style.delta_reference.map(|reference| value - reference),
        }
    }

    /// Text gauge: title, filled bar, value over axis maximum, band, delta
    pub fn render(&self, style: &GaugeStyle, width: usize) -> String {
        let span = (style.max - style.min).max(f64::EPSILON);
        let ratio = ((self.value as f64 - style.min) / span).clamp(0.0, 1.0);
        let filled = (ratio * width as f64).round() as usize;

        let mut line = format!(
            "{:<16} [{}{}] {:>3} / {}",
            self.title,
            "#".repeat(filled),
            "-".repeat(width - filled),
            self.value,
            style.max
        );
        match self.band {
            Some(band) => line.push_str(&format!("  band: {band}")),
            None => line.push_str("  band: off-scale"),
        }
        if let Some(delta) = self.delta {
            line.push_str(&format!("  delta: {delta:+}"));
        }
        line
    }
}

/// One gauge per category, in declaration order
pub fn category_gauges(report: &ScoreReport, style: &GaugeStyle) -> Vec<Gauge> {
    report
        .category_scores
        .iter()
        .map(|c| Gauge::new(c.category.clone(), c.score, style))
        .collect()
}

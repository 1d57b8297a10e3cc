use crate::color::{BarColor, generate_palette};
use crate::data::model::{BenchmarkDataset, Metric, Unit};
use crate::settings::FigureSettings;

// ---------------------------------------------------------------------------
// Figure – what gets drawn, independent of any backend
// ---------------------------------------------------------------------------

/// One bar with its symmetric error bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    /// Mean value.
    pub height: f64,
    /// Standard deviation, drawn as ± around `height`.
    pub error: f64,
    pub color: BarColor,
}

impl Bar {
    /// (low, high) end of the error bar.
    pub fn error_range(&self) -> (f64, f64) {
        (self.height - self.error, self.height + self.error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub metric: Metric,
    pub title: String,
    pub unit: Unit,
    pub bars: Vec<Bar>,
    headroom: f64,
}

impl Panel {
    /// Upper bound of the value axis.
    pub fn y_upper(&self) -> f64 {
        let top = self
            .bars
            .iter()
            .map(|b| b.height + b.error)
            .fold(0.0_f64, f64::max);
        if top > 0.0 {
            top * (1.0 + self.headroom)
        } else {
            1.0
        }
    }

    /// (row, column) in the 2×2 grid.
    pub fn position(&self) -> (usize, usize) {
        self.metric.panel_position()
    }
}

/// The 2×2 grid of benchmark panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Always four panels, in `Metric::ALL` order.
    pub panels: Vec<Panel>,
    pub settings: FigureSettings,
}

impl Figure {
    pub fn from_dataset(dataset: &BenchmarkDataset, settings: &FigureSettings) -> Self {
        let colors = generate_palette(dataset.len());

        let panels = Metric::ALL
            .iter()
            .map(|&metric| Panel {
                metric,
                title: metric.title().to_string(),
                unit: metric.unit(),
                bars: dataset
                    .implementations()
                    .zip(dataset.measurements(metric))
                    .zip(&colors)
                    .map(|((label, m), &color)| Bar {
                        label: label.to_string(),
                        height: m.mean,
                        error: m.std_dev,
                        color,
                    })
                    .collect(),
                headroom: settings.headroom,
            })
            .collect();

        Figure {
            panels,
            settings: settings.clone(),
        }
    }

    pub fn panel(&self, metric: Metric) -> Option<&Panel> {
        self.panels.iter().find(|p| p.metric == metric)
    }

    /// Category labels shared by every panel.
    pub fn labels(&self) -> Vec<&str> {
        self.panels
            .first()
            .map(|p| p.bars.iter().map(|b| b.label.as_str()).collect())
            .unwrap_or_default()
    }

    /// Pixel height reserved under each panel for the rotated category labels,
    /// sized to the longest label so none of them get clipped.
    pub fn label_area(&self) -> u32 {
        let longest = self
            .labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0) as u32;
        let char_width = (self.settings.label_font_size * 3).div_ceil(5);
        (longest * char_width + 12).max(30)
    }
}

use anyhow::{Context, Result};
use log::info;

use crate::data::loader::load_csv;
use crate::data::model::{BenchmarkDataset, Metric};
use crate::figure::Figure;
use crate::render::{RenderedFigure, render_png};
use crate::settings::FigureSettings;

/// Everything produced by one run: the figure and the PNG that was written.
#[derive(Debug, Clone)]
pub struct Export {
    pub figure: Figure,
    pub rendered: RenderedFigure,
}

/// Load the results, render the figure and write it to `settings.output_path`.
///
/// Nothing is written unless loading and rendering both succeed.
pub fn export_figure(settings: &FigureSettings) -> Result<Export> {
    let dataset = load_csv(&settings.input_path)
        .with_context(|| format!("loading {}", settings.input_path.display()))?;
    info!(
        "Loaded {} implementations from {}",
        dataset.len(),
        settings.input_path.display()
    );
    log_summary(&dataset);

    let figure = Figure::from_dataset(&dataset, settings);
    let rendered = render_png(&figure).context("rendering benchmark figure")?;
    rendered
        .save(&settings.output_path)
        .context("saving benchmark figure")?;
    info!(
        "Saved {}x{} figure to {}",
        rendered.width,
        rendered.height,
        settings.output_path.display()
    );

    Ok(Export { figure, rendered })
}

fn log_summary(dataset: &BenchmarkDataset) {
    for row in &dataset.rows {
        info!("Implementation: {}", row.implementation);
        for metric in Metric::ALL {
            let m = row.measurement(metric);
            info!(
                "  {:<10} mean {:>12.3} ± {:<10.3} {}",
                metric.to_string(),
                m.mean,
                m.std_dev,
                metric.unit()
            );
        }
    }
}

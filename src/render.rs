use std::fs;
use std::io::Cursor;
use std::ops::Range;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::figure::{Figure, Panel};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing panel '{panel}': {message}")]
    Draw { panel: String, message: String },
    #[error("drawing panel '{panel}': no usable font ({message})")]
    Font { panel: String, message: String },
    #[error("encoding PNG")]
    Encode(#[from] image::ImageError),
    #[error("writing {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A rasterized figure, already PNG-encoded.
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl RenderedFigure {
    /// Write the PNG to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let write_err = |source| RenderError::Write {
            path: path.display().to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }
        fs::write(path, &self.png).map_err(write_err)
    }
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

/// Draw the 2×2 panel grid into an in-memory RGB buffer and encode it as PNG.
pub fn render_png(figure: &Figure) -> Result<RenderedFigure, RenderError> {
    let (width, height) = figure.settings.size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err("figure"))?;

        let areas = root.split_evenly((2, 2));
        for panel in &figure.panels {
            let (row, col) = panel.position();
            draw_panel(&areas[row * 2 + col], panel, figure)?;
        }
        root.present().map_err(draw_err("figure"))?;
    }

    let img = RgbImage::from_raw(width, height, buffer).ok_or_else(|| RenderError::Draw {
        panel: "figure".to_string(),
        message: "pixel buffer does not match canvas size".to_string(),
    })?;
    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, ImageFormat::Png)?;

    log::debug!("Rendered {width}x{height} figure ({} bytes)", png.get_ref().len());
    Ok(RenderedFigure {
        width,
        height,
        png: png.into_inner(),
    })
}

fn draw_err<E: std::fmt::Display>(panel: &str) -> impl Fn(E) -> RenderError + '_ {
    move |e| {
        let panel = panel.to_string();
        let message = e.to_string();
        if message.contains("Font loading error") {
            RenderError::Font { panel, message }
        } else {
            RenderError::Draw { panel, message }
        }
    }
}

// ---------------------------------------------------------------------------
// Category axis geometry
// ---------------------------------------------------------------------------

/// Value range covering `n` unit-wide category slots, plus the slot centres
/// used as axis key points.
fn category_axis(n: usize) -> (Range<f64>, Vec<f64>) {
    (0.0..n.max(1) as f64, (0..n).map(category_center).collect())
}

fn category_center(idx: usize) -> f64 {
    idx as f64 + 0.5
}

/// Horizontal extent of bar `idx`, centred in its slot.
fn bar_span(idx: usize, bar_width: f64) -> (f64, f64) {
    let half = bar_width.clamp(0.0, 1.0) / 2.0;
    let center = category_center(idx);
    (center - half, center + half)
}

/// Slot whose centre is at `value`, if any.
fn category_index(value: f64, n: usize) -> Option<usize> {
    let idx = (value - 0.5).round();
    if idx < 0.0 || idx as usize >= n {
        return None;
    }
    let idx = idx as usize;
    ((value - category_center(idx)).abs() < 1e-6).then_some(idx)
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    figure: &Figure,
) -> Result<(), RenderError> {
    let settings = &figure.settings;
    let err = draw_err(&panel.title);
    let labels: Vec<&str> = panel.bars.iter().map(|b| b.label.as_str()).collect();
    let (x_range, centers) = category_axis(labels.len());

    let mut chart = ChartBuilder::on(area)
        .caption(
            &panel.title,
            ("sans-serif", settings.title_font_size).into_font(),
        )
        .margin(12)
        .x_label_area_size(figure.label_area())
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.with_key_points(centers), 0f64..panel.y_upper())
        .map_err(&err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(WHITE)
        .x_labels(labels.len())
        .x_label_formatter(&|v: &f64| {
            category_index(*v, labels.len())
                .map(|i| labels[i].to_string())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", settings.label_font_size)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style(("sans-serif", settings.label_font_size).into_font())
        .y_desc(panel.unit.to_string())
        .draw()
        .map_err(&err)?;

    chart
        .draw_series(panel.bars.iter().enumerate().map(|(idx, bar)| {
            let (left, right) = bar_span(idx, settings.bar_width);
            Rectangle::new(
                [(left, 0.0), (right, bar.height)],
                RGBColor::from(bar.color).filled(),
            )
        }))
        .map_err(&err)?;

    chart
        .draw_series(panel.bars.iter().enumerate().map(|(idx, bar)| {
            let (low, high) = bar.error_range();
            ErrorBar::new_vertical(
                category_center(idx),
                low,
                bar.height,
                high,
                BLACK.stroke_width(1),
                settings.cap_width,
            )
        }))
        .map_err(&err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_dataset;
    use crate::settings::FigureSettings;

    fn figure() -> Figure {
        let text = "\
Implementation,Add Mean,Add StdDev,Modify Mean,Modify StdDev,Delete Mean,Delete StdDev,BestPrice Mean,BestPrice StdDev
Map-based,1.0,0.1,2.0,0.2,3.0,0.3,10,1
Linear search,1.5,0.2,2.5,0.3,3.5,0.4,12,2
";
        let ds = read_dataset(text.as_bytes()).unwrap();
        Figure::from_dataset(&ds, &FigureSettings::default())
    }

    /// Renders `fig`, or returns `None` when no usable font is installed.
    fn render_if_fonts(fig: &Figure) -> Option<RenderedFigure> {
        match render_png(fig) {
            Ok(rendered) => Some(rendered),
            Err(RenderError::Font { message, .. }) => {
                eprintln!("skipping, no usable font: {message}");
                None
            }
            Err(e) => panic!("rendering failed: {e}"),
        }
    }

    #[test]
    fn one_slot_per_category() {
        let (range, centers) = category_axis(2);
        assert_eq!(range, 0.0..2.0);
        assert_eq!(centers, vec![0.5, 1.5]);

        let (range, centers) = category_axis(1);
        assert_eq!(range, 0.0..1.0);
        assert_eq!(centers, vec![0.5]);
    }

    #[test]
    fn bars_fill_their_share_of_the_slot() {
        let (range, _) = category_axis(2);
        assert_eq!(bar_span(0, 0.5), (0.25, 0.75));
        assert_eq!(bar_span(1, 0.5), (1.25, 1.75));

        let (left, right) = bar_span(1, 0.5);
        assert!(left >= range.start && right <= range.end);
        assert!((right - left - 0.5).abs() < 1e-12);
    }

    #[test]
    fn labels_resolve_only_at_slot_centres() {
        assert_eq!(category_index(0.5, 2), Some(0));
        assert_eq!(category_index(1.5, 2), Some(1));
        assert_eq!(category_index(1.0, 2), None);
        assert_eq!(category_index(2.5, 2), None);
        assert_eq!(category_index(-0.5, 2), None);
    }

    #[test]
    fn font_failures_are_told_apart() {
        let font = draw_err::<String>("Add")("backend error: Font loading error: none".into());
        assert!(matches!(font, RenderError::Font { .. }));
        let other = draw_err::<String>("Add")("backend error: out of bounds".into());
        assert!(matches!(other, RenderError::Draw { .. }));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots").join("out.png");
        let rendered = RenderedFigure {
            width: 1,
            height: 1,
            png: vec![1, 2, 3],
        };
        rendered.save(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn renders_a_png_of_the_configured_size() {
        let Some(rendered) = render_if_fonts(&figure()) else {
            return;
        };
        assert_eq!((rendered.width, rendered.height), (1200, 1000));

        let decoded = image::load_from_memory_with_format(&rendered.png, ImageFormat::Png)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (1200, 1000));
        // Not a blank canvas.
        assert!(decoded.pixels().any(|p| p.0 != [255, 255, 255]));
    }

    #[test]
    fn rendering_is_repeatable() {
        let fig = figure();
        let (Some(first), Some(second)) = (render_if_fonts(&fig), render_if_fonts(&fig)) else {
            return;
        };
        assert_eq!(first.png, second.png);
    }
}

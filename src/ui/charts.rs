use eframe::egui::{Color32, Ui};
use egui_plot::{Bar as PlotBar, BarChart, Line, Plot, PlotPoints};

use crate::data::model::Metric;
use crate::figure::{Bar, Figure, Panel};

/// Cap half-width as a fraction of the bar width.
const CAP_FRACTION: f64 = 0.25;

// ---------------------------------------------------------------------------
// 2×2 chart grid (central panel)
// ---------------------------------------------------------------------------

/// Render the four benchmark panels as live bar charts.
pub fn chart_grid(ui: &mut Ui, figure: &Figure) {
    let title_height = ui.text_style_height(&eframe::egui::TextStyle::Body) * 1.5;
    let row_height = ((ui.available_height() - ui.spacing().item_spacing.y) / 2.0).max(160.0);
    let plot_height = row_height - title_height;

    for row in 0..2 {
        ui.columns(2, |cols: &mut [Ui]| {
            for (col, ui) in cols.iter_mut().enumerate() {
                let metric = Metric::ALL
                    .into_iter()
                    .find(|m| m.panel_position() == (row, col));
                if let Some(panel) = metric.and_then(|m| figure.panel(m)) {
                    panel_chart(ui, panel, figure.settings.bar_width, plot_height);
                }
            }
        });
    }
}

fn panel_chart(ui: &mut Ui, panel: &Panel, bar_width: f64, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&panel.title);
    });

    let labels: Vec<String> = panel.bars.iter().map(|b| b.label.clone()).collect();
    let bars: Vec<PlotBar> = panel
        .bars
        .iter()
        .enumerate()
        .map(|(i, b)| {
            PlotBar::new(i as f64, b.height)
                .width(bar_width)
                .name(hover_name(b))
                .fill(Color32::from(b.color))
        })
        .collect();

    Plot::new(panel.metric.column_prefix())
        .height(height)
        .include_y(0.0)
        .include_y(panel.y_upper())
        .y_axis_label(panel.unit.to_string())
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&panel.title));

            let cap = bar_width * CAP_FRACTION;
            for (idx, bar) in panel.bars.iter().enumerate() {
                let points: PlotPoints = whisker_points(idx as f64, bar, cap).into();
                plot_ui.line(Line::new(points).color(Color32::BLACK).width(1.5));
            }
        });
}

/// Legend/hover text of a bar, at the precision used in the log summary.
fn hover_name(bar: &Bar) -> String {
    format!("{} {:.3} ± {:.3}", bar.label, bar.height, bar.error)
}

/// Axis text for a category slot: the implementation name at integer
/// positions, nothing in between.
fn category_label(labels: &[String], value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}

/// Polyline tracing the error bar of a bar centred on `x`: bottom cap, stem,
/// top cap.
fn whisker_points(x: f64, bar: &Bar, cap: f64) -> Vec<[f64; 2]> {
    let (low, high) = bar.error_range();
    vec![
        [x - cap, low],
        [x + cap, low],
        [x, low],
        [x, high],
        [x - cap, high],
        [x + cap, high],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_dataset;
    use crate::settings::FigureSettings;

    fn figure() -> Figure {
        let text = "\
Implementation,Add Mean,Add StdDev,Modify Mean,Modify StdDev,Delete Mean,Delete StdDev,BestPrice Mean,BestPrice StdDev
A,1.0,0.1,2.0,0.2,3.0,0.3,10,1
B,1.5,0.25,2.5,0.3,3.5,0.4,12,2
";
        let ds = read_dataset(text.as_bytes()).unwrap();
        Figure::from_dataset(&ds, &FigureSettings::default())
    }

    #[test]
    fn labels_only_at_category_centres() {
        let labels = vec!["A".to_string(), "B".to_string()];
        assert_eq!(category_label(&labels, 0.0), "A");
        assert_eq!(category_label(&labels, 1.0), "B");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 2.0), "");
        assert_eq!(category_label(&labels, -1.0), "");
    }

    #[test]
    fn whisker_spans_one_std_dev_each_way() {
        let fig = figure();
        let add = fig.panel(Metric::Add).unwrap();
        let points = whisker_points(1.0, &add.bars[1], 0.1);

        let ys: Vec<f64> = points.iter().map(|p| p[1]).collect();
        assert_eq!(ys, vec![1.25, 1.25, 1.25, 1.75, 1.75, 1.75]);
        assert!(points.iter().all(|p| (p[0] - 1.0).abs() <= 0.1 + 1e-12));
    }

    #[test]
    fn hover_text_uses_fixed_precision() {
        let fig = figure();
        let bar = &fig.panel(Metric::Modify).unwrap().bars[1];
        assert_eq!(hover_name(bar), "B 2.500 ± 0.300");
    }
}

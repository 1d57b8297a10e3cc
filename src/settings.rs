use std::path::PathBuf;

/// Fixed parameters of the benchmark figure.
///
/// There is no runtime configuration: `main` always uses `Default`, tests
/// point the paths somewhere temporary.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSettings {
    /// Results file written by the benchmark harness.
    pub input_path: PathBuf,
    /// Where the rendered figure is saved.
    pub output_path: PathBuf,
    /// Canvas size in pixels (12 × 10 inches at 100 dpi).
    pub size: (u32, u32),
    /// Bar width as a fraction of one category slot.
    pub bar_width: f64,
    /// Error-bar cap width in pixels.
    pub cap_width: u32,
    /// Extra space above the tallest error bar, as a fraction of it.
    pub headroom: f64,
    pub title_font_size: u32,
    pub label_font_size: u32,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("orderbook_benchmark.csv"),
            output_path: PathBuf::from("orderbook_benchmark.png"),
            size: (1200, 1000),
            bar_width: 0.5,
            cap_width: 11,
            headroom: 0.1,
            title_font_size: 22,
            label_font_size: 15,
        }
    }
}

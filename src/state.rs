use std::path::PathBuf;
use std::sync::Arc;

use crate::figure::Figure;
use crate::pipeline::Export;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Live egui_plot charts.
    #[default]
    Charts,
    /// The PNG exactly as written to disk.
    Image,
}

/// The full UI state, independent of rendering.
pub struct ViewerState {
    pub figure: Figure,
    /// Encoded PNG, shown in [`View::Image`].
    pub png: Arc<[u8]>,
    /// Where the PNG was saved.
    pub output_path: PathBuf,
    pub view: View,
}

impl ViewerState {
    pub fn new(export: Export) -> Self {
        let output_path = export.figure.settings.output_path.clone();
        Self {
            figure: export.figure,
            png: export.rendered.png.into(),
            output_path,
            view: View::default(),
        }
    }

    /// Number of implementations (bars per panel).
    pub fn bar_count(&self) -> usize {
        self.figure.labels().len()
    }

    /// URI under which the PNG bytes are registered with the image loaders.
    pub fn image_uri(&self) -> String {
        format!("bytes://{}", self.output_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_dataset;
    use crate::render::RenderedFigure;
    use crate::settings::FigureSettings;

    fn state() -> ViewerState {
        let text = "\
Implementation,Add Mean,Add StdDev,Modify Mean,Modify StdDev,Delete Mean,Delete StdDev,BestPrice Mean,BestPrice StdDev
A,1.0,0.1,2.0,0.2,3.0,0.3,10,1
B,1.5,0.2,2.5,0.3,3.5,0.4,12,2
C,1.7,0.2,2.7,0.3,3.7,0.4,13,2
";
        let ds = read_dataset(text.as_bytes()).unwrap();
        let figure = Figure::from_dataset(&ds, &FigureSettings::default());
        ViewerState::new(Export {
            figure,
            rendered: RenderedFigure {
                width: 1200,
                height: 1000,
                png: vec![0x89, b'P', b'N', b'G'],
            },
        })
    }

    #[test]
    fn starts_on_live_charts() {
        let s = state();
        assert_eq!(s.view, View::Charts);
        assert_eq!(s.bar_count(), 3);
        assert_eq!(s.image_uri(), "bytes://orderbook_benchmark.png");
    }

    #[test]
    fn keeps_the_encoded_png() {
        assert_eq!(&state().png[..], &[0x89, b'P', b'N', b'G']);
    }
}

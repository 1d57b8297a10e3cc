use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// An 8-bit sRGB colour shared by the PNG renderer and the live viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColor(pub [u8; 3]);

impl From<BarColor> for Color32 {
    fn from(c: BarColor) -> Self {
        let [r, g, b] = c.0;
        Color32::from_rgb(r, g, b)
    }
}

impl From<BarColor> for RGBColor {
    fn from(c: BarColor) -> Self {
        let [r, g, b] = c.0;
        RGBColor(r, g, b)
    }
}

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<BarColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            BarColor([
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colours_are_distinct() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette() {
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn first_hue_is_red() {
        let BarColor([r, g, b]) = generate_palette(3)[0];
        assert!(r > g && r > b);
        assert_eq!(Color32::from(BarColor([r, g, b])), Color32::from_rgb(r, g, b));
    }
}

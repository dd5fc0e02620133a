use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Colormap: intensity in [0, 1] → colour
// ---------------------------------------------------------------------------

/// Anchors of the ColorBrewer "Reds" sequential ramp, light to dark.
const REDS: [Srgb<u8>; 9] = [
    Srgb::new(0xff, 0xf5, 0xf0),
    Srgb::new(0xfe, 0xe0, 0xd2),
    Srgb::new(0xfc, 0xbb, 0xa1),
    Srgb::new(0xfc, 0x92, 0x72),
    Srgb::new(0xfb, 0x6a, 0x4a),
    Srgb::new(0xef, 0x3b, 0x2c),
    Srgb::new(0xcb, 0x18, 0x1d),
    Srgb::new(0xa5, 0x0f, 0x15),
    Srgb::new(0x67, 0x00, 0x0d),
];

/// Number of entries in a sampled colormap lookup table.
const LUT_SIZE: usize = 256;

/// Sequential colormaps available for shading clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    Reds,
}

impl ColorMap {
    fn anchors(self) -> &'static [Srgb<u8>] {
        match self {
            ColorMap::Reds => &REDS,
        }
    }

    /// Sample the map at `t`, quantised to a 256-entry table.
    ///
    /// Entry `i` sits at position `i / 255` along the ramp; values outside
    /// `[0, 1]` are clamped.
    pub fn sample(self, t: f32) -> Color32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = ((t * LUT_SIZE as f32) as usize).min(LUT_SIZE - 1);
        let position = index as f32 / (LUT_SIZE - 1) as f32;

        let anchors = self.anchors();
        let segments = anchors.len() - 1;
        let scaled = position * segments as f32;
        let segment = (scaled.floor() as usize).min(segments - 1);
        let frac = scaled - segment as f32;

        let lo: Srgb<f32> = anchors[segment].into_format();
        let hi: Srgb<f32> = anchors[segment + 1].into_format();
        let rgb = Srgb::new(
            lo.red + (hi.red - lo.red) * frac,
            lo.green + (hi.green - lo.green) * frac,
            lo.blue + (hi.blue - lo.blue) * frac,
        );
        to_color32(rgb)
    }
}

fn to_color32(rgb: Srgb<f32>) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
}

/// `n` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            (0..n).map(|i| start + step * i as f32).collect()
        }
    }
}

// ---------------------------------------------------------------------------
// Cluster palette: label → colour
// ---------------------------------------------------------------------------

/// Ordered colours indexed by cluster label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPalette {
    colors: Vec<Color32>,
}

impl ClusterPalette {
    /// `shades` samples of `map` between `low` and `high`, repeated `repeats` times.
    pub fn tiled(map: ColorMap, shades: usize, repeats: usize, low: f32, high: f32) -> Self {
        let base: Vec<Color32> = linspace(low, high, shades)
            .into_iter()
            .map(|t| map.sample(t))
            .collect();

        let colors = std::iter::repeat(base)
            .take(repeats)
            .flatten()
            .collect();
        ClusterPalette { colors }
    }

    /// Five shades of red from 0.1 to 1.0, tiled twice (10 entries).
    pub fn reds() -> Self {
        Self::tiled(ColorMap::Reds, 5, 2, 0.1, 1.0)
    }

    /// Colour for a label, `None` if the palette is too short.
    pub fn color_for(&self, label: usize) -> Option<Color32> {
        self.colors.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reds_endpoints_match_anchors() {
        assert_eq!(ColorMap::Reds.sample(0.0), Color32::from_rgb(0xff, 0xf5, 0xf0));
        assert_eq!(ColorMap::Reds.sample(1.0), Color32::from_rgb(0x67, 0x00, 0x0d));
    }

    #[test]
    fn out_of_range_intensities_are_clamped() {
        assert_eq!(ColorMap::Reds.sample(-3.0), ColorMap::Reds.sample(0.0));
        assert_eq!(ColorMap::Reds.sample(7.5), ColorMap::Reds.sample(1.0));
    }

    #[test]
    fn reds_darkens_with_intensity() {
        let samples: Vec<Color32> = linspace(0.0, 1.0, 11)
            .into_iter()
            .map(|t| ColorMap::Reds.sample(t))
            .collect();
        for pair in samples.windows(2) {
            assert!(pair[0].g() >= pair[1].g(), "{:?} then {:?}", pair[0], pair[1]);
            assert!(pair[0].r() >= pair[1].r(), "{:?} then {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn linspace_includes_both_ends() {
        let v = linspace(0.1, 1.0, 5);
        assert_eq!(v.len(), 5);
        assert!((v[0] - 0.1).abs() < 1e-6);
        assert!((v[2] - 0.55).abs() < 1e-6);
        assert!((v[4] - 1.0).abs() < 1e-6);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn reds_palette_is_five_shades_tiled_twice() {
        let palette = ClusterPalette::reds();
        assert!(palette.color_for(9).is_some());
        for label in 0..5 {
            assert_eq!(palette.color_for(label), palette.color_for(label + 5));
        }
        assert_ne!(palette.color_for(0), palette.color_for(1));
        assert_eq!(palette.color_for(4), Some(ColorMap::Reds.sample(1.0)));
        assert_eq!(palette.color_for(10), None);
    }

    #[test]
    fn palette_shades_follow_the_lookup_table() {
        let palette = ClusterPalette::reds();
        assert_eq!(palette.color_for(0), Some(Color32::from_rgb(254, 229, 216)));
        assert_eq!(palette.color_for(2), Some(Color32::from_rgb(246, 88, 62)));
        assert_eq!(palette.color_for(3), Some(Color32::from_rgb(195, 22, 27)));
    }

    #[test]
    fn cluster_zero_and_five_share_a_colour() {
        let palette = ClusterPalette::reds();
        assert_eq!(palette.color_for(0), palette.color_for(5));
        assert!(palette.color_for(0).is_some());
    }
}

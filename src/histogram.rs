//! Per-channel intensity histograms and their line-chart rendering.
//!
//! The histogram counts, for each of the red, green and blue channels, how
//! many pixels carry each intensity `0..=255`. Because the layer shift only
//! moves pixels around, the histogram of a shifted image equals that of its
//! source.
use crate::image::io::{ensure_parent_dir, to_image_buffer};
use crate::image::{ImageView, Rgb8, RgbImage};
use log::warn;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const BINS: usize = 256;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ColorHistogram {
    pub red: Vec<u32>,
    pub green: Vec<u32>,
    pub blue: Vec<u32>,
}

impl Default for ColorHistogram {
    fn default() -> Self {
        Self {
            red: vec![0; BINS],
            green: vec![0; BINS],
            blue: vec![0; BINS],
        }
    }
}

impl ColorHistogram {
    pub fn from_image<I>(image: &I) -> Self
    where
        I: ImageView<Pixel = Rgb8>,
    {
        let mut hist = Self::default();
        for row in image.rows() {
            for px in row {
                hist.accumulate(*px);
            }
        }
        hist
    }

    #[inline]
    pub fn accumulate(&mut self, px: Rgb8) {
        self.red[px[0] as usize] += 1;
        self.green[px[1] as usize] += 1;
        self.blue[px[2] as usize] += 1;
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.red.iter().map(|&c| u64::from(c)).sum()
    }

    /// Largest single bin across all channels.
    pub fn peak(&self) -> u32 {
        self.channels()
            .iter()
            .flat_map(|c| c.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn channels(&self) -> [&[u32]; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

/// Canvas settings for [`render_histogram_plot`].
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub width: usize,
    pub height: usize,
    /// Blank border around the chart in pixels.
    pub margin: usize,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            margin: 20,
        }
    }
}

const CAPTION: &str = "RGB color distribution";
const CHANNELS: [(RGBColor, &str); 3] = [
    (RGBColor(220, 40, 40), "R channel"),
    (RGBColor(40, 160, 40), "G channel"),
    (RGBColor(40, 40, 220), "B channel"),
];

/// Draw the three channel curves as a line chart on a white canvas.
///
/// The chart carries a caption, axis descriptions ("Intensity" /
/// "Frequency") and a legend. When no font can be loaded the chart is drawn
/// again without any text, so headless hosts still get the curves.
pub fn render_histogram_plot(hist: &ColorHistogram, options: PlotOptions) -> Result<RgbImage, String> {
    let PlotOptions {
        width,
        height,
        margin,
    } = options;
    if width == 0 || height == 0 {
        return Err(format!("Plot canvas {width}x{height} is empty"));
    }
    let size = (
        u32::try_from(width).map_err(|e| format!("Plot width {width}: {e}"))?,
        u32::try_from(height).map_err(|e| format!("Plot height {height}: {e}"))?,
    );
    let margin = u32::try_from(margin).map_err(|e| format!("Plot margin {margin}: {e}"))?;
    let bytes = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| format!("Plot canvas {width}x{height} is too large"))?;

    let mut buffer = vec![0u8; bytes];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        if let Err(err) = draw_histogram(&root, hist, margin, true) {
            warn!("histogram plot text unavailable ({err}); drawing curves only");
            draw_histogram(&root, hist, margin, false)?;
        }
        root.present()
            .map_err(|e| format!("render error: {e}"))?;
    }
    RgbImage::from_raw(width, height, buffer).map_err(|e| e.to_string())
}

fn draw_histogram(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    hist: &ColorHistogram,
    margin: u32,
    with_text: bool,
) -> Result<(), String> {
    root.fill(&WHITE)
        .map_err(|e| format!("backend error: {e}"))?;

    let peak = hist.peak().max(1);
    let mut builder = ChartBuilder::on(root);
    builder.margin(margin);
    if with_text {
        builder
            .caption(CAPTION, ("sans-serif", 20))
            .x_label_area_size(35)
            .y_label_area_size(50);
    }
    let mut chart = builder
        .build_cartesian_2d(0u32..(BINS as u32 - 1), 0u32..peak.saturating_add(1))
        .map_err(|e| format!("chart build error: {e}"))?;

    if with_text {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Intensity")
            .y_desc("Frequency")
            .draw()
            .map_err(|e| format!("mesh error: {e}"))?;
    }

    for (counts, (color, label)) in hist.channels().into_iter().zip(CHANNELS) {
        let points = (0..counts.len()).map(move |bin| (bin as u32, counts[bin]));
        let series = chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| format!("draw error: {e}"))?;
        if with_text {
            series
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    if with_text {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| format!("legend error: {e}"))?;
    }
    Ok(())
}

/// Render and save a histogram plot; format follows the file extension.
pub fn save_histogram_plot(
    hist: &ColorHistogram,
    path: &Path,
    options: PlotOptions,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let canvas = render_histogram_plot(hist, options)?;
    to_image_buffer(&canvas)?
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_dominant(plot: &RgbImage, channel: usize) -> usize {
        plot.pixels()
            .iter()
            .filter(|px| {
                let others = (0..3).filter(|&c| c != channel).map(|c| px[c]);
                px[channel] > 150 && others.into_iter().all(|v| v < 120)
            })
            .count()
    }

    #[test]
    fn counts_each_channel_independently() {
        let img = RgbImage::from_pixels(3, 1, vec![[0, 10, 255], [0, 20, 255], [7, 10, 0]]).unwrap();
        let hist = ColorHistogram::from_image(&img);
        assert_eq!(hist.red[0], 2);
        assert_eq!(hist.red[7], 1);
        assert_eq!(hist.green[10], 2);
        assert_eq!(hist.green[20], 1);
        assert_eq!(hist.blue[255], 2);
        assert_eq!(hist.blue[0], 1);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.peak(), 2);
    }

    #[test]
    fn plot_has_requested_size_and_channel_curves() {
        let _ = env_logger::builder().is_test(true).try_init();
        let img = RgbImage::from_pixels(2, 2, vec![[0, 128, 255]; 4]).unwrap();
        let hist = ColorHistogram::from_image(&img);
        let plot = render_histogram_plot(
            &hist,
            PlotOptions {
                width: 300,
                height: 200,
                margin: 10,
            },
        )
        .unwrap();
        assert_eq!(plot.dimensions(), (200, 300));
        assert_eq!(plot.get(0, 0), [255, 255, 255]);
        assert!(count_dominant(&plot, 0) > 0, "no red curve");
        assert!(count_dominant(&plot, 2) > 0, "no blue curve");
    }

    #[test]
    fn saved_plot_decodes_at_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plots").join("hist.png");
        let img = RgbImage::from_pixels(3, 1, vec![[10, 20, 30], [40, 50, 60], [10, 20, 30]]).unwrap();
        let options = PlotOptions {
            width: 320,
            height: 240,
            margin: 15,
        };
        save_histogram_plot(&ColorHistogram::from_image(&img), &path, options).unwrap();
        let decoded = crate::image::io::load_rgb_image(&path).unwrap();
        assert_eq!(decoded.dimensions(), (240, 320));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let hist = ColorHistogram::default();
        let options = PlotOptions {
            width: 0,
            height: 100,
            margin: 5,
        };
        let err = render_histogram_plot(&hist, options).unwrap_err();
        assert!(err.contains("empty"), "{err}");
    }
}

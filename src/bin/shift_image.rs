use layer_shift::config::shift;
use layer_shift::diagnostics::ShiftReport;
use layer_shift::histogram::{save_histogram_plot, ColorHistogram};
use layer_shift::image::io::{load_rgb_image, save_rgb_image, write_json_file};
use layer_shift::LayerShifter;
use log::info;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = shift::load_config(Path::new(&config_path))?;
    let options = config.checked_options()?;

    let input = load_rgb_image(&config.input)?;
    let outcome = LayerShifter::new(options)
        .process(&input)
        .map_err(|e| format!("Failed to shift {}: {e}", config.input.display()))?;
    info!("{}", outcome.report.summary_line());

    save_rgb_image(&outcome.image, &config.output.result_image)?;
    println!(
        "Saved shifted image to {} ({} of {} rings)",
        config.output.result_image.display(),
        outcome.report.processed_layers,
        outcome.report.ring_count
    );

    let needs_histograms =
        config.output.histogram_json.is_some() || config.output.histogram_plots.is_some();
    if needs_histograms {
        let original = ColorHistogram::from_image(&input);
        let result = ColorHistogram::from_image(&outcome.image);

        if let Some(path) = &config.output.histogram_json {
            let summary = HistogramSummary {
                pixel_count: original.total(),
                original: &original,
                result: &result,
            };
            write_json_file(path, &summary)?;
            println!("Saved histograms to {}", path.display());
        }
        if let Some(plots) = &config.output.histogram_plots {
            save_histogram_plot(&original, &plots.original, config.plot)?;
            save_histogram_plot(&result, &plots.result, config.plot)?;
            println!(
                "Saved histogram plots to {} and {}",
                plots.original.display(),
                plots.result.display()
            );
        }
    }

    if let Some(path) = &config.output.report_json {
        write_report(path, &outcome.report)?;
    }

    Ok(())
}

fn write_report(path: &Path, report: &ShiftReport) -> Result<(), String> {
    write_json_file(path, report)?;
    println!(
        "Saved report for {} layers to {}",
        report.layers.len(),
        path.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: shift_image <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HistogramSummary<'a> {
    pixel_count: u64,
    original: &'a ColorHistogram,
    result: &'a ColorHistogram,
}

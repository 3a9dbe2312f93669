use crate::histogram::PlotOptions;
use crate::shift::{FormLimits, ShiftOptions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ShiftToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub shift: ShiftOptions,
    /// Reject options outside the upload form ranges before shifting.
    #[serde(default)]
    pub enforce_form_limits: bool,
    #[serde(default)]
    pub form_limits: FormLimits,
    #[serde(default)]
    pub plot: PlotOptions,
    pub output: ShiftOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ShiftOutputConfig {
    #[serde(rename = "result_image")]
    pub result_image: PathBuf,
    /// Histograms of the input and the result as JSON.
    #[serde(default)]
    pub histogram_json: Option<PathBuf>,
    #[serde(default)]
    pub histogram_plots: Option<HistogramPlotPaths>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct HistogramPlotPaths {
    pub original: PathBuf,
    pub result: PathBuf,
}

impl ShiftToolConfig {
    /// Options after the optional form range check.
    pub fn checked_options(&self) -> Result<ShiftOptions, String> {
        if self.enforce_form_limits {
            self.form_limits.validate(&self.shift)?;
        }
        Ok(self.shift)
    }
}

pub fn load_config(path: &Path) -> Result<ShiftToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<ShiftToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}

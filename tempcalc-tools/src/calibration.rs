//! Loading calibrations from disk
//!
//! A calibration file is the JSON form of [`CalibrationConfig`]. Without a
//! file the shipped default calibration is used.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tempcalc_core::{CalibrationConfig, TemperatureCurve};

use crate::errors::ToolResult;

/// Read a calibration, or the default one when `path` is `None`
pub fn load_config(path: Option<&Path>) -> ToolResult<CalibrationConfig> {
    match path {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            let config: CalibrationConfig = serde_json::from_reader(reader)?;
            log::info!("loaded calibration from {}", path.display());
            Ok(config)
        }
        None => {
            log::info!("using the default calibration");
            Ok(CalibrationConfig::default())
        }
    }
}

/// Read and build a calibration in one step
pub fn load_curve(path: Option<&Path>) -> ToolResult<TemperatureCurve> {
    let config = load_config(path)?;
    Ok(config.build()?)
}

//! Flat-file persistence for the fleet
//!
//! One comma-separated record per vehicle, kind tag first, fields
//! positional and kind-dependent. Numeric fields carry two decimals,
//! booleans render as `true`/`false`. Records are flexible-length:
//! the generic fallback layout has five fields, the per-kind layouts
//! ten to twelve.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use fleet_domain::{vehicle_from_record, Vehicle};
use fleet_types::{FleetError, Result};
use log::warn;

/// Write every vehicle's record to `path`, replacing the file.
pub fn save_fleet(path: &Path, fleet: &[Box<dyn Vehicle>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FleetError::Csv(e.to_string()))?;
    for vehicle in fleet {
        writer
            .write_record(vehicle.to_record())
            .map_err(|e| FleetError::Csv(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read the vehicles stored at `path`.
///
/// Blank lines are skipped silently; records the factory rejects are
/// skipped with a diagnostic. An unreadable file is the only fatal
/// error.
pub fn load_fleet(path: &Path) -> Result<Vec<Box<dyn Vehicle>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| FleetError::Csv(e.to_string()))?;

    let mut loaded: Vec<Box<dyn Vehicle>> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping unreadable record at line {}: {}", line, e);
                continue;
            }
        };
        let fields: Vec<&str> = record.iter().collect();
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        match vehicle_from_record(&fields) {
            Ok(vehicle) => loaded.push(vehicle),
            Err(e) => warn!("skipping record at line {}: {}", line, e),
        }
    }
    Ok(loaded)
}

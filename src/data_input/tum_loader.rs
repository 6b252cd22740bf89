// src/data_input/tum_loader.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::data_input::trajectory_data::{TrajectoryDataset, TrajectoryRecord};

/// Number of whitespace-separated fields in a TUM trajectory row:
/// timestamp, position x/y/z, orientation quaternion qx/qy/qz/qw.
pub const TUM_FIELD_COUNT: usize = 8;

/// Reads one TUM-format trajectory file into a labeled dataset.
///
/// TUM files carry one pose per line as `timestamp tx ty tz qx qy qz qw`
/// with no header row. Lines starting with '#' are comments.
pub fn load_tum_trajectory(path: &Path, label: &str) -> Result<TrajectoryDataset, Box<dyn Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Error reading '{}': {}", path.display(), e))?;
    let records = parse_tum_records(&contents, &path.display().to_string())?;
    Ok(TrajectoryDataset::new(label, records))
}

/// Parses TUM rows out of raw file contents.
///
/// Any malformed row (wrong field count or a non-numeric field) aborts the
/// whole parse. `source_name` is only used in error messages.
pub fn parse_tum_records(
    contents: &str,
    source_name: &str,
) -> Result<Vec<TrajectoryRecord>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(contents.as_bytes());

    let mut records: Vec<TrajectoryRecord> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            format!(
                "Error: Row {} of '{}' is unreadable: {}. Aborting.",
                row_index + 1,
                source_name,
                e
            )
        })?;

        // Runs of repeated spaces show up as empty fields. Drop them so the
        // field count reflects actual values.
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != TUM_FIELD_COUNT {
            return Err(format!(
                "Error: Row {} of '{}' has {} fields, expected {} (timestamp tx ty tz qx qy qz qw). Aborting.",
                row_index + 1,
                source_name,
                fields.len(),
                TUM_FIELD_COUNT
            )
            .into());
        }

        let mut values = [0.0f64; TUM_FIELD_COUNT];
        for (field_index, field) in fields.iter().enumerate() {
            values[field_index] = field.parse::<f64>().map_err(|_| {
                format!(
                    "Error: Row {} of '{}' has non-numeric field '{}'. Aborting.",
                    row_index + 1,
                    source_name,
                    field
                )
            })?;
        }

        records.push(TrajectoryRecord {
            timestamp: values[0],
            position: [values[1], values[2], values[3]],
            orientation: [values[4], values[5], values[6], values[7]],
        });
    }

    Ok(records)
}


// src/data_input/tum_loader.rs

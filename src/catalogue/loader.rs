//! Catalogue loader
//!
//! Reads the three catalogue tables from a data directory at startup:
//! - `classification.csv` — one row per classified source
//! - `contributions.csv` — per-source signed feature contributions
//!   (suffixed column names plus auxiliary columns)
//! - `feature_values.csv` — raw feature values (unsuffixed names)
//!
//! Any missing or malformed file aborts initialization; the dashboard
//! never starts on partial data.

use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::explain::naming;
use crate::export::csv;

use super::errors::{CatalogueError, CatalogueResult};
use super::store::{Catalogue, ClassificationTable, FeatureMatrix};

/// File name of the classification table
pub const CLASSIFICATION_FILE: &str = "classification.csv";
/// File name of the contribution matrix
pub const CONTRIBUTIONS_FILE: &str = "contributions.csv";
/// File name of the raw feature-value matrix
pub const FEATURE_VALUES_FILE: &str = "feature_values.csv";

/// Loads catalogue tables from a data directory
pub struct CatalogueLoader {
    data_dir: PathBuf,
}

impl CatalogueLoader {
    /// Creates a loader rooted at the given data directory
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Loads and cross-validates all three tables
    pub fn load(&self) -> CatalogueResult<Catalogue> {
        let classification = self.load_classification()?;
        let contributions = self.load_matrix(CONTRIBUTIONS_FILE, true)?;
        let feature_values = self.load_matrix(FEATURE_VALUES_FILE, false)?;
        Catalogue::new(classification, contributions, feature_values)
    }

    /// Loads the classification table
    pub fn load_classification(&self) -> CatalogueResult<ClassificationTable> {
        let path = self.data_dir.join(CLASSIFICATION_FILE);
        let text = read_file(&path)?;
        let rows = csv::parse_classification(&text)
            .map_err(|e| CatalogueError::malformed(path.display().to_string(), e.line, e.reason))?;
        ClassificationTable::from_rows(rows)
    }

    /// Loads a wide f64 matrix keyed by source identifier.
    ///
    /// With `suffixed` set, every non-auxiliary column must carry the
    /// contribution suffix so the feature-name mapping stays reversible.
    fn load_matrix(&self, file: &str, suffixed: bool) -> CatalogueResult<FeatureMatrix> {
        let path = self.data_dir.join(file);
        let display = path.display().to_string();
        let text = read_file(&path)?;
        let mut lines = text.lines().enumerate();

        let (_, header) = lines
            .next()
            .ok_or_else(|| CatalogueError::malformed(&display, 1, "empty file"))?;
        let mut columns = csv::split_record(header)
            .map_err(|reason| CatalogueError::malformed(&display, 1, reason))?;
        if columns.first().map(String::as_str) != Some("name") {
            return Err(CatalogueError::malformed(
                &display,
                1,
                "first column must be 'name'",
            ));
        }
        columns.remove(0);

        if suffixed {
            for column in &columns {
                if !naming::is_auxiliary(column) && naming::feature_name(column).is_none() {
                    return Err(CatalogueError::malformed(
                        &display,
                        1,
                        format!(
                            "contribution column '{}' lacks the '{}' suffix",
                            column,
                            naming::CONTRIBUTION_SUFFIX
                        ),
                    ));
                }
            }
        }

        let mut rows = Vec::new();
        for (index, line) in lines {
            let line_no = index + 1;
            if line.is_empty() {
                continue;
            }
            let fields = csv::split_record(line)
                .map_err(|reason| CatalogueError::malformed(&display, line_no, reason))?;
            if fields.len() != columns.len() + 1 {
                return Err(CatalogueError::malformed(
                    &display,
                    line_no,
                    format!(
                        "expected {} fields, found {}",
                        columns.len() + 1,
                        fields.len()
                    ),
                ));
            }
            let mut values = Vec::with_capacity(columns.len());
            for field in &fields[1..] {
                let value = field.parse::<f64>().map_err(|_| {
                    CatalogueError::malformed(
                        &display,
                        line_no,
                        format!("'{}' is not a number", field),
                    )
                })?;
                values.push(value);
            }
            rows.push((fields[0].clone(), values));
        }

        FeatureMatrix::new(columns, rows)
    }
}

fn read_file(path: &Path) -> CatalogueResult<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogueError::MissingFile(path.display().to_string()),
        _ => CatalogueError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

//! In-memory catalogue tables
//!
//! Three read-only tables loaded once at session start:
//! - the classification table (one `SourceRecord` per source, ordered),
//! - the contribution matrix (per-source signed feature contributions),
//! - the raw feature-value matrix (same row-key domain, unsuffixed names).
//!
//! Only derived views mutate after load; these tables never do.

use std::collections::HashMap;

use super::errors::{CatalogueError, CatalogueResult};
use super::types::SourceRecord;

/// Ordered classification table with identifier lookup
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    rows: Vec<SourceRecord>,
    index: HashMap<String, usize>,
}

impl ClassificationTable {
    /// Builds a table from rows, preserving their order.
    ///
    /// Duplicate identifiers are rejected.
    pub fn from_rows(rows: Vec<SourceRecord>) -> CatalogueResult<Self> {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if index.insert(row.name.clone(), position).is_some() {
                return Err(CatalogueError::DuplicateSource(row.name.clone()));
            }
        }
        Ok(Self { rows, index })
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no sources
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in original catalogue order
    pub fn rows(&self) -> &[SourceRecord] {
        &self.rows
    }

    /// Looks up a source by identifier
    pub fn get(&self, name: &str) -> Option<&SourceRecord> {
        self.index.get(name).map(|&i| &self.rows[i])
    }

    /// True when the identifier exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

/// Row-keyed wide matrix of f64 values.
///
/// Used for both the contribution table (suffixed column names plus
/// auxiliary columns) and the raw feature-value table (unsuffixed names).
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    row_names: Vec<String>,
    row_index: HashMap<String, usize>,
    values: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Builds a matrix from column names and (row name, values) pairs.
    ///
    /// Every row must have exactly one value per column; duplicate row
    /// keys are rejected.
    pub fn new(columns: Vec<String>, rows: Vec<(String, Vec<f64>)>) -> CatalogueResult<Self> {
        let mut column_index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if column_index.insert(column.clone(), position).is_some() {
                return Err(CatalogueError::Inconsistent(format!(
                    "duplicate column '{}'",
                    column
                )));
            }
        }

        let mut row_names = Vec::with_capacity(rows.len());
        let mut row_index = HashMap::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());
        for (name, row) in rows {
            if row.len() != columns.len() {
                return Err(CatalogueError::Inconsistent(format!(
                    "row '{}' has {} values, expected {}",
                    name,
                    row.len(),
                    columns.len()
                )));
            }
            if row_index.insert(name.clone(), row_names.len()).is_some() {
                return Err(CatalogueError::DuplicateSource(name));
            }
            row_names.push(name);
            values.push(row);
        }

        Ok(Self {
            columns,
            column_index,
            row_names,
            row_index,
            values,
        })
    }

    /// Column names in load order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row keys in load order
    pub fn row_names(&self) -> &[String] {
        &self.row_names
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.row_names.len()
    }

    /// True when the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.row_names.is_empty()
    }

    /// Full value row for a source
    pub fn row(&self, name: &str) -> Option<&[f64]> {
        self.row_index.get(name).map(|&i| self.values[i].as_slice())
    }

    /// Single cell lookup
    pub fn value(&self, name: &str, column: &str) -> Option<f64> {
        let row = self.row_index.get(name)?;
        let col = self.column_index.get(column)?;
        Some(self.values[*row][*col])
    }

    /// True when the source has a row
    pub fn contains_row(&self, name: &str) -> bool {
        self.row_index.contains_key(name)
    }

    /// True when the column exists
    pub fn contains_column(&self, column: &str) -> bool {
        self.column_index.contains_key(column)
    }
}

/// The full immutable catalogue shared by all sessions
#[derive(Debug, Clone)]
pub struct Catalogue {
    classification: ClassificationTable,
    contributions: FeatureMatrix,
    feature_values: FeatureMatrix,
}

impl Catalogue {
    /// Bundles the three tables, checking cross-table consistency:
    /// contribution rows must name known sources, and every source flagged
    /// with an explanation must actually have a contribution row.
    pub fn new(
        classification: ClassificationTable,
        contributions: FeatureMatrix,
        feature_values: FeatureMatrix,
    ) -> CatalogueResult<Self> {
        for name in contributions.row_names() {
            if !classification.contains(name) {
                return Err(CatalogueError::Inconsistent(format!(
                    "contribution row '{}' not in classification table",
                    name
                )));
            }
        }
        for record in classification.rows() {
            if record.has_explanation && !contributions.contains_row(&record.name) {
                return Err(CatalogueError::Inconsistent(format!(
                    "source '{}' flagged with explanation but has no contribution row",
                    record.name
                )));
            }
        }
        Ok(Self {
            classification,
            contributions,
            feature_values,
        })
    }

    /// Classification table
    pub fn classification(&self) -> &ClassificationTable {
        &self.classification
    }

    /// Per-source contribution matrix
    pub fn contributions(&self) -> &FeatureMatrix {
        &self.contributions
    }

    /// Raw feature-value matrix
    pub fn feature_values(&self) -> &FeatureMatrix {
        &self.feature_values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::types::SourceClass;

    fn record(name: &str, has_explanation: bool) -> SourceRecord {
        SourceRecord {
            name: name.to_string(),
            ra: 120.0,
            dec: 30.0,
            class1: SourceClass::Star,
            cmp1: 0.9,
            class2: SourceClass::Agn,
            cmp2: 0.05,
            has_explanation,
        }
    }

    #[test]
    fn test_table_preserves_order_and_lookup() {
        let table = ClassificationTable::from_rows(vec![
            record("b", false),
            record("a", false),
            record("c", false),
        ])
        .unwrap();
        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert!(table.get("a").is_some());
        assert!(table.get("z").is_none());
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let err =
            ClassificationTable::from_rows(vec![record("a", false), record("a", false)])
                .unwrap_err();
        assert!(matches!(err, CatalogueError::DuplicateSource(_)));
    }

    #[test]
    fn test_matrix_lookup() {
        let matrix = FeatureMatrix::new(
            vec!["x_shap".to_string(), "y_shap".to_string()],
            vec![("a".to_string(), vec![0.5, -0.2])],
        )
        .unwrap();
        assert_eq!(matrix.value("a", "y_shap"), Some(-0.2));
        assert_eq!(matrix.row("a"), Some(&[0.5, -0.2][..]));
        assert!(matrix.row("b").is_none());
    }

    #[test]
    fn test_matrix_rejects_ragged_row() {
        let err = FeatureMatrix::new(
            vec!["x_shap".to_string()],
            vec![("a".to_string(), vec![0.5, 1.0])],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogueError::Inconsistent(_)));
    }

    #[test]
    fn test_catalogue_rejects_orphan_contribution_row() {
        let table = ClassificationTable::from_rows(vec![record("a", false)]).unwrap();
        let contributions = FeatureMatrix::new(
            vec!["x_shap".to_string()],
            vec![("ghost".to_string(), vec![0.1])],
        )
        .unwrap();
        let values = FeatureMatrix::new(vec!["x".to_string()], vec![]).unwrap();
        let err = Catalogue::new(table, contributions, values).unwrap_err();
        assert!(matches!(err, CatalogueError::Inconsistent(_)));
    }

    #[test]
    fn test_catalogue_rejects_missing_explanation_row() {
        let table = ClassificationTable::from_rows(vec![record("a", true)]).unwrap();
        let contributions = FeatureMatrix::new(vec!["x_shap".to_string()], vec![]).unwrap();
        let values = FeatureMatrix::new(vec!["x".to_string()], vec![]).unwrap();
        let err = Catalogue::new(table, contributions, values).unwrap_err();
        assert!(matches!(err, CatalogueError::Inconsistent(_)));
    }
}

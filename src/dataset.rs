//! Loading the labeled health dataset and viewing subsets of it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::{Error, ResourceError, Result};
use crate::record::{FEATURE_NAMES, LabeledRecord, N_FEATURES, OUTCOME_COLUMN, Outcome, Record};

/// A raw CSV row, matched to columns by header name.
#[derive(Debug, Deserialize)]
struct DiabetesRow {
    #[serde(rename = "Pregnancies")]
    pregnancies: f64,
    #[serde(rename = "Glucose")]
    glucose: f64,
    #[serde(rename = "BloodPressure")]
    blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    skin_thickness: f64,
    #[serde(rename = "Insulin")]
    insulin: f64,
    #[serde(rename = "BMI")]
    bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    diabetes_pedigree: f64,
    #[serde(rename = "Age")]
    age: f64,
    #[serde(rename = "Outcome")]
    outcome: u8,
}

impl DiabetesRow {
    fn into_labeled(self, row: usize) -> std::result::Result<LabeledRecord, ResourceError> {
        let invalid = |reason: String| ResourceError::InvalidRow { row, reason };
        let record = Record::from_features(&[
            self.pregnancies,
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.diabetes_pedigree,
            self.age,
        ])
        .map_err(|e| invalid(e.to_string()))?;
        let outcome = Outcome::from_label(self.outcome as usize)
            .ok_or_else(|| invalid(format!("outcome must be 0 or 1, got {}", self.outcome)))?;
        Ok(LabeledRecord { record, outcome })
    }
}

/// The full dataset, read-only after load.
#[derive(Debug, Clone, Default)]
pub struct LabeledTable {
    rows: Vec<LabeledRecord>,
}

/// Reads the dataset at `path`.
pub fn load_dataset(path: &Path) -> Result<LabeledTable> {
    let file = File::open(path).map_err(|source| ResourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = LabeledTable::from_reader(BufReader::new(file))?;
    info!("loaded {} labeled rows from {}", table.len(), path.display());
    Ok(table)
}

impl LabeledTable {
    pub fn from_rows(rows: Vec<LabeledRecord>) -> Self {
        LabeledTable { rows }
    }

    /// Parses CSV with a header row. Every feature column and the outcome
    /// column must be present; column order and extra columns don't matter.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr.headers().map_err(ResourceError::Csv)?.clone();
        for column in FEATURE_NAMES.iter().chain(std::iter::once(&OUTCOME_COLUMN)) {
            if !headers.iter().any(|h| h == *column) {
                return Err(ResourceError::MissingColumn(*column).into());
            }
        }

        let mut rows = vec![];
        for (i, result) in rdr.deserialize::<DiabetesRow>().enumerate() {
            let row = i + 1;
            let parsed = result.map_err(|e| ResourceError::InvalidRow {
                row,
                reason: e.to_string(),
            })?;
            rows.push(parsed.into_labeled(row)?);
        }

        Ok(LabeledTable { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[LabeledRecord] {
        &self.rows
    }

    /// A view over the given row indices.
    pub fn subset(&self, indices: Vec<usize>) -> Result<Subset<'_>> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.rows.len()) {
            return Err(Error::InvalidParameter(format!(
                "row index {bad} out of bounds for table of {} rows",
                self.rows.len()
            )));
        }
        Ok(Subset {
            table: self,
            indices,
        })
    }

    /// Deterministic table of `n` rows labeled by `glucose + 2 * bmi > 200`,
    /// for tests and benchmarks.
    #[doc(hidden)]
    pub fn synthetic(n: usize) -> Self {
        let rows = (0..n)
            .filter_map(|i| {
                let glucose = 70 + (i * 37) % 130;
                let bmi = 18.0 + ((i * 29) % 250) as f64 / 10.0;
                let values = [
                    (i % 12) as f64,
                    glucose as f64,
                    (50 + (i * 13) % 50) as f64,
                    (10 + (i * 7) % 40) as f64,
                    ((i * 53) % 300) as f64,
                    bmi,
                    ((10 + (i * 17) % 200) as f64) / 100.0,
                    (21 + (i * 11) % 60) as f64,
                ];
                let outcome = if glucose as f64 + 2.0 * bmi > 200.0 {
                    Outcome::Diabetic
                } else {
                    Outcome::NonDiabetic
                };
                Record::from_features(&values)
                    .ok()
                    .map(|record| LabeledRecord { record, outcome })
            })
            .collect();
        LabeledTable { rows }
    }

    /// A view over every row, in source order.
    pub fn view(&self) -> Subset<'_> {
        Subset {
            table: self,
            indices: (0..self.rows.len()).collect(),
        }
    }
}

/// A selection of rows from a [`LabeledTable`], e.g. a train or test set.
#[derive(Debug, Clone)]
pub struct Subset<'a> {
    table: &'a LabeledTable,
    indices: Vec<usize>,
}

impl<'a> Subset<'a> {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a LabeledRecord> + '_ {
        let table = self.table;
        self.indices.iter().map(move |&i| &table.rows[i])
    }

    /// Feature matrix, one row per selected record.
    pub fn records(&self) -> Array2<f64> {
        let mut x = Array2::zeros((self.len(), N_FEATURES));
        for (mut row, labeled) in x.rows_mut().into_iter().zip(self.iter()) {
            for (cell, value) in row.iter_mut().zip(labeled.record.features()) {
                *cell = value;
            }
        }
        x
    }

    pub fn targets(&self) -> Array1<usize> {
        self.iter().map(|r| r.outcome.label()).collect()
    }

    /// Row counts per outcome, indexed by label.
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for r in self.iter() {
            counts[r.outcome.label()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,DiabetesPedigreeFunction,Age,Outcome\n";

    #[test]
    fn parses_rows_in_source_order() {
        let csv = format!(
            "{HEADER}6,148,72,35,0,33.6,0.627,50,1\n1,85,66,29,0,26.6,0.351,31,0\n8,183,64,0,0,23.3,0.672,32,1\n"
        );
        let table = LabeledTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[0].record.glucose(), 148);
        assert_eq!(table.rows()[0].outcome, Outcome::Diabetic);
        assert_eq!(table.rows()[1].record.bmi(), 26.6);
        assert_eq!(table.rows()[1].outcome, Outcome::NonDiabetic);
        assert_eq!(table.rows()[2].record.age(), 32);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "Outcome,Age,DiabetesPedigreeFunction,BMI,Insulin,SkinThickness,BloodPressure,Glucose,Pregnancies\n\
                   1,50,0.627,33.6,0,35,72,148,6\n";
        let table = LabeledTable::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            table.rows()[0].record.features(),
            [6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0]
        );
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Pregnancies,Glucose,BloodPressure,SkinThickness,Insulin,BMI,Age,Outcome\n1,2,3,4,5,6.0,30,0\n";
        let err = LabeledTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::MissingColumn("DiabetesPedigreeFunction"))
        ));
    }

    #[test]
    fn bad_rows_name_their_position() {
        let csv = format!("{HEADER}6,148,72,35,0,33.6,0.627,50,1\n1,abc,66,29,0,26.6,0.351,31,0\n");
        let err = LabeledTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::InvalidRow { row: 2, .. })
        ));

        let csv = format!("{HEADER}6,148,72,35,0,33.6,0.627,50,3\n");
        let err = LabeledTable::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            Error::Resource(ResourceError::InvalidRow { row: 1, reason }) => {
                assert!(reason.contains("outcome must be 0 or 1"), "{reason}")
            }
            other => panic!("unexpected error: {other}"),
        }

        let csv = format!("{HEADER}6,148,72,35,0,-1.0,0.627,50,1\n");
        let err = LabeledTable::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Resource(ResourceError::InvalidRow { row: 1, .. })
        ));
    }

    #[test]
    fn missing_file_is_resource_error() {
        let err = load_dataset(Path::new("/nonexistent/diabetes.csv")).unwrap_err();
        assert!(matches!(err, Error::Resource(ResourceError::Open { .. })));
    }

    #[test]
    fn subset_materialises_matrix_and_labels() {
        let table = LabeledTable::synthetic(10);
        let subset = table.subset(vec![3, 7]).unwrap();
        let x = subset.records();
        assert_eq!(x.dim(), (2, N_FEATURES));
        assert_eq!(x.row(1).to_vec(), table.rows()[7].record.features().to_vec());
        assert_eq!(subset.targets().len(), 2);

        assert!(table.subset(vec![10]).is_err());
        assert_eq!(table.view().len(), 10);
    }

    #[test]
    fn synthetic_table_has_both_classes() {
        let counts = LabeledTable::synthetic(768).view().class_counts();
        assert!(counts[0] > 100 && counts[1] > 100, "{counts:?}");
    }
}

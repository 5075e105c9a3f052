//! The eight-attribute health record and its binary outcome label.

use crate::error::{Error, Result};

/// Number of attributes in a [`Record`].
pub const N_FEATURES: usize = 8;

/// Dataset column names, in [`Record::features`] order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

/// Column holding the label.
pub const OUTCOME_COLUMN: &str = "Outcome";

// Attributes stored as whole numbers.
const INTEGRAL: [bool; N_FEATURES] = [true, true, true, true, true, false, false, true];

/// One subject's health attributes.
///
/// Only constructed through [`Record::from_features`], so every value is
/// finite, non-negative and integral where the attribute is a count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pregnancies: u32,
    glucose: u32,
    blood_pressure: u32,
    skin_thickness: u32,
    insulin: u32,
    bmi: f64,
    diabetes_pedigree: f64,
    age: u32,
}

impl Record {
    /// Builds a record from raw values in [`FEATURE_NAMES`] order.
    pub fn from_features(values: &[f64]) -> Result<Self> {
        if values.len() != N_FEATURES {
            return Err(Error::Schema {
                expected: N_FEATURES,
                found: values.len(),
            });
        }

        for (i, &value) in values.iter().enumerate() {
            let integral_ok = !INTEGRAL[i] || value.fract() == 0.0;
            if !value.is_finite() || value < 0.0 || !integral_ok || value > u32::MAX as f64 {
                return Err(Error::InvalidAttribute {
                    name: FEATURE_NAMES[i],
                    value,
                });
            }
        }

        Ok(Record {
            pregnancies: values[0] as u32,
            glucose: values[1] as u32,
            blood_pressure: values[2] as u32,
            skin_thickness: values[3] as u32,
            insulin: values[4] as u32,
            bmi: values[5],
            diabetes_pedigree: values[6],
            age: values[7] as u32,
        })
    }

    /// Values in [`FEATURE_NAMES`] order, as fed to the classifier.
    pub fn features(&self) -> [f64; N_FEATURES] {
        [
            self.pregnancies as f64,
            self.glucose as f64,
            self.blood_pressure as f64,
            self.skin_thickness as f64,
            self.insulin as f64,
            self.bmi,
            self.diabetes_pedigree,
            self.age as f64,
        ]
    }

    pub fn pregnancies(&self) -> u32 {
        self.pregnancies
    }

    pub fn glucose(&self) -> u32 {
        self.glucose
    }

    pub fn blood_pressure(&self) -> u32 {
        self.blood_pressure
    }

    pub fn skin_thickness(&self) -> u32 {
        self.skin_thickness
    }

    pub fn insulin(&self) -> u32 {
        self.insulin
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn diabetes_pedigree(&self) -> f64 {
        self.diabetes_pedigree
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Default for Record {
    /// The operator form's initial values.
    fn default() -> Self {
        Record {
            pregnancies: 3,
            glucose: 120,
            blood_pressure: 70,
            skin_thickness: 20,
            insulin: 79,
            bmi: 20.0,
            diabetes_pedigree: 0.47,
            age: 33,
        }
    }
}

/// Binary diabetes label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    NonDiabetic = 0,
    Diabetic = 1,
}

impl Outcome {
    pub fn from_label(label: usize) -> Option<Self> {
        match label {
            0 => Some(Outcome::NonDiabetic),
            1 => Some(Outcome::Diabetic),
            _ => None,
        }
    }

    pub fn label(self) -> usize {
        self as usize
    }
}

/// A dataset row: a record and its known outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledRecord {
    pub record: Record,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_form_defaults() {
        let r = Record::default();
        assert_eq!(r.features(), [3.0, 120.0, 70.0, 20.0, 79.0, 20.0, 0.47, 33.0]);
    }

    #[test]
    fn from_features_round_trips_values() {
        let values = [6.0, 148.0, 72.0, 35.0, 0.0, 33.6, 0.627, 50.0];
        let r = Record::from_features(&values).unwrap();
        assert_eq!(r.glucose(), 148);
        assert_eq!(r.bmi(), 33.6);
        assert_eq!(r.features(), values);
    }

    #[test]
    fn wrong_length_is_schema_error() {
        let err = Record::from_features(&[1.0; 7]).unwrap_err();
        assert!(matches!(err, Error::Schema { expected: 8, found: 7 }));

        let err = Record::from_features(&[1.0; 9]).unwrap_err();
        assert!(matches!(err, Error::Schema { expected: 8, found: 9 }));
    }

    #[test]
    fn rejects_negative_fractional_and_nan() {
        let mut values = Record::default().features();
        values[0] = -1.0;
        assert!(matches!(
            Record::from_features(&values),
            Err(Error::InvalidAttribute { name: "Pregnancies", .. })
        ));

        let mut values = Record::default().features();
        values[7] = 33.5;
        assert!(matches!(
            Record::from_features(&values),
            Err(Error::InvalidAttribute { name: "Age", .. })
        ));

        let mut values = Record::default().features();
        values[5] = f64::NAN;
        assert!(matches!(
            Record::from_features(&values),
            Err(Error::InvalidAttribute { name: "BMI", .. })
        ));
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::from_label(0), Some(Outcome::NonDiabetic));
        assert_eq!(Outcome::from_label(1), Some(Outcome::Diabetic));
        assert_eq!(Outcome::from_label(2), None);
        assert_eq!(Outcome::Diabetic.label(), 1);
    }
}

//! Bounded numeric entry of a single [`Record`] by an operator.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::{Error, Result};
use crate::record::{FEATURE_NAMES, N_FEATURES, Record};

/// One form field: bounds, initial value and step of an attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Dataset column name.
    pub name: &'static str,
    /// Text shown to the operator.
    pub label: &'static str,
    /// Command-line flag name.
    pub key: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Decimal places shown and kept after snapping to `step`.
    pub precision: usize,
}

/// Form fields, in [`FEATURE_NAMES`] order.
pub const FIELDS: [FieldSpec; N_FEATURES] = [
    FieldSpec {
        name: FEATURE_NAMES[0],
        label: "Pregnancies",
        key: "pregnancies",
        min: 0.0,
        max: 17.0,
        default: 3.0,
        step: 1.0,
        precision: 0,
    },
    FieldSpec {
        name: FEATURE_NAMES[1],
        label: "Glucose Level (mg/dL)",
        key: "glucose",
        min: 0.0,
        max: 200.0,
        default: 120.0,
        step: 1.0,
        precision: 0,
    },
    FieldSpec {
        name: FEATURE_NAMES[2],
        label: "Blood Pressure (mm Hg)",
        key: "blood-pressure",
        min: 0.0,
        max: 122.0,
        default: 70.0,
        step: 1.0,
        precision: 0,
    },
    FieldSpec {
        name: FEATURE_NAMES[3],
        label: "Skin Thickness (mm)",
        key: "skin-thickness",
        min: 0.0,
        max: 100.0,
        default: 20.0,
        step: 1.0,
        precision: 0,
    },
    FieldSpec {
        name: FEATURE_NAMES[4],
        label: "Insulin Level (IU/mL)",
        key: "insulin",
        min: 0.0,
        max: 846.0,
        default: 79.0,
        step: 1.0,
        precision: 0,
    },
    FieldSpec {
        name: FEATURE_NAMES[5],
        label: "BMI (Body Mass Index)",
        key: "bmi",
        min: 0.0,
        max: 67.0,
        default: 20.0,
        step: 0.1,
        precision: 1,
    },
    FieldSpec {
        name: FEATURE_NAMES[6],
        label: "Diabetes Pedigree Function",
        key: "diabetes-pedigree",
        min: 0.0,
        max: 2.4,
        default: 0.47,
        step: 0.01,
        precision: 2,
    },
    FieldSpec {
        name: FEATURE_NAMES[7],
        label: "Age (years)",
        key: "age",
        min: 21.0,
        max: 88.0,
        default: 33.0,
        step: 1.0,
        precision: 0,
    },
];

impl FieldSpec {
    /// Bounds-checks `value` and snaps it onto the step grid.
    pub fn accept(&self, value: f64) -> Result<f64> {
        if !value.is_finite() || value < self.min || value > self.max {
            return Err(Error::OutOfRange {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }

        let steps = ((value - self.min) / self.step).round();
        let scale = 10f64.powi(self.precision as i32);
        let snapped = ((self.min + steps * self.step) * scale).round() / scale;
        Ok(snapped.clamp(self.min, self.max))
    }

    /// Parses operator text. Blank input selects the default.
    pub fn parse(&self, text: &str) -> Result<f64> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(self.default);
        }
        let value: f64 = text.parse().map_err(|_| Error::InvalidInput {
            field: self.name,
            input: text.to_string(),
        })?;
        self.accept(value)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

/// Builds a record from preset values, using defaults for unset fields.
pub fn resolve_presets(presets: &[Option<f64>; N_FEATURES]) -> Result<Record> {
    let mut values = [0.0; N_FEATURES];
    for ((value, field), preset) in values.iter_mut().zip(&FIELDS).zip(presets) {
        *value = match preset {
            Some(v) => field.accept(*v)?,
            None => field.default,
        };
    }
    Record::from_features(&values)
}

/// Prompts for each field over a line-oriented reader and writer.
pub struct InputCollector<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        InputCollector { reader, writer }
    }

    /// Reads one line, `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Writes `text` without a newline and waits for the operator's reply.
    pub fn ask(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.writer, "{text}")?;
        self.writer.flush()?;
        self.read_line()
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Collects a record, prompting only for fields without a preset.
    /// Invalid entries are reported and asked again.
    pub fn collect(&mut self, presets: &[Option<f64>; N_FEATURES]) -> Result<Record> {
        let mut values = [0.0; N_FEATURES];
        for (i, field) in FIELDS.iter().enumerate() {
            values[i] = match presets[i] {
                Some(v) => field.accept(v)?,
                None => self.prompt_field(field)?,
            };
            debug!("{} = {}", field.name, values[i]);
        }
        Record::from_features(&values)
    }

    fn prompt_field(&mut self, field: &FieldSpec) -> Result<f64> {
        loop {
            let prompt = format!(
                "{} [{}-{}, default {}]: ",
                field.label,
                field.format(field.min),
                field.format(field.max),
                field.format(field.default)
            );
            let Some(line) = self.ask(&prompt)? else {
                return Err(Error::InputClosed);
            };
            match field.parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(&format!("⚠️  {e}"))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_defaults_match_default_record() {
        let defaults: Vec<f64> = FIELDS.iter().map(|f| f.default).collect();
        assert_eq!(defaults, Record::default().features().to_vec());
    }

    #[test]
    fn accept_enforces_bounds() {
        let age = &FIELDS[7];
        assert!(matches!(
            age.accept(20.0),
            Err(Error::OutOfRange { field: "Age", .. })
        ));
        assert!(age.accept(89.0).is_err());
        assert_eq!(age.accept(21.0).unwrap(), 21.0);
        assert_eq!(age.accept(88.0).unwrap(), 88.0);
        assert!(FIELDS[1].accept(f64::NAN).is_err());
    }

    #[test]
    fn accept_snaps_to_step() {
        assert_eq!(FIELDS[0].accept(2.6).unwrap(), 3.0);
        assert_eq!(FIELDS[5].accept(33.64).unwrap(), 33.6);
        assert_eq!(FIELDS[6].accept(0.627).unwrap(), 0.63);
        assert_eq!(FIELDS[6].accept(2.4).unwrap(), 2.4);
    }

    #[test]
    fn parse_blank_and_garbage() {
        let bmi = &FIELDS[5];
        assert_eq!(bmi.parse("  ").unwrap(), 20.0);
        assert_eq!(bmi.parse("31.2\n").unwrap(), 31.2);
        assert!(matches!(
            bmi.parse("heavy"),
            Err(Error::InvalidInput { field: "BMI", .. })
        ));
    }

    #[test]
    fn presets_fill_and_default() {
        let mut presets = [None; N_FEATURES];
        presets[1] = Some(150.0);
        let record = resolve_presets(&presets).unwrap();
        assert_eq!(record.glucose(), 150);
        assert_eq!(record.age(), 33);

        presets[7] = Some(10.0);
        assert!(resolve_presets(&presets).is_err());
    }

    #[test]
    fn collector_reprompts_after_bad_entry() {
        let input = "5\n\nabc\n300\n\n\n\n\n\n\n";
        let mut output = Vec::new();
        let record = {
            let mut collector = InputCollector::new(input.as_bytes(), &mut output);
            collector.collect(&[None; N_FEATURES]).unwrap()
        };
        assert_eq!(record.pregnancies(), 5);
        assert_eq!(record.glucose(), 120);
        assert_eq!(record.blood_pressure(), 70);
        assert_eq!(record.skin_thickness(), 20);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("is not a number"));
        assert!(text.contains("must be between 0 and 122"));
    }

    #[test]
    fn collector_skips_preset_fields() {
        let mut presets = [Some(1.0); N_FEATURES];
        presets[7] = None;
        presets[5] = Some(28.3);
        presets[6] = Some(0.2);
        let mut output = Vec::new();
        let record = InputCollector::new("45\n".as_bytes(), &mut output)
            .collect(&presets)
            .unwrap();
        assert_eq!(record.age(), 45);
        assert_eq!(record.bmi(), 28.3);
        assert_eq!(String::from_utf8(output).unwrap().matches("]: ").count(), 1);
    }

    #[test]
    fn collector_reports_end_of_input() {
        let mut output = Vec::new();
        let err = InputCollector::new("1\n".as_bytes(), &mut output)
            .collect(&[None; N_FEATURES])
            .unwrap_err();
        assert!(matches!(err, Error::InputClosed));
    }
}

//! Text rendering of the input summary and the prediction result.

use std::fmt::Write;

use crate::input::FIELDS;
use crate::record::{Outcome, Record};
use crate::session::PredictionResult;

impl PredictionResult {
    pub fn risk_statement(&self) -> &'static str {
        match self.outcome {
            Outcome::NonDiabetic => "You are not diabetic.",
            Outcome::Diabetic => "You are at risk of diabetes.",
        }
    }
}

/// The "Health Data Overview" table for a record.
pub fn summary_table(record: &Record) -> String {
    let width = FIELDS.iter().map(|f| f.label.len()).max().unwrap_or(0);
    let rule = format!("+-{}-+-{}-+", "-".repeat(width), "-".repeat(8));

    let mut out = String::new();
    let _ = writeln!(out, "🔬 Health Data Overview");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "| {:<width$} | {:>8} |", "Field", "Value");
    let _ = writeln!(out, "{rule}");
    for (field, value) in FIELDS.iter().zip(record.features()) {
        let _ = writeln!(out, "| {:<width$} | {:>8} |", field.label, field.format(value));
    }
    let _ = writeln!(out, "{rule}");
    out
}

pub fn render_result(result: &PredictionResult) -> String {
    format!(
        "📋 Prediction Result\n{}\nModel Accuracy: {:.2}%\n",
        result.risk_statement(),
        result.accuracy
    )
}

//! Held-out accuracy of a fitted forest.

use log::info;

use crate::dataset::Subset;
use crate::error::{Error, Result};
use crate::forest::RandomForest;

/// Percentage of `test` rows whose outcome the model predicts correctly.
pub fn accuracy(model: &RandomForest, test: &Subset<'_>) -> Result<f64> {
    if test.is_empty() {
        return Err(Error::EmptySet);
    }

    let predictions = model.predict_batch(test);
    let correct = predictions
        .iter()
        .zip(test.iter())
        .filter(|(predicted, row)| **predicted == row.outcome)
        .count();

    let accuracy = correct as f64 / test.len() as f64 * 100.0;
    info!("accuracy {accuracy:.2}% ({correct}/{} held-out rows)", test.len());
    Ok(accuracy)
}

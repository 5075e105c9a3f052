//! Random forest classifier over the eight health attributes.
//!
//! Training and voting are done by [`linfa_trees::RandomForestParams`]: each
//! tree sees a bootstrap sample of the rows and a random subset of the
//! attributes. This module adds the configuration layer, the degenerate
//! training-set checks and typed [`Outcome`] predictions.

use linfa::prelude::*;
use linfa_trees::RandomForestClassifier;
use log::info;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::dataset::Subset;
use crate::error::{Error, Result};
use crate::record::{N_FEATURES, Outcome, Record};

/// Forest hyper-parameters, as read from the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub n_trees: usize,
    pub max_depth: Option<usize>,
    /// Fraction of the attributes each tree sees, in (0, 1].
    pub feature_subsample: f32,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        ForestConfig {
            n_trees: 100,
            max_depth: None,
            feature_subsample: 0.7,
            seed: 0,
        }
    }
}

impl ForestConfig {
    pub fn new(n_trees: usize) -> Self {
        ForestConfig {
            n_trees,
            ..Default::default()
        }
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn feature_subsample(mut self, fraction: f32) -> Self {
        self.feature_subsample = fraction;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(Error::InvalidParameter("n_trees must be at least 1".into()));
        }
        if !(self.feature_subsample > 0.0 && self.feature_subsample <= 1.0) {
            return Err(Error::InvalidParameter(format!(
                "feature_subsample must be in (0, 1], got {}",
                self.feature_subsample
            )));
        }
        Ok(())
    }

    /// Trains the ensemble. Fails on an empty training set or one that
    /// holds a single outcome class.
    pub fn fit(&self, train: &Subset<'_>) -> Result<RandomForest> {
        self.validate()?;

        if train.is_empty() {
            return Err(Error::Training("training set is empty".into()));
        }
        let counts = train.class_counts();
        if counts.contains(&0) {
            return Err(Error::Training(format!(
                "training set has a single class (counts {counts:?})"
            )));
        }

        let dataset = Dataset::new(train.records(), train.targets());
        let model = linfa_trees::RandomForestParams::new(self.n_trees)
            .max_depth(self.max_depth)
            .feature_subsample(self.feature_subsample)
            .seed(self.seed)
            .fit(&dataset)
            .map_err(|e| Error::Training(e.to_string()))?;

        info!(
            "fitted random forest: {} trees on {} training rows",
            self.n_trees,
            train.len()
        );
        Ok(RandomForest {
            model,
            n_trees: self.n_trees,
        })
    }
}

/// A fitted ensemble. Immutable once trained.
#[derive(Debug, Clone)]
pub struct RandomForest {
    model: RandomForestClassifier<f64>,
    n_trees: usize,
}

impl RandomForest {
    pub fn n_trees(&self) -> usize {
        self.n_trees
    }

    pub fn predict(&self, record: &Record) -> Outcome {
        let features = record.features();
        let x = Array2::from_shape_fn((1, N_FEATURES), |(_, j)| features[j]);
        self.predict_matrix(x)[0]
    }

    /// Predicts from raw attribute values in [`crate::FEATURE_NAMES`] order.
    pub fn predict_features(&self, values: &[f64]) -> Result<Outcome> {
        Ok(self.predict(&Record::from_features(values)?))
    }

    /// Predictions for every record of `subset`, in its order.
    pub fn predict_batch(&self, subset: &Subset<'_>) -> Vec<Outcome> {
        self.predict_matrix(subset.records())
    }

    fn predict_matrix(&self, x: Array2<f64>) -> Vec<Outcome> {
        let labels: Array1<usize> = self.model.predict(x);
        labels
            .iter()
            .map(|&label| Outcome::from_label(label).unwrap_or(Outcome::NonDiabetic))
            .collect()
    }
}

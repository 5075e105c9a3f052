//! The per-run pipeline: load, split, fit and score once, then answer
//! any number of single-record assessments with the same model.

use log::info;

use crate::config::Config;
use crate::dataset::{LabeledTable, load_dataset};
use crate::error::Result;
use crate::evaluate::accuracy;
use crate::forest::RandomForest;
use crate::record::{Outcome, Record};
use crate::split::{Partition, train_test_split};

/// Outcome of one assessment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub outcome: Outcome,
    /// Held-out accuracy of the model, in percent.
    pub accuracy: f64,
}

/// Owns everything a fitted model needs for the rest of the run.
#[derive(Debug)]
pub struct Session {
    table: LabeledTable,
    partition: Partition,
    model: RandomForest,
    accuracy: f64,
}

impl Session {
    /// Loads `config.data_path` and trains on it.
    pub fn start(config: &Config) -> Result<Self> {
        let table = load_dataset(&config.data_path)?;
        Self::from_table(table, config)
    }

    pub fn from_table(table: LabeledTable, config: &Config) -> Result<Self> {
        let partition = train_test_split(&table, config.train_fraction, config.split_seed)?;
        let model = config.forest.fit(&partition.train_set(&table)?)?;
        let accuracy = accuracy(&model, &partition.test_set(&table)?)?;
        info!(
            "session ready: {} train / {} test rows, accuracy {accuracy:.2}%",
            partition.train_indices().len(),
            partition.test_indices().len()
        );
        Ok(Session {
            table,
            partition,
            model,
            accuracy,
        })
    }

    pub fn assess(&self, record: &Record) -> PredictionResult {
        PredictionResult {
            outcome: self.model.predict(record),
            accuracy: self.accuracy,
        }
    }

    pub fn table(&self) -> &LabeledTable {
        &self.table
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn model(&self) -> &RandomForest {
        &self.model
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }
}

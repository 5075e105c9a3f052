//! Seeded train/test partitioning.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::dataset::{LabeledTable, Subset};
use crate::error::{Error, Result};

/// Disjoint train and test row indices covering a whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl Partition {
    pub fn train_indices(&self) -> &[usize] {
        &self.train
    }

    pub fn test_indices(&self) -> &[usize] {
        &self.test
    }

    pub fn train_set<'a>(&self, table: &'a LabeledTable) -> Result<Subset<'a>> {
        table.subset(self.train.clone())
    }

    pub fn test_set<'a>(&self, table: &'a LabeledTable) -> Result<Subset<'a>> {
        table.subset(self.test.clone())
    }
}

/// Shuffles the row indices with a `StdRng` seeded from `seed` and holds out
/// the first `n - floor(train_fraction * n)` of them for testing.
pub fn train_test_split(table: &LabeledTable, train_fraction: f64, seed: u64) -> Result<Partition> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "train fraction must be in (0, 1), got {train_fraction}"
        )));
    }

    let n = table.len();
    let train_size = ((train_fraction * n as f64).floor() as usize).min(n);
    let test_size = n - train_size;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);

    let train = indices.split_off(test_size);
    debug!("split {n} rows into {} train / {} test", train.len(), indices.len());

    Ok(Partition {
        train,
        test: indices,
    })
}

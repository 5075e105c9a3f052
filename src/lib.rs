//! # diabetes-risk 🩺
//!
//! Assess diabetes risk from eight health metrics with a random forest
//! trained on a labeled CSV dataset (the Pima Indians diabetes table layout).
//!
//! Each run loads the dataset, holds out 20% of the rows with a fixed seed,
//! fits a bagged ensemble of [`linfa-trees`](https://crates.io/crates/linfa-trees)
//! decision trees on the rest and reports the held-out accuracy next to every
//! prediction.
//!
//! The dataset itself is not bundled. By default it is read from
//! `data/diabetes.csv`; any CSV with the columns `Pregnancies`, `Glucose`,
//! `BloodPressure`, `SkinThickness`, `Insulin`, `BMI`,
//! `DiabetesPedigreeFunction`, `Age` and `Outcome` can be used instead via
//! the config file or `--data`.
//!
//! ## Features
//! - Header-checked CSV loading into typed [`Record`]s
//! - Seeded, reproducible train/test split
//! - Random forest from `linfa-trees` (bootstrap samples, feature subsampling)
//! - Bounded interactive input with per-field range, default and step
//! - JSON configuration, benchmarkable with [Criterion](https://crates.io/crates/criterion)
//!
//! ## Example
//! ```rust,no_run
//! use diabetes_risk::{Config, Record, Session};
//!
//! let session = Session::start(&Config::default())?;
//! let result = session.assess(&Record::default());
//! println!("{} (accuracy {:.2}%)", result.risk_statement(), result.accuracy);
//! # Ok::<(), diabetes_risk::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod forest;
pub mod input;
pub mod present;
pub mod record;
pub mod session;
pub mod split;

pub use config::{Config, load_config};
pub use dataset::{LabeledTable, Subset, load_dataset};
pub use error::{Error, ResourceError, Result};
pub use evaluate::accuracy;
pub use forest::{ForestConfig, RandomForest};
pub use input::{FIELDS, FieldSpec, InputCollector, resolve_presets};
pub use present::{render_result, summary_table};
pub use record::{FEATURE_NAMES, LabeledRecord, N_FEATURES, Outcome, Record};
pub use session::{PredictionResult, Session};
pub use split::{Partition, train_test_split};

//! CSV Loader

use crate::DatasetError;
use feature_engine::WorkObservation;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One row of the productivity training CSV.
///
/// Columns are matched by header name; anything else in the file (the
/// exported data carries an `employee_id` column) is ignored, which is
/// what drops the identifier before fitting.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingRecord {
    pub login_time: u32,
    pub logout_time: u32,
    pub total_tasks_completed: u32,
    pub weekly_absences: u32,
    /// Regression target
    pub productivity_score: f64,
}

impl TrainingRecord {
    /// The observation part of the row, target split off
    pub fn observation(&self) -> WorkObservation {
        WorkObservation {
            login_time: self.login_time,
            logout_time: self.logout_time,
            total_tasks_completed: self.total_tasks_completed,
            weekly_absences: self.weekly_absences,
        }
    }
}

/// A loaded training set, already split into features and target
#[derive(Debug, Clone)]
pub struct TrainingSet {
    pub observations: Vec<WorkObservation>,
    pub targets: Vec<f64>,
}

impl TrainingSet {
    /// Load a training set from a CSV file on disk
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let set = Self::from_reader(file)?;
        info!(rows = set.len(), path = %path.display(), "loaded training set");
        Ok(set)
    }

    /// Load a training set from any CSV reader
    pub fn from_reader(reader: impl Read) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let mut observations = Vec::new();
        let mut targets = Vec::new();
        for row in csv_reader.deserialize::<TrainingRecord>() {
            let record = row?;
            observations.push(record.observation());
            targets.push(record.productivity_score);
        }

        if observations.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self {
            observations,
            targets,
        })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the set holds no rows
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

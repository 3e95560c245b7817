//! Versioned JSON snapshot envelope for the value model

use serde::{Deserialize, Serialize};

use crate::{Error, Result, model::ValueModel};

/// What a snapshot was trained on, for reporting and reproducibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingMetadata {
    pub games_trained: u64,
    pub opponents: Vec<String>,
    pub seed: Option<u64>,
}

/// A value model frozen for storage, wrapped with a format version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedModel {
    pub version: u32,
    model: ValueModel,
    pub metadata: TrainingMetadata,
}

impl SavedModel {
    pub const VERSION: u32 = 1;

    pub fn new(model: &ValueModel, metadata: TrainingMetadata) -> Self {
        SavedModel {
            version: Self::VERSION,
            model: model.clone(),
            metadata,
        }
    }

    /// Unwrap the stored model.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedVersion`] when the snapshot was written by a
    /// different format version.
    pub fn into_model(self) -> Result<ValueModel> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                got: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(self.model)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

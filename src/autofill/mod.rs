//! Autofill suggestion model.
//!
//! A small classifier over three categorical inputs (service, location,
//! time slot). Each input has its own embedding table; the three
//! embeddings are concatenated and fed through
//! `Linear -> ReLU -> Linear`, producing one raw score per output class.
//!
//! The model is independent of the worker directory and runs in its own
//! binary (`wakafix-autofill`).

pub mod hub;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutofillError {
    #[error("{field} index {index} is outside vocabulary of size {size}")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        size: usize,
    },
    #[error("weight shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("failed to read weights: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse weights: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Narrow inference interface: categorical inputs in, score vector out.
pub trait Predictor {
    fn predict(
        &self,
        service: usize,
        location: usize,
        time: usize,
    ) -> Result<Vec<f32>, AutofillError>;
}

/// Layer sizes. The defaults match the published weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDims {
    pub n_service: usize,
    pub n_location: usize,
    pub n_time: usize,
    pub embedding_dim: usize,
    pub hidden_size: usize,
    pub output_size: usize,
}

impl Default for ModelDims {
    fn default() -> Self {
        Self {
            n_service: 100,
            n_location: 50,
            n_time: 24,
            embedding_dim: 16,
            hidden_size: 64,
            output_size: 10,
        }
    }
}

/// Dense layer in `[out][in]` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearWeights {
    pub weight: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
}

/// On-disk weights document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutofillWeights {
    #[serde(default)]
    pub dims: ModelDims,
    pub service_embedding: Vec<Vec<f32>>,
    pub location_embedding: Vec<Vec<f32>>,
    pub time_embedding: Vec<Vec<f32>>,
    pub hidden: LinearWeights,
    pub output: LinearWeights,
}

#[derive(Debug, Clone)]
struct Embedding {
    field: &'static str,
    rows: Vec<Vec<f32>>,
}

impl Embedding {
    fn new(
        field: &'static str,
        rows: Vec<Vec<f32>>,
        vocab: usize,
        dim: usize,
    ) -> Result<Self, AutofillError> {
        if rows.len() != vocab {
            return Err(AutofillError::ShapeMismatch(format!(
                "{field} embedding has {} rows, expected {vocab}",
                rows.len()
            )));
        }
        if let Some(row) = rows.iter().find(|r| r.len() != dim) {
            return Err(AutofillError::ShapeMismatch(format!(
                "{field} embedding row has width {}, expected {dim}",
                row.len()
            )));
        }
        Ok(Self { field, rows })
    }

    fn lookup(&self, index: usize) -> Result<&[f32], AutofillError> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(AutofillError::IndexOutOfRange {
                field: self.field,
                index,
                size: self.rows.len(),
            })
    }
}

#[derive(Debug, Clone)]
struct Linear {
    weight: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl Linear {
    fn new(
        name: &str,
        w: LinearWeights,
        inputs: usize,
        outputs: usize,
    ) -> Result<Self, AutofillError> {
        if w.weight.len() != outputs || w.bias.len() != outputs {
            return Err(AutofillError::ShapeMismatch(format!(
                "{name} layer has {} rows and {} biases, expected {outputs}",
                w.weight.len(),
                w.bias.len()
            )));
        }
        if let Some(row) = w.weight.iter().find(|r| r.len() != inputs) {
            return Err(AutofillError::ShapeMismatch(format!(
                "{name} layer row has width {}, expected {inputs}",
                row.len()
            )));
        }
        Ok(Self {
            weight: w.weight,
            bias: w.bias,
        })
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        self.weight
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect()
    }
}

/// Loaded model, ready for inference.
#[derive(Debug, Clone)]
pub struct AutofillModel {
    dims: ModelDims,
    service: Embedding,
    location: Embedding,
    time: Embedding,
    hidden: Linear,
    output: Linear,
}

impl AutofillModel {
    /// Validate every tensor shape against `weights.dims`.
    pub fn from_weights(weights: AutofillWeights) -> Result<Self, AutofillError> {
        let dims = weights.dims;
        let d = dims.embedding_dim;
        Ok(Self {
            dims,
            service: Embedding::new("service", weights.service_embedding, dims.n_service, d)?,
            location: Embedding::new("location", weights.location_embedding, dims.n_location, d)?,
            time: Embedding::new("time", weights.time_embedding, dims.n_time, d)?,
            hidden: Linear::new("hidden", weights.hidden, 3 * d, dims.hidden_size)?,
            output: Linear::new("output", weights.output, dims.hidden_size, dims.output_size)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, AutofillError> {
        let data = std::fs::read_to_string(path)?;
        let weights: AutofillWeights = serde_json::from_str(&data)?;
        Self::from_weights(weights)
    }

    pub fn dims(&self) -> &ModelDims {
        &self.dims
    }

    pub fn forward(
        &self,
        service: usize,
        location: usize,
        time: usize,
    ) -> Result<Vec<f32>, AutofillError> {
        let mut input = Vec::with_capacity(3 * self.dims.embedding_dim);
        input.extend_from_slice(self.service.lookup(service)?);
        input.extend_from_slice(self.location.lookup(location)?);
        input.extend_from_slice(self.time.lookup(time)?);

        let hidden: Vec<f32> = self
            .hidden
            .forward(&input)
            .into_iter()
            .map(|v| v.max(0.0))
            .collect();
        Ok(self.output.forward(&hidden))
    }
}

impl Predictor for AutofillModel {
    fn predict(
        &self,
        service: usize,
        location: usize,
        time: usize,
    ) -> Result<Vec<f32>, AutofillError> {
        self.forward(service, location, time)
    }
}

/// Index of the highest score; `None` for an empty vector. On ties the
/// lowest index wins.
pub fn best_class(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .reduce(|best, next| {
            if next.1.total_cmp(best.1).is_gt() {
                next
            } else {
                best
            }
        })
        .map(|(i, _)| i)
}

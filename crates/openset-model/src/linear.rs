//! Reference model: a seeded linear classifier over flattened features.
//!
//! Production identification networks implement [`Model`] behind their own
//! crates; this one exists so the pipeline, trainer, and tests have a
//! concrete, deterministic model to run end to end.

use ndarray::{Array1, Array2, ArrayView2, Axis, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use openset_core::errors::ModelError;

use crate::model::{Model, TrainableModel};
use crate::tensor::ParamMap;

const WEIGHT_KEY: &str = "linear.weight";
const BIAS_KEY: &str = "linear.bias";

/// Single fully-connected layer: `logits = images · Wᵀ + b`.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    /// `[classes, features]`
    weight: Array2<f32>,
    /// `[classes]`
    bias: Array1<f32>,
}

impl LinearClassifier {
    /// Seeded uniform init scaled by `1/sqrt(features)`.
    pub fn new(num_classes: usize, feature_len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let scale = 1.0 / (feature_len.max(1) as f32).sqrt();
        let weight =
            Array2::from_shape_fn((num_classes, feature_len), |_| rng.gen_range(-scale..scale));
        let bias = Array1::zeros(num_classes);
        Self { weight, bias }
    }

    pub fn feature_len(&self) -> usize {
        self.weight.ncols()
    }
}

impl Model for LinearClassifier {
    fn num_classes(&self) -> usize {
        self.weight.nrows()
    }

    fn forward(&self, images: ArrayView2<'_, f32>) -> Result<Array2<f32>, ModelError> {
        if images.ncols() != self.weight.ncols() {
            return Err(ModelError::InputWidthMismatch {
                expected: self.weight.ncols(),
                actual: images.ncols(),
            });
        }
        Ok(images.dot(&self.weight.t()) + &self.bias)
    }

    fn state_dict(&self) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert(WEIGHT_KEY.to_string(), self.weight.clone().into_dyn());
        params.insert(BIAS_KEY.to_string(), self.bias.clone().into_dyn());
        params
    }

    fn load_state_dict(&mut self, params: &ParamMap) -> Result<(), ModelError> {
        let weight = params
            .get(WEIGHT_KEY)
            .ok_or_else(|| ModelError::MissingParameter {
                name: WEIGHT_KEY.to_string(),
            })?;
        let bias = params
            .get(BIAS_KEY)
            .ok_or_else(|| ModelError::MissingParameter {
                name: BIAS_KEY.to_string(),
            })?;

        if weight.shape() != self.weight.shape() {
            return Err(ModelError::ShapeMismatch {
                name: WEIGHT_KEY.to_string(),
                expected: self.weight.shape().to_vec(),
                actual: weight.shape().to_vec(),
            });
        }
        if bias.shape() != self.bias.shape() {
            return Err(ModelError::ShapeMismatch {
                name: BIAS_KEY.to_string(),
                expected: self.bias.shape().to_vec(),
                actual: bias.shape().to_vec(),
            });
        }

        self.weight = weight
            .clone()
            .into_dimensionality::<Ix2>()
            .map_err(|_| ModelError::ShapeMismatch {
                name: WEIGHT_KEY.to_string(),
                expected: self.weight.shape().to_vec(),
                actual: weight.shape().to_vec(),
            })?;
        self.bias = bias
            .clone()
            .into_dimensionality::<Ix1>()
            .map_err(|_| ModelError::ShapeMismatch {
                name: BIAS_KEY.to_string(),
                expected: self.bias.shape().to_vec(),
                actual: bias.shape().to_vec(),
            })?;
        Ok(())
    }
}

impl TrainableModel for LinearClassifier {
    fn backward(
        &self,
        images: ArrayView2<'_, f32>,
        grad_logits: &Array2<f32>,
    ) -> Result<ParamMap, ModelError> {
        if grad_logits.nrows() != images.nrows() || grad_logits.ncols() != self.num_classes() {
            return Err(ModelError::ShapeMismatch {
                name: "grad_logits".to_string(),
                expected: vec![images.nrows(), self.num_classes()],
                actual: grad_logits.shape().to_vec(),
            });
        }

        let d_weight = grad_logits.t().dot(&images);
        let d_bias = grad_logits.sum_axis(Axis(0));

        let mut grads = ParamMap::new();
        grads.insert(WEIGHT_KEY.to_string(), d_weight.into_dyn());
        grads.insert(BIAS_KEY.to_string(), d_bias.into_dyn());
        Ok(grads)
    }
}

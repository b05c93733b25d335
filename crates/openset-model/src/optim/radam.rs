//! Rectified Adam.
//!
//! Adam with a variance-rectification term: while the second-moment
//! estimate is still unreliable (small step counts), updates fall back to
//! plain bias-corrected momentum instead of dividing by a noisy
//! denominator.

use std::collections::BTreeMap;

use ndarray::Zip;

use openset_core::errors::{ModelError, TrainError};

use super::Optimizer;
use crate::tensor::{ParamMap, Tensor};

/// RAdam state. Moment buffers are allocated lazily per parameter name.
pub struct RAdam {
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    weight_decay: f64,
    step: u64,
    m: BTreeMap<String, Tensor>,
    v: BTreeMap<String, Tensor>,
}

impl RAdam {
    /// Defaults matching the calibration runs: betas (0.9, 0.999), eps 1e-8.
    pub fn new(lr: f64, weight_decay: f64) -> Self {
        Self {
            lr,
            beta1: 0.9,
            beta2: 0.999,
            eps: 1e-8,
            weight_decay,
            step: 0,
            m: BTreeMap::new(),
            v: BTreeMap::new(),
        }
    }
}

impl Optimizer for RAdam {
    fn step(&mut self, params: &mut ParamMap, grads: &ParamMap) -> Result<(), TrainError> {
        self.step += 1;
        let t = self.step as f64;

        let rho_inf = 2.0 / (1.0 - self.beta2) - 1.0;
        let beta2_t = self.beta2.powf(t);
        let rho_t = rho_inf - 2.0 * t * beta2_t / (1.0 - beta2_t);
        let bias1 = (1.0 - self.beta1.powf(t)) as f32;
        let bias2 = (1.0 - beta2_t) as f32;

        let lr = self.lr as f32;
        let b1 = self.beta1 as f32;
        let b2 = self.beta2 as f32;
        let eps = self.eps as f32;
        let wd = self.weight_decay as f32;

        for (name, param) in params.iter_mut() {
            let grad = grads
                .get(name)
                .ok_or_else(|| TrainError::MissingGradient { name: name.clone() })?;
            if grad.shape() != param.shape() {
                return Err(TrainError::Model(ModelError::ShapeMismatch {
                    name: name.clone(),
                    expected: param.shape().to_vec(),
                    actual: grad.shape().to_vec(),
                }));
            }

            let m = self
                .m
                .entry(name.clone())
                .or_insert_with(|| Tensor::zeros(param.raw_dim()));
            let v = self
                .v
                .entry(name.clone())
                .or_insert_with(|| Tensor::zeros(param.raw_dim()));

            // Decoupled L2: weight decay folds into the gradient.
            Zip::from(&mut *m)
                .and(grad)
                .and(&*param)
                .for_each(|m, &g, &p| {
                    let g = g + wd * p;
                    *m = b1 * *m + (1.0 - b1) * g;
                });
            Zip::from(&mut *v)
                .and(grad)
                .and(&*param)
                .for_each(|v, &g, &p| {
                    let g = g + wd * p;
                    *v = b2 * *v + (1.0 - b2) * g * g;
                });

            if rho_t > 4.0 {
                // Variance is tractable: rectified adaptive step.
                let r_t = (((rho_t - 4.0) * (rho_t - 2.0) * rho_inf)
                    / ((rho_inf - 4.0) * (rho_inf - 2.0) * rho_t))
                    .sqrt() as f32;
                Zip::from(&mut *param)
                    .and(&*m)
                    .and(&*v)
                    .for_each(|p, &m, &v| {
                        let m_hat = m / bias1;
                        let v_hat = (v / bias2).sqrt() + eps;
                        *p -= lr * r_t * m_hat / v_hat;
                    });
            } else {
                // Warmup: bias-corrected momentum only.
                Zip::from(&mut *param).and(&*m).for_each(|p, &m| {
                    *p -= lr * (m / bias1);
                });
            }
        }

        Ok(())
    }
}

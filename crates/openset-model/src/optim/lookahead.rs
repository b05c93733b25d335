//! Lookahead wrapper.
//!
//! Keeps a slow-moving copy of the parameters; every `k` inner steps the
//! slow copy is pulled toward the fast trajectory by `alpha` and the fast
//! weights are reset onto it. Stabilizes training variance without changing
//! the asymptotic per-step direction.

use ndarray::Zip;

use openset_core::errors::TrainError;

use super::Optimizer;
use crate::tensor::ParamMap;

/// Lookahead around any inner optimizer.
pub struct Lookahead<O> {
    inner: O,
    k: usize,
    alpha: f32,
    steps: usize,
    slow: Option<ParamMap>,
}

impl<O> Lookahead<O> {
    pub fn new(inner: O, k: usize, alpha: f64) -> Self {
        Self {
            inner,
            k: k.max(1),
            alpha: alpha.clamp(0.0, 1.0) as f32,
            steps: 0,
            slow: None,
        }
    }
}

impl<O: Optimizer> Optimizer for Lookahead<O> {
    fn step(&mut self, params: &mut ParamMap, grads: &ParamMap) -> Result<(), TrainError> {
        if self.slow.is_none() {
            self.slow = Some(params.clone());
        }

        self.inner.step(params, grads)?;
        self.steps += 1;

        if self.steps % self.k == 0 {
            let alpha = self.alpha;
            let slow = self.slow.as_mut().expect("slow copy initialized above");
            for (name, fast) in params.iter_mut() {
                if let Some(slow_tensor) = slow.get_mut(name) {
                    // slow += alpha * (fast - slow); fast = slow
                    Zip::from(&mut *slow_tensor).and(&*fast).for_each(|s, &f| {
                        *s += alpha * (f - *s);
                    });
                    fast.assign(slow_tensor);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    /// Inner stub that always subtracts 1.0 from every parameter.
    struct UnitStep;

    impl Optimizer for UnitStep {
        fn step(&mut self, params: &mut ParamMap, _grads: &ParamMap) -> Result<(), TrainError> {
            for tensor in params.values_mut() {
                tensor.mapv_inplace(|v| v - 1.0);
            }
            Ok(())
        }
    }

    fn single_param(value: f32) -> ParamMap {
        let mut params = ParamMap::new();
        params.insert("x".to_string(), arr1(&[value]).into_dyn());
        params
    }

    #[test]
    fn test_no_sync_before_k_steps() {
        let mut params = single_param(10.0);
        let mut opt = Lookahead::new(UnitStep, 4, 0.5);
        for _ in 0..3 {
            opt.step(&mut params, &ParamMap::new()).unwrap();
        }
        // Three inner steps, no sync yet: 10 - 3 = 7.
        assert_eq!(params["x"][[0]], 7.0);
    }

    #[test]
    fn test_sync_blends_at_step_k() {
        let mut params = single_param(10.0);
        let mut opt = Lookahead::new(UnitStep, 4, 0.5);
        for _ in 0..4 {
            opt.step(&mut params, &ParamMap::new()).unwrap();
        }
        // Fast after 4 inner steps: 6. Slow: 10 + 0.5 * (6 - 10) = 8,
        // and fast resets onto slow.
        assert_eq!(params["x"][[0]], 8.0);
    }

    #[test]
    fn test_alpha_one_tracks_fast_weights() {
        let mut params = single_param(5.0);
        let mut opt = Lookahead::new(UnitStep, 2, 1.0);
        for _ in 0..2 {
            opt.step(&mut params, &ParamMap::new()).unwrap();
        }
        // alpha = 1 means slow jumps fully onto fast: 5 - 2 = 3.
        assert_eq!(params["x"][[0]], 3.0);
    }

    #[test]
    fn test_alpha_zero_pins_to_slow_weights() {
        let mut params = single_param(5.0);
        let mut opt = Lookahead::new(UnitStep, 2, 0.0);
        for _ in 0..2 {
            opt.step(&mut params, &ParamMap::new()).unwrap();
        }
        // alpha = 0 means sync restores the original slow copy.
        assert_eq!(params["x"][[0]], 5.0);
    }

    #[test]
    fn test_inner_error_propagates() {
        struct Failing;
        impl Optimizer for Failing {
            fn step(&mut self, _: &mut ParamMap, _: &ParamMap) -> Result<(), TrainError> {
                Err(TrainError::NoTrainingSamples)
            }
        }
        let mut params = single_param(1.0);
        let mut opt = Lookahead::new(Failing, 2, 0.5);
        assert!(opt.step(&mut params, &ParamMap::new()).is_err());
    }
}

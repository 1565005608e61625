#![allow(dead_code)]
use anyhow::Result;
use skirmish_core::{Mat, ValueFn};
use std::{cell::Cell, path::Path};

/// Deterministic stand-in for a trainable value function.
///
/// Prediction applies a fixed closure row by row; training only counts
/// invocations and reports a fixed loss.
pub struct StubValueFn {
    input_dim: usize,
    num_actions: usize,
    f: Box<dyn Fn(&[f32]) -> Vec<f32>>,
    pub predict_calls: Cell<usize>,
    pub train_calls: usize,
    pub loss: f32,
}

impl StubValueFn {
    pub fn new(
        input_dim: usize,
        num_actions: usize,
        f: impl Fn(&[f32]) -> Vec<f32> + 'static,
    ) -> Self {
        Self {
            input_dim,
            num_actions,
            f: Box::new(f),
            predict_calls: Cell::new(0),
            train_calls: 0,
            loss: 0.25,
        }
    }

    /// A stub predicting the same Q-vector for every input.
    pub fn constant(input_dim: usize, q: Vec<f32>) -> Self {
        let num_actions = q.len();
        Self::new(input_dim, num_actions, move |_| q.clone())
    }
}

impl ValueFn for StubValueFn {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn num_actions(&self) -> usize {
        self.num_actions
    }

    fn predict(&self, batch: &Mat) -> Mat {
        self.predict_calls.set(self.predict_calls.get() + 1);
        let mut out = Mat::zeros(batch.nrows(), self.num_actions);
        for i in 0..batch.nrows() {
            out.row_mut(i).copy_from_slice(&(self.f)(batch.row(i)));
        }
        out
    }

    fn train_on_batch(&mut self, _inputs: &Mat, _targets: &Mat) -> f32 {
        self.train_calls += 1;
        self.loss
    }

    fn save_weights(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn load_weights(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

pub fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "{} != {}", a, b);
}

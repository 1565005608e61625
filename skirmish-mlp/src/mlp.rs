//! The perceptron itself.
use crate::MlpConfig;
use anyhow::{bail, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use skirmish_core::{Mat, ValueFn};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

/// Sigmoid multilayer perceptron with a linear output layer.
///
/// Trained by one full-batch gradient descent step per
/// [`train_on_batch`](ValueFn::train_on_batch) call, minimizing the mean
/// squared error against the target Q-values. Weights start at Xavier
/// uniform, biases at zero.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Mlp {
    ws: Vec<Mat>,
    bs: Vec<Mat>,
    learning_rate: f32,
}

impl Mlp {
    /// Builds the network from a configuration.
    pub fn build(config: &MlpConfig) -> Result<Self> {
        if config.input_dim == 0 {
            bail!("input_dim must be positive");
        }
        if config.num_actions == 0 {
            bail!("num_actions must be positive");
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut sizes = vec![config.input_dim];
        sizes.extend_from_slice(&config.hidden_sizes);
        sizes.push(config.num_actions);
        let mut ws = Vec::with_capacity(sizes.len() - 1);
        let mut bs = Vec::with_capacity(sizes.len() - 1);
        for pair in sizes.windows(2) {
            let (fan_in, fan_out) = (pair[0], pair[1]);
            let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
            let data = (0..fan_in * fan_out)
                .map(|_| rng.gen_range(-limit..limit))
                .collect();
            ws.push(Mat::from_vec(data, fan_in, fan_out));
            bs.push(Mat::zeros(1, fan_out));
        }
        Ok(Self {
            ws,
            bs,
            learning_rate: config.learning_rate,
        })
    }

    /// Activations of every layer, the input included.
    fn forward_all(&self, batch: &Mat) -> Vec<Mat> {
        let last = self.ws.len() - 1;
        let mut acts = vec![batch.clone()];
        for (i, (w, b)) in self.ws.iter().zip(self.bs.iter()).enumerate() {
            let z = acts[i].matmul(w).add_row(b);
            acts.push(if i == last { z } else { z.sigmoid() });
        }
        acts
    }
}

impl ValueFn for Mlp {
    fn input_dim(&self) -> usize {
        self.ws[0].nrows()
    }

    fn num_actions(&self) -> usize {
        self.ws[self.ws.len() - 1].ncols()
    }

    fn predict(&self, batch: &Mat) -> Mat {
        let last = self.ws.len() - 1;
        let mut a = batch.clone();
        for (i, (w, b)) in self.ws.iter().zip(self.bs.iter()).enumerate() {
            let z = a.matmul(w).add_row(b);
            a = if i == last { z } else { z.sigmoid() };
        }
        a
    }

    fn train_on_batch(&mut self, inputs: &Mat, targets: &Mat) -> f32 {
        let acts = self.forward_all(inputs);
        let diff = acts[acts.len() - 1].sub(targets);
        let n = (inputs.nrows() * self.num_actions()) as f32;
        let loss = diff.data().iter().map(|v| v * v).sum::<f32>() / n;
        let mut delta = diff.scale(2.0 / n);
        for i in (0..self.ws.len()).rev() {
            let grad_w = acts[i].transpose().matmul(&delta);
            let grad_b = delta.col_sum();
            if i > 0 {
                // Sigmoid derivative in terms of the activation itself.
                let dsig = acts[i].hadamard(&acts[i].map(|v| 1.0 - v));
                delta = delta.matmul(&self.ws[i].transpose()).hadamard(&dsig);
            }
            self.ws[i] = self.ws[i].sub(&grad_w.scale(self.learning_rate));
            self.bs[i] = self.bs[i].sub(&grad_b.scale(self.learning_rate));
        }
        loss
    }

    fn save_weights(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        Ok(())
    }

    fn load_weights(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        let loaded: Mlp = bincode::deserialize_from(BufReader::new(file))?;
        if loaded.input_dim() != self.input_dim() || loaded.num_actions() != self.num_actions() {
            bail!(
                "weight shapes ({}, {}) do not match the network ({}, {})",
                loaded.input_dim(),
                loaded.num_actions(),
                self.input_dim(),
                self.num_actions()
            );
        }
        *self = loaded;
        Ok(())
    }
}

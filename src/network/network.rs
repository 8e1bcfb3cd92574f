use crate::{
    activation::activation::ActivationFunction,
    error::{NetworkError, Result},
    math::matrix::Matrix,
};

/// Unit outputs of both layers, as produced by one forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FireResult {
    /// Hidden-layer outputs, one per hidden unit.
    pub hidden: Vec<f64>,
    /// Output-layer outputs, one per output unit.
    pub output: Vec<f64>,
}

/// A feedforward network with a single hidden layer.
///
/// `hidden_weights` is `H × (X + 1)` and `output_weights` is `O × (H + 1)`,
/// where X, H and O are the input, hidden and output widths. The extra
/// column in each holds the bias weights.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNetwork {
    hidden_activation: ActivationFunction,
    output_activation: ActivationFunction,
    hidden_weights: Matrix,
    output_weights: Matrix,
}

impl NeuralNetwork {
    /// Builds a network from activation names and nested weight rows.
    pub fn new(
        hidden_activation: &str,
        output_activation: &str,
        hidden_weights: Vec<Vec<f64>>,
        output_weights: Vec<Vec<f64>>,
    ) -> Result<NeuralNetwork> {
        NeuralNetwork::from_parts(
            hidden_activation.parse()?,
            output_activation.parse()?,
            Matrix::from_data(hidden_weights)?,
            Matrix::from_data(output_weights)?,
        )
    }

    /// Builds a network from typed parts, checking that the output layer is
    /// exactly one column wider than the hidden layer has units.
    pub fn from_parts(
        hidden_activation: ActivationFunction,
        output_activation: ActivationFunction,
        hidden_weights: Matrix,
        output_weights: Matrix,
    ) -> Result<NeuralNetwork> {
        if hidden_weights.cols() == 0 {
            return Err(NetworkError::dimension("hidden weight width (minimum)", 1, 0));
        }
        if output_weights.rows() == 0 {
            return Err(NetworkError::dimension("output unit count (minimum)", 1, 0));
        }
        if hidden_weights.rows() + 1 != output_weights.cols() {
            return Err(NetworkError::dimension(
                "output weight width (hidden units + bias)",
                hidden_weights.rows() + 1,
                output_weights.cols(),
            ));
        }

        Ok(NeuralNetwork {
            hidden_activation,
            output_activation,
            hidden_weights,
            output_weights,
        })
    }

    pub fn hidden_activation(&self) -> ActivationFunction {
        self.hidden_activation
    }

    pub fn output_activation(&self) -> ActivationFunction {
        self.output_activation
    }

    pub fn hidden_weights(&self) -> &Matrix {
        &self.hidden_weights
    }

    pub fn output_weights(&self) -> &Matrix {
        &self.output_weights
    }

    pub fn input_size(&self) -> usize {
        self.hidden_weights.cols() - 1
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_weights.rows()
    }

    pub fn output_size(&self) -> usize {
        self.output_weights.rows()
    }

    /// Forward pass. Does not touch the weights.
    pub fn fire(&self, input: &[f64]) -> Result<FireResult> {
        if input.len() != self.input_size() {
            return Err(NetworkError::dimension("input length", self.input_size(), input.len()));
        }

        let hidden: Vec<f64> = (0..self.hidden_size())
            .map(|j| self.hidden_activation.apply(self.hidden_weights.weighted_sum(j, input)))
            .collect();

        let output: Vec<f64> = (0..self.output_size())
            .map(|k| self.output_activation.apply(self.output_weights.weighted_sum(k, &hidden)))
            .collect();

        Ok(FireResult { hidden, output })
    }

    /// One step of online backpropagation towards `target` with learning
    /// rate `eta`.
    ///
    /// Returns the activations of the forward pass the gradient was computed
    /// from, i.e. the state *before* the update.
    pub fn fit(&mut self, input: &[f64], target: &[f64], eta: f64) -> Result<FireResult> {
        if target.len() != self.output_size() {
            return Err(NetworkError::dimension("target length", self.output_size(), target.len()));
        }
        let result = self.fire(input)?;
        let (hidden, output) = (&result.hidden, &result.output);

        // δO = (T - O) ⊙ fo'(O)
        let output_delta: Vec<f64> = output
            .iter()
            .zip(target)
            .map(|(&o, &t)| (t - o) * self.output_activation.derivative_from_output(o))
            .collect();

        // δH must be read off the output weights before they change.
        let hidden_delta: Vec<f64> = hidden
            .iter()
            .enumerate()
            .map(|(j, &h)| {
                let back: f64 = output_delta
                    .iter()
                    .enumerate()
                    .map(|(k, d)| self.output_weights.get(k, j) * d)
                    .sum();
                self.hidden_activation.derivative_from_output(h) * back
            })
            .collect();

        for (j, &delta) in hidden_delta.iter().enumerate() {
            apply_update(self.hidden_weights.row_mut(j), input, eta * delta);
        }

        for (k, &delta) in output_delta.iter().enumerate() {
            apply_update(self.output_weights.row_mut(k), hidden, eta * delta);
        }

        Ok(result)
    }
}

/// `row[i] += step * source[i]`, with the trailing bias weight taking `step * 1`.
fn apply_update(row: &mut [f64], source: &[f64], step: f64) {
    let (weights, bias) = row.split_at_mut(source.len());
    for (w, x) in weights.iter_mut().zip(source) {
        *w += step * x;
    }
    bias[0] += step;
}

use crate::{error::Result, network::network::{NeuralNetwork, FireResult}};

/// Learning rate used when none is given.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Plain online gradient descent with a fixed learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one backpropagation update for a single sample.
    pub fn step(&self, network: &mut NeuralNetwork, input: &[f64], target: &[f64]) -> Result<FireResult> {
        network.fit(input, target, self.learning_rate)
    }
}

impl Default for Sgd {
    fn default() -> Self {
        Sgd::new(DEFAULT_LEARNING_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_one_tenth() {
        assert_eq!(Sgd::default().learning_rate, 0.1);
    }

    #[test]
    fn step_matches_fit_with_same_rate() {
        let build = || {
            NeuralNetwork::new("tanh", "sigmoid", vec![vec![0.2, -0.4]], vec![vec![0.7, 0.1]]).unwrap()
        };
        let (mut a, mut b) = (build(), build());
        let ra = Sgd::default().step(&mut a, &[0.5], &[1.0]).unwrap();
        let rb = b.fit(&[0.5], &[1.0], 0.1).unwrap();
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }
}

use crate::{
    error::{NetworkError, Result},
    loss::mse::MseLoss,
    math::vector::argmax,
    network::network::NeuralNetwork,
    optim::sgd::Sgd,
};

/// Outcome of one ordered pass over a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassSummary {
    pub samples: usize,
    /// Samples whose output argmax matched the target argmax.
    pub correct: usize,
    /// Sum over samples of the per-sample MSE.
    pub total_loss: f64,
}

impl PassSummary {
    pub fn accuracy(&self) -> f64 {
        self.correct as f64 / self.samples as f64
    }

    pub fn mean_loss(&self) -> f64 {
        self.total_loss / self.samples as f64
    }
}

/// Runs one online `fit` per sample, in order, and scores the activations
/// each call returns.
///
/// The whole dataset is shape-checked before the first update, so an error
/// leaves the network untouched.
pub fn train_network(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
) -> Result<PassSummary> {
    validate_dataset(network, inputs, targets)?;

    let mut summary = PassSummary { samples: inputs.len(), correct: 0, total_loss: 0.0 };
    for (input, target) in inputs.iter().zip(targets) {
        let result = optimizer.step(network, input, target)?;
        summary.total_loss += MseLoss::loss(&result.output, target);
        if is_hit(&result.output, target) {
            summary.correct += 1;
        }
    }

    Ok(summary)
}

/// Fraction of samples classified correctly (argmax match) by a plain
/// forward pass.
pub fn evaluate(network: &NeuralNetwork, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
    validate_dataset(network, inputs, targets)?;

    let mut correct = 0;
    for (input, target) in inputs.iter().zip(targets) {
        if is_hit(&network.fire(input)?.output, target) {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}

fn is_hit(output: &[f64], target: &[f64]) -> bool {
    match (argmax(output), argmax(target)) {
        (Some(o), Some(t)) => o == t,
        _ => false,
    }
}

pub(crate) fn validate_dataset(
    network: &NeuralNetwork,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<()> {
    if inputs.is_empty() {
        return Err(NetworkError::dimension("training samples (minimum)", 1, 0));
    }
    if inputs.len() != targets.len() {
        return Err(NetworkError::dimension("target count", inputs.len(), targets.len()));
    }
    if let Some(input) = inputs.iter().find(|x| x.len() != network.input_size()) {
        return Err(NetworkError::dimension("input length", network.input_size(), input.len()));
    }
    if let Some(target) = targets.iter().find(|t| t.len() != network.output_size()) {
        return Err(NetworkError::dimension("target length", network.output_size(), target.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net() -> NeuralNetwork {
        NeuralNetwork::new(
            "sigmoid",
            "tanh",
            vec![vec![0.1, -0.2, 0.05], vec![0.3, 0.1, -0.1]],
            vec![vec![0.2, -0.3, 0.1], vec![-0.1, 0.2, 0.05]],
        )
        .unwrap()
    }

    #[test]
    fn pass_scores_pre_update_outputs() {
        let mut network = net();
        let inputs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let targets = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let first = network.fire(&inputs[0]).unwrap();
        let summary = train_network(&mut network, &inputs, &targets, &Sgd::default()).unwrap();

        assert_eq!(summary.samples, 2);
        assert!(summary.correct <= 2);
        assert!(summary.total_loss >= MseLoss::loss(&first.output, &targets[0]));
        assert!((0.0..=1.0).contains(&summary.accuracy()));
    }

    #[test]
    fn bad_dataset_leaves_network_untouched() {
        let mut network = net();
        let before = network.clone();
        let inputs = vec![vec![1.0, 0.0], vec![0.0]];
        let targets = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        assert_eq!(
            train_network(&mut network, &inputs, &targets, &Sgd::default()),
            Err(NetworkError::DimensionMismatch { context: "input length", expected: 2, actual: 1 })
        );
        assert!(matches!(
            train_network(&mut network, &inputs[..1], &targets, &Sgd::default()),
            Err(NetworkError::DimensionMismatch { context: "target count", .. })
        ));
        assert!(matches!(
            train_network(&mut network, &[], &[], &Sgd::default()),
            Err(NetworkError::DimensionMismatch { .. })
        ));
        assert_eq!(network, before);
    }

    #[test]
    fn evaluate_counts_argmax_matches() {
        let network = net();
        let input = vec![1.0, 0.0];
        let predicted = argmax(&network.fire(&input).unwrap().output).unwrap();
        let mut hit = vec![0.0, 0.0];
        hit[predicted] = 1.0;
        let mut miss = vec![0.0, 0.0];
        miss[1 - predicted] = 1.0;

        let accuracy = evaluate(&network, &[input.clone(), input], &[hit, miss]).unwrap();
        assert_eq!(accuracy, 0.5);
    }
}

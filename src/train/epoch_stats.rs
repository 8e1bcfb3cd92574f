use serde::{Serialize, Deserialize};

/// Per-epoch training statistics emitted by `train_loop`.
///
/// Accuracy and error are measured on the activations each `fit` call
/// returns, i.e. on the state just before that sample's update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Fraction in [0, 1] of samples whose output argmax matched the target's.
    pub accuracy: f64,
    /// Mean over samples of the per-sample mean squared error.
    pub mean_squared_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}

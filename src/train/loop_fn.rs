use std::sync::atomic::Ordering;
use std::time::Instant;

use log::{debug, info};

use crate::error::Result;
use crate::network::network::NeuralNetwork;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{train_network, validate_dataset};

/// Trains `network` for `config.epochs` ordered online passes and returns
/// the statistics of the **last completed epoch** (`None` if no epoch ran).
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// `DimensionMismatch` if the dataset is empty, `inputs` and `targets`
/// differ in length, or any sample does not fit the network's shape. The
/// check runs before the first update.
pub fn train_loop(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    optimizer: &Sgd,
    config: &TrainConfig,
) -> Result<Option<EpochStats>> {
    validate_dataset(network, inputs, targets)?;

    let mut last = None;

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            info!("stop requested before epoch {epoch}");
            break;
        }

        let t_start = Instant::now();
        let summary = train_network(network, inputs, targets, optimizer)?;
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            accuracy: summary.accuracy(),
            mean_squared_error: summary.mean_loss(),
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        debug!(
            "epoch {}/{}: accuracy {:.1}%, mse {:.6} ({} ms)",
            stats.epoch,
            stats.total_epochs,
            stats.accuracy * 100.0,
            stats.mean_squared_error,
            stats.elapsed_ms
        );
        last = Some(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                info!("progress receiver dropped after epoch {epoch}; stopping");
                break;
            }
        }
    }

    Ok(last)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config
        .stop_flag
        .as_ref()
        .is_some_and(|flag| flag.load(Ordering::Relaxed))
}

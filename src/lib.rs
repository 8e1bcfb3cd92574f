pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod persist;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use math::vector::argmax;
pub use activation::activation::ActivationFunction;
pub use network::network::{NeuralNetwork, FireResult};
pub use network::spec::NetworkSpec;
pub use persist::codec::{encode, decode};
pub use loss::mse::MseLoss;
pub use optim::sgd::{Sgd, DEFAULT_LEARNING_RATE};
pub use train::{train_loop, train_network, TrainConfig, EpochStats};

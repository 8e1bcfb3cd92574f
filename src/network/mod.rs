pub mod network;
pub mod spec;

pub use network::{NeuralNetwork, FireResult};
pub use spec::NetworkSpec;

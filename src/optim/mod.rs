pub mod sgd;

pub use sgd::{Sgd, DEFAULT_LEARNING_RATE};

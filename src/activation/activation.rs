use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetworkError;

/// The built-in activation functions.
///
/// Every variant pairs an element-wise function with its derivative
/// expressed in terms of the function's own output, so backpropagation never
/// needs the pre-activation sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    /// `x / (1 + |x|)`, a cheap sigmoid-shaped squashing function.
    InverseAbs,
    Linear,
}

impl ActivationFunction {
    pub const ALL: [ActivationFunction; 4] = [
        ActivationFunction::Sigmoid,
        ActivationFunction::Tanh,
        ActivationFunction::InverseAbs,
        ActivationFunction::Linear,
    ];

    /// Element-wise activation `f(x)`.
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            // f64::tanh saturates to ±1 at ±inf.
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::InverseAbs => {
                if x.is_infinite() {
                    x.signum()
                } else {
                    x / (1.0 + x.abs())
                }
            }
            ActivationFunction::Linear => x,
        }
    }

    /// Derivative `f'(x)` written as a function of `y = f(x)`.
    pub fn derivative_from_output(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::InverseAbs => {
                let d = 1.0 - y.abs();
                d * d
            }
            ActivationFunction::Linear => 1.0,
        }
    }

    /// The name used in persisted networks and spec files.
    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::InverseAbs => "inverse_abs",
            ActivationFunction::Linear => "linear",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivationFunction {
    type Err = NetworkError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ActivationFunction::ALL
            .into_iter()
            .find(|activation| activation.name() == name)
            .ok_or_else(|| NetworkError::UnknownActivation(name.to_string()))
    }
}

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::NeuralNetwork;

/// A serializable description of a network architecture.
///
/// A spec carries layer widths and activations but no weights; `build()`
/// turns it into a freshly initialised [`NeuralNetwork`].
///
/// Fields:
/// - `inputs`  — number of values fed to the network
/// - `hidden`  — number of hidden units
/// - `outputs` — number of output units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name, used as the model file stem.
    pub name: String,
    pub inputs: usize,
    pub hidden: usize,
    pub outputs: usize,
    pub hidden_activation: ActivationFunction,
    pub output_activation: ActivationFunction,
}

impl NetworkSpec {
    /// The 2-2-2 sigmoid/tanh network used by the XOR demo; the two outputs
    /// are a one-hot encoding of the XOR result.
    pub fn xor() -> NetworkSpec {
        NetworkSpec {
            name: "xor".to_string(),
            inputs: 2,
            hidden: 2,
            outputs: 2,
            hidden_activation: ActivationFunction::Sigmoid,
            output_activation: ActivationFunction::Tanh,
        }
    }

    /// Builds a network with weights drawn by [`Matrix::random`].
    pub fn build(&self) -> Result<NeuralNetwork> {
        self.build_with(&mut rand::thread_rng())
    }

    /// Builds a network drawing its initial weights from `rng`.
    pub fn build_with<R: Rng>(&self, rng: &mut R) -> Result<NeuralNetwork> {
        for (context, width) in [
            ("spec input count (minimum)", self.inputs),
            ("spec hidden count (minimum)", self.hidden),
            ("spec output count (minimum)", self.outputs),
        ] {
            if width == 0 {
                return Err(NetworkError::dimension(context, 1, 0));
            }
        }

        NeuralNetwork::from_parts(
            self.hidden_activation,
            self.output_activation,
            Matrix::random_with(rng, self.hidden, self.inputs + 1),
            Matrix::random_with(rng, self.outputs, self.hidden + 1),
        )
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn build_uses_bias_columns() {
        let spec = NetworkSpec {
            name: "wide".into(),
            inputs: 3,
            hidden: 5,
            outputs: 4,
            hidden_activation: ActivationFunction::InverseAbs,
            output_activation: ActivationFunction::Linear,
        };
        let net = spec.build_with(&mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!((net.hidden_weights().rows(), net.hidden_weights().cols()), (5, 4));
        assert_eq!((net.output_weights().rows(), net.output_weights().cols()), (4, 6));
        assert_eq!(net.hidden_activation(), ActivationFunction::InverseAbs);
        assert_eq!(net.output_activation(), ActivationFunction::Linear);
    }

    #[test]
    fn build_rejects_zero_widths() {
        let spec = NetworkSpec { hidden: 0, ..NetworkSpec::xor() };
        assert!(matches!(spec.build(), Err(NetworkError::DimensionMismatch { .. })));
    }

    #[test]
    fn json_round_trip() {
        let spec = NetworkSpec::xor();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"hidden_activation\":\"sigmoid\""));
        assert_eq!(serde_json::from_str::<NetworkSpec>(&json).unwrap(), spec);
    }

    #[test]
    fn save_and_load_file() {
        let path = std::env::temp_dir().join(format!("backprop-nn-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let spec = NetworkSpec { name: "saved".into(), ..NetworkSpec::xor() };
        spec.save_json(path).unwrap();
        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, spec);
    }

    #[test]
    fn unknown_activation_in_json_is_rejected() {
        let json = r#"{"name":"x","inputs":1,"hidden":1,"outputs":1,
                       "hidden_activation":"relu","output_activation":"linear"}"#;
        assert!(serde_json::from_str::<NetworkSpec>(json).is_err());
    }
}

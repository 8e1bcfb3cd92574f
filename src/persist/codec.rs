//! Encoding of network state as the 4-tuple
//! `[hidden_activation, output_activation, hidden_weights, output_weights]`.
//!
//! The binary form is MessagePack: a 4-element array holding two strings
//! and two arrays of arrays of floats. Every weight is written as a float64,
//! so a round trip is exact. Decoding also accepts the integer and float32
//! encodings other MessagePack writers use for whole or short numbers. The
//! JSON form is the same tuple as a plain array, handy for inspection; JSON
//! has no encoding for NaN or infinities.

use std::io::Cursor;

use log::debug;
use serde::Deserialize;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::network::NeuralNetwork;

/// Owned, not yet validated contents of a persisted network.
#[derive(Debug, Deserialize)]
struct PersistedForm(String, String, Matrix, Matrix);

/// Borrowed view written by the encoders; serializes identically to
/// `PersistedForm`.
type PersistedRef<'a> = (&'a str, &'a str, &'a Matrix, &'a Matrix);

fn persisted_ref(network: &NeuralNetwork) -> PersistedRef<'_> {
    (
        network.hidden_activation().name(),
        network.output_activation().name(),
        network.hidden_weights(),
        network.output_weights(),
    )
}

/// Number of elements in the persisted top-level array.
const TUPLE_LEN: u32 = 4;

impl PersistedForm {
    fn into_network(self) -> Result<NeuralNetwork> {
        let PersistedForm(hidden_name, output_name, hidden_weights, output_weights) = self;
        let hidden_activation: ActivationFunction = hidden_name.parse().map_err(invalid)?;
        let output_activation: ActivationFunction = output_name.parse().map_err(invalid)?;

        NeuralNetwork::from_parts(hidden_activation, output_activation, hidden_weights, output_weights)
            .map_err(invalid)
    }
}

fn invalid(err: impl std::fmt::Display) -> NetworkError {
    NetworkError::InvalidFormat(err.to_string())
}

/// Encodes `network` into the compact binary form.
pub fn encode(network: &NeuralNetwork) -> Result<Vec<u8>> {
    let bytes = rmp_serde::to_vec(&persisted_ref(network)).map_err(invalid)?;
    debug!(
        "encoded {}-{}-{} network into {} bytes",
        network.input_size(),
        network.hidden_size(),
        network.output_size(),
        bytes.len()
    );
    Ok(bytes)
}

/// Decodes a buffer produced by [`encode`].
///
/// Anything other than exactly one 4-element array naming known
/// activations with compatible weight shapes is `InvalidFormat`.
pub fn decode(bytes: &[u8]) -> Result<NeuralNetwork> {
    let len = rmp::decode::read_array_len(&mut &bytes[..])
        .map_err(|e| NetworkError::InvalidFormat(format!("expected a top-level array: {e}")))?;
    if len != TUPLE_LEN {
        return Err(NetworkError::InvalidFormat(format!(
            "expected an array of {TUPLE_LEN} elements, got {len}"
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let form: PersistedForm = rmp_serde::from_read(&mut cursor).map_err(invalid)?;
    let consumed = cursor.position() as usize;
    if consumed != bytes.len() {
        return Err(NetworkError::InvalidFormat(format!(
            "{} trailing bytes after the network",
            bytes.len() - consumed
        )));
    }

    let network = form.into_network()?;
    debug!(
        "decoded {}-{}-{} network from {} bytes",
        network.input_size(),
        network.hidden_size(),
        network.output_size(),
        bytes.len()
    );
    Ok(network)
}

/// The persisted tuple as a JSON array.
pub fn to_json(network: &NeuralNetwork) -> serde_json::Value {
    serde_json::json!([
        network.hidden_activation().name(),
        network.output_activation().name(),
        network.hidden_weights(),
        network.output_weights(),
    ])
}

/// Rebuilds a network from the array produced by [`to_json`].
pub fn from_json(value: serde_json::Value) -> Result<NeuralNetwork> {
    match value.as_array() {
        Some(items) if items.len() == TUPLE_LEN as usize => {}
        Some(items) => {
            return Err(NetworkError::InvalidFormat(format!(
                "expected an array of {TUPLE_LEN} elements, got {}",
                items.len()
            )))
        }
        None => return Err(NetworkError::InvalidFormat("expected an array".to_string())),
    }
    let form: PersistedForm = serde_json::from_value(value).map_err(invalid)?;
    form.into_network()
}

impl NeuralNetwork {
    /// Shorthand for [`encode`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        encode(self)
    }

    /// Shorthand for [`decode`].
    pub fn from_bytes(bytes: &[u8]) -> Result<NeuralNetwork> {
        decode(bytes)
    }
}

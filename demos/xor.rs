//! XOR demo: loads a network from the given model file (or creates one),
//! trains it on the four XOR patterns and writes it back.
//!
//! ```text
//! RUST_LOG=info cargo run --example xor -- xor.msgpack [spec.json]
//! ```
use std::path::Path;

use anyhow::{bail, Context};
use log::info;

use backprop_nn::{
    argmax, decode, encode, train_loop, NetworkSpec, NeuralNetwork, Sgd, TrainConfig,
};

/// Training epochs; each epoch shows every pattern `REPEATS` times.
const EPOCHS: usize = 100;
const REPEATS: usize = 50;
const ETA: f64 = 0.1;
const PROGRAM: &str = "xor";

const PATTERNS: [([f64; 2], usize); 4] = [
    ([0.0, 0.0], 0),
    ([1.0, 0.0], 1),
    ([0.0, 1.0], 1),
    ([1.0, 1.0], 0),
];

/// Model file and optional spec file taken from the command line.
#[derive(Debug, PartialEq)]
struct Args {
    model_path: String,
    spec_path: Option<String>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let program = args.first().map_or(PROGRAM, String::as_str);
    match args.get(1) {
        Some(model_path) => Ok(Args {
            model_path: model_path.clone(),
            spec_path: args.get(2).cloned(),
        }),
        None => bail!("usage: {program} <model-file> [spec.json]"),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let Args { model_path, spec_path } = parse_args(&args)?;

    let mut network = load_or_create(&model_path, spec_path.as_deref())?;
    let outputs = network.output_size();
    if network.input_size() != 2 || outputs < 2 {
        bail!(
            "XOR needs 2 inputs and at least 2 outputs, network has {} and {}",
            network.input_size(),
            outputs
        );
    }

    let (inputs, targets) = xor_dataset(outputs);

    info!("training start");
    for epoch in 1..=EPOCHS {
        let stats = train_loop(&mut network, &inputs, &targets, &Sgd::new(ETA), &TrainConfig::new(1))?
            .context("training loop did not run")?;
        info!(
            "loop {epoch}: {:.1}% ({} ms)",
            stats.accuracy * 100.0,
            stats.elapsed_ms
        );
    }
    info!("training end");

    for (x, expected) in PATTERNS {
        let result = network.fire(&x)?;
        let predicted = argmax(&result.output);
        info!(
            "X = {x:?}, O = {:?}, expected {expected}, got {predicted:?}: {}",
            result.output,
            if predicted == Some(expected) { "succeed" } else { "failure" }
        );
    }

    std::fs::write(&model_path, encode(&network)?)
        .with_context(|| format!("writing {model_path}"))?;
    info!("saved to {model_path}");

    Ok(())
}

fn load_or_create(model_path: &str, spec_path: Option<&str>) -> anyhow::Result<NeuralNetwork> {
    if Path::new(model_path).exists() {
        let bytes = std::fs::read(model_path).with_context(|| format!("reading {model_path}"))?;
        let network = decode(&bytes).with_context(|| format!("decoding {model_path}"))?;
        info!("loaded network from {model_path}");
        return Ok(network);
    }

    let spec = match spec_path {
        Some(path) => NetworkSpec::load_json(path).with_context(|| format!("reading spec {path}"))?,
        None => NetworkSpec::xor(),
    };
    info!(
        "creating {}-{}-{} network '{}' ({} / {})",
        spec.inputs, spec.hidden, spec.outputs, spec.name, spec.hidden_activation, spec.output_activation
    );
    Ok(spec.build()?)
}

/// `REPEATS` copies of the XOR patterns with one-hot targets.
fn xor_dataset(outputs: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut inputs = Vec::with_capacity(PATTERNS.len() * REPEATS);
    let mut targets = Vec::with_capacity(PATTERNS.len() * REPEATS);
    for _ in 0..REPEATS {
        for (x, class) in PATTERNS {
            let mut t = vec![0.0; outputs];
            t[class] = 1.0;
            inputs.push(x.to_vec());
            targets.push(t);
        }
    }
    (inputs, targets)
}

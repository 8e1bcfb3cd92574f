// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the XOR demo with:
//   cargo run --example xor -- xor.msgpack
fn main() {
    println!("backprop-nn: a two-layer backpropagation network in Rust.");
    println!("Run `cargo run --example xor -- <model-file>` to see the XOR demo.");
}

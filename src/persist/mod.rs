pub mod codec;

pub use codec::{encode, decode, to_json, from_json};

#![doc = include_str!("../README.md")]

pub mod utils;
pub mod stats;
pub mod seedable_hash;
pub use seedable_hash::{SeededHash, KeyBytes, Murmur2, Wy, DefaultSeededHash};

pub mod bucketer;
pub mod buckets;
pub mod compact;

mod function;
pub use function::{Builder, BuildError, Function};

pub use dyn_size_of::GetSize;

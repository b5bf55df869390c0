pub mod demo;
pub mod rng;

pub use rng::{RangeError, SeededRng, RAND_MAX};

pub type Result<T> = anyhow::Result<T>;

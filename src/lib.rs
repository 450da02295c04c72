//! Advent of Code 2017, day 10: the knot hash.

pub mod error;
pub mod knot;

pub use error::KnotError;
pub use knot::{KnotHasher, Ring};

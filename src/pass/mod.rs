//! Password generation and strength rating.

pub mod charset;
mod generate;
pub mod strength;
mod writer;

pub use charset::{Category, CategorySet};
pub use generate::{MAX_LENGTH, effective_length, generate, generate_batch, validate};
pub use strength::{Strength, entropy_bits, rate};
pub use writer::SecureBufWriter;

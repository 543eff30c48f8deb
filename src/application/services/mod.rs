//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem)
//! but are themselves concrete structs, not traits.

mod guesser;
mod resolver;
mod transform;

pub use guesser::{GuessOutcome, IndentGuesser};
pub use resolver::IndentResolver;
pub use transform::{LineTransformer, TransformStats};

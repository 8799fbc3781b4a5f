/// Domain Layer - Pure Logic
///
/// Everything in here is free of I/O and frameworks: the waterfowl record
/// with its query operations, wall-clock time arithmetic, text parsing,
/// generic numeric folding, and argument validation. The application layer
/// wraps these in runnable demos; this layer can be tested in isolation.

pub mod dates;
pub mod numeric;
pub mod parse;
pub mod validation;
pub mod waterfowl;

// Re-export key types
pub use numeric::{sum_all, Cuteness, Summable};
pub use waterfowl::{sample_flock, Waterfowl, FAMILIES};

/// Infrastructure Layer - I/O Backends
///
/// Side-effecting adapters the application layer drives: currently the HTTP
/// fetcher that backs the parallel-download demonstration.

pub mod fetch;

pub use fetch::{FetchOutcome, Fetcher};

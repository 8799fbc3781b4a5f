/// Interface Layer - Entry Points
///
/// The command-line interface is the only entry point.

pub mod cli;

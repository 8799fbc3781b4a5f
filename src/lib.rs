// Layered layout: domain holds the pure logic, application the demo suite
// built on it, infrastructure the HTTP fetcher, interfaces the CLI.
// Everything is public so the binaries, tests and docs can reach it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

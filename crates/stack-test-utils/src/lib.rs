//! Shared test fixtures for the stack context workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] temporary project roots with context documents
//! - [`init_tracing`]: opt-in log output for tests (`RUST_LOG=debug`)

pub mod project;

pub use project::TestProject;

/// Install a test-friendly `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from many tests; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

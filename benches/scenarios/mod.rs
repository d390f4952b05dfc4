//! Scenario benchmarks: the filter as a host and a patch would drive it.

mod host;
mod patch;

pub use host::bench_host;
pub use patch::bench_patch;

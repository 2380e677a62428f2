//! Library exports for the asset-fetch binary and its tests.
/// Batch fetcher, retry policy, and the per-job fetch routine.
pub mod fetcher;
/// Job records, built-in asset sets, and manifest loading.
pub mod manifest;
/// Placeholder artifact rendering.
pub mod placeholder;
/// Filesystem and HTTP helpers.
pub mod utils;

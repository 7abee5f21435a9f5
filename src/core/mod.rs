//! Core building blocks: icon manifests, run parameters, and the pixel
//! processing primitives consumed by the high-level `api` module.
pub mod manifest;
pub mod params;
pub mod processing;

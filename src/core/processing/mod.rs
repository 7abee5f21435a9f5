//! Pixel-level primitives: Lanczos resize and fit modes, transparent padding,
//! and the near-white transparency pass.
pub mod padding;
pub mod resize;
pub mod transparency;

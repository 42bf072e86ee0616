//! Property test modules

pub mod fence_stripping;
pub mod filename_determinism;

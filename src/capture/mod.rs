//! Screenshot input for the extraction stage.
//!
//! This module provides:
//! - Loading screenshots from disk (`load_image`)
//! - Optional downscaling before upload

pub mod loader;
pub mod preprocess;

pub use loader::{load_image, EncodedImage};

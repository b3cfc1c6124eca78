//! Utility functions for image processing
//!
//! - Grayscale conversion (RGBA to luminance, scalar and row-parallel)

pub mod grayscale;

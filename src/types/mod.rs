//! Core domain types for palswap.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Grid` - Fixed-size row-major 2D buffers
//! - `Palette` - Ordered colour tables

mod colour;
mod grid;
mod palette;

pub use colour::Colour;
pub use grid::Grid;
pub use palette::Palette;

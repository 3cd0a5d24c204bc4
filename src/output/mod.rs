//! Terminal output.
//!
//! This module provides:
//! - [`Style`] and [`Category`]: what rendered text looks like
//! - [`Renderer`]: paced, colored line output
//! - [`TeeWriter`] and [`Transcript`]: capture of rendered output for saving
//! - Opening and closing banners

mod banner;
mod capture;
mod render;
mod style;

// Re-export public API
pub use banner::{print_closing, print_opening};
pub use capture::{strip_ansi, TeeWriter, Transcript};
pub use render::Renderer;
pub use style::{Category, Style};

//! # Prancheta Core
//!
//! Core types and pure geometry shared by every Prancheta crate:
//!
//! - [`geometry`]: the hit-testing and path-reduction kernel. Every function is
//!   total over finite input and has no side effects.
//! - [`types`]: court-space [`Point`] and [`FieldDimensions`].
//! - [`color`]: hex color parsing used by the renderer.
//! - [`error`]: the [`BoardError`] type returned by fallible board operations.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use color::Rgba;
pub use error::{BoardError, Result};
pub use types::{FieldDimensions, Point};

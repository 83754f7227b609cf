//! Net generator for the tetrahedron cutting layout
//!
//! Computes an equilateral outer triangle and its medial triangle from a
//! `NetConfig`. Folding the three corner triangles up along the inner
//! triangle's edges produces a regular tetrahedron.

pub mod config;
pub mod engine;
pub mod types;

pub use config::{InnerMethod, NetConfig};
pub use engine::{compute, HEIGHT_RATIO};
pub use types::{Triangle, TriangleNet};

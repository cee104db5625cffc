//! Scene Math Core Library
//!
//! Vector math primitives for a scene-rendering stack: positions and
//! displacements of meshes and lights, view directions, and the projection
//! math a camera or lighting pass needs.
//!
//! ## Guarantees
//!
//! - Components are always finite: NaN and infinite inputs are coerced to
//!   zero at every construction and deserialization boundary
//! - In-place operations return the receiver, so frame updates chain
//! - Degenerate direction requests (zero-length normalize/project) have a
//!   documented lenient result plus fallible `try_` variants
//! - With the default `gpu` feature, [`Vec3`] is `bytemuck::Pod` for
//!   zero-copy vertex/uniform buffer upload

// Vector algebra
pub mod vec3;

// Re-export core types
pub use vec3::{Vec3, Vec3Error};

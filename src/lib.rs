// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library.

pub mod error;
pub mod vec;
pub mod mat3;
pub mod mat4;
pub mod surface;
pub mod im;
pub mod svg;
pub mod project;
pub mod ring;
pub mod render;
pub mod sphere;
pub mod desc;
pub mod anim;

pub use error::{Error, Result};

#[cfg(test)]
pub mod test_helpers;

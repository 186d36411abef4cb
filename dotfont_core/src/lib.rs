//! Dot matrix glyph lookup for GBK encoded text.
//!
//! Fonts are pre-rendered bitmap containers of various vendor formats, read through a
//! [`FontStorage`]. ASCII is always served from built-in tables so text stays legible when no
//! container is available.
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod descriptor;
mod error;
pub mod fallback;
pub mod format;
mod glyph;
mod region;
mod registry;
mod storage;

pub use descriptor::*;
pub use error::*;
pub use format::{AddressResolver, ContainerFormat};
pub use glyph::*;
pub use region::*;
pub use registry::*;
pub use storage::*;

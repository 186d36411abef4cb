#![no_std]
#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod font_storage;
mod partition;
#[cfg(test)]
pub mod test;
pub use font_storage::*;
pub use partition::*;

//! Builder module for `argmap`.
//! See [documentation root](https://docs.rs/argmap/latest/argmap/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod model;
mod parser;
mod values;

pub use api::*;
pub use model::*;
pub use parser::ParseError;
pub use values::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

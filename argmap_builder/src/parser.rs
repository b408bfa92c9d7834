mod base;
mod consumer;
mod extract;

pub use base::*;

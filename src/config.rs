//! Configuration Api for `argmap`.
//!
//! Decode a [`Registry`](crate::Registry) from an untyped configuration tree (a `serde_yaml::Value`) via [`create`], or directly from a YAML document via [`from_yaml`].
pub use argmap_config::*;

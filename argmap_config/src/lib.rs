//! Configuration module for `argmap`.
//!
//! Decodes a [`Registry`] from an untyped configuration tree, such as a YAML document.
//! The tree must be a mapping from option name to a mapping of the option fields:
//!
//! ```yaml
//! name:
//!   title: Name
//!   description: Who to greet.
//!   type: string        # one of: string, strings, integer, float, flag, tail
//!   shortcut: n         # a single character (optional)
//!   required: true      # optional; ignored for flags
//!   default: world      # optional; must fit the type
//! ```
//!
//! Options are added to the registry in document order.
//!
//! ### Example
//! ```
//! # use argmap_config as config;
//! let registry = config::from_yaml(
//!     r#"
//! count:
//!   type: integer
//!   shortcut: c
//!   default: 3
//! "#,
//! )
//! .unwrap();
//!
//! let values = registry.parse(&["-c", "5"]).unwrap();
//! assert_eq!(values.integer("count", 0).unwrap(), (5, true));
//! ```
#![deny(missing_docs)]
mod load;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

use argmap_builder::{ConfigError, Kind, Registry};
use serde_yaml::Value as Tree;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons a configuration tree may be rejected.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The top level value is not a mapping.
    #[error("Arguments value must be a map.")]
    NotAMap,

    /// A top level key is not a string.
    #[error("Option key must be a string.")]
    KeyNotString,

    /// The value of an option is not a mapping.
    #[error("Option '{0}' value must be a map.")]
    OptionNotAMap(String),

    /// The `type` field is absent.
    #[error("Option '{0}' must set a type.")]
    MissingType(String),

    /// The `type` field names no known kind.
    #[error("Option '{name}' has unknown argument type \"{kind}\".")]
    UnknownType {
        /// The option name.
        name: String,
        /// The unrecognized type name.
        kind: String,
    },

    /// A field holds a value of the wrong shape.
    #[error("Option '{name}' field '{field}' must be {expected}.")]
    InvalidField {
        /// The option name.
        name: String,
        /// The offending field.
        field: &'static str,
        /// A description of the accepted shape.
        expected: &'static str,
    },

    /// The `default` field does not fit the declared kind.
    #[error("Option '{name}' default must fit type {kind}.")]
    InvalidDefault {
        /// The option name.
        name: String,
        /// The declared kind.
        kind: Kind,
    },

    /// The decoded schemas do not form a valid registry.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The document is not valid YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Read-only for the life of the process.
static KINDS: &[(&str, Kind)] = &[
    ("string", Kind::String),
    ("strings", Kind::Strings),
    ("integer", Kind::Integer),
    ("float", Kind::Float),
    ("flag", Kind::Flag),
    ("tail", Kind::Tail),
];

pub(crate) fn kind_named(name: &str) -> Option<Kind> {
    KINDS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, kind)| *kind)
}

/// Decode a registry from an already parsed configuration tree.
pub fn create(tree: &Tree) -> Result<Registry, SchemaError> {
    let mapping = tree.as_mapping().ok_or(SchemaError::NotAMap)?;
    let mut builder = Registry::builder();

    for (key, value) in mapping {
        let name = key.as_str().ok_or(SchemaError::KeyNotString)?;
        let schema = load::schema(name, value)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Decoded option '{name}' of kind {kind}.", kind = schema.kind());
        }

        builder = builder.add(schema);
    }

    Ok(builder.build()?)
}

/// Decode a registry from a YAML document.
pub fn from_yaml(document: &str) -> Result<Registry, SchemaError> {
    let tree: Tree = serde_yaml::from_str(document)?;
    create(&tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmap_builder::Value;
    use rstest::rstest;

    #[rstest]
    #[case("string", Some(Kind::String))]
    #[case("strings", Some(Kind::Strings))]
    #[case("integer", Some(Kind::Integer))]
    #[case("float", Some(Kind::Float))]
    #[case("flag", Some(Kind::Flag))]
    #[case("tail", Some(Kind::Tail))]
    #[case("String", None)]
    #[case("bool", None)]
    #[case("", None)]
    fn kind_lookup(#[case] name: &str, #[case] expected: Option<Kind>) {
        assert_eq!(kind_named(name), expected);
    }

    #[test]
    fn create_full() {
        // Setup
        let document = r#"
key:
  title: Key
  description: The key to use.
  type: string
  shortcut: k
  required: true
  default: abc
verbose:
  type: flag
  shortcut: v
rest:
  type: tail
"#;

        // Execute
        let registry = from_yaml(document).unwrap();

        // Verify
        assert_eq!(
            registry.iter().map(|s| s.name()).collect::<Vec<_>>(),
            vec!["key", "verbose", "rest"]
        );
        let key = registry.by_name("key").unwrap();
        assert_eq!(key.kind(), Kind::String);
        assert_eq!(key.title_text(), Some("Key"));
        assert_eq!(key.description_text(), Some("The key to use."));
        assert_eq!(key.short(), Some('k'));
        assert!(key.is_required());
        assert_eq!(key.default_value(), Some(&Value::from("abc")));
        assert_eq!(registry.by_shortcut('v').unwrap().name(), "verbose");
        assert_eq!(registry.tail().unwrap().name(), "rest");
    }

    #[test]
    fn create_empty() {
        let registry = from_yaml("{}").unwrap();
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case("- a\n- b\n")]
    #[case("just a string")]
    #[case("~")]
    fn create_not_a_map(#[case] document: &str) {
        assert_matches!(from_yaml(document), Err(SchemaError::NotAMap));
    }

    #[test]
    fn create_key_not_string() {
        let result = from_yaml("1:\n  type: string\n");
        assert_matches!(result, Err(SchemaError::KeyNotString));
    }

    #[test]
    fn create_option_not_a_map() {
        let result = from_yaml("key: string\n");
        assert_matches!(result, Err(SchemaError::OptionNotAMap(name)) => {
            assert_eq!(name, "key");
        });
    }

    #[test]
    fn create_missing_type() {
        let result = from_yaml("key:\n  shortcut: k\n");
        assert_matches!(result, Err(SchemaError::MissingType(name)) => {
            assert_eq!(name, "key");
        });
    }

    #[test]
    fn create_unknown_type() {
        // Execute
        let result = from_yaml("key:\n  type: bool\n");

        // Verify
        assert_matches!(result, Err(error @ SchemaError::UnknownType { .. }) => {
            assert_eq!(error.to_string(), "Option 'key' has unknown argument type \"bool\".");
        });
    }

    #[test]
    fn create_duplicate_shortcut() {
        // Setup
        let document = r#"
apple:
  type: flag
  shortcut: a
avocado:
  type: flag
  shortcut: a
"#;

        // Execute
        let result = from_yaml(document);

        // Verify
        assert_matches!(result, Err(SchemaError::Config(error)) => {
            assert_eq!(error.to_string(), "Config error: Cannot duplicate the shortcut 'a'.");
        });
    }

    #[test]
    fn create_invalid_yaml() {
        assert_matches!(from_yaml("key: [unclosed"), Err(SchemaError::Yaml(_)));
    }
}

use std::collections::HashMap;
use thiserror::Error;

use crate::api::Schema;
use crate::model::Kind;

/// The schemas do not form a valid [`Registry`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Collects [`Schema`]s prior to validating them into a [`Registry`].
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::{Kind, Registry, Schema};
///
/// let registry = Registry::builder()
///     .add(Schema::new("verbose", Kind::Flag).shortcut('v'))
///     .add(Schema::new("files", Kind::Tail))
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    schemas: Vec<Schema>,
}

impl RegistryBuilder {
    /// Add a schema to the registry.
    /// The insertion order decides the order in which missing required options are reported.
    pub fn add(mut self, schema: Schema) -> Self {
        self.schemas.push(schema);
        self
    }

    /// Validate the schemas into a read-only registry.
    ///
    /// Fails when a name or shortcut is declared twice, when more than one [`Kind::Tail`] is declared, when the tail has a shortcut, or when a default does not fit its kind.
    pub fn build(self) -> Result<Registry, ConfigError> {
        let mut by_name = HashMap::default();
        let mut by_short = HashMap::default();
        let mut tail = None;

        for (index, schema) in self.schemas.iter().enumerate() {
            if by_name.insert(schema.name().to_string(), index).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '{}'.",
                    schema.name()
                )));
            }

            if let Some(short) = schema.short() {
                if schema.kind() == Kind::Tail {
                    return Err(ConfigError(format!(
                        "Cannot give the tail '{}' a shortcut.",
                        schema.name()
                    )));
                }

                if by_short.insert(short, index).is_some() {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the shortcut '{short}'."
                    )));
                }
            }

            if schema.kind() == Kind::Tail && tail.replace(index).is_some() {
                return Err(ConfigError(format!(
                    "Cannot declare a second tail '{}'.",
                    schema.name()
                )));
            }

            if let Some(value) = schema.default_value() {
                if !value.fits(schema.kind()) {
                    return Err(ConfigError(format!(
                        "The default '{value}' of option '{}' does not fit kind {}.",
                        schema.name(),
                        schema.kind()
                    )));
                }
            }
        }

        Ok(Registry {
            schemas: self.schemas,
            by_name,
            by_short,
            tail,
        })
    }
}

/// The validated set of option schemas, read-only for the duration of parsing.
#[derive(Debug, Clone)]
pub struct Registry {
    schemas: Vec<Schema>,
    by_name: HashMap<String, usize>,
    by_short: HashMap<char, usize>,
    tail: Option<usize>,
}

impl Registry {
    /// Start configuring a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The schema with the exact `name`.
    pub fn by_name(&self, name: &str) -> Option<&Schema> {
        self.by_name.get(name).map(|index| &self.schemas[*index])
    }

    /// The schema aliased by `short`.
    pub fn by_shortcut(&self, short: char) -> Option<&Schema> {
        self.by_short.get(&short).map(|index| &self.schemas[*index])
    }

    /// The positional tail schema, if one was declared.
    pub fn tail(&self) -> Option<&Schema> {
        self.tail.map(|index| &self.schemas[index])
    }

    /// The schemas, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter()
    }

    /// The number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether no schemas were declared.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Schema;
    type IntoIter = std::slice::Iter<'a, Schema>;

    fn into_iter(self) -> Self::IntoIter {
        self.schemas.iter()
    }
}

use std::collections::hash_map::Iter;
use std::collections::HashMap;
use thiserror::Error;

use crate::api::Registry;
use crate::model::Value;

/// A value was read with the accessor of another type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Argument '{name}' should be {expected}, but is {found}.")]
pub struct TypeMismatch {
    /// The option name.
    pub name: String,
    /// The type of the accessor used.
    pub expected: &'static str,
    /// The type of the stored value.
    pub found: &'static str,
}

/// The typed option values produced by [`Registry::parse`].
///
/// An option that was not supplied has no entry, which is distinct from an entry holding a zero value.
/// Every accessor returns the value along with whether it was supplied; an absent option yields the caller's default.
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::{Kind, Registry, Schema};
///
/// let registry = Registry::builder()
///     .add(Schema::new("jobs", Kind::Integer).shortcut('j'))
///     .build()
///     .unwrap();
/// let values = registry.parse::<&str>(&[]).unwrap();
///
/// assert_eq!(values.integer("jobs", 4).unwrap(), (4, false));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    inner: HashMap<String, Value>,
}

impl Values {
    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.inner.insert(name, value);
    }

    /// A mapping holding the declared default of every schema that has one.
    pub fn defaults(registry: &Registry) -> Self {
        let inner = registry
            .iter()
            .filter_map(|schema| {
                schema
                    .default_value()
                    .map(|value| (schema.name().to_string(), value.clone()))
            })
            .collect();

        Self { inner }
    }

    /// The supplied value for `name`, otherwise its declared default in `registry`.
    pub fn resolve<'a>(&'a self, registry: &'a Registry, name: &str) -> Option<&'a Value> {
        self.inner
            .get(name)
            .or_else(|| registry.by_name(name).and_then(|schema| schema.default_value()))
    }

    /// The raw value for `name`, if supplied.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.inner.get(name)
    }

    /// Whether `name` was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// The number of supplied options.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no option was supplied.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The supplied options, in arbitrary order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.inner.iter()
    }

    /// Read a [`Value::String`].
    pub fn string(
        &self,
        name: &str,
        default: impl Into<String>,
    ) -> Result<(String, bool), TypeMismatch> {
        self.get(name, "string", |value| match value {
            Value::String(value) => Some(value.clone()),
            _ => None,
        })
        .map(|found| found.unwrap_or_else(|| (default.into(), false)))
    }

    /// Read a [`Value::Strings`], as produced by both string lists and the tail.
    pub fn strings(
        &self,
        name: &str,
        default: Vec<String>,
    ) -> Result<(Vec<String>, bool), TypeMismatch> {
        self.get(name, "array of strings", |value| match value {
            Value::Strings(values) => Some(values.clone()),
            _ => None,
        })
        .map(|found| found.unwrap_or((default, false)))
    }

    /// Read a [`Value::Integer`].
    pub fn integer(&self, name: &str, default: i64) -> Result<(i64, bool), TypeMismatch> {
        self.get(name, "integer", |value| match value {
            Value::Integer(value) => Some(*value),
            _ => None,
        })
        .map(|found| found.unwrap_or((default, false)))
    }

    /// Read a [`Value::Float`].
    pub fn float(&self, name: &str, default: f64) -> Result<(f64, bool), TypeMismatch> {
        self.get(name, "float", |value| match value {
            Value::Float(value) => Some(*value),
            _ => None,
        })
        .map(|found| found.unwrap_or((default, false)))
    }

    /// Read a [`Value::Boolean`].
    pub fn boolean(&self, name: &str, default: bool) -> Result<(bool, bool), TypeMismatch> {
        self.get(name, "boolean", |value| match value {
            Value::Boolean(value) => Some(*value),
            _ => None,
        })
        .map(|found| found.unwrap_or((default, false)))
    }

    // Ok(None) when absent, so the caller can substitute its default lazily.
    fn get<T>(
        &self,
        name: &str,
        expected: &'static str,
        pick: impl FnOnce(&Value) -> Option<T>,
    ) -> Result<Option<(T, bool)>, TypeMismatch> {
        match self.inner.get(name) {
            None => Ok(None),
            Some(value) => match pick(value) {
                Some(picked) => Ok(Some((picked, true))),
                None => Err(TypeMismatch {
                    name: name.to_string(),
                    expected,
                    found: value.type_name(),
                }),
            },
        }
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl From<Values> for HashMap<String, Value> {
    fn from(values: Values) -> Self {
        values.inner
    }
}

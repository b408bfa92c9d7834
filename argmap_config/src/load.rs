use argmap_builder::{Kind, Schema, Value};
use serde_yaml::{Mapping, Value as Tree};

use crate::{kind_named, SchemaError};

pub(crate) fn schema(name: &str, tree: &Tree) -> Result<Schema, SchemaError> {
    let mapping = tree
        .as_mapping()
        .ok_or_else(|| SchemaError::OptionNotAMap(name.to_string()))?;
    let kind = kind(name, mapping)?;
    let mut schema = Schema::new(name, kind);

    if let Some(title) = text(name, mapping, "title")? {
        schema = schema.title(title);
    }

    if let Some(description) = text(name, mapping, "description")? {
        schema = schema.description(description);
    }

    if let Some(short) = shortcut(name, kind, mapping)? {
        schema = schema.shortcut(short);
    }

    if required(name, mapping)? {
        schema = schema.required();
    }

    if let Some(value) = default(name, kind, mapping)? {
        schema = schema.default(value);
    }

    Ok(schema)
}

fn kind(name: &str, mapping: &Mapping) -> Result<Kind, SchemaError> {
    let tree = mapping
        .get("type")
        .ok_or_else(|| SchemaError::MissingType(name.to_string()))?;
    let kind_name = tree
        .as_str()
        .ok_or_else(|| invalid_field(name, "type", "a string"))?;

    kind_named(kind_name).ok_or_else(|| SchemaError::UnknownType {
        name: name.to_string(),
        kind: kind_name.to_string(),
    })
}

fn text(
    name: &str,
    mapping: &Mapping,
    field: &'static str,
) -> Result<Option<String>, SchemaError> {
    match mapping.get(field) {
        None => Ok(None),
        Some(tree) => tree
            .as_str()
            .map(|value| Some(value.to_string()))
            .ok_or_else(|| invalid_field(name, field, "a string")),
    }
}

fn shortcut(name: &str, kind: Kind, mapping: &Mapping) -> Result<Option<char>, SchemaError> {
    let Some(value) = text(name, mapping, "shortcut")? else {
        return Ok(None);
    };
    let mut chars = value.chars();

    match (chars.next(), chars.next()) {
        // An empty shortcut declares none.
        (None, _) => Ok(None),
        (Some(_), None) if kind == Kind::Tail => {
            Err(invalid_field(name, "shortcut", "absent for a tail"))
        }
        (Some(short), None) => Ok(Some(short)),
        (Some(_), Some(_)) => Err(invalid_field(name, "shortcut", "a single character")),
    }
}

fn required(name: &str, mapping: &Mapping) -> Result<bool, SchemaError> {
    match mapping.get("required") {
        None => Ok(false),
        Some(tree) => tree
            .as_bool()
            .ok_or_else(|| invalid_field(name, "required", "a boolean")),
    }
}

fn default(name: &str, kind: Kind, mapping: &Mapping) -> Result<Option<Value>, SchemaError> {
    let tree = match mapping.get("default") {
        None | Some(Tree::Null) => return Ok(None),
        Some(tree) => tree,
    };
    let value = match kind {
        Kind::String => tree.as_str().map(|value| Value::String(value.to_string())),
        Kind::Strings | Kind::Tail => tree.as_sequence().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
                .map(Value::Strings)
        }),
        Kind::Integer => tree.as_i64().map(Value::Integer),
        Kind::Float => tree.as_f64().map(Value::Float),
        Kind::Flag => tree.as_bool().map(Value::Boolean),
    };

    value.map(Some).ok_or_else(|| SchemaError::InvalidDefault {
        name: name.to_string(),
        kind,
    })
}

fn invalid_field(name: &str, field: &'static str, expected: &'static str) -> SchemaError {
    SchemaError::InvalidField {
        name: name.to_string(),
        field,
        expected,
    }
}

use std::str::FromStr;

use crate::api::Schema;
use crate::model::{Kind, Value};
use crate::parser::base::{ParseError, LONG_PREFIX};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// How an option token was spelled, which matters only to flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Spelling {
    Long,
    Negated,
    Short,
}

/// Produce the value for `schema`, whose option token sits at `cursor`.
///
/// Returns the value together with the number of tokens consumed *after* the option token.
pub(super) fn extract<S: AsRef<str>>(
    schema: &Schema,
    tokens: &[S],
    cursor: usize,
    spelling: Spelling,
) -> Result<(Value, usize), ParseError> {
    let (value, shift) = match schema.kind() {
        Kind::String => {
            let token = single(schema, tokens, cursor)?;
            (Value::String(token.to_string()), 1)
        }
        Kind::Strings => {
            let values: Vec<String> = tokens
                .iter()
                .skip(cursor + 1)
                .map(AsRef::as_ref)
                .take_while(|token| !token.starts_with(LONG_PREFIX))
                .map(str::to_string)
                .collect();
            let shift = values.len();
            (Value::Strings(values), shift)
        }
        Kind::Integer => {
            let token = single(schema, tokens, cursor)?;
            (Value::Integer(convert(schema, token)?), 1)
        }
        Kind::Float => {
            let token = single(schema, tokens, cursor)?;
            (Value::Float(convert(schema, token)?), 1)
        }
        Kind::Flag => (Value::Boolean(spelling != Spelling::Negated), 0),
        Kind::Tail => {
            unreachable!("internal error - the tail is never addressed as an option")
        }
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Extracted {name}={value} ({kind}), consuming {shift} value token(s).",
            name = schema.name(),
            kind = schema.kind()
        );
    }

    Ok((value, shift))
}

fn single<'t, S: AsRef<str>>(
    schema: &Schema,
    tokens: &'t [S],
    cursor: usize,
) -> Result<&'t str, ParseError> {
    tokens
        .get(cursor + 1)
        .map(AsRef::as_ref)
        .ok_or_else(|| ParseError::MissingValue(schema.name().to_string()))
}

fn convert<T: FromStr>(schema: &Schema, token: &str) -> Result<T, ParseError> {
    T::from_str(token).map_err(|_| ParseError::InvalidConversion {
        name: schema.name().to_string(),
        token: token.to_string(),
        kind: schema.kind(),
    })
}

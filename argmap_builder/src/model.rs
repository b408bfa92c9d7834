/// The declared type of an option, which decides how many tokens it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `--name VALUE`: precisely 1 value, taken verbatim.
    String,
    /// `--name [VALUE ...]`: any amount of values, captured greedily up to the next `--` token.
    Strings,
    /// `--name VALUE`: precisely 1 value, parsed as a base-10 `i64`.
    Integer,
    /// `--name VALUE`: precisely 1 value, parsed as an `f64`.
    Float,
    /// `--name` or `--no-name`: no values.
    Flag,
    /// Every token from the first positional onwards.
    Tail,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Strings => "strings",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Flag => "flag",
            Kind::Tail => "tail",
        };
        write!(f, "{name}")
    }
}

/// A parsed option value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Produced by [`Kind::String`].
    String(String),
    /// Produced by [`Kind::Strings`] and [`Kind::Tail`].
    Strings(Vec<String>),
    /// Produced by [`Kind::Integer`].
    Integer(i64),
    /// Produced by [`Kind::Float`].
    Float(f64),
    /// Produced by [`Kind::Flag`].
    Boolean(bool),
}

impl Value {
    /// The name of the variant, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Strings(_) => "array of strings",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Boolean(_) => "boolean",
        }
    }

    /// Whether this value may be produced by an option of `kind`.
    pub fn fits(&self, kind: Kind) -> bool {
        matches!(
            (self, kind),
            (Value::String(_), Kind::String)
                | (Value::Strings(_), Kind::Strings)
                | (Value::Strings(_), Kind::Tail)
                | (Value::Integer(_), Kind::Integer)
                | (Value::Float(_), Kind::Float)
                | (Value::Boolean(_), Kind::Flag)
        )
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{value}"),
            Value::Strings(values) => write!(f, "[{}]", values.join(", ")),
            Value::Integer(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::Strings(values)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

use crate::model::{Kind, Value};

/// The declaration of a single option.
///
/// The `name` doubles as the long spelling (`--name`), and the optional `shortcut` as the short spelling (`-n`).
///
/// ### Example
/// ```
/// # use argmap_builder as argmap;
/// use argmap::{Kind, Schema, Value};
///
/// let schema = Schema::new("count", Kind::Integer)
///     .shortcut('c')
///     .default(Value::Integer(1))
///     .description("How many times to run.");
///
/// assert_eq!(schema.name(), "count");
/// assert_eq!(schema.short(), Some('c'));
/// assert!(schema.has_default());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    kind: Kind,
    shortcut: Option<char>,
    required: bool,
    default: Option<Value>,
    title: Option<String>,
    description: Option<String>,
}

impl Schema {
    /// Create an optional schema of `kind`, without a shortcut or default.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            kind,
            shortcut: None,
            required: false,
            default: None,
            title: None,
            description: None,
        }
    }

    /// Set the single character alias (`-c`).
    /// If repeated, only the final shortcut will apply.
    pub fn shortcut(mut self, shortcut: char) -> Self {
        self.shortcut.replace(shortcut);
        self
    }

    /// Mark the option as required.
    /// This has no effect on a [`Kind::Flag`], since an absent flag is a valid `false`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value, returned by [`crate::Values::resolve`] when the option is not supplied.
    pub fn default(mut self, value: Value) -> Self {
        self.default.replace(value);
        self
    }

    /// Document the title of the option.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title.replace(title.into());
        self
    }

    /// Document the description of the option.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// The option name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The shortcut character, if any.
    pub fn short(&self) -> Option<char> {
        self.shortcut
    }

    /// Whether parsing must fail when this option is not supplied.
    pub fn is_required(&self) -> bool {
        self.required && self.kind != Kind::Flag
    }

    /// Whether a default value was declared.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The declared default value, if any.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The documented title, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The documented description, if any.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

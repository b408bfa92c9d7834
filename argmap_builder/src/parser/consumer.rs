use crate::api::{Registry, Schema};
use crate::model::{Kind, Value};
use crate::parser::base::*;
use crate::parser::extract::{extract, Spelling};
use crate::values::Values;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

impl Registry {
    /// Parse the invocation tokens (excluding the program name) into a [`Values`] mapping.
    ///
    /// Tokens are classified left to right:
    /// * `--name` matches the option `name`, or failing that, `--no-name` matches the flag `name`.
    ///   A flag spelled with the `--no-` prefix is `false`, even when its own name starts with `no-`.
    /// * `-c` matches the option with shortcut `c`.
    /// * `-abc` sets each of the flags with shortcuts `a`, `b` and `c`.
    /// * Anything else starts the positional tail, which captures every remaining token.
    ///
    /// Once all tokens are consumed, every required option must have been supplied.
    ///
    /// ### Example
    /// ```
    /// # use argmap_builder as argmap;
    /// use argmap::{Kind, Registry, Schema};
    ///
    /// let registry = Registry::builder()
    ///     .add(Schema::new("name", Kind::String).shortcut('n').required())
    ///     .add(Schema::new("loud", Kind::Flag).shortcut('l'))
    ///     .build()
    ///     .unwrap();
    ///
    /// let values = registry.parse(&["-n", "world", "--no-loud"]).unwrap();
    ///
    /// assert_eq!(values.string("name", "").unwrap(), ("world".to_string(), true));
    /// assert_eq!(values.boolean("loud", true).unwrap(), (false, true));
    /// ```
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Values, ParseError> {
        let mut consumer = Consumer {
            registry: self,
            tokens,
            cursor: 0,
            values: Values::default(),
        };

        consumer.consume()?;
        let Consumer { values, .. } = consumer;
        self.check_required(&values)?;
        Ok(values)
    }

    fn check_required(&self, values: &Values) -> Result<(), ParseError> {
        match self
            .iter()
            .find(|schema| schema.is_required() && !values.contains(schema.name()))
        {
            Some(schema) => Err(ParseError::RequiredMissing(schema.name().to_string())),
            None => Ok(()),
        }
    }

    fn option_by_name(&self, name: &str) -> Option<&Schema> {
        self.by_name(name).filter(|schema| schema.kind() != Kind::Tail)
    }

    fn option_by_shortcut(&self, short: char) -> Option<&Schema> {
        self.by_shortcut(short).filter(|schema| schema.kind() != Kind::Tail)
    }
}

struct Consumer<'r, 't, S> {
    registry: &'r Registry,
    tokens: &'t [S],
    cursor: usize,
    values: Values,
}

impl<'r, 't, S: AsRef<str>> Consumer<'r, 't, S> {
    fn consume(&mut self) -> Result<(), ParseError> {
        let tokens = self.tokens;

        while let Some(token) = tokens.get(self.cursor).map(AsRef::as_ref) {
            if let Some(name) = token.strip_prefix(LONG_PREFIX) {
                self.long(token, name)?;
            } else if let Some(shorts) = token.strip_prefix(SHORT_PREFIX) {
                let mut chars = shorts.chars();

                // A lone `-` is an empty cluster.
                match (chars.next(), chars.next()) {
                    (Some(short), None) => self.short(token, short)?,
                    _ => self.cluster(token, shorts)?,
                }
            } else {
                // The tail swallows everything from here on.
                return self.tail(token);
            }
        }

        Ok(())
    }

    fn long(&mut self, token: &str, name: &str) -> Result<(), ParseError> {
        let registry = self.registry;
        let schema = registry
            .option_by_name(name)
            .or_else(|| {
                name.strip_prefix(NEGATION_PREFIX)
                    .and_then(|name| registry.option_by_name(name))
            })
            .ok_or_else(|| ParseError::UnknownOption(token.to_string()))?;
        // The spelling follows the token, whichever lookup matched.
        let spelling = if name.starts_with(NEGATION_PREFIX) {
            Spelling::Negated
        } else {
            Spelling::Long
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Token '{token}' at {cursor} matched option '{name}' ({spelling:?}).",
                cursor = self.cursor,
                name = schema.name()
            );
        }

        self.apply(schema, spelling)
    }

    fn short(&mut self, token: &str, short: char) -> Result<(), ParseError> {
        let registry = self.registry;
        let schema = registry
            .option_by_shortcut(short)
            .ok_or_else(|| ParseError::UnknownFlag(token.to_string()))?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Token '{token}' at {cursor} matched shortcut for '{name}'.",
                cursor = self.cursor,
                name = schema.name()
            );
        }

        self.apply(schema, Spelling::Short)
    }

    fn cluster(&mut self, token: &str, shorts: &str) -> Result<(), ParseError> {
        let registry = self.registry;

        for short in shorts.chars() {
            let schema = registry
                .option_by_shortcut(short)
                .ok_or_else(|| ParseError::UnknownFlag(format!("{SHORT_PREFIX}{short}")))?;

            if schema.kind() != Kind::Flag {
                return Err(ParseError::MixedCluster(token.to_string()));
            }

            self.values.insert(schema.name().to_string(), Value::Boolean(true));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Token '{token}' at {cursor} matched a cluster of {count} flag(s).",
                cursor = self.cursor,
                count = shorts.chars().count()
            );
        }

        // Clusters never take values.
        self.cursor += 1;
        Ok(())
    }

    fn tail(&mut self, token: &str) -> Result<(), ParseError> {
        let registry = self.registry;
        let schema = registry
            .tail()
            .ok_or_else(|| ParseError::UnknownArgument(token.to_string()))?;
        let remaining: Vec<String> = self.tokens[self.cursor..]
            .iter()
            .map(|token| token.as_ref().to_string())
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Token '{token}' at {cursor} starts the tail '{name}' of {count} token(s).",
                cursor = self.cursor,
                name = schema.name(),
                count = remaining.len()
            );
        }

        self.values.insert(schema.name().to_string(), Value::Strings(remaining));
        self.cursor = self.tokens.len();
        Ok(())
    }

    fn apply(&mut self, schema: &Schema, spelling: Spelling) -> Result<(), ParseError> {
        let (value, shift) = extract(schema, self.tokens, self.cursor, spelling)?;
        self.values.insert(schema.name().to_string(), value);
        self.cursor += 1 + shift;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(values: &[&str]) -> Value {
        Value::Strings(values.iter().map(|v| v.to_string()).collect())
    }

    fn registry(schemas: Vec<Schema>) -> Registry {
        schemas
            .into_iter()
            .fold(Registry::builder(), |builder, schema| builder.add(schema))
            .build()
            .unwrap()
    }

    #[test]
    fn parse_empty() {
        let values = registry(vec![]).parse::<&str>(&[]).unwrap();
        assert!(values.is_empty());
    }

    #[rstest]
    #[case(Kind::String, vec!["--key", "value"], Value::from("value"))]
    #[case(Kind::String, vec!["-k", "value"], Value::from("value"))]
    #[case(Kind::Integer, vec!["--key", "100"], Value::Integer(100))]
    #[case(Kind::Integer, vec!["-k", "-3"], Value::Integer(-3))]
    #[case(Kind::Float, vec!["--key", "100.0"], Value::Float(100.0))]
    #[case(Kind::Flag, vec!["--key"], Value::Boolean(true))]
    #[case(Kind::Flag, vec!["-k"], Value::Boolean(true))]
    #[case(Kind::Flag, vec!["--no-key"], Value::Boolean(false))]
    #[case(Kind::Strings, vec!["--key"], strings(&[]))]
    #[case(Kind::Strings, vec!["--key", "a", "b"], strings(&["a", "b"]))]
    #[case(Kind::Strings, vec!["-k", "a", "-b"], strings(&["a", "-b"]))]
    fn parse_single(#[case] kind: Kind, #[case] tokens: Vec<&str>, #[case] expected: Value) {
        // Setup
        let registry = registry(vec![Schema::new("key", kind).shortcut('k')]);

        // Execute
        let values = registry.parse(&tokens).unwrap();

        // Verify
        assert_eq!(values.len(), 1);
        assert_eq!(values.value("key"), Some(&expected));
    }

    #[test]
    fn parse_strings_then_string() {
        // Setup
        let registry = registry(vec![
            Schema::new("list", Kind::Strings),
            Schema::new("other", Kind::String),
        ]);

        // Execute
        let values = registry
            .parse(&["--list", "a", "b", "--other", "x"])
            .unwrap();

        // Verify
        assert_eq!(values.value("list"), Some(&strings(&["a", "b"])));
        assert_eq!(values.value("other"), Some(&Value::from("x")));
    }

    #[test]
    fn parse_exact_name_before_negation() {
        // Setup
        let registry = registry(vec![
            Schema::new("no-cache", Kind::Flag),
            Schema::new("cache", Kind::Flag),
        ]);

        // Execute
        let values = registry.parse(&["--no-cache"]).unwrap();

        // Verify
        assert_eq!(values.value("no-cache"), Some(&Value::Boolean(false)));
        assert_eq!(values.value("cache"), None);
    }

    #[rstest]
    #[case(vec!["--no-cache"], false)]
    #[case(vec!["--no-no-cache"], false)]
    fn parse_negation_prefixed_flag(#[case] tokens: Vec<&str>, #[case] expected: bool) {
        // Setup
        let registry = registry(vec![Schema::new("no-cache", Kind::Flag)]);

        // Execute
        let values = registry.parse(&tokens).unwrap();

        // Verify
        assert_eq!(values.len(), 1);
        assert_eq!(values.value("no-cache"), Some(&Value::Boolean(expected)));
    }

    #[rstest]
    #[case(vec!["-"], None)]
    #[case(vec!["-", "-f"], Some(true))]
    #[case(vec!["-f", "-", "--no-flag"], Some(false))]
    fn parse_lone_dash_skipped(#[case] tokens: Vec<&str>, #[case] expected: Option<bool>) {
        // Setup
        let registry = registry(vec![
            Schema::new("flag", Kind::Flag).shortcut('f'),
            Schema::new("rest", Kind::Tail),
        ]);

        // Execute
        let values = registry.parse(&tokens).unwrap();

        // Verify
        assert_eq!(values.value("flag"), expected.map(Value::Boolean).as_ref());
        assert_eq!(values.value("rest"), None);
    }

    #[test]
    fn parse_negated_non_flag() {
        let registry = registry(vec![Schema::new("key", Kind::String)]);
        let values = registry.parse(&["--no-key", "value"]).unwrap();
        assert_eq!(values.value("key"), Some(&Value::from("value")));
    }

    #[test]
    fn parse_cluster() {
        // Setup
        let registry = registry(vec![
            Schema::new("flag", Kind::Flag).shortcut('f'),
            Schema::new("bool", Kind::Flag).shortcut('b'),
            Schema::new("rest", Kind::Tail),
        ]);

        // Execute
        let values = registry.parse(&["-fb", "value"]).unwrap();

        // Verify
        assert_eq!(values.value("flag"), Some(&Value::Boolean(true)));
        assert_eq!(values.value("bool"), Some(&Value::Boolean(true)));
        assert_eq!(values.value("rest"), Some(&strings(&["value"])));
    }

    #[test]
    fn parse_cluster_multibyte() {
        // Setup
        let registry = registry(vec![
            Schema::new("eh", Kind::String).shortcut('é'),
            Schema::new("ex", Kind::Flag).shortcut('x'),
        ]);

        // Execute
        let single = registry.parse(&["-é", "value"]).unwrap();
        let cluster = registry.parse(&["-xé"]);

        // Verify
        assert_eq!(single.value("eh"), Some(&Value::from("value")));
        assert_eq!(cluster, Err(ParseError::MixedCluster("-xé".to_string())));
    }

    #[rstest]
    #[case(vec!["-kv", "value"], ParseError::MixedCluster("-kv".to_string()))]
    #[case(vec!["-vk"], ParseError::MixedCluster("-vk".to_string()))]
    #[case(vec!["-kz"], ParseError::UnknownFlag("-z".to_string()))]
    #[case(vec!["-z"], ParseError::UnknownFlag("-z".to_string()))]
    #[case(vec!["--zed"], ParseError::UnknownOption("--zed".to_string()))]
    #[case(vec!["--no-zed"], ParseError::UnknownOption("--no-zed".to_string()))]
    #[case(vec!["--"], ParseError::UnknownOption("--".to_string()))]
    #[case(vec!["zed"], ParseError::UnknownArgument("zed".to_string()))]
    #[case(vec!["-k", "zed"], ParseError::UnknownArgument("zed".to_string()))]
    #[case(vec!["--value"], ParseError::MissingValue("value".to_string()))]
    #[case(vec!["-k", "--value"], ParseError::MissingValue("value".to_string()))]
    fn parse_errors(#[case] tokens: Vec<&str>, #[case] expected: ParseError) {
        // Setup
        let registry = registry(vec![
            Schema::new("key", Kind::Flag).shortcut('k'),
            Schema::new("value", Kind::String).shortcut('v'),
        ]);

        // Execute
        let result = registry.parse(&tokens);

        // Verify
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn parse_invalid_conversion() {
        let registry = registry(vec![Schema::new("count", Kind::Integer)]);
        let result = registry.parse(&["--count", "many"]);

        assert_eq!(
            result.unwrap_err().to_string(),
            "Cannot convert 'many' to integer for option 'count'."
        );
    }

    #[test]
    fn parse_tail() {
        // Setup
        let registry = registry(vec![
            Schema::new("key", Kind::String),
            Schema::new("tail", Kind::Tail),
        ]);

        // Execute
        let values = registry
            .parse(&["--key", "k", "value1", "--key", "-x", "value2"])
            .unwrap();

        // Verify
        assert_eq!(values.value("key"), Some(&Value::from("k")));
        assert_eq!(
            values.value("tail"),
            Some(&strings(&["value1", "--key", "-x", "value2"]))
        );
    }

    #[test]
    fn parse_tail_not_an_option() {
        let registry = registry(vec![Schema::new("tail", Kind::Tail)]);
        let result = registry.parse(&["--tail", "value"]);
        assert_eq!(result, Err(ParseError::UnknownOption("--tail".to_string())));
    }

    #[test]
    fn parse_last_occurrence_wins() {
        let registry = registry(vec![Schema::new("key", Kind::String).shortcut('k')]);
        let values = registry.parse(&["--key", "a", "-k", "b"]).unwrap();
        assert_eq!(values.value("key"), Some(&Value::from("b")));
    }

    #[rstest]
    #[case(Kind::String)]
    #[case(Kind::Strings)]
    #[case(Kind::Integer)]
    #[case(Kind::Float)]
    #[case(Kind::Tail)]
    fn parse_required_missing(#[case] kind: Kind) {
        // Setup
        let registry = registry(vec![
            Schema::new("other", Kind::Flag),
            Schema::new("key", kind).required(),
        ]);

        // Execute
        let result = registry.parse(&["--other"]);

        // Verify
        assert_eq!(result, Err(ParseError::RequiredMissing("key".to_string())));
    }

    #[test]
    fn parse_required_flag_ignored() {
        let registry = registry(vec![Schema::new("flag", Kind::Flag).required()]);
        let values = registry.parse::<&str>(&[]).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn parse_required_reported_in_order() {
        // Setup
        let registry = registry(vec![
            Schema::new("first", Kind::String).required(),
            Schema::new("second", Kind::String).required(),
        ]);

        // Execute
        let result = registry.parse(&["--second", "x"]);

        // Verify
        assert_eq!(result, Err(ParseError::RequiredMissing("first".to_string())));
    }

    #[test]
    fn parse_errors_before_required() {
        let registry = registry(vec![Schema::new("key", Kind::String).required()]);
        let result = registry.parse(&["--zed"]);
        assert_eq!(result, Err(ParseError::UnknownOption("--zed".to_string())));
    }

    #[test]
    fn parse_idempotent() {
        // Setup
        let registry = registry(vec![
            Schema::new("list", Kind::Strings).shortcut('l'),
            Schema::new("flag", Kind::Flag).shortcut('f'),
            Schema::new("rest", Kind::Tail),
        ]);
        let tokens = vec![
            "-f".to_string(),
            "--list".to_string(),
            "a".to_string(),
            "--no-flag".to_string(),
            "b".to_string(),
        ];

        // Execute
        let first = registry.parse(&tokens).unwrap();
        let second = registry.parse(&tokens).unwrap();

        // Verify
        assert_eq!(first, second);
        assert_eq!(first.value("flag"), Some(&Value::Boolean(false)));
        assert_eq!(first.value("rest"), Some(&strings(&["b"])));
    }
}

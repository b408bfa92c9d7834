//! `argmap` is a schema driven command line parser for Rust.
//!
//! Rather than binding Cli parameters onto program variables, `argmap` produces a mapping from option name to typed [`Value`].
//! The schema of the Cli is declared up front (programmatically, or decoded from a configuration document), after which any number of token lists may be parsed against it.
//! `argmap` prioritizes the following design concerns:
//! * *Declarative schema*:
//! Each option declares its name, kind, shortcut, requiredness and default.
//! The schema may live in a configuration document rather than in code.
//! * *Strict parsing*:
//! Every token must be accounted for by the schema; unknown options, malformed values and missing required options are errors.
//! * *Typed access*:
//! The accessors on [`Values`] return the value along with whether it was supplied, and never panic on an absent or mismatched option.
//!
//! `argmap` does not print help text, read the environment, or exit the process.
//! These are left to the Cli front-end.
//!
//! # Usage
//! Via the builder Api:
//! ```
//! use argmap::{Kind, Registry, Schema};
//!
//! let registry = Registry::builder()
//!     .add(Schema::new("count", Kind::Integer).shortcut('c').required())
//!     .add(Schema::new("verbose", Kind::Flag).shortcut('v'))
//!     .add(Schema::new("files", Kind::Tail))
//!     .build()
//!     .unwrap();
//!
//! let values = registry.parse(&["-v", "--count", "3", "a.txt", "b.txt"]).unwrap();
//!
//! assert_eq!(values.integer("count", 1).unwrap(), (3, true));
//! assert_eq!(values.boolean("verbose", false).unwrap(), (true, true));
//! assert_eq!(
//!     values.strings("files", vec![]).unwrap(),
//!     (vec!["a.txt".to_string(), "b.txt".to_string()], true)
//! );
//! ```
//!
//! or equivalently via the [configuration Api](./config/index.html):
//! ```
//! let registry = argmap::config::from_yaml(
//!     r#"
//! count:
//!   type: integer
//!   shortcut: c
//!   required: true
//! verbose:
//!   type: flag
//!   shortcut: v
//! files:
//!   type: tail
//! "#,
//! )
//! .unwrap();
//!
//! let values = registry.parse(&["-v", "--count", "3", "a.txt", "b.txt"]).unwrap();
//! assert_eq!(values.integer("count", 1).unwrap(), (3, true));
//! ```
//!
//! # Cli Semantics
//! `argmap` walks the tokens left to right, according to the following rules.
//!
//! * `--NAME` matches the option `NAME` exactly.
//! Failing that, `--no-NAME` matches the option `NAME` in negated form.
//! A flag spelled with `--no-` is `false`, even a flag whose own name starts with `no-`.
//! * `-N` (precisely one character) matches the option with shortcut `N`.
//! * `-ABC` (more than one character) is a cluster of flags.
//! Every character must be the shortcut of a [`Kind::Flag`]; a cluster never takes values.
//! For example, `-abc` is equivalent to `-a -b -c`.
//! * A lone `-` is an empty cluster, and is skipped.
//! * Any other token starts the positional tail.
//! The [`Kind::Tail`] option captures it along with *every* remaining token, options included.
//! Without a tail option, the token is an error.
//! * When an option is repeated, the final occurrence wins.
//! * After all the tokens are consumed, each required option must have been supplied.
//!
//! ### Kind-Token Interaction
//! ```console
//! Kind      | Syntax                | Value          | Description
//! ------------------------------------------------------------------------------------------
//! String    | --NAME VALUE          | String(..)     | precisely 1; taken verbatim
//! Strings   | --NAME [VALUE ...]    | Strings(..)    | any amount; captured greedily until a `--` token
//! Integer   | --NAME VALUE          | Integer(..)    | precisely 1; base-10 i64
//! Float     | --NAME VALUE          | Float(..)      | precisely 1; f64
//! Flag      | --NAME or --no-NAME   | Boolean(..)    | precisely 0; `true`, or `false` when negated
//! Tail      | VALUE [...]           | Strings(..)    | the remainder of the tokens
//! ```
//!
//! Notice, the greedy `Strings` capture only stops at a `--` token.
//! A following short option is captured as a value: `--list a -v` yields `["a", "-v"]`.
//!
//! # Defaults
//! Parsing never inserts defaults; an option that was not supplied has no entry in [`Values`].
//! Each accessor takes the caller's default for that case.
//! The defaults declared on the schema are available via [`Values::resolve`] and [`Values::defaults`].
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while parsing and decoding.
pub mod config;
pub use argmap_builder::*;

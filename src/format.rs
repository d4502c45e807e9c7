//! Message values and printf-style interpolation.
//!
//! A [`Message`] is either plain text, which may act as a template for
//! [`Arg`]s, or the stack text of an error. [`format_message`] implements the
//! directive set:
//!
//! | Directive | Rendering |
//! |-----------|-----------|
//! | `%s` | display string |
//! | `%d` `%i` | integer (`%i` truncates fractions) |
//! | `%f` | floating-point number |
//! | `%j` | JSON text |
//! | `%o` `%O` | inspected form, strings quoted |
//! | `%c` | consumes an argument, renders nothing |
//! | `%%` | literal `%` |
//!
//! ```rust
//! use taglog::{format_message, Arg};
//!
//! let text = format_message("X %s are", &[Arg::from("YOU")]);
//! assert_eq!(text, "X YOU are");
//! ```

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;

static DIRECTIVE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"%[sdifjoOc%]").ok());

static FLOAT_PREFIX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)").ok());

static DECIMAL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)$").ok());

static INT_PREFIX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[+-]?\d+").ok());

/// A substitution value for a format directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Json(Value),
    Null,
}

impl Arg {
    /// `%s` rendering.
    fn display(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => number_text(*f),
            Self::Bool(b) => b.to_string(),
            Self::Json(Value::String(s)) => s.clone(),
            Self::Json(v) => v.to_string(),
            Self::Null => "null".to_string(),
        }
    }

    /// `%o` / `%O` rendering, also used for trailing non-string arguments.
    fn inspect(&self) -> String {
        match self {
            Self::Str(s) => format!("'{s}'"),
            Self::Json(Value::String(s)) => format!("'{s}'"),
            other => other.display(),
        }
    }

    /// `%j` rendering.
    fn json(&self) -> String {
        match self {
            Self::Str(s) => Value::String(s.clone()).to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) if f.is_finite() => number_text(*f),
            Self::Float(_) => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Json(v) => v.to_string(),
            Self::Null => "null".to_string(),
        }
    }

    /// Numeric coercion used by `%d`.
    fn number(&self) -> f64 {
        match self {
            Self::Str(s) => parse_number(s),
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Json(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            Self::Json(Value::String(s)) => parse_number(s),
            Self::Json(Value::Bool(b)) => f64::from(u8::from(*b)),
            Self::Json(Value::Null) | Self::Null => 0.0,
            Self::Json(_) => f64::NAN,
        }
    }

    /// Leading-prefix parse used by `%f`; booleans and null are not numbers here.
    fn float(&self) -> f64 {
        match self {
            Self::Str(s) | Self::Json(Value::String(s)) => float_prefix(s),
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Json(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }

    fn render_directive(&self, directive: &str) -> String {
        match directive {
            "%s" => self.display(),
            "%d" => match self {
                Self::Int(i) => i.to_string(),
                other => number_text(other.number()),
            },
            "%i" => match self {
                Self::Int(i) => i.to_string(),
                Self::Str(s) | Self::Json(Value::String(s)) => int_prefix(s),
                other => number_text(other.float().trunc()),
            },
            "%f" => number_text(self.float()),
            "%j" => self.json(),
            "%o" | "%O" => self.inspect(),
            "%c" => String::new(),
            other => other.to_string(),
        }
    }
}

fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        exponent_text(n)
    } else {
        n.to_string()
    }
}

/// Shortest exponent form with an explicit exponent sign, e.g. `1e+21`.
fn exponent_text(n: f64) -> String {
    let text = format!("{n:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

fn parse_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if is_decimal(trimmed) => trimmed.parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Decimal literal only; `inf`, `nan` and friends are not numbers here.
fn is_decimal(s: &str) -> bool {
    DECIMAL.as_ref().is_some_and(|re| re.is_match(s))
}

fn float_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let Some(prefix) = FLOAT_PREFIX.as_ref().and_then(|re| re.find(trimmed)) else {
        return f64::NAN;
    };
    parse_number(prefix.as_str())
}

fn int_prefix(s: &str) -> String {
    let trimmed = s.trim_start();
    INT_PREFIX
        .as_ref()
        .and_then(|re| re.find(trimmed))
        .map(|m| m.as_str().trim_start_matches('+').to_string())
        .unwrap_or_else(|| "NaN".to_string())
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

macro_rules! int_arg {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

int_arg!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Arg {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Interpolate `args` into `template`.
///
/// Directives without a matching argument are left as written, and arguments
/// without a directive are appended separated by spaces. With no arguments the
/// template is returned unchanged.
pub fn format_message(template: &str, args: &[Arg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut rest = args.iter();
    let mut out = match DIRECTIVE.as_ref() {
        Some(re) => re
            .replace_all(template, |caps: &Captures<'_>| {
                let directive = &caps[0];
                if directive == "%%" {
                    return "%".to_string();
                }
                match rest.next() {
                    Some(arg) => arg.render_directive(directive),
                    None => directive.to_string(),
                }
            })
            .into_owned(),
        None => template.to_string(),
    };

    append_args(&mut out, rest);
    out
}

fn append_args<'a>(out: &mut String, args: impl Iterator<Item = &'a Arg>) {
    for arg in args {
        out.push(' ');
        match arg {
            Arg::Str(s) | Arg::Json(Value::String(s)) => out.push_str(s),
            other => out.push_str(&other.inspect()),
        }
    }
}

/// The resolved message value of a logging call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Plain text, used as a template when format arguments are present.
    Text(String),
    /// Stack text of an error. Never interpolated.
    Stack(String),
}

impl Message {
    /// Build a message from any error, rendering its source chain.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self::Stack(stack_text(err, None))
    }

    /// Produce the final text handed to the sink.
    pub fn render(self, args: &[Arg]) -> String {
        match self {
            Self::Text(template) => format_message(&template, args),
            Self::Stack(mut stack) => {
                append_args(&mut stack, args.iter());
                stack
            }
        }
    }
}

/// Stack text for an error: the head line, one line per cause, then the
/// backtrace if one was captured.
fn stack_text(err: &(dyn Error + 'static), backtrace: Option<&Backtrace>) -> String {
    let mut text = format!("Error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(&format!("\n    caused by: {cause}"));
        source = cause.source();
    }
    if let Some(bt) = backtrace.filter(|bt| bt.status() == BacktraceStatus::Captured) {
        text.push_str(&format!("\n\n{bt}"));
    }
    text
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Message {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Message {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(value: fmt::Arguments<'_>) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<&anyhow::Error> for Message {
    fn from(err: &anyhow::Error) -> Self {
        let root: &(dyn Error + Send + Sync + 'static) = err.as_ref();
        Self::Stack(stack_text(root, Some(err.backtrace())))
    }
}

impl From<anyhow::Error> for Message {
    fn from(err: anyhow::Error) -> Self {
        Self::from(&err)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Message {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        Self::from_error(&*err)
    }
}

impl From<&(dyn Error + 'static)> for Message {
    fn from(err: &(dyn Error + 'static)) -> Self {
        Self::from_error(err)
    }
}

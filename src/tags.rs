//! Tag arguments and their normalization.

use serde_json::Value;

/// Extra tags passed to a single logging call.
///
/// Every accepted shape converts into one of three variants, and
/// [`normalize`](Self::normalize) turns any of them into the canonical ordered
/// sequence. A single string is the same as a one-element sequence.
///
/// ```rust
/// use taglog::Tags;
///
/// assert_eq!(Tags::from("extra").normalize(), vec!["extra"]);
/// assert_eq!(Tags::from(["a", "b"]).normalize(), vec!["a", "b"]);
/// assert!(Tags::Empty.normalize().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tags {
    #[default]
    Empty,
    Single(String),
    Many(Vec<String>),
}

impl Tags {
    /// Produce the ordered tag sequence.
    pub fn normalize(self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(tag) => vec![tag],
            Self::Many(tags) => tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(_) => false,
            Self::Many(tags) => tags.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Many(tags) => tags.len(),
        }
    }
}

impl From<()> for Tags {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<&str> for Tags {
    fn from(tag: &str) -> Self {
        Self::Single(tag.to_string())
    }
}

impl From<String> for Tags {
    fn from(tag: String) -> Self {
        Self::Single(tag)
    }
}

impl From<&String> for Tags {
    fn from(tag: &String) -> Self {
        Self::Single(tag.clone())
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self::Many(tags)
    }
}

impl From<Vec<&str>> for Tags {
    fn from(tags: Vec<&str>) -> Self {
        Self::Many(tags.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for Tags {
    fn from(tags: &[String]) -> Self {
        Self::Many(tags.to_vec())
    }
}

impl From<&[&str]> for Tags {
    fn from(tags: &[&str]) -> Self {
        Self::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tags {
    fn from(tags: [&str; N]) -> Self {
        Self::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<&[&str; N]> for Tags {
    fn from(tags: &[&str; N]) -> Self {
        Self::from(&tags[..])
    }
}

impl<const N: usize> From<[String; N]> for Tags {
    fn from(tags: [String; N]) -> Self {
        Self::Many(tags.into())
    }
}

/// Dynamic tag input, e.g. from a config file or a host's JSON payload.
///
/// Strings become a single tag, arrays keep their string entries in order and
/// drop everything else. Any other value coerces to no tags.
impl From<&Value> for Tags {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(tag) => Self::Single(tag.clone()),
            Value::Array(items) => Self::Many(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => Self::Empty,
        }
    }
}

impl From<Value> for Tags {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

use crate::error::{Error, Result};

/// A symbolic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Atom(String),
    List(Vec<Value>),
    /// All-but-last elements and the tail of an improper list. The leading
    /// elements are never empty and the tail is never a list.
    DottedPair(Vec<Value>, Box<Value>),
    Integer(i64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn atom<A: AsRef<str>>(name: A) -> Self {
        Self::Atom(name.as_ref().to_owned())
    }

    pub fn text<A: AsRef<str>>(s: A) -> Self {
        Self::Text(s.as_ref().to_owned())
    }

    pub fn nil() -> Self {
        Self::List(vec![])
    }

    /// Builds `(init ... . last)`.
    ///
    /// A list tail is spliced into the leading elements, so `(a . (b c))`
    /// yields the proper list `(a b c)` and `(a . (b . c))` yields `(a b . c)`.
    pub fn dotted(init: Vec<Value>, last: Value) -> Result<Self> {
        if init.is_empty() {
            return Err(Error::Generic(format!(
                "Dotted pair needs at least one leading element before {last}"
            )));
        }
        let mut init = init;
        Ok(match last {
            Self::List(tail) => {
                init.extend(tail);
                Self::List(init)
            }
            Self::DottedPair(tail, last) => {
                init.extend(tail);
                Self::DottedPair(init, last)
            }
            last => Self::DottedPair(init, Box::new(last)),
        })
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Boolean(false))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{name}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(true) => write!(f, "#t"),
            Self::Boolean(false) => write!(f, "#f"),
            Self::List(items) => write!(f, "({})", unwords(items)),
            Self::DottedPair(init, last) => write!(f, "({} . {last})", unwords(init)),
        }
    }
}

/// Canonical text of a value; parsing it back yields an equal value.
pub fn render(value: &Value) -> String {
    value.to_string()
}

pub(crate) fn unwords(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

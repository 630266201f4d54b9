//! Argument normalization: typed request values to flat wire pairs.

/// A single argument value before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Scalar(String),
    List(Vec<String>),
}

impl ArgValue {
    fn flatten(self) -> String {
        match self {
            Self::Scalar(value) => value,
            Self::List(values) => values.join(","),
        }
    }
}

/// Ordered argument set for one request. Omitted optionals are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<(&'static str, ArgValue)>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, key: &'static str, value: impl ToString) -> Self {
        self.0.push((key, ArgValue::Scalar(value.to_string())));
        self
    }

    pub fn opt<T: ToString>(self, key: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.scalar(key, value),
            None => self,
        }
    }

    /// Booleans travel as `1`/`0`.
    pub fn flag(self, key: &'static str, value: Option<bool>) -> Self {
        self.opt(key, value.map(|it| if it { "1" } else { "0" }))
    }

    /// Empty lists are omitted.
    pub fn list<I, S>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values = values.into_iter().map(|it| it.to_string()).collect::<Vec<_>>();
        if !values.is_empty() {
            self.0.push((key, ArgValue::List(values)));
        }
        self
    }
}

/// How argument keys appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyShape {
    /// Keys pass through unchanged.
    #[default]
    Flat,
    /// Keys become `namespace[key]`, optionally rewritten to snake_case first.
    Namespaced {
        namespace: &'static str,
        decamelize: bool,
    },
}

/// Flatten `args` into wire pairs.
///
/// The `id` key is always dropped: ids travel in the path.
pub fn normalize(args: Args, shape: BodyShape) -> Vec<(String, String)> {
    args.0
        .into_iter()
        .filter(|(key, _)| *key != "id")
        .map(|(key, value)| {
            let key = match shape {
                BodyShape::Flat => key.to_owned(),
                BodyShape::Namespaced {
                    namespace,
                    decamelize: true,
                } => format!("{namespace}[{}]", decamelize(key)),
                BodyShape::Namespaced {
                    namespace,
                    decamelize: false,
                } => format!("{namespace}[{key}]"),
            };
            (key, value.flatten())
        })
        .collect()
}

/// `firstName` -> `first_name`, `HTTPCode` -> `http_code`.
pub fn decamelize(key: &str) -> String {
    let chars = key.chars().collect::<Vec<_>>();
    let mut out = String::with_capacity(key.len() + 4);
    for (idx, ch) in chars.iter().copied().enumerate() {
        if ch.is_ascii_uppercase() {
            let prev = idx.checked_sub(1).map(|i| chars[i]);
            let next = chars.get(idx + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

use std::str::FromStr;

/// Raw content of a form control.
///
/// Kept apart from the parsed value so a blank or malformed numeric input can
/// never be submitted as a default number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldValue {
    #[default]
    Empty,
    Raw(String),
}

/// Result of interpreting a [`FieldValue`] as a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<T> {
    Invalid,
    Valid(T),
}

impl<T> Parsed<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid => None,
        }
    }
}

impl FieldValue {
    /// Wrap what the user typed, exactly as typed.
    pub fn from_input(input: impl Into<String>) -> Self {
        let input = input.into();
        if input.is_empty() {
            Self::Empty
        } else {
            Self::Raw(input)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Raw(text) => text,
        }
    }

    /// Whitespace-only input counts as blank.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Trimmed text, empty for blank input.
    pub fn text(&self) -> String {
        self.as_str().trim().to_string()
    }

    pub fn parse<T: FromStr>(&self) -> Parsed<T> {
        if self.is_blank() {
            return Parsed::Invalid;
        }
        self.as_str()
            .trim()
            .parse()
            .map_or(Parsed::Invalid, Parsed::Valid)
    }

    /// Finite decimal; rejects `NaN` and infinities that `f64::from_str` accepts.
    pub fn parse_decimal(&self) -> Parsed<f64> {
        match self.parse::<f64>() {
            Parsed::Valid(value) if value.is_finite() => Parsed::Valid(value),
            _ => Parsed::Invalid,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::from_input(value)
    }
}

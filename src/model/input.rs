use serde::de::IgnoredAny;

/// Everything [`ObjectIdentifier::parse`](crate::ObjectIdentifier::parse)
/// knows how to turn into an object identifier
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    /// Either dotted (`1.3.6.1`) or a NameAndNumberForm sequence
    /// (`{ iso(1) org(3) dod(6) }`, braces optional)
    Text(&'a str),
    /// Arcs that are already numbers
    Numbers(&'a [u64]),
    /// Arcs that are already numbers, but whose sign still has to be checked
    Integers(&'a [i64]),
    /// One NameAndNumberForm per arc, such as `["iso(1)", "org(3)", "6"]`
    NameForms(Vec<&'a str>),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<&'a [u64]> for Input<'a> {
    fn from(numbers: &'a [u64]) -> Self {
        Input::Numbers(numbers)
    }
}

impl<'a> From<&'a Vec<u64>> for Input<'a> {
    fn from(numbers: &'a Vec<u64>) -> Self {
        Input::Numbers(numbers.as_slice())
    }
}

impl<'a> From<&'a [i64]> for Input<'a> {
    fn from(integers: &'a [i64]) -> Self {
        Input::Integers(integers)
    }
}

impl<'a> From<&'a Vec<i64>> for Input<'a> {
    fn from(integers: &'a Vec<i64>) -> Self {
        Input::Integers(integers.as_slice())
    }
}

impl<'a> From<&'a [&'a str]> for Input<'a> {
    fn from(forms: &'a [&'a str]) -> Self {
        Input::NameForms(forms.to_vec())
    }
}

impl<'a> From<&'a [String]> for Input<'a> {
    fn from(forms: &'a [String]) -> Self {
        Input::NameForms(forms.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Input<'a> {
    fn from(forms: &'a Vec<String>) -> Self {
        Input::from(forms.as_slice())
    }
}

/// The loosely typed shapes accepted when deserializing. Anything that is
/// none of the above ends up in `Unsupported`, so it can be reported as a
/// type error instead of a generic mismatch.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawInput {
    Text(String),
    Numbers(Vec<u64>),
    Integers(Vec<i64>),
    NameForms(Vec<String>),
    Unsupported(IgnoredAny),
}

impl RawInput {
    pub(crate) fn as_input(&self) -> Option<Input> {
        match self {
            RawInput::Text(text) => Some(Input::from(text)),
            RawInput::Numbers(numbers) => Some(Input::from(numbers)),
            RawInput::Integers(integers) => Some(Input::from(integers)),
            RawInput::NameForms(forms) => Some(Input::from(forms)),
            RawInput::Unsupported(_) => None,
        }
    }
}

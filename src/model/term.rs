use crate::model::ObjectIdentifier;

/// A value to compare an [`ObjectIdentifier`] against, see
/// [`ObjectIdentifier::equal`]
#[derive(Debug, Clone, PartialEq)]
pub enum Term<'a> {
    Oid(&'a ObjectIdentifier),
    Numbers(&'a [u64]),
    Integers(&'a [i64]),
    /// Dotted notation, a NameAndNumberForm sequence or an alternate name
    Text(&'a str),
    NameForms(Vec<&'a str>),
}

impl<'a> Term<'a> {
    pub fn text(&self) -> Option<&'a str> {
        match self {
            Term::Text(text) => Some(*text),
            _ => None,
        }
    }
}

impl<'a> From<&'a ObjectIdentifier> for Term<'a> {
    fn from(oid: &'a ObjectIdentifier) -> Self {
        Term::Oid(oid)
    }
}

impl<'a> From<&'a str> for Term<'a> {
    fn from(text: &'a str) -> Self {
        Term::Text(text)
    }
}

impl<'a> From<&'a String> for Term<'a> {
    fn from(text: &'a String) -> Self {
        Term::Text(text.as_str())
    }
}

impl<'a> From<&'a [u64]> for Term<'a> {
    fn from(numbers: &'a [u64]) -> Self {
        Term::Numbers(numbers)
    }
}

impl<'a> From<&'a Vec<u64>> for Term<'a> {
    fn from(numbers: &'a Vec<u64>) -> Self {
        Term::Numbers(numbers.as_slice())
    }
}

impl<'a> From<&'a [i64]> for Term<'a> {
    fn from(integers: &'a [i64]) -> Self {
        Term::Integers(integers)
    }
}

impl<'a> From<&'a Vec<i64>> for Term<'a> {
    fn from(integers: &'a Vec<i64>) -> Self {
        Term::Integers(integers.as_slice())
    }
}

impl<'a> From<&'a [&'a str]> for Term<'a> {
    fn from(forms: &'a [&'a str]) -> Self {
        Term::NameForms(forms.to_vec())
    }
}

impl<'a> From<&'a [String]> for Term<'a> {
    fn from(forms: &'a [String]) -> Self {
        Term::NameForms(forms.iter().map(String::as_str).collect())
    }
}

impl<'a> From<&'a Vec<String>> for Term<'a> {
    fn from(forms: &'a Vec<String>) -> Self {
        Term::from(forms.as_slice())
    }
}

use crate::model::input::RawInput;
use crate::model::{eq_fold, Input, NameAndNumberForm, Term};
use crate::parse::{Error, Expected, Location, Tokenizer};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, trace};

/// The object-identifier is described in ITU-T X.680 | ISO/IEC 8824-1:2015
/// in chapter 32. Besides its arcs, an instance remembers the alternate
/// names it is known by, such as `serverAuth` for `1.3.6.1.5.5.7.3.1`.
///
/// Instances can only be created through [`ObjectIdentifier::parse`] and
/// friends, which reject anything that is not a valid object identifier:
/// there is at least one arc and the root arc is `0`, `1` or `2`.
#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct ObjectIdentifier {
    arcs: Vec<NameAndNumberForm>,
    alt_names: Vec<String>,
}

impl ObjectIdentifier {
    /// Parses
    ///
    ///  - dotted notation: `1.3.6.1`
    ///  - NameAndNumberForm sequences: `{ iso(1) identified-organization(3) dod(6) }`,
    ///    also without braces and with number-only arcs: `iso(1) 3 6`
    ///  - sequences of numbers: `&[1, 3, 6][..]`
    ///  - sequences of NameAndNumberForms: `&["iso(1)", "3", "dod(6)"][..]`
    pub fn parse<'a>(input: impl Into<Input<'a>>) -> Result<Self, Error> {
        let arcs = match input.into() {
            Input::Text(text) if is_dotted(text) => parse_dotted(text)?,
            Input::Text(text) => parse_name_form(text)?,
            Input::Numbers(numbers) => numbers
                .iter()
                .copied()
                .map(NameAndNumberForm::from_number)
                .collect(),
            Input::Integers(integers) => integers
                .iter()
                .enumerate()
                .map(|(index, integer)| {
                    u64::try_from(*integer)
                        .map(NameAndNumberForm::from_number)
                        .map_err(|_| Error::negative_arc(index + 1, *integer))
                })
                .collect::<Result<Vec<_>, _>>()?,
            Input::NameForms(forms) => forms
                .into_iter()
                .map(|form| NameAndNumberForm::parse(form.trim()))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Self::from_arcs(arcs)
    }

    pub fn from_arcs(arcs: Vec<NameAndNumberForm>) -> Result<Self, Error> {
        match arcs.first() {
            None => Err(Error::empty_object_identifier()),
            Some(root) if root.number() > 2 => Err(Error::invalid_root_arc(root.number())),
            Some(_) => Ok(Self {
                arcs,
                alt_names: Vec::new(),
            }),
        }
    }

    /// Builds an instance from the plain integer sequence used by encoders
    pub fn from_integers(numbers: &[u64]) -> Result<Self, Error> {
        Self::parse(numbers)
    }

    pub fn arcs(&self) -> &[NameAndNumberForm] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn numbers(&self) -> impl Iterator<Item = u64> + '_ {
        self.arcs.iter().map(NameAndNumberForm::number)
    }

    /// The plain integer sequence, for encoders that know nothing about names
    pub fn to_integers(&self) -> Vec<u64> {
        self.numbers().collect()
    }

    /// `1.3.6.1`
    pub fn to_dotted(&self) -> String {
        self.numbers()
            .map(|number| number.to_string())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// `{ iso(1) identified-organization(3) dod(6) internet(1) }`
    pub fn to_name_form(&self) -> String {
        self.to_string()
    }

    /// The most specific arc, `dod(6)` for `{ iso(1) identified-organization(3) dod(6) }`
    pub fn last_arc(&self) -> Option<&NameAndNumberForm> {
        self.arcs.last()
    }

    /// Whether the arcs form a valid object identifier. This holds for every
    /// instance created through this crate.
    pub fn is_valid(&self) -> bool {
        self.arcs.first().map_or(false, |root| root.number() <= 2)
    }

    /// [`ObjectIdentifier::is_valid`] for a possibly absent instance, an
    /// absent one is never valid
    pub fn is_valid_opt(oid: Option<&Self>) -> bool {
        oid.map_or(false, Self::is_valid)
    }

    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    /// Remembers additional names this object identifier is known by.
    /// Names are compared case-insensitively, already known and empty names
    /// are skipped.
    pub fn add_alt_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if name.is_empty() || self.alt_names.iter().any(|known| eq_fold(known, &name)) {
                continue;
            }
            self.alt_names.push(name);
        }
    }

    pub fn with_alt_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_alt_names(names);
        self
    }

    /// Whether `term` describes this object identifier.
    ///
    /// Numeric terms are compared arc by arc. Text matches if it is the
    /// dotted notation or the NameAndNumberForm sequence as rendered by this
    /// instance, or one of the alternate names ignoring case. A sequence of
    /// NameAndNumberForms has to match each rendered arc exactly. Empty
    /// sequences never match.
    pub fn equal<'a>(&self, term: impl Into<Term<'a>>) -> bool {
        match term.into() {
            Term::Oid(other) => self.numbers().eq(other.numbers()),
            Term::Numbers(numbers) => {
                !numbers.is_empty() && self.numbers().eq(numbers.iter().copied())
            }
            Term::Integers(integers) => {
                !integers.is_empty()
                    && self.len() == integers.len()
                    && self
                        .numbers()
                        .zip(integers.iter())
                        .all(|(number, integer)| u64::try_from(*integer) == Ok(number))
            }
            Term::Text(text) => {
                self.to_dotted() == text
                    || self.to_name_form() == text
                    || self.alt_names.iter().any(|name| eq_fold(name, text))
            }
            Term::NameForms(forms) => {
                !forms.is_empty()
                    && self.len() == forms.len()
                    && self
                        .arcs
                        .iter()
                        .zip(forms)
                        .all(|(arc, form)| arc.to_string() == form)
            }
        }
    }
}

/// Dotted notation consists of digits separated by dots. Anything with
/// braces, parentheses or whitespace between the fields is treated as a
/// NameAndNumberForm sequence instead.
fn is_dotted(text: &str) -> bool {
    let text = text.trim();
    text.contains('.')
        && !text
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '{' | '}' | '(' | ')'))
}

fn parse_dotted(text: &str) -> Result<Vec<NameAndNumberForm>, Error> {
    let leading = text.chars().take_while(|c| c.is_whitespace()).count();
    let mut location = Location::default().advance(leading);
    let mut arcs = Vec::new();

    for field in text.trim().split('.') {
        if field.is_empty() {
            debug!("Empty field in dotted object identifier {:?}", text);
            return Err(Error::empty_field(location));
        }
        if let Some((index, found)) = field.chars().enumerate().find(|(_, c)| !c.is_ascii_digit())
        {
            debug!("Non-numeric field {:?} in dotted object identifier", field);
            return Err(Error::unexpected_character(
                field,
                found,
                Expected::Digit,
                location.advance(index),
            ));
        }
        trace!("Dotted arc {} at {:?}", field, location);
        arcs.push(NameAndNumberForm::parse_at(field, location)?);
        location = location.advance(field.len() + 1);
    }

    Ok(arcs)
}

/// Leading `{` and trailing `}` are stripped independently of each other, a
/// brace between two fields is an unexpected token.
fn parse_name_form(text: &str) -> Result<Vec<NameAndNumberForm>, Error> {
    let tokens = Tokenizer.parse(text);
    let start = tokens.iter().take_while(|t| t.eq_separator('{')).count();
    let end = tokens.len()
        - tokens[start..]
            .iter()
            .rev()
            .take_while(|t| t.eq_separator('}'))
            .count();

    tokens
        .into_iter()
        .take(end)
        .skip(start)
        .map(|token| {
            let (location, field) = token.into_text_or_else(Error::unexpected_token)?;
            trace!("NameAndNumberForm {} at {:?}", field, location);
            NameAndNumberForm::parse_at(&field, location).map_err(|e| {
                debug!("Rejected NameAndNumberForm {:?}: {}", field, e);
                e
            })
        })
        .collect()
}

impl PartialEq for ObjectIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.arcs == other.arcs
    }
}

impl Eq for ObjectIdentifier {}

impl Display for ObjectIdentifier {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        for arc in &self.arcs {
            write!(f, " {}", arc)?;
        }
        write!(f, " }}")
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&[u64]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[u64]) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&[i64]> for ObjectIdentifier {
    type Error = Error;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ObjectIdentifier> for String {
    fn from(oid: ObjectIdentifier) -> Self {
        oid.to_name_form()
    }
}

impl<'de> Deserialize<'de> for ObjectIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawInput::deserialize(deserializer)?;
        let result = match raw.as_input() {
            Some(input) => Self::parse(input),
            None => Err(Error::unsupported_input(
                "a value that is neither a string nor a sequence of numbers or strings",
            )),
        };
        result.map_err(D::Error::custom)
    }
}

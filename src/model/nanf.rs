use crate::parse::{Error, Expected, Location};
use std::convert::TryFrom;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single arc of an object identifier in the NameAndNumberForm of
/// ITU-T X.680 | ISO/IEC 8824-1:2015 chapter 32.3, either `number` or
/// `identifier(number)`.
///
/// Two arcs are equal if their numbers are equal and their identifiers are
/// equal ignoring ASCII case. The number alone identifies the arc within its
/// parent, the identifier is merely descriptive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameAndNumberForm {
    identifier: String,
    number: u64,
}

impl NameAndNumberForm {
    /// Builds an arc from its parts, validating a non-empty `identifier`
    /// the same way [`NameAndNumberForm::parse`] does.
    pub fn new(identifier: impl Into<String>, number: u64) -> Result<Self, Error> {
        let identifier = identifier.into();
        if !identifier.is_empty() {
            check_identifier(&identifier, &identifier, Location::default())?;
        }
        Ok(Self { identifier, number })
    }

    pub const fn from_number(number: u64) -> Self {
        Self {
            identifier: String::new(),
            number,
        }
    }

    /// Arcs cannot be negative, which is why this fails for any `number < 0`
    pub fn from_integer(number: i64) -> Result<Self, Error> {
        u64::try_from(number)
            .map(Self::from_number)
            .map_err(|_| Error::negative_number(number))
    }

    /// Parses `number` or `identifier(number)`
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::parse_at(text, Location::default())
    }

    /// Like [`NameAndNumberForm::parse`], but reports errors relative to
    /// `location`, the position of the first character of `text` in the
    /// surrounding input.
    pub fn parse_at(text: &str, location: Location) -> Result<Self, Error> {
        if text.is_empty() {
            return Err(Error::empty_field(location));
        }

        if text.chars().all(|c| c.is_ascii_digit()) {
            return Ok(Self::from_number(parse_number(text, location)?));
        }

        let open = match text.find('(') {
            Some(open) => open,
            None if text.ends_with(')') => {
                return Err(Error::missing_opening_parenthesis(
                    text,
                    location.advance(text.chars().count() - 1),
                ))
            }
            None => {
                // report the first bad character if there is one, a missing
                // parenthesis otherwise
                check_identifier(text, text, location)?;
                return Err(Error::missing_opening_parenthesis(
                    text,
                    location.advance(text.chars().count()),
                ));
            }
        };

        let identifier = &text[..open];
        if identifier.is_empty() {
            return Err(Error::unexpected_character(
                text,
                '(',
                Expected::LowercaseLetter,
                location,
            ));
        }
        check_identifier(text, identifier, location)?;

        let number_column = identifier.chars().count() + 1;
        let rest = &text[open + 1..];
        let close = match rest.find(|c: char| !c.is_ascii_digit()) {
            Some(close) => close,
            None => {
                return Err(Error::missing_closing_parenthesis(
                    text,
                    location.advance(text.chars().count()),
                ))
            }
        };

        let (number, tail) = rest.split_at(close);
        let mut tail = tail.chars();
        match tail.next() {
            Some(')') => {}
            Some(found) => {
                return Err(Error::unexpected_character(
                    text,
                    found,
                    Expected::Digit,
                    location.advance(number_column + number.len()),
                ))
            }
            None => {
                return Err(Error::missing_closing_parenthesis(
                    text,
                    location.advance(text.chars().count()),
                ))
            }
        }

        if let Some(found) = tail.next() {
            return Err(Error::unexpected_character(
                text,
                found,
                Expected::EndOfField,
                location.advance(number_column + number.len() + 1),
            ));
        }

        if number.is_empty() {
            return Err(Error::empty_number(text, location.advance(number_column)));
        }

        Ok(Self {
            identifier: identifier.to_string(),
            number: parse_number(number, location.advance(number_column))?,
        })
    }

    pub fn identifier(&self) -> Option<&str> {
        if self.identifier.is_empty() {
            None
        } else {
            Some(&self.identifier)
        }
    }

    pub const fn number(&self) -> u64 {
        self.number
    }

    pub fn is_number_only(&self) -> bool {
        self.identifier.is_empty()
    }

    /// `identifier(number)`, or just `number` without an identifier
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Validates `identifier`, which starts at `location` and is part of `field`
fn check_identifier(field: &str, identifier: &str, location: Location) -> Result<(), Error> {
    let mut last = None;
    for (index, char) in identifier.chars().enumerate() {
        let valid = if index == 0 {
            char.is_ascii_lowercase()
        } else {
            char.is_ascii_alphanumeric() || char == '-'
        };
        if !valid {
            let expected = if index == 0 {
                Expected::LowercaseLetter
            } else {
                Expected::IdentifierCharacter
            };
            return Err(Error::unexpected_character(
                field,
                char,
                expected,
                location.advance(index),
            ));
        }
        last = Some((index, char));
    }

    match last {
        Some((index, '-')) => Err(Error::trailing_hyphen(field, location.advance(index))),
        _ => Ok(()),
    }
}

fn parse_number(digits: &str, location: Location) -> Result<u64, Error> {
    digits
        .parse::<u64>()
        .map_err(|_| Error::number_out_of_range(digits, location))
}

impl PartialEq for NameAndNumberForm {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number && self.identifier.eq_ignore_ascii_case(&other.identifier)
    }
}

impl Eq for NameAndNumberForm {}

impl Display for NameAndNumberForm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.identifier.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{}({})", self.identifier, self.number)
        }
    }
}

impl FromStr for NameAndNumberForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for NameAndNumberForm {
    fn from(number: u64) -> Self {
        Self::from_number(number)
    }
}

impl TryFrom<String> for NameAndNumberForm {
    type Error = Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<NameAndNumberForm> for String {
    fn from(arc: NameAndNumberForm) -> Self {
        arc.to_string()
    }
}

impl TryFrom<i64> for NameAndNumberForm {
    type Error = Error;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        Self::from_integer(number)
    }
}

use std::error;
use std::fmt::{Debug, Display, Formatter};

use backtrace::Backtrace;

use crate::parse::{Location, Token};

/// The broad class of an [`Error`]
#[derive(
    Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// The text does not follow the NameAndNumberForm or dotted syntax
    Parse,
    /// The syntax is fine, but the arcs do not form a valid object identifier
    Validation,
    /// The input has a shape that cannot describe an object identifier at all
    Type,
}

/// The character class that was expected where an unexpected character was found
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Display)]
pub enum Expected {
    #[strum(to_string = "a lowercase letter")]
    LowercaseLetter,
    #[strum(to_string = "a letter, digit, '-' or '('")]
    IdentifierCharacter,
    #[strum(to_string = "a digit")]
    Digit,
    #[strum(to_string = "the end of the field")]
    EndOfField,
}

#[derive(Debug, PartialOrd, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedCharacter {
        field: String,
        found: char,
        expected: Expected,
        location: Location,
    },
    TrailingHyphen(String, Location),
    MissingOpeningParenthesis(String, Location),
    MissingClosingParenthesis(String, Location),
    EmptyNumber(String, Location),
    NumberOutOfRange(String, Location),
    NegativeNumber(i64),
    EmptyField(Location),
    UnexpectedToken(Token),
    EmptyObjectIdentifier,
    NegativeArc { position: usize, value: i64 },
    InvalidRootArc(u64),
    UnsupportedInput(String),
}

impl ErrorKind {
    pub fn category(&self) -> Category {
        match self {
            ErrorKind::UnexpectedCharacter { .. }
            | ErrorKind::TrailingHyphen(..)
            | ErrorKind::MissingOpeningParenthesis(..)
            | ErrorKind::MissingClosingParenthesis(..)
            | ErrorKind::EmptyNumber(..)
            | ErrorKind::NumberOutOfRange(..)
            | ErrorKind::NegativeNumber(_)
            | ErrorKind::EmptyField(_)
            | ErrorKind::UnexpectedToken(_) => Category::Parse,
            ErrorKind::EmptyObjectIdentifier
            | ErrorKind::NegativeArc { .. }
            | ErrorKind::InvalidRootArc(_) => Category::Validation,
            ErrorKind::UnsupportedInput(_) => Category::Type,
        }
    }
}

pub struct Error {
    kind: ErrorKind,
    backtrace: Backtrace,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            backtrace: Backtrace::new(),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind.eq(&other.kind)
    }
}

impl Error {
    pub fn unexpected_character(
        field: &str,
        found: char,
        expected: Expected,
        location: Location,
    ) -> Self {
        ErrorKind::UnexpectedCharacter {
            field: field.to_string(),
            found,
            expected,
            location,
        }
        .into()
    }

    pub fn trailing_hyphen(field: &str, location: Location) -> Self {
        ErrorKind::TrailingHyphen(field.to_string(), location).into()
    }

    pub fn missing_opening_parenthesis(field: &str, location: Location) -> Self {
        ErrorKind::MissingOpeningParenthesis(field.to_string(), location).into()
    }

    pub fn missing_closing_parenthesis(field: &str, location: Location) -> Self {
        ErrorKind::MissingClosingParenthesis(field.to_string(), location).into()
    }

    pub fn empty_number(field: &str, location: Location) -> Self {
        ErrorKind::EmptyNumber(field.to_string(), location).into()
    }

    pub fn number_out_of_range(number: &str, location: Location) -> Self {
        ErrorKind::NumberOutOfRange(number.to_string(), location).into()
    }

    pub fn negative_number(value: i64) -> Self {
        ErrorKind::NegativeNumber(value).into()
    }

    pub fn empty_field(location: Location) -> Self {
        ErrorKind::EmptyField(location).into()
    }

    pub fn unexpected_token(token: Token) -> Self {
        ErrorKind::UnexpectedToken(token).into()
    }

    pub fn empty_object_identifier() -> Self {
        ErrorKind::EmptyObjectIdentifier.into()
    }

    pub fn negative_arc(position: usize, value: i64) -> Self {
        ErrorKind::NegativeArc { position, value }.into()
    }

    pub fn invalid_root_arc(value: u64) -> Self {
        ErrorKind::InvalidRootArc(value).into()
    }

    pub fn unsupported_input(description: impl Into<String>) -> Self {
        ErrorKind::UnsupportedInput(description.into()).into()
    }

    fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn is_parse_error(&self) -> bool {
        self.category() == Category::Parse
    }

    pub fn is_validation_error(&self) -> bool {
        self.category() == Category::Validation
    }

    pub fn is_type_error(&self) -> bool {
        self.category() == Category::Type
    }

    /// Where in the input the error was detected, if it can be pinned down
    pub fn location(&self) -> Option<Location> {
        match &self.kind {
            ErrorKind::UnexpectedCharacter { location, .. } => Some(*location),
            ErrorKind::TrailingHyphen(_, location) => Some(*location),
            ErrorKind::MissingOpeningParenthesis(_, location) => Some(*location),
            ErrorKind::MissingClosingParenthesis(_, location) => Some(*location),
            ErrorKind::EmptyNumber(_, location) => Some(*location),
            ErrorKind::NumberOutOfRange(_, location) => Some(*location),
            ErrorKind::EmptyField(location) => Some(*location),
            ErrorKind::UnexpectedToken(token) => Some(token.location()),
            ErrorKind::NegativeNumber(_)
            | ErrorKind::EmptyObjectIdentifier
            | ErrorKind::NegativeArc { .. }
            | ErrorKind::InvalidRootArc(_)
            | ErrorKind::UnsupportedInput(_) => None,
        }
    }
}

impl error::Error for Error {}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self)?;
        writeln!(f, "{:?}", self.backtrace())?;
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} error: ", self.category())?;
        match &self.kind {
            ErrorKind::UnexpectedCharacter {
                field,
                found,
                expected,
                location,
            } => write!(
                f,
                "At line {}, column {} in \"{}\" expected {}, but instead got: '{}'",
                location.line(),
                location.column(),
                field,
                expected,
                found,
            ),
            ErrorKind::TrailingHyphen(field, location) => write!(
                f,
                "At line {}, column {} the identifier of \"{}\" ends with a hyphen",
                location.line(),
                location.column(),
                field,
            ),
            ErrorKind::MissingOpeningParenthesis(field, location) => write!(
                f,
                "At line {}, column {} the field \"{}\" has no opening parenthesis",
                location.line(),
                location.column(),
                field,
            ),
            ErrorKind::MissingClosingParenthesis(field, location) => write!(
                f,
                "At line {}, column {} the field \"{}\" has no closing parenthesis",
                location.line(),
                location.column(),
                field,
            ),
            ErrorKind::EmptyNumber(field, location) => write!(
                f,
                "At line {}, column {} the field \"{}\" has no number between its parentheses",
                location.line(),
                location.column(),
                field,
            ),
            ErrorKind::NumberOutOfRange(number, location) => write!(
                f,
                "At line {}, column {} the number {} does not fit into an arc",
                location.line(),
                location.column(),
                number,
            ),
            ErrorKind::NegativeNumber(value) => {
                write!(f, "An arc cannot be negative, but got: {}", value)
            }
            ErrorKind::EmptyField(location) => write!(
                f,
                "At line {}, column {} a field is empty",
                location.line(),
                location.column(),
            ),
            ErrorKind::UnexpectedToken(token) => write!(
                f,
                "At line {}, column {} an unexpected token was encountered: {}",
                token.location().line(),
                token.location().column(),
                token,
            ),
            ErrorKind::EmptyObjectIdentifier => {
                write!(f, "An object identifier needs at least one arc")
            }
            ErrorKind::NegativeArc { position, value } => write!(
                f,
                "Arc #{} is negative: {}",
                position, value
            ),
            ErrorKind::InvalidRootArc(value) => write!(
                f,
                "The root arc must be 0, 1 or 2, but instead got: {}",
                value
            ),
            ErrorKind::UnsupportedInput(description) => write!(
                f,
                "Cannot build an object identifier from {}",
                description
            ),
        }
    }
}

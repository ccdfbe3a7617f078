mod input;
mod nanf;
mod oid;
mod registry;
mod term;

pub use input::Input;
pub use nanf::NameAndNumberForm;
pub use oid::ObjectIdentifier;
pub use registry::ObjectIdentifierMap;
pub use term::Term;

/// Case-insensitive comparison as used for alternate names and registry keys
pub(crate) fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

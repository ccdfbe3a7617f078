#![deny(rustdoc::broken_intra_doc_links)]
#![warn(unused_extern_crates)]

//! ASN.1 object identifiers in dotted notation (`1.3.6.1`) and as
//! NameAndNumberForm sequences (`{ iso(1) identified-organization(3) dod(6) internet(1) }`),
//! with alternate names and a lookup map that understands all of them.

#[macro_use]
extern crate strum_macros;

#[macro_use]
extern crate serde_derive;

pub mod model;
pub mod parse;

pub use model::{Input, NameAndNumberForm, ObjectIdentifier, ObjectIdentifierMap, Term};
pub use parse::{Category, Error, ErrorKind};

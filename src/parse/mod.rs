mod error;
mod location;
mod token;
mod tokenizer;

pub use error::Category;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Expected;
pub use location::Location;
pub use token::Token;
pub use tokenizer::Tokenizer;

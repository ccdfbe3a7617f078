use crate::parse::{Location, Token};

#[derive(Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenize a NameAndNumberForm sequence such as `{ iso(1) org(3) 6 }`.
    ///
    /// Curly braces become separators, every other run of non-whitespace
    /// characters becomes one text token (a field). Parentheses are part of
    /// the field they appear in; validating them is left to the caller.
    pub fn parse(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (line_0, line) in text.lines().enumerate() {
            let mut field: Option<Token> = None;

            for (column_0, char) in line.chars().enumerate() {
                let location = Location::at(line_0 + 1, column_0 + 1);
                match char {
                    '{' | '}' => {
                        if let Some(token) = field.take() {
                            tokens.push(token);
                        }
                        tokens.push(Token::Separator(location, char));
                    }
                    c if c.is_whitespace() => {
                        if let Some(token) = field.take() {
                            tokens.push(token);
                        }
                    }
                    c => {
                        if let Some(Token::Text(_, text)) = field.as_mut() {
                            text.push(c);
                        } else {
                            field = Some(Token::Text(location, c.to_string()));
                        }
                    }
                }
            }

            if let Some(token) = field.take() {
                tokens.push(token);
            }
        }

        tokens
    }
}

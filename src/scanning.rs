use crate::error_handling::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    number(f64),
    identifier(String),
    operator(char),
    left_paren,
    right_paren,
    end_of_input,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::number(value) => write!(f, "'{}'", value),
            Token::identifier(name) => write!(f, "'{}'", name),
            Token::operator(symbol) => write!(f, "'{}'", symbol),
            Token::left_paren => write!(f, "'('"),
            Token::right_paren => write!(f, "')'"),
            Token::end_of_input => write!(f, "end of input"),
        }
    }
}

pub trait Scanner {
    fn get_current(&self) -> &Token;
    fn advance(&mut self);
    fn is_valid(&self) -> bool;
}

/// Cursor over an already tokenized input. The last token is always
/// `end_of_input` and the cursor never moves past it.
pub struct TokenScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenScanner {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last() != Some(&Token::end_of_input) {
            tokens.push(Token::end_of_input);
        }
        Self { tokens, index: 0 }
    }
}

impl Scanner for TokenScanner {
    fn get_current(&self) -> &Token {
        &self.tokens[self.index]
    }

    fn advance(&mut self) {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
        }
    }

    fn is_valid(&self) -> bool {
        self.tokens[self.index] != Token::end_of_input
    }
}

fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/' | '^' | '%')
}

fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

fn is_identifier_part(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// Single left-to-right pass over the text, yielding one token at a time.
/// `index` is a byte offset into `string`.
pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
    finished: bool,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            index: 0,
            finished: false,
        }
    }

    /// Byte length of the longest prefix of the remaining text whose
    /// characters all satisfy `predicate`.
    fn count_while<P: FnMut(char) -> bool>(&self, mut predicate: P) -> usize {
        let view = self.view();
        view.char_indices()
            .find(|&(_, c)| !predicate(c))
            .map_or(view.len(), |(offset, _)| offset)
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn skip_whitespace(&mut self) {
        let count = self.count_while(char::is_whitespace);
        self.index += count;
    }

    fn get_number(&mut self) -> Result<Token> {
        let mut has_decimal = false;
        let count = self.count_while(|c| {
            if c.is_ascii_digit() {
                true
            } else if c == '.' && !has_decimal {
                has_decimal = true;
                true
            } else {
                false
            }
        });

        let start = self.index;
        let literal = &self.string[start..start + count];
        self.index += count;
        literal
            .parse()
            .map(Token::number)
            .map_err(|_| CalcError::invalid_number {
                literal: literal.into(),
                offset: start,
            })
    }

    fn get_identifier(&mut self) -> Token {
        let count = self.count_while(is_identifier_part);
        let name = &self.string[self.index..self.index + count];
        self.index += count;
        Token::identifier(name.into())
    }

    fn get_single(&mut self, token: Token) -> Token {
        self.index += 1;
        token
    }

    fn get_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();

        let Some(character) = self.view().chars().next() else {
            return Ok(None);
        };

        let token = match character {
            '(' => self.get_single(Token::left_paren),
            ')' => self.get_single(Token::right_paren),
            c if is_operator(c) => self.get_single(Token::operator(c)),
            c if c.is_ascii_digit() || c == '.' => self.get_number()?,
            c if is_identifier_start(c) => self.get_identifier(),
            c => {
                return Err(CalcError::unexpected_character {
                    character: c,
                    offset: self.index,
                })
            }
        };
        Ok(Some(token))
    }
}

impl Iterator for StringScanner<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.get_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                Some(Ok(Token::end_of_input))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

/// Splits `input` into tokens, always terminated by `Token::end_of_input`.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    StringScanner::new(input).collect()
}

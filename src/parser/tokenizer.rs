use std::fmt;

use log::debug;

/// A lexical token borrowed from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    LeftParen,
    RightParen,
    Symbol(&'a str),
}

impl<'a> Token<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Symbol(text) => text,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Split input into tokens: every parenthesis stands alone and every maximal
/// run of other non-whitespace characters forms one symbol. Symbol content is
/// not validated here.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(s) = start.take()
                && let Some(text) = input.get(s..i)
            {
                tokens.push(Token::Symbol(text));
            }
            match c {
                '(' => tokens.push(Token::LeftParen),
                ')' => tokens.push(Token::RightParen),
                _ => {}
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start
        && let Some(text) = input.get(s..)
    {
        tokens.push(Token::Symbol(text));
    }

    debug!("Tokenized '{}' into {} tokens", input, tokens.len());
    tokens
}

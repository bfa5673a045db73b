#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

// Lexical classes for calculator keypad input. Tokens carry raw text and no
// validation happens here: a Literal can hold a shape that won't parse as a
// number (eg: "1.2.3") or that doesn't lead with a digit (eg: ".5"), later
// stages decide what to make of it.
#[derive(Clone, PartialEq, Debug)]
pub enum CalcToken {
    Literal(String),
    Ident(String),
    Symbol(char),
}

impl fmt::Display for CalcToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcToken::Literal(text) => write!(f, "{}", text),
            CalcToken::Ident(name) => write!(f, "{}", name),
            CalcToken::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

// The scan functions expect a clean lexeme on entry and drain it on success,
// each token leaves the scanner reset for the next one.

// greedy run of decimal digits and dots, malformed shapes stay one token
fn scan_literal<I: Iterator<Item = char>>(src: &mut Scanner<I>) -> Option<String> {
    src.accept_if(|c| c.is_ascii_digit() || *c == '.')?;
    src.skip_all(|c| c.is_ascii_digit() || *c == '.');
    Some(src.extract_string())
}

// greedy run of ascii letters: function names and the constant e.
// 'π' is not an ascii letter so it falls through to the symbol branch
fn scan_word<I: Iterator<Item = char>>(src: &mut Scanner<I>) -> Option<String> {
    src.accept_if(char::is_ascii_alphabetic)?;
    src.skip_all(char::is_ascii_alphabetic);
    Some(src.extract_string())
}

pub struct CalcTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> CalcTokenizer<I> {
    pub fn new(source: I) -> CalcTokenizer<I> {
        CalcTokenizer {
            src: Scanner::new(source),
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for CalcTokenizer<I> {
    type Item = CalcToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.skip_ws();
        if let Some(text) = scan_literal(&mut self.src) {
            Some(CalcToken::Literal(text))
        } else if let Some(name) = scan_word(&mut self.src) {
            Some(CalcToken::Ident(name))
        } else if let Some(symbol) = self.src.next() {
            // anything else is a one-glyph token, operators and parens included
            self.src.ignore();
            Some(CalcToken::Symbol(symbol))
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////

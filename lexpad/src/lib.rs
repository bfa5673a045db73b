mod scanner;
mod calc_tokenizer;

pub use calc_tokenizer::{CalcToken, CalcTokenizer};
pub use scanner::Scanner;

#[cfg(test)]
mod scanner_test;

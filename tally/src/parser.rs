use lexpad::{CalcToken, CalcTokenizer};
use std::f64::consts;

// Fixed ranks, higher binds tighter. Tokens outside the table rank 0 so any
// pending operator outranks them. Combined with the >= comparison below this
// makes every operator left-associative, 2^3^2 groups as (2^3)^2.
pub fn precedence(token: &CalcToken) -> usize {
    match token {
        CalcToken::Symbol('+' | '-') => 1,
        CalcToken::Symbol('×' | '÷' | '%') => 2,
        CalcToken::Symbol('^' | '√') => 3,
        CalcToken::Symbol('!') => 4,
        CalcToken::Ident(f) if matches!(f.as_str(), "sin" | "cos" | "tan" | "log" | "ln") => 4,
        _ => 0,
    }
}

// operand detection stays first-character based, a Literal like ".5" fails
// this test and rides the operator path instead
pub(crate) fn leads_with_digit(text: &str) -> bool {
    text.starts_with(|c: char| c.is_ascii_digit())
}

#[derive(PartialEq, Debug)]
pub struct RpnExpr(pub Vec<CalcToken>);

pub struct Shunter;

impl Shunter {
    pub fn parse_str(expr: &str) -> RpnExpr {
        Self::parse(&mut CalcTokenizer::new(expr.chars()))
    }

    // Infix to postfix reordering. This never fails: stray closers are
    // dropped, unmatched openers drain into the output, and unknown tokens
    // ride the operator path with rank 0.
    pub fn parse(lex: &mut impl Iterator<Item = CalcToken>) -> RpnExpr {
        let mut out = Vec::new();
        let mut stack: Vec<CalcToken> = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                CalcToken::Literal(text) if leads_with_digit(&text) => {
                    out.push(CalcToken::Literal(text))
                }
                // constants become literal text right here so that later
                // stages only ever see numbers
                CalcToken::Symbol('π') => out.push(CalcToken::Literal(consts::PI.to_string())),
                CalcToken::Ident(name) if name == "e" => {
                    out.push(CalcToken::Literal(consts::E.to_string()))
                }
                CalcToken::Symbol('(') => stack.push(token),
                CalcToken::Symbol(')') => {
                    while !stack.is_empty() && stack.last() != Some(&CalcToken::Symbol('(')) {
                        out.push(stack.pop().unwrap());
                    }
                    stack.pop(); // the matching opener, None for a stray closer
                }
                op => {
                    let prec = precedence(&op);
                    while !stack.is_empty()
                        && stack.last() != Some(&CalcToken::Symbol('('))
                        && precedence(stack.last().unwrap()) >= prec
                    {
                        out.push(stack.pop().unwrap());
                    }
                    stack.push(op);
                }
            }
        }
        // leftover tokens, unmatched openers included
        while let Some(op) = stack.pop() {
            out.push(op);
        }
        RpnExpr(out)
    }
}

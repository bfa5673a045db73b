use crate::parser::{leads_with_digit, RpnExpr, Shunter};
use lexpad::CalcToken;

#[derive(Debug, PartialEq)]
pub enum EvalError {
    MalformedLiteral(String),
}

// parse-and-eval in one call, the usual entry point
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Shunter::parse_str(expression).eval()
}

// tokens that push a number: digit-led literals, plus negative literals
// which only appear in hand-built expressions, the tokenizer never emits
// them. A lone "-" is still the operator.
fn operand_text(token: &CalcToken) -> Option<&str> {
    match token {
        CalcToken::Literal(text) if leads_with_digit(text) => Some(text),
        CalcToken::Literal(text) if text.starts_with('-') && text.len() > 1 => Some(text),
        _ => None,
    }
}

impl RpnExpr {
    // Stack evaluation with lenient recovery: missing operands read as 0.0,
    // unrecognized tokens consume their operands and produce nothing. The
    // only hard failure is a literal that won't parse as a number.
    pub fn eval(&self) -> Result<f64, EvalError> {
        let mut operands: Vec<f64> = Vec::new();

        for token in self.0.iter() {
            if let Some(text) = operand_text(token) {
                let num = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::MalformedLiteral(text.to_string()))?;
                operands.push(num);
                continue;
            }
            let b = operands.pop().unwrap_or(0.0);
            match token {
                // trig arguments are degrees
                CalcToken::Ident(f) if f == "sin" => operands.push(b.to_radians().sin()),
                CalcToken::Ident(f) if f == "cos" => operands.push(b.to_radians().cos()),
                CalcToken::Ident(f) if f == "tan" => operands.push(b.to_radians().tan()),
                CalcToken::Ident(f) if f == "log" => operands.push(b.log10()),
                CalcToken::Ident(f) if f == "ln" => operands.push(b.ln()),
                CalcToken::Symbol('√') => operands.push(b.sqrt()),
                CalcToken::Symbol('!') => operands.push(factorial(b)),
                binary => {
                    let a = operands.pop().unwrap_or(0.0);
                    match binary {
                        CalcToken::Symbol('+') => operands.push(a + b),
                        CalcToken::Symbol('-') => operands.push(a - b),
                        CalcToken::Symbol('×') => operands.push(a * b),
                        CalcToken::Symbol('÷') => operands.push(a / b),
                        CalcToken::Symbol('%') => operands.push(a % b),
                        CalcToken::Symbol('^') => operands.push(a.powf(b)),
                        _ => (), // unknown token, operands are gone for good
                    }
                }
            }
        }
        Ok(operands.pop().unwrap_or(0.0))
    }
}

// Truncating factorial: the argument drops its fraction, negatives have no
// value. The running product saturates at +inf, bail at that point so huge
// arguments still terminate.
fn factorial(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    let mut product = 1.0_f64;
    for i in 1..=(x as i64) {
        product *= i as f64;
        if product.is_infinite() {
            break;
        }
    }
    product
}

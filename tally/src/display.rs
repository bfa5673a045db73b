use crate::parser::RpnExpr;
use std::fmt;

impl fmt::Display for RpnExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let postfix = self
            .0
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", postfix)
    }
}

// Result text the way a calculator display shows it: whole values lose the
// fractional part, anything else gets 8 decimals with the tail trimmed.
// Non-finite values fall through the fixed-point branch as "NaN" and "inf".
pub fn format_result(value: f64) -> String {
    if value % 1.0 == 0.0 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{:.8}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

///////////////////////////////////////////////////////////////////////////////

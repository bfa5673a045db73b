pub use parser::RpnExpr;
pub use parser::Shunter;
pub mod parser;

pub use self::rpneval::evaluate;
pub use self::rpneval::EvalError;
pub use self::display::format_result;
mod display;
mod rpneval;

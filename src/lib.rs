//! Reader and evaluator for a small Scheme dialect.
//!
//! [`parse`] turns one expression of source text into a [`Value`],
//! [`evaluate`] reduces it using the built-in primitives, and [`render`] /
//! [`render_error`] turn either outcome back into text.

mod error;
pub use error::{render_error, Error, Result};

mod value;
pub use value::{render, Value};

mod parser;
pub use parser::parse;

mod interpreter;
pub use interpreter::{evaluate, primitive_names};

/// Renders whichever side of `result` is present.
pub fn render_outcome(result: &Result<Value>) -> String {
    match result {
        Ok(value) => render(value),
        Err(error) => render_error(error),
    }
}

/// Reads, evaluates and renders one expression.
pub fn run(source: &str) -> String {
    render_outcome(&parse(source).and_then(|value| evaluate(&value)))
}

#[cfg(test)]
mod test;

mod primitives;

use tracing::debug;

use crate::error::{Error, Result};
use crate::value::Value;

pub use primitives::primitive_names;

/// Reduces `value` to its final value, or to the first error met on the way.
pub fn evaluate(value: &Value) -> Result<Value> {
    match value {
        Value::Integer(_) | Value::Text(_) | Value::Boolean(_) => Ok(value.clone()),
        Value::List(items) => match items.as_slice() {
            [Value::Atom(head), rest @ ..] if head == "quote" => match rest {
                [quoted] => Ok(quoted.clone()),
                _ => Err(Error::unrecognized_form(value)),
            },
            [Value::Atom(head), rest @ ..] if head == "if" => match rest {
                [pred, conseq, alt] => {
                    debug!(%pred, "evaluating condition");
                    if evaluate(pred)?.is_false() {
                        evaluate(alt)
                    } else {
                        evaluate(conseq)
                    }
                }
                _ => Err(Error::unrecognized_form(value)),
            },
            [Value::Atom(name), args @ ..] => apply(name, args),
            _ => Err(Error::unrecognized_form(value)),
        },
        Value::Atom(_) | Value::DottedPair(..) => Err(Error::unrecognized_form(value)),
    }
}

fn apply(name: &str, args: &[Value]) -> Result<Value> {
    // Stops at the first argument that fails.
    let args = args.iter().map(evaluate).collect::<Result<Vec<_>>>()?;
    let primitive = primitives::lookup(name).ok_or_else(|| {
        Error::UnknownProcedure(
            "Unrecognized primitive function args".to_string(),
            name.to_string(),
        )
    })?;
    debug!(?primitive, args = args.len(), "applying");
    primitive.apply(&args)
}

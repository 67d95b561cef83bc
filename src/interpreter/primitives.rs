use std::collections::HashMap;

use derivative::Derivative;
use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::value::Value;

type PrimitiveFn = fn(&[Value]) -> Result<Value>;

#[derive(Derivative)]
#[derivative(Debug)]
pub(super) struct Primitive {
    name: &'static str,
    #[derivative(Debug = "ignore")]
    func: PrimitiveFn,
}

impl Primitive {
    pub(super) fn apply(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }
}

const PRIMITIVE_TABLE: [(&str, PrimitiveFn); 28] = [
    ("+", |args| numeric_fold(args, add)),
    ("-", |args| numeric_fold(args, sub)),
    ("*", |args| numeric_fold(args, mul)),
    ("/", |args| numeric_fold(args, quotient)),
    ("quotient", |args| numeric_fold(args, quotient)),
    ("remainder", |args| numeric_fold(args, remainder)),
    ("mod", |args| numeric_fold(args, modulo)),
    ("=", |args| numeric_compare(args, |a, b| a == b)),
    ("<", |args| numeric_compare(args, |a, b| a < b)),
    (">", |args| numeric_compare(args, |a, b| a > b)),
    ("/=", |args| numeric_compare(args, |a, b| a != b)),
    (">=", |args| numeric_compare(args, |a, b| a >= b)),
    ("<=", |args| numeric_compare(args, |a, b| a <= b)),
    ("&&", |args| boolean_compare(args, |a, b| a && b)),
    ("||", |args| boolean_compare(args, |a, b| a || b)),
    ("string=?", |args| string_compare(args, |a, b| a == b)),
    ("string<?", |args| string_compare(args, |a, b| a < b)),
    ("string>?", |args| string_compare(args, |a, b| a > b)),
    ("string<=?", |args| string_compare(args, |a, b| a <= b)),
    ("string>=?", |args| string_compare(args, |a, b| a >= b)),
    ("car", car),
    ("cdr", cdr),
    ("cons", cons),
    ("eq?", eqv),
    ("eqv?", eqv),
    ("equal?", equal),
    ("list?", |args| match args {
        [Value::List(_)] => Ok(Value::Boolean(true)),
        [_] => Ok(Value::Boolean(false)),
        _ => Err(Error::WrongArgumentCount(1, args.to_vec())),
    }),
    ("not", |args| match args {
        [value] => Ok(Value::Boolean(value.is_false())),
        _ => Err(Error::WrongArgumentCount(1, args.to_vec())),
    }),
];

static PRIMITIVES: Lazy<HashMap<&'static str, Primitive>> = Lazy::new(|| {
    PRIMITIVE_TABLE
        .into_iter()
        .map(|(name, func)| (name, Primitive { name, func }))
        .collect()
});

pub(super) fn lookup(name: &str) -> Option<&'static Primitive> {
    PRIMITIVES.get(name)
}

/// Names of every built-in operation, sorted.
pub fn primitive_names() -> Vec<&'static str> {
    let mut names: Vec<_> = PRIMITIVES.values().map(|p| p.name).collect();
    names.sort_unstable();
    names
}

// # NUMERIC FOLDS
// At least two arguments, reduced left to right: (- 15 5 3 2) is ((15 - 5) - 3) - 2.

fn numeric_fold(args: &[Value], op: fn(i64, i64) -> Result<i64>) -> Result<Value> {
    match args {
        [first, rest @ ..] if !rest.is_empty() => {
            let init = unpack_number(first)?;
            rest.iter()
                .try_fold(init, |acc, arg| op(acc, unpack_number(arg)?))
                .map(Value::Integer)
        }
        _ => Err(Error::WrongArgumentCount(2, args.to_vec())),
    }
}

fn overflow() -> Error {
    Error::Generic("Integer overflow".to_string())
}

fn nonzero(divisor: i64) -> Result<i64> {
    if divisor == 0 {
        Err(Error::Generic("Division by zero".to_string()))
    } else {
        Ok(divisor)
    }
}

fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(overflow)
}

fn sub(a: i64, b: i64) -> Result<i64> {
    a.checked_sub(b).ok_or_else(overflow)
}

fn mul(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or_else(overflow)
}

// Truncates toward zero.
fn quotient(a: i64, b: i64) -> Result<i64> {
    a.checked_div(nonzero(b)?).ok_or_else(overflow)
}

// Takes the sign of the dividend.
fn remainder(a: i64, b: i64) -> Result<i64> {
    a.checked_rem(nonzero(b)?).ok_or_else(overflow)
}

// Takes the sign of the divisor.
fn modulo(a: i64, b: i64) -> Result<i64> {
    let r = remainder(a, b)?;
    Ok(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
}

// # COMPARISONS
// Exactly two arguments, coerced with the matching unpacker.

fn binary<T, U>(
    args: &[Value],
    unpack: fn(&Value) -> Result<T>,
    op: impl Fn(T, T) -> U,
) -> Result<U> {
    match args {
        [left, right] => Ok(op(unpack(left)?, unpack(right)?)),
        _ => Err(Error::WrongArgumentCount(2, args.to_vec())),
    }
}

fn numeric_compare(args: &[Value], op: fn(i64, i64) -> bool) -> Result<Value> {
    binary(args, unpack_number, op).map(Value::Boolean)
}

fn boolean_compare(args: &[Value], op: fn(bool, bool) -> bool) -> Result<Value> {
    binary(args, unpack_boolean, op).map(Value::Boolean)
}

fn string_compare(args: &[Value], op: fn(&str, &str) -> bool) -> Result<Value> {
    binary(args, unpack_string, |a, b| op(&a, &b)).map(Value::Boolean)
}

// # UNPACKERS

fn unpack_number(value: &Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        Value::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => s
            .parse()
            .map_err(|_| Error::TypeMismatch("number", value.clone())),
        Value::List(items) if items.len() == 1 => unpack_number(&items[0]),
        _ => Err(Error::TypeMismatch("number", value.clone())),
    }
}

fn unpack_string(value: &Value) -> Result<String> {
    match value {
        Value::Text(s) => Ok(s.clone()),
        Value::Integer(_) | Value::Boolean(_) => Ok(value.to_string()),
        _ => Err(Error::TypeMismatch("string", value.clone())),
    }
}

fn unpack_boolean(value: &Value) -> Result<bool> {
    match value {
        Value::Boolean(b) => Ok(*b),
        _ => Err(Error::TypeMismatch("boolean", value.clone())),
    }
}

// # LISTS

fn car(args: &[Value]) -> Result<Value> {
    match args {
        [Value::List(items)] if !items.is_empty() => Ok(items[0].clone()),
        [Value::DottedPair(init, _)] => init
            .first()
            .cloned()
            .ok_or_else(|| Error::TypeMismatch("pair", args[0].clone())),
        [bad] => Err(Error::TypeMismatch("pair", bad.clone())),
        _ => Err(Error::WrongArgumentCount(1, args.to_vec())),
    }
}

fn cdr(args: &[Value]) -> Result<Value> {
    match args {
        [Value::List(items)] if !items.is_empty() => Ok(Value::List(items[1..].to_vec())),
        [Value::DottedPair(init, last)] => match init.as_slice() {
            [_] => Ok(last.as_ref().clone()),
            [_, rest @ ..] => Value::dotted(rest.to_vec(), last.as_ref().clone()),
            [] => Err(Error::TypeMismatch("pair", args[0].clone())),
        },
        [bad] => Err(Error::TypeMismatch("pair", bad.clone())),
        _ => Err(Error::WrongArgumentCount(1, args.to_vec())),
    }
}

fn cons(args: &[Value]) -> Result<Value> {
    match args {
        [head, tail] => Value::dotted(vec![head.clone()], tail.clone()),
        _ => Err(Error::WrongArgumentCount(2, args.to_vec())),
    }
}

// # EQUIVALENCE

fn eqv(args: &[Value]) -> Result<Value> {
    match args {
        [left, right] => Ok(Value::Boolean(left == right)),
        _ => Err(Error::WrongArgumentCount(2, args.to_vec())),
    }
}

// Equal when structurally equal, or when any unpacker maps both sides to the
// same thing, so (equal? 2 "2") is #t.
fn equal(args: &[Value]) -> Result<Value> {
    match args {
        [left, right] => {
            let same = |unpack: fn(&Value) -> Option<String>| match (unpack(left), unpack(right)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            };
            Ok(Value::Boolean(
                left == right
                    || same(|v| unpack_number(v).ok().map(|n| n.to_string()))
                    || same(|v| unpack_string(v).ok())
                    || same(|v| unpack_boolean(v).ok().map(|b| b.to_string())),
            ))
        }
        _ => Err(Error::WrongArgumentCount(2, args.to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_follows_the_divisor() {
        assert_eq!(modulo(7, 2), Ok(1));
        assert_eq!(modulo(-7, 2), Ok(1));
        assert_eq!(modulo(7, -2), Ok(-1));
        assert_eq!(remainder(-7, 2), Ok(-1));
        assert_eq!(quotient(-7, 2), Ok(-3));
    }

    #[test]
    fn unpack_number_coerces_digit_strings_and_singletons() {
        assert_eq!(unpack_number(&Value::text("12")), Ok(12));
        assert_eq!(
            unpack_number(&Value::List(vec![Value::List(vec![Value::Integer(3)])])),
            Ok(3)
        );
        assert_eq!(
            unpack_number(&Value::text("")),
            Err(Error::TypeMismatch("number", Value::text("")))
        );
        assert_eq!(
            unpack_number(&Value::text("-1")),
            Err(Error::TypeMismatch("number", Value::text("-1")))
        );
        assert_eq!(
            unpack_number(&Value::Boolean(true)),
            Err(Error::TypeMismatch("number", Value::Boolean(true)))
        );
    }

    #[test]
    fn car_rejects_dotted_pair_without_head() {
        let headless = Value::DottedPair(vec![], Box::new(Value::atom("b")));
        assert_eq!(
            car(&[headless.clone()]),
            Err(Error::TypeMismatch("pair", headless.clone()))
        );
        assert_eq!(cdr(&[headless.clone()]), Err(Error::TypeMismatch("pair", headless)));
    }

    #[test]
    fn table_has_every_name_once() {
        let names = primitive_names();
        assert_eq!(names.len(), PRIMITIVE_TABLE.len());
        for name in ["+", "-", "*", "/", "remainder"] {
            assert!(lookup(name).is_some(), "{name} missing");
        }
    }
}

use super::*;

const PROGRAMS: [&str; 12] = [
    "atom",
    "#t",
    "#f",
    "#true",
    "12345",
    "\"a string with (parens)\"",
    "()",
    "'quoted",
    "(a (nested (list)) \"s\" 1 #f)",
    "(a b . c)",
    "(a . (b . (c . d)))",
    "'(1 '(2 . 3) ())",
];

#[test]
fn test_render_round_trip() {
    for program in PROGRAMS {
        let value = parse(program).unwrap();
        assert_eq!(
            parse(&render(&value)),
            Ok(value.clone()),
            "\nRound trip of \"{program}\" through \"{value}\" failed\n"
        );
    }
}

#[test]
fn test_canonical_rendering() {
    assert_eq!(render(&parse("007").unwrap()), "7");
    assert_eq!(render(&parse("(a   b)").unwrap()), "(a b)");
    assert_eq!(render(&parse("'x").unwrap()), "(quote x)");
    assert_eq!(render(&parse("(a . (b . (c . d)))").unwrap()), "(a b c . d)");
}

#[test]
fn test_run() {
    assert_eq!(run("(- (+ 4 6 3) 3 5 2)"), "3");
    assert_eq!(run("'(1 2 3)"), "(1 2 3)");
    assert_eq!(run("\"hello\""), "\"hello\"");
    assert_eq!(run("(+ 2)"), "Expected 2 args; found values 2");
    assert_eq!(run("(+ 2 \"two\")"), "Invalid type: expected number, found \"two\"");
    assert_eq!(run("(what? 2)"), "Unrecognized primitive function args: what?");
    assert_eq!(
        run("(a '(imbalanced parens)"),
        "Parse error at line 1, column 24: `)' expected but end of source found"
    );
}

#[test]
fn test_render_outcome_folds_both_sides() {
    assert_eq!(render_outcome(&Ok(Value::Integer(1))), "1");
    assert_eq!(
        render_outcome(&Err(Error::Generic("Division by zero".to_string()))),
        "Division by zero"
    );
}

#[test]
fn test_primitive_names() {
    let names = primitive_names();
    for name in ["*", "+", "-", "/", "remainder", "car", "equal?"] {
        assert!(names.contains(&name), "{name} missing from {names:?}");
    }
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

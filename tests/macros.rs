use imprint::{value, Value};

#[test]
fn value_empty() {
    assert_eq!(value! {}, Value::Map(Default::default()));
}

#[test]
fn value_scalars() {
    let tests = [
        (value! { f: None }, Value::from([("f", Value::None)])),
        (value! { f: true }, Value::from([("f", true)])),
        (value! { f: false }, Value::from([("f", false)])),
        (value! { f: 123 }, Value::from([("f", 123)])),
        (value! { f: -123 }, Value::from([("f", -123)])),
        (value! { f: 12.3 }, Value::from([("f", 12.3)])),
        (value! { f: "test" }, Value::from([("f", "test")])),
        (value! { f: 'c' }, Value::from([("f", 'c')])),
    ];
    for (v, exp) in tests {
        assert_eq!(v, exp);
    }
}

#[test]
fn value_trailing_comma() {
    assert_eq!(value! { f: 1, }, Value::from([("f", 1)]));
}

#[test]
fn value_multiple_entries() {
    assert_eq!(
        value! { a: 1, b: "two", c: 3.0 },
        Value::from([
            (String::from("a"), Value::Integer(1)),
            (String::from("b"), Value::String(String::from("two"))),
            (String::from("c"), Value::Float(3.0)),
        ])
    );
}

#[test]
fn value_list() {
    assert_eq!(
        value! { f: [] },
        Value::from([("f", Value::List(vec![]))])
    );
    assert_eq!(
        value! { f: [1, "two", None] },
        Value::from([(
            "f",
            Value::List(vec![
                Value::Integer(1),
                Value::String(String::from("two")),
                Value::None,
            ])
        )])
    );
    assert_eq!(
        value! { f: [[1], [2, 3]] },
        Value::from([(
            "f",
            Value::List(vec![
                Value::List(vec![Value::Integer(1)]),
                Value::List(vec![Value::Integer(2), Value::Integer(3)]),
            ])
        )])
    );
}

#[test]
fn value_nested_map() {
    assert_eq!(
        value! { outer: { inner: { f: 1 } } },
        Value::from([(
            "outer",
            Value::from([("inner", Value::from([("f", 1)]))])
        )])
    );
}

#[test]
fn value_expression() {
    let x = 40;
    assert_eq!(value! { f: x + 2 }, Value::from([("f", 42)]));
}

#[test]
fn value_list_of_maps() {
    assert_eq!(
        value! { f: [{ a: 1 }, { b: 2 }] },
        Value::from([(
            "f",
            Value::List(vec![
                Value::from([("a", 1)]),
                Value::from([("b", 2)]),
            ])
        )])
    );
}

use imprint::{value, Dict, Hole, Template, Value};

fn map<T>(dict: &Dict<T>, subject: &T) -> Value {
    Value::Map(dict.to_map(subject).unwrap())
}

#[test]
fn dict_int_pair() {
    let dict = Dict::new(Template::parse(
        "i: {0}\nj: {1}\n",
        vec![
            Hole::int(|t: &(i64, i64)| t.0),
            Hole::int(|t: &(i64, i64)| t.1),
        ],
    ));
    assert_eq!(map(&dict, &(30, 40)), value! { i: 30, j: 40 });
}

#[test]
fn dict_literal_lines() {
    let dict = Dict::new(Template::<()>::parse(
        "name: alpha\nkind:   beta  \nempty:\n",
        vec![],
    ));
    assert_eq!(
        map(&dict, &()),
        value! { name: "alpha", kind: "beta", empty: "" }
    );
}

#[test]
fn dict_empty_key_dropped() {
    let dict = Dict::new(Template::<()>::parse(": 5\nk: 6\n", vec![]));
    assert_eq!(map(&dict, &()), value! { k: "6" });
}

#[test]
fn dict_blank_and_decorative_lines_dropped() {
    let dict = Dict::new(Template::parse(
        "\n   \n# --- section ---\ni: {0}\n\n",
        vec![Hole::int(|n: &i64| *n)],
    ));
    assert_eq!(map(&dict, &7), value! { i: 7 });
}

#[test]
fn dict_text_after_hole_poisons_line() {
    let dict = Dict::new(Template::parse(
        "k: {0}x\ni: {1}\n",
        vec![Hole::int(|n: &i64| *n), Hole::int(|n: &i64| *n)],
    ));
    assert_eq!(map(&dict, &1), value! { i: 1 });
}

#[test]
fn dict_text_before_hole_poisons_line() {
    let dict = Dict::new(Template::parse(
        "k: x{0}\ni: {1}\n",
        vec![Hole::int(|n: &i64| *n), Hole::int(|n: &i64| *n)],
    ));
    assert_eq!(map(&dict, &1), value! { i: 1 });
}

#[test]
fn dict_hole_in_key_position_poisons_line() {
    let dict = Dict::new(Template::parse(
        "k{0}: 5\ni: {1}\n",
        vec![Hole::int(|n: &i64| *n), Hole::int(|n: &i64| *n)],
    ));
    assert_eq!(map(&dict, &1), value! { i: 1 });
}

#[test]
fn dict_whitespace_around_hole_is_fine() {
    let dict = Dict::new(Template::parse(
        "  i:   {0}   \n",
        vec![Hole::int(|n: &i64| *n)],
    ));
    assert_eq!(map(&dict, &5), value! { i: 5 });
}

#[test]
fn dict_later_hole_replaces_earlier() {
    let dict = Dict::new(Template::parse(
        "k: {0}{1}\n",
        vec![Hole::constant(1), Hole::constant(2)],
    ));
    assert_eq!(map(&dict, &()), value! { k: 2 });
}

#[test]
fn dict_computed_hole() {
    let dict = Dict::new(Template::parse(
        "jj: {0}\n",
        vec![Hole::int(|t: &(i64, i64)| t.1 + t.1)],
    ));
    assert_eq!(map(&dict, &(30, 40)), value! { jj: 80 });
}

#[test]
fn dict_constant_hole() {
    let dict = Dict::new(Template::<()>::parse("x: {0}\n", vec![Hole::constant(5)]));
    assert_eq!(map(&dict, &()), value! { x: 5 });
}

#[test]
fn dict_char_hole_captures_string() {
    let dict = Dict::new(Template::parse(
        "c: {0}\n",
        vec![Hole::chr(|c: &char| *c)],
    ));
    assert_eq!(map(&dict, &'k'), value! { c: "k" });
}

#[test]
fn dict_duplicate_key_keeps_last() {
    let dict = Dict::new(Template::parse(
        "k: {0}\nk: {1}\n",
        vec![Hole::constant("first"), Hole::constant("last")],
    ));
    assert_eq!(map(&dict, &()), value! { k: "last" });
}

#[test]
fn dict_nested() {
    let inner = Dict::new(Template::parse(
        "\n    s: 1\n    v: {0}\n  ",
        vec![Hole::int(|v: &i64| *v)],
    ));
    let outer = Dict::new(Template::parse(
        "\n  i: {0}\n  j: {1}\n\n  jj: {2}\n\n  dict: {3}\n",
        vec![
            Hole::int(|t: &(i64, i64)| t.0),
            Hole::int(|t: &(i64, i64)| t.1),
            Hole::int(|t: &(i64, i64)| t.1 + t.1),
            Hole::nested(|t: &(i64, i64)| t.0, inner),
        ],
    ));
    assert_eq!(
        map(&outer, &(30, 40)),
        value! {
            i: 30,
            j: 40,
            jj: 80,
            dict: { s: "1", v: 30 },
        }
    );
}

#[test]
fn dict_shared_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let dict = Arc::new(Dict::new(Template::parse(
        "i: {0}\n",
        vec![Hole::int(|n: &i64| *n)],
    )));
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let dict = Arc::clone(&dict);
            thread::spawn(move || assert_eq!(map(&dict, &n), value! { i: n }))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn dict_idempotent() {
    let dict = Dict::new(Template::parse(
        "i: {0}\nj: {1}\n",
        vec![
            Hole::int(|t: &(i64, i64)| t.0),
            Hole::int(|t: &(i64, i64)| t.1),
        ],
    ));
    let first = dict.to_map(&(30, 40)).unwrap();
    let second = dict.to_map(&(30, 40)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dict_empty_template() {
    let dict = Dict::new(Template::<()>::parse("", vec![]));
    assert!(dict.to_map(&()).unwrap().is_empty());
}

#[test]
fn dict_missing_final_newline_drops_pending_hole() {
    // the final segment is empty, so the pending line never terminates
    let dict = Dict::new(Template::parse("i: {0}", vec![Hole::int(|n: &i64| *n)]));
    assert!(dict.to_map(&1).unwrap().is_empty());
}

#[test]
fn dict_final_char_terminates_line() {
    // without a trailing newline the last character acts as the terminator
    let dict = Dict::new(Template::<()>::parse("i: 30", vec![]));
    assert_eq!(map(&dict, &()), value! { i: "3" });
}

#[cfg(feature = "serde")]
#[test]
fn dict_serialized_hole() {
    #[derive(serde::Serialize)]
    struct Point {
        x: i64,
        y: i64,
    }

    let dict = Dict::new(Template::parse(
        "p: {0}\n",
        vec![Hole::serialize(|p: &Point| Point { x: p.x, y: p.y })],
    ));
    assert_eq!(
        map(&dict, &Point { x: 1, y: 2 }),
        value! { p: { x: 1, y: 2 } }
    );
}

#[cfg(feature = "serde")]
#[test]
fn dict_err_propagates_with_span() {
    let dict = Dict::new(Template::parse(
        "n: {0}\n",
        vec![Hole::serialize(|_: &()| u64::MAX)],
    ));
    let err = dict.to_map(&()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "out of range integral type conversion attempted between bytes 3 and 6"
    );
}

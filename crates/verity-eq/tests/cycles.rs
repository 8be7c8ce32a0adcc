use verity_core::{Body, ErrorKind, Pattern, Timestamp, TypedView, Value};
use verity_eq::is_deep_equal;

const NOW: i64 = 1_544_200_539_595;

fn make_obj(args: Vec<Value>) -> Value {
    Value::record([
        ("undef", Value::Undefined),
        ("nil", Value::Null),
        ("nan", Value::Number(f64::NAN)),
        ("inf", Value::Number(f64::INFINITY)),
        ("ninf", Value::Number(f64::NEG_INFINITY)),
        ("number", Value::from(1)),
        ("string", Value::from("foo")),
        ("error", Value::error(ErrorKind::Error, "foobar")),
        ("buffer", Value::buffer(vec![1, 2, 3])),
        ("time", Value::date(Timestamp::from_millis(NOW))),
        ("regex", Value::regexp(Pattern::new("hello").unwrap())),
        ("arraybuffer", Value::array_buffer(vec![1, 2, 3])),
        ("uint8array", Value::view(TypedView::uint8(&[1, 2, 3]))),
        ("float32array", Value::view(TypedView::float32(&[1.0, 2.0, 3.0]))),
        ("args", Value::arguments(args)),
        (
            "map",
            Value::map([
                (Value::from(1), Value::from("a")),
                (Value::from(2), Value::from("b")),
                (Value::from(3), Value::from("c")),
            ]),
        ),
        ("set", Value::set([Value::from(1), Value::from(2), Value::from(3)])),
        ("array", Value::array([Value::from(1), Value::from(2), Value::from(3)])),
        (
            "object",
            Value::record([("a", Value::from(1)), ("b", Value::from(2)), ("c", Value::from(3))]),
        ),
    ])
}

/// Ten records chained through `prev`, with the first pointing back at the
/// last so every element sits on a cycle.
fn make_arr() -> Value {
    let mut out: Vec<Value> = Vec::new();
    for i in 0..10 {
        let obj = make_obj(Vec::new());
        for key in ["one", "two", "three"] {
            set(&obj, key, make_obj(vec![make_obj(Vec::new())]));
        }
        if i > 0 {
            set(&obj, "prev", out[i - 1].clone());
        }
        out.push(obj);
    }
    set(&out[0], "prev", out[9].clone());
    Value::array(out)
}

fn at(list: &Value, index: usize) -> Value {
    list.as_object().unwrap().index(index).unwrap()
}

fn get(value: &Value, key: &str) -> Value {
    value.get(key).unwrap()
}

fn set(value: &Value, key: &str, field: Value) {
    value.as_object().unwrap().set_field(key, field).unwrap();
}

fn remove(value: &Value, key: &str) -> Value {
    value.as_object().unwrap().remove_field(key).unwrap().unwrap()
}

fn edit(value: &Value, change: impl FnOnce(&mut Body)) {
    change(&mut value.as_object().unwrap().borrow_mut().body);
}

fn write_byte(value: &Value, index: usize, byte: u8) {
    edit(value, |body| match body {
        Body::Buffer(bytes) | Body::ArrayBuffer(bytes) => bytes[index] = byte,
        Body::View(view) => view.bytes_mut()[index] = byte,
        other => panic!("not binary: {:?}", other.tag()),
    });
}

fn write_float(value: &Value, index: usize, number: f32) {
    edit(value, |body| match body {
        Body::View(view) => view.write(index, number.to_le_bytes()).unwrap(),
        other => panic!("not a view: {:?}", other.tag()),
    });
}

fn equal(a: &Value, b: &Value) {
    assert!(is_deep_equal(a, b));
    assert!(is_deep_equal(b, a));
}

fn not_equal(a: &Value, b: &Value) {
    assert!(!is_deep_equal(a, b));
    assert!(!is_deep_equal(b, a));
}

/// Applies `change`, checks the graphs diverge, applies `undo`, checks they
/// converge again.
fn flip(a: &Value, b: &Value, change: impl FnOnce(), undo: impl FnOnce()) {
    change();
    not_equal(a, b);
    undo();
    equal(a, b);
}

#[test]
fn cyclic_graphs_compare_equal() {
    let (a, b) = (make_arr(), make_arr());
    equal(&a, &b);
    equal(&a, &a);
}

#[test]
fn cross_linked_graphs_detect_changes() {
    let (a, b) = (make_arr(), make_arr());
    let (a0, b0) = (at(&a, 0), at(&b, 0));
    set(&a0, "a", a.clone());
    set(&a0, "b", b.clone());
    set(&b0, "a", a.clone());
    set(&b0, "b", b.clone());
    equal(&a, &b);

    let a1 = at(&a, 1);
    flip(&a, &b, || set(&a1, "number", Value::from(0)), || set(&a1, "number", Value::from(1)));
    flip(&a, &b, || set(&a1, "string", Value::from("fo")), || set(&a1, "string", Value::from("foo")));
    let buffer = get(&a1, "buffer");
    flip(&a, &b, || write_byte(&buffer, 2, 8), || write_byte(&buffer, 2, 3));
    let time = get(&a1, "time");
    flip(
        &a,
        &b,
        || edit(&time, |body| {
            if let Body::Date(stamp) = body {
                stamp.set_millis(0);
            }
        }),
        || edit(&time, |body| {
            if let Body::Date(stamp) = body {
                stamp.set_millis(NOW);
            }
        }),
    );
    flip(
        &a,
        &b,
        || set(&a1, "regex", Value::regexp(Pattern::new("^hello").unwrap())),
        || set(&a1, "regex", Value::regexp(Pattern::new("hello").unwrap())),
    );
}

#[test]
fn binary_and_collection_edits_are_detected() {
    let (a, b) = (make_arr(), make_arr());
    let a1 = at(&a, 1);

    let region = get(&a1, "arraybuffer");
    flip(&a, &b, || write_byte(&region, 2, 8), || write_byte(&region, 2, 3));
    let bytes = get(&a1, "uint8array");
    flip(&a, &b, || write_byte(&bytes, 2, 8), || write_byte(&bytes, 2, 3));
    let floats = get(&a1, "float32array");
    flip(&a, &b, || write_float(&floats, 2, 8.0), || write_float(&floats, 2, 3.0));

    let args = get(&a1, "args");
    flip(
        &a,
        &b,
        || set(&a1, "args", Value::record(Vec::<(String, Value)>::new())),
        || set(&a1, "args", args.clone()),
    );

    let map = get(&a1, "map");
    let assign = |text: &str| {
        edit(&map, |body| {
            if let Body::Map(entries) = body {
                entries.insert(Value::from(1), Value::from(text));
            }
        })
    };
    flip(&a, &b, || assign("g"), || assign("a"));

    let members = get(&a1, "set");
    flip(
        &a,
        &b,
        || edit(&members, |body| {
            if let Body::Set(items) = body {
                items.remove(&Value::from(1));
            }
        }),
        || edit(&members, |body| {
            if let Body::Set(items) = body {
                items.insert(Value::from(1));
            }
        }),
    );

    let list = get(&a1, "array");
    let list_object = list.as_object().unwrap().clone();
    flip(
        &a,
        &b,
        || {
            list_object.set_index(0, Value::from(2)).unwrap();
        },
        || {
            list_object.set_index(0, Value::from(1)).unwrap();
        },
    );

    let object = get(&a1, "object");
    flip(&a, &b, || set(&object, "a", Value::from(3)), || set(&object, "a", Value::from(1)));
}

#[test]
fn added_keys_break_equality() {
    let (a, b) = (make_arr(), make_arr());
    let a1 = at(&a, 1);
    for (key, value) in [
        ("number2", Value::from(0)),
        ("string2", Value::from("fo")),
        ("undef2", Value::Undefined),
    ] {
        flip(&a, &b, || set(&a1, key, value), || {
            remove(&a1, key);
        });
    }
    let object = get(&a1, "object");
    flip(&a, &b, || set(&object, "d", Value::from(4)), || {
        remove(&object, "d");
    });
}

#[test]
fn removed_keys_break_equality() {
    let (a, b) = (make_arr(), make_arr());
    let a1 = at(&a, 1);
    for key in ["number", "undef", "nil", "error", "args", "prev"] {
        let saved = remove(&a1, key);
        not_equal(&a, &b);
        set(&a1, key, saved);
        equal(&a, &b);
    }
}

#[test]
fn category_swaps_break_equality() {
    let (a, b) = (make_arr(), make_arr());
    let (a1, a2) = (at(&a, 1), at(&a, 2));
    let swaps: Vec<(&str, Value)> = vec![
        ("number", Value::from("foo")),
        ("string", Value::from(1)),
        ("buffer", Value::from("ha")),
        ("time", Value::from(1)),
        ("regex", Value::from("")),
        ("arraybuffer", Value::record(Vec::<(String, Value)>::new())),
        ("uint8array", Value::regexp(Pattern::new("foo").unwrap())),
        ("float32array", a.clone()),
        ("args", get(&a1, "float32array")),
        ("map", get(&a1, "args")),
        ("set", get(&a1, "map")),
        ("array", get(&a1, "set")),
        ("object", get(&a1, "array")),
    ];
    for (key, swapped) in swaps {
        let original = get(&a1, key);
        set(&a1, key, swapped);
        not_equal(&a, &b);
        // A structurally identical value from a sibling restores equality.
        let restored = match key {
            "number" | "string" | "args" => original,
            _ => get(&a2, key),
        };
        set(&a1, key, restored);
        equal(&a, &b);
    }
}

#[test]
fn shared_substructure_is_not_a_cycle() {
    let shared = Value::record([("leaf", Value::array([Value::from(1), Value::from(2)]))]);
    let left = Value::array([shared.clone(), shared.clone(), Value::record([("x", shared.clone())])]);
    let copy = || Value::record([("leaf", Value::array([Value::from(1), Value::from(2)]))]);
    let right = Value::array([copy(), copy(), Value::record([("x", copy())])]);
    equal(&left, &right);

    let one = copy();
    let aliased = Value::array([one.clone(), one.clone(), Value::record([("x", one)])]);
    equal(&left, &aliased);
    equal(&right, &aliased);
}

#[test]
fn self_reference_against_unrolled_copy() {
    // a = [a], b = [[b]]: both unroll to the same infinite shape.
    let a = Value::array(Vec::new());
    a.as_object().unwrap().push(a.clone()).unwrap();
    let b = Value::array(Vec::new());
    let inner = Value::array([b.clone()]);
    b.as_object().unwrap().push(inner).unwrap();
    assert_eq!(is_deep_equal(&a, &b), is_deep_equal(&b, &a));

    let c = Value::array(Vec::new());
    c.as_object().unwrap().push(c.clone()).unwrap();
    equal(&a, &c);

    let d = Value::array(Vec::new());
    d.as_object().unwrap().push(d.clone()).unwrap();
    d.as_object().unwrap().push(Value::from(1)).unwrap();
    not_equal(&a, &d);
}

#[test]
fn cyclic_maps_and_records() {
    let build = |tail: i32| {
        let node = Value::record([("value", Value::from(tail))]);
        let map = Value::map([(Value::from("node"), node.clone())]);
        set(&node, "owner", map.clone());
        map
    };
    equal(&build(1), &build(1));
    not_equal(&build(1), &build(2));
}

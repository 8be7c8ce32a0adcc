use tracing::trace;
use verity_core::{same_value, Body, Fields, Object, Value, ValueMap, ValueSet};

use crate::session::{Session, Visit};

/// Compares one pair of values, threading `session` through composite
/// recursion.
pub(crate) fn compare(a: &Value, b: &Value, session: &mut Session) -> bool {
    if same_value(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Object(x), Value::Object(y)) => compare_objects(x, y, session),
        _ => false,
    }
}

fn compare_objects(a: &Object, b: &Object, session: &mut Session) -> bool {
    let (left, right) = (a.borrow(), b.borrow());
    if left.body.tag() != right.body.tag() || left.proto != right.proto {
        return false;
    }

    match &left.body {
        Body::Buffer(x) => matches!(&right.body, Body::Buffer(y) if x == y),
        Body::ArrayBuffer(x) => matches!(&right.body, Body::ArrayBuffer(y) if x == y),
        // Raw bytes for every view kind.
        Body::View(x) => matches!(&right.body, Body::View(y) if x.bytes() == y.bytes()),
        Body::Date(x) => matches!(&right.body, Body::Date(y) if x.same_instant(y)),
        Body::RegExp(x) => matches!(&right.body, Body::RegExp(y) if x == y),
        Body::Set(x) => matches!(&right.body, Body::Set(y) if sets(x, y)),
        Body::Arguments(x) => match &right.body {
            Body::Arguments(y) => guarded(a, b, session, |s| sequences(x, y, s)),
            _ => false,
        },
        Body::Array(x) => match &right.body {
            Body::Array(y) => guarded(a, b, session, |s| sequences(x, y, s)),
            _ => false,
        },
        Body::Map(x) => match &right.body {
            Body::Map(y) => guarded(a, b, session, |s| maps(x, y, s)),
            _ => false,
        },
        Body::Record(x) => match &right.body {
            Body::Record(y) => guarded(a, b, session, |s| records(x, y, s)),
            _ => false,
        },
        Body::Error(x) => match &right.body {
            Body::Error(y) if x.message == y.message => {
                guarded(a, b, session, |s| records(&x.fields, &y.fields, s))
            }
            _ => false,
        },
    }
}

/// Runs `body` with the pair registered on the session path, or returns the
/// cached verdict when both sides are already on it.
fn guarded(
    a: &Object,
    b: &Object,
    session: &mut Session,
    body: impl FnOnce(&mut Session) -> bool,
) -> bool {
    match session.enter(a, b) {
        Visit::Seen(verdict) => {
            trace!(left = a.id(), right = b.id(), verdict, "cycle guard short-circuit");
            verdict
        }
        Visit::Entered(frame) => {
            let verdict = body(session);
            session.leave(frame);
            verdict
        }
    }
}

fn sets(x: &ValueSet, y: &ValueSet) -> bool {
    x.len() == y.len() && x.iter().all(|v| y.contains(v)) && y.iter().all(|v| x.contains(v))
}

fn sequences(x: &[Value], y: &[Value], session: &mut Session) -> bool {
    x.len() == y.len() && x.iter().zip(y).all(|(v, w)| compare(v, w, session))
}

fn maps(x: &ValueMap, y: &ValueMap, session: &mut Session) -> bool {
    if x.len() != y.len() || !y.keys().all(|key| x.contains_key(key)) {
        return false;
    }
    x.iter().all(|(key, v)| match y.get(key) {
        Some(w) => compare(v, w, session),
        None => false,
    })
}

// Key presence matters: a key holding `undefined` is not an absent key.
fn records(x: &Fields, y: &Fields, session: &mut Session) -> bool {
    if x.len() != y.len() || !y.keys().all(|key| x.contains_key(key)) {
        return false;
    }
    x.iter().all(|(key, v)| match y.get(key) {
        Some(w) => compare(v, w, session),
        None => false,
    })
}

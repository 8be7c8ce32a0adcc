#![deny(missing_docs)]

//! Deep structural equality for verity values.
//!
//! [`is_deep_equal`] is total: it never panics on well-formed values and
//! terminates on cyclic graphs. Numbers compare with [`same_value`] semantics
//! (NaN equals NaN, +0 differs from -0), so the relation is reflexive,
//! symmetric and transitive. Composite pairs must agree on category tag and
//! prototype before their contents are compared.

mod compare;
mod session;

pub use verity_core::same_value;

use compare::compare;
use session::Session;
use verity_core::Value;

/// Returns true when `a` and `b` are structurally equivalent.
///
/// ```
/// use verity_core::Value;
/// use verity_eq::is_deep_equal;
///
/// let a = Value::array([Value::from(1), Value::from(f64::NAN)]);
/// let b = Value::array([Value::from(1), Value::from(f64::NAN)]);
/// assert!(is_deep_equal(&a, &b));
/// assert!(!is_deep_equal(&Value::from(0.0), &Value::from(-0.0)));
/// ```
///
/// Recursion depth follows the nesting depth of the operands. Acyclic input
/// nested deeply enough (on the order of 10^5 levels) exhausts the thread's
/// stack; cycles are cut by the guard and do not count toward that depth.
pub fn is_deep_equal(a: &Value, b: &Value) -> bool {
    compare(a, b, &mut Session::new())
}

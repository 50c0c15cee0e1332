//! Structural equality
//!
//! Two values are structurally equal when they have the same shape all the
//! way down: same container kinds, same keys (in any order), same lengths,
//! and equal leaves. Atomic heap values only match themselves.
//!
//! Cycles are handled coinductively: a pair of containers already under
//! comparison is assumed equal, so `a = {self: a}` equals `b = {self: b}`.

use rustc_hash::FxHashSet;

use crate::value::Value;

/// Compare two value graphs by structure
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    Comparer::default().compare(a, b)
}

#[derive(Default)]
struct Comparer {
    entered: FxHashSet<(usize, usize)>,
}

impl Comparer {
    fn compare(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            // NaN compares equal to itself here so copied NaNs round-trip
            (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
            (Value::Object(x), Value::Object(y)) => {
                if !self.enter(x.addr(), y.addr()) {
                    return true;
                }
                let left = x.entries();
                if left.len() != y.len() {
                    return false;
                }
                left.iter().all(|(key, lv)| match y.get(key) {
                    Some(rv) => self.compare(lv, &rv),
                    None => false,
                })
            }
            (Value::Array(x), Value::Array(y)) => {
                if !self.enter(x.addr(), y.addr()) {
                    return true;
                }
                let left = x.elements();
                let right = y.elements();
                left.len() == right.len()
                    && left.iter().zip(&right).all(|(lv, rv)| self.compare(lv, rv))
            }
            _ => a.strict_equals(b),
        }
    }

    /// Returns false when the pair has already been entered
    fn enter(&mut self, a: usize, b: usize) -> bool {
        self.entered.insert((a, b))
    }
}

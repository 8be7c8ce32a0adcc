use std::collections::HashMap;

use verity_core::Object;

/// Per-call bookkeeping of the composite pairs on the active recursion path.
///
/// Each side maps an object identity to the visit id it was entered under.
/// An identity is present only while its pair is being compared, so shared
/// substructure reached along sibling paths is compared again instead of being
/// mistaken for a cycle.
#[derive(Debug, Default)]
pub(crate) struct Session {
    left: HashMap<usize, u64>,
    right: HashMap<usize, u64>,
    next: u64,
}

/// Outcome of [`Session::enter`].
#[derive(Debug)]
pub(crate) enum Visit {
    /// Both identities are already on the path; carries the verdict.
    Seen(bool),
    /// The pair was registered and must be released with [`Session::leave`].
    Entered(Frame),
}

/// Registration token for one entered pair.
#[derive(Debug)]
pub(crate) struct Frame {
    left: usize,
    right: usize,
    shadowed_left: Option<u64>,
    shadowed_right: Option<u64>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers the pair under a fresh visit id unless both sides are already
    /// on the path, in which case they are equal only if they were entered
    /// together.
    pub(crate) fn enter(&mut self, a: &Object, b: &Object) -> Visit {
        let (left, right) = (a.id(), b.id());
        if let (Some(x), Some(y)) = (self.left.get(&left), self.right.get(&right)) {
            return Visit::Seen(x == y);
        }
        let id = self.next;
        self.next += 1;
        let shadowed_left = self.left.insert(left, id);
        let shadowed_right = self.right.insert(right, id);
        Visit::Entered(Frame {
            left,
            right,
            shadowed_left,
            shadowed_right,
        })
    }

    /// Unregisters a pair, reinstating any outer registration of the same
    /// identity that the pair shadowed.
    pub(crate) fn leave(&mut self, frame: Frame) {
        restore(&mut self.left, frame.left, frame.shadowed_left);
        restore(&mut self.right, frame.right, frame.shadowed_right);
    }

    #[cfg(test)]
    fn depth(&self) -> (usize, usize) {
        (self.left.len(), self.right.len())
    }
}

fn restore(map: &mut HashMap<usize, u64>, key: usize, shadowed: Option<u64>) {
    match shadowed {
        Some(id) => {
            map.insert(key, id);
        }
        None => {
            map.remove(&key);
        }
    }
}

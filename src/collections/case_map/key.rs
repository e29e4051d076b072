use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};

use crate::lang::str::fold;

/// A `str` whose `Hash` and `Eq` fold case. It only ever exists behind a reference, which lets
/// `&str` lookups borrow-match stored [`CaseKey`]s the way `&str` matches `String` in the
/// standard maps.
#[repr(transparent)]
pub(crate) struct CaseStr(str);

impl CaseStr {
    pub(crate) fn new(s: &str) -> &CaseStr {
        // SAFETY: CaseStr is a transparent wrapper over str, so the pointer cast only changes
        // the type, never the referent.
        unsafe { &*(s as *const str as *const CaseStr) }
    }

    pub(crate) const fn as_str(&self) -> &str {
        &self.0
    }
}

impl Hash for CaseStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in fold(&self.0) {
            c.hash(state);
        }
        // Terminator, so ("ab", "c") and ("a", "bc") style splits can't collide in compounds.
        state.write_u8(0xff);
    }
}

impl PartialEq for CaseStr {
    fn eq(&self, other: &Self) -> bool {
        fold(&self.0).eq(fold(&other.0))
    }
}

impl Eq for CaseStr {}

impl Debug for CaseStr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

/// An owned key that hashes and compares through [`CaseStr`]. The original casing is kept for
/// display and iteration.
pub(crate) struct CaseKey(pub(crate) String);

impl CaseKey {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<CaseStr> for CaseKey {
    fn borrow(&self) -> &CaseStr {
        CaseStr::new(&self.0)
    }
}

impl Hash for CaseKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        CaseStr::new(&self.0).hash(state);
    }
}

impl PartialEq for CaseKey {
    fn eq(&self, other: &Self) -> bool {
        CaseStr::new(&self.0) == CaseStr::new(&other.0)
    }
}

impl Eq for CaseKey {}

impl Clone for CaseKey {
    fn clone(&self) -> Self {
        CaseKey(self.0.clone())
    }
}

impl Debug for CaseKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

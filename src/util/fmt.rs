use std::fmt::{self, Debug, Formatter};

/// Wraps a pre-rendered string so that [`Debug`] prints it verbatim, without quoting. Used by the
/// collection `Debug` impls to show internal layout (chains, rings) legibly.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

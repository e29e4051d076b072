mod error;
mod properties;
mod tests;

pub use error::*;
pub use properties::*;

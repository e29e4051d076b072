mod iter;
mod lru_map;
mod tests;

pub use iter::*;
pub use lru_map::*;

//! Thin helpers over [`std::io`] and [`std::fs`]: buffered copying, quiet flushing,
//! `.properties` files and resource traversal.
//!
//! Unlike the collections, nothing here reimplements the platform: these modules only add the
//! glue that otherwise gets rewritten in every project, with strongly typed errors.

pub mod copy;
pub mod flush;
pub mod properties;
pub mod resource;

#[doc(inline)]
pub use copy::CopyError;
#[doc(inline)]
pub use properties::Properties;
#[doc(inline)]
pub use resource::Resource;

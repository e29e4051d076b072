//! Various general-purpose collection types.
//!
//! # Purpose
//! Each type here exists because it provides a guarantee the standard collections don't:
//! [`ArrayMap`] adds positional access to hash lookup, [`CaseInsensitiveMap`] folds key case,
//! [`RingList`] threads its nodes through a sentinel so there are no boundary cases, and
//! [`LruMap`] keeps entries in access order with a hard capacity.
//!
//! # Method
//! All of the maps resolve collisions by chaining through indices rather than pointers, so the
//! backing storage stays dense and insertion order falls out of the representation for free.

#[cfg(feature = "array-map")]
pub mod array_map;
#[cfg(feature = "case-map")]
pub mod case_map;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "lru")]
pub mod lru;

#[cfg(feature = "array-map")]
#[doc(inline)]
pub use array_map::ArrayMap;
#[cfg(feature = "case-map")]
#[doc(inline)]
pub use case_map::CaseInsensitiveMap;
#[cfg(feature = "linked")]
#[doc(inline)]
pub use linked::RingList;
#[cfg(feature = "lru")]
#[doc(inline)]
pub use lru::LruMap;

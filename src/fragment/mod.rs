//! Pre-rendered byte fragments for the primitive appenders.

pub(crate) mod decimal;
pub(crate) mod float;
pub(crate) mod utf8;

use smallvec::SmallVec;

/// A short run of encoded bytes, staged before a single buffer commit.
///
/// Every primitive rendering fits the inline capacity, so staging a fragment
/// never allocates on its own.
pub(crate) type Fragment = SmallVec<[u8; 24]>;

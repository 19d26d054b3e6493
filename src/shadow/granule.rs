//! Granule geometry and the shadow-byte value domain.
//!
//! One shadow byte records the addressability of one granule of application
//! memory. The granule size is fixed per build: 8 bytes by default, 128
//! bytes behind the `wide-granule` feature.

/// Application bytes covered by one shadow byte.
#[cfg(not(feature = "wide-granule"))]
pub const GRANULE_SIZE: usize = 8;

/// Application bytes covered by one shadow byte.
#[cfg(feature = "wide-granule")]
pub const GRANULE_SIZE: usize = 128;

/// log2 of [`GRANULE_SIZE`]; the shift used by address translation.
#[cfg(not(feature = "wide-granule"))]
pub const GRANULE_SHIFT: u32 = 3;

/// log2 of [`GRANULE_SIZE`]; the shift used by address translation.
#[cfg(feature = "wide-granule")]
pub const GRANULE_SHIFT: u32 = 7;

/// Shadow byte marking a fully unaddressable granule.
///
/// Wide granules use the `0xff` sentinel. Standard granules store the
/// caller's poison tag directly, so the report side can recover why the
/// granule was poisoned. This is the single point deciding between the
/// two conventions.
#[inline]
pub const fn full_poison_byte(tag: u8) -> u8 {
    if GRANULE_SIZE == 128 {
        0xff
    } else {
        tag
    }
}

/// Whether an address or size is granule-aligned.
#[inline]
pub const fn is_granule_aligned(value: usize) -> bool {
    value & (GRANULE_SIZE - 1) == 0
}

/// Number of shadow bytes covering `size` granule-aligned application bytes.
#[inline]
pub const fn granules_in(size: usize) -> usize {
    size >> GRANULE_SHIFT
}

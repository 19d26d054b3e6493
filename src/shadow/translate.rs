//! Application-to-shadow address translation.

use super::granule::GRANULE_SHIFT;

/// Mapping from an application address to the shadow byte backing its
/// granule.
///
/// Implementations must be total over the supported address space,
/// injective at granule resolution, and monotonic: if `a < b` then
/// `shadow_for(a) <= shadow_for(b)`. The fill engine relies on this to
/// turn an application range into one contiguous shadow range.
pub trait AddressTranslator {
    /// Shadow byte backing the granule containing `addr`.
    fn shadow_for(&self, addr: usize) -> *mut u8;
}

/// The canonical fixed-offset translation: `(addr >> GRANULE_SHIFT) + offset`.
///
/// This is the layout every production shadow mapping uses; the offset is
/// chosen by the reservation subsystem so the shadow of the entire
/// application space lands inside the pre-mapped shadow region.
#[derive(Debug, Clone, Copy)]
pub struct LinearTranslator {
    offset: usize,
}

impl LinearTranslator {
    /// Create a translator with a raw shadow offset.
    pub const fn new(offset: usize) -> Self {
        Self { offset }
    }

    /// Translator mapping the application range starting at `app_base`
    /// onto the shadow buffer starting at `shadow_base`.
    ///
    /// Convenience for embedders (and tests) that carve the shadow out of
    /// an ordinary allocation instead of a fixed reservation.
    pub fn with_bases(app_base: usize, shadow_base: *mut u8) -> Self {
        Self {
            offset: (shadow_base as usize).wrapping_sub(app_base >> GRANULE_SHIFT),
        }
    }
}

impl AddressTranslator for LinearTranslator {
    #[inline]
    fn shadow_for(&self, addr: usize) -> *mut u8 {
        (addr >> GRANULE_SHIFT).wrapping_add(self.offset) as *mut u8
    }
}

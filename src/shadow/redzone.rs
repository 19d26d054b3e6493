//! Right-redzone boundary encoding.
//!
//! Walks the shadow covering a live allocation and its trailing redzone one
//! granule at a time. The interesting byte is the straddling granule where
//! the live region ends mid-granule: it records the count of trailing
//! unaddressable bytes, the complement of the leading-addressable count
//! used by the gradient side. Another protocol detail shared with the
//! poison-check consumer; preserve exactly.

use super::granule::{full_poison_byte, GRANULE_SIZE};

/// Encode the shadow for `live_size` live bytes followed by a redzone,
/// covering `redzone_size` bytes of application memory from the start of
/// the allocation. Writes exactly `ceil(redzone_size / GRANULE_SIZE)`
/// shadow bytes.
///
/// `partial_boundary` selects whether the straddling granule records the
/// trailing-unaddressable count or stays fully addressable.
///
/// # Safety
///
/// `shadow` must be valid writable shadow memory for
/// `ceil(redzone_size / GRANULE_SIZE)` bytes.
pub(crate) unsafe fn encode_right(
    shadow: *mut u8,
    live_size: usize,
    redzone_size: usize,
    tag: u8,
    partial_boundary: bool,
) {
    let mut shadow = shadow;
    let mut i = 0;
    while i < redzone_size {
        *shadow = if i + GRANULE_SIZE <= live_size {
            // fully addressable
            0
        } else if i >= live_size {
            // fully inside the redzone
            full_poison_byte(tag)
        } else if partial_boundary {
            // trailing unaddressable bytes of the last partly-live granule
            (GRANULE_SIZE - (live_size & (GRANULE_SIZE - 1))) as u8
        } else {
            0
        };
        shadow = shadow.add(1);
        i += GRANULE_SIZE;
    }
}

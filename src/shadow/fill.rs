//! Bulk shadow-fill algorithms.
//!
//! Two distinct fills sit behind the tag dispatch in
//! [`ShadowPoisoner::poison_range`](crate::ShadowPoisoner::poison_range):
//! a uniform remap-and-fill for nonzero tags, and a banded gradient for tag
//! zero. The gradient stores a class value that grows toward the high end
//! of the clean run, so a reader can bound the remaining clean length from
//! one shadow byte instead of scanning forward.

use std::num::NonZeroU8;
use std::ptr;

/// Nonzero tags `1..=7` are stored as `72 - tag`, placing them in
/// `[65, 71]`, clear of the gradient's value band; tags `>= 8` are stored
/// unchanged. The numeric encoding is a wire protocol shared with the
/// poison-check and report consumers and must not change.
#[inline]
pub(crate) const fn remap_tag(tag: u8) -> u8 {
    if tag <= 7 {
        72 - tag
    } else {
        tag
    }
}

/// Right-aligned tail written over the last (up to) seven shadow bytes of a
/// gradient fill. The highest-address byte is always 64.
const GRADIENT_TAIL: [u8; 7] = [62, 62, 62, 62, 63, 63, 64];

/// First block index of the doubling prefix; the block just below the tail
/// is `1 << GRADIENT_BASE_INDEX` bytes long.
const GRADIENT_BASE_INDEX: u32 = 3;

/// Fill `len` shadow bytes with the remapped tag in a single pass.
///
/// # Safety
///
/// `shadow..shadow + len` must be valid writable shadow memory.
pub(crate) unsafe fn uniform(shadow: *mut u8, len: usize, tag: NonZeroU8) {
    ptr::write_bytes(shadow, remap_tag(tag.get()), len);
}

/// Write the addressable gradient over `len` shadow bytes.
///
/// The last up-to-seven bytes take the right-aligned suffix of
/// [`GRADIENT_TAIL`]. For longer ranges the remaining prefix is filled
/// backward in doubling blocks: 8 bytes of 61, 16 of 60, 32 of 59, and so
/// on, the lowest block clipped to the range start. Total bytes written is
/// linear in `len` but issued as O(log len) fills.
///
/// # Safety
///
/// `shadow..shadow + len` must be valid writable shadow memory.
pub(crate) unsafe fn gradient(shadow: *mut u8, len: usize) {
    if len == 0 {
        return;
    }

    let tail = GRADIENT_TAIL.len().min(len);
    ptr::copy_nonoverlapping(
        GRADIENT_TAIL.as_ptr().add(GRADIENT_TAIL.len() - tail),
        shadow.add(len - tail),
        tail,
    );
    if len <= GRADIENT_TAIL.len() {
        return;
    }

    let mut index = GRADIENT_BASE_INDEX;
    loop {
        let block = 1usize << index;
        let value = (64 - index) as u8;
        // Bytes covered by the tail plus every block through this one.
        let span = (block << 1) - 1;
        if span >= len {
            ptr::write_bytes(shadow, value, len - (block - 1));
            break;
        }
        ptr::write_bytes(shadow.add(len - span), value, block);
        index += 1;
    }
}

//! Poisoning entry points.
//!
//! [`ShadowPoisoner`] ties a translator, the poison gate, and the engine
//! configuration together and exposes the two hot-path operations the
//! allocator and instrumentation layers call on every allocation, free,
//! and scope exit.

use std::num::NonZeroU8;

use crate::config::ShadowConfig;
use crate::shadow::fill;
use crate::shadow::gate::PoisonGate;
use crate::shadow::granule::{granules_in, is_granule_aligned};
use crate::shadow::redzone;
use crate::shadow::translate::AddressTranslator;

/// Shadow-memory poisoning engine.
///
/// Owns no shadow memory: the shadow region is pre-mapped and writable,
/// and the translator decides where each granule's byte lives. The engine
/// performs plain nonatomic stores, so callers poisoning overlapping
/// ranges concurrently will observe torn fills; serialize externally.
pub struct ShadowPoisoner<T: AddressTranslator> {
    translator: T,
    gate: PoisonGate,
    config: ShadowConfig,
}

impl<T: AddressTranslator> ShadowPoisoner<T> {
    /// Create an engine over the given translation with poisoning enabled.
    pub fn new(translator: T, config: ShadowConfig) -> Self {
        Self {
            translator,
            gate: PoisonGate::new(),
            config,
        }
    }

    /// The gate controlling whether poisoning writes are permitted.
    pub fn gate(&self) -> &PoisonGate {
        &self.gate
    }

    /// The engine configuration.
    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Poison or unpoison the shadow of `size` bytes at `addr`.
    ///
    /// A nonzero `tag` marks the range unaddressable: low tags are
    /// remapped and the covered shadow is filled uniformly in one pass.
    /// Tag zero marks it addressable via the gradient fill. `size == 0`
    /// is a no-op.
    ///
    /// Writing a nonzero tag while the gate is disabled is a contract
    /// violation, checked only under debug assertions.
    ///
    /// # Safety
    ///
    /// `addr` and `size` must be granule-aligned, and the translated
    /// shadow range must be valid writable memory.
    pub unsafe fn poison_range(&self, addr: usize, size: usize, tag: u8) {
        debug_assert!(is_granule_aligned(addr), "unaligned range start");
        debug_assert!(is_granule_aligned(size), "unaligned range size");
        debug_assert!(tag == 0 || self.gate.can_poison(), "poisoning is disabled");

        if size == 0 {
            return;
        }

        #[cfg(feature = "log")]
        log::trace!("poison_range addr={addr:#x} size={size} tag={tag:#04x}");

        let shadow = self.translator.shadow_for(addr);
        let len = granules_in(size);
        match NonZeroU8::new(tag) {
            Some(tag) => fill::uniform(shadow, len, tag),
            None => fill::gradient(shadow, len),
        }
    }

    /// Encode the shadow of a live allocation and its trailing redzone.
    ///
    /// Covers `redzone_size` bytes of application memory starting at
    /// `addr`, of which the first `live_size` remain addressable; the
    /// straddling granule follows the configured boundary reporting.
    /// `redzone_size` need not be granule-aligned.
    ///
    /// # Safety
    ///
    /// `addr` must be granule-aligned and the translated shadow range
    /// must be valid writable memory for the covered granules.
    pub unsafe fn poison_partial_right_redzone(
        &self,
        addr: usize,
        live_size: usize,
        redzone_size: usize,
        tag: u8,
    ) {
        debug_assert!(is_granule_aligned(addr), "unaligned allocation start");
        debug_assert!(self.gate.can_poison(), "poisoning is disabled");

        #[cfg(feature = "log")]
        log::trace!(
            "poison_partial_right_redzone addr={addr:#x} live={live_size} \
             redzone={redzone_size} tag={tag:#04x}"
        );

        let shadow = self.translator.shadow_for(addr);
        redzone::encode_right(
            shadow,
            live_size,
            redzone_size,
            tag,
            self.config.partial_boundary_reporting,
        );
    }
}

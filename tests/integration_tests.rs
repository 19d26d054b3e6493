//! Integration tests for shadowgrain.

use shadowgrain::{
    full_poison_byte, LinearTranslator, ShadowConfig, ShadowPoisoner, GRANULE_SIZE,
};

const APP_BASE: usize = 0x40000;

/// Shadow buffer plus an engine translating into it.
struct Harness {
    shadow: Vec<u8>,
    poisoner: ShadowPoisoner<LinearTranslator>,
}

impl Harness {
    fn new(granules: usize, config: ShadowConfig) -> Self {
        let mut shadow = vec![0u8; granules];
        let translator = LinearTranslator::with_bases(APP_BASE, shadow.as_mut_ptr());
        Self {
            shadow,
            poisoner: ShadowPoisoner::new(translator, config),
        }
    }
}

#[test]
fn test_poison_range_fills_uniformly() {
    let h = Harness::new(32, ShadowConfig::default());

    unsafe { h.poisoner.poison_range(APP_BASE, 16 * GRANULE_SIZE, 0xf8) };

    assert!(h.shadow[..16].iter().all(|&b| b == 0xf8));
    assert!(h.shadow[16..].iter().all(|&b| b == 0));
}

#[test]
fn test_low_tags_are_remapped() {
    let h = Harness::new(8, ShadowConfig::default());

    unsafe { h.poisoner.poison_range(APP_BASE, 4 * GRANULE_SIZE, 2) };

    assert!(h.shadow[..4].iter().all(|&b| b == 70));
}

#[test]
fn test_unpoison_writes_gradient() {
    let h = Harness::new(32, ShadowConfig::default());

    unsafe {
        h.poisoner.poison_range(APP_BASE, 32 * GRANULE_SIZE, 0xfd);
        h.poisoner.poison_range(APP_BASE, 32 * GRANULE_SIZE, 0);
    }

    // Fixed tail at the high end, monotone classes before it.
    assert_eq!(&h.shadow[25..], &[62, 62, 62, 62, 63, 63, 64]);
    assert!(h.shadow.windows(2).all(|w| w[0] <= w[1]));
    // Nothing left in the poisoned-tag value space.
    assert!(h.shadow.iter().all(|&b| b < 65));
}

#[test]
fn test_zero_size_is_noop() {
    let h = Harness::new(8, ShadowConfig::default());

    unsafe {
        h.poisoner.poison_range(APP_BASE, 4 * GRANULE_SIZE, 0xf1);
        h.poisoner.poison_range(APP_BASE, 0, 0);
        h.poisoner.poison_range(APP_BASE, 0, 0xab);
    }

    assert!(h.shadow[..4].iter().all(|&b| b == 0xf1));
}

#[test]
fn test_poison_range_is_idempotent() {
    let h = Harness::new(64, ShadowConfig::default());

    unsafe { h.poisoner.poison_range(APP_BASE, 64 * GRANULE_SIZE, 0) };
    let once = h.shadow.clone();
    unsafe { h.poisoner.poison_range(APP_BASE, 64 * GRANULE_SIZE, 0) };

    assert_eq!(h.shadow, once);
}

#[test]
fn test_interior_range_leaves_neighbors_untouched() {
    let h = Harness::new(24, ShadowConfig::default());

    let addr = APP_BASE + 8 * GRANULE_SIZE;
    unsafe { h.poisoner.poison_range(addr, 8 * GRANULE_SIZE, 0xfb) };

    assert!(h.shadow[..8].iter().all(|&b| b == 0));
    assert!(h.shadow[8..16].iter().all(|&b| b == 0xfb));
    assert!(h.shadow[16..].iter().all(|&b| b == 0));
}

#[test]
fn test_redzone_boundary_with_partial_reporting() {
    let h = Harness::new(8, ShadowConfig::default());

    let live = 2 * GRANULE_SIZE + 5;
    let redzone = 4 * GRANULE_SIZE;
    unsafe {
        h.poisoner
            .poison_partial_right_redzone(APP_BASE, live, redzone, 0xfa)
    };

    assert_eq!(&h.shadow[..2], &[0, 0]);
    assert_eq!(h.shadow[2], (GRANULE_SIZE - 5) as u8);
    assert_eq!(h.shadow[3], full_poison_byte(0xfa));
}

#[test]
fn test_redzone_boundary_without_partial_reporting() {
    let config = ShadowConfig::default().with_partial_boundary_reporting(false);
    let h = Harness::new(8, config);

    let live = GRANULE_SIZE + 5;
    unsafe {
        h.poisoner
            .poison_partial_right_redzone(APP_BASE, live, 3 * GRANULE_SIZE, 0xfa)
    };

    assert_eq!(&h.shadow[..2], &[0, 0]);
    assert_eq!(h.shadow[2], full_poison_byte(0xfa));
}

#[test]
fn test_redzone_after_unpoison_round_trip() {
    let h = Harness::new(16, ShadowConfig::default());

    unsafe {
        h.poisoner.poison_range(APP_BASE, 16 * GRANULE_SIZE, 0);
        h.poisoner.poison_partial_right_redzone(
            APP_BASE,
            4 * GRANULE_SIZE,
            8 * GRANULE_SIZE,
            0xfa,
        );
    }

    assert_eq!(&h.shadow[..4], &[0, 0, 0, 0]);
    assert!(h.shadow[4..8].iter().all(|&b| b == full_poison_byte(0xfa)));
    // Granules beyond the redzone keep their gradient bytes.
    assert_eq!(&h.shadow[9..], &[62, 62, 62, 62, 63, 63, 64]);
}

#[test]
fn test_gate_pause_guard() {
    let h = Harness::new(8, ShadowConfig::default());

    assert!(h.poisoner.gate().can_poison());
    {
        let _guard = h.poisoner.gate().pause();
        assert!(!h.poisoner.gate().can_poison());
        // Unpoisoning stays legal while the gate is closed.
        unsafe { h.poisoner.poison_range(APP_BASE, 8 * GRANULE_SIZE, 0) };
    }
    assert!(h.poisoner.gate().can_poison());
}

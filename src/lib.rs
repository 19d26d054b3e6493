//! # shadowgrain
//!
//! Shadow-memory encoding and poisoning engine for memory-safety sanitizer
//! runtimes.
//!
//! ## Features
//!
//! - One shadow byte per granule of application memory (8 bytes by
//!   default, 128 behind the `wide-granule` feature)
//! - Bulk range poisoning: uniform remapped fill for nonzero poison tags
//! - Gradient unpoisoning: O(log n) fill calls encoding distance classes
//!   toward the end of the clean run
//! - Right-redzone boundary encoding with configurable sub-granule
//!   boundary reporting
//! - Process-wide poison gate with an RAII pause guard
//!
//! The shadow region itself is owned externally: reservation, mapping, and
//! page release belong to the embedding runtime, as do the interceptors
//! and the poison-check/report consumers that read shadow bytes back.
//!
//! ## Quick Start
//!
//! ```rust
//! use shadowgrain::{LinearTranslator, ShadowConfig, ShadowPoisoner, GRANULE_SIZE};
//!
//! let mut shadow = vec![0u8; 64];
//! let app_base = 0x10000;
//! let translator = LinearTranslator::with_bases(app_base, shadow.as_mut_ptr());
//! let poisoner = ShadowPoisoner::new(translator, ShadowConfig::default());
//!
//! // Mark 16 granules unaddressable, then addressable again.
//! unsafe {
//!     poisoner.poison_range(app_base, 16 * GRANULE_SIZE, 0xf8);
//!     poisoner.poison_range(app_base, 16 * GRANULE_SIZE, 0);
//! }
//! assert_eq!(shadow[15], 64);
//! ```

pub mod config;
pub mod shadow;

// Re-export public API at crate root for convenience
pub use config::ShadowConfig;
pub use shadow::gate::{PoisonGate, PoisonPauseGuard};
pub use shadow::granule::{full_poison_byte, is_granule_aligned, GRANULE_SHIFT, GRANULE_SIZE};
pub use shadow::poisoner::ShadowPoisoner;
pub use shadow::translate::{AddressTranslator, LinearTranslator};

//! Shadow-memory state: granule geometry, address translation, and the
//! fill primitives behind the poisoning entry points.

pub(crate) mod fill;
pub mod gate;
pub mod granule;
pub mod poisoner;
pub(crate) mod redzone;
pub mod translate;

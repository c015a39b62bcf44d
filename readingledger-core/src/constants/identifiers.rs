//! Device Identifier Constants

/// Length of a hyphenated UUID, e.g. `0d2c5b8e-6f0a-4f7e-9c1d-2b3a4c5d6e7f`.
pub const CANONICAL_UUID_LEN: usize = 36;

//! Device identifier validation
//!
//! A device identifier is accepted only when it is a UUID version 4 (RFC 4122
//! variant) written in canonical form: lowercase, hyphenated, 36 characters.
//! Parsing alone is not enough. The parsed value is re-rendered and must match
//! the input byte for byte, which rejects uppercase, braces, `urn:uuid:`
//! prefixes, missing hyphens and surrounding whitespace.

use core::fmt;
use core::str::FromStr;

use serde_json::Value;
use uuid::{Uuid, Variant, Version};

use crate::{
    constants::CANONICAL_UUID_LEN,
    errors::{ReadingError, ReadingResult},
};

/// Canonical UUIDv4 device identifier
///
/// Only constructible through [`DeviceId::parse`] (or its `FromStr` /
/// JSON-value forms), so holding one proves the identifier was canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(Uuid);

impl DeviceId {
    /// Parse a candidate identifier, rejecting anything but canonical UUIDv4 text
    pub fn parse(candidate: &str) -> ReadingResult<Self> {
        if candidate.len() != CANONICAL_UUID_LEN {
            return Err(ReadingError::InvalidDeviceId);
        }

        let uuid = Uuid::parse_str(candidate).map_err(|_| ReadingError::InvalidDeviceId)?;

        if uuid.get_version() != Some(Version::Random) || uuid.get_variant() != Variant::RFC4122 {
            return Err(ReadingError::InvalidDeviceId);
        }

        let mut buffer = Uuid::encode_buffer();
        if &*uuid.hyphenated().encode_lower(&mut buffer) != candidate {
            return Err(ReadingError::InvalidDeviceId);
        }

        Ok(Self(uuid))
    }

    /// Parse an untyped JSON value; anything other than a string is invalid
    pub fn from_value(value: &Value) -> ReadingResult<Self> {
        match value {
            Value::String(candidate) => Self::parse(candidate),
            _ => Err(ReadingError::InvalidDeviceId),
        }
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for DeviceId {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Whether `candidate` is a canonical UUIDv4 string
pub fn is_valid_device_id(candidate: &str) -> bool {
    DeviceId::parse(candidate).is_ok()
}

/// Whether an untyped value is a canonical UUIDv4 string
pub fn is_valid_device_id_value(value: &Value) -> bool {
    DeviceId::from_value(value).is_ok()
}

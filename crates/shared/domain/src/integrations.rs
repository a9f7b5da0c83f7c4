use crate::constants::{ANALYTICS, MAPS};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

bitflags! {
    /// Represents a set of external service integrations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct IntegrationSet: u32 {
        const MAPS = 1 << 0;
        const ANALYTICS = 1 << 1;

        const ALL = Self::MAPS.bits() | Self::ANALYTICS.bits();
    }
}

impl From<&str> for IntegrationSet {
    fn from(s: &str) -> Self {
        match s {
            MAPS => Self::MAPS,
            ANALYTICS => Self::ANALYTICS,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for IntegrationSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for IntegrationSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for IntegrationSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

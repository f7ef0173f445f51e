//! Runtime selector for the built-in policies.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dw_core::DwError;

use crate::{AnyDirection, AnyDirectionAndLength, FourDirections, FourDirectionsBiased, StepPolicy};

/// Which built-in walker to create.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PolicyKind {
    FourDirections,
    FourDirectionsBiased,
    AnyDirection,
    AnyDirectionAndLength,
}

impl PolicyKind {
    /// Every built-in, in the order walkers are usually registered.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::FourDirections,
        PolicyKind::FourDirectionsBiased,
        PolicyKind::AnyDirection,
        PolicyKind::AnyDirectionAndLength,
    ];

    /// Construct a shareable policy instance.
    pub fn build(self) -> Arc<dyn StepPolicy> {
        match self {
            PolicyKind::FourDirections        => Arc::new(FourDirections),
            PolicyKind::FourDirectionsBiased  => Arc::new(FourDirectionsBiased),
            PolicyKind::AnyDirection          => Arc::new(AnyDirection),
            PolicyKind::AnyDirectionAndLength => Arc::new(AnyDirectionAndLength),
        }
    }

    /// The label walkers of this kind get when no display name is given.
    pub fn default_name(self) -> &'static str {
        match self {
            PolicyKind::FourDirections        => "4 Directions",
            PolicyKind::FourDirectionsBiased  => "4D North Biased",
            PolicyKind::AnyDirection          => "Any Direction",
            PolicyKind::AnyDirectionAndLength => "Any Direction and length",
        }
    }

    /// Short slug accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::FourDirections        => "four-directions",
            PolicyKind::FourDirectionsBiased  => "four-directions-biased",
            PolicyKind::AnyDirection          => "any-direction",
            PolicyKind::AnyDirectionAndLength => "any-direction-and-length",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = DwError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DwError::Parse(format!("unknown policy kind `{s}`")))
    }
}

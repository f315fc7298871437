use std::fmt;

use serde::{Deserialize, Serialize};

use crate::membership::{FeeError, MembershipTier};

/// The level a [`Member`] was created with. Only [`MembershipLevel::Tier`]
/// is a valid membership; a raw label never is, even if it spells a tier name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipLevel {
    Tier(MembershipTier),
    Raw(String),
}

impl MembershipLevel {
    pub fn tier(&self) -> Result<MembershipTier, FeeError> {
        match self {
            MembershipLevel::Tier(tier) => Ok(*tier),
            MembershipLevel::Raw(label) => Err(FeeError::InvalidMembership(label.clone())),
        }
    }
}

impl From<MembershipTier> for MembershipLevel {
    fn from(tier: MembershipTier) -> Self {
        Self::Tier(tier)
    }
}

impl From<&str> for MembershipLevel {
    fn from(label: &str) -> Self {
        Self::Raw(label.to_owned())
    }
}

impl From<String> for MembershipLevel {
    fn from(label: String) -> Self {
        Self::Raw(label)
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipLevel::Tier(tier) => write!(f, "{tier}"),
            MembershipLevel::Raw(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: String,
    membership_level: MembershipLevel,
}

impl Member {
    /// The membership level is stored as given; see [`Member::get_fee`].
    pub fn new<S, L>(name: S, membership_level: L) -> Self
    where
        S: Into<String>,
        L: Into<MembershipLevel>,
    {
        Self {
            name: name.into(),
            membership_level: membership_level.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn membership_level(&self) -> &MembershipLevel {
        &self.membership_level
    }

    pub fn get_fee(&self) -> Result<u32, FeeError> {
        let tier = self.membership_level.tier().map_err(|err| {
            tracing::debug!(
                name = %self.name,
                level = %self.membership_level,
                "invalid membership level"
            );
            err
        })?;

        Ok(tier.fee())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

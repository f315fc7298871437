use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("invalid membership level {0:?}")]
    InvalidMembership(String),
}

/// Membership tier. The discriminant is the tier's fee, so a tier can never be
/// paired with the wrong amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u32)]
pub enum MembershipTier {
    Basic = 100,
    Premium = 200,
    Gold = 500,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::Basic,
        MembershipTier::Premium,
        MembershipTier::Gold,
    ];

    pub fn fee(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            MembershipTier::Basic => "BASIC",
            MembershipTier::Premium => "PREMIUM",
            MembershipTier::Gold => "GOLD",
        }
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for MembershipTier {
    type Error = FeeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MembershipTier::ALL
            .into_iter()
            .find(|tier| tier.name() == value)
            .ok_or_else(|| FeeError::InvalidMembership(value.to_owned()))
    }
}

impl FromStr for MembershipTier {
    type Err = FeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MembershipTier::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{FeeError, MembershipTier};

    #[test]
    fn test_fee_schedule() {
        assert_eq!(100, MembershipTier::Basic.fee());
        assert_eq!(200, MembershipTier::Premium.fee());
        assert_eq!(500, MembershipTier::Gold.fee());
    }

    #[test]
    fn test_parse_names() -> Result<(), FeeError> {
        assert_eq!(MembershipTier::Gold, "GOLD".parse::<MembershipTier>()?);
        assert!("premium".parse::<MembershipTier>().is_err());

        for tier in MembershipTier::ALL {
            assert_eq!(tier, MembershipTier::try_from(tier.name())?);
        }

        Ok(())
    }

    #[test]
    fn test_reject_unknown_name() {
        assert_eq!(
            Err(FeeError::InvalidMembership("PLATINUM".to_owned())),
            "PLATINUM".parse::<MembershipTier>()
        );
    }

    #[test]
    fn test_serde_uses_names_not_fees() {
        let json = serde_json::to_string(&MembershipTier::Gold).unwrap();
        assert_eq!("\"GOLD\"", json);
    }
}

//! Registry kinds and their file conventions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two sibling registries share one grammar but differ in bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistryKind {
    /// Support commitments (SUPPORT.txt)
    #[default]
    Support,
    /// Maintainer list (MAINTAINERS.txt)
    Maintainers,
}

impl RegistryKind {
    /// Name of the registry file inside the registry directory
    pub fn file_name(&self) -> &'static str {
        match self {
            RegistryKind::Support => "SUPPORT.txt",
            RegistryKind::Maintainers => "MAINTAINERS.txt",
        }
    }

    /// Whether sections track their latest date and past entries raise expiry notices
    pub fn tracks_expiry(&self) -> bool {
        matches!(self, RegistryKind::Support)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Support => write!(f, "support"),
            RegistryKind::Maintainers => write!(f, "maintainers"),
        }
    }
}

impl FromStr for RegistryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "support" => Ok(RegistryKind::Support),
            "maintainers" => Ok(RegistryKind::Maintainers),
            _ => Err(format!(
                "Invalid registry kind: '{}'. Valid kinds are: support, maintainers",
                s
            )),
        }
    }
}

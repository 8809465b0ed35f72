use serde::{Deserialize, Serialize};

/// Logical category selecting which root directory a relative path is
/// resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    Collections,
    Sources,
    Outputs,
}

impl std::fmt::Display for FolderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collections => write!(f, "collections"),
            Self::Sources => write!(f, "sources"),
            Self::Outputs => write!(f, "outputs"),
        }
    }
}

impl std::str::FromStr for FolderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collections" => Ok(Self::Collections),
            "sources" => Ok(Self::Sources),
            "outputs" => Ok(Self::Outputs),
            _ => Err(format!("unknown folder type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_round_trips_with_from_str() {
        for folder in [
            FolderType::Collections,
            FolderType::Sources,
            FolderType::Outputs,
        ] {
            assert_eq!(FolderType::from_str(&folder.to_string()).unwrap(), folder);
        }
    }

    #[test]
    fn unknown_identifier_rejected() {
        assert!(FolderType::from_str("downloads").is_err());
    }
}

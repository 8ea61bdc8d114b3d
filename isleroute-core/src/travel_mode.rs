//! Travel modes understood by directions providers.
//!
//! # Examples
//! ```
//! use isleroute_core::TravelMode;
//!
//! assert_eq!(TravelMode::Walk.as_str(), "walk");
//! assert_eq!(TravelMode::Drive.profile(), "driving");
//! assert_eq!("walking".parse::<TravelMode>(), Ok(TravelMode::Walk));
//! ```

/// How a tour is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TravelMode {
    /// Travel by car.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "driving", alias = "car"))]
    Drive,
    /// Travel on foot.
    #[cfg_attr(feature = "serde", serde(alias = "walking", alias = "foot"))]
    Walk,
}

impl TravelMode {
    /// Return the mode as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Walk => "walk",
        }
    }

    /// Routing profile name used in directions requests.
    #[must_use]
    pub const fn profile(self) -> &'static str {
        match self {
            Self::Drive => "driving",
            Self::Walk => "walking",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "drive" | "driving" | "car" => Ok(Self::Drive),
            "walk" | "walking" | "foot" => Ok(Self::Walk),
            _ => Err(format!("unknown travel mode '{s}'")),
        }
    }
}

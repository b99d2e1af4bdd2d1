//! Typed configuration: weighting strategy, ranking method, VIKOR strategy weight.
//!
//! Identifiers are parsed from their wire tokens; anything else is
//! `UnsupportedMethod`.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{McdaError, McdaResult};

/// Define a selector enum with explicit wire tokens, `FromStr`, `Display` and `ALL`.
macro_rules! selector_enum {
    ($(#[$meta:meta])* $name:ident => { $($variant:ident = $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = McdaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let t = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == t)
                    .ok_or_else(|| McdaError::UnsupportedMethod(s.trim().to_string()))
            }
        }
    };
}

selector_enum!(
    /// How weights are derived when the caller does not supply them.
    WeightingStrategy => {
        Equal = "equal",
        Entropy = "entropy",
        Ahp = "ahp",
    }
);

selector_enum!(
    /// Which ranking method produces the preference order.
    RankingMethod => {
        Topsis = "topsis",
        Vikor = "vikor",
    }
);

/// VIKOR strategy weight `v` ∈ [0, 1]: 1 favours group utility (S), 0 individual regret (R).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VikorParams {
    v: f64,
}

impl VikorParams {
    pub const DEFAULT_V: f64 = 0.5;

    pub fn new(v: f64) -> McdaResult<Self> {
        if v.is_finite() && (0.0..=1.0).contains(&v) {
            Ok(Self { v })
        } else {
            Err(McdaError::InvalidParameter {
                name: "v",
                reason: format!("{v} is outside [0, 1]"),
            })
        }
    }

    pub fn v(self) -> f64 {
        self.v
    }
}

impl Default for VikorParams {
    fn default() -> Self {
        Self { v: Self::DEFAULT_V }
    }
}

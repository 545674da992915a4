use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Declares a strongly typed numeric identifier.
///
/// Identifiers parse from their decimal representation only; signs,
/// whitespace and empty strings are rejected so that a path segment such as
/// `"+5"` never resolves to the same entity as `"5"`.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(pub i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(ModelError::InvalidId {
                        kind: $kind,
                        raw: raw.to_string(),
                    });
                }
                raw.parse::<i64>().map(Self).map_err(|_| {
                    ModelError::InvalidId {
                        kind: $kind,
                        raw: raw.to_string(),
                    }
                })
            }
        }
    };
}

numeric_id!(
    /// Identifier of a category (conference, event or series).
    CategoryId,
    "category"
);
numeric_id!(
    /// Identifier of a speaker.
    SpeakerId,
    "speaker"
);
numeric_id!(
    /// Identifier of a video.
    VideoId,
    "video"
);
numeric_id!(
    /// Identifier of a related link attached to a video.
    RelatedUrlId,
    "related url"
);

use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::UserId;

/// Genre shortcut offered to the user
///
/// Each genre stands in for a representative reader of the ratings dataset:
/// selecting it requests that reader's recommendations. The table is static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fiction,
    SelfHelp,
    SciFi,
    Romance,
    Mystery,
}

impl Genre {
    /// All genres in display order
    pub const ALL: [Genre; 5] = [
        Genre::Fiction,
        Genre::SelfHelp,
        Genre::SciFi,
        Genre::Romance,
        Genre::Mystery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Genre::Fiction => "📖 Fiction",
            Genre::SelfHelp => "🧠 Self-Help",
            Genre::SciFi => "🚀 Sci-Fi",
            Genre::Romance => "💔 Romance",
            Genre::Mystery => "🔍 Mystery",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::SelfHelp => "self-help",
            Genre::SciFi => "sci-fi",
            Genre::Romance => "romance",
            Genre::Mystery => "mystery",
        }
    }

    /// User id sent to the recommendation service for this genre
    pub fn user_id(self) -> UserId {
        let raw = match self {
            Genre::Fiction => 276725,
            Genre::SelfHelp => 277427,
            Genre::SciFi => 276797,
            Genre::Romance => 276999,
            Genre::Mystery => 276747,
        };
        UserId::new_unchecked(raw)
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Genre {
    type Err = ();

    /// Accepts either the slug (case-insensitive) or the exact display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.slug().eq_ignore_ascii_case(s) || genre.label() == s)
            .ok_or(())
    }
}

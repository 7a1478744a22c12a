//! Projects and their collaborators.

use core::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Ticker;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

macro_rules! opaque_id {
    ($name:ident, $what:literal) => {
        #[doc = concat!("Opaque identifier of a ", $what, ".")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Draw a fresh 9-character base-36 identifier from the thread RNG.
            #[must_use]
            pub fn generate() -> Self {
                Self::generate_with(&mut rand::rng())
            }

            /// Draw a fresh identifier from `rng`.
            pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self(random_id(rng))
            }

            /// The identifier text.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

opaque_id!(ProjectId, "project");
opaque_id!(CollaboratorId, "collaborator");

/// A team member attached to one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
    /// Identifier, unique within the owning project.
    pub id: CollaboratorId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl Collaborator {
    /// First letter of every word of the display name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Payload for adding a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCollaborator {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl NewCollaborator {
    /// Build a payload from a name and an email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A named set of tickers under analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Identifier assigned on creation.
    pub id: ProjectId,
    /// Display name.
    pub name: String,
    /// Symbols under analysis, in entry order.
    pub tickers: Vec<Ticker>,
    /// Team members.
    pub collaborators: Vec<Collaborator>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Human-readable recency label, e.g. "2 hours ago".
    pub last_updated: String,
    /// Completion percentage in `[0, 100]`.
    pub progress: u8,
}

/// Payload for creating a project.
///
/// Tickers are raw user input; the store uppercases them and drops blanks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewProject {
    /// Display name.
    pub name: String,
    /// Raw symbols as typed.
    pub tickers: Vec<String>,
    /// Initial team members.
    pub collaborators: Vec<NewCollaborator>,
}

impl NewProject {
    /// Build a payload with no collaborators.
    pub fn new<I, S>(name: impl Into<String>, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            tickers: tickers.into_iter().map(Into::into).collect(),
            collaborators: Vec::new(),
        }
    }

    /// Add an initial collaborator.
    #[must_use]
    pub fn with_collaborator(mut self, collaborator: NewCollaborator) -> Self {
        self.collaborators.push(collaborator);
        self
    }
}

/// Replacement payload for an existing project; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New raw symbols.
    pub tickers: Option<Vec<String>>,
    /// New team roster.
    pub collaborators: Option<Vec<Collaborator>>,
    /// New recency label.
    pub last_updated: Option<String>,
    /// New completion percentage; clamped to 100.
    pub progress: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_ids_are_base36() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = ProjectId::generate_with(&mut rng);
            assert_eq!(id.as_str().len(), 9);
            assert!(
                id.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }

    #[test]
    fn initials_take_every_word() {
        let c = Collaborator {
            id: CollaboratorId::new("c1"),
            name: "John Q Smith".into(),
            email: "john@example.com".into(),
        };
        assert_eq!(c.initials(), "JQS");
    }
}

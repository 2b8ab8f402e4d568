//! Card domain types.
//!
//! Upstream cards are owned by the core banking system and never mutated
//! here. Card configurations are the locally persisted display overrides,
//! and aggregated cards are the merged, per-request response view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title applied when a card has no stored configuration.
pub const DEFAULT_TITLE: &str = "My favorite card";

/// Skin applied when a card has no stored configuration.
pub const DEFAULT_SKIN: &str = "default_skin";

/// Maximum length, in characters, of a stored title or skin.
pub const MAX_DISPLAY_FIELD_CHARS: usize = 256;

/// Stable card identifier shared by the upstream system and local storage.
///
/// # Examples
/// ```
/// use card_aggregator::domain::CardId;
///
/// let id: CardId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("uuid");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!("not-a-uuid".parse::<CardId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for CardId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// A card as reported by the core banking system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamCard {
    /// Card identifier.
    pub id: CardId,
    /// Owning account reference.
    pub account: String,
    /// Card number as displayed.
    pub number: String,
    /// Expiry month, passed through unvalidated.
    pub expiration_month: String,
    /// Expiry year, passed through unvalidated.
    pub expiration_year: String,
    /// ISO currency code.
    pub currency: String,
    /// Current balance.
    pub balance: f64,
}

/// Decode the raw upstream card list payload.
///
/// The same decoder runs on fresh upstream bodies and on cached bytes.
pub fn parse_card_list(bytes: &[u8]) -> Result<Vec<UpstreamCard>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Validation errors raised when constructing a [`CardConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardConfigValidationError {
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("skin must be at most {max} characters")]
    SkinTooLong { max: usize },
}

/// Display override stored for a single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Card the override applies to.
    pub id: CardId,
    /// Display title.
    pub title: String,
    /// Display skin identifier.
    pub skin: String,
}

impl CardConfig {
    /// Validate field lengths and construct a configuration.
    ///
    /// # Examples
    /// ```
    /// use card_aggregator::domain::{CardConfig, CardId};
    ///
    /// let config = CardConfig::new(CardId::random(), "Work", "dark").expect("valid");
    /// assert_eq!(config.title, "Work");
    /// assert!(CardConfig::new(CardId::random(), "x".repeat(257), "dark").is_err());
    /// ```
    pub fn new(
        id: CardId,
        title: impl Into<String>,
        skin: impl Into<String>,
    ) -> Result<Self, CardConfigValidationError> {
        let title = title.into();
        let skin = skin.into();
        if title.chars().count() > MAX_DISPLAY_FIELD_CHARS {
            return Err(CardConfigValidationError::TitleTooLong {
                max: MAX_DISPLAY_FIELD_CHARS,
            });
        }
        if skin.chars().count() > MAX_DISPLAY_FIELD_CHARS {
            return Err(CardConfigValidationError::SkinTooLong {
                max: MAX_DISPLAY_FIELD_CHARS,
            });
        }
        Ok(Self { id, title, skin })
    }
}

/// Upstream card merged with its display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedCard {
    pub id: CardId,
    pub number: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub currency: String,
    pub title: String,
    pub skin: String,
}

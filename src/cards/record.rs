//! Card records - the attributes of one card.
//!
//! `CardRecord` mirrors the upstream catalog schema. Every attribute is
//! optional because upstream data is sparse (lands have no power, most
//! cards have no loyalty). The attribute names used on the wire are also
//! the field names accepted by sorting and filtering.
//!
//! Records are immutable by convention: containers clone them in and hand
//! out clones or shared references, never mutable access.

use serde::{Deserialize, Serialize};

use super::key::CardKey;
use crate::error::{CardbaseError, Result};

/// One card's attributes.
///
/// ## Example
///
/// ```
/// use cardbase::cards::CardRecord;
///
/// let dragon = CardRecord::new("M15", "281")
///     .with_name("Shivan Dragon")
///     .with_rarity("Rare")
///     .with_cmc(6);
///
/// assert_eq!(dragon.key().unwrap().number, "281");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Converted mana cost.
    #[serde(default)]
    pub cmc: Option<i64>,
    /// Type line, e.g. "Creature — Dragon".
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Rules text.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    /// Collector number; may carry a letter suffix ("31a").
    #[serde(default)]
    pub number: Option<String>,
    /// May be non-numeric ("*").
    #[serde(default)]
    pub power: Option<String>,
    /// May be non-numeric ("*").
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<i64>,
    #[serde(default, rename = "multiverseid")]
    pub multiverse_id: Option<i64>,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub watermark: Option<String>,
    /// Not part of upstream card JSON; injected from the enclosing set.
    #[serde(default)]
    pub set_code: Option<String>,
}

impl CardRecord {
    /// Create a record carrying only its identity.
    #[must_use]
    pub fn new(set_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            set_code: Some(set_code.into()),
            number: Some(number.into()),
            ..Self::default()
        }
    }

    /// Identity of this card.
    ///
    /// Fails with `InvalidArgument` when either half of the identity is
    /// missing; such a record cannot be stored in a container.
    pub fn key(&self) -> Result<CardKey> {
        match (&self.set_code, &self.number) {
            (Some(set_code), Some(number)) => Ok(CardKey::new(set_code.clone(), number.clone())),
            (None, _) => Err(CardbaseError::invalid_argument("card has no set code")),
            (_, None) => Err(CardbaseError::invalid_argument("card has no number")),
        }
    }

    /// Check whether this record carries the given identity.
    #[must_use]
    pub fn has_key(&self, key: &CardKey) -> bool {
        self.set_code.as_deref() == Some(key.set_code.as_str())
            && self.number.as_deref() == Some(key.number.as_str())
    }

    /// Set the name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the type line (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Set the mana cost (builder pattern).
    #[must_use]
    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = Some(mana_cost.into());
        self
    }

    /// Set the converted mana cost (builder pattern).
    #[must_use]
    pub fn with_cmc(mut self, cmc: i64) -> Self {
        self.cmc = Some(cmc);
        self
    }

    /// Set power and toughness (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, power: impl Into<String>, toughness: impl Into<String>) -> Self {
        self.power = Some(power.into());
        self.toughness = Some(toughness.into());
        self
    }

    /// Set the loyalty (builder pattern).
    #[must_use]
    pub fn with_loyalty(mut self, loyalty: i64) -> Self {
        self.loyalty = Some(loyalty);
        self
    }

    /// Set the artist (builder pattern).
    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }
}

impl std::fmt::Display for CardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} #{})",
            self.name.as_deref().unwrap_or("<unnamed>"),
            self.set_code.as_deref().unwrap_or("?"),
            self.number.as_deref().unwrap_or("?"),
        )
    }
}

//! Upstream set data.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;
use crate::error::Result;

/// One entry of the upstream set list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInformation {
    pub name: String,
    pub code: String,
    pub release_date: String,
}

impl SetInformation {
    /// Create a set list entry.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            release_date: release_date.into(),
        }
    }
}

impl std::fmt::Display for SetInformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<12} : {}", self.code, self.name)
    }
}

/// Parse the upstream set list.
pub fn parse_set_list(json: &str) -> Result<Vec<SetInformation>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCardSet {
    name: String,
    code: String,
    release_date: String,
    cards: Vec<CardRecord>,
    #[serde(default)]
    border: Option<String>,
    #[serde(default, rename = "type")]
    set_type: Option<String>,
    #[serde(default)]
    block: Option<String>,
}

/// A full set: metadata plus every card, indexed by collector number.
#[derive(Clone, Debug)]
pub struct CardSet {
    pub info: SetInformation,
    pub border: Option<String>,
    pub set_type: Option<String>,
    pub block: Option<String>,
    cards: Vec<CardRecord>,
    by_number: FxHashMap<String, usize>,
}

impl CardSet {
    /// Build a set from metadata and cards.
    ///
    /// Every card's `set_code` is overwritten with the set's code. Cards
    /// without a number are kept but cannot be looked up; a repeated
    /// number resolves to its first card.
    #[must_use]
    pub fn new(info: SetInformation, cards: Vec<CardRecord>) -> Self {
        let mut set = Self {
            info,
            border: None,
            set_type: None,
            block: None,
            cards: Vec::with_capacity(cards.len()),
            by_number: FxHashMap::default(),
        };
        for mut card in cards {
            card.set_code = Some(set.info.code.clone());
            if let Some(number) = &card.number {
                set.by_number.entry(number.clone()).or_insert(set.cards.len());
            }
            set.cards.push(card);
        }
        set
    }

    /// Parse upstream set JSON.
    ///
    /// `name`, `code`, `releaseDate` and `cards` are required; their absence
    /// is a `MalformedStructure` error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCardSet = serde_json::from_str(json)?;
        let mut set = Self::new(
            SetInformation::new(raw.name, raw.code, raw.release_date),
            raw.cards,
        );
        set.border = raw.border;
        set.set_type = raw.set_type;
        set.block = raw.block;
        Ok(set)
    }

    /// The set's code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.info.code
    }

    /// Every card, in upstream order.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Look a card up by collector number (exact match).
    #[must_use]
    pub fn card_by_number(&self, number: &str) -> Option<&CardRecord> {
        self.by_number.get(number).map(|&index| &self.cards[index])
    }
}

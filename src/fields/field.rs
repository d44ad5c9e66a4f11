//! The field table.
//!
//! Every sortable/filterable attribute of `CardRecord` is a `CardField`,
//! and every field has a `FieldKind` that selects the comparison and
//! filter behaviour. Names are resolved through a table built once on
//! first use; lookups are case-sensitive and must match the wire names
//! exactly (`manaCost`, not `mana_cost`).

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::cards::CardRecord;
use crate::error::{CardbaseError, Result};

/// How a field is compared and filtered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain string, lexicographic order.
    Text,
    /// Integer, numeric order.
    Integer,
    /// String that usually starts with digits ("31a", "*").
    DirtyNumber,
    /// String ranked by a fixed rarity table.
    Rarity,
}

impl FieldKind {
    /// Whether GREATER_THAN / SMALLER_THAN make sense for this kind.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Integer | FieldKind::DirtyNumber)
    }
}

/// A named attribute of `CardRecord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardField {
    Name,
    Layout,
    ManaCost,
    Cmc,
    Type,
    Rarity,
    Text,
    Flavor,
    Artist,
    Number,
    Power,
    Toughness,
    Loyalty,
    MultiverseId,
    ImageName,
    Watermark,
    SetCode,
}

/// A borrowed field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(Option<i64>),
}

impl FieldValue<'_> {
    /// Whether the card has no value for this field.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Text(None) | FieldValue::Integer(None))
    }
}

static FIELD_TABLE: Lazy<FxHashMap<&'static str, CardField>> = Lazy::new(|| {
    CardField::ALL
        .iter()
        .map(|field| (field.name(), *field))
        .collect()
});

impl CardField {
    /// Every field, in declaration order.
    pub const ALL: [CardField; 17] = [
        CardField::Name,
        CardField::Layout,
        CardField::ManaCost,
        CardField::Cmc,
        CardField::Type,
        CardField::Rarity,
        CardField::Text,
        CardField::Flavor,
        CardField::Artist,
        CardField::Number,
        CardField::Power,
        CardField::Toughness,
        CardField::Loyalty,
        CardField::MultiverseId,
        CardField::ImageName,
        CardField::Watermark,
        CardField::SetCode,
    ];

    /// Resolve a field by its wire name.
    ///
    /// ```
    /// use cardbase::fields::{CardField, FieldKind};
    ///
    /// let field = CardField::from_name("number").unwrap();
    /// assert_eq!(field.kind(), FieldKind::DirtyNumber);
    /// assert!(CardField::from_name("Number").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        FIELD_TABLE
            .get(name)
            .copied()
            .ok_or_else(|| CardbaseError::unknown_field(name))
    }

    /// Wire name of this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardField::Name => "name",
            CardField::Layout => "layout",
            CardField::ManaCost => "manaCost",
            CardField::Cmc => "cmc",
            CardField::Type => "type",
            CardField::Rarity => "rarity",
            CardField::Text => "text",
            CardField::Flavor => "flavor",
            CardField::Artist => "artist",
            CardField::Number => "number",
            CardField::Power => "power",
            CardField::Toughness => "toughness",
            CardField::Loyalty => "loyalty",
            CardField::MultiverseId => "multiverseid",
            CardField::ImageName => "imageName",
            CardField::Watermark => "watermark",
            CardField::SetCode => "setCode",
        }
    }

    /// Comparison/filter family of this field.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            CardField::Cmc | CardField::Loyalty | CardField::MultiverseId => FieldKind::Integer,
            CardField::Number | CardField::Power | CardField::Toughness => FieldKind::DirtyNumber,
            CardField::Rarity => FieldKind::Rarity,
            _ => FieldKind::Text,
        }
    }

    /// Read this field from a card.
    #[must_use]
    pub fn value(self, card: &CardRecord) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            FieldValue::Text(value.as_deref())
        }

        match self {
            CardField::Name => text(&card.name),
            CardField::Layout => text(&card.layout),
            CardField::ManaCost => text(&card.mana_cost),
            CardField::Cmc => FieldValue::Integer(card.cmc),
            CardField::Type => text(&card.card_type),
            CardField::Rarity => text(&card.rarity),
            CardField::Text => text(&card.text),
            CardField::Flavor => text(&card.flavor),
            CardField::Artist => text(&card.artist),
            CardField::Number => text(&card.number),
            CardField::Power => text(&card.power),
            CardField::Toughness => text(&card.toughness),
            CardField::Loyalty => FieldValue::Integer(card.loyalty),
            CardField::MultiverseId => FieldValue::Integer(card.multiverse_id),
            CardField::ImageName => text(&card.image_name),
            CardField::Watermark => text(&card.watermark),
            CardField::SetCode => text(&card.set_code),
        }
    }
}

impl std::str::FromStr for CardField {
    type Err = CardbaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for CardField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_resolves_by_its_name() {
        for field in CardField::ALL {
            assert_eq!(CardField::from_name(field.name()).unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_and_miscased_names() {
        assert!(matches!(
            CardField::from_name("nonexistentField"),
            Err(CardbaseError::UnknownField { .. })
        ));
        assert!(CardField::from_name("ManaCost").is_err());
        assert!(CardField::from_name("mana_cost").is_err());
        assert!(CardField::from_name("").is_err());
    }

    #[test]
    fn test_kinds() {
        assert_eq!(CardField::Name.kind(), FieldKind::Text);
        assert_eq!(CardField::Cmc.kind(), FieldKind::Integer);
        assert_eq!(CardField::Power.kind(), FieldKind::DirtyNumber);
        assert_eq!(CardField::Rarity.kind(), FieldKind::Rarity);
        assert!(FieldKind::DirtyNumber.is_numeric());
        assert!(!FieldKind::Rarity.is_numeric());
    }

    #[test]
    fn test_value_reads_the_right_attribute() {
        let card = CardRecord::new("M15", "281")
            .with_name("Shivan Dragon")
            .with_cmc(6);

        assert_eq!(CardField::Name.value(&card), FieldValue::Text(Some("Shivan Dragon")));
        assert_eq!(CardField::Cmc.value(&card), FieldValue::Integer(Some(6)));
        assert_eq!(CardField::SetCode.value(&card), FieldValue::Text(Some("M15")));
        assert!(CardField::Loyalty.value(&card).is_null());
        assert!(CardField::Flavor.value(&card).is_null());
    }
}

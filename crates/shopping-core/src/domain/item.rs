//! Item Entity
//!
//! One line of a shopping list. Price, quantity and total are kept
//! consistent by applying edits through [`ItemEdit`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::entity::{Entity, ItemId};
use super::lenient::{self, coerce_amount, parse_amount};

/// Unit of measure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Unit {
    /// Pieces
    #[default]
    Piece,
    Kilogram,
    Liter,
    /// Packs
    Package,
    /// Label not known to this version, kept as it was stored
    Other(String),
}

impl Unit {
    /// Units offered by the unit selector, in display order
    pub const CHOICES: [Unit; 4] = [Unit::Piece, Unit::Kilogram, Unit::Liter, Unit::Package];

    /// Selector entries for an item currently measured in `current`: the
    /// standard choices, followed by `current` itself when it is not one of them
    pub fn options_for(current: &Unit) -> Vec<Unit> {
        let mut options = Self::CHOICES.to_vec();
        if matches!(current, Unit::Other(_)) {
            options.push(current.clone());
        }
        options
    }

    pub fn label(&self) -> &str {
        match self {
            Unit::Piece => "шт",
            Unit::Kilogram => "кг",
            Unit::Liter => "л",
            Unit::Package => "упак",
            Unit::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "шт" => Unit::Piece,
            "кг" => Unit::Kilogram,
            "л" => Unit::Liter,
            "упак" => Unit::Package,
            other => Unit::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::unit(deserializer)
    }
}

fn default_quantity() -> f64 {
    1.0
}

/// A shopping list line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within its list; 0 means the source data had no usable id
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: ItemId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price_per_unit: f64,
    #[serde(default = "default_quantity", deserialize_with = "lenient::amount")]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_price: f64,
}

impl Item {
    /// A blank line: no name, one piece at zero price
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            price_per_unit: 0.0,
            quantity: 1.0,
            unit: Unit::default(),
            total_price: 0.0,
        }
    }

    /// Apply a single field edit and re-derive the dependent amount.
    ///
    /// Price or quantity edits recompute the total. A total edit back-derives
    /// the unit price, but only while the quantity is positive; at quantity 0
    /// the price stays as it was.
    pub fn apply(&mut self, edit: ItemEdit) {
        match edit {
            ItemEdit::Name(name) => self.name = name,
            ItemEdit::Unit(unit) => self.unit = unit,
            ItemEdit::Price(price) => {
                self.price_per_unit = coerce_amount(price);
                self.total_price = self.price_per_unit * self.quantity;
            }
            ItemEdit::Quantity(quantity) => {
                self.quantity = coerce_amount(quantity);
                self.total_price = self.price_per_unit * self.quantity;
            }
            ItemEdit::Total(total) => {
                self.total_price = coerce_amount(total);
                if self.quantity > 0.0 {
                    self.price_per_unit = self.total_price / self.quantity;
                }
            }
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Which input of an item row was edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Price,
    Quantity,
    Unit,
    Total,
}

/// A tagged edit of one item field.
///
/// The variant, not the set of changed keys, decides which amount is derived.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Name(String),
    Price(f64),
    Quantity(f64),
    Unit(Unit),
    Total(f64),
}

impl ItemEdit {
    /// Build an edit from raw input text. Numeric fields never fail:
    /// unparseable text becomes 0.
    pub fn parse(field: ItemField, raw: &str) -> Self {
        match field {
            ItemField::Name => ItemEdit::Name(raw.to_string()),
            ItemField::Unit => ItemEdit::Unit(Unit::from_label(raw)),
            ItemField::Price => ItemEdit::Price(parse_amount(raw)),
            ItemField::Quantity => ItemEdit::Quantity(parse_amount(raw)),
            ItemField::Total => ItemEdit::Total(parse_amount(raw)),
        }
    }
}

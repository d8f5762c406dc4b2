use crate::utils::error::{GroceryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A closed set of symbols describing one dimension of an [`Item`].
///
/// Symbols are the upper-case variant names (`WEEKLY`, `RUNNING_LOW`, ...).
/// Parsing upper-cases its input and must hit one of them exactly.
pub trait Facet: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Column name in the tabular format, also used in error messages.
    const COLUMN: &'static str;

    fn all() -> &'static [Self];

    fn symbol(&self) -> &'static str;

    fn parse(text: &str) -> Result<Self> {
        let wanted = text.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|value| value.symbol() == wanted)
            .ok_or_else(|| GroceryError::InvalidCategory {
                facet: Self::COLUMN,
                value: text.to_string(),
                row: None,
            })
    }
}

/// How often the item gets bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Weekly,
    Monthly,
    LessOften,
    #[default]
    NotNeeded,
}

impl Facet for Priority {
    const COLUMN: &'static str = "priority";

    fn all() -> &'static [Self] {
        &[
            Priority::Weekly,
            Priority::Monthly,
            Priority::LessOften,
            Priority::NotNeeded,
        ]
    }

    fn symbol(&self) -> &'static str {
        match self {
            Priority::Weekly => "WEEKLY",
            Priority::Monthly => "MONTHLY",
            Priority::LessOften => "LESS_OFTEN",
            Priority::NotNeeded => "NOT_NEEDED",
        }
    }
}

/// How much of the item is at home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Supply {
    #[default]
    Needed,
    RunningLow,
    Supplied,
    Extra,
}

impl Facet for Supply {
    const COLUMN: &'static str = "supply";

    fn all() -> &'static [Self] {
        &[
            Supply::Needed,
            Supply::RunningLow,
            Supply::Supplied,
            Supply::Extra,
        ]
    }

    fn symbol(&self) -> &'static str {
        match self {
            Supply::Needed => "NEEDED",
            Supply::RunningLow => "RUNNING_LOW",
            Supply::Supplied => "SUPPLIED",
            Supply::Extra => "EXTRA",
        }
    }
}

/// Where in the store the item is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrocerArea {
    #[default]
    Aisle,
    Dairy,
    Deli,
    Meat,
    Frozen,
    Produce,
}

impl Facet for GrocerArea {
    const COLUMN: &'static str = "grocer_area";

    fn all() -> &'static [Self] {
        &[
            GrocerArea::Aisle,
            GrocerArea::Dairy,
            GrocerArea::Deli,
            GrocerArea::Meat,
            GrocerArea::Frozen,
            GrocerArea::Produce,
        ]
    }

    fn symbol(&self) -> &'static str {
        match self {
            GrocerArea::Aisle => "AISLE",
            GrocerArea::Dairy => "DAIRY",
            GrocerArea::Deli => "DELI",
            GrocerArea::Meat => "MEAT",
            GrocerArea::Frozen => "FROZEN",
            GrocerArea::Produce => "PRODUCE",
        }
    }
}

/// Where the item is put away at home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenArea {
    Freezer,
    Fridge,
    #[default]
    Pantry,
    Snack,
    Baking,
    Spice,
}

impl Facet for KitchenArea {
    const COLUMN: &'static str = "kitchen_area";

    fn all() -> &'static [Self] {
        &[
            KitchenArea::Freezer,
            KitchenArea::Fridge,
            KitchenArea::Pantry,
            KitchenArea::Snack,
            KitchenArea::Baking,
            KitchenArea::Spice,
        ]
    }

    fn symbol(&self) -> &'static str {
        match self {
            KitchenArea::Freezer => "FREEZER",
            KitchenArea::Fridge => "FRIDGE",
            KitchenArea::Pantry => "PANTRY",
            KitchenArea::Snack => "SNACK",
            KitchenArea::Baking => "BAKING",
            KitchenArea::Spice => "SPICE",
        }
    }
}

macro_rules! impl_facet_display_from_str {
    ($($facet:ty),*) => {
        $(
            impl fmt::Display for $facet {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }

            impl std::str::FromStr for $facet {
                type Err = GroceryError;

                fn from_str(s: &str) -> Result<Self> {
                    <$facet as Facet>::parse(s)
                }
            }
        )*
    };
}

impl_facet_display_from_str!(Priority, Supply, GrocerArea, KitchenArea);

/// One grocery entry.
///
/// `PartialEq` compares every field. Whether two entries are the same
/// logical item is decided by [`same_identity`], which looks at `name` only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    pub priority: Priority,
    pub supply: Supply,
    pub grocer_area: GrocerArea,
    pub kitchen_area: KitchenArea,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_supply(mut self, supply: Supply) -> Self {
        self.supply = supply;
        self
    }

    pub fn with_grocer_area(mut self, grocer_area: GrocerArea) -> Self {
        self.grocer_area = grocer_area;
        self
    }

    pub fn with_kitchen_area(mut self, kitchen_area: KitchenArea) -> Self {
        self.kitchen_area = kitchen_area;
        self
    }

    /// Identity key used by list operations.
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn same_identity(&self, other: &Item) -> bool {
        same_identity(self, other)
    }
}

/// Two items are the same logical entry iff their names match exactly.
pub fn same_identity(a: &Item, b: &Item) -> bool {
    a.key() == b.key()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = Item::default();
        assert_eq!(item.name, "");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.priority, Priority::NotNeeded);
        assert_eq!(item.supply, Supply::Needed);
        assert_eq!(item.grocer_area, GrocerArea::Aisle);
        assert_eq!(item.kitchen_area, KitchenArea::Pantry);
    }

    #[test]
    fn test_same_identity_ignores_other_fields() {
        let a = Item::new("Milk").with_price(3.5).with_priority(Priority::Weekly);
        let b = Item::new("Milk")
            .with_price(9.0)
            .with_supply(Supply::Extra)
            .with_kitchen_area(KitchenArea::Fridge);

        assert!(same_identity(&a, &b));
        assert!(a.same_identity(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_identity_is_case_sensitive() {
        assert!(!same_identity(&Item::new("Milk"), &Item::new("milk")));
    }

    #[test]
    fn test_facet_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("weekly").unwrap(), Priority::Weekly);
        assert_eq!(Priority::parse("Less_Often").unwrap(), Priority::LessOften);
        assert_eq!(Supply::parse("running_low").unwrap(), Supply::RunningLow);
        assert_eq!(GrocerArea::parse("PRODUCE").unwrap(), GrocerArea::Produce);
        assert_eq!("fridge".parse::<KitchenArea>().unwrap(), KitchenArea::Fridge);
    }

    #[test]
    fn test_facet_parse_rejects_unknown_symbol() {
        let err = Priority::parse("urgent").unwrap_err();
        assert!(matches!(
            err,
            GroceryError::InvalidCategory { facet: "priority", ref value, row: None } if value == "urgent"
        ));

        assert!(Supply::parse("").is_err());
        assert!(KitchenArea::parse(" pantry").is_err());
    }

    #[test]
    fn test_every_symbol_parses_back() {
        for value in Priority::all() {
            assert_eq!(Priority::parse(&value.symbol().to_lowercase()).unwrap(), *value);
        }
        for value in Supply::all() {
            assert_eq!(Supply::parse(&value.symbol().to_lowercase()).unwrap(), *value);
        }
        for value in GrocerArea::all() {
            assert_eq!(GrocerArea::parse(&value.symbol().to_lowercase()).unwrap(), *value);
        }
        for value in KitchenArea::all() {
            assert_eq!(KitchenArea::parse(&value.symbol().to_lowercase()).unwrap(), *value);
        }
    }
}

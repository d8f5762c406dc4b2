pub mod filter;
pub mod grocery_list;
pub mod serialization;

pub use crate::domain::model::{same_identity, Facet, GrocerArea, Item, KitchenArea, Priority, Supply};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

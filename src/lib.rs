pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;
pub use config::toml_config::{StorageConfig, TomlConfig};
pub use crate::core::filter::FacetFilter;
pub use crate::core::grocery_list::GroceryList;
pub use domain::model::{same_identity, Facet, GrocerArea, Item, KitchenArea, Priority, Supply};
pub use utils::error::{GroceryError, Result};

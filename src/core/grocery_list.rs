use crate::core::filter::FacetFilter;
use crate::core::serialization;
use crate::domain::model::{same_identity, GrocerArea, Item, KitchenArea, Priority, Supply};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::collections::HashSet;

/// The authoritative, ordered collection of items for a session.
///
/// Views handed out by the filter methods are snapshots; the only way to
/// change the list is `add`, `delete` and `update`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroceryList {
    items: Vec<Item>,
    outpath: String,
}

impl GroceryList {
    pub fn new(items: Vec<Item>, outpath: impl Into<String>) -> Self {
        Self {
            items,
            outpath: outpath.into(),
        }
    }

    /// Reads the configured database file and targets the configured export
    /// file. Any bad row fails the whole load.
    pub fn load<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<Self> {
        tracing::debug!("Loading grocery list from {}", config.database_file());
        let data = storage.read_file(config.database_file())?;
        let items = serialization::deserialize(data.as_slice())?;
        tracing::info!(
            "Loaded {} items from {}",
            items.len(),
            config.database_file()
        );
        Ok(Self::new(items, config.export_file()))
    }

    /// Writes the current items to the output destination.
    pub fn export<S: Storage>(&self, storage: &S) -> Result<()> {
        let data = serialization::to_bytes(&self.items)?;
        storage.write_file(&self.outpath, &data)?;
        tracing::info!("Exported {} items to {}", self.items.len(), self.outpath);
        Ok(())
    }

    /// Writes the current items back to the configured database file so the
    /// next load sees them.
    pub fn save<S: Storage, C: ConfigProvider>(&self, storage: &S, config: &C) -> Result<()> {
        let data = serialization::to_bytes(&self.items)?;
        storage.write_file(config.database_file(), &data)?;
        tracing::info!(
            "Saved {} items to {}",
            self.items.len(),
            config.database_file()
        );
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn outpath(&self) -> &str {
        &self.outpath
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Appends without checking for an existing entry of the same name.
    pub fn add(&mut self, item: Item) {
        tracing::debug!("Adding item: {}", item.name);
        self.items.push(item);
    }

    /// Removes every entry sharing `item`'s name. Absent names are a no-op.
    pub fn delete(&mut self, item: &Item) {
        let before = self.items.len();
        self.items.retain(|existing| !same_identity(existing, item));
        let removed = before - self.items.len();
        if removed == 0 {
            tracing::debug!("Delete of '{}' matched nothing", item.name);
        } else {
            tracing::debug!("Deleted {} entries named '{}'", removed, item.name);
        }
    }

    /// Replaces any entries sharing the name and moves the item to the end.
    pub fn update(&mut self, item: Item) {
        self.delete(&item);
        self.add(item);
    }

    /// Removes every entry named like `old`, then appends `item`. Renames an
    /// entry when the names differ.
    pub fn replace(&mut self, old: &Item, item: Item) {
        self.delete(old);
        self.add(item);
    }

    pub fn filter_priorities(&self, items: &[Item], allowed: &HashSet<Priority>) -> Vec<Item> {
        crate::core::filter::filter_priorities(items, allowed)
    }

    pub fn filter_supplies(&self, items: &[Item], allowed: &HashSet<Supply>) -> Vec<Item> {
        crate::core::filter::filter_supplies(items, allowed)
    }

    pub fn filter_kitchen(&self, items: &[Item], allowed: &HashSet<KitchenArea>) -> Vec<Item> {
        crate::core::filter::filter_kitchen(items, allowed)
    }

    pub fn filter_grocer(&self, items: &[Item], allowed: &HashSet<GrocerArea>) -> Vec<Item> {
        crate::core::filter::filter_grocer(items, allowed)
    }

    /// Display subset: facet filters over the whole list, then name search.
    pub fn view(&self, filter: &FacetFilter, search_term: &str) -> Vec<Item> {
        let filtered = filter.apply(&self.items);
        crate::core::filter::search(&filtered, search_term)
    }
}

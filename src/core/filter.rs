//! Facet filtering over item sequences.
//!
//! Each `filter_*` keeps the items whose facet is in the allowed set, in
//! source order. An empty allowed set keeps nothing.

use crate::domain::model::{Facet, GrocerArea, Item, KitchenArea, Priority, Supply};
use std::collections::HashSet;

fn filter_by<F, A>(items: &[Item], allowed: &HashSet<F>, facet_of: A) -> Vec<Item>
where
    F: Facet,
    A: Fn(&Item) -> F,
{
    items
        .iter()
        .filter(|item| allowed.contains(&facet_of(item)))
        .cloned()
        .collect()
}

pub fn filter_priorities(items: &[Item], allowed: &HashSet<Priority>) -> Vec<Item> {
    filter_by(items, allowed, |item| item.priority)
}

pub fn filter_supplies(items: &[Item], allowed: &HashSet<Supply>) -> Vec<Item> {
    filter_by(items, allowed, |item| item.supply)
}

pub fn filter_kitchen(items: &[Item], allowed: &HashSet<KitchenArea>) -> Vec<Item> {
    filter_by(items, allowed, |item| item.kitchen_area)
}

pub fn filter_grocer(items: &[Item], allowed: &HashSet<GrocerArea>) -> Vec<Item> {
    filter_by(items, allowed, |item| item.grocer_area)
}

/// Keeps items whose name contains `term`. An empty term keeps everything.
pub fn search(items: &[Item], term: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.name.contains(term))
        .cloned()
        .collect()
}

/// Allowed values for all four facets at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    pub priorities: HashSet<Priority>,
    pub supplies: HashSet<Supply>,
    pub kitchen_areas: HashSet<KitchenArea>,
    pub grocer_areas: HashSet<GrocerArea>,
}

impl Default for FacetFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FacetFilter {
    /// Every value of every facet allowed; nothing is filtered out.
    pub fn all() -> Self {
        Self {
            priorities: Priority::all().iter().copied().collect(),
            supplies: Supply::all().iter().copied().collect(),
            kitchen_areas: KitchenArea::all().iter().copied().collect(),
            grocer_areas: GrocerArea::all().iter().copied().collect(),
        }
    }

    pub fn none() -> Self {
        Self {
            priorities: HashSet::new(),
            supplies: HashSet::new(),
            kitchen_areas: HashSet::new(),
            grocer_areas: HashSet::new(),
        }
    }

    pub fn with_priorities(mut self, allowed: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = allowed.into_iter().collect();
        self
    }

    pub fn with_supplies(mut self, allowed: impl IntoIterator<Item = Supply>) -> Self {
        self.supplies = allowed.into_iter().collect();
        self
    }

    pub fn with_kitchen_areas(mut self, allowed: impl IntoIterator<Item = KitchenArea>) -> Self {
        self.kitchen_areas = allowed.into_iter().collect();
        self
    }

    pub fn with_grocer_areas(mut self, allowed: impl IntoIterator<Item = GrocerArea>) -> Self {
        self.grocer_areas = allowed.into_iter().collect();
        self
    }

    pub fn toggle_priority(&mut self, value: Priority, allowed: bool) {
        toggle(&mut self.priorities, value, allowed);
    }

    pub fn toggle_supply(&mut self, value: Supply, allowed: bool) {
        toggle(&mut self.supplies, value, allowed);
    }

    pub fn toggle_kitchen_area(&mut self, value: KitchenArea, allowed: bool) {
        toggle(&mut self.kitchen_areas, value, allowed);
    }

    pub fn toggle_grocer_area(&mut self, value: GrocerArea, allowed: bool) {
        toggle(&mut self.grocer_areas, value, allowed);
    }

    /// Narrows `items` facet by facet: priority, supply, kitchen area, then
    /// grocer area.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        let narrowed = filter_priorities(items, &self.priorities);
        let narrowed = filter_supplies(&narrowed, &self.supplies);
        let narrowed = filter_kitchen(&narrowed, &self.kitchen_areas);
        let narrowed = filter_grocer(&narrowed, &self.grocer_areas);
        tracing::debug!("Filtered {} items down to {}", items.len(), narrowed.len());
        narrowed
    }

    /// Single-item form of [`FacetFilter::apply`].
    pub fn matches(&self, item: &Item) -> bool {
        self.priorities.contains(&item.priority)
            && self.supplies.contains(&item.supply)
            && self.kitchen_areas.contains(&item.kitchen_area)
            && self.grocer_areas.contains(&item.grocer_area)
    }
}

fn toggle<F: Facet>(set: &mut HashSet<F>, value: F, allowed: bool) {
    if allowed {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

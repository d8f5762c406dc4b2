//! Tabular (CSV) import and export of grocery items.
//!
//! The header is `name,price,priority,supply,grocer_area,kitchen_area`.
//! Facets are written as lower-case symbols and read case-insensitively.
//! Names are lower-cased on export.
//!
//! Loading is all-or-nothing: the first bad row fails the whole load.

use crate::domain::model::{Facet, GrocerArea, Item, KitchenArea, Priority, Supply};
use crate::utils::error::{GroceryError, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

pub const COLUMNS: [&str; 6] = [
    "name",
    "price",
    "priority",
    "supply",
    "grocer_area",
    "kitchen_area",
];

/// Position of each required column in the source header.
struct ColumnIndex {
    positions: [usize; 6],
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut positions = [0; 6];
        for (slot, column) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|header| header == column)
                .ok_or(GroceryError::MissingColumn { column, row: None })?;
        }
        Ok(Self { positions })
    }

    fn field<'r>(&self, record: &'r csv::StringRecord, column: usize) -> Result<&'r str> {
        record
            .get(self.positions[column])
            .ok_or(GroceryError::MissingColumn {
                column: COLUMNS[column],
                row: None,
            })
    }

    fn item_from_record(&self, record: &csv::StringRecord) -> Result<Item> {
        let price_text = self.field(record, 1)?;
        let price = price_text
            .trim()
            .parse::<f64>()
            .map_err(|_| GroceryError::InvalidNumber {
                value: price_text.to_string(),
                row: None,
            })?;

        Ok(Item {
            name: self.field(record, 0)?.to_string(),
            price,
            priority: Priority::parse(self.field(record, 2)?)?,
            supply: Supply::parse(self.field(record, 3)?)?,
            grocer_area: GrocerArea::parse(self.field(record, 4)?)?,
            kitchen_area: KitchenArea::parse(self.field(record, 5)?)?,
        })
    }
}

/// Parses every row of `source` into an item, keeping row order.
pub fn deserialize<R: Read>(source: R) -> Result<Vec<Item>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut items = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let row = index as u64 + 1;
        let record = record?;
        let item = columns
            .item_from_record(&record)
            .map_err(|e| e.at_row(row))?;
        tracing::debug!("Parsed row {}: {}", row, item.name);
        items.push(item);
    }

    Ok(items)
}

/// Writes the header and one row per item to `destination`.
pub fn serialize<W: Write>(items: &[Item], destination: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(destination);
    writer.write_record(COLUMNS)?;

    for item in items {
        writer.write_record([
            item.name.to_lowercase(),
            format_price(item.price),
            symbol_field(&item.priority),
            symbol_field(&item.supply),
            symbol_field(&item.grocer_area),
            symbol_field(&item.kitchen_area),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn items_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    tracing::debug!("Reading grocery items from {}", path.display());
    let file = File::open(path)?;
    let items = deserialize(file)?;
    tracing::info!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

pub fn items_to_csv<P: AsRef<Path>>(items: &[Item], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    serialize(items, file)?;
    tracing::info!("Exported {} items to {}", items.len(), path.display());
    Ok(())
}

pub fn to_bytes(items: &[Item]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    serialize(items, &mut buffer)?;
    Ok(buffer)
}

fn symbol_field<F: Facet>(value: &F) -> String {
    value.symbol().to_lowercase()
}

// Debug formatting keeps a trailing ".0" on whole prices and round-trips exactly.
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}

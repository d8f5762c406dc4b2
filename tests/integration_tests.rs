use anyhow::Result;
use grocery_list::core::serialization::{items_from_csv, items_to_csv};
use grocery_list::domain::ports::Storage;
use grocery_list::{
    GrocerArea, GroceryError, GroceryList, Item, KitchenArea, LocalStorage, Priority,
    StorageConfig, Supply,
};
use std::cell::RefCell;
use std::collections::HashMap;
use tempfile::TempDir;

const DATABASE: &str = "\
name,price,priority,supply,grocer_area,kitchen_area
milk,3.5,weekly,needed,dairy,fridge
flour,4.25,monthly,running_low,aisle,baking
peas,1.99,weekly,supplied,frozen,freezer
";

struct MemoryStorage {
    files: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    fn with_file(path: &str, content: &str) -> Self {
        let mut files = HashMap::new();
        files.insert(path.to_string(), content.as_bytes().to_vec());
        Self {
            files: RefCell::new(files),
        }
    }

    fn get_file(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }
}

impl Storage for MemoryStorage {
    fn read_file(&self, path: &str) -> grocery_list::Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            GroceryError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", path),
            ))
        })
    }

    fn write_file(&self, path: &str, data: &[u8]) -> grocery_list::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_string(), data.to_vec());
        Ok(())
    }
}

fn settings(data_dir: &str) -> StorageConfig {
    StorageConfig {
        data_dir: data_dir.to_string(),
        database_file: "grocery_list.csv".to_string(),
        export_file: "test_list.csv".to_string(),
    }
}

#[test]
fn test_load_edit_export_with_memory_storage() -> Result<()> {
    let storage = MemoryStorage::with_file("grocery_list.csv", DATABASE);
    let mut list = GroceryList::load(&storage, &settings("."))?;

    assert_eq!(list.len(), 3);
    assert_eq!(list.outpath(), "test_list.csv");

    list.update(
        Item::new("Milk")
            .with_price(3.75)
            .with_priority(Priority::Weekly)
            .with_grocer_area(GrocerArea::Dairy)
            .with_kitchen_area(KitchenArea::Fridge),
    );
    list.delete(&Item::new("peas"));
    list.export(&storage)?;

    // "Milk" and "milk" are different names, so the original row survives.
    let exported = storage.get_file("test_list.csv").expect("export written");
    assert_eq!(
        exported,
        "name,price,priority,supply,grocer_area,kitchen_area\n\
         milk,3.5,weekly,needed,dairy,fridge\n\
         flour,4.25,monthly,running_low,aisle,baking\n\
         milk,3.75,weekly,needed,dairy,fridge\n"
    );

    // The database itself is never rewritten.
    assert_eq!(storage.get_file("grocery_list.csv").as_deref(), Some(DATABASE));
    Ok(())
}

#[test]
fn test_round_trip_through_local_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_string_lossy().into_owned();
    let storage = LocalStorage::new(data_dir.clone());

    let original = GroceryList::new(
        vec![
            Item::new("Greek Yogurt")
                .with_price(4.0)
                .with_priority(Priority::LessOften)
                .with_supply(Supply::Extra)
                .with_grocer_area(GrocerArea::Dairy)
                .with_kitchen_area(KitchenArea::Fridge),
            Item::new("Paprika")
                .with_price(2.5)
                .with_kitchen_area(KitchenArea::Spice),
        ],
        "grocery_list.csv",
    );
    original.export(&storage)?;

    let reloaded = GroceryList::load(&storage, &settings(&data_dir))?;
    assert_eq!(reloaded.len(), original.len());

    for (before, after) in original.items().iter().zip(reloaded.items()) {
        assert_eq!(after.name, before.name.to_lowercase());
        assert_eq!(after.price, before.price);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.supply, before.supply);
        assert_eq!(after.grocer_area, before.grocer_area);
        assert_eq!(after.kitchen_area, before.kitchen_area);
    }
    Ok(())
}

#[test]
fn test_saved_edits_carry_over_to_next_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_string_lossy().into_owned();
    let storage = LocalStorage::new(data_dir.clone());
    let config = settings(&data_dir);
    storage.write_file(
        "grocery_list.csv",
        b"name,price,priority,supply,grocer_area,kitchen_area\nmilk,3.5,weekly,needed,dairy,fridge\n",
    )?;

    let mut list = GroceryList::load(&storage, &config)?;
    list.add(Item::new("eggs"));
    list.save(&storage, &config)?;

    let mut list = GroceryList::load(&storage, &config)?;
    list.add(Item::new("bread"));
    list.save(&storage, &config)?;

    let mut list = GroceryList::load(&storage, &config)?;
    list.replace(&Item::new("milk"), Item::new("oat milk").with_price(2.5));
    list.save(&storage, &config)?;

    let reloaded = GroceryList::load(&storage, &config)?;
    let names: Vec<&str> = reloaded.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["eggs", "bread", "oat milk"]);
    assert!(!storage.resolve("test_list.csv").exists());
    Ok(())
}

#[test]
fn test_csv_file_helpers() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("list.csv");

    let items = vec![Item::new("Eggs").with_price(5.0).with_priority(Priority::Weekly)];
    items_to_csv(&items, &path)?;

    let loaded = items_from_csv(&path)?;
    assert_eq!(loaded.len(), 1);
    assert!(loaded[0].same_identity(&Item::new("eggs")));
    assert_eq!(loaded[0].priority, Priority::Weekly);
    Ok(())
}

#[test]
fn test_missing_database_is_io_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().to_string_lossy().into_owned();
    let storage = LocalStorage::new(data_dir.clone());

    let err = GroceryList::load(&storage, &settings(&data_dir)).unwrap_err();
    assert!(matches!(err, GroceryError::IoError(_)));

    let err = items_from_csv(temp_dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, GroceryError::IoError(_)));
    Ok(())
}

#[test]
fn test_bad_row_fails_whole_load() -> Result<()> {
    let content = format!("{}eggs,2.0,urgent,needed,dairy,fridge\n", DATABASE);
    let storage = MemoryStorage::with_file("grocery_list.csv", &content);

    let err = GroceryList::load(&storage, &settings(".")).unwrap_err();
    assert!(matches!(
        err,
        GroceryError::InvalidCategory { facet: "priority", row: Some(4), .. }
    ));
    Ok(())
}

#[test]
fn test_unwritable_export_is_io_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory")?;

    let err = items_to_csv(&[Item::new("milk")], blocker.join("list.csv")).unwrap_err();
    assert!(matches!(err, GroceryError::IoError(_)));
    Ok(())
}

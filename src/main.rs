use clap::Parser;
use grocery_list::config::{CliConfig, Command};
use grocery_list::utils::error::ErrorSeverity;
use grocery_list::utils::{logger, validation::Validate};
use grocery_list::{Facet, GroceryError, GroceryList, Item, LocalStorage, Result, StorageConfig, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    let (settings, log_level) = match resolve_settings(&config) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_logger(config.verbose, log_level.as_deref());
    tracing::debug!("Storage settings: {:?}", settings);

    if let Err(e) = run(config.command, &settings) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn resolve_settings(config: &CliConfig) -> Result<(StorageConfig, Option<String>)> {
    match &config.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            let level = toml_config.log_level().map(str::to_string);
            Ok((toml_config.storage, level))
        }
        None => {
            let storage = config.storage();
            storage.validate()?;
            Ok((storage, None))
        }
    }
}

fn run(command: Command, settings: &StorageConfig) -> Result<()> {
    let storage = LocalStorage::new(settings.data_dir.clone());
    let mut list = GroceryList::load(&storage, settings)?;

    match command {
        Command::List {
            filters,
            search,
            json,
        } => {
            let view = list.view(&filters.to_filter(), &search);
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_items(&view);
            }
        }
        Command::Add(args) => {
            list.add(Item::from(args));
            list.save(&storage, settings)?;
        }
        Command::Update { item, from } => {
            let item = Item::from(item);
            match from {
                Some(old_name) => list.replace(&Item::new(old_name), item),
                None => list.update(item),
            }
            list.save(&storage, settings)?;
        }
        Command::Delete { name } => {
            list.delete(&Item::new(name));
            list.save(&storage, settings)?;
        }
        Command::Export => {
            list.export(&storage)?;
            println!(
                "📁 Exported {} items to {}",
                list.len(),
                storage.resolve(list.outpath()).display()
            );
        }
    }

    Ok(())
}

fn print_items(items: &[Item]) {
    for item in items {
        println!(
            "{:<24} {:>8.2}  {:<10} {:<11} {:<8} {}",
            item.name,
            item.price,
            item.priority.symbol(),
            item.supply.symbol(),
            item.grocer_area.symbol(),
            item.kitchen_area.symbol()
        );
    }
    println!("{} items", items.len());
}

fn exit_code(error: &GroceryError) -> i32 {
    match error.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

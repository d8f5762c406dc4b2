pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_args::{CliConfig, Command, FilterArgs, ItemArgs};

#[cfg(feature = "cli")]
mod cli_args {
    use super::toml_config::{
        StorageConfig, DEFAULT_DATABASE_FILE, DEFAULT_DATA_DIR, DEFAULT_EXPORT_FILE,
    };
    use crate::core::filter::FacetFilter;
    use crate::core::{ConfigProvider, GrocerArea, Item, KitchenArea, Priority, Supply};
    use clap::{Args, Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "grocery")]
    #[command(about = "Personal grocery checklist backed by a CSV file")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        pub data_dir: String,

        #[arg(long, default_value = DEFAULT_DATABASE_FILE)]
        pub database_file: String,

        #[arg(long, default_value = DEFAULT_EXPORT_FILE)]
        pub export_file: String,

        /// TOML file with [storage] and [logging] tables; replaces the path flags
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Show the items that pass the facet filters and name search
        List {
            #[command(flatten)]
            filters: FilterArgs,

            /// Keep only names containing this text
            #[arg(long, default_value = "")]
            search: String,

            /// Print the items as JSON
            #[arg(long)]
            json: bool,
        },
        /// Append an item
        Add(ItemArgs),
        /// Replace every item with this name
        Update {
            #[command(flatten)]
            item: ItemArgs,

            /// Name of the entry being edited, when the edit renames it
            #[arg(long)]
            from: Option<String>,
        },
        /// Remove every item with this name
        Delete {
            #[arg(long)]
            name: String,
        },
        /// Write the list to the export file
        Export,
    }

    /// Facet flags. A facet left unset is not restricted.
    #[derive(Debug, Clone, Default, Args)]
    pub struct FilterArgs {
        #[arg(long, value_delimiter = ',')]
        pub priority: Vec<Priority>,

        #[arg(long, value_delimiter = ',')]
        pub supply: Vec<Supply>,

        #[arg(long, value_delimiter = ',')]
        pub kitchen_area: Vec<KitchenArea>,

        #[arg(long, value_delimiter = ',')]
        pub grocer_area: Vec<GrocerArea>,
    }

    #[derive(Debug, Clone, Args)]
    pub struct ItemArgs {
        #[arg(long)]
        pub name: String,

        #[arg(long, default_value_t = 0.0)]
        pub price: f64,

        #[arg(long, default_value = "not_needed")]
        pub priority: Priority,

        #[arg(long, default_value = "needed")]
        pub supply: Supply,

        #[arg(long, default_value = "aisle")]
        pub grocer_area: GrocerArea,

        #[arg(long, default_value = "pantry")]
        pub kitchen_area: KitchenArea,
    }

    impl CliConfig {
        pub fn storage(&self) -> StorageConfig {
            StorageConfig {
                data_dir: self.data_dir.clone(),
                database_file: self.database_file.clone(),
                export_file: self.export_file.clone(),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn data_dir(&self) -> &str {
            &self.data_dir
        }

        fn database_file(&self) -> &str {
            &self.database_file
        }

        fn export_file(&self) -> &str {
            &self.export_file
        }
    }

    impl FilterArgs {
        pub fn to_filter(&self) -> FacetFilter {
            let mut filter = FacetFilter::all();
            if !self.priority.is_empty() {
                filter = filter.with_priorities(self.priority.iter().copied());
            }
            if !self.supply.is_empty() {
                filter = filter.with_supplies(self.supply.iter().copied());
            }
            if !self.kitchen_area.is_empty() {
                filter = filter.with_kitchen_areas(self.kitchen_area.iter().copied());
            }
            if !self.grocer_area.is_empty() {
                filter = filter.with_grocer_areas(self.grocer_area.iter().copied());
            }
            filter
        }
    }

    impl From<ItemArgs> for Item {
        fn from(args: ItemArgs) -> Self {
            Item {
                name: args.name,
                price: args.price,
                priority: args.priority,
                supply: args.supply,
                grocer_area: args.grocer_area,
                kitchen_area: args.kitchen_area,
            }
        }
    }

}

pub mod toml_data_source_store;

pub use toml_data_source_store::TomlDataSourceStore;

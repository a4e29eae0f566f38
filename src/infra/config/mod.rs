pub mod data_source_file;
pub mod paths;

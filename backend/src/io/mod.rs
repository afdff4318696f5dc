//! Reading booking exports from text and from disk.

pub mod loaders;

pub use loaders::{load_export_file, parse_export, parse_export_set, read_export_file};

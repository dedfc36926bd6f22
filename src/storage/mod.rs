pub mod load_file;

pub use load_file::{LoadFileError, load_file_into, source_text};

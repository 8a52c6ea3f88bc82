mod directory;

pub use directory::{home_directory, is_directory, read_directory};

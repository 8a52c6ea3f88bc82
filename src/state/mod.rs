pub mod document;
pub mod navigation;

pub use document::{is_markdown_name, DocumentSession};
pub use navigation::{Activation, NavigationState};

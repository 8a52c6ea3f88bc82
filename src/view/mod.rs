pub mod modals;
pub mod panels;
pub mod preview;

pub mod scanner;
pub mod selection_store;

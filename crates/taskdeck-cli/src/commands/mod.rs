pub mod add;
pub mod complete;
pub mod delete;
pub mod list;

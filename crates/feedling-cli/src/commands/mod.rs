pub mod help;
pub mod open;
pub mod show;

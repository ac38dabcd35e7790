pub mod table;
pub mod time;

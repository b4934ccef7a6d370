pub mod console;
pub mod date;
pub mod logs;

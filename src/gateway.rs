pub mod console;
pub mod events;
pub mod factory;
pub mod isbn;
pub mod logs;
#[cfg(test)]
pub(crate) mod memory;

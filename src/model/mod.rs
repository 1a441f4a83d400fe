// File: ./src/model/mod.rs
pub mod display;
pub mod item;
pub mod matcher;
pub mod sort;

pub use display::TaskDisplay;
pub use item::{NewTask, Permission, Priority, Task, TaskStatus, parse_due_date};
pub use sort::SortKey;

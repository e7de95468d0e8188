pub mod use_tasks;

pub use use_tasks::use_tasks;

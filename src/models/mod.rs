pub mod task;

// Export the Task type for use throughout the app
pub use task::Task;

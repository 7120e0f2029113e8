//! Core UI plumbing: action definitions and background task management.
//!
//! Components and background tasks communicate with the application
//! through [`actions::Action`] values; asynchronous backend work runs on
//! tokio tasks owned by the [`task_manager::TaskManager`], which feeds
//! results back over an unbounded channel drained once per loop
//! iteration.

pub mod actions;
pub mod task_manager;

pub use actions::{Action, Notification, Severity};
pub use task_manager::{TaskId, TaskManager};

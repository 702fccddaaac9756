//! Task management service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewTask, TaskChanges, TaskService};

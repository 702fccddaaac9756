//! HTTP route handlers

pub mod auth;
pub mod categories;
pub mod roles;
pub mod tasks;

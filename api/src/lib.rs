//! HTTP layer of the Taskhive server
//!
//! Exposes the application factory, route handlers, middleware and DTOs so
//! integration tests can assemble the full application in-process.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

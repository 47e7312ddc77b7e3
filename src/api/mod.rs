//! REST API module
//!
//! This module provides the HTTP server and the mocked provider endpoints:
//! - API routing and request handling
//! - Request tracing middleware
//! - JSON / form body extraction
//! - The mock response gate

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod mock;
pub mod models;
pub mod routes;
pub mod server;

pub use middleware::{trace_id_middleware, TraceId, TRACE_ID_HEADER};
pub use server::ApiServer;

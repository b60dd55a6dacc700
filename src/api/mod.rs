//! API Module
//!
//! HTTP handlers and routing for the health lookup REST API.
//!
//! # Endpoints
//! - `GET /activities` - Weather-based activity suggestions
//! - `GET /global-health/:indicator` - Global health statistics
//! - `GET /education/:topic` - Health education content
//! - `GET /foods` - Food search
//! - `GET /stats` - Cache statistics
//! - `DELETE /cache[/:domain]` - Clear caches
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

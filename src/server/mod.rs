//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic and data access. The backend uses Axum
//! as the web framework and the `storage` crate for document collections, which
//! are served either by MongoDB or by the in-memory fallback.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, input validation, and DTO conversion
//! - **Service Layer** (`service/`) - Enrollment rules and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Collection operations and document-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and query parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (collections)
//! - **Startup** (`startup`) - Backend selection and seeding
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates input, converts it to params, calls service
//! 3. **Service** applies enrollment rules, orchestrates data operations
//! 4. **Data** queries the collection, decodes documents into domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

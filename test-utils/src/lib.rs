//! Activity Signup Test Utils
//!
//! Provides shared testing utilities for the activity signup backend. Tests run
//! against the in-memory fallback collections, so no MongoDB server is needed.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test collections
//! - **TestContext**: Test environment holding the configured collections
//! - **factory**: Builders inserting activity and teacher documents with defaults
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_signup() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_seed_catalog().build().await?;
//!
//!     let activity = factory::activity::ActivityFactory::new(test.activities())
//!         .max_participants(1)
//!         .build()
//!         .await?;
//!     // Perform operations against test.collections...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

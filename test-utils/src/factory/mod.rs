//! Factory methods for creating test documents.
//!
//! This module provides factory methods for inserting activity and teacher
//! documents with sensible defaults, reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each document kind has its own factory module with both a `Factory` struct
//! for customization and a `create_*` convenience function for quick default
//! creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), storage::StorageError> {
//!     let test = TestBuilder::new().build().await.unwrap();
//!
//!     // Create with defaults
//!     let activity = factory::create_activity(test.activities()).await?;
//!     let teacher = factory::create_teacher(test.teachers()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let activity = factory::activity::ActivityFactory::new(test.activities())
//!     .name("Chess Club")
//!     .days(&["Monday", "Friday"])
//!     .times("15:15", "16:45")
//!     .max_participants(2)
//!     .participants(&["a@mergington.edu"])
//!     .build()
//!     .await?;
//! ```

pub mod activity;
pub mod helpers;
pub mod teacher;

// Re-export commonly used factory functions for concise usage
pub use activity::create_activity;
pub use teacher::create_teacher;

use storage::bson::Document;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with pre-populated collections.
///
/// Provides a fluent interface for loading the built-in catalog and individual
/// fixture documents, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_seed_catalog()
///     .with_activity(doc! { "_id": "Knitting Circle", "participants": [] })
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Whether `seed::init_database` runs before the fixture documents are inserted.
    seed_catalog: bool,

    /// Activity documents inserted in the order they were added.
    activities: Vec<Document>,

    /// Teacher documents inserted in the order they were added.
    teachers: Vec<Document>,
}

impl TestBuilder {
    /// Creates a new test builder with empty collections.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with nothing configured
    pub fn new() -> Self {
        Self {
            seed_catalog: false,
            activities: Vec::new(),
            teachers: Vec::new(),
        }
    }

    /// Loads the built-in activity and teacher catalog into the collections.
    ///
    /// Teacher passwords are hashed with Argon2 during `build()`, which makes
    /// this noticeably slower than inserting fixtures directly. Use it only for
    /// tests that depend on the real catalog.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_seed_catalog(mut self) -> Self {
        self.seed_catalog = true;
        self
    }

    /// Adds an activity document to insert during `build()`.
    ///
    /// # Arguments
    /// - `document` - Activity document carrying a string `_id`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_activity(mut self, document: Document) -> Self {
        self.activities.push(document);
        self
    }

    /// Adds a teacher document to insert during `build()`.
    ///
    /// # Arguments
    /// - `document` - Teacher document carrying a string `_id`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_teacher(mut self, document: Document) -> Self {
        self.teachers.push(document);
        self
    }

    /// Builds the test context.
    ///
    /// Creates fresh fallback collections, loads the catalog if requested and
    /// then inserts the fixture documents.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Seed)` - Loading the catalog failed
    /// - `Err(TestError::Storage)` - A fixture document had no string `_id`
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new();

        if self.seed_catalog {
            seed::init_database(&context.collections).await?;
        }

        for document in self.activities {
            context.activities().insert_one(document).await?;
        }
        for document in self.teachers {
            context.teachers().insert_one(document).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

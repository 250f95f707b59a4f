use storage::{Collections, DocumentCollection};

/// Test context holding the collections a test operates on.
///
/// Always backed by fresh in-memory fallback collections, so every context is
/// isolated from every other test.
pub struct TestContext {
    /// Activity and teacher collections for this test.
    pub collections: Collections,
}

impl TestContext {
    /// Creates a context with two empty fallback collections.
    ///
    /// # Returns
    /// - New `TestContext` instance with empty collections
    pub fn new() -> Self {
        Self {
            collections: Collections::in_memory(),
        }
    }

    /// Activity collection of this context.
    pub fn activities(&self) -> &dyn DocumentCollection {
        self.collections.activities.as_ref()
    }

    /// Teacher collection of this context.
    pub fn teachers(&self) -> &dyn DocumentCollection {
        self.collections.teachers.as_ref()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

//! Repository layer over the document collections.
//!
//! This module contains repository structs that handle collection operations for each
//! domain in the application. Repositories issue documents, filters and update specs
//! against the `DocumentCollection` contract and return domain models, so nothing
//! above this layer depends on which backend was selected at startup.

pub mod activity;
pub mod teacher;

#[cfg(test)]
mod test;

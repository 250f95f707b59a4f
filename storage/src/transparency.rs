//! Runs one fixed operation script against each backend and compares what
//! callers observe. The fallback is always exercised; MongoDB only when
//! `MONGODB_TEST_URI` points at a reachable server.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use mongodb::bson::{doc, Document};

use crate::{
    collection::{DocumentCollection, UpdateSpec},
    error::StorageError,
    memory::MemoryCollection,
    mongo::MongoBackend,
    selector::BackendConfig,
};

fn evening_club() -> Document {
    doc! {
        "_id": "Chess Club",
        "schedule_details": { "days": ["Monday", "Friday"], "start_time": "15:15", "end_time": "16:45" },
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    }
}

fn morning_club() -> Document {
    doc! {
        "_id": "Programming Class",
        "schedule_details": { "days": ["Tuesday"], "start_time": "07:00", "end_time": "08:00" },
        "max_participants": 20,
        "participants": ["emma@mergington.edu"]
    }
}

/// Every observable result of the script, rendered for comparison.
async fn run_script(collection: &dyn DocumentCollection) -> Result<Vec<String>, StorageError> {
    let mut observed = Vec::new();

    observed.push(format!("{:?}", collection.count_all().await?));
    collection.insert_one(evening_club()).await?;
    collection.insert_one(morning_club()).await?;
    observed.push(format!("{:?}", collection.count_all().await?));
    observed.push(format!("{:?}", collection.find_one("Chess Club").await?));
    observed.push(format!("{:?}", collection.find_one("Knitting").await?));
    observed.push(format!("{:?}", collection.find(doc! {}).await?));
    observed.push(format!(
        "{:?}",
        collection
            .find(doc! {
                "schedule_details.days": { "$in": ["Friday"] },
                "schedule_details.start_time": { "$gte": "12:00" }
            })
            .await?
    ));
    observed.push(format!(
        "{:?}",
        collection
            .find(doc! { "schedule_details.end_time": { "$lte": "09:00" } })
            .await?
    ));
    observed.push(format!("{:?}", collection.aggregate_distinct_days().await?));

    let push = UpdateSpec::Push(doc! { "participants": "x@y.edu" });
    let pull = UpdateSpec::Pull(doc! { "participants": "x@y.edu" });
    observed.push(format!("{:?}", collection.update_one("Chess Club", push).await?));
    observed.push(format!("{:?}", collection.find_one("Chess Club").await?));
    observed.push(format!("{:?}", collection.update_one("Chess Club", pull.clone()).await?));
    observed.push(format!("{:?}", collection.update_one("Chess Club", pull).await?));
    observed.push(format!("{:?}", collection.find_one("Chess Club").await?));
    observed.push(format!(
        "{:?}",
        collection
            .update_one("Chess Club", UpdateSpec::Set(doc! { "max_participants": 14 }))
            .await?
    ));
    observed.push(format!(
        "{:?}",
        collection
            .update_one("nonexistent", UpdateSpec::Set(doc! { "x": 1 }))
            .await?
    ));
    observed.push(format!("{:?}", collection.find(doc! {}).await?));

    Ok(observed)
}

/// Tests that the fallback produces the results MongoDB would.
///
/// Expected: identical observations from both backends when MongoDB is
/// available, and a complete script run on the fallback otherwise
#[tokio::test]
async fn fallback_matches_mongodb() -> Result<(), StorageError> {
    let fallback = run_script(&MemoryCollection::new()).await?;
    assert_eq!(fallback[0], "0");
    assert_eq!(fallback[1], "2");
    assert_eq!(fallback[3], "None");
    assert_eq!(fallback[7], r#"["Friday", "Monday", "Tuesday"]"#);

    let Ok(uri) = std::env::var("MONGODB_TEST_URI") else {
        return Ok(());
    };

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let config = BackendConfig {
        uri,
        database: format!("activity_signup_test_{}", nonce),
        probe_timeout: Duration::from_secs(5),
    };
    let backend = MongoBackend::connect(&config).await?;
    let collection = backend.collection("transparency");

    let real = run_script(&collection).await;
    backend.drop_database().await?;

    assert_eq!(real?, fallback);

    Ok(())
}

use super::*;

/// Tests finding an existing activity by name.
///
/// Verifies that the stored identity is decoded into the activity name and
/// every other field survives the round trip through storage.
///
/// Expected: Ok(Some(Activity)) with matching data
#[tokio::test]
async fn finds_existing_activity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    ActivityFactory::new(test.activities())
        .name("Chess Club")
        .description("Learn strategies and compete in chess tournaments")
        .days(&["Monday", "Friday"])
        .times("15:15", "16:45")
        .max_participants(12)
        .participants(&["michael@mergington.edu", "daniel@mergington.edu"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let activity = repo.find_by_name("Chess Club").await?.unwrap();

    assert_eq!(activity.name, "Chess Club");
    assert_eq!(
        activity.description,
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(activity.schedule_details.days, vec!["Monday", "Friday"]);
    assert_eq!(activity.schedule_details.start_time, "15:15");
    assert_eq!(activity.max_participants, 12);
    assert_eq!(
        activity.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );

    Ok(())
}

/// Tests querying for a non-existent activity.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_activity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    factory::create_activity(test.activities()).await?;

    let repo = ActivityRepository::new(test.activities());

    assert!(repo.find_by_name("Underwater Basket Weaving").await?.is_none());

    Ok(())
}

/// Tests decoding a stored document that lacks required fields.
///
/// Expected: Err(StorageError::Decode)
#[tokio::test]
async fn fails_on_malformed_document() -> Result<(), StorageError> {
    let test = TestBuilder::new()
        .with_activity(storage::bson::doc! { "_id": "Broken Club", "participants": [] })
        .build()
        .await
        .unwrap();

    let repo = ActivityRepository::new(test.activities());
    let result = repo.find_by_name("Broken Club").await;

    assert!(matches!(result, Err(StorageError::Decode(_))));

    Ok(())
}

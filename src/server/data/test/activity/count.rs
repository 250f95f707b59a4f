use super::*;

/// Tests counting activities in an empty collection.
///
/// Expected: Ok(0)
#[tokio::test]
async fn counts_empty_collection() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = ActivityRepository::new(test.activities());

    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests counting activities after inserting several.
///
/// Expected: Ok(3)
#[tokio::test]
async fn counts_inserted_activities() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    for _ in 0..3 {
        factory::create_activity(test.activities()).await?;
    }

    let repo = ActivityRepository::new(test.activities());

    assert_eq!(repo.count().await?, 3);

    Ok(())
}

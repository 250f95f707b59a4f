use super::*;

/// Tests collecting meeting days across activities.
///
/// Expected: each day once, sorted lexicographically
#[tokio::test]
async fn returns_sorted_distinct_days() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .days(&["Wednesday", "Friday"])
        .build()
        .await?;
    ActivityFactory::new(test.activities())
        .days(&["Monday", "Wednesday"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());

    assert_eq!(repo.get_days().await?, vec!["Friday", "Monday", "Wednesday"]);

    Ok(())
}

/// Tests collecting days from an empty collection.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_activities() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = ActivityRepository::new(test.activities());

    assert!(repo.get_days().await?.is_empty());

    Ok(())
}

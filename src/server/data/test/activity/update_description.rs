use super::*;

/// Tests replacing an activity's description.
///
/// Expected: Ok(true) with only the description changed
#[tokio::test]
async fn replaces_description() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Math Club")
        .description("Solve challenging problems")
        .participants(&["james@mergington.edu"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let updated = repo
        .update_description("Math Club", "Prepare for math competitions")
        .await?;

    assert!(updated);
    let activity = repo.find_by_name("Math Club").await?.unwrap();
    assert_eq!(activity.description, "Prepare for math competitions");
    assert_eq!(activity.participants, vec!["james@mergington.edu"]);

    Ok(())
}

/// Tests updating a non-existent activity.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_activity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = ActivityRepository::new(test.activities());

    assert!(!repo.update_description("Ghost Club", "Boo").await?);

    Ok(())
}

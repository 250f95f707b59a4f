use super::*;

/// Tests adding a participant to an existing activity.
///
/// Expected: Ok(true) and the email appended after existing participants
#[tokio::test]
async fn appends_participant() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Art Club")
        .participants(&["amelia@mergington.edu"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let added = repo.add_participant("Art Club", "harper@mergington.edu").await?;

    assert!(added);
    let activity = repo.find_by_name("Art Club").await?.unwrap();
    assert_eq!(
        activity.participants,
        vec!["amelia@mergington.edu", "harper@mergington.edu"]
    );

    Ok(())
}

/// Tests adding a participant to a non-existent activity.
///
/// Expected: Ok(false) and nothing created
#[tokio::test]
async fn returns_false_for_unknown_activity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = ActivityRepository::new(test.activities());
    let added = repo.add_participant("Ghost Club", "casper@mergington.edu").await?;

    assert!(!added);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}

/// Tests that the repository does not enforce capacity.
///
/// Expected: Ok(true) even when the activity is already full
#[tokio::test]
async fn does_not_enforce_capacity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Tiny Club")
        .max_participants(1)
        .participants(&["first@mergington.edu"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());

    assert!(repo.add_participant("Tiny Club", "second@mergington.edu").await?);
    assert_eq!(
        repo.find_by_name("Tiny Club").await?.unwrap().participants.len(),
        2
    );

    Ok(())
}

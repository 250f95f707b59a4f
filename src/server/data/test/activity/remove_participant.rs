use super::*;

/// Tests removing an enrolled participant.
///
/// Expected: Ok(true) and the email gone while other participants keep their order
#[tokio::test]
async fn removes_participant() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Chess Club")
        .participants(&[
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "emma@mergington.edu",
        ])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let removed = repo
        .remove_participant("Chess Club", "daniel@mergington.edu")
        .await?;

    assert!(removed);
    assert_eq!(
        repo.find_by_name("Chess Club").await?.unwrap().participants,
        vec!["michael@mergington.edu", "emma@mergington.edu"]
    );

    Ok(())
}

/// Tests removing an email that is not enrolled.
///
/// Expected: Ok(true) with the participant list unchanged
#[tokio::test]
async fn ignores_absent_participant() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Chess Club")
        .participants(&["michael@mergington.edu"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());

    assert!(
        repo.remove_participant("Chess Club", "nobody@mergington.edu")
            .await?
    );
    assert_eq!(
        repo.find_by_name("Chess Club").await?.unwrap().participants,
        vec!["michael@mergington.edu"]
    );

    Ok(())
}

/// Tests removing from a non-existent activity.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_activity() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = ActivityRepository::new(test.activities());

    assert!(
        !repo
            .remove_participant("Ghost Club", "casper@mergington.edu")
            .await?
    );

    Ok(())
}

use super::*;

async fn names(repo: &ActivityRepository<'_>, filter: ActivityFilter) -> Vec<String> {
    repo.find(filter)
        .await
        .unwrap()
        .into_iter()
        .map(|activity| activity.name)
        .collect()
}

/// Tests listing with an empty filter.
///
/// Expected: every activity in insertion order
#[tokio::test]
async fn returns_all_with_empty_filter() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities()).name("Soccer Team").build().await?;
    ActivityFactory::new(test.activities()).name("Art Club").build().await?;
    ActivityFactory::new(test.activities()).name("Chess Club").build().await?;

    let repo = ActivityRepository::new(test.activities());

    assert_eq!(
        names(&repo, ActivityFilter::default()).await,
        vec!["Soccer Team", "Art Club", "Chess Club"]
    );

    Ok(())
}

/// Tests filtering by weekday.
///
/// Expected: only activities whose days include the requested day
#[tokio::test]
async fn filters_by_day() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Chess Club")
        .days(&["Monday", "Friday"])
        .build()
        .await?;
    ActivityFactory::new(test.activities())
        .name("Programming Class")
        .days(&["Tuesday", "Thursday"])
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let filter = ActivityFilter {
        day: Some("Friday".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&repo, filter).await, vec!["Chess Club"]);

    Ok(())
}

/// Tests filtering by a time window.
///
/// Verifies that start and end bounds are inclusive and that both must hold.
///
/// Expected: only the activity entirely inside the window
#[tokio::test]
async fn filters_by_time_window() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Morning Fitness")
        .times("06:30", "07:45")
        .build()
        .await?;
    ActivityFactory::new(test.activities())
        .name("Chess Club")
        .times("15:15", "16:45")
        .build()
        .await?;
    ActivityFactory::new(test.activities())
        .name("Drama Club")
        .times("15:15", "17:30")
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let filter = ActivityFilter {
        start_time: Some("15:15".to_string()),
        end_time: Some("16:45".to_string()),
        ..Default::default()
    };

    assert_eq!(names(&repo, filter).await, vec!["Chess Club"]);

    Ok(())
}

/// Tests combining day and time constraints.
///
/// Expected: an empty list when no activity satisfies every constraint
#[tokio::test]
async fn requires_every_constraint() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    ActivityFactory::new(test.activities())
        .name("Weekend Robotics Workshop")
        .days(&["Saturday"])
        .times("10:00", "14:00")
        .build()
        .await?;

    let repo = ActivityRepository::new(test.activities());
    let filter = ActivityFilter {
        day: Some("Saturday".to_string()),
        start_time: Some("12:00".to_string()),
        end_time: None,
    };

    assert!(names(&repo, filter).await.is_empty());

    Ok(())
}

use super::*;

/// Tests counting teacher accounts.
///
/// Expected: Ok(2) after creating two teachers
#[tokio::test]
async fn counts_teachers() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    factory::create_teacher(test.teachers()).await?;
    factory::create_teacher(test.teachers()).await?;

    let repo = TeacherRepository::new(test.teachers());

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

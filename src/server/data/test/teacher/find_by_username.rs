use super::*;

/// Tests finding an existing teacher by username.
///
/// Expected: Ok(Some(Teacher)) with role decoded
#[tokio::test]
async fn finds_existing_teacher() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();
    TeacherFactory::new(test.teachers())
        .username("principal")
        .display_name("Principal Martinez")
        .role("admin")
        .build()
        .await?;

    let repo = TeacherRepository::new(test.teachers());
    let teacher = repo.find_by_username("principal").await?.unwrap();

    assert_eq!(teacher.username, "principal");
    assert_eq!(teacher.display_name, "Principal Martinez");
    assert_eq!(teacher.role, TeacherRole::Admin);
    assert!(teacher.password.starts_with("$argon2id$"));

    Ok(())
}

/// Tests finding a seeded teacher account.
///
/// Expected: Ok(Some(Teacher)) carrying a hash rather than the plaintext password
#[tokio::test]
async fn finds_seeded_teacher() -> Result<(), StorageError> {
    let test = TestBuilder::new().with_seed_catalog().build().await.unwrap();

    let repo = TeacherRepository::new(test.teachers());
    let teacher = repo.find_by_username("mchen").await?.unwrap();

    assert_eq!(teacher.display_name, "Mr. Chen");
    assert_eq!(teacher.role, TeacherRole::Teacher);
    assert_ne!(teacher.password, "chess456");

    Ok(())
}

/// Tests querying for a non-existent teacher.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_teacher() -> Result<(), StorageError> {
    let test = TestBuilder::new().build().await.unwrap();

    let repo = TeacherRepository::new(test.teachers());

    assert!(repo.find_by_username("nobody").await?.is_none());

    Ok(())
}

use super::*;

/// Tests removing an existing mapping.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_mapping(db).await?;
    let kept = factory::create_user_mapping(db).await?;

    let repo = UserMappingRepository::new(db);
    let deleted = repo
        .delete_by_discord_id(stored.discord_id.parse().unwrap())
        .await?;

    assert!(deleted);
    let remaining = UserMapping::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].discord_id, kept.discord_id);

    Ok(())
}

/// Tests removing a mapping that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_nothing_to_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserMappingRepository::new(db);
    let deleted = repo.delete_by_discord_id(42).await?;

    assert!(!deleted);

    Ok(())
}

use super::*;

/// Tests deleting an existing command.
///
/// Expected: Ok(true) and only the other guild's command remains
#[tokio::test]
async fn deletes_command_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CustomCommandFactory::new(db)
        .guild_id(100)
        .name("faq")
        .build()
        .await?;
    CustomCommandFactory::new(db)
        .guild_id(200)
        .name("faq")
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let deleted = repo.delete(100, "faq").await?;

    assert!(deleted);
    let remaining = CustomCommand::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].guild_id, "200");

    Ok(())
}

/// Tests deleting a command that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_command() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomCommandRepository::new(db);
    let deleted = repo.delete(100, "faq").await?;

    assert!(!deleted);
    assert_eq!(CustomCommand::find().count(db).await?, 0);

    Ok(())
}

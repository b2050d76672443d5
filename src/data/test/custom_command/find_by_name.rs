use super::*;

/// Tests finding a command by its exact name within a guild.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_command_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CustomCommandFactory::new(db)
        .guild_id(100)
        .name("faq")
        .response("Read the pins.")
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let command = repo.find_by_name(100, "faq").await?;

    assert_eq!(command.map(|c| c.response), Some("Read the pins.".to_string()));

    Ok(())
}

/// Tests that a command from another guild is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CustomCommandFactory::new(db)
        .guild_id(100)
        .name("faq")
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let command = repo.find_by_name(200, "faq").await?;

    assert!(command.is_none());

    Ok(())
}

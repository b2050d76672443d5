use super::*;

/// Tests listing a guild's commands.
///
/// Verifies that only the guild's commands are returned and that they are sorted
/// by name.
///
/// Expected: Ok with commands in ascending name order
#[tokio::test]
async fn lists_guild_commands_sorted_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["zeta", "alpha", "mid"] {
        CustomCommandFactory::new(db)
            .guild_id(100)
            .name(name)
            .build()
            .await?;
    }
    CustomCommandFactory::new(db)
        .guild_id(200)
        .name("beta")
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let commands = repo.get_all_by_guild(100).await?;

    let names: Vec<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);

    Ok(())
}

/// Tests listing a guild without commands.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn returns_empty_for_guild_without_commands() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomCommandRepository::new(db);
    let commands = repo.get_all_by_guild(100).await?;

    assert!(commands.is_empty());

    Ok(())
}

use super::*;

/// Tests creating a custom command that does not exist yet.
///
/// Expected: Ok with `created == true`
#[tokio::test]
async fn creates_new_command() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomCommandRepository::new(db);
    let (command, created) = repo
        .upsert(UpsertCustomCommandParam {
            guild_id: 100,
            name: "rules".to_string(),
            response: "Be nice.".to_string(),
            created_by: 7,
        })
        .await?;

    assert!(created);
    assert_eq!(command.guild_id, 100);
    assert_eq!(command.name, "rules");
    assert_eq!(command.response, "Be nice.");
    assert_eq!(command.created_by, 7);

    Ok(())
}

/// Tests saving a command under a name that already exists in the guild.
///
/// Verifies that the response and author are replaced without inserting a second row.
///
/// Expected: Ok with `created == false`
#[tokio::test]
async fn updates_existing_command() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = CustomCommandFactory::new(db)
        .guild_id(100)
        .name("rules")
        .response("Old rules")
        .created_by(1)
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let (command, created) = repo
        .upsert(UpsertCustomCommandParam {
            guild_id: 100,
            name: "rules".to_string(),
            response: "New rules".to_string(),
            created_by: 2,
        })
        .await?;

    assert!(!created);
    assert_eq!(command.created_at, existing.created_at);
    assert_eq!(command.response, "New rules");
    assert_eq!(command.created_by, 2);

    let count = CustomCommand::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same name in different guilds creates separate commands.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn scopes_names_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CustomCommandFactory::new(db)
        .guild_id(100)
        .name("rules")
        .build()
        .await?;

    let repo = CustomCommandRepository::new(db);
    let (_, created) = repo
        .upsert(UpsertCustomCommandParam {
            guild_id: 200,
            name: "rules".to_string(),
            response: "Other guild rules".to_string(),
            created_by: 3,
        })
        .await?;

    assert!(created);
    let count = CustomCommand::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests two saves of the same name racing each other.
///
/// Both look up the name before either writes, so both take the insert path; the
/// unique index turns the second insert into an update.
///
/// Expected: both Ok and a single row holding one of the two responses
#[tokio::test]
async fn concurrent_saves_leave_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomCommandRepository::new(db);
    let save = |response: &str| {
        repo.upsert(UpsertCustomCommandParam {
            guild_id: 100,
            name: "rules".to_string(),
            response: response.to_string(),
            created_by: 7,
        })
    };

    let (first, second) = tokio::join!(save("First"), save("Second"));
    first?;
    second?;

    let rows = CustomCommand::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert!(rows[0].response == "First" || rows[0].response == "Second");

    Ok(())
}

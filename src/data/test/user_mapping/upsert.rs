use super::*;
use test_utils::factory::user_mapping::UserMappingFactory;

/// Tests linking an account for a user without a mapping.
///
/// Verifies that the repository inserts a new row with the given account name and
/// matching created/updated timestamps.
///
/// Expected: Ok with mapping created
#[tokio::test]
async fn creates_new_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserMappingRepository::new(db);
    let mapping = repo
        .upsert(UpsertUserMappingParam {
            discord_id: 123456789,
            account_name: "octocat".to_string(),
        })
        .await?;

    assert_eq!(mapping.discord_id, 123456789);
    assert_eq!(mapping.account_name, "octocat");
    assert_eq!(mapping.created_at, mapping.updated_at);

    let count = UserMapping::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests re-linking a user who already has a mapping.
///
/// Verifies that the account name is replaced in place, the original creation time
/// is kept, and no second row is inserted.
///
/// Expected: Ok with one updated mapping
#[tokio::test]
async fn replaces_existing_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = UserMappingFactory::new(db)
        .discord_id(555)
        .account_name("old-name")
        .build()
        .await?;

    let repo = UserMappingRepository::new(db);
    let mapping = repo
        .upsert(UpsertUserMappingParam {
            discord_id: 555,
            account_name: "new-name".to_string(),
        })
        .await?;

    assert_eq!(mapping.account_name, "new-name");
    assert_eq!(mapping.created_at, existing.created_at);
    assert!(mapping.updated_at >= existing.updated_at);

    let count = UserMapping::find()
        .filter(entity::user_mapping::Column::DiscordId.eq("555"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting one user leaves other users' mappings untouched.
///
/// Expected: Ok with other mapping unchanged
#[tokio::test]
async fn does_not_touch_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_user_mapping(db).await?;

    let repo = UserMappingRepository::new(db);
    repo.upsert(UpsertUserMappingParam {
        discord_id: 999_999_999,
        account_name: "someone".to_string(),
    })
    .await?;

    let other_id = other.discord_id.parse::<u64>().unwrap();
    let reloaded = repo.find_by_discord_id(other_id).await?.unwrap();
    assert_eq!(reloaded.account_name, other.account_name);

    Ok(())
}

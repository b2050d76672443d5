use super::*;

/// Tests finding an existing mapping.
///
/// Expected: Ok(Some) with the stored account name
#[tokio::test]
async fn finds_existing_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_mapping(db).await?;
    let discord_id = stored.discord_id.parse::<u64>().unwrap();

    let repo = UserMappingRepository::new(db);
    let mapping = repo.find_by_discord_id(discord_id).await?;

    assert!(mapping.is_some());
    let mapping = mapping.unwrap();
    assert_eq!(mapping.discord_id, discord_id);
    assert_eq!(mapping.account_name, stored.account_name);

    Ok(())
}

/// Tests looking up a user who never linked an account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_mapping(db).await?;

    let repo = UserMappingRepository::new(db);
    let mapping = repo.find_by_discord_id(1).await?;

    assert!(mapping.is_none());

    Ok(())
}

/// Tests that a corrupt stored Discord ID surfaces as an internal error.
///
/// Expected: Err(InternalErr)
#[tokio::test]
async fn fails_on_unparseable_stored_id() -> Result<(), AppError> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    entity::user_mapping::ActiveModel {
        discord_id: ActiveValue::Set("not-a-number".to_string()),
        account_name: ActiveValue::Set("broken".to_string()),
        created_at: ActiveValue::Set(chrono::Utc::now()),
        updated_at: ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let mapping = UserMapping::find().one(db).await?.unwrap();
    let result = crate::model::user_mapping::UserMapping::from_entity(mapping);

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

use crate::{
    data::user_mapping::UserMappingRepository, error::AppError,
    model::user_mapping::UpsertUserMappingParam,
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_discord_id;
mod find_by_discord_id;
mod upsert;

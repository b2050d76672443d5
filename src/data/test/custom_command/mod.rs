use crate::{
    data::custom_command::CustomCommandRepository, error::AppError,
    model::custom_command::UpsertCustomCommandParam,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::custom_command::CustomCommandFactory};

mod delete;
mod find_by_name;
mod get_all_by_guild;
mod upsert;

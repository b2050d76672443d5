use crate::error::AppError;
use test_utils::builder::TestBuilder;

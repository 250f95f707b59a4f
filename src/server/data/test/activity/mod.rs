use crate::server::{data::activity::ActivityRepository, model::activity::ActivityFilter};
use storage::StorageError;
use test_utils::{builder::TestBuilder, factory, factory::activity::ActivityFactory};

mod add_participant;
mod count;
mod find;
mod find_by_name;
mod get_days;
mod remove_participant;
mod update_description;

use crate::server::{data::teacher::TeacherRepository, model::teacher::TeacherRole};
use storage::StorageError;
use test_utils::{builder::TestBuilder, factory, factory::teacher::TeacherFactory};

mod count;
mod find_by_username;

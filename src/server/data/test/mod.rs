mod activity;
mod teacher;

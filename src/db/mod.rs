pub mod user_statuses;
pub mod users;

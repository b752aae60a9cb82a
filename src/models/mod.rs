pub mod role;
pub mod user;
pub mod user_status;

pub use role::Role;
pub use user::User;
pub use user_status::UserStatus;

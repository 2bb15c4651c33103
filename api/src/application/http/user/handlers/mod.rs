pub mod bulk_users;
pub mod get_users;

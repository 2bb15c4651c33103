pub mod bulk_tags;
pub mod get_tags;

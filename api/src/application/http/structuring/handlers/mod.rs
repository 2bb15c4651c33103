pub mod bulk_tag;
pub mod structure_content;

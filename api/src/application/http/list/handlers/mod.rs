pub mod approve_list;
pub mod bulk_lists;
pub mod create_list;
pub mod delete_list;
pub mod get_list;
pub mod get_lists;
pub mod reject_list;
pub mod request_publish;
pub mod toggle_list_recipe;
pub mod unpublish_list;
pub mod update_list;

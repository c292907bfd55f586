pub mod board;
pub mod comment_form;
pub mod post_details;
pub mod posts_list;
pub mod user_selector;

pub mod header;
pub mod review_form;
pub mod reviews_list;
pub mod route_guard;
pub mod select_field;

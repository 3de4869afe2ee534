//! HTTP request handlers.

pub mod health;
pub mod links;
pub mod redirect;
pub mod root;

pub use health::health_handler;
pub use links::{
    add_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
pub use redirect::redirect_handler;
pub use root::root_handler;

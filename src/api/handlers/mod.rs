//! HTTP request handlers.
//!
//! - [`urls`] - JSON API over the URL collection
//! - [`redirect`] - public short ID redirect

pub mod redirect;
pub mod urls;

pub use redirect::redirect_handler;
pub use urls::{create_handler, delete_handler, list_handler, retrieve_handler, update_handler};

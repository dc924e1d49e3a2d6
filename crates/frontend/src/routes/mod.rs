pub mod page;
pub mod routes;

pub use page::{navigate, use_page, AuthView, Page};

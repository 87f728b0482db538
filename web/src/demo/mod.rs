pub mod comment;
pub mod flights;
pub mod pages;
pub mod routes;

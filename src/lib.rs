pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod facets;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod source;
pub mod utils;

pub mod config;
pub mod debounce;
pub mod error;
pub mod explore;
pub mod history;
pub mod link;
pub mod view;

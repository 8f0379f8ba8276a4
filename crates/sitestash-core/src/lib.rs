pub mod config;
pub mod events;
pub mod logging;

pub mod recode;
pub mod storage;
pub mod store;
pub mod url_model;

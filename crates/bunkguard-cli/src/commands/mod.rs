pub mod config;
pub mod event;
pub mod mark;
pub mod plan;
pub mod status;
pub mod subject;

pub mod app;
pub mod cli;
pub mod jobs;
pub mod logging;
pub mod settings;

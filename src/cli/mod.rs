pub mod command;
pub mod menu;
pub mod prompt;
pub mod run;

pub use run::run_app;

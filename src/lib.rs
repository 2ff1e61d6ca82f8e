// Library surface for headless/integration tests and reuse.
// The binary only adds the CLI and terminal setup on top.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod logging;
pub mod passage;
pub mod runtime;
pub mod session;
pub mod time_format;
pub mod tokenizer;
pub mod ui;

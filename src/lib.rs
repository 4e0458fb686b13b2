// Library root
// -----------
// This crate exposes a small library surface for the registration CLI.
// The binary (`main.rs`) uses these modules to run the interactive menu.
//
// Module responsibilities:
// - `model`: the student record and the ordered in-memory store.
// - `error`: typed errors for file persistence and name validation.
// - `storage`: loads the whole store from a JSON file and writes it back.
// - `config`: settings resolved from environment variables.
// - `ui`: console prompts, menu classification and listings.
// - `app`: the menu loop that ties the pieces together.
//
// Keeping the console behind `ui::Prompt` lets the same loop run against
// a real terminal or a scripted reader in tests.
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod ui;

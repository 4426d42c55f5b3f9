// NOTE: structa CLI architecture
//
// Why one blocking call per interaction (no runtime, no queue)?
// - Every user action maps to exactly one provider request; the provider
//   client owns the timeout, the CLI owns nothing in flight
// - Keeps the pipeline (prompt -> provider -> extract -> render -> paint)
//   a straight line that is trivial to reason about and to test
//
// Why is history injected instead of a process-wide store?
// - Only the interactive session needs it, and it dies with the process
// - The loop owns its store and passes it down; nothing else can touch it

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod history;
pub mod output;
mod services;
pub mod types;

pub use args::{Cli, Commands, ModelCommand, ProviderCommand};
pub use commands::run;

//! Test support shared across the structa workspace: scripted completion
//! providers and canned response fixtures. Everything here is
//! deterministic and network-free.

pub mod fixtures;
pub mod providers;

pub use providers::ScriptedProvider;

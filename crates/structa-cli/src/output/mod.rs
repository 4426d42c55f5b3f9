pub mod directives;

pub use directives::{write_directives, write_history, write_model_line, write_raw_block};

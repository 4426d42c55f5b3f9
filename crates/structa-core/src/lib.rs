// NOTE: structa pipeline rationale
//
// Why a two-stage extractor (strict parse, then span carving)?
// - Hosted models are asked for pure JSON but still wrap answers in prose
//   ("Here is your JSON: ...") often enough that a strict-only parser
//   rejects usable responses
// - Carving the first brace-delimited span recovers the common case while
//   staying far away from general JSON repair; anything the carver cannot
//   rescue is a definitive NotJson, never a guess
//
// Why directives instead of printing directly?
// - The renderer stays a pure function over the value tree; painters
//   (terminal today, anything order-preserving tomorrow) decide colors,
//   indentation and wording
// - Pure output makes the traversal testable by comparing directive lists

pub mod error;
pub mod extract;
pub mod render;

pub use error::{Error, Result};
pub use extract::extract;
pub use render::render;

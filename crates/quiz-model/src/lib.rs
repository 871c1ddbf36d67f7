//! Data model for converted quiz exports.
//!
//! A [`QuestionRecord`] is one multiple-choice question as emitted in the
//! output JSON array. Field names follow the Rust convention; the serialized
//! keys follow the downstream quiz format (`tema`, `pregunta`, `opciones`, ...).

mod question;

pub use question::{AnswerOptions, OptionKey, QuestionRecord};

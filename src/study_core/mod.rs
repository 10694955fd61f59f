mod error;
mod flashcards;
mod responder;
pub mod templates;
mod timer;
mod types;

pub use error::{Error, Result};
pub use flashcards::{extract, wants_flashcards};
pub use responder::{classify, respond, Topic};
pub use timer::{format_elapsed, second_ticks, StudyTimer};
pub use types::{ChatTurn, Flashcard, Role};

pub mod client_utils;
mod errors;
mod ext;
mod language_model;
pub mod openai;
pub mod testing;
mod types;

pub use errors::*;
pub use language_model::LanguageModel;
pub use types::*;

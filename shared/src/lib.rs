pub mod error;
pub mod models;
pub mod poll_logic;
pub mod validation;

pub use error::ErrorResponse;
pub use models::*;
pub use poll_logic::VoteError;
pub use validation::{ValidationError, MIN_OPTIONS};

#[cfg(test)]
mod tests;

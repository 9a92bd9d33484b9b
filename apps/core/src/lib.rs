// MindCare Core
// Stress classification and supportive dialogue for student wellbeing posts

pub mod brain;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;

pub use error::AppError;

//! Core domain types for review summarisation.

use serde::{Deserialize, Serialize};

/// Lowest grade a summary may assign to a movie.
pub const GRADE_MIN: u8 = 0;

/// Highest grade a summary may assign to a movie.
pub const GRADE_MAX: u8 = 5;

/// An incoming review to be summarised.
///
/// Both fields are required; a request body missing either is rejected by
/// the HTTP layer before the generator runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieReview {
    /// The text of the movie review.
    pub review: String,
    /// The name of the movie reviewer.
    pub reviewer: String,
}

/// A validated summary returned to the caller.
///
/// `grade` is only ever produced through validation and always lies in
/// `[GRADE_MIN, GRADE_MAX]`. `reviewer` is carried through from the
/// request, never derived from model output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieSummary {
    /// A concise title for the movie review.
    pub title: String,
    /// A short summary of the movie review.
    pub summary: String,
    /// A grade for the movie review.
    pub grade: u8,
    /// The name of the movie reviewer.
    pub reviewer: String,
}

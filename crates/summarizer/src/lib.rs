//! Summary generation for movie reviews.
//!
//! This crate provides:
//! - The Strategy trait and implementations for prompt + extraction pairs
//! - The TextGeneration trait, the injected seam to the loaded model
//! - Validation of extracted fields against the summary contract
//! - SummaryGenerator, which composes the three into one operation
//!
//! ## Architecture
//! Each request runs the same stateless sequence:
//! 1. The active strategy renders the review into a prompt
//! 2. The shared model handle generates raw text
//! 3. The strategy extracts a draft {title, summary, grade} from the text
//! 4. Validation checks field presence and the grade domain
//!
//! ## Example Usage
//! ```ignore
//! use std::sync::Arc;
//! use summarizer::{SamplingParams, StrategyKind, SummaryGenerator};
//!
//! let generator = SummaryGenerator::new(
//!     Arc::new(model_handle),
//!     StrategyKind::JsonSpan.build(),
//!     SamplingParams::default(),
//! );
//!
//! let digest = generator.generate(&review_text).await?;
//! println!("{} (grade {})", digest.title, digest.grade);
//! ```

pub mod generator;
pub mod strategies;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export main types
pub use generator::SummaryGenerator;
pub use strategies::StrategyKind;
pub use traits::{Strategy, TextGeneration};
pub use types::{Draft, ReviewDigest, SamplingParams};

//! Template-based article generation.
//!
//! This module provides:
//! - A fixed catalog of sentence templates grouped by style
//! - Single-pass `{placeholder}` substitution
//! - The article assembler that repeats a filled template to a target length
//!
//! # Example
//!
//! ```ignore
//! let generator = ContentGenerator::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Unknown styles fall back to DEFAULT_STYLE
//! let article = generator.generate_article(&mut rng, "Rust", 120, "marketing")?;
//! assert_eq!(article.chars().count(), 123);
//! ```

mod catalog;
mod generator;
mod substitution;

pub use catalog::{filler, ResolvedStyle, TemplateCatalog, DEFAULT_STYLE, FILLERS, TOPIC_PLACEHOLDER};
pub use generator::{ContentGenerator, GenerationError, GenerationResult, ELLIPSIS};
pub use substitution::render;

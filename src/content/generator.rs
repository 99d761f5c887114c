//! Article assembly from catalog templates

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use super::catalog::{filler, TemplateCatalog, TOPIC_PLACEHOLDER};
use super::substitution::render;

/// Appended to every article; not counted toward the requested length.
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Article of {length} characters cannot be allocated")]
    TooLarge { length: i64 },
}

/// Result type for generation operations
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Builds filler articles from the template catalog.
#[derive(Debug, Clone, Default)]
pub struct ContentGenerator {
    catalog: TemplateCatalog,
}

impl ContentGenerator {
    pub fn new() -> Self {
        Self {
            catalog: TemplateCatalog::new(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Fill a template: `{topic}` gets the caller's topic, everything else a fixed filler.
    pub fn fill(template: &str, topic: &str) -> String {
        render(template, |name| {
            if name == TOPIC_PLACEHOLDER {
                Some(topic)
            } else {
                filler(name)
            }
        })
    }

    /// Generate an article of `length` characters plus [`ELLIPSIS`].
    ///
    /// Unknown styles use the default style. One template is picked uniformly
    /// with `rng`, filled, then repeated (separated by a space) and cut to
    /// `length` characters. A zero or negative length yields just the ellipsis.
    ///
    /// Fails only when the article cannot be allocated.
    pub fn generate_article<R>(
        &self,
        rng: &mut R,
        topic: &str,
        length: i64,
        style: &str,
    ) -> GenerationResult<String>
    where
        R: Rng + ?Sized,
    {
        let resolved = self.catalog.resolve(style);
        let template = resolved.templates.choose(rng).copied().unwrap_or_default();
        let content = Self::fill(template, topic);

        tracing::debug!(
            style = resolved.name,
            requested_style = style,
            length,
            "Generating article"
        );

        repeat_to_length(&content, length)
    }
}

/// Repeat `content + " "` `length / chars(content) + 1` times and keep the
/// first `length` characters, then append the ellipsis.
fn repeat_to_length(content: &str, length: i64) -> GenerationResult<String> {
    let too_large = || GenerationError::TooLarge { length };
    let chars = usize::try_from(length.max(0)).map_err(|_| too_large())?;

    let unit_chars = content.chars().count() + 1;
    let unit_bytes = content.len() + 1;
    let repetitions = chars / unit_chars.saturating_sub(1).max(1) + 1;

    // Exact byte size: whole units plus the leading chars of a partial one
    let partial_bytes: usize = content
        .chars()
        .chain(std::iter::once(' '))
        .take(chars % unit_chars)
        .map(char::len_utf8)
        .sum();
    let capacity = (chars / unit_chars)
        .checked_mul(unit_bytes)
        .and_then(|bytes| bytes.checked_add(partial_bytes))
        .and_then(|bytes| bytes.checked_add(ELLIPSIS.len()))
        .ok_or_else(too_large)?;

    let mut article = String::new();
    article
        .try_reserve_exact(capacity)
        .map_err(|_| too_large())?;

    article.extend(
        std::iter::repeat(content)
            .take(repetitions)
            .flat_map(|unit| unit.chars().chain(std::iter::once(' ')))
            .take(chars),
    );
    article.push_str(ELLIPSIS);
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DEFAULT_STYLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn body(article: &str) -> &str {
        article.strip_suffix(ELLIPSIS).unwrap()
    }

    /// True if `body` is a prefix of `(filled + " ")` repeated, for some template of `style`.
    fn is_repeated_prefix(generator: &ContentGenerator, body: &str, topic: &str, style: &str) -> bool {
        generator
            .catalog()
            .resolve(style)
            .templates
            .iter()
            .any(|template| {
                let unit = format!("{} ", ContentGenerator::fill(template, topic));
                let count = body.chars().count() / unit.chars().count() + 1;
                unit.repeat(count).starts_with(body)
            })
    }

    #[test]
    fn test_length_plus_suffix() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for style in ["technical", "marketing"] {
            for length in [1, 10, 85, 86, 87, 500, 2000] {
                let article = generator
                    .generate_article(&mut rng, "Inteligência Artificial", length, style)
                    .unwrap();
                assert_eq!(article.chars().count(), length as usize + ELLIPSIS.len());
                assert!(article.ends_with(ELLIPSIS));
            }
        }
    }

    #[test]
    fn test_zero_length_is_ellipsis() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate_article(&mut rng, "X", 0, "technical").unwrap(), ELLIPSIS);
    }

    #[test]
    fn test_negative_length_is_ellipsis() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generator.generate_article(&mut rng, "X", -25, "marketing").unwrap(), ELLIPSIS);
    }

    #[test]
    fn test_unknown_style_matches_default() {
        let generator = ContentGenerator::new();
        for seed in 0..20 {
            let mut rng1 = StdRng::seed_from_u64(seed);
            let mut rng2 = StdRng::seed_from_u64(seed);
            assert_eq!(
                generator.generate_article(&mut rng1, "Rust", 300, "haiku").unwrap(),
                generator.generate_article(&mut rng2, "Rust", 300, DEFAULT_STYLE).unwrap(),
            );
        }
    }

    #[test]
    fn test_same_seed_same_article() {
        let generator = ContentGenerator::new();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(
            generator.generate_article(&mut rng1, "Rust", 200, "marketing").unwrap(),
            generator.generate_article(&mut rng2, "Rust", 200, "marketing").unwrap(),
        );
    }

    #[test]
    fn test_output_is_prefix_of_repeated_template() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(99);

        for style in ["technical", "marketing", "unknown"] {
            for length in [5, 120, 700] {
                let article = generator
                    .generate_article(&mut rng, "Computação Quântica", length, style)
                    .unwrap();
                assert!(
                    is_repeated_prefix(&generator, body(&article), "Computação Quântica", style),
                    "{article}"
                );
            }
        }
    }

    #[test]
    fn test_marketing_example() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        let article = generator.generate_article(&mut rng, "X", 10, "marketing").unwrap();

        assert_eq!(article.chars().count(), 13);
        let candidates: Vec<String> = generator
            .catalog()
            .resolve("marketing")
            .templates
            .iter()
            .map(|t| ContentGenerator::fill(t, "X").chars().take(10).collect())
            .collect();
        assert!(candidates.contains(&body(&article).to_string()));
    }

    #[test]
    fn test_every_template_gets_picked() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = std::collections::HashSet::new();

        // Long enough to include the whole first sentence
        for _ in 0..200 {
            let article = generator.generate_article(&mut rng, "T", 60, "technical").unwrap();
            seen.insert(body(&article).to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fill_uses_fixed_fillers() {
        let filled = ContentGenerator::fill(
            "Avanços recentes em {topic} demonstram um potencial significativo para {application}.",
            "IA",
        );
        assert_eq!(
            filled,
            "Avanços recentes em IA demonstram um potencial significativo para aplicações práticas."
        );
    }

    #[test]
    fn test_repeat_wraps_with_space() {
        assert_eq!(repeat_to_length("abc", 9).unwrap(), "abc abc a...");
        assert_eq!(repeat_to_length("abc", 3).unwrap(), "abc...");
        assert_eq!(repeat_to_length("abc", 4).unwrap(), "abc ...");
    }

    #[test]
    fn test_unallocatable_length_is_an_error() {
        let generator = ContentGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);
        let result = generator.generate_article(&mut rng, "X", i64::MAX, "technical");
        assert!(matches!(
            result,
            Err(GenerationError::TooLarge { length: i64::MAX })
        ));
    }

    #[test]
    fn test_capacity_matches_multibyte_output() {
        let article = repeat_to_length("ação", 7).unwrap();
        assert_eq!(article, "ação aç...");
        assert_eq!(article.capacity(), article.len());
    }
}

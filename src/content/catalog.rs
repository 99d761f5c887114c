//! Built-in sentence templates grouped by style

use std::collections::HashMap;

/// Style used when a request names a style the catalog does not know.
pub const DEFAULT_STYLE: &str = "technical";

/// Placeholder filled with the caller's topic.
pub const TOPIC_PLACEHOLDER: &str = "topic";

/// Fixed phrases for every non-topic placeholder, shared by all styles.
pub const FILLERS: &[(&str, &str)] = &[
    ("application", "aplicações práticas"),
    ("concept", "algoritmos complexos"),
    ("methodology", "abordagens iterativas"),
    ("factor", "eficiência de dados"),
    ("processo", "sistemas distribuídos"),
    ("resultado", "o engajamento do cliente"),
    ("publico_alvo", "mercados emergentes"),
    ("desafio", "a competitividade do mercado"),
];

const TECHNICAL: &[&str] = &[
    "Avanços recentes em {topic} demonstram um potencial significativo para {application}.",
    "A implementação de {topic} requer uma compreensão aprofundada de {concept} e {methodology}.",
    "A análise de {topic} revela a importância de {factor} na otimização de {processo}.",
];

const MARKETING: &[&str] = &[
    "Descubra como {topic} pode transformar seu negócio e impulsionar {resultado}.",
    "Maximize seu alcance com estratégias inovadoras de {topic} para {publico_alvo}.",
    "O futuro de {topic} está aqui: soluções personalizadas para {desafio}.",
];

/// Look up the filler phrase for a placeholder name.
pub fn filler(name: &str) -> Option<&'static str> {
    FILLERS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, phrase)| *phrase)
}

/// A style name together with its templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub name: &'static str,
    pub templates: &'static [&'static str],
}

/// Immutable style → templates mapping.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    styles: HashMap<&'static str, &'static [&'static str]>,
    default: ResolvedStyle,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        let styles = HashMap::from([(DEFAULT_STYLE, TECHNICAL), ("marketing", MARKETING)]);

        Self {
            styles,
            default: ResolvedStyle {
                name: DEFAULT_STYLE,
                templates: TECHNICAL,
            },
        }
    }

    pub fn contains(&self, style: &str) -> bool {
        self.styles.contains_key(style)
    }

    /// Known style names, sorted
    pub fn styles(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.styles.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a style name, falling back to [`DEFAULT_STYLE`] for unknown names.
    pub fn resolve(&self, style: &str) -> ResolvedStyle {
        match self.styles.get_key_value(style) {
            Some((name, templates)) => ResolvedStyle {
                name: *name,
                templates: *templates,
            },
            None => self.default,
        }
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::new()
    }
}

use std::collections::{BTreeMap, HashMap};
use std::env;

use config::{Config, File};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// Secret used when `SECRET_KEY` is not provided. Not acceptable outside debug mode.
pub const DEFAULT_SECRET_KEY: &str = "dev-key-change-in-production";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// True unless `FLASK_ENV=production`
    pub debug: bool,
    pub host: String,
    pub port: u16,
    /// Maximum accepted request body, in bytes
    pub max_content_length: usize,
    pub secret_key: String,
    pub testing: bool,
    /// Whether a non-empty `SECRET_KEY` was present in the environment
    #[serde(skip)]
    pub secret_key_from_env: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentConfig {
    pub default_language: String,
    pub max_article_length: usize,
    pub supported_formats: Vec<String>,
    pub content_types: Vec<String>,
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub default_chart_width: u32,
    pub default_chart_height: u32,
    pub supported_file_types: Vec<String>,
    pub max_file_size: usize,
    /// Cache duration in seconds
    pub cache_duration: u64,
    pub visualization_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub rate_limit: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
    pub response_format: String,
    pub cors_origins: Vec<String>,
    pub api_version: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub template_dir: String,
    pub custom_template_dir: String,
    pub allowed_template_extensions: Vec<String>,
    pub template_variables: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Python-style level name: DEBUG, INFO, WARNING, ERROR or CRITICAL
    pub level: String,
    pub format: LogFormat,
    pub file: String,
    pub max_file_size: usize,
    pub backup_count: u32,
}

/// Output shape of the console log layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub echo: bool,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: true,
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_content_length: 16 * 1024 * 1024, // 16MB
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            testing: false,
            secret_key_from_env: false,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_language: "pt-br".to_string(),
            max_article_length: 2000,
            supported_formats: strings(&["html", "markdown", "pdf"]),
            content_types: strings(&[
                "article",
                "blog_post",
                "social_media",
                "report",
                "description",
            ]),
            styles: strings(&["technical", "casual", "formal", "marketing", "academic"]),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_chart_width: 800,
            default_chart_height: 600,
            supported_file_types: strings(&["csv", "xlsx", "json"]),
            max_file_size: 10 * 1024 * 1024, // 10MB
            cache_duration: 300,             // 5 minutes
            visualization_types: strings(&[
                "bar",
                "line",
                "scatter",
                "histogram",
                "pie",
                "heatmap",
            ]),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            rate_limit: "100/hour".to_string(),
            request_timeout: 30,
            response_format: "json".to_string(),
            cors_origins: strings(&["http://localhost:3000", "http://127.0.0.1:3000"]),
            api_version: "v1".to_string(),
        }
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        let template_variables = [
            ("author", "AI Content Generator"),
            ("generator", "AI Content Generator v1.0"),
            ("charset", "UTF-8"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            template_dir: "templates".to_string(),
            custom_template_dir: "custom_templates".to_string(),
            allowed_template_extensions: strings(&[".html", ".jinja2"]),
            template_variables,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            format: LogFormat::default(),
            file: "app.log".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            backup_count: 5,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:///ai_content_generator.db".to_string(),
            echo: false,
        }
    }
}

impl Settings {
    /// Load settings from `.env`, optional `config/` files and the process environment.
    pub fn new() -> Result<Self> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let vars: HashMap<String, String> = env::vars().collect();
        Self::load(&vars, true)
    }

    /// Build settings from defaults plus the given environment, ignoring config files.
    pub fn from_env_map(vars: &HashMap<String, String>) -> Result<Self> {
        Self::load(vars, false)
    }

    fn load(vars: &HashMap<String, String>, with_files: bool) -> Result<Self> {
        let mut builder = Config::builder();

        if with_files {
            let run_mode = vars
                .get("FLASK_ENV")
                .map(String::as_str)
                .unwrap_or("development");
            builder = builder
                .add_source(File::with_name("config/default").required(false))
                .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));
        }

        // Environment variables win over files
        let builder = builder
            .set_override_option(
                "app.debug",
                vars.get("FLASK_ENV").map(|mode| mode != "production"),
            )?
            .set_override_option("app.host", vars.get("FLASK_HOST").cloned())?
            .set_override_option("app.port", vars.get("FLASK_PORT").cloned())?
            .set_override_option("app.secret_key", vars.get("SECRET_KEY").cloned())?
            .set_override_option("logging.level", vars.get("LOG_LEVEL").cloned())?
            .set_override_option("database.url", vars.get("DATABASE_URL").cloned())?
            .set_override_option(
                "database.echo",
                vars.get("DATABASE_ECHO")
                    .map(|echo| echo.eq_ignore_ascii_case("true")),
            )?;

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        settings.app.secret_key_from_env = vars
            .get("SECRET_KEY")
            .is_some_and(|key| !key.is_empty());
        Ok(settings)
    }

    /// All sections consolidated into one JSON object keyed by section name.
    pub fn sections(&self) -> serde_json::Result<Map<String, Value>> {
        let mut sections = Map::new();
        sections.insert("app".to_string(), serde_json::to_value(&self.app)?);
        sections.insert("content".to_string(), serde_json::to_value(&self.content)?);
        sections.insert("analytics".to_string(), serde_json::to_value(&self.analytics)?);
        sections.insert("api".to_string(), serde_json::to_value(&self.api)?);
        sections.insert("template".to_string(), serde_json::to_value(&self.template)?);
        sections.insert("logging".to_string(), serde_json::to_value(&self.logging)?);
        sections.insert("database".to_string(), serde_json::to_value(&self.database)?);
        Ok(sections)
    }

    /// Outside debug mode `SECRET_KEY` must be set in the environment.
    pub fn check(&self) -> Result<()> {
        if !self.app.debug && !self.app.secret_key_from_env {
            return Err(AppError::MissingEnv("SECRET_KEY"));
        }
        Ok(())
    }

    /// Like [`Settings::check`], but reports the failure in the log instead of returning it.
    pub fn validate(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                false
            }
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

mod settings;

pub use settings::{
    AnalyticsConfig, ApiConfig, AppConfig, ContentConfig, DatabaseConfig, LogFormat,
    LoggingConfig, Settings, TemplateConfig, DEFAULT_SECRET_KEY,
};

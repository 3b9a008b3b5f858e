pub mod config;
pub mod export;

pub use config::{AppConfig, GeneratorBackend, GeneratorConfig, ReportConfig, UploadConfig};
pub use export::{
    share_text, ExportDocument, ExportError, ShareMessage, EXPORT_FILE_NAME, SHARE_TITLE,
};

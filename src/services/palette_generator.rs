use async_trait::async_trait;
use color_engine::{assemble, Palette, PaletteError, RawPaletteEntry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use super::PaletteLibrary;
use crate::models::{GeneratorBackend, GeneratorConfig};

/// Palette payload as returned by a generator, before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    pub name: String,
    pub colors: Vec<RawPaletteEntry>,
}

impl GeneratedPalette {
    /// Validate the payload into a palette
    pub fn assemble(&self) -> Result<Palette, PaletteError> {
        assemble(&self.colors)
    }
}

/// Error from a palette generator
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Generation service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Generation service returned status {0}")]
    Status(u16),

    #[error("Generation service returned an empty palette")]
    EmptyPayload,

    #[error("No palettes available")]
    NoPalettes,

    #[error("Generator is misconfigured: {0}")]
    Config(String),
}

/// Trim a prompt, rejecting blank input
pub fn normalize_prompt(prompt: &str) -> Result<&str, GeneratorError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(GeneratorError::EmptyPrompt);
    }
    Ok(trimmed)
}

/// Turns a free-text prompt into a palette payload
#[async_trait]
pub trait PaletteGenerator: Send + Sync {
    /// Generate a palette for an already normalized prompt
    async fn generate(&self, prompt: &str) -> Result<GeneratedPalette, GeneratorError>;

    /// Short backend name for logs and status output
    fn backend(&self) -> &'static str;
}

/// Normalize a prompt and hand it to a generator
pub async fn generate_from_prompt(
    generator: &dyn PaletteGenerator,
    prompt: &str,
) -> Result<GeneratedPalette, GeneratorError> {
    let prompt = normalize_prompt(prompt)?;

    tracing::info!(
        prompt = prompt,
        backend = generator.backend(),
        "Generating palette"
    );

    generator.generate(prompt).await
}

/// Picks the closest palette from the local library
pub struct LibraryGenerator {
    library: Arc<PaletteLibrary>,
}

impl LibraryGenerator {
    pub fn new(library: Arc<PaletteLibrary>) -> Self {
        Self { library }
    }
}

#[async_trait]
impl PaletteGenerator for LibraryGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedPalette, GeneratorError> {
        let (palette, score) = self
            .library
            .best_match(prompt)
            .ok_or(GeneratorError::NoPalettes)?;

        tracing::debug!(palette = %palette.name, score, "Matched prompt against library");

        Ok(GeneratedPalette {
            name: palette.name.clone(),
            colors: palette.colors.clone(),
        })
    }

    fn backend(&self) -> &'static str {
        "library"
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Calls a remote generation service: `POST {prompt}` → `{name, colors}`
pub struct RemoteGenerator {
    client: reqwest::Client,
    url: String,
}

impl RemoteGenerator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PaletteGenerator for RemoteGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedPalette, GeneratorError> {
        let response = self
            .client
            .post(&self.url)
            .json(&GenerateRequest { prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeneratorError::Status(status.as_u16()));
        }

        let generated: GeneratedPalette = response.json().await?;
        if generated.colors.is_empty() {
            return Err(GeneratorError::EmptyPayload);
        }

        tracing::debug!(
            url = %self.url,
            palette = %generated.name,
            colors = generated.colors.len(),
            "Remote generator responded"
        );

        Ok(generated)
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

/// Build the generator selected in config
pub fn generator_from_config(
    config: &GeneratorConfig,
    library: Arc<PaletteLibrary>,
) -> Result<Arc<dyn PaletteGenerator>, GeneratorError> {
    match config.backend {
        GeneratorBackend::Library => Ok(Arc::new(LibraryGenerator::new(library))),
        GeneratorBackend::Remote => {
            let url = config.url.as_deref().ok_or_else(|| {
                GeneratorError::Config("remote backend requires generator.url".to_string())
            })?;
            Ok(Arc::new(RemoteGenerator::new(url, config.timeout())?))
        }
    }
}

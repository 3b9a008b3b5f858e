use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use chromagen::api;
use chromagen::assets::{AssetCategory, AssetLoader};
use chromagen::models::{share_text, AppConfig};
use chromagen::server;
use chromagen::services::{
    generate_from_prompt, generator_from_config, ExtractionService, PaletteLibrary,
};
use color_engine::{assemble, build_report_with_limit, Palette, RawPaletteEntry};

#[derive(Parser)]
#[command(name = "chromagen")]
#[command(about = "ChromaGen - color palette generation and accessibility checks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract a palette from an image file
    Extract {
        /// Image file (PNG, JPEG, WebP, GIF or BMP)
        image: PathBuf,

        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a WCAG contrast report for a palette file
    Report {
        /// Palette JSON: an export file, `{"palette": [...]}` or a bare array
        palette: PathBuf,

        /// Maximum number of checks (defaults to report.limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Generate a palette from a text prompt
    Generate {
        /// Free-text description, e.g. "calm ocean morning"
        prompt: String,

        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract palettes.yaml
        #[arg(long)]
        palettes: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ChromaGen API",
        description = "Color palette generation, image extraction and WCAG accessibility reports",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_generate,
        api::handle_random_palette,
        api::handle_extract,
        api::handle_report,
        api::handle_export,
        api::handle_share,
        api::handle_color,
    ),
    components(schemas(
        api::GenerateRequest,
        api::PaletteResponse,
        api::PaletteEntryDoc,
        api::PaletteRequest,
        api::ReportRequest,
        api::ReportResponse,
        api::ContrastCheckView,
        api::ExtractResponse,
        api::ExtractedColorDoc,
        api::ColorDetails,
        api::RgbView,
        api::HslView,
        api::ErrorBody,
        chromagen::models::ShareMessage,
    )),
    tags(
        (name = "Palettes", description = "Prompt-driven palette generation"),
        (name = "Images", description = "Palette extraction from uploaded images"),
        (name = "Accessibility", description = "WCAG contrast reports"),
        (name = "Export", description = "Palette export and sharing"),
        (name = "Colors", description = "Single color details")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract { image, json }) => run_extract_command(&image, json),
        Some(Commands::Report { palette, limit }) => run_report_command(&palette, limit),
        Some(Commands::Generate { prompt, json }) => run_generate_command(&prompt, json).await,
        Some(Commands::Init {
            config,
            palettes,
            all,
            force,
            list,
        }) => run_init_command(config, palettes, all, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Asset loader with optional external paths from env vars
fn asset_loader_from_env() -> AssetLoader {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let palettes_file = std::env::var("PALETTES_FILE").ok().map(PathBuf::from);
    AssetLoader::new(config_file, palettes_file)
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromagen=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn print_palette(name: &str, palette: &Palette) {
    println!("{name}\n");
    for entry in palette.iter() {
        println!(
            "  {}  {:<10} {}",
            entry.color,
            entry.role.as_str(),
            entry.name
        );
    }
}

/// Extract a palette from an image file (no server needed)
fn run_extract_command(image: &Path, json: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load_from_assets(&asset_loader_from_env());
    let service = ExtractionService::from_config(&config);

    let bytes = std::fs::read(image)?;
    let extracted = service
        .extract_blocking(&bytes)
        .map_err(|e| anyhow::anyhow!("Extraction failed: {e}"))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "palette": extracted.palette,
                "colors": extracted.colors,
            }))?
        );
        return Ok(());
    }

    print_palette(
        &format!(
            "Extracted from {} ({}x{})",
            image.display(),
            extracted.width,
            extracted.height
        ),
        &extracted.palette,
    );
    println!();
    for color in &extracted.colors {
        println!("  {}  {:>8} px", color.color, color.count);
    }

    Ok(())
}

/// Palette file shapes accepted by the report command
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PaletteFile {
    Wrapped { palette: Vec<RawPaletteEntry> },
    Bare(Vec<RawPaletteEntry>),
}

/// Print a contrast report for a palette file
fn run_report_command(path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    init_cli_tracing();

    let config = AppConfig::load_from_assets(&asset_loader_from_env());

    let raw = match serde_json::from_str(&std::fs::read_to_string(path)?)? {
        PaletteFile::Wrapped { palette } | PaletteFile::Bare(palette) => palette,
    };
    let palette = assemble(&raw).map_err(|e| anyhow::anyhow!("Invalid palette: {e}"))?;

    let checks = build_report_with_limit(&palette, limit.unwrap_or(config.report.limit));
    if checks.is_empty() {
        println!("No primary or secondary colors to check.");
        return Ok(());
    }

    println!("Accessibility report for {} colors:\n", palette.len());
    for check in &checks {
        println!(
            "  {} on {}  {:>5.2}:1  {:<8} ({})",
            check.foreground,
            check.background.color,
            check.rounded_ratio(),
            check.level,
            check.background.name
        );
    }

    Ok(())
}

/// Generate a palette with the configured backend
async fn run_generate_command(prompt: &str, json: bool) -> anyhow::Result<()> {
    init_cli_tracing();

    let loader = asset_loader_from_env();
    let config = AppConfig::load_from_assets(&loader);
    let library = std::sync::Arc::new(PaletteLibrary::load(&loader)?);
    let generator = generator_from_config(&config.generator, library)?;

    let generated = generate_from_prompt(generator.as_ref(), prompt).await?;
    let palette = generated.assemble()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "name": generated.name,
                "palette": palette,
            }))?
        );
        return Ok(());
    }

    print_palette(&generated.name, &palette);
    println!("\n{}", share_text(&palette));

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(
    config: bool,
    palettes: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --config or --palettes");
        eprintln!("\nRun 'chromagen init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = asset_loader_from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let palettes_file = std::env::var("PALETTES_FILE").ok();

    println!("ChromaGen v{VERSION}");
    println!("Color palette generation and accessibility checks\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR     = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE   = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTES_FILE = {}",
        palettes_file.as_deref().unwrap_or("(not set)")
    );

    fn source(path: Option<&str>) -> String {
        match path {
            Some(p) if Path::new(p).exists() => p.to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    println!("\nAsset Sources:");
    println!("  Config:   {}", source(config_file.as_deref()));
    println!("  Palettes: {}", source(palettes_file.as_deref()));

    let loader = asset_loader_from_env();
    let config = AppConfig::load_from_assets(&loader);
    match PaletteLibrary::load(&loader) {
        Ok(library) => println!("\nPalette library: {} palettes", library.len()),
        Err(e) => println!("\nPalette library: failed to load ({e})"),
    }
    println!("Generator backend: {:?}", config.generator.backend);

    println!("\nCommands:");
    println!("  chromagen serve      Start the HTTP server");
    println!("  chromagen extract    Extract a palette from an image");
    println!("  chromagen report     Print a contrast report for a palette file");
    println!("  chromagen generate   Generate a palette from a prompt");
    println!("  chromagen init       Extract embedded assets");
    println!("\nRun 'chromagen --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromagen=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let palettes_file = std::env::var("PALETTES_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        palettes = ?palettes_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let asset_loader = AssetLoader::new(config_file, palettes_file);

    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                config = report.config_seeded,
                palettes = report.palettes_seeded,
                "Seeded missing files with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(&asset_loader)?;

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "ChromaGen server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

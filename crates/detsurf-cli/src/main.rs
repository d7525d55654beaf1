//! detsurf CLI — convert and inspect detector surface documents.

use clap::{Args, Parser, Subcommand};
use detsurf::{GeometryContext, GeometryIdentifier, Surface, SurfaceJsonOptions};
use serde_json::Value;
use std::path::{Path, PathBuf};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "detsurf")]
#[command(about = "Convert and inspect detector surface JSON documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-encode surface documents, optionally into the compact dialect.
    Convert(ConvertArgs),

    /// Print one summary line per surface.
    Inspect {
        /// JSON file holding a surface document or an array of them.
        #[arg(long)]
        input: PathBuf,
    },

    /// Print the fields of a geometry identifier.
    GeoId {
        /// Identifier value (decimal or 0x-prefixed hex).
        #[arg(long)]
        value: String,
    },
}

#[derive(Debug, Clone, Args)]
struct ConvertArgs {
    /// JSON file holding a surface document or an array of them.
    #[arg(long)]
    input: PathBuf,

    /// Path to write the converted array (JSON).
    #[arg(long)]
    out: PathBuf,

    /// Write the compact dialect instead of the verbose one.
    #[arg(long)]
    compact: bool,

    /// Mark every surface as a portal (compact dialect).
    #[arg(long)]
    portal: bool,

    /// Drop attached material from verbose output.
    #[arg(long)]
    no_material: bool,

    /// Write identity translation/rotation explicitly.
    #[arg(long)]
    write_identity: bool,

    /// JSON file with base conversion options; flags above are applied on top.
    #[arg(long)]
    options: Option<PathBuf>,
}

impl ConvertArgs {
    fn to_options(&self) -> CliResult<SurfaceJsonOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let data = std::fs::read_to_string(path)?;
                serde_json::from_str(&data)?
            }
            None => SurfaceJsonOptions::default(),
        };
        if self.portal {
            options.portal = true;
        }
        if self.no_material {
            options.write_material = false;
        }
        if self.write_identity {
            options.transform.write_identity = true;
        }
        Ok(options)
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => run_convert(&args),
        Commands::Inspect { input } => run_inspect(&input),
        Commands::GeoId { value } => run_geo_id(&value),
    }
}

// ── shared ─────────────────────────────────────────────────────────────

fn read_documents(path: &Path) -> CliResult<Vec<Value>> {
    tracing::info!("Loading surfaces: {}", path.display());
    let data = std::fs::read_to_string(path)
        .map_err(|e| -> CliError { format!("Failed to read {}: {}", path.display(), e).into() })?;
    let value: Value = serde_json::from_str(&data)?;
    match value {
        Value::Array(docs) => Ok(docs),
        doc @ Value::Object(_) => Ok(vec![doc]),
        _ => Err("expected a surface document or an array of them".into()),
    }
}

/// Decode every document, skipping unsupported shape/bounds combinations.
fn decode_all(docs: &[Value]) -> CliResult<Vec<Surface>> {
    let mut surfaces = Vec::with_capacity(docs.len());
    for (idx, doc) in docs.iter().enumerate() {
        match detsurf::from_json(doc) {
            Ok(Some(surface)) => surfaces.push(surface),
            Ok(None) => tracing::warn!(
                "surface #{}: unsupported combination {} / {}, skipped",
                idx,
                doc["type"],
                doc["bounds"]["type"]
            ),
            Err(e) => return Err(format!("surface #{}: {}", idx, e).into()),
        }
    }
    Ok(surfaces)
}

// ── convert ────────────────────────────────────────────────────────────

fn run_convert(args: &ConvertArgs) -> CliResult<()> {
    let options = args.to_options()?;
    let docs = read_documents(&args.input)?;
    let surfaces = decode_all(&docs)?;
    tracing::info!("Decoded {}/{} surfaces", surfaces.len(), docs.len());

    let gctx = GeometryContext::default();
    let out: Vec<Value> = surfaces
        .iter()
        .map(|s| {
            if args.compact {
                detsurf::to_json_compact(&gctx, s, &options)
            } else {
                detsurf::to_json(&gctx, s, &options)
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&out)?;
    std::fs::write(&args.out, &json)?;
    tracing::info!("Results written to {}", args.out.display());
    Ok(())
}

// ── inspect ────────────────────────────────────────────────────────────

fn run_inspect(input: &Path) -> CliResult<()> {
    let docs = read_documents(input)?;
    let surfaces = decode_all(&docs)?;

    for surface in &surfaces {
        println!("{}", summary_line(surface));
    }
    println!("{} surfaces ({} documents)", surfaces.len(), docs.len());
    Ok(())
}

fn summary_line(surface: &Surface) -> String {
    let bounds = surface
        .bounds()
        .map(|b| b.kind().to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:<16} {:<20} [{}]{}",
        surface.shape_kind().as_str(),
        bounds,
        surface.geometry_id(),
        if surface.material().is_some() {
            " +material"
        } else {
            ""
        }
    )
}

// ── geo-id ─────────────────────────────────────────────────────────────

fn parse_geo_id(value: &str) -> CliResult<GeometryIdentifier> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed
        .map(GeometryIdentifier::new)
        .map_err(|e| -> CliError { format!("invalid identifier '{}': {}", value, e).into() })
}

fn run_geo_id(value: &str) -> CliResult<()> {
    let id = parse_geo_id(value)?;
    println!("value:      {} (0x{:016X})", id.value(), id.value());
    println!("  volume:   {}", id.volume());
    println!("  boundary: {}", id.boundary());
    println!("  layer:    {}", id.layer());
    println!("  approach: {}", id.approach());
    println!("  sensitive: {}", id.sensitive());
    println!("  extra:    {}", id.extra());
    Ok(())
}

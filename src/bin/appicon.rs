use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

const DEFAULT_OUT_DIR: &str = "icon";

#[derive(Parser, Debug)]
#[command(name = "appicon", version)]
struct Cli {
    /// Log debug output (per-icon geometry and writes).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the 32x32, 128x128 and 128x128@2x PNG icons (default).
    Generate(GenerateArgs),
    /// Print the derived geometry of every icon as JSON.
    Geometry,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Existing directory to write the icons into.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Print the SHA-256 of every written file.
    #[arg(long)]
    digest: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            digest: false,
        }
    }
}

#[derive(serde::Serialize)]
struct GeometryEntry {
    name: &'static str,
    geometry: appicon::IconGeometry,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Geometry) => cmd_geometry(),
        None => cmd_generate(GenerateArgs::default()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let written = appicon::generate_default_icons(&args.out_dir)
        .with_context(|| format!("generate icons into '{}'", args.out_dir.display()))?;

    for icon in &written {
        eprintln!("wrote {}", icon.path.display());
    }

    if args.digest {
        for icon in &written {
            println!("{}  {}", file_sha256_hex(&icon.path)?, icon.path.display());
        }
    }

    Ok(())
}

fn cmd_geometry() -> anyhow::Result<()> {
    let mut entries = Vec::with_capacity(appicon::DEFAULT_ICON_SET.len());
    for spec in appicon::DEFAULT_ICON_SET {
        let size = spec.icon_size()?;
        entries.push(GeometryEntry {
            name: spec.name,
            geometry: appicon::IconGeometry::for_size(size),
        });
    }

    let json = serde_json::to_string_pretty(&entries).context("serialize geometry")?;
    println!("{json}");
    Ok(())
}

fn file_sha256_hex(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let digest = sha2::Sha256::digest(&bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    Ok(out)
}

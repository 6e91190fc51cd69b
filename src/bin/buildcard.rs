use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use buildcard::{BuildSpec, CardRole, Engine, EngineConfig, REGISTRY, RenderedCard};

#[derive(Parser, Debug)]
#[command(name = "buildcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the cards of one build as PNG files.
    Render(RenderArgs),
    /// List the registered styles.
    Styles,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input build JSON.
    #[arg(long)]
    build: PathBuf,

    /// Style tag; defaults to the `style` field of the build.
    #[arg(long)]
    style: Option<String>,

    /// Directory the PNG files are written to (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    /// Engine configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the placed-element layout of every card as JSON.
    #[arg(long)]
    dump_layout: bool,

    /// Print resolved font files with the SHA-256 of their bytes.
    #[arg(long)]
    dump_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Styles => {
            cmd_styles();
            Ok(())
        }
    }
}

fn read_build_json(path: &Path) -> anyhow::Result<BuildSpec> {
    let f = File::open(path).with_context(|| format!("open build '{}'", path.display()))?;
    let r = BufReader::new(f);
    let build: BuildSpec = serde_json::from_reader(r).with_context(|| "parse build JSON")?;
    Ok(build)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let config = match path {
        Some(p) => EngineConfig::load(p)?,
        None => EngineConfig::default(),
    };
    Ok(config.with_env_overrides())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut build = read_build_json(&args.build)?;
    let base = args.build.parent().unwrap_or_else(|| Path::new("."));
    build.photo = build.photo.resolved_against(base);
    if build.id.trim().is_empty() {
        build.id = args
            .build
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "build".to_owned());
    }

    let engine = Engine::new(load_config(args.config.as_deref())?);
    if args.dump_fonts {
        dump_font_diagnostics(&engine);
    }

    let tag = args.style.as_deref().unwrap_or(&build.style);
    let cards = engine.render_style(tag, &build)?;

    // Encode everything first so a failure leaves no partial output behind.
    let mut files = Vec::with_capacity(cards.len());
    for card in &cards {
        for warning in &card.warnings {
            tracing::warn!(card = card.number, "{warning}");
        }
        let png = card
            .encode_png()
            .with_context(|| format!("encode card {}", card.number))?;
        files.push((args.out_dir.join(file_name(&build.id, card)), png));
    }

    if args.dump_layout {
        let layouts: Vec<_> = cards.iter().map(|c| &c.layout).collect();
        println!("{}", serde_json::to_string_pretty(&layouts)?);
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (path, png) in files {
        std::fs::write(&path, png).with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "wrote card");
    }
    Ok(())
}

fn file_name(id: &str, card: &RenderedCard) -> String {
    match card.role {
        CardRole::Single => format!("pc_card_{id}_{}.png", card.style),
        CardRole::Series(_) => format!("{id}_card_{}.png", card.number),
    }
}

fn cmd_styles() {
    for entry in &REGISTRY {
        println!(
            "{:<8} {:<16} {} card(s)",
            entry.tag_str,
            entry.title,
            entry.card_count()
        );
    }
}

fn dump_font_diagnostics(engine: &Engine) {
    eprintln!("font diagnostics:");
    for font in engine.resolved_fonts() {
        let weight = if font.bold { "bold" } else { "regular" };
        eprintln!("  {weight}:");
        match (&font.path, &font.bytes) {
            (Some(path), Some(bytes)) => {
                eprintln!("    path:   {}", path.display());
                eprintln!("    sha256: {}", sha256_hex(bytes));
            }
            _ => {
                eprintln!("    path:   <built-in bitmap font>");
                if let Some(reason) = &font.fallback_reason {
                    eprintln!("    reason: {reason}");
                }
            }
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use shieldmark_check::{check_artwork, has_errors, Severity};
use shieldmark_core::{contoso_shield, GroupIndex, Point};
use shieldmark_io::{load_artwork, write_surface};
use shieldmark_raster::renderer::{DEFAULT_DEST_HEIGHT, DEFAULT_DEST_WIDTH};
use shieldmark_raster::{LogoRenderer, Surface};

#[derive(Parser, Debug)]
#[command(name = "markgen", about = "Render and inspect the Contoso shield logo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the logo to a PNG file
    Render {
        /// Output file
        #[arg(long, default_value = "logo.png")]
        out: PathBuf,

        /// Target surface width in pixels
        #[arg(long, default_value_t = DEFAULT_DEST_WIDTH)]
        width: u32,

        /// Target surface height in pixels
        #[arg(long, default_value_t = DEFAULT_DEST_HEIGHT)]
        height: u32,

        /// Only draw the first N shape groups
        #[arg(long)]
        groups: Option<usize>,
    },

    /// List the shape groups whose bounds cover a point, in artwork coordinates
    Inspect { x: f64, y: f64 },

    /// Validate an artwork JSON file
    Check {
        /// Artwork file to validate
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            out,
            width,
            height,
            groups,
        } => render(&out, width, height, groups),
        Command::Inspect { x, y } => inspect(x, y),
        Command::Check { file } => check(&file),
    }
}

fn render(out: &PathBuf, width: u32, height: u32, groups: Option<usize>) -> anyhow::Result<()> {
    let renderer = LogoRenderer::default().with_dest_rect(0, 0, width, height);
    let mut target = Surface::new(width, height);
    match groups {
        Some(n) => renderer.render_prefix(&mut target, n)?,
        None => renderer.render(&mut target)?,
    }
    write_surface(out, &target)
        .with_context(|| format!("failed to write {}", out.display()))?;
    println!("wrote {}x{} logo to {}", width, height, out.display());
    Ok(())
}

fn inspect(x: f64, y: f64) -> anyhow::Result<()> {
    let artwork = contoso_shield();
    let index = GroupIndex::from_artwork(&artwork);
    let hits = index.query_point(&Point::new(x, y));
    if hits.is_empty() {
        println!("({x}, {y}): no group bounds cover this point");
        return Ok(());
    }
    for i in hits {
        let group = &artwork.groups()[i];
        println!(
            "({x}, {y}): group {} {:?} fill {}",
            i,
            group.name,
            group.fill.to_hex()
        );
    }
    Ok(())
}

fn check(file: &PathBuf) -> anyhow::Result<()> {
    let artwork =
        load_artwork(file).with_context(|| format!("failed to load {}", file.display()))?;
    let violations = check_artwork(&artwork);
    for v in &violations {
        let tag = match v.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        match v.group_index {
            Some(i) => println!("{tag}: [group {i}] {}", v.message),
            None => println!("{tag}: {}", v.message),
        }
    }
    if has_errors(&violations) {
        bail!("{} violation(s) found in {}", violations.len(), file.display());
    }
    println!(
        "{}: {} group(s), no errors",
        file.display(),
        artwork.group_count()
    );
    Ok(())
}

mod provenance;
mod template;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fimd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Provenance};
use template::{render, Context as TemplateContext, DEFAULT_TEMPLATE};

#[derive(Parser)]
#[command(name = "fimd-gen")]
#[command(about = "Generate fixed-radius marker detectors from circle pixel orders")]
struct Cmd {
    /// Log at DEBUG and print pixel grids
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render a detector source file for one radius
    Generate {
        #[arg(short, long, allow_negative_numbers = true)]
        radius: i32,
        /// Template file (built-in CPU detector template when omitted)
        #[arg(short, long)]
        template: Option<PathBuf>,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the ASCII grid of boundary and interior pixels
    Show {
        #[arg(short, long, allow_negative_numbers = true)]
        radius: i32,
        #[arg(long, value_enum, default_value_t = OrderKind::Evaluation)]
        order: OrderKind,
    },
    /// Print radius, boundary order and canonical interior as JSON
    Points {
        #[arg(short, long, allow_negative_numbers = true)]
        radius: i32,
    },
    /// Check a generated file against its provenance sidecar
    Verify {
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrderKind {
    /// Rasterizer output as generated
    Generation,
    /// Farthest-point boundary and canonical interior
    Evaluation,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Generate {
            radius,
            template,
            output,
        } => generate(radius, template.as_deref(), &output, cmd.verbose),
        Action::Show { radius, order } => show(radius, order),
        Action::Points { radius } => points(radius),
        Action::Verify { output } => verify(&output),
    }
}

fn generate(radius: i32, template: Option<&Path>, output: &Path, verbose: bool) -> Result<()> {
    tracing::info!(radius, template = ?template, output = %output.display(), "generate");
    let template_text = match template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let raster = rasterize_circle(radius, Pixel::ORIGIN)?;
    tracing::debug!(
        boundary = raster.boundary.len(),
        interior = raster.interior.len(),
        "rasterized"
    );
    if verbose {
        print_grid("Generated circle", &raster.boundary, &raster.interior)?;
    }

    let plan = Plan::from_raster(&raster)?;
    tracing::debug!(
        boundary = plan.boundary.len(),
        interior = plan.interior.len(),
        "evaluation order"
    );
    if verbose {
        print_grid("Pixel evaluation order", &plan.boundary, &plan.interior)?;
    }

    let code = render(&template_text, &TemplateContext::from(&plan))
        .with_context(|| match template {
            Some(path) => format!("rendering template {}", path.display()),
            None => "rendering built-in template".to_string(),
        })?;
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(output, &code).with_context(|| format!("writing {}", output.display()))?;

    let template_name = template
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "builtin:fimd_cpu.c.tmpl".to_string());
    let record = Provenance::new(&plan, &template_name, &code);
    let prov_path = write_sidecar(output, &record)?;
    tracing::info!(provenance = %prov_path.display(), blake3 = %record.source_blake3, "wrote provenance");

    println!(
        "[fimd-gen] Finished: Radius: {:4}, Boundary length: {:4}, Interior length: {:4} | Written as: {}",
        plan.radius,
        plan.boundary.len(),
        plan.interior.len(),
        output.display()
    );
    Ok(())
}

fn show(radius: i32, order: OrderKind) -> Result<()> {
    tracing::info!(radius, order = ?order, "show");
    let raster = rasterize_circle(radius, Pixel::ORIGIN)?;
    match order {
        OrderKind::Generation => print_grid("Generated circle", &raster.boundary, &raster.interior),
        OrderKind::Evaluation => {
            let plan = Plan::from_raster(&raster)?;
            print_grid("Pixel evaluation order", &plan.boundary, &plan.interior)
        }
    }
}

fn points(radius: i32) -> Result<()> {
    tracing::info!(radius, "points");
    let plan = plan(radius)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn verify(output: &Path) -> Result<()> {
    tracing::info!(output = %output.display(), "verify");
    let record = provenance::verify(output)?;
    println!(
        "[fimd-gen] Verified: Radius: {:4}, Boundary length: {:4}, Interior length: {:4} | {}",
        record.radius,
        record.boundary_len,
        record.interior_len,
        output.display()
    );
    Ok(())
}

fn print_grid(title: &str, boundary: &[Pixel], interior: &[Pixel]) -> Result<()> {
    let rendering = render_ascii(boundary, interior)?;
    println!("\n{title}:");
    println!("-- Boundary points: {}", boundary.len());
    println!("-- Interior points: {}", interior.len());
    print!("{}", rendering.text);
    if rendering.collisions > 0 {
        tracing::warn!(collisions = rendering.collisions, "duplicate coordinates in pixel grid");
    }
    Ok(())
}

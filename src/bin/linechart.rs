use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use linechart::capabilities::Capabilities;
use linechart::{DataView, LineChartVisual, UpdateOptions, UpdateOutcome, Visual, VisualHost};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "linechart",
    version,
    about = "Render the line chart visual from a data view snapshot"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a data view (or full update options) JSON file to SVG.
    Render(RenderArgs),
    /// Print the visual's capabilities JSON.
    Capabilities,
    /// Print the editable properties of a formatting object.
    Objects(ObjectsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON file holding a data view or `{ "dataViews": [...], "viewport": {...} }`.
    #[arg(short, long)]
    data: PathBuf,
    /// Output SVG path.
    #[arg(short, long)]
    out: PathBuf,
    /// Viewport width; overrides the file's viewport (default 800).
    #[arg(long)]
    width: Option<f64>,
    /// Viewport height; overrides the file's viewport (default 600).
    #[arg(long)]
    height: Option<f64>,
}

#[derive(Args, Debug)]
struct ObjectsArgs {
    /// JSON file holding a data view or full update options.
    #[arg(short, long)]
    data: PathBuf,
    /// Object name: dataPoint or line.
    object: String,
}

/// Host stand-in that reports warnings on stderr.
struct StderrHost;

impl VisualHost for StderrHost {
    fn display_warning_icon(&mut self, title: &str, detail: &str) {
        eprintln!("warning: {title}: {detail}");
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Capabilities => {
            println!("{}", serde_json::to_string_pretty(&Capabilities::line_chart())?);
            Ok(())
        }
        Command::Objects(args) => cmd_objects(args),
    }
}

/// Accept either a bare data view or full update options.
fn load_update(path: &Path) -> Result<UpdateOptions> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: Value =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    let options = if doc.get("dataViews").is_some() {
        serde_json::from_value(doc)?
    } else {
        let view: DataView = serde_json::from_value(doc)?;
        UpdateOptions {
            data_views: vec![view],
            ..UpdateOptions::default()
        }
    };
    Ok(options)
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let mut options = load_update(&args.data)?;
    if let Some(w) = args.width {
        options.viewport.width = w;
    }
    if let Some(h) = args.height {
        options.viewport.height = h;
    }

    let mut visual = LineChartVisual::new(StderrHost);
    match visual.update(&options) {
        UpdateOutcome::Rendered { points } => eprintln!("Rendered {} points", points),
        UpdateOutcome::Empty { reason } => eprintln!("Rendered an empty frame: {}", reason),
    }
    let svg = visual.render_svg()?;
    fs::write(&args.out, svg).with_context(|| format!("writing {}", args.out.display()))?;
    eprintln!("Wrote chart to {}", args.out.display());
    Ok(())
}

fn cmd_objects(args: ObjectsArgs) -> Result<()> {
    let options = load_update(&args.data)?;
    let mut visual = LineChartVisual::new(StderrHost);
    visual.update(&options);
    let instances = visual.enumerate_object_instances(&args.object);
    if instances.is_empty() {
        anyhow::bail!("unknown formatting object: {}", args.object);
    }
    println!("{}", serde_json::to_string_pretty(&instances)?);
    Ok(())
}

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use cutout_beam::{Cutout, DeviceTable, EngineConfig, PathSpec, build_path_spec};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cutout-beam", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a cutout described in a JSON file and print the path spec as JSON.
    Trace(TraceArgs),
    /// Trace the cutout of a known device.
    Device(DeviceArgs),
    /// List known device identifiers.
    Devices(TableArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Engine config JSON (defaults apply for missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Offset of the traced boundary from the physical cutout.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    padding: f64,

    /// Override canvas bleed.
    #[arg(long)]
    bleed: Option<f64>,

    /// Do not emit a directional glow mask.
    #[arg(long)]
    no_glow: bool,
}

#[derive(Args, Debug)]
struct TraceArgs {
    /// Cutout JSON, e.g. {"type":"island","x":134,"y":11,"width":125,"height":37}.
    #[arg(long)]
    cutout: PathBuf,

    /// Override usable screen width.
    #[arg(long)]
    screen_width: Option<f64>,

    #[command(flatten)]
    engine: EngineArgs,
}

#[derive(Args, Debug)]
struct TableArgs {
    /// Device table JSON overlaid on the built-in table.
    #[arg(long)]
    table: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// Device identifier, e.g. "iPhone15,2".
    #[arg(long)]
    id: String,

    #[command(flatten)]
    table: TableArgs,

    #[command(flatten)]
    engine: EngineArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Device(args) => cmd_device(args),
        Command::Devices(args) => cmd_devices(args),
    }
}

fn open(path: &Path, what: &str) -> anyhow::Result<BufReader<File>> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    Ok(BufReader::new(f))
}

fn load_config(args: &EngineArgs) -> anyhow::Result<EngineConfig> {
    let mut cfg = match &args.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(bleed) = args.bleed {
        cfg = cfg.with_bleed(bleed);
    }
    if args.no_glow {
        cfg = cfg.with_directional_glow(false);
    }
    Ok(cfg)
}

fn load_table(args: &TableArgs) -> anyhow::Result<DeviceTable> {
    let mut table = DeviceTable::builtin();
    if let Some(path) = &args.table {
        let overlay = DeviceTable::from_json_path(path)
            .with_context(|| format!("load device table '{}'", path.display()))?;
        table.merge(overlay);
    }
    Ok(table)
}

fn emit(spec: Option<PathSpec>) -> anyhow::Result<()> {
    if spec.is_none() {
        eprintln!("nothing to trace for this cutout");
    }
    let json = serde_json::to_string_pretty(&spec).context("serialize path spec")?;
    println!("{json}");
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cutout: Cutout = serde_json::from_reader(open(&args.cutout, "cutout")?)
        .with_context(|| "parse cutout JSON")?;
    let mut cfg = load_config(&args.engine)?;
    if let Some(w) = args.screen_width {
        cfg = cfg.with_screen_width(w);
    }
    cfg.validate()?;

    emit(build_path_spec(&cutout, args.engine.padding, &cfg))
}

fn cmd_device(args: DeviceArgs) -> anyhow::Result<()> {
    let table = load_table(&args.table)?;
    let profile = table.require(&args.id)?;
    let cfg = load_config(&args.engine)?.with_screen_width(profile.screen_width);
    cfg.validate()?;

    emit(build_path_spec(&profile.cutout, args.engine.padding, &cfg))
}

fn cmd_devices(args: TableArgs) -> anyhow::Result<()> {
    let table = load_table(&args)?;
    for id in table.ids() {
        println!("{id}");
    }
    Ok(())
}

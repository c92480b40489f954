use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "brickwork", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a scene: compute a position for every item.
    Solve(SolveArgs),
    /// List the registered layout modes.
    Modes,
}

#[derive(Parser, Debug)]
struct SolveArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output report JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the report.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Solve(args) => cmd_solve(args),
        Command::Modes => cmd_modes(),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<brickwork::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let scene: brickwork::Scene =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    scene.validate()?;
    let report = brickwork::solve(&scene)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match args.out {
        Some(path) => {
            let mut f = File::create(&path)
                .with_context(|| format!("create report '{}'", path.display()))?;
            f.write_all(json.as_bytes())?;
            f.write_all(b"\n")?;
            eprintln!(
                "solved {} items -> {}",
                report.placements.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_modes() -> anyhow::Result<()> {
    for mode in brickwork::StrategyRegistry::default().modes() {
        println!("{mode}");
    }
    Ok(())
}

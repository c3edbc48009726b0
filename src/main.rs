use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;
use whiteboard::export::ExportOptions;
use whiteboard::{Config, Whiteboard, script};

#[derive(Parser, Debug)]
#[command(name = "whiteboard")]
#[command(version, about = "Replay whiteboard gestures and save the board as PNG")]
struct Cli {
    /// Script of replay commands (`-` reads stdin). Without one, a blank board is saved
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Board width in pixels (overrides [board] width)
    #[arg(long, value_name = "N")]
    width: Option<i32>,

    /// Board height in pixels (overrides [board] height)
    #[arg(long, value_name = "N")]
    height: Option<i32>,

    /// Write the final PNG to this exact path (overrides [export])
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Load configuration from this file instead of ~/.config/whiteboard/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// After the replay, print the pixel at X,Y as `X,Y R G B A` (repeatable)
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    probe: Vec<(i32, i32)>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate_and_clamp();

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let source = match &cli.script {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            text
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        None => String::new(),
    };
    let steps = script::parse(&source).context("Invalid script")?;

    let mut options = config.whiteboard_options();
    if let Some(output) = &cli.output {
        options.export = ExportOptions::to_path(output);
    }

    let mut board = Whiteboard::new(config.board.width, config.board.height, options)
        .context("Failed to create board")?;
    log::info!(
        "Board {}x{}, replaying {} commands",
        config.board.width,
        config.board.height,
        steps.len()
    );

    let summary = script::run(&mut board, &steps).context("Script failed")?;
    for path in &summary.saved {
        println!("{}", path.display());
    }

    let path = board.save().context("Failed to save board")?;
    println!("{}", path.display());

    if !cli.probe.is_empty() {
        let frame = board
            .surface()
            .frame()
            .context("Failed to read back board")?;
        for &(x, y) in &cli.probe {
            let px = frame.get(x, y).with_context(|| {
                format!(
                    "Probe {},{} is outside the {}x{} board",
                    x,
                    y,
                    frame.width(),
                    frame.height()
                )
            })?;
            println!("{},{} {} {} {} {}", x, y, px.r, px.g, px.b, px.a);
        }
    }

    Ok(())
}

fn parse_point(value: &str) -> Result<(i32, i32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", value))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| format!("invalid coordinate '{}'", s))
    };
    Ok((coord(x)?, coord(y)?))
}

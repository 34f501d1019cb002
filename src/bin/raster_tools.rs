//! raster-tools: draw DDA lines and flood fills on a boolean canvas.
//!
//! Commands are applied in order and the result is printed to stdout:
//!
//! ```text
//! raster-tools --width 12 --height 6 --op rect:0,0,12,6 --op line:0,0,11,5 --op fill:8,1
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use raster_tools::command::Command;
use raster_tools::config::Config;
use raster_tools::debug;
use raster_tools::editor::Editor;
use raster_tools::output::{PngEncoder, TerminalEncoder, TerminalMode};
use raster_tools::raster::RecursionMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// One character per pixel
    Ascii,
    /// Unicode half blocks, two rows per line
    HalfBlock,
}

impl From<ModeArg> for TerminalMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Ascii => TerminalMode::Ascii,
            ModeArg::HalfBlock => TerminalMode::UnicodeHalfBlock,
        }
    }
}

/// raster-tools: DDA lines and flood fills on a boolean canvas
#[derive(Parser, Debug)]
#[command(name = "raster-tools")]
#[command(version)]
#[command(about = "Draw DDA lines and flood fills on a boolean canvas", long_about = None)]
struct Cli {
    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width, overrides the config
    #[arg(long)]
    width: Option<i32>,

    /// Canvas height, overrides the config
    #[arg(long)]
    height: Option<i32>,

    /// Drawing command: line:x0,y0,x1,y1 | fill:x,y | rfill:x,y | rect:x,y,w,h
    #[arg(short, long = "op", value_name = "COMMAND")]
    ops: Vec<String>,

    /// Run the recursive fill on an explicit stack
    #[arg(long)]
    explicit_stack: bool,

    /// Terminal rendering mode, overrides the config
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Swap set and unset characters in the terminal output
    #[arg(long)]
    invert: bool,

    /// Also write the canvas to a PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Log to stderr (same as RASTER_TOOLS_DEBUG=1)
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        debug::enable();
    } else {
        debug::init_from_env();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if let Some(mode) = cli.mode {
        config.output.mode = mode.into();
    }
    if cli.explicit_stack {
        config.tools.recursion = RecursionMode::ExplicitStack;
    }
    config.validate()?;

    let commands = cli
        .ops
        .iter()
        .map(|op| op.parse::<Command>())
        .collect::<raster_tools::Result<Vec<_>>>()?;

    let mut canvas = config.new_canvas()?;
    let status = {
        let mut editor =
            Editor::with_tools(&mut canvas, config.tools.default, config.tools.recursion);
        for command in &commands {
            editor.run(command).with_context(|| format!("failed to run '{command}'"))?;
        }
        editor.status_text()
    };

    TerminalEncoder::from_config(&config.output).invert(cli.invert).print(&canvas);

    if let Some(path) = &cli.png {
        PngEncoder::write_to_file(&canvas, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    eprintln!("{status}");
    Ok(())
}

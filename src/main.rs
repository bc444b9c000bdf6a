//! Interactive console for the toy robot.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use toy_robot::{Game, GameConfig, Grid, PlaceBounds};

const PROMPT: &str = "console> ";

const WELCOME: &str = "Welcome to ToyRobot. To continue, enter one of the following commands :
To place the robot : Place 3,2,North
To move the robot : move
To rotate the robot to the left: left
To rotate the robot to the right: right
To get the current location of the robot: report
To exit : exit";

/// Drive a toy robot around a table from the console.
#[derive(Parser, Debug)]
#[command(name = "toy-robot")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML file with grid bounds and placement rules
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Highest X coordinate on the grid (overrides the config file)
    #[arg(long)]
    max_x: Option<i32>,

    /// Highest Y coordinate on the grid (overrides the config file)
    #[arg(long)]
    max_y: Option<i32>,

    /// Which grid edges PLACE is checked against
    #[arg(long, value_enum)]
    place_bounds: Option<PlaceBoundsArg>,

    /// Log every instruction to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlaceBoundsArg {
    Full,
    UpperOnly,
}

impl From<PlaceBoundsArg> for PlaceBounds {
    fn from(arg: PlaceBoundsArg) -> Self {
        match arg {
            PlaceBoundsArg::Full => PlaceBounds::Full,
            PlaceBoundsArg::UpperOnly => PlaceBounds::UpperOnly,
        }
    }
}

impl Args {
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if self.max_x.is_some() || self.max_y.is_some() {
            let max = config.grid.max();
            config.grid = Grid::new(
                config.grid.min(),
                glam::IVec2::new(self.max_x.unwrap_or(max.x), self.max_y.unwrap_or(max.y)),
            )
            .context("Invalid --max-x/--max-y")?;
        }
        if let Some(place_bounds) = self.place_bounds {
            config.place_bounds = place_bounds.into();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str(if args.verbose { "debug" } else { "warn" })?
        .log_to_stderr()
        .start()?;

    let config = args.resolve_config()?;
    log::info!("Starting toy robot on {:?}", config.grid);

    Console::new(Game::new(config)).run()
}

/// The read/print loop. Blank lines are ignored; `exit`, `y` or `n` ask for
/// confirmation before quitting.
struct Console<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    fn new(game: Game) -> Self {
        Self {
            game,
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn run(&mut self) -> Result<()> {
        self.print(WELCOME)?;

        while let Some(line) = self.read_line()? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if is_exit_request(line) {
                if self.confirm_exit()? {
                    break;
                }
                continue;
            }

            let result = self.game.process(line);
            self.print(result.text())?;
        }

        log::info!("Shutting down.");
        Ok(())
    }

    fn confirm_exit(&mut self) -> Result<bool> {
        self.print("Are you sure you want to exit? Type Y / N")?;
        Ok(match self.read_line()? {
            Some(answer) => answer.trim().eq_ignore_ascii_case("y"),
            None => true,
        })
    }

    /// Shows the prompt and reads one line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print(&mut self, message: &str) -> Result<()> {
        if !message.is_empty() {
            writeln!(self.output, "{message}")?;
            writeln!(self.output)?;
        }
        Ok(())
    }
}

fn is_exit_request(line: &str) -> bool {
    ["exit", "y", "n"]
        .iter()
        .any(|word| line.eq_ignore_ascii_case(word))
}

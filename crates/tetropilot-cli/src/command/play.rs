use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use tetropilot_engine::{Board, PieceSource, RandomPieceSource, ReplayPieceSource};
use tetropilot_evaluator::{FeatureWeights, GameSession};

use crate::util::{self, Output};

const DEFAULT_COLUMNS: usize = 10;
const DEFAULT_ROWS: usize = 20;
const DEFAULT_TURNS: usize = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board width in columns
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    /// Board height in rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Maximum number of pieces to play
    #[arg(long, default_value_t = DEFAULT_TURNS)]
    turns: usize,
    /// Seed for the random piece sequence
    #[arg(long, conflicts_with = "replay")]
    seed: Option<u64>,
    /// Fixed piece sequence to play instead of random pieces, e.g. "IJLOSTZ"
    #[arg(long)]
    replay: Option<String>,
    /// Weights JSON file (defaults to the built-in tuned weights)
    #[arg(long)]
    weights: Option<PathBuf>,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Report output path (defaults to stdout)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            turns: DEFAULT_TURNS,
            seed: None,
            replay: None,
            weights: None,
            json: false,
            output: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct PlayReport {
    columns: usize,
    rows: usize,
    turns_played: usize,
    rows_completed: usize,
    game_over: bool,
    board: Board,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let weights = match &arg.weights {
        Some(path) => util::read_json_file("weights", path)?,
        None => FeatureWeights::default(),
    };
    let board = Board::new(arg.columns, arg.rows)?;

    let (piece_source, turn_limit): (Box<dyn PieceSource>, usize) = match &arg.replay {
        Some(chars) => {
            let source = ReplayPieceSource::from_chars(chars)
                .with_context(|| format!("Invalid piece character in replay sequence: {chars}"))?;
            let turn_limit = arg.turns.min(source.remaining());
            (Box::new(source), turn_limit)
        }
        None => {
            let source = match arg.seed {
                Some(seed) => RandomPieceSource::from_seed(seed),
                None => RandomPieceSource::new(),
            };
            (Box::new(source), arg.turns)
        }
    };

    let mut session = GameSession::new(board, weights, piece_source);
    let turns_played = session.play(turn_limit);

    let report = PlayReport {
        columns: arg.columns,
        rows: arg.rows,
        turns_played,
        rows_completed: session.rows_completed(),
        game_over: session.state().is_game_over(),
        board: session.board().clone(),
    };

    let mut output = Output::from_output_path(arg.output.clone())?;
    if arg.json {
        output.write_json(&report)?;
    } else {
        write_text_report(&mut output, &report)?;
    }
    Ok(())
}

fn write_text_report(output: &mut Output, report: &PlayReport) -> anyhow::Result<()> {
    use std::io::Write as _;

    let ending = if report.game_over {
        "game over"
    } else {
        "turn limit reached"
    };
    writeln!(
        output,
        "Played {} pieces on a {}x{} board, cleared {} rows ({ending})",
        report.turns_played, report.columns, report.rows, report.rows_completed,
    )?;
    for y in (0..report.board.num_rows()).rev() {
        let line: String = (0..report.board.num_columns())
            .map(|x| {
                if report.board.is_cell_occupied(x, y) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(output, "{line}")?;
    }
    Ok(())
}

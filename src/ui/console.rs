//! Line-based console: one prompt per turn on stdout, complaints on stderr.

use std::io::{self, BufRead, Stderr, Stdout, StdinLock, Write};

use tracing::debug;

use super::Presentation;
use crate::error::InputError;
use crate::game::{Action, Board, GameResult, InputSource, Player, Renderer, TurnEvent, COLS};

/// Interpret one line of input.
///
/// A leading integer (optionally signed) is a column; anything after it is
/// ignored. Otherwise `q`/`Q` quits and any other text is unrecognized.
/// Returns `None` for blank lines.
pub fn parse_action(line: &str) -> Option<Action> {
    let text = line.trim_start();
    let first = text.chars().next()?;

    let sign_len = usize::from(first == '+' || first == '-');
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits > 0 {
        return Some(match text[..sign_len + digits].parse::<i64>() {
            Ok(column) => Action::Play(column),
            // Too large to be any column
            Err(_) => Action::Unrecognized,
        });
    }

    Some(match first {
        'q' | 'Q' => Action::Quit,
        _ => Action::Unrecognized,
    })
}

fn column_numbers() -> String {
    let mut line: String = (1..=COLS).map(|col| format!("  {col} ")).collect();
    line.push('\n');
    line
}

fn separator() -> String {
    let mut line = String::from("+");
    line.push_str(&"---+".repeat(COLS));
    line.push('\n');
    line
}

/// Draw the full grid, top row first, framed by column numbers.
pub fn render_grid(board: &Board, presentation: &Presentation) -> String {
    let mut grid = String::from("\n");
    grid.push_str(&column_numbers());
    grid.push_str(&separator());

    for row in board.rows() {
        grid.push('|');
        for &cell in row {
            grid.push_str(&format!(" {} |", presentation.cell_symbol(cell)));
        }
        grid.push('\n');
        grid.push_str(&separator());
    }

    grid.push_str(&column_numbers());
    grid
}

/// Console front end over any reader and pair of writers.
pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
    presentation: Presentation,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    /// Console bound to the process's standard streams
    pub fn stdio(presentation: Presentation) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr(), presentation)
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E, presentation: Presentation) -> Self {
        Console {
            input,
            out,
            err,
            presentation,
        }
    }

    /// Give back the writers, e.g. to inspect captured output
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<R: BufRead, W: Write, E: Write> InputSource for Console<R, W, E> {
    fn next_action(&mut self, player: Player) -> Result<Action, InputError> {
        write!(self.out, "Play {}: ", player.number())?;
        self.out.flush()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(InputError::Closed);
            }
            let line = String::from_utf8_lossy(&buf);
            if let Some(action) = parse_action(&line) {
                debug!(player = player.number(), ?action, "input");
                return Ok(action);
            }
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Renderer for Console<R, W, E> {
    fn show_board(&mut self, board: &Board) -> io::Result<()> {
        self.out
            .write_all(render_grid(board, &self.presentation).as_bytes())?;
        self.out.flush()
    }

    fn reject(&mut self, _player: Player, _event: &TurnEvent) -> io::Result<()> {
        writeln!(self.err, "You cannot play at this location.")
    }

    fn announce(&mut self, result: GameResult) -> io::Result<()> {
        if let Some(text) = self.presentation.announcement(result) {
            writeln!(self.out, "{text}")?;
        }
        self.out.flush()
    }
}

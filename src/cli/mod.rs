//! Text interface: command parsing and board rendering.
//!
//! Everything here is a thin wrapper over the session; no game rules live
//! in this module. The input layer also owns the *upper* dimension bound
//! (the core only clamps the lower one).

use std::str::FromStr;

use crate::core::{Board, Cell, Piece};

/// Largest board dimension the interface accepts.
pub const MAX_DIM: usize = 12;

/// A parsed user command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the command summary.
    Help,
    /// Clear the board, keeping its dimensions.
    Reset,
    /// Start over on a `width x height` board.
    Resize { width: usize, height: usize },
    /// Rewind the last player/computer move pair.
    Undo,
    /// Exit the game.
    Quit,
    /// Place the player's piece on a square.
    Move(usize),
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or("empty input")?;

        let command = match head {
            "help" => Command::Help,
            "reset" => Command::Reset,
            "undo" => Command::Undo,
            "quit" => Command::Quit,
            "resize" => {
                let width = parse_dimension(words.next(), "width")?;
                let height = parse_dimension(words.next(), "height")?;
                Command::Resize { width, height }
            }
            number => {
                let index = number.parse::<usize>().map_err(|_| {
                    format!("'{number}' is not a command or square number; type 'help'")
                })?;
                Command::Move(index)
            }
        };

        if words.next().is_some() {
            return Err(format!("trailing input after '{head}'; type 'help'"));
        }
        Ok(command)
    }
}

fn parse_dimension(word: Option<&str>, name: &str) -> Result<usize, String> {
    let word = word.ok_or_else(|| format!("resize needs a {name}, e.g. 'resize 4 4'"))?;
    let value = word
        .parse::<usize>()
        .map_err(|_| format!("'{word}' is not a valid {name}"))?;
    if value > MAX_DIM {
        return Err(format!("{name} {value} is too large (max {MAX_DIM})"));
    }
    Ok(value)
}

/// Render the board as an ASCII grid.
///
/// Occupied squares show the piece, empty squares show their index so the
/// user knows what number to type.
#[must_use]
pub fn render(board: &Board) -> String {
    let cell_width = digits(board.len() - 1).max(1);
    let mut out = String::new();

    for row in 0..board.height() {
        rule_line(&mut out, board.width(), cell_width);
        for col in 0..board.width() {
            let index = row * board.width() + col;
            let text = match board.cell(index) {
                Some(Cell::Occupied(piece)) => piece.to_string(),
                _ => index.to_string(),
            };
            out.push_str("| ");
            out.push_str(&format!("{text:>cell_width$} "));
        }
        out.push_str("|\n");
    }
    rule_line(&mut out, board.width(), cell_width);
    out
}

fn rule_line(out: &mut String, width: usize, cell_width: usize) {
    // One '-' per border char of a row: width cells of (2 + cell_width + 1)
    // plus the closing '|'.
    let len = width * (cell_width + 3) + 1;
    out.extend(std::iter::repeat('-').take(len));
    out.push('\n');
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// The command summary shown on `help` and at startup.
#[must_use]
pub fn help_text() -> String {
    format!(
        "You play '{x}' against the computer's '{o}', and you move first.\n\
         A full row, column, or top-to-bottom diagonal wins; diagonals may\n\
         wrap around the left and right edges.\n\
         \n\
         Commands:\n\
         \x20   help          print this help\n\
         \x20   (0-N)         place your piece on that square\n\
         \x20   reset         restart the game on the same board\n\
         \x20   resize W H    restart on a W x H board (3-{max} each)\n\
         \x20   undo          rewind your last move and the computer's reply\n\
         \x20   quit          exit the game\n",
        x = Piece::Player,
        o = Piece::Computer,
        max = MAX_DIM,
    )
}

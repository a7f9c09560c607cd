mod options;

use std::io::{BufRead, Stdin, StdinLock, Stdout, Write};

use rand::Rng;

use crate::prelude::*;

pub use options::ConsoleOptions;

const INSTRUCTIONS: [&str; 2] = ["Type the column number you want to drop", "your piece into. Get 4 in a row and you win!"];

// Boards at least this wide centre the size line over the board; the instructions
// are only centred on boards wider than this.
const WIDE_BOARD: usize = 10;

// Indent of the first instruction line on narrower boards.
const INSTRUCTION_INDENT: usize = 2;

/// Raised when the human asks to leave, or stdin closes, in the middle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("the player left the game")]
pub struct Quit;

/// The terminal front end: prompts on one stream, draws on the other.
pub struct Console<R: BufRead, W: Write> {
    input: ConsoleInput<R, W>,
    view: ConsoleView<W>,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console over the process's standard streams.
    pub fn stdio() -> Console<StdinLock<'static>, Stdout> {
        let stdin: Stdin = std::io::stdin();
        Console::new(stdin.lock(), std::io::stdout(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, prompts: W, view: W) -> Console<R, W> {
        Console { input: ConsoleInput { reader, writer: prompts }, view: ConsoleView { writer: view } }
    }

    /// Plays games until the human declines a rematch or quits.
    pub fn run<G: Rng + ?Sized>(&mut self, session: &mut GameSession, rng: &mut G) -> Result<()> {
        self.view.banner(session.board())?;

        loop {
            match session.play(&mut self.input, &mut self.view, rng) {
                | Ok(_) => self.view.scoreboard(session)?,
                | Err(err) if err.is::<Quit>() => {
                    log::info!("{} left mid-game", session.player().participant.label());
                    break;
                },
                | Err(err) => return Err(err),
            }

            if !self.input.play_again()? {
                break;
            }
            session.reset();
        }

        self.view.farewell(session)
    }

    /// Releases the prompt and view streams.
    pub fn into_writers(self) -> (W, W) {
        (self.input.writer, self.view.writer)
    }
}

/// Reads the human's columns, re-prompting until one is usable.
struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Reads a trimmed line, or `None` once the stream is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        match self.reader.read_line(&mut line)? {
            | 0 => Ok(None),
            | _ => Ok(Some(line.trim().to_lowercase())),
        }
    }

    fn play_again(&mut self) -> Result<bool> {
        loop {
            write!(self.writer, "Play again? [y/n] ")?;
            self.writer.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match answer.as_str() {
                | "y" | "yes" => return Ok(true),
                | "n" | "no" | "q" | "quit" | "exit" => return Ok(false),
                | _ => writeln!(self.writer, "Please answer y or n.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn choose_column(&mut self, board: &Board, piece: Piece) -> Result<usize> {
        loop {
            write!(self.writer, "{} {piece}, choose a column (1-{}): ", piece.glyph(), board.width())?;
            self.writer.flush()?;

            let command = self.read_line()?.ok_or(Quit)?;
            match command.as_str() {
                | "" => continue,
                | "help" | "h" => writeln!(self.writer, "{}", instructions(board.width()))?,
                | "quit" | "q" | "exit" => return Err(Quit.into()),
                | _ => match parse_column(&command, board) {
                    Ok(column) => return Ok(column),
                    Err(err) => {
                        log::warn!("rejected column input {command:?}: {err}");
                        writeln!(self.writer, "{err}")?;
                    },
                },
            }
        }
    }
}

/// Converts a 1-based column label into a playable 0-based column.
pub fn parse_column(text: &str, board: &Board) -> Result<usize> {
    let label = text.parse::<usize>().map_err(|_| anyhow!("{text:?} is not a column number; type help for instructions"))?;
    if label == 0 || label > board.width() {
        return Err(anyhow!("there is no column {label}; pick one from 1 to {}", board.width()));
    }
    let column = label - 1;
    if !board.has_space(column) {
        return Err(anyhow!("column {label} is full; pick another"));
    }
    Ok(column)
}

/// The two instruction lines: centred over boards wider than ten columns, otherwise
/// with only the first line indented.
pub fn instructions(width: usize) -> String {
    let [first, second] = INSTRUCTIONS;
    match width > WIDE_BOARD {
        true => format!("{}{first}\n{}{second}", " ".repeat(centring(width, first)), " ".repeat(centring(width, second))),
        _    => format!("{}{first}\n{second}", " ".repeat(INSTRUCTION_INDENT))
    }
}

/// Left padding that centres `text` over a board of `width` columns.
fn centring(width: usize, text: &str) -> usize {
    (width * 4 + 1).saturating_sub(text.chars().count()) / 2
}

/// Draws boards and game events.
struct ConsoleView<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleView<W> {
    fn banner(&mut self, board: &Board) -> Result<()> {
        writeln!(self.writer, "\n{}\n", instructions(board.width()))?;
        if board.height() != DEFAULT_HEIGHT || board.width() != DEFAULT_WIDTH {
            let size = format!("Starting the game with a board of {}x{}", board.height(), board.width());
            let pad = match board.width() >= WIDE_BOARD {
                true => centring(board.width(), &size),
                _    => 0
            };
            writeln!(self.writer, "{}{size}", " ".repeat(pad))?;
        }
        Ok(())
    }

    fn scoreboard(&mut self, session: &GameSession) -> Result<()> {
        let (player, computer) = (session.player(), session.computer());
        writeln!(
            self.writer,
            "Score after {} game(s): {} {}, {} {}, draws {}",
            session.games_played(),
            player.participant.label(),
            player.score,
            computer.participant.label(),
            computer.score,
            session.draws()
        )?;
        Ok(())
    }

    fn farewell(&mut self, session: &GameSession) -> Result<()> {
        writeln!(self.writer, "Thanks for playing, {}!", session.player().participant.label())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for ConsoleView<W> {
    fn render(&mut self, board: &Board, highlight: Option<usize>) -> Result<()> {
        writeln!(self.writer, "{}\n", board.pretty(highlight))?;
        self.writer.flush()?;
        Ok(())
    }

    fn event(&mut self, event: &GameEvent<'_>) -> Result<()> {
        match event {
            | GameEvent::Started { first } => {
                writeln!(self.writer, "{} ({}) goes first.", first.label(), first.piece().glyph())?;
            },
            | GameEvent::Moved { participant, column, .. } if participant.is_computer() => {
                writeln!(self.writer, "{} drops into column {}.", participant.label(), column + 1)?;
            },
            | GameEvent::Moved { .. } => {},
            | GameEvent::Finished { winner: Some(winner), .. } => {
                writeln!(self.writer, "{} ({}) wins!", winner.label(), winner.piece().glyph())?;
            },
            | GameEvent::Finished { winner: None, .. } => writeln!(self.writer, "The board is full. It's a draw!")?,
        }
        Ok(())
    }
}

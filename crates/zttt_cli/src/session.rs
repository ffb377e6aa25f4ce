//! Terminal game loops.
//!
//! Each loop reads moves line by line from `input` and writes the board and
//! prompts to `out`, so the same code serves stdin/stdout and scripted tests.
//! Observer output is queued and flushed after every move.

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tracing::{error, info, instrument};
use zttt::{BoardState, GameError, Indicators, Observers, PvC, PvP, PvcOptions, render};

type Events = Rc<RefCell<Vec<String>>>;

/// A terminal session: the input and output streams plus glyphs.
pub struct Session<R, W> {
    input: R,
    out: W,
    indicators: Indicators,
    events: Events,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given streams.
    pub fn new(input: R, out: W, indicators: Indicators) -> Self {
        Self {
            input,
            out,
            indicators,
            events: Rc::default(),
        }
    }

    /// Consumes the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Observers that announce moves and the result on this session.
    fn observers(&self) -> Observers {
        let moves = Rc::clone(&self.events);
        let finish = Rc::clone(&self.events);
        Observers::new()
            .with_on_move(move |player, pos| {
                moves.borrow_mut().push(format!("{player} played {pos}"));
            })
            .with_on_finish(move |outcome| {
                finish.borrow_mut().push(format!("Result: {outcome}"));
            })
    }

    fn flush_events(&mut self) -> Result<()> {
        for line in self.events.borrow_mut().drain(..) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn show(&mut self, board: &BoardState) -> Result<()> {
        write!(self.out, "{}", render(board, &self.indicators))?;
        let empty: Vec<String> = board.empty_positions().iter().map(|p| p.to_string()).collect();
        writeln!(self.out, "Empty positions: [{}]", empty.join(", "))?;
        Ok(())
    }

    fn prompt(&mut self, board: &BoardState) -> Result<String> {
        self.show(board)?;
        write!(self.out, "{}'s move: ", board.turn())?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }
        Ok(line)
    }

    /// Reports a rejected move; the caller re-prompts.
    fn report(&mut self, err: &GameError) -> Result<()> {
        if err.is_recoverable_input() {
            writeln!(self.out, "{err}, try again")?;
        } else {
            error!(%err, "Unexpected failure");
            writeln!(self.out, "Unexpected failure ({err}), please report it")?;
        }
        Ok(())
    }

    fn finish(&mut self, board: &BoardState) -> Result<()> {
        self.flush_events()?;
        write!(self.out, "{}", render(board, &self.indicators))?;
        if !board.highlighted().is_empty() {
            let cells: Vec<String> = board.highlighted().iter().map(|p| p.to_string()).collect();
            writeln!(self.out, "Winning line: [{}]", cells.join(", "))?;
        }
        Ok(())
    }

    /// Two players take turns at the prompt.
    #[instrument(skip(self))]
    pub fn run_pvp(&mut self) -> Result<BoardState> {
        let mut game = PvP::with_observers(self.observers());

        while game.board().is_in_progress() {
            let line = self.prompt(game.board())?;
            if let Err(err) = game.play(line.as_str()) {
                self.report(&err)?;
            }
            self.flush_events()?;
        }

        self.finish(game.board())?;
        Ok(game.board().clone())
    }

    /// One player against the engine.
    #[instrument(skip(self))]
    pub fn run_pvc(&mut self, options: PvcOptions) -> Result<BoardState> {
        let mut game = PvC::with_options(options, self.observers())?;
        info!(engine = %game.engine_side(), "Engine game started");
        self.flush_events()?;

        while game.board().is_in_progress() {
            let line = self.prompt(game.board())?;
            if let Err(err) = game.play(line.as_str()) {
                self.report(&err)?;
            }
            self.flush_events()?;
        }

        self.finish(game.board())?;
        Ok(game.board().clone())
    }

    /// Plays random moves for both sides without reading input.
    #[instrument(skip(self))]
    pub fn run_random(&mut self, seed: Option<u64>) -> Result<BoardState> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = PvP::with_observers(self.observers());

        while game.board().is_in_progress() {
            self.show(game.board())?;
            let Some(&pos) = game.board().empty_positions().choose(&mut rng) else {
                bail!("No empty cell left in a live game");
            };
            game.play(pos)?;
            self.flush_events()?;
        }

        self.finish(game.board())?;
        Ok(game.board().clone())
    }
}

use std::io::Write;

use anyhow::Context;
use lightsout_core::*;

use crate::command::Command;

/// Whether the command loop should keep reading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal embedding of a game, owns the engine and picks new grids from a seed.
pub struct Session {
    config: BoardConfig,
    seed: u64,
    scrambled: bool,
    json: bool,
    engine: PlayEngine,
}

impl Session {
    pub fn new(config: BoardConfig, seed: u64, scrambled: bool, json: bool) -> Self {
        let engine = PlayEngine::new(Self::generate(config, seed, scrambled));
        Self {
            config,
            seed,
            scrambled,
            json,
            engine,
        }
    }

    fn generate(config: BoardConfig, seed: u64, scrambled: bool) -> LightGrid {
        log::debug!("seed: {seed}, scrambled: {scrambled}");
        if scrambled {
            ScrambledGridGenerator::new(seed).generate(config)
        } else {
            RandomGridGenerator::new(seed).generate(config)
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> anyhow::Result<Flow> {
        match command {
            Command::Press(coords) => self.press(coords, out)?,
            Command::Hint => self.hint(out)?,
            Command::Solve => self.solve(out)?,
            Command::Restart => {
                self.engine.restart();
                self.show(out)?;
            }
            Command::New => {
                self.seed = self.seed.wrapping_add(1);
                let grid = Self::generate(self.config, self.seed, self.scrambled);
                self.engine.reset(grid);
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn show(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.engine.is_finished() {
            writeln!(out, "You win! Cleared in {} moves.", self.engine.moves())?;
            return Ok(());
        }

        let (rows, cols) = self.engine.size();
        writeln!(out, "{}", self.engine.grid())?;
        writeln!(
            out,
            "{rows}x{cols}, {} lights on, {} moves",
            self.engine.lit_count(),
            self.engine.moves()
        )?;
        Ok(())
    }

    fn press(&mut self, coords: Coord2, out: &mut impl Write) -> anyhow::Result<()> {
        match self.engine.press(coords) {
            Ok(PressOutcome::NoChange) => {
                writeln!(out, "Nothing to flip at {coords:?}")?;
                return Ok(());
            }
            Ok(_) => self.show(out)?,
            Err(GameError::AlreadyEnded) => {
                writeln!(out, "Game already won, type `new` or `restart`")?;
                return Ok(());
            }
            Err(err) => return Err(err).context("Press failed"),
        }

        if self.json {
            let snapshot = serde_json::to_string(&self.engine).context("Could not serialize game")?;
            writeln!(out, "{snapshot}")?;
        }
        Ok(())
    }

    fn hint(&self, out: &mut impl Write) -> anyhow::Result<()> {
        if self.engine.is_finished() {
            writeln!(out, "Game already won")?;
            return Ok(());
        }

        match self.engine.hint() {
            Ok(Some((row, col))) => writeln!(out, "Try row {row}, col {col}")?,
            Ok(None) => writeln!(out, "This board cannot be cleared, type `new`")?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }

    fn solve(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match solve(self.engine.grid()) {
            Ok(Some(plan)) => {
                let presses: Vec<String> = plan
                    .iter_presses()
                    .map(|(row, col)| format!("{row} {col}"))
                    .collect();
                writeln!(out, "{} presses: {}", plan.press_count(), presses.join(", "))?;
            }
            Ok(None) => writeln!(out, "This board cannot be cleared, type `new`")?,
            Err(err) => writeln!(out, "{err}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, command: Command) -> String {
        let mut out = Vec::new();
        session.handle(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pressing_the_only_light_wins() {
        let mut session = Session::new(BoardConfig::new((1, 1), 1.0).unwrap(), 0, false, false);

        let output = run(&mut session, Command::Press((0, 0)));

        assert!(output.contains("You win! Cleared in 1 moves."), "{output}");
        assert!(run(&mut session, Command::Press((0, 0))).contains("already won"));
    }

    #[test]
    fn press_outside_reports_nothing_flipped() {
        let mut session = Session::new(BoardConfig::new((2, 2), 1.0).unwrap(), 0, false, false);

        let output = run(&mut session, Command::Press((7, 7)));

        assert_eq!(output, "Nothing to flip at (7, 7)\n");
        assert_eq!(session.engine().moves(), 0);
    }

    #[test]
    fn hints_lead_to_a_win_on_scrambled_boards() {
        let mut session = Session::new(BoardConfig::new((4, 4), 0.5).unwrap(), 3, true, false);

        for _ in 0..16 {
            let Some(coords) = session.engine().hint().unwrap() else {
                break;
            };
            run(&mut session, Command::Press(coords));
        }

        assert!(session.engine().is_finished());
        assert_eq!(run(&mut session, Command::Hint), "Game already won\n");
    }

    #[test]
    fn new_game_uses_next_seed() {
        let config = BoardConfig::new((5, 5), 0.5).unwrap();
        let mut session = Session::new(config, 10, false, false);

        run(&mut session, Command::New);

        let expected = RandomGridGenerator::new(11).generate(config);
        assert_eq!(session.engine().grid(), &expected);
    }

    #[test]
    fn json_snapshot_follows_each_move() {
        let mut session = Session::new(BoardConfig::new((3, 3), 1.0).unwrap(), 0, false, true);

        let output = run(&mut session, Command::Press((1, 1)));
        let snapshot = output.lines().last().unwrap();
        let engine: PlayEngine = serde_json::from_str(snapshot).unwrap();

        assert_eq!(&engine, session.engine());
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut session = Session::new(BoardConfig::default(), 0, false, false);
        let mut out = Vec::new();

        assert_eq!(session.handle(Command::Quit, &mut out).unwrap(), Flow::Quit);
    }
}

//! Interactive game loop.

use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use mystic_content::SessionSetup;
use mystic_core::{
    GameConfig, GameOutcome, GameSession, PcgRng, PlayerClass, PlayerSetup, TurnEvent, TurnOutcome,
    TurnPhase,
};

use crate::input::{self, Command};
use crate::presentation;

/// Line-based terminal frontend.
///
/// Generic over its input and output so a scripted transcript can drive it.
pub struct CliApp<R, W> {
    setup: SessionSetup,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(setup: SessionSetup, input: R, output: W) -> Self {
        Self {
            setup,
            input,
            output,
        }
    }

    /// Play one game to completion, or until the player quits or input ends.
    pub fn run(mut self) -> Result<()> {
        let Some(roster) = self.roster()? else {
            tracing::info!("input closed before the roster was complete");
            return Ok(());
        };

        let seed = self.setup.game.seed.unwrap_or_else(clock_seed);
        tracing::info!(seed, "seeding game");
        let mut rng = PcgRng::new(seed);

        let mut session = GameSession::from_config(&roster, &self.setup.game, &mut rng)
            .context("starting game session")?;

        self.say(&TurnEvent::AdventureBegins.to_string())?;
        self.say(&presentation::render_board(&session))?;

        while !session.is_over() {
            let outcome = match session.phase() {
                TurnPhase::AwaitingPassiveChoice => {
                    let Some(use_it) = self.ask_passive(&session)? else {
                        return self.quit();
                    };
                    session.engine(&mut rng).choose_passive(use_it)
                }
                _ => {
                    let Some(command) = self.ask_command(&session)? else {
                        return self.quit();
                    };
                    match command {
                        Command::Roll => session.engine(&mut rng).request_roll(),
                        Command::CastSpell => session.engine(&mut rng).cast_spell(),
                        Command::Status => {
                            self.say(&presentation::render_status(&session))?;
                            continue;
                        }
                        Command::Board => {
                            self.say(&presentation::render_board(&session))?;
                            continue;
                        }
                        Command::Help => {
                            self.say(input::HELP)?;
                            continue;
                        }
                        Command::Quit => return self.quit(),
                    }
                }
            };

            match outcome {
                Ok(outcome) => self.narrate(&outcome)?,
                Err(err) => self.say(&err.to_string())?,
            }
        }

        let summary = match session.outcome() {
            Some(GameOutcome::Victory { winner }) => session
                .player(winner)
                .map(|p| format!("Game over: {} wins.", p.name))
                .unwrap_or_else(|| "Game over.".to_string()),
            _ => "Game over: nobody survived.".to_string(),
        };
        self.say(&summary)?;
        self.say(&presentation::render_status(&session))
    }

    fn roster(&mut self) -> Result<Option<Vec<PlayerSetup>>> {
        let named = self
            .setup
            .players
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .count();
        if named >= GameConfig::MIN_PLAYERS {
            return Ok(Some(self.setup.players.clone()));
        }
        if named > 0 {
            tracing::warn!(named, "setup roster too small, asking for players");
        }
        self.prompt_roster()
    }

    fn prompt_roster(&mut self) -> Result<Option<Vec<PlayerSetup>>> {
        let count = loop {
            let prompt = format!(
                "How many adventurers? ({} or more)",
                GameConfig::MIN_PLAYERS
            );
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if n >= GameConfig::MIN_PLAYERS => break n,
                _ => self.say(&format!(
                    "Please enter a whole number of at least {}.",
                    GameConfig::MIN_PLAYERS
                ))?,
            }
        };

        let mut roster = Vec::with_capacity(count);
        for seat in 1..=count {
            let name = loop {
                let Some(line) = self.ask(&format!("Name of adventurer {seat}:"))? else {
                    return Ok(None);
                };
                let name = line.trim();
                if !name.is_empty() {
                    break name.to_string();
                }
            };

            let classes: Vec<&str> = PlayerClass::ALL.iter().map(|c| c.as_ref()).collect();
            let prompt = format!("Class for {name} [{}]:", classes.join("/"));
            let class = loop {
                let Some(line) = self.ask(&prompt)? else {
                    return Ok(None);
                };
                match line.trim().parse::<PlayerClass>() {
                    Ok(class) => break class,
                    Err(_) => self.say("Unknown class.")?,
                }
            };

            roster.push(PlayerSetup::new(name, class));
        }
        Ok(Some(roster))
    }

    fn ask_command(&mut self, session: &GameSession) -> Result<Option<Command>> {
        let player = session.current_player();
        let prompt = if player.can_cast() {
            format!("{}'s turn. Roll or cast {}?", player.name, player.class.spell_name())
        } else {
            format!("{}'s turn. Roll?", player.name)
        };

        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match Command::parse(&line) {
                Some(command) => return Ok(Some(command)),
                None => self.say(input::HELP)?,
            }
        }
    }

    /// Blank input declines.
    fn ask_passive(&mut self, session: &GameSession) -> Result<Option<bool>> {
        let player = session.current_player();
        let prompt = format!(
            "Use {} to avoid this event? ({} left) [y/N]",
            player.class.passive_name(),
            player.passive_count
        );

        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                return Ok(Some(false));
            }
            match input::parse_yes_no(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => self.say("Answer y or n.")?,
            }
        }
    }

    fn narrate(&mut self, outcome: &TurnOutcome) -> Result<()> {
        if let Some(category) = outcome.tile_event {
            self.say(&format!("-- {} --", category.title()))?;
        }
        for event in &outcome.events {
            self.say(&event.to_string())?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("reading input")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn quit(&mut self) -> Result<()> {
        tracing::info!("player left the game");
        self.say("Farewell, adventurers.")
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

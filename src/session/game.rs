//! Game session: prompts, turn loop and winner announcement.

use log::{debug, info, trace};

use crate::console::Console;
use crate::core::{GameConfig, GameRng, GameState, Player};
use crate::error::{GameError, InputError};
use crate::rules::{
    parse_first_player, parse_pencil_count, parse_removal, GameResult, LastPencilRules,
    RulesEngine,
};
use crate::strategy::{MovePolicy, WinningStrategy};

/// One game between the console user and the bot.
pub struct Session<C, P = WinningStrategy> {
    rules: LastPencilRules,
    console: C,
    policy: P,
    rng: GameRng,
}

/// Builder for creating a Session.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    config: GameConfig,
    seed: Option<u64>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the bot's RNG seed. Without one the RNG is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a session whose bot plays `WinningStrategy`.
    pub fn build<C: Console>(self, console: C) -> Result<Session<C>, GameError> {
        self.build_with_policy(console, WinningStrategy)
    }

    /// Build a session with a custom bot policy.
    pub fn build_with_policy<C: Console, P: MovePolicy>(
        self,
        console: C,
        policy: P,
    ) -> Result<Session<C, P>, GameError> {
        self.config.validate()?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(Session {
            rules: LastPencilRules::new(self.config),
            console,
            policy,
            rng,
        })
    }
}

impl<C: Console, P: MovePolicy> Session<C, P> {
    /// Get the rules engine.
    pub fn rules(&self) -> &LastPencilRules {
        &self.rules
    }

    /// Give back the console (tests read the transcript from it).
    pub fn into_console(self) -> C {
        self.console
    }

    /// Play a whole game: setup, turns, announcement.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        let state = self.setup()?;
        let state = self.play(state)?;
        self.announce(&state)
    }

    /// Ask for the pile size and the starting player.
    pub fn setup(&mut self) -> Result<GameState, GameError> {
        let config = self.rules.config();

        say(&mut self.console, "How many pencils would you like to use:")?;
        let pencils = prompt(&mut self.console, parse_pencil_count)?;

        let question = format!(
            "Who will be the first ({}, {}):",
            config.name(Player::Human),
            config.name(Player::Bot)
        );
        say(&mut self.console, &question)?;
        let first = prompt(&mut self.console, |line| parse_first_player(config, line))?;

        debug!("setup: {pencils} pencils, {first:?} starts");
        Ok(GameState::new(pencils, first))
    }

    /// Run turns until the pile is empty.
    pub fn play(&mut self, mut state: GameState) -> Result<GameState, GameError> {
        while !state.is_over() {
            state = self.play_turn(state)?;
        }
        Ok(state)
    }

    /// Show the pile, take one move, and return the next state.
    pub fn play_turn(&mut self, state: GameState) -> Result<GameState, GameError> {
        let config = self.rules.config();
        say(&mut self.console, &state.render(config.marker))?;
        let turn = format!("{}'s turn!", config.name(state.on_move));
        say(&mut self.console, &turn)?;

        if self.rules.is_forced_finish(&state) {
            say(&mut self.console, "1")?;
            debug!("forced finish: bot takes the last pencil");
            return Ok(GameState::new(0, state.on_move.other()));
        }

        let mv = match state.on_move {
            Player::Bot => {
                let count = self.policy.choose(
                    state.pencils,
                    config.max_remove_per_turn,
                    &mut self.rng,
                );
                let mv = self
                    .rules
                    .validate_removal(&state, i64::from(count))
                    .map_err(|_| GameError::IllegalPolicyMove {
                        count,
                        pencils: state.pencils,
                    })?;
                say(&mut self.console, &count.to_string())?;
                mv
            }
            Player::Human => {
                let rules = &self.rules;
                prompt(&mut self.console, |line| {
                    let count = parse_removal(rules.config(), line)?;
                    rules.validate_removal(&state, count)
                })?
            }
        };

        let next = state.apply(mv);
        debug!("{mv}: {} -> {} pencils", state.pencils, next.pencils);
        Ok(next)
    }

    /// Print "<winner> won!" for a finished game.
    pub fn announce(&mut self, state: &GameState) -> Result<GameResult, GameError> {
        let result = self.rules.is_terminal(state).ok_or(GameError::NotFinished {
            pencils: state.pencils,
        })?;
        let line = format!("{} won!", self.rules.config().name(result.winner));
        say(&mut self.console, &line)?;
        info!("game over: {:?} won", result.winner);
        Ok(result)
    }
}

fn say<C: Console>(console: &mut C, line: &str) -> Result<(), GameError> {
    console.write_line(line)?;
    Ok(())
}

/// Read lines until `parse` accepts one, printing each rejection.
fn prompt<C, T>(
    console: &mut C,
    mut parse: impl FnMut(&str) -> Result<T, InputError>,
) -> Result<T, GameError>
where
    C: Console,
{
    loop {
        let line = console.read_line()?.ok_or(GameError::InputClosed)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                trace!("rejected input {line:?}: {err}");
                say(console, &err.to_string())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::IoConsole;
    use crate::strategy::GreedyPolicy;
    use std::io::Cursor;

    type TestConsole = IoConsole<Cursor<String>, Vec<u8>>;

    fn session(input: &str) -> Session<TestConsole> {
        SessionBuilder::new()
            .seed(42)
            .build(IoConsole::new(Cursor::new(input.to_string()), Vec::new()))
            .unwrap()
    }

    fn output<P: MovePolicy>(session: Session<TestConsole, P>) -> String {
        String::from_utf8(session.into_console().into_writer()).unwrap()
    }

    #[test]
    fn test_setup_reprompts_until_valid() {
        let mut s = session("abc\n0\n-2\n4\nBob\nJack\n");
        let state = s.setup().unwrap();
        assert_eq!(state, GameState::new(4, Player::Bot));
        assert_eq!(
            output(s),
            "How many pencils would you like to use:\n\
             The number of pencils should be numeric\n\
             The number of pencils should be positive\n\
             The number of pencils should be numeric\n\
             Who will be the first (John, Jack):\n\
             Choose between John and Jack\n"
        );
    }

    #[test]
    fn test_bot_turn_on_multiple_of_four() {
        let mut s = session("");
        let next = s.play_turn(GameState::new(4, Player::Bot)).unwrap();
        assert_eq!(next, GameState::new(1, Player::Human));
        assert_eq!(output(s), "||||\nJack's turn!\n3\n");
    }

    #[test]
    fn test_forced_finish() {
        let mut s = session("");
        let next = s.play_turn(GameState::new(1, Player::Bot)).unwrap();
        assert_eq!(next, GameState::new(0, Player::Human));
        assert_eq!(output(s), "|\nJack's turn!\n1\n");
    }

    #[test]
    fn test_human_turn_reprompts() {
        let mut s = session("x\n0\n4\n3\n2\n");
        let next = s.play_turn(GameState::new(2, Player::Human)).unwrap();
        assert_eq!(next, GameState::new(0, Player::Bot));
        assert_eq!(
            output(s),
            "||\nJohn's turn!\n\
             Possible values: '1', '2' or '3'\n\
             Possible values: '1', '2' or '3'\n\
             Possible values: '1', '2' or '3'\n\
             Too many pencils were taken\n"
        );
    }

    #[test]
    fn test_input_closed() {
        let mut s = session("5\n");
        assert!(matches!(s.setup(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_announce_requires_finished_game() {
        let mut s = session("");
        assert!(matches!(
            s.announce(&GameState::new(3, Player::Human)),
            Err(GameError::NotFinished { pencils: 3 })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SessionBuilder::new()
            .config(GameConfig::default().with_names("Sam", "Sam"))
            .build(IoConsole::new(Cursor::new(String::new()), Vec::new()));
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_greedy_bot_taking_last_pencil_loses() {
        let mut s = SessionBuilder::new()
            .seed(1)
            .build_with_policy(
                IoConsole::new(Cursor::new(String::new()), Vec::new()),
                GreedyPolicy,
            )
            .unwrap();
        let state = s.play(GameState::new(3, Player::Bot)).unwrap();
        let result = s.announce(&state).unwrap();
        assert_eq!(result.winner, Player::Human);
        assert_eq!(output(s), "|||\nJack's turn!\n3\nJohn won!\n");
    }
}

//! Error types.
//!
//! `InputError` is recoverable: its `Display` text is shown to the player and
//! the prompt is repeated. `GameError` ends the session.

/// Rejected console input. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("The number of pencils should be numeric")]
    PencilsNotNumeric,

    #[error("The number of pencils should be positive")]
    PencilsNotPositive,

    #[error("Choose between {first} and {second}")]
    UnknownPlayer { first: String, second: String },

    #[error("Possible values: {}", possible_values(.max))]
    RemovalNotNumeric { max: u32 },

    #[error("Possible values: {}", possible_values(.max))]
    RemovalNotAllowed { max: u32 },

    #[error("Too many pencils were taken")]
    TooManyTaken,
}

/// Invalid `GameConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("max_remove_per_turn must be > 0")]
    ZeroMaxRemove,

    #[error("player names must not be empty")]
    EmptyName,

    #[error("player names must differ (both are '{0}')")]
    DuplicateName(String),
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input closed before the game was decided")]
    InputClosed,

    #[error("bot policy chose illegal removal {count} with {pencils} pencils left")]
    IllegalPolicyMove { count: u32, pencils: u32 },

    #[error("game is not finished ({pencils} pencils left)")]
    NotFinished { pencils: u32 },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// `'1', '2' or '3'` for `max == 3`.
fn possible_values(max: &u32) -> String {
    let quoted: Vec<String> = (1..=*max).map(|n| format!("'{n}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

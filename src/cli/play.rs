//! Interactive game loop.

use std::io::{self, BufRead, Write};

use word_relay::rules::MAX_PARTICIPANTS;
use word_relay::view::order_text;
use word_relay::{
    Board, EliminationFollowup, EliminationReason, GameRng, GameSession, Outcome, ParticipantId,
    RejectReason, RelayEngine, SeatStatus, StartGameRequest,
};

use super::console::Console;
use super::{CliError, FollowupPolicy};

/// Settings gathered from the command line.
#[derive(Debug, Clone)]
pub(crate) struct PlayOptions {
    /// Names given on the command line; prompted for when empty.
    pub(crate) names: Vec<String>,
    /// Seat shuffle; asked when `None`.
    pub(crate) shuffle: Option<bool>,
    /// RNG seed; drawn from the OS when `None`.
    pub(crate) seed: Option<u64>,
    /// Follow-up after eliminations.
    pub(crate) on_elimination: FollowupPolicy,
}

/// How one game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    /// Someone won.
    Winner,
    /// Input ran out mid-game.
    Quit,
}

/// Run games on stdin/stdout until the table stops.
pub(crate) fn execute(options: PlayOptions) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    run(&mut console, options)
}

fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: PlayOptions,
) -> Result<(), CliError> {
    let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::debug!(seed = rng.seed(), "rng seeded");
    let mut engine = RelayEngine::new(rng);

    let names = if options.names.is_empty() {
        match collect_names(console, engine.config().min_participants)? {
            Some(names) => names,
            None => return Ok(()),
        }
    } else {
        options.names
    };

    let shuffle = match options.shuffle {
        Some(shuffle) => shuffle,
        None => console
            .confirm("Shuffle the turn order? [y/N] ")?
            .unwrap_or(false),
    };
    let request = StartGameRequest::new(names, shuffle);

    loop {
        let session = engine.start_game(&request)?;
        console.say(format_args!("Turn order: {}", order_text(&session)))?;

        if play_game(console, &engine, session, options.on_elimination)? == Finish::Quit {
            return Ok(());
        }
        if console.confirm("Play again? [y/N] ")? != Some(true) {
            return Ok(());
        }
    }
}

/// Prompt for a head count and that many non-blank names.
///
/// Returns `None` if input runs out first.
fn collect_names<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    min: usize,
) -> io::Result<Option<Vec<String>>> {
    let count = loop {
        let Some(answer) = console.ask(&format!("How many players? ({min} or more) "))? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(n) if (min..=MAX_PARTICIPANTS).contains(&n) => break n,
            _ => console.say(format_args!("Enter a number from {min} to {MAX_PARTICIPANTS}."))?,
        }
    };

    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let Some(name) = console.ask(&format!("Name of player {}: ", names.len() + 1))? else {
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            console.say("A name is required.")?;
        } else {
            names.push(name.to_string());
        }
    }
    Ok(Some(names))
}

fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &RelayEngine,
    mut session: GameSession,
    policy: FollowupPolicy,
) -> Result<Finish, CliError> {
    loop {
        let board = Board::from_session(&session);
        render(console, &board)?;

        let prompt = format!(
            "{} ({}) > ",
            board.current_player.as_deref().unwrap_or_default(),
            board.hint
        );
        let Some(line) = console.ask(&prompt)? else {
            return Ok(Finish::Quit);
        };

        let transition = engine.submit_word(&session, &line)?;
        match transition.outcome {
            Outcome::Rejected(RejectReason::Empty) => {
                console.say("Please enter a word.")?;
            }
            Outcome::Rejected(RejectReason::TooShort) => {
                console.say(format_args!(
                    "Words need at least {} characters.",
                    engine.config().min_word_chars
                ))?;
            }
            Outcome::Eliminated { player, reason } => {
                announce_elimination(console, &transition.session, player, reason)?;
                let choice = match policy {
                    FollowupPolicy::Continue => EliminationFollowup::Continue,
                    FollowupPolicy::NewRound => EliminationFollowup::NewRound,
                    FollowupPolicy::Ask => {
                        match console.confirm("Start a new round with the remaining players? [y/N] ")? {
                            Some(true) => EliminationFollowup::NewRound,
                            Some(false) => EliminationFollowup::Continue,
                            None => return Ok(Finish::Quit),
                        }
                    }
                };
                let next = engine.followup(&transition.session, choice)?;
                if choice == EliminationFollowup::NewRound {
                    console.say("New round!")?;
                }
                session = next.session;
                continue;
            }
            Outcome::GameOver { eliminated, reason, winner } => {
                announce_elimination(console, &transition.session, eliminated, reason)?;
                let name = participant_name(&transition.session, winner);
                console.say(format_args!("Game over! Winner: {name}"))?;
                return Ok(Finish::Winner);
            }
            Outcome::Accepted { .. } | Outcome::Started => {}
        }
        session = transition.session;
    }
}

fn render<R: BufRead, W: Write>(console: &mut Console<R, W>, board: &Board) -> io::Result<()> {
    let roster: Vec<String> = board
        .roster
        .iter()
        .map(|entry| match entry.status {
            SeatStatus::Current => format!("[{}]", entry.name),
            SeatStatus::Active => entry.name.clone(),
            SeatStatus::Eliminated => format!("{} (out)", entry.name),
        })
        .collect();

    console.say("")?;
    console.say(format_args!("Players: {}", roster.join("  ")))?;
    console.say(format_args!("History: {}", board.history_text()))?;
    if !board.current_word.is_empty() {
        console.say(format_args!("Word: {}", board.current_word))?;
    }
    Ok(())
}

fn announce_elimination<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &GameSession,
    player: ParticipantId,
    reason: EliminationReason,
) -> io::Result<()> {
    let name = participant_name(session, player);
    let why = match reason {
        EliminationReason::DuplicateWord => "that word was already used".to_string(),
        EliminationReason::ChainViolation { expected, found } => {
            format!("the word had to start with '{expected}', not '{found}'")
        }
    };
    console.say(format_args!("{name} is out! ({why})"))
}

fn participant_name(session: &GameSession, id: ParticipantId) -> &str {
    session
        .participants()
        .by_id(id)
        .map_or("?", |p| p.name.as_str())
}

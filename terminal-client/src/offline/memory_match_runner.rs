use std::io::{self, Write};
use std::time::Duration;
use tokio::io::AsyncBufRead;
use common::games::SessionRng;
use common::games::memory_match::{FlipOutcome, MemoryMatchGameState};
use common::log;

use crate::input::{MemoryMatchCommand, parse_memory_match_command};
use crate::render::render_memory_match;
use super::GameIo;

pub struct MemoryMatchSettings {
    /// How long a mismatched pair stays face up.
    pub mismatch_reveal: Duration,
}

pub async fn run_memory_match_game<R, W>(
    io: &mut GameIo<R, W>,
    settings: &MemoryMatchSettings,
    rng: &mut SessionRng,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = MemoryMatchGameState::new(rng);
    log!("Memory match started, seed {}", rng.seed());

    io.say("Memory Match: enter 1-12 to flip a card, r to reset, q to quit.")?;

    loop {
        io.say(&render_memory_match(&state))?;

        if state.is_won() {
            io.say(&format!("You found all pairs in {} moves!", state.moves()))?;
            io.say("Enter r to play again or q to quit.")?;
        }

        let Some(line) = io.prompt().await? else {
            break;
        };

        match parse_memory_match_command(&line) {
            Ok(MemoryMatchCommand::Quit) => break,
            Ok(MemoryMatchCommand::Reset) => {
                state.reset(rng);
                log!("Memory match reset");
            }
            Ok(MemoryMatchCommand::Flip(index)) => match state.flip_card(index) {
                Ok(FlipOutcome::Revealed(icon)) => {
                    log!("Flipped card {}: {:?}", index, icon);
                }
                Ok(FlipOutcome::Matched(icon)) => {
                    log!("Matched {:?} after {} moves", icon, state.moves());
                    io.say(&format!("Match: {}", icon.name()))?;
                }
                Ok(FlipOutcome::Mismatch { first, second }) => {
                    log!("Mismatch on cards {} and {}", first, second);
                    io.say(&render_memory_match(&state))?;
                    tokio::time::sleep(settings.mismatch_reveal).await;
                    state.hide_mismatched();
                    io.say("No match")?;
                }
                Err(e) => io.say(&e)?,
            },
            Err(e) => io.say(&e)?,
        }
    }

    log!("Memory match finished after {} moves", state.moves());
    Ok(())
}

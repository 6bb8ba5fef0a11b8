use std::io::{self, Write};
use std::time::Duration;
use tokio::io::AsyncBufRead;
use common::games::SessionRng;
use common::games::tictactoe::{TicTacToeGameState, TicTacToeMode};
use common::log;

use crate::input::{TicTacToeCommand, parse_tictactoe_command};
use crate::render::{PlayerNames, render_tictactoe_board, tictactoe_status};
use super::GameIo;

pub struct TicTacToeSettings {
    pub mode: TicTacToeMode,
    pub names: PlayerNames,
    pub bot_think_delay: Duration,
}

pub async fn run_tictactoe_game<R, W>(
    io: &mut GameIo<R, W>,
    settings: &TicTacToeSettings,
    rng: &mut SessionRng,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = TicTacToeGameState::new(settings.mode);
    log!("Tic-tac-toe started, mode {:?}, seed {}", settings.mode, rng.seed());

    io.say("Tic-Tac-Toe: enter 1-9 to place a mark, r to reset, q to quit.")?;

    loop {
        io.say(&render_tictactoe_board(&state))?;
        io.say(&tictactoe_status(&state, &settings.names))?;

        if state.is_bot_turn() {
            tokio::time::sleep(settings.bot_think_delay).await;
            match state.play_bot_turn(rng) {
                Ok(Some(index)) => {
                    log!("Bot placed {:?} on cell {}", state.board.get(index), index);
                    if state.outcome.is_terminal() {
                        log!("Game over: {:?}", state.outcome);
                    }
                }
                Ok(None) => {
                    io.say("No move available.")?;
                    return Ok(());
                }
                Err(e) => {
                    io.say(&e)?;
                    return Ok(());
                }
            }
            continue;
        }

        if state.outcome.is_terminal() {
            io.say("Enter r to play again or q to quit.")?;
        }

        let Some(line) = io.prompt().await? else {
            break;
        };

        match parse_tictactoe_command(&line) {
            Ok(TicTacToeCommand::Quit) => break,
            Ok(TicTacToeCommand::Reset) => {
                state.reset();
                log!("Tic-tac-toe reset");
            }
            Ok(TicTacToeCommand::Place(index)) => {
                match state.place_mark(state.current_mark, index) {
                    Ok(outcome) => {
                        log!("Player placed on cell {}", index);
                        if outcome.is_terminal() {
                            log!("Game over: {:?}", outcome);
                        }
                    }
                    Err(e) => io.say(&e)?,
                }
            }
            Err(e) => io.say(&e)?,
        }
    }

    log!("Tic-tac-toe finished");
    Ok(())
}

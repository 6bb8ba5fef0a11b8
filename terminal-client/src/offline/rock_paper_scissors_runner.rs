use std::io::{self, Write};
use tokio::io::AsyncBufRead;
use common::games::SessionRng;
use common::games::rock_paper_scissors::RockPaperScissorsGameState;
use common::log;

use crate::input::{RpsCommand, parse_rps_command};
use crate::render::{render_rps_round, render_rps_scores};
use super::GameIo;

pub async fn run_rock_paper_scissors_game<R, W>(
    io: &mut GameIo<R, W>,
    player_name: &str,
    rng: &mut SessionRng,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut state = RockPaperScissorsGameState::new();
    log!("Rock-paper-scissors started, seed {}", rng.seed());

    io.say("Rock Paper Scissors: enter r, p or s to play, reset to clear scores, q to quit.")?;
    io.say(&render_rps_scores(state.scores(), player_name))?;

    loop {
        let Some(line) = io.prompt().await? else {
            break;
        };

        match parse_rps_command(&line) {
            Ok(RpsCommand::Quit) => break,
            Ok(RpsCommand::Reset) => {
                state.reset();
                log!("Rock-paper-scissors scores reset");
                io.say(&render_rps_scores(state.scores(), player_name))?;
            }
            Ok(RpsCommand::Play(player_move)) => match state.play_round(player_move, rng) {
                Ok(round) => {
                    log!(
                        "Round {}: {:?} vs {:?}, {:?}",
                        state.rounds_played(),
                        round.player_move,
                        round.computer_move,
                        round.result
                    );
                    io.say(&render_rps_round(&round, player_name))?;
                    io.say(&render_rps_scores(state.scores(), player_name))?;
                }
                Err(e) => io.say(&e)?,
            },
            Err(e) => io.say(&e)?,
        }
    }

    log!("Rock-paper-scissors finished after {} rounds", state.rounds_played());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn play(script: &'static str) -> String {
        let mut io = GameIo::new(script.as_bytes(), Vec::new());
        let mut rng = SessionRng::new(5);
        run_rock_paper_scissors_game(&mut io, "Ada", &mut rng).await.unwrap();
        String::from_utf8(io.into_output()).unwrap()
    }

    fn last_scores(output: &str) -> &str {
        output
            .lines()
            .rev()
            .map(|line| line.trim_start_matches("> "))
            .find(|line| line.ends_with(" Computer"))
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_round_is_reported_with_scores() {
        let output = play("r\nq\n").await;
        assert!(output.contains("Ada: Rock  vs  Computer: "), "{}", output);
        assert!(
            output.contains("It's a tie!")
                || output.contains("You win this round!")
                || output.contains("Computer wins this round!")
        );
        let tallies = ["Ada 0 - 0 Computer", "Ada 1 - 0 Computer", "Ada 0 - 1 Computer"];
        let last_scores = last_scores(&output);
        assert!(tallies.contains(&last_scores), "{}", output);
    }

    #[tokio::test]
    async fn test_reset_clears_scores() {
        let output = play("r\np\ns\nreset\nq\n").await;
        let last_scores = last_scores(&output);
        assert_eq!(last_scores, "Ada 0 - 0 Computer");
    }

    #[tokio::test]
    async fn test_unknown_move_is_reported() {
        let output = play("lizard\n").await;
        assert!(output.contains("Unknown move 'lizard'"));
    }
}

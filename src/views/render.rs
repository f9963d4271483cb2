use super::app::App;
use super::page::Page;
use crate::dto::Level;
use crate::dto::Status;
use colored::Colorize;

fn gameplay(f: &mut std::fmt::Formatter, status: &Status) -> std::fmt::Result {
    let game = &status.game_status;
    writeln!(
        f,
        "level {} | round {}/{} | score {}-{}",
        game.level, game.round, game.max_rounds, game.player_score, game.computer_score
    )?;
    match (status.game_started, status.counting()) {
        (false, false) => writeln!(f, "{}", "ready".dimmed())?,
        (false, true) => writeln!(f, "{}", format!("get ready! {}", status.countdown.max(0)).yellow().bold())?,
        (true, _) => {
            let shown = |g: Option<crate::gesture::Gesture>| g.map_or("-".to_string(), |g| g.to_string());
            writeln!(f, "you      {}", shown(status.user_choice))?;
            writeln!(f, "computer {}", shown(status.computer_choice))?;
            if let Some(winner) = status.winner.as_deref() {
                writeln!(f, "{}", winner.bold())?;
            }
        }
    }
    Ok(())
}

fn results(f: &mut std::fmt::Formatter, status: &Status) -> std::fmt::Result {
    let game = &status.game_status;
    if let Some(winner) = game.game_winner.as_deref() {
        writeln!(f, "{}", winner.green().bold())?;
    }
    writeln!(f, "final score {}-{}", game.player_score, game.computer_score)?;
    for round in game.round_history.iter() {
        writeln!(f, "  {}", round)?;
    }
    Ok(())
}

impl std::fmt::Display for App {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", format!("── {} ", self.page()).dimmed())?;
        match self.page() {
            Page::Welcome => {
                writeln!(f, "{}", "Rock Paper Scissors".bold())?;
                writeln!(f, "show your hand to the camera and beat the computer")?;
                write!(f, "{}", "begin | quit".cyan())
            }
            Page::Difficulty => {
                for level in Level::all() {
                    match self.level() == Some(level) {
                        true => writeln!(f, "> {}", level.to_string().bold())?,
                        false => writeln!(f, "  {}", level)?,
                    }
                }
                write!(f, "{}", "easy | medium | hard | back".cyan())
            }
            Page::Gameplay => {
                writeln!(f, "stream {}", self.feed())?;
                if let Some(message) = self.stream() {
                    writeln!(f, "{}", message.red())?;
                }
                match self.status() {
                    Some(status) => gameplay(f, status)?,
                    None => writeln!(f, "{}", "waiting for backend".dimmed())?,
                }
                write!(f, "{}", "play | reset | home".cyan())
            }
            Page::Results => {
                if let Some(status) = self.status() {
                    results(f, status)?;
                }
                write!(f, "{}", "again | home".cyan())
            }
        }
    }
}

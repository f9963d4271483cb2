use super::session::Session;
use crate::gesture::Gesture;
use crate::round::Phase;
use crate::round::Winner;
use colored::Colorize;

fn shown(gesture: Option<Gesture>) -> String {
    gesture.map_or("-".to_string(), |g| g.to_string())
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let round = self.round();
        writeln!(f, "{}", "─".repeat(40).dimmed())?;
        match round.phase() {
            Phase::Idle => writeln!(f, "{}", "press R to start a round".cyan())?,
            Phase::CountingDown => writeln!(f, "{}", format!("{}...", round.countdown()).yellow().bold())?,
            Phase::Locked => writeln!(f, "{}", "locked".yellow())?,
            Phase::Resolved => writeln!(f, "{}", "R to play again, Q to quit".cyan())?,
        }
        writeln!(f, "hand     {}", shown(self.live()))?;
        if round.phase() == Phase::CountingDown {
            writeln!(f, "holding  {}", shown(round.latest()))?;
        }
        if round.phase() == Phase::Resolved {
            writeln!(f, "you      {}", shown(round.player()))?;
            writeln!(f, "computer {}", shown(round.computer()))?;
            if let Some(winner) = round.winner() {
                let verdict = match winner {
                    Winner::Player => winner.verdict().green().bold(),
                    Winner::Computer => winner.verdict().red().bold(),
                    Winner::Draw => winner.verdict().normal(),
                };
                writeln!(f, "{}", verdict)?;
            }
        }
        let lead = match self.board().leader() {
            Some(Winner::Player) => " you lead",
            Some(Winner::Computer) => " computer leads",
            Some(Winner::Draw) => " level",
            None => "",
        };
        write!(f, "{}{}", self.board(), lead.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Input;
    use crate::session::Key;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn frames_follow_the_round() {
        colored::control::set_override(false);
        let mut session = Session::from(SmallRng::seed_from_u64(1));
        assert!(session.to_string().contains("press R"));
        assert!(session.to_string().ends_with("(0 draws, 0 rounds)"));
        session.handle(Input::from(Key::Restart));
        assert!(session.to_string().contains("3..."));
        for _ in 0..crate::COUNTDOWN {
            session.tick();
        }
        let screen = session.to_string();
        assert!(screen.contains("Computer Wins!"));
        assert!(screen.ends_with("You 0 - 1 Computer (0 draws, 1 rounds) computer leads"));
    }
}

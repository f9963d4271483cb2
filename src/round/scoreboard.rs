use super::winner::Winner;

/// Running tally of resolved rounds within one session. Memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    player: usize,
    computer: usize,
    draws: usize,
}

impl Scoreboard {
    pub fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Player => self.player += 1,
            Winner::Computer => self.computer += 1,
            Winner::Draw => self.draws += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.player + self.computer + self.draws
    }
    pub fn player(&self) -> usize {
        self.player
    }
    pub fn computer(&self) -> usize {
        self.computer
    }
    pub fn draws(&self) -> usize {
        self.draws
    }
    /// whoever is ahead so far, None before the first round
    pub fn leader(&self) -> Option<Winner> {
        match (self.rounds(), self.player.cmp(&self.computer)) {
            (0, _) => None,
            (_, std::cmp::Ordering::Greater) => Some(Winner::Player),
            (_, std::cmp::Ordering::Less) => Some(Winner::Computer),
            (_, std::cmp::Ordering::Equal) => Some(Winner::Draw),
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Computer ({} draws, {} rounds)",
            self.player,
            self.computer,
            self.draws,
            self.rounds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally() {
        let mut board = Scoreboard::default();
        assert_eq!(board.leader(), None);
        board.record(Winner::Player);
        board.record(Winner::Draw);
        board.record(Winner::Computer);
        board.record(Winner::Player);
        assert_eq!(board.rounds(), 4);
        assert_eq!(board.player(), 2);
        assert_eq!(board.computer(), 1);
        assert_eq!(board.draws(), 1);
        assert_eq!(board.leader(), Some(Winner::Player));
        assert_eq!(board.to_string(), "You 2 - 1 Computer (1 draws, 4 rounds)");
    }
}

use super::phase::Phase;
use super::winner::Winner;
use crate::COUNTDOWN;
use crate::gesture::Gesture;

/// What a single timer tick did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// not counting down; nothing changed
    Ignored,
    /// countdown moved to this value
    Counted(u8),
    /// countdown hit zero, choices locked and compared
    Resolved(Winner),
}

/// Round state machine. Single owner, mutated only by the start/reset key,
/// the per-frame gesture feed and the once-per-second tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    phase: Phase,
    countdown: u8,
    latest: Option<Gesture>,
    player: Option<Gesture>,
    computer: Option<Gesture>,
    winner: Option<Winner>,
}

impl Round {
    /// Begin (or restart) a countdown. Whatever the previous round
    /// left behind is discarded.
    pub fn start(&mut self) {
        log::debug!("round {} -> {}", self.phase, Phase::CountingDown);
        *self = Self {
            phase: Phase::CountingDown,
            countdown: COUNTDOWN,
            ..Self::default()
        };
    }

    /// Back to idle from anywhere, every field cleared.
    pub fn reset(&mut self) {
        log::debug!("round {} -> {}", self.phase, Phase::Idle);
        *self = Self::default();
    }

    /// Feed one classified frame. Unknown keeps the previous reading;
    /// frames outside a countdown are not recorded.
    pub fn observe(&mut self, gesture: Gesture) {
        if self.phase == Phase::CountingDown && gesture.is_known() {
            self.latest = Some(gesture);
        }
    }

    /// Advance the countdown by one. Reaching zero locks the latest gesture
    /// as the player's choice, draws the computer's, and resolves at once.
    /// Outside a countdown this is a no-op, so the lock happens exactly once.
    pub fn tick<R: rand::Rng>(&mut self, rng: &mut R) -> Tick {
        match self.phase {
            Phase::CountingDown => match self.countdown.saturating_sub(1) {
                0 => {
                    self.countdown = 0;
                    let computer = self.lock(rng);
                    Tick::Resolved(self.resolve(computer))
                }
                n => {
                    self.countdown = n;
                    Tick::Counted(n)
                }
            },
            _ => Tick::Ignored,
        }
    }
}

impl Round {
    fn lock<R: rand::Rng>(&mut self, rng: &mut R) -> Gesture {
        let computer = Gesture::draw(rng);
        self.player = self.latest;
        self.computer = Some(computer);
        self.phase = Phase::Locked;
        log::debug!(
            "round locked: player {} computer {}",
            self.player.map_or("nothing".to_string(), |g| g.to_string()),
            computer
        );
        computer
    }

    fn resolve(&mut self, computer: Gesture) -> Winner {
        let winner = Winner::of(self.player, computer);
        self.winner = Some(winner);
        self.phase = Phase::Resolved;
        log::info!("round resolved: {}", winner.verdict());
        winner
    }
}

impl Round {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
    pub fn latest(&self) -> Option<Gesture> {
        self.latest
    }
    pub fn player(&self) -> Option<Gesture> {
        self.player
    }
    pub fn computer(&self) -> Option<Gesture> {
        self.computer
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Classifier;
    use crate::gesture::Fingers;
    use crate::gesture::Hand;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0xB00)
    }

    #[test]
    fn starts_idle() {
        let round = Round::default();
        assert_eq!(round.phase(), Phase::Idle);
        assert_eq!(round.countdown(), 0);
        assert_eq!(round.winner(), None);
    }

    #[test]
    fn countdown_decreases_by_one() {
        let ref mut rng = rng();
        let mut round = Round::default();
        round.start();
        assert_eq!(round.phase(), Phase::CountingDown);
        assert_eq!(round.countdown(), 3);
        assert_eq!(round.tick(rng), Tick::Counted(2));
        assert_eq!(round.countdown(), 2);
        assert_eq!(round.tick(rng), Tick::Counted(1));
        assert_eq!(round.countdown(), 1);
        assert!(matches!(round.tick(rng), Tick::Resolved(_)));
        assert_eq!(round.countdown(), 0);
        assert_eq!(round.phase(), Phase::Resolved);
    }

    #[test]
    fn locks_exactly_once() {
        let ref mut rng = rng();
        let mut round = Round::default();
        round.start();
        round.observe(Gesture::Rock);
        for _ in 0..3 {
            round.tick(rng);
        }
        let settled = round.clone();
        for _ in 0..16 {
            assert_eq!(round.tick(rng), Tick::Ignored);
            assert_eq!(round, settled);
        }
    }

    #[test]
    fn idle_ticks_are_ignored() {
        let ref mut rng = rng();
        let mut round = Round::default();
        assert_eq!(round.tick(rng), Tick::Ignored);
        assert_eq!(round, Round::default());
    }

    #[test]
    fn unknown_keeps_previous_reading() {
        let mut round = Round::default();
        round.start();
        round.observe(Gesture::Scissors);
        round.observe(Gesture::Unknown);
        assert_eq!(round.latest(), Some(Gesture::Scissors));
        round.observe(Gesture::Rock);
        assert_eq!(round.latest(), Some(Gesture::Rock));
    }

    #[test]
    fn observations_outside_countdown_are_dropped() {
        let mut round = Round::default();
        round.observe(Gesture::Paper);
        assert_eq!(round.latest(), None);
    }

    #[test]
    fn reset_from_counting_down() {
        let mut round = Round::default();
        round.start();
        round.observe(Gesture::Paper);
        round.reset();
        assert_eq!(round, Round::default());
    }

    #[test]
    fn reset_from_locked() {
        let ref mut rng = rng();
        let mut round = Round::default();
        round.start();
        round.observe(Gesture::Paper);
        round.lock(rng);
        assert_eq!(round.phase(), Phase::Locked);
        assert!(round.computer().is_some());
        round.reset();
        assert_eq!(round, Round::default());
    }

    #[test]
    fn reset_from_resolved() {
        let ref mut rng = rng();
        let mut round = Round::default();
        round.start();
        for _ in 0..3 {
            round.tick(rng);
        }
        assert_eq!(round.phase(), Phase::Resolved);
        round.reset();
        assert_eq!(round.phase(), Phase::Idle);
        assert_eq!(round.countdown(), 0);
        assert_eq!(round.player(), None);
        assert_eq!(round.computer(), None);
        assert_eq!(round.winner(), None);
    }

    #[test]
    fn silent_player_forfeits() {
        let ref mut rng = rng();
        let mut round = Round::default();
        round.start();
        for _ in 0..3 {
            round.tick(rng);
        }
        assert_eq!(round.player(), None);
        assert_eq!(round.winner(), Some(Winner::Computer));
    }

    #[test]
    fn open_hand_for_three_ticks() {
        let ref mut rng = rng();
        let palm = Hand::from(Fingers::full());
        let mut round = Round::default();
        round.start();
        let mut last = Tick::Ignored;
        for _ in 0..3 {
            round.observe(Classifier::classify(&palm));
            last = round.tick(rng);
        }
        assert_eq!(round.player(), Some(Gesture::Paper));
        let computer = round.computer().unwrap();
        let expected = match computer {
            Gesture::Rock => Winner::Player,
            Gesture::Paper => Winner::Draw,
            Gesture::Scissors => Winner::Computer,
            Gesture::Unknown => unreachable!(),
        };
        assert_eq!(round.winner(), Some(expected));
        assert_eq!(last, Tick::Resolved(expected));
    }

    #[test]
    fn computer_is_roughly_uniform() {
        let ref mut rng = rng();
        let trials = 30_000;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            let mut round = Round::default();
            round.start();
            for _ in 0..3 {
                round.tick(rng);
            }
            match round.computer() {
                Some(Gesture::Rock) => counts[0] += 1,
                Some(Gesture::Paper) => counts[1] += 1,
                Some(Gesture::Scissors) => counts[2] += 1,
                other => panic!("computer drew {:?}", other),
            }
        }
        let expected = trials as f32 / 3.;
        for count in counts {
            assert!((count as f32 - expected).abs() / expected < 0.05, "{:?}", counts);
        }
    }
}

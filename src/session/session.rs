use super::input::Input;
use super::key::Key;
use crate::gesture::Classifier;
use crate::gesture::Gesture;
use crate::gesture::Hand;
use crate::round::Phase;
use crate::round::Round;
use crate::round::Scoreboard;
use crate::round::Tick;
use rand::rngs::SmallRng;

/// What the driver of a session should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// keep going, timer untouched
    Continue,
    /// a fresh countdown began; (re)arm the tick timer from now
    Restart,
    /// the user asked to leave
    Stop,
}

/// One client-side play session: a round, the tally across rounds, the
/// live classification of the most recent frame, and the computer's RNG.
pub struct Session {
    round: Round,
    board: Scoreboard,
    live: Option<Gesture>,
    rng: SmallRng,
}

impl From<SmallRng> for Session {
    fn from(rng: SmallRng) -> Self {
        Self {
            round: Round::default(),
            board: Scoreboard::default(),
            live: None,
            rng,
        }
    }
}

impl Session {
    pub fn handle(&mut self, input: Input) -> Control {
        match input {
            Input::Key { key: Key::Stop } => {
                log::info!("stopping after {} rounds", self.board.rounds());
                Control::Stop
            }
            Input::Key { key: Key::Restart } => {
                self.round.start();
                Control::Restart
            }
            Input::Frame { landmarks: None } => {
                self.live = None;
                Control::Continue
            }
            Input::Frame { landmarks: Some(points) } => {
                match Hand::try_from(points) {
                    Ok(hand) => self.frame(&hand),
                    Err(e) => log::warn!("dropping frame: {}", e),
                }
                Control::Continue
            }
        }
    }

    /// Classify a detected hand and feed it to the round.
    pub fn frame(&mut self, hand: &Hand) {
        let gesture = Classifier::classify(hand);
        self.live = Some(gesture);
        self.round.observe(gesture);
    }

    /// One timer period elapsed. A resolution lands on the scoreboard once.
    pub fn tick(&mut self) -> Tick {
        let tick = self.round.tick(&mut self.rng);
        if let Tick::Resolved(winner) = tick {
            self.board.record(winner);
            log::info!("{}", self.board);
        }
        tick
    }

    /// whether the tick timer should be running
    pub fn counting(&self) -> bool {
        self.round.phase() == Phase::CountingDown
    }

    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn board(&self) -> &Scoreboard {
        &self.board
    }
    pub fn live(&self) -> Option<Gesture> {
        self.live
    }
}

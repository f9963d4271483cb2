use super::fingers::Fingers;
use super::gesture::Gesture;
use super::hand::Hand;

/// Fixed-threshold gesture classifier. Stateless: every frame is judged on
/// its own, and frames without a hand produce nothing at all.
pub struct Classifier;

impl Classifier {
    pub fn fingers(hand: &Hand) -> Fingers {
        Fingers::from(hand)
    }
    pub fn classify(hand: &Hand) -> Gesture {
        let fingers = Self::fingers(hand);
        let gesture = Gesture::from(fingers);
        log::trace!("{} extended ({}) -> {}", fingers.count(), fingers, gesture);
        gesture
    }
    /// a frame may or may not contain a hand; a miss is not an error
    pub fn frame(hand: Option<&Hand>) -> Option<Gesture> {
        hand.map(Self::classify)
    }
}

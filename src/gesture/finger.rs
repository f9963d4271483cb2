use super::hand::Hand;

/// The five digits of a hand, thumb first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0isize,
    Index = 1isize,
    Middle = 2isize,
    Ring = 3isize,
    Pinky = 4isize,
}

impl Finger {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }
    /// landmark index of the fingertip
    pub const fn tip(&self) -> usize {
        match self {
            Self::Thumb => 4,
            Self::Index => 8,
            Self::Middle => 12,
            Self::Ring => 16,
            Self::Pinky => 20,
        }
    }
    /// landmark index the tip is compared against:
    /// the IP joint for the thumb, the PIP joint for the others
    pub const fn joint(&self) -> usize {
        match self {
            Self::Thumb => self.tip() - 1,
            _ => self.tip() - 2,
        }
    }
    /// Thumb is out when its tip sits left of the IP joint. This assumes a
    /// right hand seen in mirrored video and misreads left hands.
    /// Other fingers are out when the tip sits above the PIP joint.
    pub fn extended(&self, hand: &Hand) -> bool {
        let tip = hand.landmark(self.tip());
        let joint = hand.landmark(self.joint());
        match self {
            Self::Thumb => tip.x < joint.x,
            _ => tip.y < joint.y,
        }
    }
}

impl From<Finger> for u8 {
    fn from(finger: Finger) -> Self {
        1 << finger as u8
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Thumb => write!(f, "thumb"),
            Self::Index => write!(f, "index"),
            Self::Middle => write!(f, "middle"),
            Self::Ring => write!(f, "ring"),
            Self::Pinky => write!(f, "pinky"),
        }
    }
}

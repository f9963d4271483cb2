use super::finger::Finger;
use super::hand::Hand;
use super::landmark::Landmark;
use crate::LANDMARKS;

/// The set of extended fingers of one hand, one bit per Finger.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Fingers(u8);

impl Fingers {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn full() -> Self {
        Self(Self::mask())
    }
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, finger: &Finger) -> bool {
        self.0 & u8::from(*finger) != 0
    }
    pub fn with(self, finger: Finger) -> Self {
        Self(self.0 | u8::from(finger))
    }
    const fn mask() -> u8 {
        0b11111
    }
}

impl From<u8> for Fingers {
    fn from(bits: u8) -> Self {
        Self(bits & Self::mask())
    }
}
impl From<Fingers> for u8 {
    fn from(fingers: Fingers) -> Self {
        fingers.0
    }
}

impl FromIterator<Finger> for Fingers {
    fn from_iter<I: IntoIterator<Item = Finger>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<&Hand> for Fingers {
    fn from(hand: &Hand) -> Self {
        Finger::all()
            .iter()
            .copied()
            .filter(|finger| finger.extended(hand))
            .collect()
    }
}

/// Synthesizes a right hand, mirrored, with exactly these fingers extended.
/// Handy wherever a detector is not around: tests, benches, demos.
impl From<Fingers> for Hand {
    fn from(fingers: Fingers) -> Self {
        let mut points = [Landmark::from((0.5, 0.9)); LANDMARKS];
        for finger in Finger::all() {
            let out = fingers.contains(finger);
            let base = finger.tip() - 3;
            let chain = match finger {
                Finger::Thumb => [
                    (0.60, 0.82),
                    (0.64, 0.76),
                    (0.68, 0.70),
                    if out { (0.60, 0.64) } else { (0.72, 0.72) },
                ],
                _ => {
                    let x = 0.40 + 0.06 * (*finger as usize - 1) as f32;
                    [
                        (x, 0.70),
                        (x, 0.60),
                        if out { (x, 0.50) } else { (x, 0.64) },
                        if out { (x, 0.40) } else { (x, 0.68) },
                    ]
                }
            };
            for (i, point) in chain.into_iter().enumerate() {
                points[base + i] = Landmark::from(point);
            }
        }
        Self::from(points)
    }
}

impl crate::Arbitrary for Fingers {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..=Self::mask()))
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = Finger::all()
            .iter()
            .filter(|finger| self.contains(finger))
            .map(|finger| finger.to_string())
            .collect::<Vec<String>>();
        match names.is_empty() {
            true => write!(f, "none"),
            false => write!(f, "{}", names.join("+")),
        }
    }
}

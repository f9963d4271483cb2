use super::landmark::Landmark;
use crate::LANDMARKS;

/// Errors from building a Hand out of raw detector output.
#[derive(Debug, Clone, PartialEq)]
pub enum LandmarkError {
    /// Detector produced the wrong number of points.
    Count(usize),
    /// Flat coordinate buffer is not a whole number of 2D or 3D points.
    Stride(usize),
}

impl std::fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "expected {} landmarks, got {}", LANDMARKS, n),
            Self::Stride(n) => write!(f, "{} coordinates do not form 2D or 3D landmarks", n),
        }
    }
}

impl std::error::Error for LandmarkError {}

/// The landmark set of one detected hand in one video frame.
/// Index order follows MediaPipe: 0 wrist, then four points per finger
/// from knuckle to tip (thumb 1-4, index 5-8, middle 9-12, ring 13-16, pinky 17-20).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand([Landmark; LANDMARKS]);

impl Hand {
    pub fn landmark(&self, index: usize) -> Landmark {
        self.0[index]
    }
    pub fn landmarks(&self) -> &[Landmark] {
        &self.0
    }
}

impl From<[Landmark; LANDMARKS]> for Hand {
    fn from(landmarks: [Landmark; LANDMARKS]) -> Self {
        Self(landmarks)
    }
}

impl TryFrom<&[Landmark]> for Hand {
    type Error = LandmarkError;
    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        <[Landmark; LANDMARKS]>::try_from(landmarks)
            .map(Self)
            .map_err(|_| LandmarkError::Count(landmarks.len()))
    }
}

impl TryFrom<Vec<Landmark>> for Hand {
    type Error = LandmarkError;
    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::try_from(landmarks.as_slice())
    }
}

/// flat [x0, y0, (z0,) x1, y1, ...] buffers, as handed over from JavaScript
impl TryFrom<&[f32]> for Hand {
    type Error = LandmarkError;
    fn try_from(coords: &[f32]) -> Result<Self, Self::Error> {
        let stride = match coords.len() {
            n if n == LANDMARKS * 2 => 2,
            n if n == LANDMARKS * 3 => 3,
            n if n % 3 == 0 => return Err(LandmarkError::Count(n / 3)),
            n if n % 2 == 0 => return Err(LandmarkError::Count(n / 2)),
            n => return Err(LandmarkError::Stride(n)),
        };
        coords
            .chunks_exact(stride)
            .map(|c| Landmark {
                x: c[0],
                y: c[1],
                z: c.get(2).copied().unwrap_or_default(),
            })
            .collect::<Vec<Landmark>>()
            .try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_sets() {
        let landmarks = vec![Landmark::default(); 20];
        assert_eq!(Hand::try_from(landmarks), Err(LandmarkError::Count(20)));
    }

    #[test]
    fn flat_stride_two() {
        let coords = (0..LANDMARKS * 2).map(|i| i as f32).collect::<Vec<f32>>();
        let hand = Hand::try_from(coords.as_slice()).unwrap();
        assert_eq!(hand.landmark(1), Landmark::from((2., 3.)));
        assert_eq!(hand.landmark(20).z, 0.);
    }

    #[test]
    fn flat_stride_three() {
        let coords = (0..LANDMARKS * 3).map(|i| i as f32).collect::<Vec<f32>>();
        let hand = Hand::try_from(coords.as_slice()).unwrap();
        assert_eq!(hand.landmark(1), Landmark::from((3., 4., 5.)));
    }

    #[test]
    fn flat_ragged() {
        let coords = vec![0f32; 65];
        assert_eq!(
            Hand::try_from(coords.as_slice()),
            Err(LandmarkError::Stride(65))
        );
    }
}

use crate::gesture::*;
use crate::round::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

// Browser bindings: the page runs the hand detector itself and hands us
// flat landmark coordinates, one frame at a time.

#[wasm_bindgen]
pub struct WasmHand(Hand);

#[wasm_bindgen]
pub struct WasmGesture(Gesture);

#[wasm_bindgen]
pub struct WasmRound {
    round: Round,
    board: Scoreboard,
    rng: SmallRng,
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
impl WasmHand {
    /// `[x0, y0, x1, y1, ...]` or `[x0, y0, z0, ...]` for 21 landmarks
    #[wasm_bindgen(constructor)]
    pub fn new(coords: &[f32]) -> Result<WasmHand, JsValue> {
        Hand::try_from(coords)
            .map(Self)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn classify(&self) -> WasmGesture {
        WasmGesture(Classifier::classify(&self.0))
    }

    /// names of the extended fingers
    #[wasm_bindgen]
    pub fn extended(&self) -> js_sys::Array {
        let fingers = Classifier::fingers(&self.0);
        Finger::all()
            .into_iter()
            .filter(|f| fingers.contains(f))
            .map(|f| JsValue::from_str(&f.to_string()))
            .collect()
    }
}

#[wasm_bindgen]
impl WasmGesture {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<WasmGesture, JsValue> {
        Gesture::try_from(name)
            .map(Self)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen]
    pub fn known(&self) -> bool {
        self.0.is_known()
    }

    #[wasm_bindgen]
    pub fn beats(&self, other: &WasmGesture) -> bool {
        self.0.beats(&other.0)
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }
}

#[wasm_bindgen]
impl WasmRound {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            round: Round::default(),
            board: Scoreboard::default(),
            rng: SmallRng::from_os_rng(),
        }
    }

    /// deterministic computer moves
    #[wasm_bindgen]
    pub fn seeded(seed: u64) -> Self {
        Self {
            round: Round::default(),
            board: Scoreboard::default(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[wasm_bindgen]
    pub fn start(&mut self) {
        self.round.start();
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.round.reset();
    }

    #[wasm_bindgen]
    pub fn observe(&mut self, hand: &WasmHand) -> WasmGesture {
        let gesture = Classifier::classify(&hand.0);
        self.round.observe(gesture);
        WasmGesture(gesture)
    }

    /// call once per second while counting; true once the round resolves
    #[wasm_bindgen]
    pub fn tick(&mut self) -> bool {
        match self.round.tick(&mut self.rng) {
            Tick::Resolved(winner) => {
                self.board.record(winner);
                true
            }
            Tick::Counted(_) | Tick::Ignored => false,
        }
    }

    #[wasm_bindgen]
    pub fn phase(&self) -> String {
        self.round.phase().to_string()
    }

    #[wasm_bindgen]
    pub fn countdown(&self) -> u8 {
        self.round.countdown()
    }

    #[wasm_bindgen]
    pub fn player(&self) -> Option<String> {
        self.round.player().map(|g| g.to_string())
    }

    #[wasm_bindgen]
    pub fn computer(&self) -> Option<String> {
        self.round.computer().map(|g| g.to_string())
    }

    /// "You Win!", "Computer Wins!" or "Draw"
    #[wasm_bindgen]
    pub fn verdict(&self) -> Option<String> {
        self.round.winner().map(|w| w.verdict().to_string())
    }

    #[wasm_bindgen]
    pub fn score(&self) -> String {
        self.board.to_string()
    }
}

impl Default for WasmRound {
    fn default() -> Self {
        Self::new()
    }
}

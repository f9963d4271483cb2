criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_random_hand,
        parsing_landmark_frame,
        resolving_full_round,
        decoding_full_status,
}

fn classifying_random_hand(c: &mut criterion::Criterion) {
    c.bench_function("classify a 21-landmark Hand", |b| {
        let hand = Hand::from(Fingers::random());
        b.iter(|| Classifier::classify(&hand))
    });
}

fn parsing_landmark_frame(c: &mut criterion::Criterion) {
    let line = serde_json::json!({
        "type": "frame",
        "landmarks": Hand::from(Fingers::full()).landmarks(),
    })
    .to_string();
    c.bench_function("parse a JSON landmark frame", |b| {
        b.iter(|| Input::try_from(line.as_str()))
    });
}

fn resolving_full_round(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let hand = Hand::from(Fingers::empty());
    c.bench_function("play a Round from start to resolution", |b| {
        b.iter(|| {
            let mut round = Round::default();
            round.start();
            for _ in 0..COUNTDOWN {
                round.observe(Classifier::classify(&hand));
                round.tick(rng);
            }
            round.winner()
        })
    });
}

fn decoding_full_status(c: &mut criterion::Criterion) {
    let status = Status {
        round_result: None,
        game_status: GameStatus {
            round_history: vec![
                RoundInfo {
                    round: 1,
                    user_choice: Some(Gesture::Rock),
                    computer_choice: Some(Gesture::Paper),
                    result: Winner::Computer,
                    score: "0-1".to_string(),
                };
                3
            ],
            ..GameStatus::default()
        },
        ..Status::default()
    };
    let body = serde_json::to_vec(&status).unwrap_or_default();
    c.bench_function("decode a full /state body", |b| {
        b.iter(|| serde_json::from_slice::<Status>(&body))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use roshambo::Arbitrary;
use roshambo::COUNTDOWN;
use roshambo::dto::*;
use roshambo::gesture::*;
use roshambo::round::*;
use roshambo::session::Input;

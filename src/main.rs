//! Anagram Drift demo
//!
//! Plays a few rounds headless: a scripted typist finds sub-words, throws
//! them at the drifting word and finally solves it. Run with
//! `RUST_LOG=debug` to watch the engine.

use anagram_drift::consts::TRACK_WIDTH;
use anagram_drift::{Levels, RoundEngine, Settings, SubmitState, WordList};

/// Frame step for the demo loop (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Frames between key presses
const FRAMES_PER_KEY: u32 = 12;
/// Frames a thrown word takes to reach the drifting word
const THROW_FRAMES: u32 = 20;

const LEVELS_JSON: &str = r#"[
    {"text": "START", "help": "TYPE THE LETTERS OF START, THEN PRESS ENTER."},
    {"text": "PLANET"},
    {"text": "ORBIT"},
    {"text": "GALAXY"}
]"#;

const WORDS: &[&str] = &[
    "START", "STAR", "ART", "TAR", "RAT", "PLANET", "PLAN", "PLANE", "PLANT", "NET", "ANT",
    "ORBIT", "BIT", "ROB", "RIOT", "GALAXY", "GAL", "LAY",
];

/// Script for each round: sub-words first, full word last
fn script(text: &str) -> Vec<&'static str> {
    let mut words: Vec<&'static str> = WORDS
        .iter()
        .copied()
        .filter(|word| *word != text && is_sub_word(word, text))
        .take(2)
        .collect();
    if let Some(full) = WORDS.iter().copied().find(|word| *word == text) {
        words.push(full);
    }
    words
}

fn is_sub_word(word: &str, text: &str) -> bool {
    let mut letters: Vec<char> = text.chars().collect();
    word.chars().all(|c| match letters.iter().position(|&l| l == c) {
        Some(i) => {
            letters.remove(i);
            true
        }
        None => false,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Anagram Drift (headless demo) starting...");

    let levels = match Levels::from_json(LEVELS_JSON) {
        Ok(levels) => levels,
        Err(err) => {
            log::error!("Bad level list: {}", err);
            std::process::exit(1);
        }
    };
    let round_count = levels.len();
    let dictionary: WordList = WORDS.iter().copied().collect();
    let mut engine = match RoundEngine::new(Settings::default(), levels, dictionary, 2024) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("Could not start: {}", err);
            std::process::exit(1);
        }
    };
    engine.scale_to_screen(TRACK_WIDTH * 1.5);

    for _ in 0..round_count {
        let text = engine.round().text.clone();
        println!("Round: {}", engine.round().selects().iter().collect::<String>());
        for word in script(&text) {
            for letter in word.chars() {
                run_frames(&mut engine, FRAMES_PER_KEY);
                let presses = engine.get_presses(|available| available == letter);
                let slots = engine.press(&presses);
                log::trace!("{} -> slots {:?}", letter, slots);
            }
            let state = engine.submit();
            println!(
                "  {:<8} {:<8} score {:>3}  position {:>7.1}",
                word,
                state.as_str(),
                engine.score(),
                engine.round().word_position
            );
            if state.is_accepted() {
                run_frames(&mut engine, THROW_FRAMES);
                engine.on_output_hits_word();
            }
            if state == SubmitState::Complete {
                break;
            }
        }
        if engine.is_game_over() {
            println!("  {}", engine.round().help);
            break;
        }
    }
    println!("Final score: {}", engine.score());
}

#[cfg(not(target_arch = "wasm32"))]
fn run_frames(engine: &mut RoundEngine, frames: u32) {
    for _ in 0..frames {
        engine.tick(FRAME_DT);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosted by a web shell that drives the engine directly
}

//! Simulation command
//!
//! Plays many seeded rounds with an automated guesser to exercise the engine
//! and report how the configuration plays out.

use crate::core::Word;
use crate::round::{Round, RoundConfig, Status};
use crate::wordlists::draw_secret;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Letters by English frequency, the fallback guessing order
const FREQUENCY_ORDER: &[u8; 26] = b"etaoinshrdlcumwfgypbvkjxqz";

/// Chooses the next submission for a round
pub trait Guesser {
    /// Raw text to submit: a single letter or a whole word
    fn next_guess(&mut self, round: &Round) -> String;
}

/// Guesser that narrows a known word pool
///
/// Guesses the word once exactly one pool entry is consistent with the board,
/// otherwise the unused letter found in the most consistent candidates.
pub struct FrequencyGuesser<'a> {
    words: &'a [Word],
}

impl<'a> FrequencyGuesser<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    fn consistent(&self, round: &Round) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|w| w.len() == round.revealed().len())
            .filter(|w| {
                w.chars()
                    .iter()
                    .zip(round.revealed())
                    .all(|(&c, slot)| match slot {
                        Some(shown) => c == *shown,
                        None => !round.has_used(c),
                    })
            })
            .collect()
    }
}

impl Guesser for FrequencyGuesser<'_> {
    fn next_guess(&mut self, round: &Round) -> String {
        let candidates = self.consistent(round);

        if let [only] = candidates.as_slice() {
            return only.text().to_string();
        }

        let mut counts = [0usize; 26];
        for word in &candidates {
            for &letter in FREQUENCY_ORDER {
                if !round.has_used(letter) && word.has_letter(letter) {
                    counts[usize::from(letter - b'a')] += 1;
                }
            }
        }

        // Ties keep frequency order
        let best = FREQUENCY_ORDER
            .iter()
            .copied()
            .filter(|&l| !round.has_used(l))
            .max_by_key(|&l| (counts[usize::from(l - b'a')], std::cmp::Reverse(rank(l))));

        best.map_or_else(String::new, |l| char::from(l).to_string())
    }
}

fn rank(letter: u8) -> usize {
    FREQUENCY_ORDER
        .iter()
        .position(|&l| l == letter)
        .unwrap_or(FREQUENCY_ORDER.len())
}

/// Result of one simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedRound {
    pub seed: u64,
    pub secret: String,
    pub status: Status,
    pub attempts: u32,
    pub penalty: u32,
}

/// Aggregate of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub wins: usize,
    pub average_attempts: f64,
    pub min_attempts: Option<u32>,
    pub max_attempts: Option<u32>,
    pub penalty_distribution: FxHashMap<u32, usize>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Play one round for `seed` to completion
///
/// Returns `None` only for an empty word list.
#[must_use]
pub fn simulate_round(words: &[Word], config: &RoundConfig, seed: u64) -> Option<SimulatedRound> {
    let mut rng = StdRng::seed_from_u64(seed);
    let secret = draw_secret(words, config.difficulty, &mut rng)?.clone();
    let mut round = Round::new(secret, config);
    let mut guesser = FrequencyGuesser::new(words);

    while !round.is_finished() {
        let guess = guesser.next_guess(&round);
        if !round.submit_guess(&guess).changed_state() {
            // Guesser has nothing new to offer
            round.force_loss();
        }
    }

    Some(SimulatedRound {
        seed,
        secret: round.secret().text().to_string(),
        status: round.status(),
        attempts: round.attempts(),
        penalty: round.penalty(),
    })
}

/// Simulate `count` rounds with seeds `first_seed..first_seed + count`
///
/// Rounds run in parallel; each owns its random source, so results depend
/// only on the seeds.
#[must_use]
pub fn run_simulation(
    words: &[Word],
    config: &RoundConfig,
    first_seed: u64,
    count: usize,
    show_progress: bool,
) -> SimulationResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let rounds: Vec<SimulatedRound> = (0..count as u64)
        .into_par_iter()
        .filter_map(|i| {
            let result = simulate_round(words, config, first_seed.wrapping_add(i));
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    summarize(&rounds, start.elapsed())
}

fn summarize(rounds: &[SimulatedRound], duration: Duration) -> SimulationResult {
    let won: Vec<u32> = rounds
        .iter()
        .filter(|r| r.status == Status::Won)
        .map(|r| r.attempts)
        .collect();

    let mut penalty_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    for round in rounds {
        *penalty_distribution.entry(round.penalty).or_insert(0) += 1;
    }

    let average_attempts = if won.is_empty() {
        0.0
    } else {
        f64::from(won.iter().sum::<u32>()) / won.len() as f64
    };

    SimulationResult {
        rounds: rounds.len(),
        wins: won.len(),
        average_attempts,
        min_attempts: won.iter().copied().min(),
        max_attempts: won.iter().copied().max(),
        penalty_distribution,
        duration,
    }
}

use std::collections::BTreeMap;

use log::{info, trace};
use rand::Rng;

use crate::generator::randomness::{permutations, random_mapping, shuffle};
use crate::model::{
    Assignment, Clue, GenerateError, LogicGridCategories, LogicGridQuestion, LogicGridSolution,
    Puzzle, PuzzleKind, Question, Solution, CATEGORY_SIZE, CITIES, INSTRUMENTS, PEOPLE,
};

const MAX_PUZZLE_ATTEMPTS: usize = 25;
const MAX_MISDIRECTION_CLUES: usize = 3;
const TENURE_STATEMENTS: usize = 6;

/// Ground truth plus the accepted clue set that pins it down.
pub(crate) struct LogicGridBuild {
    pub truth: Assignment,
    pub clues: Vec<Clue>,
}

pub(crate) fn generate(rng: &mut impl Rng) -> Result<Puzzle, GenerateError> {
    for attempt in 0..MAX_PUZZLE_ATTEMPTS {
        if let Some(build) = accumulate_clues(rng) {
            return Ok(to_puzzle(build));
        }
        info!(
            target: "logic_grid",
            "attempt {} exhausted its clue pool before reaching uniqueness, retrying",
            attempt
        );
    }
    Err(GenerateError::retries_exhausted(
        PuzzleKind::LogicGrid,
        MAX_PUZZLE_ATTEMPTS,
    ))
}

/// Draws a ground truth, then greedily accepts clues from a shuffled pool
/// until their conjunction admits exactly one assignment. Returns None if the
/// pool runs dry first.
pub(crate) fn accumulate_clues(rng: &mut impl Rng) -> Option<LogicGridBuild> {
    let truth = Assignment::new(
        random_mapping(rng, &PEOPLE, &INSTRUMENTS),
        random_mapping(rng, &PEOPLE, &CITIES),
    );
    trace!(target: "logic_grid", "ground truth: {:?}", truth);

    let pool = build_clue_pool(rng, &truth);
    debug_assert!(pool.iter().all(|clue| clue.holds(&truth)));
    let pool = shuffle(rng, &pool);

    let mut accepted: Vec<Clue> = Vec::new();
    let mut leftover: Vec<Clue> = Vec::new();
    let mut unique = false;
    for clue in pool {
        if unique {
            leftover.push(clue);
            continue;
        }
        accepted.push(clue);
        let matches = count_consistent_assignments(&accepted, 2);
        trace!(
            target: "logic_grid",
            "{} clues accepted, {} candidate assignment(s)",
            accepted.len(),
            matches
        );
        if matches == 1 {
            unique = true;
        }
    }
    if !unique {
        return None;
    }

    // leftover pool clues are still true of the ground truth, so appending a
    // few as misdirection cannot break uniqueness
    let n_misdirection = rng.random_range(0..=MAX_MISDIRECTION_CLUES.min(leftover.len()));
    accepted.extend(leftover.into_iter().take(n_misdirection));
    info!(
        target: "logic_grid",
        "clue set closed: {} clues ({} misdirection)",
        accepted.len(),
        n_misdirection
    );

    Some(LogicGridBuild {
        truth,
        clues: accepted,
    })
}

fn to_puzzle(build: LogicGridBuild) -> Puzzle {
    let mut instruments = BTreeMap::new();
    let mut cities = BTreeMap::new();
    for person in 0..CATEGORY_SIZE {
        instruments.insert(
            PEOPLE[person].to_string(),
            INSTRUMENTS[build.truth.instrument_of[person]].to_string(),
        );
        cities.insert(
            PEOPLE[person].to_string(),
            CITIES[build.truth.city_of[person]].to_string(),
        );
    }

    Puzzle::new(
        PuzzleKind::LogicGrid,
        Question::LogicGrid(LogicGridQuestion {
            categories: LogicGridCategories {
                people: PEOPLE.iter().map(|s| s.to_string()).collect(),
                instruments: INSTRUMENTS.iter().map(|s| s.to_string()).collect(),
                cities: CITIES.iter().map(|s| s.to_string()).collect(),
            },
            clues: build.clues.iter().map(|clue| clue.text.clone()).collect(),
        }),
        Solution::LogicGrid(LogicGridSolution {
            instruments,
            cities,
        }),
    )
}

/// Candidate clues across all seven template families, every one true of the
/// ground truth by construction.
fn build_clue_pool(rng: &mut impl Rng, truth: &Assignment) -> Vec<Clue> {
    let mut pool = Vec::new();

    // direct positives and chained person-instrument-city statements
    for person in 0..CATEGORY_SIZE {
        let instrument = truth.instrument_of[person];
        pool.push(Clue::plays(person, instrument));
        pool.push(Clue::plays_and_lives_in(
            person,
            instrument,
            truth.city_of[person],
        ));
    }

    // direct negatives: every wrong instrument for every person
    for person in 0..CATEGORY_SIZE {
        for instrument in 0..CATEGORY_SIZE {
            if instrument != truth.instrument_of[person] {
                pool.push(Clue::does_not_play(person, instrument));
            }
        }
    }

    // indirect positives and negated instrument-city statements
    for instrument in 0..CATEGORY_SIZE {
        let city = truth.city_of_instrument[instrument];
        pool.push(Clue::player_lives_in(instrument, city));
        for wrong in 0..CATEGORY_SIZE {
            if wrong != city {
                pool.push(Clue::player_not_from(instrument, wrong));
            }
        }
    }

    // either/or: the correct instrument plus one wrong option, order random
    for person in 0..CATEGORY_SIZE {
        let correct = truth.instrument_of[person];
        let wrong = loop {
            let candidate = rng.random_range(0..CATEGORY_SIZE);
            if candidate != correct {
                break candidate;
            }
        };
        let options = if rng.random_bool(0.5) {
            [correct, wrong]
        } else {
            [wrong, correct]
        };
        pool.push(Clue::plays_either(person, options));
    }

    // misdirection: statements drawn from one fabricated tenure ordering so
    // the noise stays mutually consistent
    let tenure_order = shuffle(rng, &(0..CATEGORY_SIZE).collect::<Vec<_>>());
    let mut tenure_pairs = Vec::new();
    for senior in 0..CATEGORY_SIZE {
        for junior in senior + 1..CATEGORY_SIZE {
            tenure_pairs.push((tenure_order[senior], tenure_order[junior]));
        }
    }
    for &(veteran, newcomer) in shuffle(rng, &tenure_pairs).iter().take(TENURE_STATEMENTS) {
        pool.push(Clue::longer_tenure(veteran, newcomer));
    }

    pool
}

/// Counts assignments satisfying every clue by enumerating both permutation
/// spaces, pruning the city enumeration with the instrument-only clues and
/// stopping as soon as `cap` matches are seen.
pub(crate) fn count_consistent_assignments(clues: &[Clue], cap: usize) -> usize {
    let identity: Vec<usize> = (0..CATEGORY_SIZE).collect();
    let (instrument_clues, cross_clues): (Vec<&Clue>, Vec<&Clue>) =
        clues.iter().partition(|clue| clue.kind.instrument_only());

    let mut matches = 0;
    for instrument_of in permutations(&identity) {
        let mut candidate = Assignment::new(instrument_of, identity.clone());
        if !instrument_clues.iter().all(|clue| clue.holds(&candidate)) {
            continue;
        }
        for city_of in permutations(&identity) {
            candidate.city_of = city_of;
            candidate.rederive();
            if cross_clues.iter().all(|clue| clue.holds(&candidate)) {
                matches += 1;
                if matches >= cap {
                    return matches;
                }
            }
        }
    }
    matches
}

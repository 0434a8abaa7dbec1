use std::fmt::{self, Debug};

use serde::{Deserialize, Serialize};

use crate::model::{CATEGORY_SIZE, CITIES, INSTRUMENTS, PEOPLE};

/// A candidate pairing of the three categories, held as index tables.
/// `city_of_instrument` is always derived from the other two, so the three
/// relations stay mutually consistent.
#[derive(Clone, PartialEq, Eq)]
pub struct Assignment {
    /// person -> instrument
    pub instrument_of: Vec<usize>,
    /// person -> city
    pub city_of: Vec<usize>,
    /// instrument -> city, composed from the two tables above
    pub city_of_instrument: Vec<usize>,
}

impl Assignment {
    pub fn new(instrument_of: Vec<usize>, city_of: Vec<usize>) -> Self {
        assert_eq!(instrument_of.len(), CATEGORY_SIZE);
        assert_eq!(city_of.len(), CATEGORY_SIZE);
        let mut assignment = Self {
            instrument_of,
            city_of,
            city_of_instrument: vec![0; CATEGORY_SIZE],
        };
        assignment.rederive();
        assignment
    }

    /// Recomputes `city_of_instrument` after either table changed.
    pub fn rederive(&mut self) {
        for person in 0..CATEGORY_SIZE {
            self.city_of_instrument[self.instrument_of[person]] = self.city_of[person];
        }
    }
}

impl Debug for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairings = (0..CATEGORY_SIZE)
            .map(|person| {
                format!(
                    "{}:{}/{}",
                    PEOPLE[person],
                    INSTRUMENTS[self.instrument_of[person]],
                    CITIES[self.city_of[person]]
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "[{}]", pairings)
    }
}

/// The predicate behind a clue, as plain data rather than a closure, so clue
/// sets stay inspectable and the misdirection family is an explicit variant.
/// Operands are category indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueKind {
    Plays { person: usize, instrument: usize },
    DoesNotPlay { person: usize, instrument: usize },
    PlayerLivesIn { instrument: usize, city: usize },
    PlaysAndLivesIn { person: usize, instrument: usize, city: usize },
    PlaysEither { person: usize, options: [usize; 2] },
    /// Narrative noise: true of every assignment by construction.
    LongerTenure { veteran: usize, newcomer: usize },
    PlayerNotFrom { instrument: usize, city: usize },
}

impl ClueKind {
    pub fn holds(&self, assignment: &Assignment) -> bool {
        match *self {
            ClueKind::Plays { person, instrument } => assignment.instrument_of[person] == instrument,
            ClueKind::DoesNotPlay { person, instrument } => {
                assignment.instrument_of[person] != instrument
            }
            ClueKind::PlayerLivesIn { instrument, city } => {
                assignment.city_of_instrument[instrument] == city
            }
            ClueKind::PlaysAndLivesIn {
                person,
                instrument,
                city,
            } => {
                assignment.instrument_of[person] == instrument
                    && assignment.city_of_instrument[instrument] == city
            }
            ClueKind::PlaysEither { person, options } => {
                options.contains(&assignment.instrument_of[person])
            }
            ClueKind::LongerTenure { .. } => true,
            ClueKind::PlayerNotFrom { instrument, city } => {
                assignment.city_of_instrument[instrument] != city
            }
        }
    }

    /// Whether the predicate reads only the person->instrument table. Such
    /// clues can prune candidate instrument pairings before any city
    /// permutation is considered.
    pub fn instrument_only(&self) -> bool {
        matches!(
            self,
            ClueKind::Plays { .. }
                | ClueKind::DoesNotPlay { .. }
                | ClueKind::PlaysEither { .. }
                | ClueKind::LongerTenure { .. }
        )
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub text: String,
    pub kind: ClueKind,
}

impl Clue {
    fn new(text: String, kind: ClueKind) -> Self {
        Self { text, kind }
    }

    pub fn plays(person: usize, instrument: usize) -> Self {
        Self::new(
            format!("{} plays the {}.", PEOPLE[person], INSTRUMENTS[instrument]),
            ClueKind::Plays { person, instrument },
        )
    }

    pub fn does_not_play(person: usize, instrument: usize) -> Self {
        Self::new(
            format!(
                "{} does not play the {}.",
                PEOPLE[person], INSTRUMENTS[instrument]
            ),
            ClueKind::DoesNotPlay { person, instrument },
        )
    }

    pub fn player_lives_in(instrument: usize, city: usize) -> Self {
        Self::new(
            format!(
                "The {} player lives in {}.",
                INSTRUMENTS[instrument], CITIES[city]
            ),
            ClueKind::PlayerLivesIn { instrument, city },
        )
    }

    pub fn plays_and_lives_in(person: usize, instrument: usize, city: usize) -> Self {
        Self::new(
            format!(
                "{} plays the {}, and the {} player lives in {}.",
                PEOPLE[person], INSTRUMENTS[instrument], INSTRUMENTS[instrument], CITIES[city]
            ),
            ClueKind::PlaysAndLivesIn {
                person,
                instrument,
                city,
            },
        )
    }

    pub fn plays_either(person: usize, options: [usize; 2]) -> Self {
        assert_ne!(options[0], options[1], "options must be distinct");
        Self::new(
            format!(
                "{} plays either the {} or the {}.",
                PEOPLE[person], INSTRUMENTS[options[0]], INSTRUMENTS[options[1]]
            ),
            ClueKind::PlaysEither { person, options },
        )
    }

    pub fn longer_tenure(veteran: usize, newcomer: usize) -> Self {
        assert_ne!(veteran, newcomer, "tenure ordering is strict");
        Self::new(
            format!(
                "{} has been with the band longer than {}.",
                PEOPLE[veteran], PEOPLE[newcomer]
            ),
            ClueKind::LongerTenure { veteran, newcomer },
        )
    }

    pub fn player_not_from(instrument: usize, city: usize) -> Self {
        Self::new(
            format!(
                "The {} player does not live in {}.",
                INSTRUMENTS[instrument], CITIES[city]
            ),
            ClueKind::PlayerNotFrom { instrument, city },
        )
    }

    pub fn holds(&self, assignment: &Assignment) -> bool {
        self.kind.holds(assignment)
    }
}

impl Debug for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

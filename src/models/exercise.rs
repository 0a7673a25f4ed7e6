// ABOUTME: Static exercise catalog keyed by sport
// ABOUTME: Read-only lookup of known (sport, category, name) triples for validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coaching

use std::collections::HashMap;
use std::sync::LazyLock;

use super::sport::Sport;

/// Known strength training exercises, keyed by category.
const STRENGTH_EXERCISES: &[(&str, &[&str])] = &[
    (
        "BENCH_PRESS",
        &[
            "BARBELL_BENCH_PRESS",
            "DUMBBELL_BENCH_PRESS",
            "INCLINE_BARBELL_BENCH_PRESS",
            "CLOSE_GRIP_BARBELL_BENCH_PRESS",
            "PUSH_UP",
        ],
    ),
    (
        "SQUAT",
        &[
            "BARBELL_BACK_SQUAT",
            "BARBELL_FRONT_SQUAT",
            "GOBLET_SQUAT",
            "BODY_WEIGHT_SQUAT",
            "BULGARIAN_SPLIT_SQUAT",
        ],
    ),
    (
        "DEADLIFT",
        &[
            "BARBELL_DEADLIFT",
            "ROMANIAN_DEADLIFT",
            "SINGLE_LEG_ROMANIAN_DEADLIFT",
            "SUMO_DEADLIFT",
            "TRAP_BAR_DEADLIFT",
        ],
    ),
    (
        "ROW",
        &[
            "BARBELL_ROW",
            "DUMBBELL_ROW",
            "SEATED_CABLE_ROW",
            "INVERTED_ROW",
        ],
    ),
    (
        "PULL_UP",
        &["PULL_UP", "CHIN_UP", "ASSISTED_PULL_UP", "LAT_PULLDOWN"],
    ),
    (
        "SHOULDER_PRESS",
        &[
            "OVERHEAD_BARBELL_PRESS",
            "DUMBBELL_SHOULDER_PRESS",
            "ARNOLD_PRESS",
            "LANDMINE_PRESS",
        ],
    ),
    (
        "LUNGE",
        &[
            "WALKING_LUNGE",
            "REVERSE_LUNGE",
            "LATERAL_LUNGE",
            "OVERHEAD_LUNGE",
        ],
    ),
    (
        "HIP_RAISE",
        &["BARBELL_HIP_THRUST", "GLUTE_BRIDGE", "SINGLE_LEG_GLUTE_BRIDGE"],
    ),
    (
        "CORE",
        &["DEAD_BUG", "BIRD_DOG", "PALLOF_PRESS", "RUSSIAN_TWIST"],
    ),
    (
        "PLANK",
        &["FRONT_PLANK", "SIDE_PLANK", "PLANK_SHOULDER_TAP", "PLANK_UP_DOWN"],
    ),
    (
        "CURL",
        &["BARBELL_CURL", "DUMBBELL_BICEPS_CURL", "HAMMER_CURL", "CABLE_CURL"],
    ),
    (
        "TRICEPS_EXTENSION",
        &[
            "CABLE_PUSHDOWN",
            "LYING_TRICEPS_EXTENSION",
            "OVERHEAD_TRICEPS_EXTENSION",
            "BENCH_DIP",
        ],
    ),
    (
        "CALF_RAISE",
        &["STANDING_CALF_RAISE", "SEATED_CALF_RAISE", "SINGLE_LEG_CALF_RAISE"],
    ),
];

/// Known cardio training exercises, keyed by category.
const CARDIO_EXERCISES: &[(&str, &[&str])] = &[
    (
        "CARDIO",
        &[
            "JUMPING_JACKS",
            "HIGH_KNEES",
            "BUTT_KICKS",
            "MOUNTAIN_CLIMBER",
            "BEAR_CRAWL",
        ],
    ),
    (
        "PLYO",
        &["JUMP_SQUAT", "BOX_JUMP", "BROAD_JUMP", "BURPEE", "JUMP_ROPE"],
    ),
    (
        "MACHINE",
        &[
            "ROWING_MACHINE",
            "SKI_ERG",
            "ASSAULT_BIKE",
            "STAIR_CLIMBER",
            "TREADMILL_RUN",
        ],
    ),
    (
        "CARRY",
        &["FARMERS_CARRY", "SUITCASE_CARRY", "OVERHEAD_CARRY"],
    ),
];

/// Process-wide exercise catalog, loaded once and read-only thereafter.
static CATALOG: LazyLock<ExerciseCatalog> = LazyLock::new(ExerciseCatalog::build);

/// Read-only lookup of known (sport, category, name) exercise triples.
///
/// Only sports whose steps draw from the catalog appear as keys; see
/// [`Sport::uses_exercise_catalog`].
pub struct ExerciseCatalog {
    by_sport: HashMap<Sport, HashMap<&'static str, &'static [&'static str]>>,
}

impl ExerciseCatalog {
    fn build() -> Self {
        let mut by_sport = HashMap::new();
        by_sport.insert(Sport::StrengthTraining, STRENGTH_EXERCISES.iter().copied().collect());
        by_sport.insert(Sport::CardioTraining, CARDIO_EXERCISES.iter().copied().collect());
        Self { by_sport }
    }

    /// Shared process-wide catalog instance
    #[must_use]
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Whether (sport, category, name) is a known exercise triple
    #[must_use]
    pub fn is_known(&self, sport: Sport, category: &str, name: &str) -> bool {
        self.by_sport
            .get(&sport)
            .and_then(|categories| categories.get(category))
            .is_some_and(|names| names.contains(&name))
    }

    /// Whether the category exists for the sport, regardless of name
    #[must_use]
    pub fn has_category(&self, sport: Sport, category: &str) -> bool {
        self.by_sport
            .get(&sport)
            .is_some_and(|categories| categories.contains_key(category))
    }

    /// Known categories for a sport, for diagnostics
    #[must_use]
    pub fn categories(&self, sport: Sport) -> Vec<&'static str> {
        self.by_sport.get(&sport).map_or_else(Vec::new, |categories| {
            let mut keys: Vec<&'static str> = categories.keys().copied().collect();
            keys.sort_unstable();
            keys
        })
    }
}

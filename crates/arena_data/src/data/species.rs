use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag carried by every entity in the arena.
///
/// `Rock`, `Paper` and `Scissors` are the base species that decide the match;
/// `Bomb` and `Shield` are power-ups that spend a charge on each qualifying
/// collision and fall back to a base species when drained.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Archive,
    RkyvSerialize,
    RkyvDeserialize,
)]
#[archive(check_bytes)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Rock,
    Paper,
    Scissors,
    Bomb,
    Shield,
}

/// Per-species constants looked up at entity creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    pub radius: f64,
    pub initial_power: u32,
    pub glowing: bool,
    pub icon: &'static str,
    pub color: &'static str,
}

const ROCK: SpeciesProfile = SpeciesProfile {
    radius: 12.0,
    initial_power: 1,
    glowing: false,
    icon: "🪨",
    color: "#8B4513",
};
const PAPER: SpeciesProfile = SpeciesProfile {
    radius: 12.0,
    initial_power: 1,
    glowing: false,
    icon: "📄",
    color: "#FFE4B5",
};
const SCISSORS: SpeciesProfile = SpeciesProfile {
    radius: 12.0,
    initial_power: 1,
    glowing: false,
    icon: "✂️",
    color: "#C0C0C0",
};
const BOMB: SpeciesProfile = SpeciesProfile {
    radius: 15.0,
    initial_power: 3,
    glowing: true,
    icon: "💣",
    color: "#FF4500",
};
const SHIELD: SpeciesProfile = SpeciesProfile {
    radius: 18.0,
    initial_power: 5,
    glowing: true,
    icon: "🛡️",
    color: "#4169E1",
};

/// Largest radius of any species; arenas must be wider than twice this.
pub const MAX_RADIUS: f64 = 18.0;

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Rock,
        Species::Paper,
        Species::Scissors,
        Species::Bomb,
        Species::Shield,
    ];

    /// The three species that count toward the win condition.
    pub const BASE: [Species; 3] = [Species::Rock, Species::Paper, Species::Scissors];

    #[must_use]
    pub const fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Rock => &ROCK,
            Species::Paper => &PAPER,
            Species::Scissors => &SCISSORS,
            Species::Bomb => &BOMB,
            Species::Shield => &SHIELD,
        }
    }

    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Species::Rock | Species::Paper | Species::Scissors)
    }

    #[must_use]
    pub const fn is_power_up(self) -> bool {
        matches!(self, Species::Bomb | Species::Shield)
    }

    /// Cyclic base relation: Rock > Scissors > Paper > Rock.
    ///
    /// Always false when either side is a power-up.
    #[must_use]
    pub const fn beats(self, other: Species) -> bool {
        matches!(
            (self, other),
            (Species::Rock, Species::Scissors)
                | (Species::Scissors, Species::Paper)
                | (Species::Paper, Species::Rock)
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Species::Rock => "rock",
            Species::Paper => "paper",
            Species::Scissors => "scissors",
            Species::Bomb => "bomb",
            Species::Shield => "shield",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Species::Rock => "Rock",
            Species::Paper => "Paper",
            Species::Scissors => "Scissors",
            Species::Bomb => "Bomb",
            Species::Shield => "Shield",
        };
        f.write_str(label)
    }
}

impl std::str::FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Species::Rock),
            "paper" => Ok(Species::Paper),
            "scissors" => Ok(Species::Scissors),
            "bomb" => Ok(Species::Bomb),
            "shield" => Ok(Species::Shield),
            other => Err(format!("unknown species '{other}'")),
        }
    }
}

/// Population tally for every species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesCounts {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
    pub bomb: usize,
    pub shield: usize,
}

impl SpeciesCounts {
    pub fn tally<I: IntoIterator<Item = Species>>(species: I) -> Self {
        let mut counts = Self::default();
        for s in species {
            *counts.get_mut(s) += 1;
        }
        counts
    }

    #[must_use]
    pub fn get(&self, species: Species) -> usize {
        match species {
            Species::Rock => self.rock,
            Species::Paper => self.paper,
            Species::Scissors => self.scissors,
            Species::Bomb => self.bomb,
            Species::Shield => self.shield,
        }
    }

    pub fn get_mut(&mut self, species: Species) -> &mut usize {
        match species {
            Species::Rock => &mut self.rock,
            Species::Paper => &mut self.paper,
            Species::Scissors => &mut self.scissors,
            Species::Bomb => &mut self.bomb,
            Species::Shield => &mut self.shield,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors + self.bomb + self.shield
    }

    #[must_use]
    pub fn base_total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    /// The single surviving base species, if exactly one has a non-zero count.
    #[must_use]
    pub fn sole_base_survivor(&self) -> Option<Species> {
        let mut alive = Species::BASE.into_iter().filter(|s| self.get(*s) > 0);
        match (alive.next(), alive.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table() {
        assert_eq!(Species::Rock.profile().radius, 12.0);
        assert_eq!(Species::Bomb.profile().radius, 15.0);
        assert_eq!(Species::Shield.profile().radius, 18.0);
        assert_eq!(Species::Bomb.profile().initial_power, 3);
        assert_eq!(Species::Shield.profile().initial_power, 5);
        assert!(Species::Shield.profile().glowing);
        assert!(!Species::Paper.profile().glowing);
    }

    #[test]
    fn test_beats_is_cyclic() {
        assert!(Species::Rock.beats(Species::Scissors));
        assert!(Species::Scissors.beats(Species::Paper));
        assert!(Species::Paper.beats(Species::Rock));
        assert!(!Species::Scissors.beats(Species::Rock));
        assert!(!Species::Bomb.beats(Species::Rock));
        assert!(!Species::Rock.beats(Species::Rock));
    }

    #[test]
    fn test_serde_tags_are_lowercase() {
        let json = serde_json::to_string(&Species::Scissors).unwrap();
        assert_eq!(json, "\"scissors\"");
        let parsed: Species = serde_json::from_str("\"shield\"").unwrap();
        assert_eq!(parsed, Species::Shield);
        assert!(serde_json::from_str::<Species>("\"lizard\"").is_err());
    }

    #[test]
    fn test_sole_base_survivor() {
        let counts = SpeciesCounts {
            paper: 5,
            bomb: 2,
            ..Default::default()
        };
        assert_eq!(counts.sole_base_survivor(), Some(Species::Paper));

        let counts = SpeciesCounts {
            rock: 3,
            paper: 2,
            scissors: 1,
            ..Default::default()
        };
        assert_eq!(counts.sole_base_survivor(), None);
        assert_eq!(SpeciesCounts::default().sole_base_survivor(), None);
    }

    #[test]
    fn test_tally() {
        let counts = SpeciesCounts::tally([Species::Rock, Species::Rock, Species::Shield]);
        assert_eq!(counts.rock, 2);
        assert_eq!(counts.shield, 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.base_total(), 2);
    }
}

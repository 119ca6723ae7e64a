//! Conversion rule table applied to colliding pairs.
//!
//! Precedence, first match wins:
//! 1. rock meets rock: no change, `rock-rock` event
//! 2. either side is a bomb: the other side becomes a random base species and
//!    the bomb drains (falls back to `Rock`)
//! 3. either side is a shield: each shield drains; the first participant falls
//!    back to `Rock`, the second to `Paper`
//! 4. base species: the loser takes the winner's species
//!
//! Identical non-rock pairs never mutate.

use crate::events::ArenaEvent;
use arena_data::{Entity, Species};
use rand::Rng;

/// What happens to one participant of a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Keep,
    Become(Species),
    /// Spend one charge; once power reaches zero the species is replaced by
    /// `fallback`.
    Drain { fallback: Species },
}

/// Result of applying the rule table to an ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub first: Conversion,
    pub second: Conversion,
    pub event: Option<ArenaEvent>,
}

impl RuleOutcome {
    const NONE: RuleOutcome = RuleOutcome {
        first: Conversion::Keep,
        second: Conversion::Keep,
        event: None,
    };
}

fn random_base<R: Rng>(rng: &mut R) -> Species {
    Species::BASE[rng.gen_range(0..Species::BASE.len())]
}

fn shield_side(species: Species, fallback: Species) -> Conversion {
    if species == Species::Shield {
        Conversion::Drain { fallback }
    } else {
        Conversion::Keep
    }
}

/// Maps a colliding species pair to per-side conversions and an event tag.
///
/// Only the bomb branch consumes randomness.
pub fn apply_rules<R: Rng>(first: Species, second: Species, rng: &mut R) -> RuleOutcome {
    use Species::{Bomb, Paper, Rock, Shield};

    if first == second {
        return if first == Rock {
            RuleOutcome {
                event: Some(ArenaEvent::RockRock),
                ..RuleOutcome::NONE
            }
        } else {
            RuleOutcome::NONE
        };
    }

    match (first, second) {
        (Bomb, _) => RuleOutcome {
            first: Conversion::Drain { fallback: Rock },
            second: Conversion::Become(random_base(rng)),
            event: Some(ArenaEvent::Bomb),
        },
        (_, Bomb) => RuleOutcome {
            first: Conversion::Become(random_base(rng)),
            second: Conversion::Drain { fallback: Rock },
            event: Some(ArenaEvent::Bomb),
        },
        (Shield, _) | (_, Shield) => RuleOutcome {
            first: shield_side(first, Rock),
            second: shield_side(second, Paper),
            event: Some(ArenaEvent::Shield),
        },
        _ if first.beats(second) => RuleOutcome {
            first: Conversion::Keep,
            second: Conversion::Become(first),
            event: Some(ArenaEvent::Convert),
        },
        _ => RuleOutcome {
            first: Conversion::Become(second),
            second: Conversion::Keep,
            event: Some(ArenaEvent::Convert),
        },
    }
}

/// Applies one side of an outcome to its entity.
pub fn apply_conversion(entity: &mut Entity, conversion: Conversion) {
    match conversion {
        Conversion::Keep => {}
        Conversion::Become(species) => entity.species = species,
        Conversion::Drain { fallback } => {
            entity.power = entity.power.saturating_sub(1);
            if entity.power == 0 {
                entity.species = fallback;
            }
        }
    }
}

//! Pairwise collision detection and response.

use crate::events::ArenaEvent;
use crate::systems::rules::{apply_conversion, apply_rules};
use arena_data::Entity;
use rand::Rng;

/// Resolves a possible collision between `a` and `b`.
///
/// Overlapping pairs are pushed apart by half the overlap each along the
/// line between centers, exchange velocity directions while each keeps its
/// own speed, and then go through the conversion rules. Returns `None` when
/// the pair does not overlap or the rules produce no event.
///
/// Coincident centers give no separation direction, so separation is skipped
/// for them; the velocity exchange and rules still apply.
pub fn resolve<R: Rng>(a: &mut Entity, b: &mut Entity, rng: &mut R) -> Option<ArenaEvent> {
    let dx = b.position.x - a.position.x;
    let dy = b.position.y - a.position.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let reach = a.radius + b.radius;
    if dist >= reach {
        return None;
    }

    if dist > 0.0 {
        let half_overlap = (reach - dist) / 2.0;
        let sx = dx / dist * half_overlap;
        let sy = dy / dist * half_overlap;
        a.position.x -= sx;
        a.position.y -= sy;
        b.position.x += sx;
        b.position.y += sy;
    }

    let speed_a = a.velocity.speed();
    let speed_b = b.velocity.speed();
    std::mem::swap(&mut a.velocity, &mut b.velocity);
    a.velocity.set_speed(speed_a);
    b.velocity.set_speed(speed_b);

    let outcome = apply_rules(a.species, b.species, rng);
    apply_conversion(a, outcome.first);
    apply_conversion(b, outcome.second);
    outcome.event
}

/// Resolves every unordered pair `(i, j)` with `i < j`, in index order, in a
/// single pass. Events are appended to `events` in the order they occur.
pub fn sweep<R: Rng>(entities: &mut [Entity], rng: &mut R, events: &mut Vec<ArenaEvent>) {
    for i in 0..entities.len() {
        let (head, tail) = entities.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let Some(event) = resolve(a, b, rng) {
                events.push(event);
            }
        }
    }
}

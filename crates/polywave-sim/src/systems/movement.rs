//! Player movement system: click-to-move toward the stored destination.

use hecs::World;

use polywave_core::components::{MoveTarget, Player, PlayerStats};
use polywave_core::constants::ARRIVE_EPSILON;
use polywave_core::types::Position;

/// Move the player toward its destination. Snaps and clears the target
/// once within the arrival epsilon or when a step would overshoot.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (_player, pos, target, stats)) in
        world.query_mut::<(&Player, &mut Position, &mut MoveTarget, &PlayerStats)>()
    {
        let Some(destination) = target.destination else {
            continue;
        };
        let distance = pos.distance_to(&destination);
        let step = stats.speed * dt;
        if distance <= ARRIVE_EPSILON || step >= distance {
            *pos = destination;
            target.destination = None;
        } else {
            let direction = pos.direction_to(&destination);
            pos.x += direction.x * step;
            pos.z += direction.z * step;
        }
    }
}

//! Simulation constants and tuning parameters.

// --- Player defaults ---

/// Base max health before permanent bonuses.
pub const PLAYER_BASE_HEALTH: f64 = 100.0;

/// Base damage before permanent bonuses.
pub const PLAYER_BASE_DAMAGE: f64 = 10.0;

/// Base movement speed (units/s) before permanent bonuses.
pub const PLAYER_BASE_SPEED: f64 = 5.0;

/// Base attack speed.
pub const PLAYER_BASE_ATTACK_SPEED: f64 = 1.0;

/// Default cosmetic color.
pub const PLAYER_DEFAULT_COLOR: &str = "#00ff88";

// --- Movement ---

/// Distance at which a moving entity snaps to its destination.
pub const ARRIVE_EPSILON: f64 = 0.1;

/// Enemy melee range; inside it the enemy stands and deals contact damage.
pub const MELEE_RANGE: f64 = 1.0;

/// Player auto-attack range.
pub const AUTO_ATTACK_RANGE: f64 = 15.0;

/// Clicks farther than this from the origin are ignored (not clamped).
pub const CLICK_MAX_RADIUS: f64 = 45.0;

// --- Spawning & waves ---

/// Enemies spawn on a world-fixed ring of this radius around the origin,
/// not around the player.
pub const SPAWN_RING_RADIUS: f64 = 25.0;

/// Per-wave stat multiplier step: 1 + (wave - 1) * this.
pub const WAVE_STAT_STEP: f64 = 0.15;

/// Cap on the derived enemy speed multiplier.
pub const WAVE_SPEED_CAP: f64 = 2.0;

/// A wave lasts this long before the next begins.
pub const WAVE_DURATION_SECS: f64 = 10.0;

/// Spawn interval = max(SPAWN_INTERVAL_MIN, BASE - wave * STEP).
pub const SPAWN_INTERVAL_BASE: f64 = 2.0;
pub const SPAWN_INTERVAL_STEP: f64 = 0.05;
pub const SPAWN_INTERVAL_MIN: f64 = 0.5;

/// Enemies per spawn trigger on a boss wave (wave % 10 == 0).
pub const BOSS_WAVE_SPAWN_COUNT: u32 = 3;

// --- Enemy abilities ---

/// Triangle teleport cooldown.
pub const TELEPORT_COOLDOWN_SECS: f64 = 5.0;

/// Triangle teleports onto a ring of this radius around the player.
pub const TELEPORT_RING_RADIUS: f64 = 5.0;

/// Boss self-heal amount and interval.
pub const BOSS_HEAL_AMOUNT: f64 = 5.0;
pub const BOSS_HEAL_INTERVAL_SECS: f64 = 3.0;

// --- Pets ---

/// Orbit radius around the player.
pub const PET_ORBIT_RADIUS: f64 = 2.0;

/// Pet pursuit speed = player speed * this.
pub const PET_SPEED_FACTOR: f64 = 1.2;

/// Pet attack range from its orbital position.
pub const PET_ATTACK_RANGE: f64 = 12.0;

/// Stats for a freshly purchased pet.
pub const PET_BASE_DAMAGE: f64 = 5.0;
pub const PET_BASE_ATTACK_SPEED: f64 = 1.0;

/// Pet cap before PetSlots bonuses.
pub const BASE_MAX_PETS: u32 = 1;

// --- Projectiles ---

/// Fixed projectile speed (units/s).
pub const PROJECTILE_SPEED: f64 = 20.0;

/// Projectile damage = player damage * this.
pub const PROJECTILE_DAMAGE_FACTOR: f64 = 0.5;

/// Projectiles are culled beyond this distance from the origin.
pub const PROJECTILE_MAX_RANGE: f64 = 50.0;

/// Collision radius against enemies.
pub const PROJECTILE_HIT_RADIUS: f64 = 1.0;

/// Autofire interval while the capability is owned.
pub const PROJECTILE_FIRE_INTERVAL_SECS: f64 = 0.5;

// --- Economy ---

/// Flat health granted by the health upgrade (current and max).
pub const HEALTH_UPGRADE_AMOUNT: f64 = 50.0;

/// Multiplier for damage/speed stat upgrades.
pub const STAT_UPGRADE_FACTOR: f64 = 1.2;

/// Shield granted by the shield upgrade.
pub const SHIELD_MAX_HEALTH: f64 = 100.0;

/// Cost escalation factors (floored after multiplying).
pub const COST_GROWTH_STANDARD: f64 = 1.5;
pub const COST_GROWTH_PROJECTILES: f64 = 1.8;
pub const COST_GROWTH_SHIELD: f64 = 2.0;

/// Base upgrade costs at run start.
pub const BASE_COST_DAMAGE: u32 = 50;
pub const BASE_COST_SPEED: u32 = 50;
pub const BASE_COST_HEALTH: u32 = 50;
pub const BASE_COST_PET: u32 = 100;
pub const BASE_COST_PROJECTILES: u32 = 150;
pub const BASE_COST_SHIELD: u32 = 200;

// --- Death ---

/// Death currency awarded on death: floor(wave / DEATH_CURRENCY_WAVE_DIVISOR).
pub const DEATH_CURRENCY_WAVE_DIVISOR: u32 = 2;

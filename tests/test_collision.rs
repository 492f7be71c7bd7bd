use arcade_shooter::collision::*;
use arcade_shooter::constants::*;
use arcade_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_session() -> Session {
    Session::new(Playfield::new(800.0, 600.0))
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// An enemy high up in the left corner, far from the player.
fn distant_enemy() -> Enemy {
    Enemy::new(0.0, 0.0, 1.0, EnemyKind::Normal)
}

/// An enemy overlapping the player's box.
fn enemy_on_player(s: &Session) -> Enemy {
    Enemy::new(s.player.x - 10.0, s.player.y + 5.0, 1.0, EnemyKind::Normal)
}

// ── award_point / level-up ────────────────────────────────────────────────────

#[test]
fn award_point_increments_score_only() {
    let mut s = make_session();
    s.enemies.push(distant_enemy());
    award_point(&mut s, &mut seeded_rng());
    assert_eq!(s.score, 1);
    assert_eq!(s.level, 1);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].speed, 1.0);
}

#[test]
fn tenth_point_levels_up_once() {
    let mut s = make_session();
    s.enemies = vec![distant_enemy(), distant_enemy(), distant_enemy()];
    let mut rng = seeded_rng();
    for _ in 0..10 {
        award_point(&mut s, &mut rng);
    }
    assert_eq!(s.score, 10);
    assert_eq!(s.level, 2);
    // Existing enemies sped up once, then `level` newcomers appended.
    for e in &s.enemies[..3] {
        assert_eq!(e.speed, 1.0 + LEVEL_UP_SPEED_INCREMENT);
    }
    assert_eq!(s.enemies.len(), 3 + 2);
}

#[test]
fn level_tracks_score_over_many_points() {
    let mut s = make_session();
    let mut rng = seeded_rng();
    for _ in 0..35 {
        award_point(&mut s, &mut rng);
        assert_eq!(s.level, 1 + s.score / POINTS_PER_LEVEL);
    }
    assert_eq!(s.level, 4);
    // 2 + 3 + 4 enemies arrived across the three level-ups.
    assert_eq!(s.enemies.len(), 9);
}

// ── Player × Enemy ────────────────────────────────────────────────────────────

#[test]
fn enemy_contact_costs_twenty_health_and_keeps_enemy() {
    let mut s = make_session();
    let e = enemy_on_player(&s);
    s.enemies.push(e);
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(s.health, MAX_HEALTH - ENEMY_CONTACT_DAMAGE);
    assert_eq!(report.player_hits, 1);
    assert_eq!(report.damage_taken, ENEMY_CONTACT_DAMAGE);
    assert_eq!(s.enemies.len(), 1);
}

#[test]
fn invincible_player_takes_no_damage() {
    let mut s = make_session();
    let e = enemy_on_player(&s);
    s.enemies.push(e);
    s.player.invincible = true;
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(s.health, MAX_HEALTH);
    assert_eq!(report.player_hits, 1);
    assert_eq!(report.damage_taken, 0);
}

#[test]
fn health_never_drops_below_zero() {
    let mut s = make_session();
    let e = enemy_on_player(&s);
    s.enemies = vec![e.clone(), e.clone(), e];
    let mut rng = seeded_rng();
    for _ in 0..4 {
        resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut rng);
        assert!(s.health <= MAX_HEALTH);
    }
    assert_eq!(s.health, 0);
    assert_eq!(damage_player(&mut s), 0);
}

#[test]
fn no_contact_no_damage() {
    let mut s = make_session();
    s.enemies.push(distant_enemy());
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(s.health, MAX_HEALTH);
    assert_eq!(report, CollisionReport::default());
}

// ── Projectile × Enemy ────────────────────────────────────────────────────────

#[test]
fn projectile_kill_removes_one_of_each_and_scores_one() {
    let mut s = make_session();
    s.enemies = vec![Enemy::new(100.0, 100.0, 1.0, EnemyKind::Fast), distant_enemy()];
    s.projectiles = vec![
        Projectile::new(110.0, 120.0),
        Projectile::new(120.0, 130.0),
        Projectile::new(700.0, 300.0),
    ];
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());

    assert_eq!(report.kills, 1);
    assert_eq!(s.score, 1);
    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0], distant_enemy());
    assert_eq!(s.projectiles.len(), 2);
    // The first overlapping projectile is the one spent.
    assert_eq!(s.projectiles[0].x, 120.0);
}

#[test]
fn two_enemies_two_projectiles_both_die_in_one_tick() {
    let mut s = make_session();
    s.enemies = vec![
        Enemy::new(100.0, 100.0, 1.0, EnemyKind::Normal),
        Enemy::new(300.0, 100.0, 1.0, EnemyKind::Zigzag),
    ];
    s.projectiles = vec![Projectile::new(310.0, 110.0), Projectile::new(110.0, 110.0)];
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(report.kills, 2);
    assert_eq!(s.score, 2);
    assert!(s.enemies.is_empty());
    assert!(s.projectiles.is_empty());
}

#[test]
fn kill_and_damage_in_the_same_tick() {
    let mut s = make_session();
    let on_player = enemy_on_player(&s);
    s.enemies = vec![Enemy::new(100.0, 100.0, 1.0, EnemyKind::Normal), on_player];
    s.projectiles = vec![Projectile::new(110.0, 110.0)];
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(report.kills, 1);
    assert_eq!(report.damage_taken, ENEMY_CONTACT_DAMAGE);
    assert_eq!(s.score, 1);
    assert_eq!(s.health, MAX_HEALTH - ENEMY_CONTACT_DAMAGE);
}

#[test]
fn tenth_kill_levels_up_and_reinforcements_survive_the_pass() {
    let mut s = make_session();
    s.score = 9;
    s.enemies = vec![Enemy::new(100.0, 100.0, 1.0, EnemyKind::Normal), distant_enemy()];
    s.projectiles = vec![Projectile::new(110.0, 110.0)];
    resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());

    assert_eq!(s.score, 10);
    assert_eq!(s.level, 2);
    // distant enemy (sped up) + 2 reinforcements
    assert_eq!(s.enemies.len(), 3);
    assert_eq!(s.enemies[0].speed, 1.0 + LEVEL_UP_SPEED_INCREMENT);
}

// ── Player × PowerUp ──────────────────────────────────────────────────────────

#[test]
fn pickup_applies_effect_and_removes_power_up() {
    let mut s = make_session();
    s.health = 50;
    let (px, py) = (s.player.x, s.player.y);
    s.power_ups = vec![
        PowerUp::new(px, py + 10.0, PowerUpKind::Health),
        PowerUp::new(10.0, 10.0, PowerUpKind::Shield),
    ];
    let report = resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(report.pickups, vec![PowerUpKind::Health]);
    assert_eq!(s.health, 50 + HEALTH_RESTORE);
    assert_eq!(s.power_ups.len(), 1);
    assert_eq!(s.power_ups[0].kind, PowerUpKind::Shield);
}

#[test]
fn shield_pickup_protects_from_later_contacts() {
    let mut s = make_session();
    let (px, py) = (s.player.x, s.player.y);
    s.power_ups = vec![PowerUp::new(px, py + 10.0, PowerUpKind::Shield)];
    resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert!(s.player.invincible);

    let e = enemy_on_player(&s);
    s.enemies.push(e);
    resolve_collisions(&mut s, EFFECT_DURATION_TICKS, &mut seeded_rng());
    assert_eq!(s.health, MAX_HEALTH);
}

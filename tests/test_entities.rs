use arcade_shooter::constants::*;
use arcade_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn field() -> Playfield {
    Playfield::new(400.0, 300.0)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[test]
fn bounds_overlap_is_strict() {
    let a = Bounds { left: 0.0, right: 10.0, top: 0.0, bottom: 10.0 };
    let touching = Bounds { left: 10.0, right: 20.0, top: 0.0, bottom: 10.0 };
    let overlapping = Bounds { left: 9.0, right: 20.0, top: 9.0, bottom: 20.0 };
    assert!(!a.intersects(&touching));
    assert!(a.intersects(&overlapping));
    assert!(overlapping.intersects(&a));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_starts_centred_on_bottom_row() {
    let p = Player::new(&field());
    assert_eq!(p.x, 200.0);
    assert_eq!(p.y, 300.0 - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
    assert_eq!(p.speed, PLAYER_SPEED);
    assert!(!p.invincible);
}

#[test]
fn player_moves_by_speed_and_stops() {
    let f = field();
    let mut p = Player::new(&f);
    p.move_left();
    p.update(&f);
    assert_eq!(p.x, 200.0 - PLAYER_SPEED);
    p.move_right();
    p.update(&f);
    p.update(&f);
    assert_eq!(p.x, 200.0 + PLAYER_SPEED);
    p.stop();
    p.update(&f);
    assert_eq!(p.x, 200.0 + PLAYER_SPEED);
}

#[test]
fn player_clamps_to_left_edge() {
    let f = field();
    let mut p = Player::new(&f);
    p.x = PLAYER_WIDTH / 2.0 + 1.0;
    p.move_left();
    p.update(&f);
    assert_eq!(p.x, PLAYER_WIDTH / 2.0);
}

#[test]
fn player_clamps_to_right_edge() {
    let f = field();
    let mut p = Player::new(&f);
    p.x = f.width - PLAYER_WIDTH / 2.0 - 1.0;
    p.move_right();
    p.update(&f);
    assert_eq!(p.x, f.width - PLAYER_WIDTH / 2.0);
}

#[test]
fn player_is_reseated_when_playfield_shrinks() {
    let mut p = Player::new(&Playfield::new(800.0, 600.0));
    p.x = 700.0;
    let small = Playfield::new(300.0, 200.0);
    p.place_on(&small);
    assert_eq!(p.x, 300.0 - PLAYER_WIDTH / 2.0);
    assert_eq!(p.y, 200.0 - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn projectile_moves_up_and_leaves_through_the_top() {
    let mut pr = Projectile::new(100.0, 8.0);
    pr.update();
    assert_eq!(pr.y, 3.0);
    assert!(!pr.is_off_field());
    pr.update();
    pr.update();
    // y = -7, bottom edge at 3: still partly visible
    assert!(!pr.is_off_field());
    pr.update();
    assert!(pr.is_off_field());
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn normal_enemy_falls_straight() {
    let mut e = Enemy::new(50.0, 10.0, 2.0, EnemyKind::Normal);
    let recycled = e.update(&field(), &mut seeded_rng());
    assert!(!recycled);
    assert_eq!(e.y, 12.0);
    assert_eq!(e.x, 50.0);
}

#[test]
fn zigzag_offset_follows_vertical_position() {
    let mut e = Enemy::new(50.0, 10.0, 2.0, EnemyKind::Zigzag);
    e.update(&field(), &mut seeded_rng());
    let expected = 50.0 + (12.0f32 / ZIGZAG_PERIOD).sin() * ZIGZAG_AMPLITUDE;
    assert!((e.x - expected).abs() < 1e-4);

    // Same height → same offset, regardless of when it happens.
    let mut slow = Enemy::new(50.0, 11.0, 1.0, EnemyKind::Zigzag);
    slow.update(&field(), &mut seeded_rng());
    assert!((slow.x - expected).abs() < 1e-4);
}

#[test]
fn enemy_recycles_above_the_playfield() {
    let f = field();
    let mut e = Enemy::new(50.0, f.height - 1.0, 3.0, EnemyKind::Fast);
    let recycled = e.update(&f, &mut seeded_rng());
    assert!(recycled);
    assert_eq!(e.y, -ENEMY_HEIGHT);
    assert!(e.x >= 0.0 && e.x <= f.width - ENEMY_WIDTH);
    assert!(e.alive);
}

#[test]
fn enemy_exactly_on_bottom_edge_is_not_recycled() {
    let f = field();
    let mut e = Enemy::new(50.0, f.height - 2.0, 2.0, EnemyKind::Normal);
    assert!(!e.update(&f, &mut seeded_rng()));
    assert_eq!(e.y, f.height);
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn power_up_falls_and_leaves_through_the_bottom() {
    let f = field();
    let mut pu = PowerUp::new(100.0, f.height - 1.0, PowerUpKind::Health);
    assert!(!pu.is_off_field(&f));
    pu.update();
    assert_eq!(pu.y, f.height + 1.0);
    assert!(pu.is_off_field(&f));
}

#[test]
fn power_up_bounds_are_centred() {
    let pu = PowerUp::new(100.0, 50.0, PowerUpKind::Shield);
    let b = pu.bounds();
    assert_eq!(b.left, 100.0 - POWER_UP_SIZE / 2.0);
    assert_eq!(b.bottom, 50.0 + POWER_UP_SIZE / 2.0);
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn new_session_defaults() {
    let s = Session::new(field());
    assert_eq!(s.score, 0);
    assert_eq!(s.level, 1);
    assert_eq!(s.health, MAX_HEALTH);
    assert_eq!(s.tick, 0);
    assert!(s.enemies.is_empty() && s.projectiles.is_empty() && s.power_ups.is_empty());
}

#[test]
fn shoot_spawns_projectile_at_player_tip() {
    let mut s = Session::new(field());
    s.shoot();
    assert_eq!(s.projectiles.len(), 1);
    assert_eq!(s.projectiles[0].x, s.player.x);
    assert_eq!(s.projectiles[0].y, s.player.y);
}

#[test]
fn session_clone_is_independent() {
    let original = Session::new(field());
    let mut cloned = original.clone();
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy::new(5.0, 5.0, 1.0, EnemyKind::Normal));

    assert_eq!(original.player.x, 200.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

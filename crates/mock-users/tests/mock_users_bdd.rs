//! Behavioural tests for mock user generation.
//!
//! These scenarios pin the fallback batch shape the backend relies on when
//! the live user feed cannot be reached.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use mock_users::{DEFAULT_MOCK_USER_COUNT, MockUser, generate_mock_users};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the reference instant and generated batches.
#[derive(Default, ScenarioState)]
struct World {
    now: Slot<DateTime<Utc>>,
    generated_users: Slot<Vec<MockUser>>,
    second_generation: Slot<Vec<MockUser>>,
}

impl World {
    fn now(&self) -> DateTime<Utc> {
        self.now.get().expect("reference instant should be set")
    }

    fn users(&self) -> Vec<MockUser> {
        self.generated_users
            .get()
            .expect("users should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn strip_ids(users: Vec<MockUser>) -> Vec<MockUser> {
    users
        .into_iter()
        .map(|user| MockUser {
            id: String::new(),
            ..user
        })
        .collect()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a fixed reference instant")]
fn a_fixed_reference_instant(world: &World) {
    let now = Utc
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("valid fixture timestamp");
    world.now.set(now);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the default fallback batch is generated")]
fn the_default_fallback_batch_is_generated(world: &World) {
    let users = generate_mock_users(DEFAULT_MOCK_USER_COUNT, world.now());
    world.generated_users.set(users);
}

#[when("the default fallback batch is generated twice")]
fn the_default_fallback_batch_is_generated_twice(world: &World) {
    let now = world.now();
    world
        .generated_users
        .set(generate_mock_users(DEFAULT_MOCK_USER_COUNT, now));
    world
        .second_generation
        .set(generate_mock_users(DEFAULT_MOCK_USER_COUNT, now));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the batch contains {count:usize} users")]
fn the_batch_contains_users(world: &World, count: usize) {
    assert_eq!(world.users().len(), count);
}

#[then("both batches match apart from identifiers")]
fn both_batches_match_apart_from_identifiers(world: &World) {
    let second = world
        .second_generation
        .get()
        .expect("second generation should be set");

    assert_eq!(strip_ids(world.users()), strip_ids(second));
}

#[then("every identifier encodes its index")]
fn every_identifier_encodes_its_index(world: &World) {
    for (index, user) in world.users().iter().enumerate() {
        let prefix = format!("mock-id-{index}-");
        assert!(
            user.id.starts_with(&prefix),
            "identifier {} should start with {prefix}",
            user.id
        );
    }
}

#[then("the batch covers {countries:usize} countries and {cities:usize} cities")]
fn the_batch_covers_countries_and_cities(world: &World, countries: usize, cities: usize) {
    let users = world.users();
    let distinct_countries: HashSet<&str> =
        users.iter().map(|u| u.location.country.as_str()).collect();
    let distinct_cities: HashSet<&str> = users.iter().map(|u| u.location.city.as_str()).collect();

    assert_eq!(distinct_countries.len(), countries);
    assert_eq!(distinct_cities.len(), cities);
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/mock_users.feature",
    name = "Fallback batch has the default size"
)]
fn fallback_batch_has_the_default_size(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_users.feature",
    name = "Repeated generation differs only in identifiers"
)]
fn repeated_generation_differs_only_in_identifiers(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/mock_users.feature",
    name = "Countries rotate through three values"
)]
fn countries_rotate_through_three_values(world: World) {
    let _ = world;
}

//! BDD step definitions for caching and refresh behaviour

use cucumber::{given, then, when};

use traefik_status::io::HttpResponse;
use traefik_status::FetchError;

use crate::world::{StatusWorld, BASE_MS};

fn rejected(status: u16) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse {
        status,
        body: "upstream error".to_string(),
    })
}

#[given(expr = "Traefik responds with HTTP {int}")]
fn traefik_responds_with(world: &mut StatusWorld, status: u16) {
    world.traefik.queue(rejected(status));
}

#[when(expr = "Traefik starts responding with HTTP {int}")]
fn traefik_starts_responding_with(world: &mut StatusWorld, status: u16) {
    world.traefik.queue(rejected(status));
}

#[given("Traefik is unreachable")]
fn traefik_unreachable(world: &mut StatusWorld) {
    world.traefik.queue(Err(FetchError::NetworkFailure(
        "GET http://traefik:8080/api/http/services timed out".to_string(),
    )));
}

#[given("the Traefik password is not configured")]
fn password_not_configured(world: &mut StatusWorld) {
    world.password_missing = true;
}

#[when(expr = "the status snapshot is requested at {int} seconds")]
async fn snapshot_requested_at(world: &mut StatusWorld, seconds: u64) {
    let controller = world.controller();
    let snapshot = controller.snapshot_at(BASE_MS + seconds * 1000).await;
    world.snapshots.push(snapshot);
}

#[when("a refresh is forced")]
async fn refresh_forced(world: &mut StatusWorld) {
    world.controller().force_refresh().await;
}

#[then(expr = "Traefik should have been queried {int} time(s)")]
fn traefik_queried(world: &mut StatusWorld, times: usize) {
    assert_eq!(world.traefik.calls(), times);
}

#[then("the last two snapshots should be identical")]
fn last_two_identical(world: &mut StatusWorld) {
    let n = world.snapshots.len();
    assert!(n >= 2, "expected at least two snapshots, got {}", n);
    assert_eq!(world.snapshots[n - 2], world.snapshots[n - 1]);
}

#[then("the services should be unchanged from the previous snapshot")]
fn services_unchanged(world: &mut StatusWorld) {
    let n = world.snapshots.len();
    assert!(n >= 2, "expected at least two snapshots, got {}", n);
    assert_eq!(
        world.snapshots[n - 2].services,
        world.snapshots[n - 1].services
    );
}

#[then(expr = "the snapshot should be last fetched at {int} seconds")]
fn last_fetched_at(world: &mut StatusWorld, seconds: u64) {
    assert_eq!(world.last_snapshot().last_fetched, BASE_MS + seconds * 1000);
}

#[then("the snapshot should have no error")]
fn no_error(world: &mut StatusWorld) {
    assert_eq!(world.last_snapshot().error, None);
}

#[then(expr = "the snapshot error should mention {string}")]
fn error_mentions(world: &mut StatusWorld, expected: String) {
    let error = world
        .last_snapshot()
        .error
        .as_deref()
        .expect("snapshot has no error");
    assert!(
        error.contains(&expected),
        "Expected error to mention '{}', got '{}'",
        expected,
        error
    );
}

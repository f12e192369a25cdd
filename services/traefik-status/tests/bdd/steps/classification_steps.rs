//! BDD step definitions for the registry and Traefik listing

use cucumber::{given, then};

use traefik_status::{MonitoredService, ServiceStatus};

use crate::world::StatusWorld;

pub fn parse_status(s: &str) -> ServiceStatus {
    match s {
        "UP" => ServiceStatus::Up,
        "DOWN" => ServiceStatus::Down,
        "UNKNOWN" => ServiceStatus::Unknown,
        other => panic!("Unknown status: {}", other),
    }
}

#[given(expr = "a monitored service {string} named {string} at {string}")]
fn monitored_service(world: &mut StatusWorld, key: String, name: String, url: String) {
    world.services.push(MonitoredService::new(key, name, url));
}

#[given(expr = "Traefik reports service {string} with replica {string} in state {string}")]
fn traefik_reports_replica(
    world: &mut StatusWorld,
    service: String,
    replica: String,
    state: String,
) {
    world.traefik.report_replica(&service, &replica, &state);
}

#[given(expr = "Traefik reports service {string} without replica statuses")]
fn traefik_reports_without_replicas(world: &mut StatusWorld, service: String) {
    world.traefik.report_without_replicas(&service);
}

#[given("Traefik reports no services")]
fn traefik_reports_nothing(world: &mut StatusWorld) {
    world.traefik.clear_listing();
}

#[then(expr = "service {string} should be {string} at {string}")]
fn service_should_be_at(world: &mut StatusWorld, name: String, status: String, url: String) {
    let expected = parse_status(&status);
    let view = world
        .last_snapshot()
        .services
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("service '{}' not in snapshot", name));
    assert_eq!(view.status, expected, "status of '{}'", name);
    assert_eq!(view.url, url, "url of '{}'", name);
}

#[then(expr = "service {string} should be {string}")]
fn service_should_be(world: &mut StatusWorld, name: String, status: String) {
    let expected = parse_status(&status);
    let view = world
        .last_snapshot()
        .services
        .iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("service '{}' not in snapshot", name));
    assert_eq!(view.status, expected, "status of '{}'", name);
}

#[then(expr = "every service should be {string}")]
fn every_service_should_be(world: &mut StatusWorld, status: String) {
    let expected = parse_status(&status);
    let snapshot = world.last_snapshot();
    assert!(!snapshot.services.is_empty());
    for view in &snapshot.services {
        assert_eq!(view.status, expected, "status of '{}'", view.name);
    }
}

#[then(expr = "the snapshot should list {string} then {string}")]
fn snapshot_order(world: &mut StatusWorld, first: String, second: String) {
    let names: Vec<&str> = world
        .last_snapshot()
        .services
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec![first.as_str(), second.as_str()]);
}

// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::session::AppState;
use crate::tests::utils::{body_string, get, insert_listing, listing, make_db, search_path};

/// Three listings covering the three station columns and distinct layouts.
fn seeded_state(tag: &str) -> AppState {
    let db = make_db(tag);

    let mut a = listing("コーポ赤羽", 85_000, "1LDK");
    a.station1 = Some("赤羽".into());
    a.walk1 = Some(7);
    insert_listing(&db, &a);

    let mut b = listing("メゾン王子", 120_000, "2LDK");
    b.station2 = Some("王子".into());
    insert_listing(&db, &b);

    let mut c = listing("ハイツ十条", 60_000, "1K");
    c.station1 = Some("十条".into());
    c.detail_url = Some("https://example.com/c".into());
    insert_listing(&db, &c);

    AppState::new(db)
}

#[test]
fn search_without_constraints_returns_everything() {
    let state = seeded_state("search_all");

    let mut resp = handle(get("/search"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("フィルタリング後の物件数: 3"));
    assert!(body.contains("コーポ赤羽"));
    assert!(body.contains("ハイツ十条"));
}

#[test]
fn rent_bounds_are_inclusive() {
    let state = seeded_state("search_rent");

    let path = search_path(&[("rent_min", "85000"), ("rent_max", "85000")]);
    let mut resp = handle(get(&path), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("フィルタリング後の物件数: 1"));
    assert!(body.contains("コーポ赤羽"));
}

#[test]
fn layout_restricts_to_exact_match() {
    let state = seeded_state("search_layout");

    let path = search_path(&[("layout", "1K")]);
    let mut resp = handle(get(&path), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("フィルタリング後の物件数: 1"));
    assert!(body.contains("ハイツ十条"));
}

#[test]
fn layout_sentinel_applies_no_constraint() {
    let state = seeded_state("search_layout_any");

    let path = search_path(&[("layout", "すべて")]);
    let mut resp = handle(get(&path), &state).unwrap();

    assert!(body_string(&mut resp).contains("フィルタリング後の物件数: 3"));
}

#[test]
fn station_filter_checks_all_three_columns() {
    let state = seeded_state("search_station2");

    // 王子 only appears in the second station column
    let path = search_path(&[("stations", "王子")]);
    let mut resp = handle(get(&path), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("フィルタリング後の物件数: 1"));
    assert!(body.contains("メゾン王子"));
}

#[test]
fn comma_separated_stations_match_any() {
    let state = seeded_state("search_stations");

    let path = search_path(&[("stations", "赤羽, 十条")]);
    let mut resp = handle(get(&path), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("フィルタリング後の物件数: 2"));
    assert!(body.contains("コーポ赤羽"));
    assert!(body.contains("ハイツ十条"));
}

#[test]
fn blank_station_field_filters_nothing() {
    let state = seeded_state("search_blank_stations");

    let path = search_path(&[("stations", "")]);
    let mut resp = handle(get(&path), &state).unwrap();

    assert!(body_string(&mut resp).contains("フィルタリング後の物件数: 3"));
}

#[test]
fn detail_url_renders_as_link() {
    let state = seeded_state("search_links");

    let path = search_path(&[("stations", "十条")]);
    let mut resp = handle(get(&path), &state).unwrap();

    let body = body_string(&mut resp);
    assert!(body.contains("https://example.com/c"));
}

#[test]
fn bad_filter_input_is_a_bad_request() {
    let state = seeded_state("search_bad");

    let res = handle(get("/search?rent_min=abc"), &state);
    assert!(matches!(res, Err(ServerError::BadRequest(_))));

    let path = search_path(&[("layout", "9LDK")]);
    let res = handle(get(&path), &state);
    assert!(matches!(res, Err(ServerError::BadRequest(_))));
}

use crate::db::connection::{init_db, Database};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh file-backed test database using the production schema
pub fn make_db(tag: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{tag}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// A plausible listing with everything optional left empty; tests fill in
/// the fields they care about.
pub fn listing(name: &str, rent: i64, layout: &str) -> Listing {
    Listing {
        name: name.into(),
        address: "東京都北区どこか1-2-3".into(),
        age: 10,
        rent,
        management_fee: 5_000,
        layout: layout.into(),
        area: 40.0,
        station1: None,
        station2: None,
        station3: None,
        walk1: None,
        walk2: None,
        walk3: None,
        photo_url: None,
        floorplan_url: None,
        detail_url: None,
    }
}

pub fn insert_listing(db: &Database, l: &Listing) {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO properties (
                名称, アドレス, 築年数, 家賃, 管理費, 間取り, 面積,
                駅名1, 駅名2, 駅名3, 徒歩分1, 徒歩分2, 徒歩分3,
                物件画像URL, 間取画像URL, 物件詳細URL
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            rusqlite::params![
                l.name,
                l.address,
                l.age,
                l.rent,
                l.management_fee,
                l.layout,
                l.area,
                l.station1,
                l.station2,
                l.station3,
                l.walk1,
                l.walk2,
                l.walk3,
                l.photo_url,
                l.floorplan_url,
                l.detail_url
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .expect("Failed to insert test listing");
}

/// Build a GET request for the router. The path must already be
/// percent-encoded; see `search_path`.
pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().expect("test uri");
    req
}

/// Percent-encode query pairs the way a browser submits the search form.
pub fn search_path(pairs: &[(&str, &str)]) -> String {
    let qs = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    format!("/search?{qs}")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read body");
    String::from_utf8(bytes).expect("utf-8 body")
}

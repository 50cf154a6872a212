/// One scraped SUUMO rental listing. Field order mirrors the column order of
/// the `properties` table; see sql/all_properties.sql for the mapping.
#[derive(Debug, Clone)]
pub struct Listing {
    pub name: String,
    pub address: String,

    /// 築年数 (years since construction)
    pub age: i64,
    /// 家賃 in yen
    pub rent: i64,
    /// 管理費 in yen
    pub management_fee: i64,
    /// 間取り code, e.g. "1K" or "2LDK"
    pub layout: String,
    /// 面積 in m²
    pub area: f64,

    // Up to three nearest stations with walk minutes. Scrapes often carry
    // fewer than three, hence the Options.
    pub station1: Option<String>,
    pub station2: Option<String>,
    pub station3: Option<String>,
    pub walk1: Option<i64>,
    pub walk2: Option<i64>,
    pub walk3: Option<i64>,

    pub photo_url: Option<String>,
    pub floorplan_url: Option<String>,
    pub detail_url: Option<String>,
}

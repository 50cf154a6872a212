use crate::domain::layout::{Layout, LAYOUT_ANY};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use std::collections::{HashMap, HashSet};

// Form bounds, matching what the scraped data can actually contain.
pub const RENT_RANGE: (i64, i64) = (0, 250_000);
pub const FEE_RANGE: (i64, i64) = (0, 50_000);
pub const AGE_RANGE: (i64, i64) = (0, 50);
pub const AREA_RANGE: (i64, i64) = (0, 200);

/// Everything the search form can constrain. All ranges are inclusive on
/// both ends. `layout: None` means the すべて sentinel was selected; an
/// empty station set means no station constraint at all.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub rent: (i64, i64),
    pub management_fee: (i64, i64),
    pub age: (i64, i64),
    pub area: (f64, f64),
    pub layout: Option<Layout>,
    pub stations: HashSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            rent: RENT_RANGE,
            management_fee: FEE_RANGE,
            age: AGE_RANGE,
            area: (AREA_RANGE.0 as f64, AREA_RANGE.1 as f64),
            layout: None,
            stations: HashSet::new(),
        }
    }
}

impl FilterCriteria {
    /// Decode criteria from the search form's query parameters. Absent or
    /// blank fields fall back to the widest range / no constraint.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let defaults = Self::default();

        let layout = match params.get("layout").map(String::as_str) {
            None | Some("") | Some(LAYOUT_ANY) => None,
            Some(s) => Some(
                Layout::parse(s)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown layout: {s}")))?,
            ),
        };

        let stations = params
            .get("stations")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            rent: (
                int_field(params, "rent_min", defaults.rent.0)?,
                int_field(params, "rent_max", defaults.rent.1)?,
            ),
            management_fee: (
                int_field(params, "fee_min", defaults.management_fee.0)?,
                int_field(params, "fee_max", defaults.management_fee.1)?,
            ),
            age: (
                int_field(params, "age_min", defaults.age.0)?,
                int_field(params, "age_max", defaults.age.1)?,
            ),
            area: (
                float_field(params, "area_min", defaults.area.0)?,
                float_field(params, "area_max", defaults.area.1)?,
            ),
            layout,
            stations,
        })
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let in_ranges = within(self.rent, listing.rent)
            && within(self.management_fee, listing.management_fee)
            && within(self.age, listing.age)
            && listing.area >= self.area.0
            && listing.area <= self.area.1;

        let layout_ok = match self.layout {
            None => true,
            Some(layout) => listing.layout == layout.as_str(),
        };

        let station_ok = self.stations.is_empty()
            || [&listing.station1, &listing.station2, &listing.station3]
                .iter()
                .any(|col| col.as_deref().is_some_and(|s| self.stations.contains(s)));

        in_ranges && layout_ok && station_ok
    }
}

/// Narrow the full table to the rows satisfying the criteria.
pub fn apply<'a>(criteria: &FilterCriteria, listings: &'a [Listing]) -> Vec<&'a Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}

fn within((lo, hi): (i64, i64), value: i64) -> bool {
    value >= lo && value <= hi
}

fn int_field(
    params: &HashMap<String, String>,
    key: &str,
    default: i64,
) -> Result<i64, ServerError> {
    match params.get(key).map(String::as_str) {
        None | Some("") => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid number for {key}: {s}"))),
    }
}

fn float_field(
    params: &HashMap<String, String>,
    key: &str,
    default: f64,
) -> Result<f64, ServerError> {
    match params.get(key).map(String::as_str) {
        None | Some("") => Ok(default),
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid number for {key}: {s}"))),
    }
}

use crate::db::listings::load_listings;
use crate::domain::filter::{self, FilterCriteria};
use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, redirect_response};
use crate::session::{AppState, SuggestionSet};
use crate::suggest::SuggestClient;
use crate::templates::pages::{home_page, results_page, HomeVm};
use astra::Request;
use chrono::Local;
use std::collections::HashMap;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    match (req.method().as_str(), req.uri().path()) {
        ("GET", "/") => home(state),
        ("GET", "/stations") => search_stations(&req, state),
        ("GET", "/search") => search_listings(&req, state),
        _ => Err(ServerError::NotFound),
    }
}

fn home(state: &AppState) -> ResultResp {
    let markup = state.with_session(|session| {
        // The banner belongs to the action that produced it; show it once.
        let error = session.error.take();
        home_page(&HomeVm {
            suggestions: session.suggestions.as_ref(),
            error: error.as_deref(),
        })
    })?;

    html_response(markup)
}

fn search_stations(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);

    // The station name is free text and goes into the prompt as-is.
    let work_station = params
        .get("work_station")
        .map(String::as_str)
        .unwrap_or("")
        .trim()
        .to_string();

    let minutes: u32 = match params.get("commuting_time").map(String::as_str) {
        None | Some("") => 10,
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("invalid commuting_time: {s}")))?,
    };
    if !(1..=60).contains(&minutes) {
        return Err(ServerError::BadRequest(format!(
            "commuting_time must be between 1 and 60, got {minutes}"
        )));
    }

    let result = SuggestClient::new()
        .and_then(|client| client.fetch_suggestions(&work_station, minutes));

    state.with_session(|session| match result {
        Ok(items) => {
            session.suggestions = Some(SuggestionSet {
                items,
                fetched_at: Local::now(),
            });
            session.error = None;
        }
        Err(e) => {
            eprintln!("Station suggestion failed: {e}");
            // A failed query leaves the user with no suggestions, not five
            // placeholders.
            session.suggestions = None;
            session.error = Some(e.to_string());
        }
    })?;

    redirect_response("/")
}

fn search_listings(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let criteria = FilterCriteria::from_query(&params)?;

    // Full table re-read on every search; nothing is cached between
    // requests.
    let listings = load_listings(&state.db)?;
    let matched = filter::apply(&criteria, &listings);

    html_response(results_page(&matched))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

use crate::db::connection::Database;
use crate::db::listings::probe_store;
use crate::router::handle;
use crate::session::AppState;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod suggest;
mod templates;


fn main() {
    // 1️⃣ Open the scraped listing store
    let db = Database::new("suumo_data.db");

    // 2️⃣ Fail fast when the store or its table is missing
    match probe_store(&db) {
        Ok(count) => println!("✅ Listing store ready ({count} properties)"),
        Err(e) => {
            eprintln!("❌ Listing store check failed: {e}");
            std::process::exit(1);
        }
    }

    let state = AppState::new(db);

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing app state into closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

pub mod catchers;
pub mod config;
pub mod error;
pub mod fairings;
pub mod routes;
pub mod store;

use rocket::fs::{FileServer, NamedFile, Options};
use rocket::http::Status;
use rocket::{catchers, routes, Build, Rocket, State};

use crate::catchers::{api_not_found, bad_request, internal_error, not_found, unprocessable};
use crate::config::Config;
use crate::fairings::RequestLogger;
use crate::routes::AppState;
use crate::store::PollStore;

// The file server also matches "/"; this route makes a missing entry
// document a plain-text 500 instead of a 404.
#[rocket::get("/")]
async fn index(config: &State<Config>) -> Result<NamedFile, (Status, &'static str)> {
    NamedFile::open(config.public_dir.join("index.html"))
        .await
        .map_err(|_| (Status::InternalServerError, "Index.html no encontrado"))
}

pub fn build(config: Config) -> Rocket<Build> {
    let store = PollStore::new(&config.data_dir);
    let figment = rocket::Config::figment().merge(("port", config.port));
    let public_dir = config.public_dir.clone();

    rocket::custom(figment)
        .attach(RequestLogger)
        .manage(AppState::new(store))
        .manage(config)
        .mount(
            "/api",
            routes![
                routes::health,
                routes::list_polls,
                routes::create_poll,
                routes::cast_vote
            ],
        )
        .mount("/", routes![index])
        .mount("/", FileServer::new(public_dir, Options::Index | Options::Missing))
        .register("/api", catchers![api_not_found])
        .register("/", catchers![not_found, bad_request, unprocessable, internal_error])
}

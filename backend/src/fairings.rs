use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Request, Response};
use tracing::info;

/// Logs one line per request: method, path, response status.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request logger",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        info!("{} {} -> {}", req.method(), req.uri().path(), res.status());
    }
}

//! HTTP routes

pub mod admin;
pub mod login;
pub mod session;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Request, Rocket, catch, catchers, routes};

use crate::auth::RequestAuthenticator;
use crate::error::ErrorBody;
use crate::state::AuthState;

/// Build the Rocket application around `state`
pub fn auth_rocket(state: AuthState) -> Rocket<Build> {
    let authenticator = RequestAuthenticator::new(state.tokens.clone(), state.clock.clone());
    rocket::build()
        .attach(authenticator)
        .manage(state)
        .mount(
            "/",
            routes![
                login::login,
                session::session,
                session::me,
                admin::register,
                admin::unlock
            ],
        )
        .register("/", catchers![default_catcher])
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> Json<ErrorBody> {
    Json(ErrorBody::new(status.reason_lossy()))
}

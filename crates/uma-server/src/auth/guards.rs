//! Identity request guards

use std::convert::Infallible;

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use uma_domain::{Identity, Role};

use super::fairing::RequestIdentity;

/// Why an identity guard refused the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    /// No valid bearer token was presented
    Missing,
    /// The identity lacks the required role
    Forbidden,
}

/// The attached identity, if any; never fails
#[derive(Debug, Clone)]
pub struct OptionalIdentity(pub Option<Identity>);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OptionalIdentity {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        Outcome::Success(OptionalIdentity(RequestIdentity::of(request).cloned()))
    }
}

/// An attached identity; 401 when the request is anonymous
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity(pub Identity);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedIdentity {
    type Error = IdentityError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match RequestIdentity::of(request) {
            Some(identity) => Outcome::Success(AuthenticatedIdentity(identity.clone())),
            None => Outcome::Error((Status::Unauthorized, IdentityError::Missing)),
        }
    }
}

/// An attached identity holding [`Role::Admin`]; 401 when anonymous, 403 otherwise
#[derive(Debug, Clone)]
pub struct AdminIdentity(pub Identity);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminIdentity {
    type Error = IdentityError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match RequestIdentity::of(request) {
            Some(identity) if identity.has_role(Role::Admin) => {
                Outcome::Success(AdminIdentity(identity.clone()))
            }
            Some(_) => Outcome::Error((Status::Forbidden, IdentityError::Forbidden)),
            None => Outcome::Error((Status::Unauthorized, IdentityError::Missing)),
        }
    }
}

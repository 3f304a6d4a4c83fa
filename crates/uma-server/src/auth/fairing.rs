//! Bearer token fairing
//!
//! Failure policy is fail-open: a missing, unsupported or rejected token
//! leaves the request anonymous. Rejections are logged with the token error
//! kind so expiry and tampering stay distinguishable.

use std::sync::Arc;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request};
use tracing::{debug, warn};
use uma_domain::Identity;
use uma_domain::ports::{Clock, TokenCodec};
use uma_infrastructure::constants::{AUTHORIZATION_HEADER, BEARER_PREFIX};

/// Identity resolved for the current request, `None` when anonymous
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestIdentity(pub Option<Identity>);

impl RequestIdentity {
    /// Identity cached on `request`; anonymous if nothing was attached
    pub fn of<'r>(request: &'r Request<'_>) -> Option<&'r Identity> {
        request.local_cache(RequestIdentity::default).0.as_ref()
    }
}

/// Resolves `Authorization: Bearer <token>` into a [`RequestIdentity`]
pub struct RequestAuthenticator {
    tokens: Arc<dyn TokenCodec>,
    clock: Arc<dyn Clock>,
}

impl RequestAuthenticator {
    pub fn new(tokens: Arc<dyn TokenCodec>, clock: Arc<dyn Clock>) -> Self {
        Self { tokens, clock }
    }

    fn resolve(&self, request: &Request<'_>) -> Option<Identity> {
        let header = request.headers().get_one(AUTHORIZATION_HEADER)?;
        let Some(token) = header.strip_prefix(BEARER_PREFIX) else {
            debug!(path = %request.uri().path(), "Unsupported authorization scheme");
            return None;
        };

        match self
            .tokens
            .validate(token.trim(), self.clock.now_unix_secs())
        {
            Ok(identity) => {
                debug!(subject = %identity.subject, role = %identity.role, "Request authenticated");
                Some(identity)
            }
            Err(err) => {
                warn!(
                    kind = err.kind(),
                    path = %request.uri().path(),
                    "Bearer token rejected, continuing anonymously"
                );
                None
            }
        }
    }
}

#[rocket::async_trait]
impl Fairing for RequestAuthenticator {
    fn info(&self) -> Info {
        Info {
            name: "Bearer Token Authenticator",
            kind: Kind::Request,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _data: &mut Data<'_>) {
        // An identity attached earlier in the pipeline wins
        request.local_cache(|| RequestIdentity(self.resolve(request)));
    }
}

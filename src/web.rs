use crate::environment::{Environment, EnvironmentSettings};
use actix_web::{
    dev::Payload, get, http::StatusCode, web, FromRequest, HttpRequest, HttpResponse, Responder,
    ResponseError,
};
use std::{
    future::{ready, Ready},
    ops::Deref,
};
use thiserror::Error;

/// Handle to the settings, registered once as app data and extracted by handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvironmentState {
    pub settings: &'static EnvironmentSettings,
}

impl EnvironmentState {
    /// State for the variant this crate was built for.
    pub fn setup() -> Self {
        let environment = Environment::active();
        log::info!("Using {:?} environment settings.", environment);
        Self::from(environment)
    }

    pub fn web_configurations(cfg: &mut web::ServiceConfig) {
        cfg.service(environment_settings);
    }
}

impl From<Environment> for EnvironmentState {
    fn from(value: Environment) -> Self {
        EnvironmentState {
            settings: value.settings(),
        }
    }
}

impl From<&'static EnvironmentSettings> for EnvironmentState {
    fn from(value: &'static EnvironmentSettings) -> Self {
        EnvironmentState { settings: value }
    }
}

impl Deref for EnvironmentState {
    type Target = EnvironmentSettings;

    fn deref(&self) -> &Self::Target {
        self.settings
    }
}

impl FromRequest for EnvironmentState {
    type Error = EnvironmentError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<EnvironmentState>().copied().ok_or_else(|| {
            log::error!("Environment state missing for {}.", req.path());
            EnvironmentError::StateMissing
        });
        ready(state)
    }
}

#[get("/environment")]
pub(crate) async fn environment_settings(state: EnvironmentState) -> impl Responder {
    log::debug!("Serving {:?} environment settings.", state.environment());
    HttpResponse::Ok().json(state.settings)
}

#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("Environment state missing in app data. Make sure it is registered.")]
    StateMissing,
}

impl ResponseError for EnvironmentError {
    fn status_code(&self) -> StatusCode {
        match self {
            EnvironmentError::StateMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}

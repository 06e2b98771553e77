mod config;

use config::Config;
use lambda_http::{
    http::{header::CONTENT_TYPE, StatusCode},
    run, service_fn, Body, Error, Request, Response,
};
use serde::Serialize;
use slotplan_libs::{optimize_with_limits, Limits, OptimizeRequest, ValidationError};
use thiserror::Error;
use tracing::{error, info, warn};

/// Why a request did not produce an `OptimizeResponse`.
#[derive(Error, Debug)]
enum HandlerError {
    #[error("Missing request body")]
    MissingBody,
    #[error("Malformed request body: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Unexpected(String),
}

impl HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::MissingBody
            | HandlerError::Malformed(_)
            | HandlerError::Validation(_) => StatusCode::BAD_REQUEST,
            HandlerError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn optimize_body(body: &[u8], limits: &Limits) -> Result<String, HandlerError> {
    if body.is_empty() {
        return Err(HandlerError::MissingBody);
    }

    let request: OptimizeRequest =
        serde_json::from_slice(body).map_err(HandlerError::Malformed)?;

    let response = optimize_with_limits(&request, limits)?;

    serde_json::to_string(&response).map_err(|e| HandlerError::Unexpected(e.to_string()))
}

async fn function_handler(event: Request, config: &Config) -> Result<Response<Body>, Error> {
    info!(
        method = %event.method(),
        uri = %event.uri(),
        body_length = event.body().len(),
        "Received optimize request"
    );

    let resp = Response::builder().header(CONTENT_TYPE, "application/json");

    Ok(match optimize_body(event.body(), &config.limits) {
        Ok(body) => resp.status(StatusCode::OK).body(Body::from(body))?,
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                error!(status = status.as_u16(), error = %err, "Failed to optimize slots");
            } else {
                warn!(status = status.as_u16(), error = %err, "Rejected optimize request");
            }

            resp.status(status).body(Body::from(serde_json::to_string(&ErrorResponse {
                error: err.to_string(),
            })?))?
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let config = &config;
    run(service_fn(move |event: Request| function_handler(event, config))).await
}

use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::ErrorResponse;
use crate::models::{BookEntry, BookSnapshot, MatchReport, OpType, RawCommand, Side, Trade};

/// OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Matcher API",
        version = "1.0.0",
        description = "Price-time priority matching engine for limit order command streams"
    ),
    paths(
        handlers::health_check,
        handlers::match_commands,
    ),
    components(
        schemas(
            RawCommand,
            OpType,
            Side,
            Trade,
            BookEntry,
            BookSnapshot,
            MatchReport,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Matching", description = "Command batch matching endpoints"),
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct QuoteDoc { pub id: u64, pub author: String, pub quote: String }

#[derive(ToSchema)]
pub struct CreateQuoteDoc { pub author: String, pub quote: String }

#[derive(ToSchema)]
pub struct UpdateQuoteDoc { pub author: Option<String>, pub quote: Option<String> }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::quotes::list_quotes,
        crate::routes::quotes::get_quote,
        crate::routes::quotes::random_quote,
        crate::routes::quotes::create_quote,
        crate::routes::quotes::generate_quote,
        crate::routes::quotes::update_quote,
        crate::routes::quotes::delete_quote,
    ),
    components(
        schemas(
            HealthResponse,
            QuoteDoc,
            CreateQuoteDoc,
            UpdateQuoteDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "quotes")
    )
)]
pub struct ApiDoc;

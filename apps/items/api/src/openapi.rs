use utoipa::OpenApi;

/// Top-level API documentation; domain docs are nested under their mount points.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        description = "Create, read, update and delete items held in process memory"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;

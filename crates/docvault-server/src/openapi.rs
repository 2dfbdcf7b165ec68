use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::status::status,
        crate::routes::documents::list_documents,
        crate::routes::documents::create_document,
        crate::routes::documents::get_document,
        crate::routes::documents::update_document,
        crate::routes::documents::delete_document,
        crate::routes::documents::update_document_status,
        crate::routes::documents::update_document_version,
    ),
    components(schemas(
        docvault::DocumentRecord,
        docvault::DocumentDraft,
        docvault::DocumentStatus,
        crate::routes::documents::DocumentListResponse,
        crate::routes::documents::UpdateStatusRequest,
        crate::routes::documents::UpdateVersionRequest,
        crate::routes::errors::ErrorResponse,
    )),
    tags(
        (name = "Document Management", description = "Catalog, search and lifecycle operations over document records"),
        (name = "Health", description = "Server availability probe")
    )
)]
pub struct ApiDoc;

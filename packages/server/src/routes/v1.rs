use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/items", item_routes())
}

fn item_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::content::list_items,
            handlers::content::create_item
        ))
        .routes(routes!(
            handlers::content::get_item,
            handlers::content::update_item,
            handlers::content::delete_item
        ))
}

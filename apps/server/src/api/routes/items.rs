use crate::api::handlers::items;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items/", get(items::list_items).post(items::create_item))
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/:item_id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
}

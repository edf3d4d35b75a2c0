use axum::response::Html;

use crate::views;

/// Landing page with the upload and topic forms
pub async fn index() -> Html<String> {
    Html(views::index_page())
}

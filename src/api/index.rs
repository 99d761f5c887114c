use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../templates/index.html");

/// Static landing page with the generation form.
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

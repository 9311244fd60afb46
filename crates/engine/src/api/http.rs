//! HTTP routes.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Json, Router,
};
use bootsy_domain::{ImageGallery, ImageGalleryId, Post};
use std::sync::Arc;

use crate::app::App;
use crate::forms::escape_html;
use crate::infrastructure::ports::ImageGalleryRepo;
use crate::use_cases::editor::{EditorError, EditorField, EditorFieldOptions};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/posts/new", get(new_post))
        .route("/api/image_galleries/{id}", get(get_image_gallery))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Posts
// =============================================================================

async fn new_post(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    let mut post = Post::draft();
    let editor = app
        .use_cases
        .editor
        .render
        .execute(
            EditorField::new("post", "body").with_object(&mut post),
            EditorFieldOptions::new()
                .with_class("bootsy-editor")
                .with_placeholder("Write your post"),
        )
        .await?;

    Ok(Html(format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html><head><title>New post</title></head><body>\n",
            "<form action=\"/posts\" method=\"post\">\n",
            "<input type=\"text\" name=\"post[title]\" id=\"post_title\" value=\"{title}\" />\n",
            "{editor}\n",
            "<button type=\"submit\">Create post</button>\n",
            "</form>\n",
            "</body></html>\n"
        ),
        title = escape_html(post.title()),
        editor = editor
    )))
}

// =============================================================================
// Galleries
// =============================================================================

async fn get_image_gallery(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ImageGallery>, ApiError> {
    let id: ImageGalleryId = id
        .parse()
        .map_err(|e: bootsy_domain::DomainError| ApiError::BadRequest(e.to_string()))?;
    let gallery = app
        .repositories
        .image_gallery
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(gallery))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::infrastructure::ports::RepoError> for ApiError {
    fn from(e: crate::infrastructure::ports::RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<EditorError> for ApiError {
    fn from(e: EditorError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockContainerRepo, MockImageGalleryRepo, RepoError};
    use crate::infrastructure::settings::BootsySettings;
    use axum::response::IntoResponse;
    use chrono::Utc;

    fn app_with(galleries: MockImageGalleryRepo) -> Arc<App> {
        Arc::new(App::new(
            BootsySettings::default(),
            Arc::new(galleries),
            Arc::new(MockContainerRepo::new()),
        ))
    }

    #[tokio::test]
    async fn new_post_page_contains_editor_and_gallery_field() {
        let gallery = ImageGallery::new(Utc::now());
        let gallery_id = gallery.id();
        let mut galleries = MockImageGalleryRepo::new();
        galleries
            .expect_create()
            .times(1)
            .returning(move || Ok(gallery.clone()));

        let Html(page) = new_post(State(app_with(galleries))).await.expect("page");

        assert!(page.contains("<trix-editor class=\"bootsy-editor\""));
        assert!(page.contains(r#"name="post[body]""#));
        assert!(page.contains(&format!(
            r#"name="post[bootsy_image_gallery_id]" id="post_bootsy_image_gallery_id" class="bootsy_image_gallery_id" value="{}""#,
            gallery_id
        )));
    }

    #[tokio::test]
    async fn new_post_page_fails_when_gallery_cannot_be_created() {
        let mut galleries = MockImageGalleryRepo::new();
        galleries
            .expect_create()
            .returning(|| Err(RepoError::database("image_gallery.create", "locked")));

        let err = new_post(State(app_with(galleries))).await.unwrap_err();

        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn get_image_gallery_returns_json_or_404() {
        let gallery = ImageGallery::new(Utc::now());
        let known = gallery.id();
        let mut galleries = MockImageGalleryRepo::new();
        galleries.expect_get().returning(move |id| {
            Ok((id == known).then(|| gallery.clone()))
        });
        let app = app_with(galleries);

        let Json(found) = get_image_gallery(State(app.clone()), Path(known.to_string()))
            .await
            .expect("found");
        assert_eq!(found.id(), known);

        let missing = get_image_gallery(State(app), Path(ImageGalleryId::new().to_string())).await;
        assert!(matches!(missing, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn get_image_gallery_rejects_malformed_id() {
        let app = app_with(MockImageGalleryRepo::new());
        let result = get_image_gallery(State(app), Path("nope".to_string())).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}

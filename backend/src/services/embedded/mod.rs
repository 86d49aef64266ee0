//! Serves the frontend bundle compiled into the binary.
//!
//! Unknown paths fall back to `index.html` so reloading the page on any
//! screen still boots the app; routing then happens in the browser.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

fn respond(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                log::warn!("No frontend bundle embedded, {} not served", request_path);
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};

    static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/services/embedded/fixture");
    static EMPTY: Dir = Dir::new("", &[]);

    async fn body_of(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let resp = respond(&BUNDLE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_of(resp).await.contains("<title>Data Quality Console</title>"));
    }

    #[actix_web::test]
    async fn assets_carry_their_mime_type() {
        let resp = respond(&BUNDLE, "/assets/console.css");
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
        assert_eq!(content_type, "text/css");
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let resp = respond(&BUNDLE, "/clients/c1/file-definitions");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_of(resp).await.contains("Data Quality Console"));
    }

    #[actix_web::test]
    async fn missing_bundle_answers_not_found() {
        let resp = respond(&EMPTY, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

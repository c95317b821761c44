use crate::cache::ContentCache;
use actix_web::{web, HttpResponse};

const ASCIIMO_LINK: &str = "http://i.imgur.com/kmbjB.png";

pub async fn index(cache: web::Data<ContentCache>) -> HttpResponse {
    serve_cached(&cache, "index.html")
}

pub async fn hello(cache: web::Data<ContentCache>) -> HttpResponse {
    serve_cached(&cache, "hello.html")
}

pub async fn asciimo() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(format!("<html><body><img src='{}'></body></html>", ASCIIMO_LINK))
}

// Both cached keys are loaded fail-fast at startup, so a miss here can
// only mean a caller asked for a key the cache never knew.
fn serve_cached(cache: &ContentCache, key: &str) -> HttpResponse {
    let content = cache.get(key).unwrap_or_default().to_vec();
    HttpResponse::Ok().content_type("text/html").body(content)
}

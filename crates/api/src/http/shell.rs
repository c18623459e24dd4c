//! Client route shell
//!
//! Server-rendered pages of the resource-sharing frontend. Every page sits
//! inside the same navigation chrome and reads from the resource catalog;
//! nothing here talks to the profile API.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use maud::{html, Markup, DOCTYPE};
use sharehub_domain::{Resource, ShareHubError};

use super::error::ApiError;
use crate::AppContext;

const SITE_TITLE: &str = "ShareHub";

/// A page of the client shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRoute {
    Home,
    ShareResource,
    Resource { key: String },
}

impl ClientRoute {
    /// Match a request path against the shell's routes.
    ///
    /// `/` only matches exactly. `/share-resource` also matches its nested
    /// paths. `/resource/:key` needs a non-empty key segment.
    pub fn resolve(path: &str) -> Option<Self> {
        if path == "/" {
            return Some(ClientRoute::Home);
        }

        let trimmed = path.trim_end_matches('/');
        let mut segments = trimmed.trim_start_matches('/').split('/');

        match (segments.next(), segments.next()) {
            (Some("share-resource"), _) => Some(ClientRoute::ShareResource),
            (Some("resource"), Some(key)) if !key.is_empty() => {
                Some(ClientRoute::Resource { key: key.to_string() })
            }
            _ => None,
        }
    }
}

/// Fallback handler for every path the API router does not own
pub async fn client_shell(
    State(ctx): State<Arc<AppContext>>,
    method: Method,
    uri: Uri,
) -> Response {
    let path = uri.path();

    if path == "/api" || path.starts_with("/api/") {
        return ApiError::from(ShareHubError::NotFound(format!("route {path}"))).into_response();
    }

    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let (status, page) = match ClientRoute::resolve(path) {
        Some(ClientRoute::Home) => (StatusCode::OK, home_page(&ctx.resources.list())),
        Some(ClientRoute::ShareResource) => (StatusCode::OK, share_resource_page()),
        Some(ClientRoute::Resource { key }) => match ctx.resources.get(&key) {
            Some(resource) => (StatusCode::OK, resource_page(&resource)),
            None => (StatusCode::NOT_FOUND, not_found_page("That resource does not exist.")),
        },
        None => (StatusCode::NOT_FOUND, not_found_page("Nothing lives at this address.")),
    };

    tracing::debug!(path, status = status.as_u16(), "client shell render");
    (status, Html(page.into_string())).into_response()
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_TITLE) }
            }
            body {
                (nav_bar())
                main class="container" { (content) }
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav class="navbar" {
            a class="brand" href="/" { (SITE_TITLE) }
            ul {
                li { a href="/" { "Home" } }
                li { a href="/share-resource" { "Share" } }
            }
        }
    }
}

fn home_page(resources: &[Resource]) -> Markup {
    layout(
        "Home",
        html! {
            h1 { "Latest resources" }
            @if resources.is_empty() {
                p class="empty" { "No resources have been shared yet." }
            }
            @for resource in resources {
                (resource_preview(resource))
            }
        },
    )
}

fn resource_preview(resource: &Resource) -> Markup {
    html! {
        article class="resource-preview" {
            h2 {
                a href={ "/resource/" (resource.key) } { (resource.title) }
            }
            @if !resource.author.is_empty() {
                p class="author" { "Shared by " (resource.author) }
            }
            p class="description" { (resource.description) }
            (tag_list(&resource.tags))
        }
    }
}

fn resource_page(resource: &Resource) -> Markup {
    layout(
        &resource.title,
        html! {
            article class="resource" {
                h1 { (resource.title) }
                p class="link" {
                    a href=(resource.link) rel="noopener noreferrer" { (resource.link) }
                }
                @if !resource.author.is_empty() {
                    p class="author" { "Shared by " (resource.author) }
                }
                p class="posted" { "Posted " (resource.posted_at.format("%B %-d, %Y")) }
                p class="description" { (resource.description) }
                (tag_list(&resource.tags))
            }
        },
    )
}

fn tag_list(tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul class="tags" {
                @for tag in tags {
                    li class="tag" { (tag) }
                }
            }
        }
    }
}

fn share_resource_page() -> Markup {
    layout(
        "Share a resource",
        html! {
            h1 { "Share a resource" }
            form class="share-form" onsubmit="return false" {
                label for="title" { "Title" }
                input id="title" name="title" type="text" required;

                label for="link" { "Link" }
                input id="link" name="link" type="url" required;

                label for="description" { "Description" }
                textarea id="description" name="description" rows="4" {}

                label for="author" { "Author" }
                input id="author" name="author" type="text";

                label for="tags" { "Tags" }
                input id="tags" name="tags" type="text" placeholder="comma separated";

                button type="submit" { "Share" }
            }
        },
    )
}

fn not_found_page(message: &str) -> Markup {
    layout(
        "Not found",
        html! {
            h1 { "Page not found" }
            p { (message) }
            a href="/" { "Back to home" }
        },
    )
}

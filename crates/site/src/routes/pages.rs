//! Informational pages: home, about, projects, gallery and services.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query},
    response::Response,
};
use serde::Deserialize;
use skyray_core::Destination;
use skyray_core::catalog::{
    ALL_GALLERY, ALL_PROJECTS, GALLERY, GALLERY_CATEGORIES, GalleryImage, PROJECT_CATEGORIES,
    PROJECTS, PRODUCT_CATEGORIES, Project, ProductCategory, SERVICES, Service,
    filter_by_category, find_service, lightbox_next, lightbox_prev, related_services,
};
use tracing::instrument;

use crate::filters;
use crate::middleware::CurrentVisit;
use crate::routes::respond;
use crate::views::{Chrome, FilterLink, query_escape};

/// Number of related services shown on a service detail page.
const RELATED_SERVICES: usize = 3;

// =============================================================================
// Query Types
// =============================================================================

/// Category filter for the projects page.
#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub category: Option<String>,
}

/// Category filter and open lightbox image for the gallery page.
#[derive(Debug, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<String>,
    /// Index into the filtered images.
    pub image: Option<usize>,
}

// =============================================================================
// Templates
// =============================================================================

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub services: &'static [Service],
    pub categories: &'static [ProductCategory],
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub chrome: Chrome,
}

/// Projects page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/projects.html")]
pub struct ProjectsTemplate {
    pub chrome: Chrome,
    pub filters: Vec<FilterLink>,
    pub projects: Vec<&'static Project>,
}

/// An open lightbox over the filtered gallery.
pub struct Lightbox {
    pub image: &'static GalleryImage,
    /// 1-based position for display.
    pub position: usize,
    pub total: usize,
    pub prev_href: String,
    pub next_href: String,
    pub close_href: String,
}

impl Lightbox {
    /// Open `images[index]`, with links relative to the filtered gallery at `base`.
    fn open(images: &[&'static GalleryImage], index: usize, base: &str) -> Option<Self> {
        let image = *images.get(index)?;
        let total = images.len();
        Some(Self {
            image,
            position: index + 1,
            total,
            prev_href: format!("{base}&image={}", lightbox_prev(index, total)?),
            next_href: format!("{base}&image={}", lightbox_next(index, total)?),
            close_href: base.to_string(),
        })
    }

    /// Whether there is another image to step to.
    #[must_use]
    pub const fn can_step(&self) -> bool {
        self.total > 1
    }
}

/// A gallery grid tile.
pub struct GalleryTile {
    pub image: &'static GalleryImage,
    pub href: String,
}

/// Gallery page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/gallery.html")]
pub struct GalleryTemplate {
    pub chrome: Chrome,
    pub filters: Vec<FilterLink>,
    pub tiles: Vec<GalleryTile>,
    pub lightbox: Option<Lightbox>,
}

/// Services listing template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/services.html")]
pub struct ServicesTemplate {
    pub chrome: Chrome,
    pub services: &'static [Service],
}

/// Service detail template. `service` is `None` for unknown ids.
#[derive(Template, WebTemplate)]
#[template(path = "pages/service_detail.html")]
pub struct ServiceDetailTemplate {
    pub chrome: Chrome,
    pub service: Option<&'static Service>,
    pub related: Vec<&'static Service>,
}

// =============================================================================
// Routes
// =============================================================================

/// Display the home page.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn home(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Home);
    let page = HomeTemplate {
        chrome: Chrome::new(guard.site()),
        services: SERVICES,
        categories: PRODUCT_CATEGORIES,
    };
    respond(page, scroll, false)
}

/// Display the about page.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn about(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::About);
    let page = AboutTemplate {
        chrome: Chrome::new(guard.site()),
    };
    respond(page, scroll, false)
}

/// Display the project showcase, optionally filtered by category.
///
/// Unknown categories show an empty list.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn projects(
    CurrentVisit(visit): CurrentVisit,
    Query(query): Query<ProjectsQuery>,
) -> Response {
    let selected = query.category.as_deref().unwrap_or(ALL_PROJECTS);
    let projects = filter_by_category(PROJECTS, selected, ALL_PROJECTS);

    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Projects);
    let page = ProjectsTemplate {
        chrome: Chrome::new(guard.site()),
        filters: FilterLink::all("/projects", PROJECT_CATEGORIES, selected),
        projects,
    };
    respond(page, scroll, false)
}

/// Display the gallery, optionally filtered, with the lightbox open on
/// `image` when it indexes the filtered set.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn gallery(
    CurrentVisit(visit): CurrentVisit,
    Query(query): Query<GalleryQuery>,
) -> Response {
    let selected = query.category.as_deref().unwrap_or(ALL_GALLERY);
    let images = filter_by_category(GALLERY, selected, ALL_GALLERY);
    let base = format!("/gallery?category={}", query_escape(selected));

    let lightbox = query
        .image
        .and_then(|index| Lightbox::open(&images, index, &base));

    let tiles = images
        .iter()
        .enumerate()
        .map(|(index, &image)| GalleryTile {
            image,
            href: format!("{base}&image={index}"),
        })
        .collect();

    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Gallery);
    let page = GalleryTemplate {
        chrome: Chrome::new(guard.site()),
        filters: FilterLink::all("/gallery", GALLERY_CATEGORIES, selected),
        tiles,
        lightbox,
    };
    respond(page, scroll, false)
}

/// Display the services listing.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn services(CurrentVisit(visit): CurrentVisit) -> Response {
    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::Services);
    let page = ServicesTemplate {
        chrome: Chrome::new(guard.site()),
        services: SERVICES,
    };
    respond(page, scroll, false)
}

/// Display one service. Unknown ids render the not-found fallback.
#[instrument(skip(visit), fields(visitor = %visit.id()))]
pub async fn service_detail(
    CurrentVisit(visit): CurrentVisit,
    Path(id): Path<String>,
) -> Response {
    let service = find_service(&id);
    if service.is_none() {
        tracing::debug!(service = %id, "Unknown service");
    }
    let related = service
        .map(|service| related_services(service.id, RELATED_SERVICES))
        .unwrap_or_default();

    let mut guard = visit.lock().await;
    let scroll = guard.navigate(Destination::ServiceDetail(id));
    let page = ServiceDetailTemplate {
        chrome: Chrome::new(guard.site()),
        service,
        related,
    };
    respond(page, scroll, false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use askama::Template;
    use axum::http::StatusCode;
    use skyray_core::SiteState;
    use skyray_core::catalog::{ALL_GALLERY, GALLERY, filter_by_category};

    use super::{GalleryTemplate, Lightbox};
    use crate::routes::test_support::TestClient;
    use crate::views::Chrome;

    #[tokio::test]
    async fn test_home_lists_services() {
        let mut client = TestClient::new();
        let response = client.get("/").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("SkyRay Engineering Solutions (Pvt) Ltd"));
        assert!(response.body.contains("/services/automation"));
    }

    #[tokio::test]
    async fn test_unknown_service_renders_fallback() {
        let mut client = TestClient::new();
        let response = client.get("/services/teleportation").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Service not found"));
        assert!(response.body.contains("href=\"/services\""));
    }

    #[tokio::test]
    async fn test_service_detail_shows_related() {
        let mut client = TestClient::new();
        let response = client.get("/services/consulting").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Related Services"));
        assert!(response.body.contains("/services/electrical-installation"));
        assert!(!response.body.contains("Service not found"));
    }

    #[tokio::test]
    async fn test_gallery_filter() {
        let mut client = TestClient::new();
        let response = client.get("/gallery?category=Panels").await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.matches("class=\"gallery-tile\"").count(), 3);
    }

    #[tokio::test]
    async fn test_gallery_lightbox_wraps() {
        let mut client = TestClient::new();
        let response = client.get("/gallery?category=Panels&image=2").await;
        assert!(response.body.contains("3 / 3"));
        assert!(response.body.contains("/gallery?category=Panels&#38;image=0"));
        assert!(response.body.contains("class=\"lightbox-prev\""));
    }

    #[test]
    fn test_lightbox_links_wrap() {
        let panels = filter_by_category(GALLERY, "Panels", ALL_GALLERY);
        let lightbox = Lightbox::open(&panels, 2, "/gallery?category=Panels").unwrap();
        assert_eq!(lightbox.next_href, "/gallery?category=Panels&image=0");
        assert_eq!(lightbox.prev_href, "/gallery?category=Panels&image=1");
        assert!(lightbox.can_step());
    }

    #[test]
    fn test_single_image_lightbox_hides_arrows() {
        let images = [&GALLERY[0]];
        let lightbox = Lightbox::open(&images, 0, "/gallery?category=All").unwrap();
        assert!(!lightbox.can_step());

        let page = GalleryTemplate {
            chrome: Chrome::new(&SiteState::new()),
            filters: Vec::new(),
            tiles: Vec::new(),
            lightbox: Some(lightbox),
        };
        let html = page.render().unwrap();
        assert!(html.contains("class=\"lightbox-close\""));
        assert!(!html.contains("class=\"lightbox-prev\""));
        assert!(!html.contains("class=\"lightbox-next\""));
    }

    #[tokio::test]
    async fn test_gallery_lightbox_out_of_range_is_closed() {
        let mut client = TestClient::new();
        let response = client.get("/gallery?image=99").await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(!response.body.contains("class=\"lightbox\""));
    }

    #[tokio::test]
    async fn test_projects_filter() {
        let mut client = TestClient::new();
        let response = client
            .get("/projects?category=Automation%20Solutions")
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body.matches("class=\"project-card\"").count(), 3);
    }
}

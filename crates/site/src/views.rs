//! View models shared by every page template.
//!
//! Templates never see [`SiteState`] directly; handlers turn it into these
//! plain structs while the visit is locked.

use skyray_core::{CartLineId, ItemKind, Navigator, Page, SiteState};

/// Company name shown in the header, footer and page titles.
pub const COMPANY_NAME: &str = "SkyRay Engineering Solutions (Pvt) Ltd";

/// Header, navigation and footer data.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub title: &'static str,
    pub company: &'static str,
    pub nav: Vec<NavLink>,
    pub cart_count: usize,
    /// Display name of the logged-in visitor.
    pub user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl Chrome {
    #[must_use]
    pub fn new(site: &SiteState) -> Self {
        let current = site.current_page();
        // Detail pages highlight their listing
        let highlighted = match current {
            Page::ServiceDetail => Page::Services,
            other => other,
        };

        Self {
            title: current.title(),
            company: COMPANY_NAME,
            nav: Page::nav_items()
                .iter()
                .map(|&page| NavLink {
                    href: fixed_path(page).unwrap_or("/"),
                    label: page.title(),
                    active: page == highlighted,
                })
                .collect(),
            cart_count: site.cart().len(),
            user: site.session().map(|session| session.name.clone()),
        }
    }
}

/// URL of the page `navigator` is showing, including its selector.
#[must_use]
pub fn page_path(navigator: &Navigator) -> String {
    match navigator.current() {
        Page::ServiceDetail => format!(
            "/services/{}",
            query_escape(navigator.selected_service().unwrap_or_default())
        ),
        Page::ProductListing => format!(
            "/shop/{}",
            query_escape(navigator.selected_category().unwrap_or_default())
        ),
        page => fixed_path(page).unwrap_or("/").to_string(),
    }
}

/// URL of a page that takes no selector.
const fn fixed_path(page: Page) -> Option<&'static str> {
    Some(match page {
        Page::Home => "/",
        Page::Login => "/auth/login",
        Page::Register => "/auth/register",
        Page::About => "/about",
        Page::Projects => "/projects",
        Page::Quotation => "/quotation",
        Page::Cart => "/cart",
        Page::Contact => "/contact",
        Page::Services => "/services",
        Page::CartCategories => "/shop",
        Page::Gallery => "/gallery",
        Page::ServiceDetail | Page::ProductListing => return None,
    })
}

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

impl FilterLink {
    /// One link per label, pointing at `base?category=<label>`.
    #[must_use]
    pub fn all(base: &str, labels: &[&'static str], selected: &str) -> Vec<Self> {
        labels
            .iter()
            .map(|&label| Self {
                label,
                href: format!("{base}?category={}", query_escape(label)),
                active: label == selected,
            })
            .collect()
    }
}

/// Percent-encode a query parameter value.
#[must_use]
pub fn query_escape(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Cart contents as shown on the cart page.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_items: usize,
    pub total_units: u64,
}

#[derive(Debug, Clone)]
pub struct CartLineView {
    pub id: CartLineId,
    pub category: String,
    pub sub_type: String,
    pub description: String,
    pub quantity: u32,
    pub product_name: Option<String>,
    pub product_specs: Option<String>,
}

impl CartView {
    #[must_use]
    pub fn new(site: &SiteState) -> Self {
        let cart = site.cart();
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| {
                    let (product_name, product_specs) = match &line.item.kind {
                        ItemKind::ProductOrder {
                            product_name,
                            product_specs,
                        } => (Some(product_name.clone()), Some(product_specs.clone())),
                        ItemKind::ServiceRequest => (None, None),
                    };
                    CartLineView {
                        id: line.id(),
                        category: line.item.category.clone(),
                        sub_type: line.item.sub_type.clone(),
                        description: line.item.description.clone(),
                        quantity: line.quantity().get(),
                        product_name,
                        product_specs,
                    }
                })
                .collect(),
            total_items: cart.len(),
            total_units: cart.total_units(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use skyray_core::{Destination, ScrollRequest};

    use super::*;

    #[test]
    fn test_page_path_includes_selector() {
        let mut site = SiteState::new();
        let mut scroll = ScrollRequest::new();
        assert_eq!(page_path(site.navigator()), "/");

        site.navigate(Destination::ServiceDetail("automation".into()), &mut scroll);
        assert_eq!(page_path(site.navigator()), "/services/automation");

        site.navigate(Destination::ProductListing("pneumatic-hydraulic".into()), &mut scroll);
        assert_eq!(page_path(site.navigator()), "/shop/pneumatic-hydraulic");

        site.navigate(Destination::Login, &mut scroll);
        assert_eq!(page_path(site.navigator()), "/auth/login");
    }

    #[test]
    fn test_every_page_has_a_path() {
        for page in Page::ALL {
            if !matches!(page, Page::ServiceDetail | Page::ProductListing) {
                assert!(fixed_path(page).is_some(), "{page} has no path");
            }
        }
    }

    #[test]
    fn test_chrome_highlights_listing_on_detail_page() {
        let mut site = SiteState::new();
        site.navigate(
            Destination::ServiceDetail("consulting".into()),
            &mut ScrollRequest::new(),
        );
        let chrome = Chrome::new(&site);
        let active: Vec<&str> = chrome
            .nav
            .iter()
            .filter(|link| link.active)
            .map(|link| link.href)
            .collect();
        assert_eq!(active, ["/services"]);
        assert_eq!(chrome.cart_count, 0);
        assert!(chrome.user.is_none());
    }

    #[test]
    fn test_filter_links_escape_labels() {
        let links = FilterLink::all(
            "/projects",
            &["All Projects", "Automation Solutions"],
            "All Projects",
        );
        assert_eq!(links[0].href, "/projects?category=All%20Projects");
        assert!(links[0].active);
        assert!(!links[1].active);
    }

    #[test]
    fn test_cart_view_totals() {
        let mut site = SiteState::new();
        let line = site.add_product("frl-unit").unwrap();
        site.add_product("air-cylinder");
        site.cart_mut().increment(line);

        let view = CartView::new(&site);
        assert_eq!(view.total_items, 2);
        assert_eq!(view.total_units, 3);
        assert_eq!(view.lines[0].product_name.as_deref(), Some("Air Preparation Unit (FRL)"));
    }
}

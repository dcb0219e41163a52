//! Single-slot page navigation.
//!
//! There is exactly one "current page" per visitor. It is not a router: no
//! history, no back/forward, no restoration of view-local state. Pages that
//! show one catalog entry read an auxiliary selector, and the only way to get
//! to such a page is a [`Destination`] that carries the selector, so the
//! selector is always written in the same step as the page.

use core::fmt;

/// Every page the site can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    About,
    Projects,
    Quotation,
    Cart,
    Contact,
    Services,
    ServiceDetail,
    CartCategories,
    ProductListing,
    Gallery,
}

impl Page {
    /// All pages, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::About,
        Self::Projects,
        Self::Quotation,
        Self::Cart,
        Self::Contact,
        Self::Services,
        Self::ServiceDetail,
        Self::CartCategories,
        Self::ProductListing,
        Self::Gallery,
    ];

    /// Stable kebab-case identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Quotation => "quotation",
            Self::Cart => "cart",
            Self::Contact => "contact",
            Self::Services => "services",
            Self::ServiceDetail => "service-detail",
            Self::CartCategories => "cart-categories",
            Self::ProductListing => "product-listing",
            Self::Gallery => "gallery",
        }
    }

    /// Human readable title used in `<title>` and headings.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::About => "About Us",
            Self::Projects => "Projects",
            Self::Quotation => "Request Quotation",
            Self::Cart => "Quotation Cart",
            Self::Contact => "Contact",
            Self::Services => "Our Services",
            Self::ServiceDetail => "Service Details",
            Self::CartCategories => "Product Categories",
            Self::ProductListing => "Products",
            Self::Gallery => "Gallery",
        }
    }

    /// Entries of the main navigation bar, in display order.
    #[must_use]
    pub const fn nav_items() -> &'static [Self] {
        &[
            Self::Home,
            Self::About,
            Self::Services,
            Self::Projects,
            Self::Gallery,
            Self::Contact,
        ]
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A navigation request.
///
/// Parameterized pages carry their selector, everything else is a unit
/// variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    About,
    Projects,
    Quotation,
    Cart,
    Contact,
    Services,
    ServiceDetail(String),
    CartCategories,
    ProductListing(String),
    Gallery,
}

impl Destination {
    /// The page this destination shows.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Login => Page::Login,
            Self::Register => Page::Register,
            Self::About => Page::About,
            Self::Projects => Page::Projects,
            Self::Quotation => Page::Quotation,
            Self::Cart => Page::Cart,
            Self::Contact => Page::Contact,
            Self::Services => Page::Services,
            Self::ServiceDetail(_) => Page::ServiceDetail,
            Self::CartCategories => Page::CartCategories,
            Self::ProductListing(_) => Page::ProductListing,
            Self::Gallery => Page::Gallery,
        }
    }
}

/// Side-effect sink for navigation: whatever shows the page scrolls it.
pub trait Viewport {
    /// Reset the scroll position to the top of the page.
    fn scroll_to_top(&mut self);
}

/// A [`Viewport`] that records requests so a caller can act on them later.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    count: usize,
}

impl ScrollRequest {
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Whether at least one scroll-to-top was requested.
    #[must_use]
    pub const fn requested(&self) -> bool {
        self.count > 0
    }

    /// How many scroll-to-top requests were recorded.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Viewport for ScrollRequest {
    fn scroll_to_top(&mut self) {
        self.count += 1;
    }
}

/// The current page plus the selectors read by detail pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
    selected_service: Option<String>,
    selected_category: Option<String>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// A navigator showing the home page with no selectors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Page::Home,
            selected_service: None,
            selected_category: None,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Page {
        self.current
    }

    /// Service id last navigated to. Only meaningful on [`Page::ServiceDetail`].
    #[must_use]
    pub fn selected_service(&self) -> Option<&str> {
        self.selected_service.as_deref()
    }

    /// Category id last navigated to. Only meaningful on [`Page::ProductListing`].
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Show `destination`, writing its selector first, then ask the viewport
    /// to scroll to the top.
    ///
    /// The page is replaced unconditionally; ids are not checked against the
    /// catalog. Selectors belonging to other pages are left as they are.
    /// Returns `true` when the current page changed.
    pub fn navigate(&mut self, destination: Destination, viewport: &mut dyn Viewport) -> bool {
        let page = destination.page();
        match destination {
            Destination::ServiceDetail(id) => self.selected_service = Some(id),
            Destination::ProductListing(id) => self.selected_category = Some(id),
            _ => {}
        }

        let changed = self.current != page;
        self.current = page;
        viewport.scroll_to_top();
        changed
    }
}

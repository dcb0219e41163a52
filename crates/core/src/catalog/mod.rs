//! Static, read-only reference data: services, products, gallery, projects.
//!
//! Every table is a `&'static` slice seeded at compile time and never
//! mutated. Lookups return `Option`/empty results for unknown ids; callers
//! render a "not found, go back" view instead of failing.

mod gallery;
mod products;
mod projects;
mod quotation;
mod services;

pub use gallery::{GALLERY, GALLERY_CATEGORIES, GalleryImage, lightbox_next, lightbox_prev};
pub use products::{
    PRODUCT_CATEGORIES, PRODUCTS, Product, ProductCategory, find_category, find_product,
    products_in_category,
};
pub use projects::{PROJECT_CATEGORIES, PROJECTS, Project};
pub use quotation::{FormOption, PROJECT_TYPES, SERVICE_OPTIONS, option_label};
pub use services::{SERVICES, Service, find_service, related_services};

/// Identity label for the gallery category filter.
pub const ALL_GALLERY: &str = "All";

/// Identity label for the projects category filter.
pub const ALL_PROJECTS: &str = "All Projects";

/// Catalog entries that belong to a display category.
pub trait Categorized {
    /// The category label this entry is filed under.
    fn category(&self) -> &str;
}

/// Filter `items` down to those whose category equals `selected`.
///
/// When `selected` is the `all_label` the filter is the identity. Relative
/// order is preserved either way.
///
/// ```
/// use skyray_core::catalog::{ALL_GALLERY, GALLERY, filter_by_category};
///
/// let panels = filter_by_category(GALLERY, "Panels", ALL_GALLERY);
/// assert!(panels.iter().all(|img| img.category == "Panels"));
/// assert_eq!(filter_by_category(GALLERY, ALL_GALLERY, ALL_GALLERY).len(), GALLERY.len());
/// ```
#[must_use]
pub fn filter_by_category<'a, T: Categorized>(
    items: &'a [T],
    selected: &str,
    all_label: &str,
) -> Vec<&'a T> {
    if selected == all_label {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category() == selected)
        .collect()
}

//! The quotation cart.
//!
//! An ordered list of lines. Insertion order is display order. Each line gets
//! an id from a per-cart counter that is never rewound, so an id is never
//! reused while the cart exists, including across [`Cart::clear`].

use crate::catalog::{Product, ProductCategory};
use crate::types::CartLineId;

/// Sub-type label given to lines added from a product listing.
pub const PRODUCT_ORDER_LABEL: &str = "Product Order";

/// A line quantity. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Self = Self(1);

    /// `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Clamp any value into range (0 becomes 1).
    #[must_use]
    pub const fn clamped(value: u32) -> Self {
        if value == 0 { Self::ONE } else { Self(value) }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more, with no upper bound other than `u32::MAX`.
    #[must_use]
    pub const fn inc(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One less, floored at 1.
    #[must_use]
    pub const fn saturating_dec(self) -> Self {
        if self.0 <= 1 { Self::ONE } else { Self(self.0 - 1) }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of request a line represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Added from the quotation request form.
    ServiceRequest,
    /// Added from a product listing.
    ProductOrder {
        product_name: String,
        product_specs: String,
    },
}

/// The fields of a cart line before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Service label, or the product category title for product orders.
    pub category: String,
    /// Project type label, or [`PRODUCT_ORDER_LABEL`].
    pub sub_type: String,
    pub description: String,
    pub quantity: Quantity,
    pub kind: ItemKind,
}

impl LineItem {
    /// A line requesting a service.
    #[must_use]
    pub fn service_request(
        service: impl Into<String>,
        project_type: impl Into<String>,
        description: impl Into<String>,
        quantity: Quantity,
    ) -> Self {
        Self {
            category: service.into(),
            sub_type: project_type.into(),
            description: description.into(),
            quantity,
            kind: ItemKind::ServiceRequest,
        }
    }

    /// A line ordering one unit of `product`.
    #[must_use]
    pub fn product_order(product: &Product, category: &ProductCategory) -> Self {
        Self {
            category: category.title.to_string(),
            sub_type: PRODUCT_ORDER_LABEL.to_string(),
            description: product.description.to_string(),
            quantity: Quantity::ONE,
            kind: ItemKind::ProductOrder {
                product_name: product.name.to_string(),
                product_specs: product.specs.to_string(),
            },
        }
    }
}

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    id: CartLineId,
    pub item: LineItem,
}

impl CartLine {
    #[must_use]
    pub const fn id(&self) -> CartLineId {
        self.id
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.item.quantity
    }

    #[must_use]
    pub const fn is_product(&self) -> bool {
        matches!(self.item.kind, ItemKind::ProductOrder { .. })
    }
}

/// Ordered collection of quotation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    next_id: CartLineId,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_id: CartLineId::new(1),
        }
    }

    /// Append a line with a fresh id and return it.
    #[allow(clippy::indexing_slicing)] // `index` was pushed just above
    pub fn add_item(&mut self, item: LineItem) -> &CartLine {
        let id = self.next_id;
        self.next_id = id.next();
        let index = self.lines.len();
        self.lines.push(CartLine { id, item });
        &self.lines[index]
    }

    /// Remove the line with `id`. Returns `false` (and does nothing) if absent.
    pub fn remove_item(&mut self, id: CartLineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// Replace a line's quantity. Returns `false` if the line is absent.
    pub fn set_quantity(&mut self, id: CartLineId, quantity: Quantity) -> bool {
        self.get_mut(id).is_some_and(|line| {
            line.item.quantity = quantity;
            true
        })
    }

    /// Add one to a line's quantity and return the new quantity.
    pub fn increment(&mut self, id: CartLineId) -> Option<Quantity> {
        let quantity = self.get(id)?.quantity().inc();
        self.set_quantity(id, quantity);
        Some(quantity)
    }

    /// Subtract one from a line's quantity, never going below 1.
    pub fn decrement(&mut self, id: CartLineId) -> Option<Quantity> {
        let quantity = self.get(id)?.quantity().saturating_dec();
        self.set_quantity(id, quantity);
        Some(quantity)
    }

    /// Remove every line. Ids keep counting up from where they were.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines; this is the badge count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity().get()))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, id: CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    fn get_mut(&mut self, id: CartLineId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}

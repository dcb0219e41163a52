//! Product catalog browsed from the cart categories page.

/// A group of products shown as one card on the categories page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A product that can be added to the quotation cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// Id of the [`ProductCategory`] this product belongs to.
    pub category: &'static str,
    pub specs: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

pub static PRODUCT_CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        id: "automation-equipment",
        title: "Automation Equipment and Accessories",
        description: "Complete range of industrial automation components and systems",
        icon: "⚙️",
    },
    ProductCategory {
        id: "pneumatic-hydraulic",
        title: "Pneumatic and Hydraulic Fittings and Accessories",
        description: "High-quality fittings and components for fluid power systems",
        icon: "🔧",
    },
    ProductCategory {
        id: "electrical-switchgears",
        title: "Electrical Switchgears and Panel Accessories",
        description: "Premium electrical distribution and control equipment",
        icon: "⚡",
    },
];

pub static PRODUCTS: &[Product] = &[
    Product {
        id: "plc-controller",
        name: "Industrial PLC Controller",
        category: "automation-equipment",
        specs: "32 I/O, Ethernet, Modbus RTU",
        image: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=600",
        description: "High-performance programmable logic controller for industrial automation",
    },
    Product {
        id: "hmi-touchscreen",
        name: "HMI Touchscreen Panel",
        category: "automation-equipment",
        specs: "10.1\" Color Display, IP65",
        image: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=600",
        description: "Advanced human-machine interface for system monitoring and control",
    },
    Product {
        id: "servo-motor",
        name: "Servo Motor Drive System",
        category: "automation-equipment",
        specs: "3kW, 220V, Encoder Feedback",
        image: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=600",
        description: "Precision servo motor system with drive and feedback",
    },
    Product {
        id: "pneumatic-valve",
        name: "Pneumatic Solenoid Valve",
        category: "pneumatic-hydraulic",
        specs: "5/2 Way, 24VDC, 0-10 bar",
        image: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=600",
        description: "High-quality solenoid valve for pneumatic control systems",
    },
    Product {
        id: "air-cylinder",
        name: "Pneumatic Air Cylinder",
        category: "pneumatic-hydraulic",
        specs: "Bore 63mm, Stroke 100mm",
        image: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=600",
        description: "Robust pneumatic cylinder for industrial applications",
    },
    Product {
        id: "frl-unit",
        name: "Air Preparation Unit (FRL)",
        category: "pneumatic-hydraulic",
        specs: "Filter, Regulator, Lubricator",
        image: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=600",
        description: "Complete air treatment system for pneumatic circuits",
    },
    Product {
        id: "mccb-breaker",
        name: "Molded Case Circuit Breaker",
        category: "electrical-switchgears",
        specs: "250A, 3P, 415V, 50kA",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=600",
        description: "Heavy-duty circuit breaker for power distribution",
    },
    Product {
        id: "contactor",
        name: "Industrial Contactor",
        category: "electrical-switchgears",
        specs: "100A, 3P+NO, 230VAC Coil",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=600",
        description: "Reliable electromagnetic contactor for motor control",
    },
    Product {
        id: "panel-meter",
        name: "Digital Panel Meter",
        category: "electrical-switchgears",
        specs: "Voltage, Current, Power, LCD",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=600",
        description: "Multi-function digital meter for electrical monitoring",
    },
];

/// Look up a product category by id.
#[must_use]
pub fn find_category(id: &str) -> Option<&'static ProductCategory> {
    PRODUCT_CATEGORIES.iter().find(|category| category.id == id)
}

/// Look up a product by id.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

/// Products filed under `category_id`, in catalog order. Empty when unknown.
#[must_use]
pub fn products_in_category(category_id: &str) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|product| product.category == category_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_in_category() {
        let names: Vec<&str> = products_in_category("pneumatic-hydraulic")
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            [
                "Pneumatic Solenoid Valve",
                "Pneumatic Air Cylinder",
                "Air Preparation Unit (FRL)"
            ]
        );
    }

    #[test]
    fn test_unknown_lookups_are_not_found() {
        assert!(find_category("garden-furniture").is_none());
        assert!(find_product("flux-capacitor").is_none());
        assert!(products_in_category("garden-furniture").is_empty());
    }

    #[test]
    fn test_every_product_has_a_category() {
        for product in PRODUCTS {
            assert!(
                find_category(product.category).is_some(),
                "{} has unknown category {}",
                product.id,
                product.category
            );
        }
    }
}

//! Completed project showcase.

use super::Categorized;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub year: &'static str,
    pub client: &'static str,
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

/// Filter buttons, in display order. `"All Projects"` is the identity filter.
pub static PROJECT_CATEGORIES: &[&str] = &[
    "All Projects",
    "Electrical Installations",
    "Industrial Power Systems",
    "Automation Solutions",
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Metropolitan Power Distribution",
        category: "Electrical Installations",
        description: "25MW power distribution system for downtown commercial district",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=800",
        year: "2024",
        client: "City Infrastructure Corp",
    },
    Project {
        id: 2,
        title: "Smart Factory Automation",
        category: "Automation Solutions",
        description: "Complete automation system with AI-powered monitoring",
        image: "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800",
        year: "2024",
        client: "TechManufacture Inc",
    },
    Project {
        id: 3,
        title: "Industrial Complex Power System",
        category: "Industrial Power Systems",
        description: "High-voltage power infrastructure for manufacturing facility",
        image: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=800",
        year: "2023",
        client: "Global Industries Ltd",
    },
    Project {
        id: 4,
        title: "Hospital Backup Power",
        category: "Electrical Installations",
        description: "Emergency power system with redundancy for medical center",
        image: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=800",
        year: "2023",
        client: "Central Hospital",
    },
    Project {
        id: 5,
        title: "Warehouse Automation",
        category: "Automation Solutions",
        description: "Automated material handling and power management system",
        image: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=800",
        year: "2024",
        client: "LogisticsPro Corp",
    },
    Project {
        id: 6,
        title: "Renewable Energy Integration",
        category: "Industrial Power Systems",
        description: "Solar and grid power integration for industrial park",
        image: "https://images.unsplash.com/photo-1509391366360-2e959784a276?w=800",
        year: "2023",
        client: "Green Energy Solutions",
    },
    Project {
        id: 7,
        title: "Data Center Power Infrastructure",
        category: "Electrical Installations",
        description: "Redundant power system for mission-critical facility",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800",
        year: "2024",
        client: "CloudTech Systems",
    },
    Project {
        id: 8,
        title: "Manufacturing Plant Upgrade",
        category: "Industrial Power Systems",
        description: "Complete electrical system modernization",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=800",
        year: "2023",
        client: "Industrial Dynamics",
    },
    Project {
        id: 9,
        title: "Smart Building Controls",
        category: "Automation Solutions",
        description: "Integrated building management and automation system",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800",
        year: "2024",
        client: "Commercial Properties Inc",
    },
];

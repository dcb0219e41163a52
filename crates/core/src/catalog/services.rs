//! Service offerings shown on the services pages.

/// A service SkyRay offers, with its detail-page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub image: &'static str,
    pub key_features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

/// All services, in display order.
pub static SERVICES: &[Service] = &[
    Service {
        id: "electrical-installation",
        title: "Electrical Installation",
        description: "Complete electrical installation for industrial and commercial facilities",
        detailed_description: "From design drawings to energisation, our certified engineers deliver \
            low and medium voltage installations that meet national wiring regulations. We handle \
            cabling, containment, distribution boards, earthing and final testing so your facility \
            is commissioned safely and on schedule.",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=1200",
        key_features: &[
            "LV and MV distribution design",
            "Cable tray and containment systems",
            "Earthing and lightning protection",
            "Testing, inspection and certification",
        ],
        benefits: &[
            "Compliance with national wiring standards",
            "Single point of responsibility from design to handover",
            "Documented as-built drawings",
        ],
    },
    Service {
        id: "power-systems",
        title: "Industrial Power Systems",
        description: "High-capacity power distribution and backup systems for heavy industry",
        detailed_description: "We engineer power systems for plants that cannot afford downtime: \
            transformer substations, main switchboards, power factor correction and standby \
            generation with automatic transfer. Every system is sized from a load study of your \
            actual process.",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=1200",
        key_features: &[
            "Transformer and substation works",
            "Power factor correction banks",
            "Standby generators with ATS",
            "Load flow and short circuit studies",
        ],
        benefits: &[
            "Reduced energy losses and tariffs",
            "Higher uptime for critical processes",
            "Capacity planned for future expansion",
        ],
    },
    Service {
        id: "automation",
        title: "Automation Solutions",
        description: "PLC, SCADA and HMI systems that make production lines smarter",
        detailed_description: "Our automation team programs and integrates PLCs, drives, HMIs and \
            SCADA so that machines and lines run with less manual intervention. We retrofit legacy \
            controls as readily as we build new systems.",
        image: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=1200",
        key_features: &[
            "PLC programming and commissioning",
            "SCADA and HMI development",
            "VFD and servo integration",
            "Industrial networking (Modbus, Profinet, Ethernet/IP)",
        ],
        benefits: &[
            "Consistent product quality",
            "Real-time visibility of production",
            "Lower labour cost per unit",
        ],
    },
    Service {
        id: "maintenance",
        title: "Maintenance & Support",
        description: "Preventive maintenance contracts and round-the-clock breakdown support",
        detailed_description: "Scheduled inspections, thermography and breaker servicing keep \
            faults from becoming failures. When something does trip, our emergency line puts a \
            qualified technician on site fast.",
        image: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=1200",
        key_features: &[
            "Preventive maintenance schedules",
            "Infrared thermography surveys",
            "24/7 emergency call-out",
            "Spare parts management",
        ],
        benefits: &[
            "Fewer unplanned stoppages",
            "Longer equipment life",
            "Predictable maintenance budget",
        ],
    },
    Service {
        id: "consulting",
        title: "Engineering Consulting",
        description: "Independent design review, energy audits and project management",
        detailed_description: "Our consultants help you make decisions before money is spent: \
            feasibility studies, energy audits, tender specifications and owner's engineer \
            services during construction.",
        image: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=1200",
        key_features: &[
            "Feasibility and design review",
            "Energy audits",
            "Tender documentation",
            "Site supervision",
        ],
        benefits: &[
            "Informed capital decisions",
            "Vendor-neutral advice",
            "Projects delivered to specification",
        ],
    },
    Service {
        id: "panel-manufacturing",
        title: "Control Panel Manufacturing",
        description: "Custom MCC, PLC and distribution panels built in our own workshop",
        detailed_description: "Panels are designed, wired and factory tested in-house, then \
            delivered ready to install. Each panel ships with wiring diagrams, test reports and a \
            labelled bill of materials.",
        image: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=1200",
        key_features: &[
            "Motor control centres",
            "PLC and automation cabinets",
            "Main and sub distribution boards",
            "Factory acceptance testing",
        ],
        benefits: &[
            "Shorter installation time on site",
            "Consistent build quality",
            "Full documentation package",
        ],
    },
];

/// Look up a service by id.
#[must_use]
pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}

/// Up to `limit` other services, in display order, for the "related" panel.
#[must_use]
pub fn related_services(id: &str, limit: usize) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|service| service.id != id)
        .take(limit)
        .collect()
}

//! Photo gallery entries and lightbox stepping.

use super::Categorized;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: &'static str,
    pub url: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl Categorized for GalleryImage {
    fn category(&self) -> &str {
        self.category
    }
}

/// Filter buttons, in display order. `"All"` is the identity filter.
pub static GALLERY_CATEGORIES: &[&str] = &[
    "All",
    "Projects",
    "Panels",
    "Automation",
    "Training",
    "Installations",
];

pub static GALLERY: &[GalleryImage] = &[
    GalleryImage {
        id: "proj-1",
        url: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=1200",
        category: "Projects",
        title: "Factory Automation Project",
        description: "Complete automation system installation",
    },
    GalleryImage {
        id: "proj-2",
        url: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=1200",
        category: "Projects",
        title: "Industrial Power Distribution",
        description: "Large-scale power distribution system",
    },
    GalleryImage {
        id: "proj-3",
        url: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=1200",
        category: "Projects",
        title: "Manufacturing Plant Upgrade",
        description: "Complete electrical system modernization",
    },
    GalleryImage {
        id: "panel-1",
        url: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=1200",
        category: "Panels",
        title: "Motor Control Panel",
        description: "Custom MCC panel with VFD drives",
    },
    GalleryImage {
        id: "panel-2",
        url: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=1200",
        category: "Panels",
        title: "Power Distribution Board",
        description: "Main distribution panel 1000A",
    },
    GalleryImage {
        id: "panel-3",
        url: "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?w=1200",
        category: "Panels",
        title: "PLC Control Cabinet",
        description: "Automation control panel with HMI",
    },
    GalleryImage {
        id: "auto-1",
        url: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=1200",
        category: "Automation",
        title: "SCADA System Implementation",
        description: "Industrial SCADA control room setup",
    },
    GalleryImage {
        id: "auto-2",
        url: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=1200",
        category: "Automation",
        title: "Conveyor System Automation",
        description: "Automated material handling system",
    },
    GalleryImage {
        id: "auto-3",
        url: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=1200",
        category: "Automation",
        title: "Robotic Integration",
        description: "Industrial robot installation",
    },
    GalleryImage {
        id: "train-1",
        url: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=1200",
        category: "Training",
        title: "PLC Programming Workshop",
        description: "Hands-on PLC training session",
    },
    GalleryImage {
        id: "train-2",
        url: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=1200",
        category: "Training",
        title: "Electrical Safety Course",
        description: "Industrial safety training",
    },
    GalleryImage {
        id: "train-3",
        url: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=1200",
        category: "Training",
        title: "Automation Fundamentals",
        description: "Basic automation training",
    },
    GalleryImage {
        id: "install-1",
        url: "https://images.unsplash.com/photo-1581092160607-ee67e0e62837?w=1200",
        category: "Installations",
        title: "Transformer Installation",
        description: "1000kVA transformer setup",
    },
    GalleryImage {
        id: "install-2",
        url: "https://images.unsplash.com/photo-1581092335397-9583eb92d232?w=1200",
        category: "Installations",
        title: "Cable Tray System",
        description: "Industrial cable management",
    },
    GalleryImage {
        id: "install-3",
        url: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=1200",
        category: "Installations",
        title: "Lighting Protection System",
        description: "Complete LPS installation",
    },
];

/// Index of the image after `index` in a lightbox of `len` images, wrapping.
#[must_use]
pub const fn lightbox_next(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index % len + 1) % len)
}

/// Index of the image before `index` in a lightbox of `len` images, wrapping.
#[must_use]
pub const fn lightbox_prev(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index % len + len - 1) % len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_wraps() {
        assert_eq!(lightbox_next(0, 3), Some(1));
        assert_eq!(lightbox_next(2, 3), Some(0));
        assert_eq!(lightbox_prev(0, 3), Some(2));
        assert_eq!(lightbox_prev(1, 3), Some(0));
    }

    #[test]
    fn test_lightbox_single_and_empty() {
        assert_eq!(lightbox_next(0, 1), Some(0));
        assert_eq!(lightbox_prev(0, 1), Some(0));
        assert_eq!(lightbox_next(0, 0), None);
        assert_eq!(lightbox_prev(5, 0), None);
    }

    #[test]
    fn test_lightbox_out_of_range_index_is_normalised() {
        assert_eq!(lightbox_next(7, 3), Some(2));
        assert_eq!(lightbox_prev(7, 3), Some(0));
    }
}

//! Select options offered by the quotation request form.

/// A `<select>` option: the submitted value and the label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub static SERVICE_OPTIONS: &[FormOption] = &[
    FormOption {
        value: "electrical-installation",
        label: "Electrical Installation",
    },
    FormOption {
        value: "power-systems",
        label: "Industrial Power Systems",
    },
    FormOption {
        value: "automation",
        label: "Automation Solutions",
    },
    FormOption {
        value: "maintenance",
        label: "Maintenance & Support",
    },
    FormOption {
        value: "consulting",
        label: "Engineering Consulting",
    },
];

pub static PROJECT_TYPES: &[FormOption] = &[
    FormOption {
        value: "new-installation",
        label: "New Installation",
    },
    FormOption {
        value: "upgrade",
        label: "System Upgrade",
    },
    FormOption {
        value: "repair",
        label: "Repair & Maintenance",
    },
    FormOption {
        value: "consultation",
        label: "Technical Consultation",
    },
];

/// The label for `value`, or `""` when the value is not one of `options`.
#[must_use]
pub fn option_label(options: &[FormOption], value: &str) -> &'static str {
    options
        .iter()
        .find(|option| option.value == value)
        .map_or("", |option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(SERVICE_OPTIONS, "automation"), "Automation Solutions");
        assert_eq!(option_label(PROJECT_TYPES, "upgrade"), "System Upgrade");
        assert_eq!(option_label(PROJECT_TYPES, "automation"), "");
        assert_eq!(option_label(SERVICE_OPTIONS, ""), "");
    }
}

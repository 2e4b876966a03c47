use serde::{Deserialize, Serialize};

/// Active/inactive flag used by branches, employees and cashier accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveStatus {
    Aktif,
    Nonaktif,
}

impl ActiveStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ActiveStatus::Aktif => "aktif",
            ActiveStatus::Nonaktif => "nonaktif",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActiveStatus::Aktif => "Aktif",
            ActiveStatus::Nonaktif => "Nonaktif",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ActiveStatus::Aktif => "badge badge--success",
            ActiveStatus::Nonaktif => "badge badge--neutral",
        }
    }

    pub fn all() -> Vec<ActiveStatus> {
        vec![ActiveStatus::Aktif, ActiveStatus::Nonaktif]
    }

    /// Parses the backend spellings ("aktif", "active", "1", "nonaktif", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "aktif" | "active" | "1" | "true" => Some(ActiveStatus::Aktif),
            "nonaktif" | "non-aktif" | "tidak aktif" | "inactive" | "0" | "false" => {
                Some(ActiveStatus::Nonaktif)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_spellings() {
        assert_eq!(ActiveStatus::from_code(" Aktif "), Some(ActiveStatus::Aktif));
        assert_eq!(ActiveStatus::from_code("non-aktif"), Some(ActiveStatus::Nonaktif));
        assert_eq!(ActiveStatus::from_code("0"), Some(ActiveStatus::Nonaktif));
        assert_eq!(ActiveStatus::from_code("archived"), None);
    }
}

use serde::{Deserialize, Serialize};

/// Order lifecycle as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Diproses,
    Selesai,
    Dibatalkan,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Diproses => "diproses",
            OrderStatus::Selesai => "selesai",
            OrderStatus::Dibatalkan => "dibatalkan",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu",
            OrderStatus::Diproses => "Diproses",
            OrderStatus::Selesai => "Selesai",
            OrderStatus::Dibatalkan => "Dibatalkan",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge--warning",
            OrderStatus::Diproses => "badge badge--info",
            OrderStatus::Selesai => "badge badge--success",
            OrderStatus::Dibatalkan => "badge badge--error",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Diproses,
            OrderStatus::Selesai,
            OrderStatus::Dibatalkan,
        ]
    }

    /// Statuses an order may move to from this one
    pub fn next_statuses(&self) -> Vec<OrderStatus> {
        match self {
            OrderStatus::Pending => vec![OrderStatus::Diproses, OrderStatus::Dibatalkan],
            OrderStatus::Diproses => vec![OrderStatus::Selesai, OrderStatus::Dibatalkan],
            OrderStatus::Selesai | OrderStatus::Dibatalkan => Vec::new(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pending" | "menunggu" => Some(OrderStatus::Pending),
            "diproses" | "proses" | "processing" => Some(OrderStatus::Diproses),
            "selesai" | "completed" | "done" => Some(OrderStatus::Selesai),
            "dibatalkan" | "batal" | "cancelled" | "canceled" => Some(OrderStatus::Dibatalkan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_have_no_transitions() {
        assert!(OrderStatus::Selesai.next_statuses().is_empty());
        assert!(OrderStatus::Dibatalkan.next_statuses().is_empty());
        assert_eq!(
            OrderStatus::Pending.next_statuses(),
            vec![OrderStatus::Diproses, OrderStatus::Dibatalkan]
        );
    }

    #[test]
    fn parses_english_and_indonesian_codes() {
        assert_eq!(OrderStatus::from_code("Completed"), Some(OrderStatus::Selesai));
        assert_eq!(OrderStatus::from_code("batal"), Some(OrderStatus::Dibatalkan));
        assert_eq!(OrderStatus::from_code("???"), None);
    }
}

use serde::{Deserialize, Serialize};

/// Canonical payment methods accepted at the till
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Qris,
    Debit,
    Transfer,
}

pub const DEFAULT_PAYMENT_ICON: &str = "credit-card";

impl PaymentMethod {
    /// Code sent to the backend when filtering
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Qris => "qris",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Tunai",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Debit => "Kartu Debit",
            PaymentMethod::Transfer => "Transfer Bank",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "banknote",
            PaymentMethod::Qris => "qr-code",
            PaymentMethod::Debit => "credit-card",
            PaymentMethod::Transfer => "landmark",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Cash,
            PaymentMethod::Qris,
            PaymentMethod::Debit,
            PaymentMethod::Transfer,
        ]
    }

    /// Maps every spelling the backend has used over time.
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "cash" | "tunai" | "uang tunai" => Some(PaymentMethod::Cash),
            "qris" | "e-wallet" | "ewallet" | "e_wallet" => Some(PaymentMethod::Qris),
            "debit" | "debit card" | "kartu debit" | "kartu" | "card" => {
                Some(PaymentMethod::Debit)
            }
            "transfer" | "bank transfer" | "transfer bank" | "bank" => {
                Some(PaymentMethod::Transfer)
            }
            _ => None,
        }
    }
}

/// Display label + icon for a raw payment code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethodLabel {
    pub label: String,
    pub icon: &'static str,
}

impl PaymentMethodLabel {
    /// Unrecognized codes pass through unchanged with the default icon.
    pub fn from_code(raw: &str) -> Self {
        match PaymentMethod::from_code(raw) {
            Some(method) => Self {
                label: method.label().to_string(),
                icon: method.icon(),
            },
            None => Self {
                label: raw.to_string(),
                icon: DEFAULT_PAYMENT_ICON,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qris_spellings_share_one_label() {
        for raw in ["qris", "QRIS", "e-wallet", " E-Wallet ", "ewallet"] {
            assert_eq!(PaymentMethodLabel::from_code(raw).label, "QRIS", "{raw}");
        }
    }

    #[test]
    fn historical_cash_and_card_codes() {
        assert_eq!(PaymentMethod::from_code("Tunai"), Some(PaymentMethod::Cash));
        assert_eq!(PaymentMethod::from_code("kartu"), Some(PaymentMethod::Debit));
        assert_eq!(PaymentMethod::from_code("Bank Transfer"), Some(PaymentMethod::Transfer));
    }

    #[test]
    fn unknown_code_passes_through() {
        let mapped = PaymentMethodLabel::from_code("Gopay");
        assert_eq!(mapped.label, "Gopay");
        assert_eq!(mapped.icon, DEFAULT_PAYMENT_ICON);
    }

    #[test]
    fn every_method_round_trips_through_its_code() {
        for method in PaymentMethod::all() {
            assert_eq!(PaymentMethod::from_code(method.code()), Some(method));
        }
    }
}

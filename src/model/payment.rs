//! How the customer pays on delivery.

use super::money::{format_brl, Money};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Pix,
    /// Card machine brought by the courier.
    Card,
    /// Listed at checkout but not offered yet.
    Online,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum PaymentError {
    #[error("Payment method not available: {0:?}")]
    Unavailable(PaymentMethod),

    #[error("Change is only given for cash payments")]
    ChangeRequiresCash,

    #[error("Change for {} must cover the total of {}", brl(.change_for), brl(.total))]
    InsufficientChange { change_for: Money, total: Money },
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Pix,
        PaymentMethod::Card,
        PaymentMethod::Online,
    ];

    pub fn is_available(self) -> bool {
        !matches!(self, PaymentMethod::Online)
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Card => "Cartão na entrega",
            PaymentMethod::Online => "Pagamento online",
        }
    }
}

fn brl(amount: &Money) -> String {
    format_brl(*amount)
}

/// Change owed when paying `total` with a `change_for` note.
pub fn change_due(total: Money, change_for: Money) -> Result<Money, PaymentError> {
    if change_for < total {
        return Err(PaymentError::InsufficientChange { change_for, total });
    }
    Ok(change_for - total)
}

/// Checks a checkout payment selection against the order total.
pub fn validate(
    method: PaymentMethod,
    change_for: Option<Money>,
    total: Money,
) -> Result<(), PaymentError> {
    if !method.is_available() {
        return Err(PaymentError::Unavailable(method));
    }
    match change_for {
        Some(_) if method != PaymentMethod::Cash => Err(PaymentError::ChangeRequiresCash),
        Some(note) => change_due(total, note).map(|_| ()),
        None => Ok(()),
    }
}

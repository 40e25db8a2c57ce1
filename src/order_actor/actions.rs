//! Status changes requested by the restaurant dashboard.

use crate::model::OrderStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move the order to the given status. Only the immediate successor, or a rejection of
    /// a pending order, is accepted. Answers with the new status.
    Advance(OrderStatus),
}

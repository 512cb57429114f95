use tracing::debug;

use crate::config::Pricing;

/// Number of rooms a customer asked to have cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCounts {
    pub small: u32,
    pub large: u32,
}

impl RoomCounts {
    pub fn new(small: u32, large: u32) -> Self {
        Self { small, large }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Estimate {
    pub fn compute(rooms: &RoomCounts, pricing: &Pricing) -> Self {
        let subtotal: f64 = pricing.small_room_price * f64::from(rooms.small)
            + pricing.large_room_price * f64::from(rooms.large);
        let tax: f64 = subtotal * pricing.tax_rate;
        let total: f64 = subtotal + tax;

        debug!(subtotal, tax, total, "computed estimate");

        Self {
            subtotal,
            tax,
            total,
        }
    }
}

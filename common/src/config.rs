/// Fixed prices used by the estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    /// Price charged per small room, before tax.
    pub small_room_price: f64,
    /// Price charged per large room, before tax.
    pub large_room_price: f64,
    /// Sales tax applied to the subtotal.
    pub tax_rate: f64,
    /// How long a printed quote stays valid.
    pub quote_validity_days: u32,
}

pub const PRICING: Pricing = Pricing {
    small_room_price: 25.0,
    large_room_price: 35.0,
    tax_rate: 0.06,
    quote_validity_days: 30,
};

impl Default for Pricing {
    fn default() -> Self {
        PRICING
    }
}

pub const BUSINESS_NAME: &str = "Maged's Carpet Cleaning Service";

pub struct Config {
    pub pricing: Pricing,
    /// Shown in the greeting line.
    pub business_name: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pricing: PRICING,
            business_name: BUSINESS_NAME,
        }
    }
}

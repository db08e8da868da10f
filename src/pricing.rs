use crate::app_config::PricingConfig;
use crate::ticket::Ticket;

// @module: Ticket pricing

/// Maps tickets to their fixed prices
#[derive(Debug, Clone)]
pub struct PriceCalculator {
    // @field: Price table and currency suffix
    pricing: PricingConfig,
}

impl PriceCalculator {
    pub fn new(pricing: PricingConfig) -> Self {
        Self { pricing }
    }

    // @returns: Price of one ticket
    pub fn price(&self, ticket: &Ticket) -> u32 {
        self.pricing.price_for(ticket.age)
    }

    /// Prices for every ticket, in the same order
    pub fn prices(&self, tickets: &[Ticket]) -> Vec<u32> {
        tickets.iter().map(|t| self.price(t)).collect()
    }

    /// Price text as printed, e.g. `1800円`
    pub fn format_price(&self, price: u32) -> String {
        format!("{}{}", price, self.pricing.currency_suffix)
    }
}

impl Default for PriceCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

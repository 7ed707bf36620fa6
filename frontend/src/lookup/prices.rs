use indexmap::IndexMap;

/// Currency code to price, as returned by the pricing API. A currency the
/// upstream could not quote comes back as `null`.
pub type PriceMap = IndexMap<String, Option<f64>>;

/// One renderable price: a currency with a known value.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub currency: String,
    pub price: f64,
}

/// Keep only the currencies that carry a price, in response order.
pub fn available_prices(prices: &PriceMap) -> Vec<PriceEntry> {
    prices
        .iter()
        .filter_map(|(currency, price)| match price {
            Some(price) => Some(PriceEntry {
                currency: currency.clone(),
                price: *price,
            }),
            None => {
                log::warn!("no {currency} price in response, skipping");
                None
            }
        })
        .collect()
}

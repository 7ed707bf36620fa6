use leptos::*;

use crate::lookup::view::PriceCardView;

/// A single currency tile inside the prices grid.
#[component]
pub fn PriceCard(card: PriceCardView) -> impl IntoView {
    view! {
        <div class="price-card">
            <div class="currency">{card.currency}</div>
            <div class="amount">{card.amount}</div>
        </div>
    }
}

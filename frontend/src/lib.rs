use leptos::*;
use wasm_bindgen::prelude::wasm_bindgen;

mod components;
pub mod config;
mod logging;
pub mod lookup;

pub use components::lookup_widget::{PriceLookupWidget, SignalView};
pub use config::{ApiConfig, LOCAL_API_ORIGIN, resolve_api_base};
pub use logging::init_logging;
pub use lookup::controller::{LookupOutcome, LookupPhase, PriceLookup};
pub use lookup::error::LookupError;
pub use lookup::fetcher::{HttpPriceSource, PriceSource, interpret_response};
pub use lookup::format::format_price;
pub use lookup::prices::{PriceEntry, PriceMap, available_prices};
pub use lookup::ticker::TickerCode;
pub use lookup::view::{LookupView, PriceCardView, UiState};

/// Root component hosting the price lookup widget.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-root">
            <header class="app-header">
                <h1>"Cryptocurrency Prices"</h1>
                <p>"Look up the latest price of a coin in several currencies."</p>
            </header>
            <PriceLookupWidget />
        </main>
    }
}

/// WASM entry point called automatically by `trunk`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), wasm_bindgen::JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    leptos::mount_to_body(|| view! { <App /> });
    Ok(())
}

use std::rc::Rc;

use leptos::{ev, event_target_value, *};
use wasm_bindgen_futures::spawn_local;

use crate::{
    config::ApiConfig,
    lookup::{
        controller::PriceLookup,
        fetcher::HttpPriceSource,
        prices::PriceEntry,
        ticker::TickerCode,
        view::{LookupView, PriceCardView, UiState},
    },
};

use super::price_card::PriceCard;

/// `LookupView` writing into a reactive `UiState` the widget renders from.
#[derive(Clone, Copy)]
pub struct SignalView(pub RwSignal<UiState>);

impl LookupView for SignalView {
    fn reset(&self) {
        self.0.update(UiState::reset);
    }

    fn show_loading(&self) {
        self.0.update(|state| state.set_loading(true));
    }

    fn hide_loading(&self) {
        self.0.update(|state| state.set_loading(false));
    }

    fn show_results(&self, code: &TickerCode, entries: &[PriceEntry]) {
        self.0.update(|state| state.show_results(code, entries));
    }

    fn show_error(&self, message: &str) {
        self.0.update(|state| state.show_error(message));
    }
}

pub const INPUT_ID: &str = "crypto-input";
pub const SUBMIT_ID: &str = "search-btn";
pub const LOADING_ID: &str = "loading";
pub const RESULTS_ID: &str = "results";
pub const HEADING_ID: &str = "crypto-name";
pub const GRID_ID: &str = "prices-grid";
pub const ERROR_ID: &str = "error";

/// Toggleable areas of the widget, each carrying the `hidden` class when off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Loading,
    Results,
    Error,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::Loading => LOADING_ID,
            Region::Results => RESULTS_ID,
            Region::Error => ERROR_ID,
        }
    }

    pub fn is_hidden(self, state: &UiState) -> bool {
        match self {
            Region::Loading => !state.loading,
            Region::Results => !state.results_visible,
            Region::Error => !state.error_visible,
        }
    }
}

/// Keys in the ticker input that start a lookup.
pub fn triggers_lookup(key: &str) -> bool {
    key == "Enter"
}

/// Ticker input, submit button and the loading/results/error regions.
///
/// Without an explicit `config`, the API base is derived from the page host.
#[component]
pub fn PriceLookupWidget(#[prop(optional)] config: Option<ApiConfig>) -> impl IntoView {
    let ui = create_rw_signal(UiState::default());
    let input = create_rw_signal(String::new());

    let config = config.unwrap_or_else(page_config);
    let lookup = Rc::new(PriceLookup::new(
        HttpPriceSource::new(config),
        SignalView(ui),
    ));

    let submit = move || {
        let lookup = Rc::clone(&lookup);
        let raw = input.get_untracked();
        spawn_local(async move {
            lookup.lookup(&raw).await;
        });
    };
    let submit_on_enter = submit.clone();

    let cards = move || ui.with(|state| state.cards.clone());

    view! {
        <section class="price-lookup">
            <div class="search-box">
                <input
                    id=INPUT_ID
                    type="text"
                    placeholder="Enter cryptocurrency symbol (e.g., BTC)"
                    prop:value=move || input.get()
                    on:input=move |ev: ev::Event| input.set(event_target_value(&ev))
                    on:keypress=move |ev: ev::KeyboardEvent| {
                        if triggers_lookup(&ev.key()) {
                            submit_on_enter();
                        }
                    }
                />
                <button
                    id=SUBMIT_ID
                    prop:disabled=move || ui.with(|state| state.submit_disabled)
                    on:click=move |_| submit()
                >
                    "Get Prices"
                </button>
            </div>
            <div id=LOADING_ID class="loading" class:hidden=move || ui.with(|state| Region::Loading.is_hidden(state))>
                "Loading..."
            </div>
            <div id=RESULTS_ID class="results" class:hidden=move || ui.with(|state| Region::Results.is_hidden(state))>
                <h2 id=HEADING_ID>{move || ui.with(|state| state.heading.clone())}</h2>
                <div id=GRID_ID class="prices-grid">
                    <For
                        each=cards
                        key=|card| (card.currency.clone(), card.amount.clone())
                        children=move |card: PriceCardView| view! { <PriceCard card=card /> }
                    />
                </div>
            </div>
            <div id=ERROR_ID class="error" class:hidden=move || ui.with(|state| Region::Error.is_hidden(state))>
                {move || ui.with(|state| state.error_message.clone())}
            </div>
        </section>
    }
}

#[cfg(target_arch = "wasm32")]
fn page_config() -> ApiConfig {
    ApiConfig::from_location()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_config() -> ApiConfig {
    ApiConfig::default()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::lookup::{error::LookupError, fetcher::PriceSource, prices::PriceMap};

    /// Answers with a fixed body and keeps what the widget state looked like
    /// while the request was outstanding.
    struct ObservingSource {
        ui: RwSignal<UiState>,
        body: &'static str,
        seen: RefCell<Option<UiState>>,
    }

    #[async_trait(?Send)]
    impl PriceSource for ObservingSource {
        async fn fetch_prices(&self, _code: &TickerCode) -> Result<PriceMap, LookupError> {
            *self.seen.borrow_mut() = Some(self.ui.get_untracked());
            crate::lookup::fetcher::interpret_response(200, self.body)
        }
    }

    #[test]
    fn element_ids_follow_page_contract() {
        let ids = [
            INPUT_ID, SUBMIT_ID, LOADING_ID, RESULTS_ID, HEADING_ID, GRID_ID, ERROR_ID,
        ];
        assert_eq!(
            ids,
            [
                "crypto-input",
                "search-btn",
                "loading",
                "results",
                "crypto-name",
                "prices-grid",
                "error"
            ]
        );
        assert_eq!(Region::Results.id(), "results");
    }

    #[test]
    fn only_enter_submits() {
        assert!(triggers_lookup("Enter"));
        for key in ["a", "Tab", "NumpadEnter", "enter", " "] {
            assert!(!triggers_lookup(key), "{key:?}");
        }
    }

    #[test]
    fn submit_disabled_while_request_in_flight() {
        let runtime = create_runtime();
        let ui = create_rw_signal(UiState::default());
        let lookup = PriceLookup::new(
            ObservingSource {
                ui,
                body: r#"{"USD": 1.0}"#,
                seen: RefCell::new(None),
            },
            SignalView(ui),
        );

        let idle = ui.get_untracked();
        assert!(!idle.submit_disabled);
        assert!(Region::Loading.is_hidden(&idle));
        assert!(Region::Results.is_hidden(&idle) && Region::Error.is_hidden(&idle));

        block_on(lookup.lookup("btc"));

        let during = lookup.source().seen.borrow().clone().unwrap();
        assert!(during.submit_disabled);
        assert!(!Region::Loading.is_hidden(&during));

        let after = ui.get_untracked();
        assert!(!after.submit_disabled);
        assert!(Region::Loading.is_hidden(&after));
        assert!(!Region::Results.is_hidden(&after));
        assert!(Region::Error.is_hidden(&after));

        runtime.dispose();
    }

    #[test]
    fn failed_lookup_toggles_error_region() {
        let runtime = create_runtime();
        let ui = create_rw_signal(UiState::default());
        let lookup = PriceLookup::new(
            ObservingSource {
                ui,
                body: "{}",
                seen: RefCell::new(None),
            },
            SignalView(ui),
        );

        block_on(lookup.lookup("btc"));

        let state = ui.get_untracked();
        assert!(!Region::Error.is_hidden(&state));
        assert!(Region::Results.is_hidden(&state));
        assert!(!state.submit_disabled);

        runtime.dispose();
    }

    #[test]
    fn signal_view_tracks_lookup_state() {
        let runtime = create_runtime();
        let ui = create_rw_signal(UiState::default());
        let view = SignalView(ui);
        let code = TickerCode::parse("btc").unwrap();

        view.show_loading();
        assert!(ui.get_untracked().submit_disabled);

        view.hide_loading();
        view.show_results(
            &code,
            &[PriceEntry {
                currency: "USD".into(),
                price: 65000.123456,
            }],
        );
        let state = ui.get_untracked();
        assert!(!state.loading);
        assert!(state.results_visible);
        assert_eq!(state.heading, "BTC Prices");
        assert_eq!(state.cards[0].amount, "65,000.12");

        view.reset();
        assert!(!ui.get_untracked().results_visible);

        runtime.dispose();
    }
}

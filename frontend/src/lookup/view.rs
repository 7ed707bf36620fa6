use std::cell::RefCell;

use super::{format::format_price, prices::PriceEntry, ticker::TickerCode};

/// Display surface of the widget. Implementations own the visible state; the
/// lookup flow only talks to them through these calls.
pub trait LookupView {
    /// Hide both the results and the error region.
    fn reset(&self);
    /// Show the loading indicator and disable the submit control.
    fn show_loading(&self);
    /// Hide the loading indicator and re-enable the submit control.
    fn hide_loading(&self);
    fn show_results(&self, code: &TickerCode, entries: &[PriceEntry]);
    /// Show `message` in the error region and hide the results.
    fn show_error(&self, message: &str);
}

/// One rendered price card: currency code and formatted amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCardView {
    pub currency: String,
    pub amount: String,
}

impl From<&PriceEntry> for PriceCardView {
    fn from(entry: &PriceEntry) -> Self {
        Self {
            currency: entry.currency.clone(),
            amount: format_price(Some(entry.price)),
        }
    }
}

/// Snapshot of everything the widget shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub loading: bool,
    pub submit_disabled: bool,
    pub results_visible: bool,
    pub error_visible: bool,
    pub heading: String,
    pub cards: Vec<PriceCardView>,
    pub error_message: String,
}

impl UiState {
    pub fn reset(&mut self) {
        self.results_visible = false;
        self.error_visible = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.submit_disabled = loading;
    }

    pub fn show_results(&mut self, code: &TickerCode, entries: &[PriceEntry]) {
        self.heading = format!("{code} Prices");
        self.cards = entries.iter().map(PriceCardView::from).collect();
        self.error_visible = false;
        self.results_visible = true;
    }

    pub fn show_error(&mut self, message: &str) {
        self.error_message = message.to_string();
        self.results_visible = false;
        self.error_visible = true;
    }
}

impl LookupView for RefCell<UiState> {
    fn reset(&self) {
        self.borrow_mut().reset();
    }

    fn show_loading(&self) {
        self.borrow_mut().set_loading(true);
    }

    fn hide_loading(&self) {
        self.borrow_mut().set_loading(false);
    }

    fn show_results(&self, code: &TickerCode, entries: &[PriceEntry]) {
        self.borrow_mut().show_results(code, entries);
    }

    fn show_error(&self, message: &str) {
        self.borrow_mut().show_error(message);
    }
}

use std::cell::Cell;

use super::{
    error::LookupError,
    fetcher::PriceSource,
    prices::{PriceEntry, available_prices},
    ticker::TickerCode,
    view::LookupView,
};

/// Where a lookup currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Validating,
    Loading,
    Displaying,
    Failed,
}

/// How a single lookup ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Displayed {
        code: TickerCode,
        entries: Vec<PriceEntry>,
    },
    Failed(LookupError),
}

impl LookupOutcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, LookupOutcome::Displayed { .. })
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupOutcome::Failed(err) => Some(err),
            LookupOutcome::Displayed { .. } => None,
        }
    }
}

/// Hides the loading indicator when dropped, whichever way the fetch ends.
struct LoadingGuard<'a, V: LookupView> {
    view: &'a V,
}

impl<'a, V: LookupView> LoadingGuard<'a, V> {
    fn engage(view: &'a V) -> Self {
        view.show_loading();
        Self { view }
    }
}

impl<V: LookupView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.hide_loading();
    }
}

/// Drives one validate, fetch, render cycle per user action.
pub struct PriceLookup<S, V> {
    source: S,
    view: V,
    phase: Cell<LookupPhase>,
}

impl<S: PriceSource, V: LookupView> PriceLookup<S, V> {
    pub fn new(source: S, view: V) -> Self {
        Self {
            source,
            view,
            phase: Cell::new(LookupPhase::Idle),
        }
    }

    pub fn phase(&self) -> LookupPhase {
        self.phase.get()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Look up prices for raw user input and update the view with the result.
    /// Every failure is shown in the error region; nothing escapes.
    pub async fn lookup(&self, raw: &str) -> LookupOutcome {
        self.enter(LookupPhase::Idle);
        self.view.reset();

        self.enter(LookupPhase::Validating);
        let code = match TickerCode::parse(raw) {
            Ok(code) => code,
            Err(err) => {
                log::warn!("rejected ticker input {raw:?}: {err}");
                return self.fail(err);
            }
        };

        self.enter(LookupPhase::Loading);
        let fetched = {
            let _loading = LoadingGuard::engage(&self.view);
            self.source.fetch_prices(&code).await
        };

        let prices = match fetched {
            Ok(prices) => prices,
            Err(err) => {
                log::error!("error fetching prices for {code}: {err}");
                return self.fail(err);
            }
        };

        let entries = available_prices(&prices);
        if entries.is_empty() {
            log::warn!("{code}: response carried no usable prices");
            return self.fail(LookupError::NoPriceData);
        }

        self.view.show_results(&code, &entries);
        self.enter(LookupPhase::Displaying);
        log::info!("{code}: rendered {} price cards", entries.len());
        LookupOutcome::Displayed { code, entries }
    }

    fn fail(&self, err: LookupError) -> LookupOutcome {
        self.view.show_error(&err.user_message());
        self.enter(LookupPhase::Failed);
        LookupOutcome::Failed(err)
    }

    fn enter(&self, phase: LookupPhase) {
        log::debug!("lookup phase {:?} -> {phase:?}", self.phase.get());
        self.phase.set(phase);
    }
}

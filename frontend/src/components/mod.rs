pub mod lookup_widget;
pub mod price_card;

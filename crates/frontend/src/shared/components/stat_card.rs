use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_percent};
use leptos::prelude::*;

/// Card colouring, picked from the sign of the figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Positive,
    Negative,
    Neutral,
}

impl StatTone {
    pub fn of(value: Option<f64>) -> Self {
        match value {
            Some(v) if v > 0.0 => StatTone::Positive,
            Some(v) if v < 0.0 => StatTone::Negative,
            _ => StatTone::Neutral,
        }
    }

    fn class(self) -> &'static str {
        match self {
            StatTone::Positive => "stat-card stat-card--success",
            StatTone::Negative => "stat-card stat-card--error",
            StatTone::Neutral => "stat-card",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Money value (None = no data)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// Share of total revenue, in percent
    #[prop(into, optional)]
    margin: Signal<Option<f64>>,
) -> impl IntoView {
    let status_class = move || StatTone::of(value.get()).class();

    let formatted = move || match value.get() {
        Some(v) => format_money(v),
        None => "\u{2014}".to_string(),
    };

    let margin_view = move || {
        margin.get().map(|pct| {
            view! {
                <div class="stat-card__subtitle">
                    {format!("{} of revenue", format_percent(Some(pct)))}
                </div>
            }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {margin_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_follows_sign() {
        assert_eq!(StatTone::of(Some(10.0)), StatTone::Positive);
        assert_eq!(StatTone::of(Some(-0.5)), StatTone::Negative);
        assert_eq!(StatTone::of(Some(0.0)), StatTone::Neutral);
        assert_eq!(StatTone::of(None), StatTone::Neutral);
    }
}

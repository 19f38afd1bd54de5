use crate::shared::components::table::number_format::{format_money, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// "$1,234.50"
    Usd,
    /// "Bs 1,234.50"
    Bs,
    Integer,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Usd => format!("${}", format_money(val)),
        ValueFormat::Bs => format!("Bs {}", format_money(val)),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// None while loading
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "-".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1234.5, ValueFormat::Usd), "$1,234.50");
        assert_eq!(format_value(1234.5, ValueFormat::Bs), "Bs 1,234.50");
        assert_eq!(format_value(1234567.0, ValueFormat::Integer), "1,234,567");
    }
}

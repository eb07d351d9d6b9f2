use dioxus::prelude::*;

const WIDGETS_CSS: Asset = asset!("/assets/styling/widgets.css");

/// Colour family for badges and stat cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }

    /// Tone for the request/contact status values the API uses.
    pub fn for_status(status: &str) -> Self {
        match status.to_ascii_lowercase().as_str() {
            "pending" | "new" | "draft" => Tone::Warning,
            "confirmed" | "responded" | "reserved" => Tone::Info,
            "completed" | "available" | "published" | "active" => Tone::Success,
            "cancelled" | "sold" | "expired" => Tone::Danger,
            _ => Tone::Neutral,
        }
    }
}

#[component]
pub fn Badge(label: String, #[props(default)] tone: Tone) -> Element {
    rsx! {
        document::Stylesheet { href: WIDGETS_CSS }
        span { class: "badge {tone.as_str()}", "{label}" }
    }
}

/// Badge coloured after the status text it shows.
#[component]
pub fn StatusBadge(status: String) -> Element {
    if status.is_empty() {
        return rsx! {};
    }
    let tone = Tone::for_status(&status);
    rsx! {
        Badge { label: status, tone }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl ToString, tone: Tone) -> Self {
        Self {
            label,
            value: value.to_string(),
            tone,
        }
    }
}

#[component]
pub fn StatGrid(cards: Vec<StatCard>) -> Element {
    if cards.is_empty() {
        return rsx! {};
    }
    rsx! {
        document::Stylesheet { href: WIDGETS_CSS }
        div {
            class: "stat-grid",
            for card in cards {
                div {
                    key: "{card.label}",
                    class: "stat-card {card.tone.as_str()}",
                    span { class: "stat-label", "{card.label}" }
                    span { class: "stat-value", "{card.value}" }
                }
            }
        }
    }
}

/// Label/value row used by record detail views.
#[component]
pub fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "detail-row",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", if value.is_empty() { "-" } else { "{value}" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_tones() {
        assert_eq!(Tone::for_status("pending"), Tone::Warning);
        assert_eq!(Tone::for_status("Completed"), Tone::Success);
        assert_eq!(Tone::for_status("cancelled"), Tone::Danger);
        assert_eq!(Tone::for_status("whatever"), Tone::Neutral);
    }
}

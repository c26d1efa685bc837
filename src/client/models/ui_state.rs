// Proiezioni dello stato pronte per essere disegnate (GUI e CLI)
use serde_json::Value;

/// Shown in place of a missing period field.
pub const MISSING_FIELD: &str = "-";

pub const WARNING_ICON: &str = "⚠️";

/// Avviso nella barra in cima al form. `seq` distingue un avviso dal
/// successivo, così la chiusura temporizzata tocca solo quello che l'ha avviata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodView {
    pub start: String,
    pub end: String,
    pub label: String,
}

/// Detail sections to draw under the answer. Each section is `None` when it
/// must not be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    pub period: Option<PeriodView>,
    pub trace: Option<&'a Value>,
}

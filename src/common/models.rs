use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Testo mostrato quando il servizio risponde 200 senza `respuesta`.
pub const PLACEHOLDER_ANSWER: &str = "Respuesta no disponible";

/// Body JSON inviato all'endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest<'a> {
    pub pregunta: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trazas: Option<u8>,
}

impl<'a> QueryRequest<'a> {
    pub fn new(pregunta: &'a str, include_trace: bool) -> Self {
        Self {
            pregunta,
            trazas: include_trace.then_some(1),
        }
    }
}

/// Date range the answer refers to. Every field is optional on the wire and
/// any scalar is accepted: numbers and booleans are kept as their text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Periodo {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Periodo {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.label.is_none()
    }
}

/// null -> None, string as is, anything else as compact JSON.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// A `periodo` that is not an object is ignored instead of failing the answer.
fn lenient_periodo<'de, D>(deserializer: D) -> Result<Option<Periodo>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Periodo::deserialize(value).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

/// The `body` object of a successful response.
///
/// Fields the client does not interpret are kept in `extra`, so the payload
/// serializes back to the same object the service sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respuesta: Option<String>,
    #[serde(default, deserialize_with = "lenient_periodo", skip_serializing_if = "Option::is_none")]
    pub periodo: Option<Periodo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traza: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnswerPayload {
    /// Extracts the payload from the service envelope
    /// `{"statusCode": .., "headers": .., "body": {..}}`.
    ///
    /// A non-object envelope, or a missing/null `body`, yields an empty payload.
    pub fn from_envelope(envelope: Value) -> Result<Self, serde_json::Error> {
        let body = match envelope {
            Value::Object(mut map) => map.remove("body").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        match body {
            Value::Null => Ok(Self::default()),
            other => serde_json::from_value(other),
        }
    }

    pub fn display_text(&self) -> String {
        self.respuesta
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_ANSWER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_omits_trazas_without_detail() {
        let body = serde_json::to_value(QueryRequest::new("ventas 2023", false)).unwrap();
        assert_eq!(body, json!({ "pregunta": "ventas 2023" }));
    }

    #[test]
    fn request_sets_trazas_to_one_with_detail() {
        let body = serde_json::to_value(QueryRequest::new("ventas 2023", true)).unwrap();
        assert_eq!(body, json!({ "pregunta": "ventas 2023", "trazas": 1 }));
    }

    #[test]
    fn envelope_body_becomes_payload() {
        let body = json!({
            "respuesta": "Chile",
            "periodo": { "start": "2023-01-01", "end": "2023-12-31", "label": "2023" },
            "traza": { "pasos": [1, 2] },
            "fuente": "ventas"
        });
        let envelope = json!({ "statusCode": 200, "headers": {}, "body": body.clone() });

        let payload = AnswerPayload::from_envelope(envelope).unwrap();
        assert_eq!(payload.display_text(), "Chile");
        assert_eq!(payload.periodo.as_ref().and_then(|p| p.label.as_deref()), Some("2023"));
        assert_eq!(serde_json::to_value(&payload).unwrap(), body);
    }

    #[test]
    fn missing_body_yields_empty_payload() {
        let payload = AnswerPayload::from_envelope(json!({ "statusCode": 200 })).unwrap();
        assert_eq!(payload, AnswerPayload::default());
        assert_eq!(payload.display_text(), PLACEHOLDER_ANSWER);
    }

    #[test]
    fn non_object_envelope_yields_empty_payload() {
        let payload = AnswerPayload::from_envelope(json!(["no", "es", "objeto"])).unwrap();
        assert_eq!(payload, AnswerPayload::default());

        let payload = AnswerPayload::from_envelope(json!({ "body": null })).unwrap();
        assert_eq!(payload, AnswerPayload::default());
    }

    #[test]
    fn non_object_body_is_a_decoding_error() {
        assert!(AnswerPayload::from_envelope(json!({ "body": "texto" })).is_err());
    }

    #[test]
    fn off_type_periodo_keeps_the_answer() {
        let envelope = json!({ "body": {
            "respuesta": "Ana Rojas",
            "periodo": { "start": "2023-01-01", "end": 20231231, "label": 2023 }
        }});
        let payload = AnswerPayload::from_envelope(envelope).unwrap();
        assert_eq!(payload.display_text(), "Ana Rojas");
        let periodo = payload.periodo.unwrap();
        assert_eq!(periodo.end.as_deref(), Some("20231231"));
        assert_eq!(periodo.label.as_deref(), Some("2023"));

        let payload = AnswerPayload::from_envelope(json!({ "body": {
            "respuesta": "Ana Rojas",
            "periodo": "2023"
        }}))
        .unwrap();
        assert_eq!(payload.display_text(), "Ana Rojas");
        assert!(payload.periodo.is_none());
    }

    #[test]
    fn periodo_with_only_nulls_is_empty() {
        let periodo: Periodo = serde_json::from_value(json!({ "start": null })).unwrap();
        assert!(periodo.is_empty());
        let periodo: Periodo = serde_json::from_value(json!({ "start": "2024-01" })).unwrap();
        assert!(!periodo.is_empty());
    }
}

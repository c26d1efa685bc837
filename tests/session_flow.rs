use consulta_ventas::client::cli_client::render_session;
use consulta_ventas::client::models::app_state::{ConsultaState, Phase, SubmitDecision};
use consulta_ventas::client::services::query_client::QueryClient;
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn press_submit(state: &mut ConsultaState, client: &QueryClient) {
    if let SubmitDecision::Dispatch { question, include_trace } = state.begin_submit() {
        let outcome = client.query(&question, include_trace).await;
        state.finish_query(outcome);
    }
}

fn client_for(server: &MockServer) -> QueryClient {
    let endpoint = Url::parse(&format!("{}/vinos", server.uri())).unwrap();
    QueryClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn empty_question_never_reaches_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut state = ConsultaState { question: "  ".to_string(), ..Default::default() };
    press_submit(&mut state, &client).await;

    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.answer_text.is_empty());
    assert!(state.warning.is_some());
}

#[tokio::test]
async fn submit_then_reset_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "body": {
                "respuesta": "Ana Rojas",
                "periodo": { "start": "2024-01-01" },
                "traza": { "pasos": 3 }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut state = ConsultaState {
        question: "¿Qué vendedor cerró más negocios?".to_string(),
        show_detail: true,
        ..Default::default()
    };
    press_submit(&mut state, &client).await;

    assert_eq!(state.answer_text, "Ana Rojas");
    let rendered = render_session(&state);
    assert!(rendered.contains("> Ana Rojas"));
    assert!(rendered.contains("• Fin: -"));
    assert!(rendered.contains("\"pasos\": 3"));

    assert!(state.request_reset());
    assert!(state.apply_pending_reset());
    assert!(state.question.is_empty());
    assert!(state.answer_text.is_empty());
    assert!(state.payload.is_none());
    assert!(state.show_detail);
    assert_eq!(render_session(&state), "");
}

#[tokio::test]
async fn error_after_success_clears_stale_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "body": { "respuesta": "primera", "traza": ["paso"] }
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut state = ConsultaState {
        question: "ventas".to_string(),
        show_detail: true,
        ..Default::default()
    };
    press_submit(&mut state, &client).await;
    assert!(state.detail_view().is_some());

    press_submit(&mut state, &client).await;
    assert_eq!(state.answer_text, "Error 503: Service Unavailable");
    assert!(state.payload.is_none());
    assert!(state.detail_view().is_none());
}

// Client da terminale: stesso stato di sessione e stesso QueryClient della GUI
use crate::client::models::app_state::{ConsultaState, SubmitDecision};
use crate::client::models::ui_state::WARNING_ICON;
use crate::client::services::query_client::QueryClient;
use crate::client::gui::views::consulta::{DETAIL_LABEL, LOADING_TEXT, TITLE};
use crate::client::gui::widgets::alert::RECEIVED_BANNER;
use crate::common::json_tree::flatten;
use clap::Parser;
use std::fmt::Write as _;
use std::io::Write as _;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "consulta-cli", about = "Consultas de ventas de exportación de vinos")]
pub struct CliArgs {
    /// Requests the trace and shows period and trace sections
    #[arg(short, long)]
    pub detalle: bool,
    /// Prints the full payload as JSON after the answer
    #[arg(long)]
    pub json: bool,
    /// Overrides PATH_API_AWS
    #[arg(long)]
    pub endpoint: Option<String>,
    /// Question; without it an interactive session starts
    pub pregunta: Vec<String>,
}

const HELP: &str = "Comandos: /detalle (activa o desactiva el detalle), /limpiar, /ayuda, /salir";

/// Renders what the form would show below the buttons.
pub fn render_session(state: &ConsultaState) -> String {
    let mut out = String::new();
    if let Some(warning) = &state.warning {
        let _ = writeln!(out, "{} {}", WARNING_ICON, warning.message);
    }
    if state.answer_text.is_empty() {
        return out;
    }
    let _ = writeln!(out, "{}", RECEIVED_BANNER);
    let _ = writeln!(out, "> {}", state.answer_text);

    if let Some(detail) = state.detail_view() {
        if let Some(period) = detail.period {
            let _ = writeln!(out, "\nPeriodo");
            let _ = writeln!(out, "• Inicio: {}", period.start);
            let _ = writeln!(out, "• Fin: {}", period.end);
            let _ = writeln!(out, "• Etiqueta: {}", period.label);
        }
        if let Some(trace) = detail.trace {
            let _ = writeln!(out, "\nTraza");
            for line in flatten(trace) {
                let _ = writeln!(out, "{}{}", "  ".repeat(line.depth), line.text);
            }
        }
    }
    out
}

/// One submission; returns `false` when nothing was sent.
async fn submit(state: &mut ConsultaState, client: &QueryClient) -> bool {
    match state.begin_submit() {
        SubmitDecision::Dispatch { question, include_trace } => {
            println!("⏳ {}", LOADING_TEXT);
            let outcome = client.query(&question, include_trace).await;
            state.finish_query(outcome);
            true
        }
        SubmitDecision::EmptyQuestion | SubmitDecision::AlreadyInFlight => false,
    }
}

fn print_payload(state: &ConsultaState) -> anyhow::Result<()> {
    if let Some(payload) = &state.payload {
        println!("{}", serde_json::to_string_pretty(payload)?);
    }
    Ok(())
}

pub async fn run(args: CliArgs, client: QueryClient) -> anyhow::Result<()> {
    let mut state = ConsultaState {
        show_detail: args.detalle,
        ..Default::default()
    };

    if !args.pregunta.is_empty() {
        state.question = args.pregunta.join(" ");
        submit(&mut state, &client).await;
        print!("{}", render_session(&state));
        if args.json {
            print_payload(&state)?;
        }
        return Ok(());
    }

    println!("{} 🍷", TITLE);
    println!("{}", HELP);
    let mut input = BufReader::new(stdin());
    let mut line = String::new();
    loop {
        // reset richiesto al giro precedente: si applica prima di leggere la nuova domanda
        state.apply_pending_reset();

        line.clear();
        print!("> ");
        std::io::stdout().flush()?;
        if input.read_line(&mut line).await? == 0 {
            break;
        }
        match line.trim() {
            "/salir" => break,
            "/ayuda" => println!("{}", HELP),
            "/detalle" => {
                state.show_detail = !state.show_detail;
                println!("{}: {}", DETAIL_LABEL, if state.show_detail { "sí" } else { "no" });
            }
            "/limpiar" => {
                state.request_reset();
            }
            question => {
                state.question = question.to_string();
                submit(&mut state, &client).await;
                print!("{}", render_session(&state));
                if args.json {
                    print_payload(&state)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::app_state::EMPTY_QUESTION_WARNING;
    use crate::common::models::{AnswerPayload, Periodo};
    use serde_json::json;

    #[test]
    fn args_collect_multi_word_question() {
        let args = CliArgs::parse_from(["consulta-cli", "--detalle", "ventas", "en", "Chile"]);
        assert!(args.detalle);
        assert_eq!(args.pregunta.join(" "), "ventas en Chile");
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn warning_is_rendered_without_answer() {
        let mut state = ConsultaState::default();
        let _ = state.begin_submit();
        let out = render_session(&state);
        assert!(out.contains(EMPTY_QUESTION_WARNING));
        assert!(!out.contains(RECEIVED_BANNER));
    }

    #[test]
    fn detail_sections_follow_the_toggle() {
        let payload = AnswerPayload {
            respuesta: Some("María".to_string()),
            periodo: Some(Periodo { start: Some("2023-01-01".to_string()), ..Default::default() }),
            traza: Some(json!({ "pasos": ["sql"] })),
            ..Default::default()
        };
        let mut state = ConsultaState {
            answer_text: "María".to_string(),
            payload: Some(payload),
            ..Default::default()
        };

        let out = render_session(&state);
        assert_eq!(out, "Respuesta recibida:\n> María\n");

        state.show_detail = true;
        let out = render_session(&state);
        assert!(out.contains("• Inicio: 2023-01-01\n• Fin: -\n• Etiqueta: -\n"));
        assert!(out.contains("Traza\n\"pasos\": […] (1)\n  0: \"sql\"\n"));
    }
}

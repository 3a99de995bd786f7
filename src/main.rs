use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tracing::info;

use chase_predictor::config::Config;
use chase_predictor::{ChaseError, ChasePredictor, City, MatchState, Prediction, Stage, Team};

/// Machine-readable output of one request.
#[derive(Serialize)]
struct Report<'a> {
    predicted_at: DateTime<Utc>,
    model: &'a str,
    state: &'a MatchState,
    #[serde(flatten)]
    prediction: &'a Prediction,
    win_percent: u32,
    loss_percent: u32,
}

#[derive(Serialize)]
struct FailureReport<'a> {
    stage: Stage,
    error: String,
    reason: String,
    message: &'a str,
}

impl<'a> FailureReport<'a> {
    fn new(e: &ChaseError, message: &'a str) -> Self {
        Self {
            stage: e.terminal_stage(),
            error: e.to_string(),
            reason: e.reason(),
            message,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    if config.list {
        println!("Teams:");
        for name in Team::sorted_names() {
            println!("  {}", name);
        }
        println!("Host cities:");
        for name in City::sorted_names() {
            println!("  {}", name);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let predictor = match ChasePredictor::from_model_path(&config.model) {
        Ok(p) => p,
        Err(e) => {
            report_failure(&e, &e.user_message(""), config.json)?;
            if !config.json {
                eprintln!("{}", e);
            }
            return Ok(ExitCode::FAILURE);
        }
    };
    info!("Using model {}", predictor.classifier_name());

    let batting_name = config.batting_team.clone().unwrap_or_default();
    let outcome = config
        .match_state()
        .and_then(|state| predictor.evaluate(state).map(|p| (state, p)));

    match outcome {
        Ok((state, prediction)) => {
            if config.json {
                let report = Report {
                    predicted_at: Utc::now(),
                    model: predictor.classifier_name(),
                    state: &state,
                    prediction: &prediction,
                    win_percent: prediction.result.win_percent(),
                    loss_percent: prediction.result.loss_percent(),
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_prediction(&state, &prediction);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report_failure(&e, &e.user_message(&batting_name), config.json)?;
            Ok(exit_code(&e))
        }
    }
}

fn report_failure(e: &ChaseError, message: &str, json: bool) -> Result<()> {
    if json {
        let report = FailureReport::new(e, message);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!("{}", message);
    }
    Ok(())
}

fn exit_code(e: &ChaseError) -> ExitCode {
    match e.terminal_stage() {
        Stage::PredictionFailed => ExitCode::from(3),
        _ => ExitCode::from(2),
    }
}

fn print_prediction(state: &MatchState, prediction: &Prediction) {
    let f = &prediction.features;
    let r = &prediction.result;
    let width = r.batting_team.name().len().max(r.bowling_team.name().len());

    println!(
        "{} need {} off {} balls at {} ({} wickets in hand)",
        r.batting_team, f.runs_needed, f.balls_remaining, state.venue_city, f.wickets_remaining
    );
    println!(
        "CRR {:.2}  RRR {:.2}  after {} overs",
        f.current_run_rate, f.required_run_rate, state.overs
    );
    println!("📊 Match Probability");
    println!(
        "  {:<width$} {:>3}% {}",
        r.batting_team.name(),
        r.win_percent(),
        bar(r.win_probability),
        width = width
    );
    println!(
        "  {:<width$} {:>3}% {}",
        r.bowling_team.name(),
        r.loss_percent(),
        bar(r.loss_probability),
        width = width
    );
}

fn bar(p: f64) -> String {
    const WIDTH: usize = 30;
    let filled = ((p.clamp(0.0, 1.0) * WIDTH as f64).round() as usize).min(WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chase_predictor::error::{InputFault, ModelFault};

    #[test]
    fn model_unavailable_has_a_json_report() {
        let e = ChaseError::ModelUnavailable {
            path: "models/missing.json".into(),
            fault: ModelFault::Missing,
            reason: "failed to read models/missing.json".into(),
        };
        let message = e.user_message("");
        let json = serde_json::to_value(FailureReport::new(&e, &message)).unwrap();

        assert_eq!(json["stage"], serde_json::to_value(Stage::Rejected).unwrap());
        assert_eq!(json["reason"], "failed to read models/missing.json");
        assert_eq!(json["error"], e.to_string());
        assert!(json["message"].as_str().unwrap().contains("not found"));
    }

    #[test]
    fn request_failure_report_carries_bare_reason() {
        let e = ChaseError::from(InputFault::IllegalBallCount);
        let json = serde_json::to_value(FailureReport::new(&e, "bad")).unwrap();
        assert_eq!(json["reason"], "illegal ball count");
        assert_eq!(json["error"], "invalid input: illegal ball count");
        assert_eq!(json["message"], "bad");
    }
}

use clap::Parser;

use crate::error::{ChaseError, InputFault};
use crate::match_state::{MatchState, Overs};

/// In-play win probability for an IPL run chase
#[derive(Parser, Debug, Clone)]
#[command(name = "chase-predictor", version, about)]
pub struct Config {
    /// Path to the JSON win model artifact
    #[arg(long, env = "CHASE_MODEL_PATH", default_value = "models/win_predictor.json")]
    pub model: String,

    /// Print the known teams and host cities, then exit
    #[arg(long, default_value = "false")]
    pub list: bool,

    /// Emit the prediction as JSON instead of text
    #[arg(long, env = "CHASE_JSON", default_value = "false")]
    pub json: bool,

    /// Team batting second
    #[arg(long)]
    pub batting_team: Option<String>,

    /// Team defending the target
    #[arg(long)]
    pub bowling_team: Option<String>,

    /// Host city
    #[arg(long)]
    pub city: Option<String>,

    /// Target score
    #[arg(long)]
    pub target: Option<u32>,

    /// Current score of the chasing side
    #[arg(long, default_value = "0")]
    pub score: u32,

    /// Completed overs (0–19)
    #[arg(long)]
    pub overs: Option<u32>,

    /// Balls bowled in the current over (0–5)
    #[arg(long)]
    pub balls: Option<u32>,

    /// Overs as a single cricket-notation value, e.g. 14.3 (14 overs, 3 balls)
    #[arg(long)]
    pub overs_decimal: Option<String>,

    /// Wickets lost
    #[arg(long, default_value = "0")]
    pub wickets: u32,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.list {
            return Ok(());
        }
        if self.overs_decimal.is_some() && (self.overs.is_some() || self.balls.is_some()) {
            anyhow::bail!("use either --overs-decimal or --overs/--balls, not both");
        }
        if self.batting_team.is_none() || self.bowling_team.is_none() {
            anyhow::bail!("--batting-team and --bowling-team are required");
        }
        if self.city.is_none() {
            anyhow::bail!("--city is required");
        }
        if self.target.is_none() {
            anyhow::bail!("--target is required");
        }
        if self.model.trim().is_empty() {
            anyhow::bail!("--model must not be empty");
        }
        Ok(())
    }

    /// Build the match state from the command line, whichever overs
    /// encoding was used.
    pub fn match_state(&self) -> Result<MatchState, ChaseError> {
        let required = |v: &Option<String>, flag: &'static str| {
            v.as_deref()
                .ok_or_else(|| ChaseError::from(InputFault::Missing(flag)))
                .map(str::to_owned)
        };

        let overs = match &self.overs_decimal {
            Some(raw) => Overs::from_decimal_str(raw)?,
            None => Overs::new(self.overs.unwrap_or(0), self.balls.unwrap_or(0)),
        };

        Ok(MatchState {
            batting_team: required(&self.batting_team, "--batting-team")?.parse()?,
            bowling_team: required(&self.bowling_team, "--bowling-team")?.parse()?,
            venue_city: required(&self.city, "--city")?.parse()?,
            target_score: self
                .target
                .ok_or_else(|| ChaseError::from(InputFault::Missing("--target")))?,
            current_score: self.score,
            overs,
            wickets_lost: self.wickets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_state::{City, Team};

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["chase-predictor"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    const BASE: [&str; 8] = [
        "--batting-team",
        "Mumbai Indians",
        "--bowling-team",
        "chennai super kings",
        "--city",
        "Mumbai",
        "--target",
        "180",
    ];

    #[test]
    fn split_overs_encoding() {
        let mut args = BASE.to_vec();
        args.extend(["--score", "120", "--overs", "15", "--balls", "0", "--wickets", "3"]);
        let config = parse(&args);
        config.validate().unwrap();

        let state = config.match_state().unwrap();
        assert_eq!(state.batting_team, Team::MumbaiIndians);
        assert_eq!(state.bowling_team, Team::ChennaiSuperKings);
        assert_eq!(state.venue_city, City::Mumbai);
        assert_eq!(state.target_score, 180);
        assert_eq!(state.current_score, 120);
        assert_eq!(state.overs, Overs::new(15, 0));
        assert_eq!(state.wickets_lost, 3);
    }

    #[test]
    fn decimal_overs_encoding() {
        let mut args = BASE.to_vec();
        args.extend(["--overs-decimal", "14.3"]);
        let state = parse(&args).match_state().unwrap();
        assert_eq!(state.overs, Overs::new(14, 3));
        assert_eq!(state.balls_bowled(), 87);
    }

    #[test]
    fn both_encodings_is_a_config_error() {
        let mut args = BASE.to_vec();
        args.extend(["--overs-decimal", "14.3", "--overs", "14"]);
        assert!(parse(&args).validate().is_err());
    }

    #[test]
    fn missing_target_is_a_config_error() {
        let config = parse(&BASE[..6]);
        assert!(config.validate().is_err());
        assert_eq!(
            config.match_state(),
            Err(ChaseError::from(InputFault::Missing("--target")))
        );
    }

    #[test]
    fn list_needs_nothing_else() {
        let config = parse(&["--list"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_team_surfaces_as_invalid_input() {
        let mut args = BASE.to_vec();
        args[1] = "Gujarat Titans";
        let err = parse(&args).match_state().unwrap_err();
        assert_eq!(
            err,
            ChaseError::from(InputFault::UnknownTeam("Gujarat Titans".into()))
        );
    }
}

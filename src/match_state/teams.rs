//! Closed vocabularies for franchises and host cities.
//!
//! These are the only category values the classifier was trained on. Anything
//! outside them is rejected when the match state is built, never passed
//! through for the model to guess at.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ChaseError, InputFault};

/// An IPL franchise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[serde(rename = "Sunrisers Hyderabad")]
    SunrisersHyderabad,
    #[serde(rename = "Mumbai Indians")]
    MumbaiIndians,
    #[serde(rename = "Royal Challengers Bangalore")]
    RoyalChallengersBangalore,
    #[serde(rename = "Kolkata Knight Riders")]
    KolkataKnightRiders,
    #[serde(rename = "Kings XI Punjab")]
    KingsXiPunjab,
    #[serde(rename = "Chennai Super Kings")]
    ChennaiSuperKings,
    #[serde(rename = "Rajasthan Royals")]
    RajasthanRoyals,
    #[serde(rename = "Delhi Capitals")]
    DelhiCapitals,
}

impl Team {
    pub const ALL: [Team; 8] = [
        Team::SunrisersHyderabad,
        Team::MumbaiIndians,
        Team::RoyalChallengersBangalore,
        Team::KolkataKnightRiders,
        Team::KingsXiPunjab,
        Team::ChennaiSuperKings,
        Team::RajasthanRoyals,
        Team::DelhiCapitals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Team::SunrisersHyderabad => "Sunrisers Hyderabad",
            Team::MumbaiIndians => "Mumbai Indians",
            Team::RoyalChallengersBangalore => "Royal Challengers Bangalore",
            Team::KolkataKnightRiders => "Kolkata Knight Riders",
            Team::KingsXiPunjab => "Kings XI Punjab",
            Team::ChennaiSuperKings => "Chennai Super Kings",
            Team::RajasthanRoyals => "Rajasthan Royals",
            Team::DelhiCapitals => "Delhi Capitals",
        }
    }

    /// Names in alphabetical order, as offered to the user for selection.
    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Team::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = ChaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Team::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputFault::UnknownTeam(wanted.to_string()).into())
    }
}

/// A host city. Bangalore and Bengaluru are distinct entries because the
/// training data carries both spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Hyderabad,
    Bangalore,
    Mumbai,
    Indore,
    Kolkata,
    Delhi,
    Chandigarh,
    Jaipur,
    Chennai,
    #[serde(rename = "Cape Town")]
    CapeTown,
    #[serde(rename = "Port Elizabeth")]
    PortElizabeth,
    Durban,
    Centurion,
    #[serde(rename = "East London")]
    EastLondon,
    Johannesburg,
    Kimberley,
    Bloemfontein,
    Ahmedabad,
    Cuttack,
    Nagpur,
    Dharamsala,
    Visakhapatnam,
    Pune,
    Raipur,
    Ranchi,
    #[serde(rename = "Abu Dhabi")]
    AbuDhabi,
    Sharjah,
    Mohali,
    Bengaluru,
}

impl City {
    pub const ALL: [City; 29] = [
        City::Hyderabad,
        City::Bangalore,
        City::Mumbai,
        City::Indore,
        City::Kolkata,
        City::Delhi,
        City::Chandigarh,
        City::Jaipur,
        City::Chennai,
        City::CapeTown,
        City::PortElizabeth,
        City::Durban,
        City::Centurion,
        City::EastLondon,
        City::Johannesburg,
        City::Kimberley,
        City::Bloemfontein,
        City::Ahmedabad,
        City::Cuttack,
        City::Nagpur,
        City::Dharamsala,
        City::Visakhapatnam,
        City::Pune,
        City::Raipur,
        City::Ranchi,
        City::AbuDhabi,
        City::Sharjah,
        City::Mohali,
        City::Bengaluru,
    ];

    pub fn name(self) -> &'static str {
        match self {
            City::Hyderabad => "Hyderabad",
            City::Bangalore => "Bangalore",
            City::Mumbai => "Mumbai",
            City::Indore => "Indore",
            City::Kolkata => "Kolkata",
            City::Delhi => "Delhi",
            City::Chandigarh => "Chandigarh",
            City::Jaipur => "Jaipur",
            City::Chennai => "Chennai",
            City::CapeTown => "Cape Town",
            City::PortElizabeth => "Port Elizabeth",
            City::Durban => "Durban",
            City::Centurion => "Centurion",
            City::EastLondon => "East London",
            City::Johannesburg => "Johannesburg",
            City::Kimberley => "Kimberley",
            City::Bloemfontein => "Bloemfontein",
            City::Ahmedabad => "Ahmedabad",
            City::Cuttack => "Cuttack",
            City::Nagpur => "Nagpur",
            City::Dharamsala => "Dharamsala",
            City::Visakhapatnam => "Visakhapatnam",
            City::Pune => "Pune",
            City::Raipur => "Raipur",
            City::Ranchi => "Ranchi",
            City::AbuDhabi => "Abu Dhabi",
            City::Sharjah => "Sharjah",
            City::Mohali => "Mohali",
            City::Bengaluru => "Bengaluru",
        }
    }

    pub fn sorted_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = City::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = ChaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputFault::UnknownCity(wanted.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_team_case_insensitive() {
        assert_eq!("mumbai indians".parse::<Team>().unwrap(), Team::MumbaiIndians);
        assert_eq!(" Delhi Capitals ".parse::<Team>().unwrap(), Team::DelhiCapitals);
    }

    #[test]
    fn unknown_team_is_invalid_input() {
        let err = "Gujarat Titans".parse::<Team>().unwrap_err();
        assert_eq!(err, ChaseError::from(InputFault::UnknownTeam("Gujarat Titans".into())));
    }

    #[test]
    fn unknown_city_is_invalid_input() {
        let err = "Lahore".parse::<City>().unwrap_err();
        assert_eq!(err, ChaseError::from(InputFault::UnknownCity("Lahore".into())));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for team in Team::ALL {
            assert_eq!(team.name().parse::<Team>().unwrap(), team);
        }
        for city in City::ALL {
            assert_eq!(city.name().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&City::PortElizabeth).unwrap();
        assert_eq!(json, "\"Port Elizabeth\"");
        let team: Team = serde_json::from_str("\"Kings XI Punjab\"").unwrap();
        assert_eq!(team, Team::KingsXiPunjab);
    }

    #[test]
    fn sorted_names_are_sorted() {
        let teams = Team::sorted_names();
        assert_eq!(teams.first(), Some(&"Chennai Super Kings"));
        assert_eq!(teams.len(), 8);
        let cities = City::sorted_names();
        assert_eq!(cities.first(), Some(&"Abu Dhabi"));
        assert_eq!(cities.len(), 29);
    }
}

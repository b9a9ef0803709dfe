//! Typed search options and the enumerated fields they carry.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// What the service should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnType {
    #[default]
    Dataset,
    Metadata,
}

impl ReturnType {
    pub const ALLOWED: [&'static str; 2] = ["dataset", "metadata"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnType::Dataset => "dataset",
            ReturnType::Metadata => "metadata",
        }
    }
}

impl FromStr for ReturnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dataset" => Ok(ReturnType::Dataset),
            "metadata" => Ok(ReturnType::Metadata),
            _ => Err(Error::validation("return_type", s, &Self::ALLOWED)),
        }
    }
}

/// Degree of processing applied to the returned waveforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessLevel {
    Processed,
    #[default]
    Raw,
    Plots,
    All,
}

impl ProcessLevel {
    pub const ALLOWED: [&'static str; 4] = ["processed", "raw", "plots", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessLevel::Processed => "processed",
            ProcessLevel::Raw => "raw",
            ProcessLevel::Plots => "plots",
            ProcessLevel::All => "all",
        }
    }

    /// Code sent as the `download` parameter.
    pub fn code(&self) -> &'static str {
        match self {
            ProcessLevel::Processed => "P",
            ProcessLevel::Raw => "R",
            ProcessLevel::Plots => "T",
            ProcessLevel::All => "P,R,T",
        }
    }
}

impl FromStr for ProcessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "processed" => Ok(ProcessLevel::Processed),
            "raw" => Ok(ProcessLevel::Raw),
            "plots" => Ok(ProcessLevel::Plots),
            "all" => Ok(ProcessLevel::All),
            _ => Err(Error::validation("process_level", s, &Self::ALLOWED)),
        }
    }
}

/// How the returned archive is organised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupBy {
    Station,
    #[default]
    Event,
}

impl GroupBy {
    pub const ALLOWED: [&'static str; 2] = ["station", "event"];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Station => "station",
            GroupBy::Event => "event",
        }
    }
}

impl FromStr for GroupBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "station" => Ok(GroupBy::Station),
            "event" => Ok(GroupBy::Event),
            _ => Err(Error::validation("group_by", s, &Self::ALLOWED)),
        }
    }
}

/// Fault mechanism: normal, reverse or strike-slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultType {
    Normal,
    Reverse,
    StrikeSlip,
}

impl FaultType {
    pub const ALLOWED: [&'static str; 3] = ["NM", "RS", "SS"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultType::Normal => "NM",
            FaultType::Reverse => "RS",
            FaultType::StrikeSlip => "SS",
        }
    }
}

impl FromStr for FaultType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NM" => Ok(FaultType::Normal),
            "RS" => Ok(FaultType::Reverse),
            "SS" => Ok(FaultType::StrikeSlip),
            _ => Err(Error::validation("fault_type", s, &Self::ALLOWED)),
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(ReturnType, ProcessLevel, GroupBy, FaultType);

/// Search criteria for a records query.
///
/// Unset fields are left out of the query entirely. `network` and
/// `station_type` are free-form codes checked against the known tables
/// when the query is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub return_type: ReturnType,
    pub process_level: ProcessLevel,
    pub group_by: GroupBy,
    pub minpga: Option<f64>,
    pub maxpga: Option<f64>,
    pub min_station_dist: Option<f64>,
    pub max_station_dist: Option<f64>,
    pub network: Option<String>,
    pub station_type: Option<String>,
    pub include_inactive: bool,
    pub station_name: Option<String>,
    pub min_station_latitude: Option<f64>,
    pub max_station_latitude: Option<f64>,
    pub min_station_longitude: Option<f64>,
    pub max_station_longitude: Option<f64>,
    pub station_latitude: Option<f64>,
    pub station_longitude: Option<f64>,
    pub station_radius: Option<f64>,
    pub station_code: Option<String>,
    pub event_name: Option<String>,
    pub minmag: Option<f64>,
    pub maxmag: Option<f64>,
    pub fault_type: Option<FaultType>,
    pub startdate: Option<String>,
    pub enddate: Option<String>,
    pub min_event_latitude: Option<f64>,
    pub max_event_latitude: Option<f64>,
    pub min_event_longitude: Option<f64>,
    pub max_event_longitude: Option<f64>,
    pub event_latitude: Option<f64>,
    pub event_longitude: Option<f64>,
    pub event_radius: Option<f64>,
    pub eventid: Option<String>,
}

impl SearchOptions {
    pub fn has_station_box(&self) -> bool {
        self.min_station_latitude.is_some()
            || self.max_station_latitude.is_some()
            || self.min_station_longitude.is_some()
            || self.max_station_longitude.is_some()
    }

    pub fn has_station_radius(&self) -> bool {
        self.station_latitude.is_some()
            || self.station_longitude.is_some()
            || self.station_radius.is_some()
    }

    pub fn has_event_box(&self) -> bool {
        self.min_event_latitude.is_some()
            || self.max_event_latitude.is_some()
            || self.min_event_longitude.is_some()
            || self.max_event_longitude.is_some()
    }

    pub fn has_event_radius(&self) -> bool {
        self.event_latitude.is_some() || self.event_longitude.is_some() || self.event_radius.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_level_codes() {
        assert_eq!(ProcessLevel::Processed.code(), "P");
        assert_eq!(ProcessLevel::Raw.code(), "R");
        assert_eq!(ProcessLevel::Plots.code(), "T");
        assert_eq!(ProcessLevel::All.code(), "P,R,T");
    }

    #[test]
    fn test_parse_round_trips_names() {
        for name in ProcessLevel::ALLOWED {
            assert_eq!(name.parse::<ProcessLevel>().unwrap().to_string(), name);
        }
        for name in FaultType::ALLOWED {
            assert_eq!(name.parse::<FaultType>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_unknown_values_rejected() {
        match "everything".parse::<ProcessLevel>() {
            Err(Error::Validation { field, allowed, .. }) => {
                assert_eq!(field, "process_level");
                assert_eq!(allowed, "processed,raw,plots,all");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!("Dataset".parse::<ReturnType>().is_err());
        assert!("network".parse::<GroupBy>().is_err());
        assert!("XX".parse::<FaultType>().is_err());
    }

    #[test]
    fn test_defaults() {
        let options = SearchOptions::default();
        assert_eq!(options.return_type, ReturnType::Dataset);
        assert_eq!(options.process_level, ProcessLevel::Raw);
        assert_eq!(options.group_by, GroupBy::Event);
        assert!(!options.include_inactive);
        assert!(!options.has_station_box() && !options.has_station_radius());
    }
}

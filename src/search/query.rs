//! Validation and translation of search options into query parameters.

use std::fmt::Display;

use super::options::SearchOptions;
use super::tables::{self, FIXED_PARAMETERS};
use crate::error::{Error, Result};

/// Query string parameters in the service's own vocabulary, in the
/// order they will be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParameters {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Add an option under its wire name, skipping unset values.
    fn option<T: Display>(&mut self, name: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(tables::wire_key(name), value.to_string());
        }
    }

    fn flag(&mut self, name: &'static str, value: bool) {
        self.push(tables::wire_key(name), bool_str(value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

fn bool_str(value: bool) -> &'static str {
    match value {
        true => "true",
        false => "false",
    }
}

fn check_code(
    field: &'static str,
    value: Option<&str>,
    lookup: fn(&str) -> Option<&'static str>,
    known: fn() -> Vec<&'static str>,
) -> Result<()> {
    match value {
        Some(code) if lookup(code).is_none() => Err(Error::validation(field, code, &known())),
        _ => Ok(()),
    }
}

/// Check the option combination without building anything.
pub fn validate(options: &SearchOptions) -> Result<()> {
    check_code(
        "network",
        options.network.as_deref(),
        tables::network_description,
        tables::network_codes,
    )?;
    check_code(
        "station_type",
        options.station_type.as_deref(),
        tables::station_type_description,
        tables::station_type_codes,
    )?;

    if options.has_station_box() && options.has_station_radius() {
        return Err(Error::Conflict { target: "station" });
    }
    if options.has_event_box() && options.has_event_radius() {
        return Err(Error::Conflict { target: "event" });
    }
    Ok(())
}

/// Translate search options into service query parameters.
///
/// The requesting user's email is sent alongside the options, and the
/// fixed ordering and no-data parameters close the list.
pub fn build_query(email: &str, options: &SearchOptions) -> Result<QueryParameters> {
    validate(options)?;

    let o = options;
    let mut params = QueryParameters::default();
    params.push("email", email);
    params.option("return_type", Some(o.return_type));
    params.option("process_level", Some(o.process_level.code()));
    params.option("group_by", Some(o.group_by));
    params.option("minpga", o.minpga);
    params.option("maxpga", o.maxpga);
    params.option("min_station_dist", o.min_station_dist);
    params.option("max_station_dist", o.max_station_dist);
    params.option("network", o.network.as_deref());
    params.option("station_type", o.station_type.as_deref());
    params.flag("include_inactive", o.include_inactive);
    params.option("station_name", o.station_name.as_deref());
    params.option("min_station_latitude", o.min_station_latitude);
    params.option("max_station_latitude", o.max_station_latitude);
    params.option("min_station_longitude", o.min_station_longitude);
    params.option("max_station_longitude", o.max_station_longitude);
    params.option("station_latitude", o.station_latitude);
    params.option("station_longitude", o.station_longitude);
    params.option("station_radius", o.station_radius);
    params.option("station_code", o.station_code.as_deref());
    params.option("event_name", o.event_name.as_deref());
    params.option("minmag", o.minmag);
    params.option("maxmag", o.maxmag);
    params.option("fault_type", o.fault_type);
    params.option("startdate", o.startdate.as_deref());
    params.option("enddate", o.enddate.as_deref());
    params.option("min_event_latitude", o.min_event_latitude);
    params.option("max_event_latitude", o.max_event_latitude);
    params.option("min_event_longitude", o.min_event_longitude);
    params.option("max_event_longitude", o.max_event_longitude);
    params.option("event_latitude", o.event_latitude);
    params.option("event_longitude", o.event_longitude);
    params.option("event_radius", o.event_radius);
    params.option("eventid", o.eventid.as_deref());

    for (key, value) in FIXED_PARAMETERS {
        params.push(key, value);
    }

    Ok(params)
}

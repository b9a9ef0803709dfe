use std::path::PathBuf;

use clap::Parser;

use crate::records::RecordsRequest;
use crate::search::tables::SERVICE_URL;
use crate::search::{FaultType, GroupBy, ProcessLevel, ReturnType, SearchOptions};

#[derive(Parser, Debug)]
#[command(name = "getrecords")]
#[command(version)]
#[command(about = "Download strong motion records from the CESMD web service", long_about = None)]
#[command(after_help = "Examples:\n  \
  getrecords nc73201181 --email me@example.org --eventid nc73201181 -u --station-type G\n  \
  getrecords ridgecrest --email me@example.org --event-name Ridgecrest --minmag 6\n  \
  getrecords --list-networks")]
pub struct Cli {
    /// Zip file to write, or directory to unpack into with -u
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["list_networks", "list_station_types"])]
    pub output: Option<PathBuf>,

    /// Email address of the requesting user
    #[arg(long, env = "CESMD_EMAIL", required_unless_present_any = ["list_networks", "list_station_types"])]
    pub email: Option<String>,

    /// Unpack the downloaded archive into OUTPUT
    #[arg(short = 'u', long)]
    pub unpack: bool,

    /// Records service endpoint
    #[arg(long, env = "CESMD_URL", default_value = SERVICE_URL)]
    pub url: String,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Print the known network codes and exit
    #[arg(long)]
    pub list_networks: bool,

    /// Print the known station type codes and exit
    #[arg(long)]
    pub list_station_types: bool,

    /// dataset or metadata
    #[arg(long, default_value = "dataset")]
    pub return_type: ReturnType,

    /// processed, raw, plots or all
    #[arg(long, default_value = "raw")]
    pub process_level: ProcessLevel,

    /// station or event
    #[arg(long, default_value = "event")]
    pub group_by: GroupBy,

    /// Minimum PGA value
    #[arg(long)]
    pub minpga: Option<f64>,

    /// Maximum PGA value
    #[arg(long)]
    pub maxpga: Option<f64>,

    /// Minimum epicentral distance of stations (km)
    #[arg(long)]
    pub min_station_dist: Option<f64>,

    /// Maximum epicentral distance of stations (km)
    #[arg(long)]
    pub max_station_dist: Option<f64>,

    /// Source network code (see --list-networks)
    #[arg(long)]
    pub network: Option<String>,

    /// Station type code (see --list-station-types)
    #[arg(long)]
    pub station_type: Option<String>,

    /// Include stations that are no longer active
    #[arg(long)]
    pub include_inactive: bool,

    #[arg(long)]
    pub station_name: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_station_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_station_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_station_longitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_station_longitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub station_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub station_longitude: Option<f64>,

    /// Search radius around the station point (km)
    #[arg(long)]
    pub station_radius: Option<f64>,

    #[arg(long)]
    pub station_code: Option<String>,

    #[arg(long)]
    pub event_name: Option<String>,

    /// Minimum magnitude
    #[arg(long)]
    pub minmag: Option<f64>,

    /// Maximum magnitude
    #[arg(long)]
    pub maxmag: Option<f64>,

    /// NM, RS or SS
    #[arg(long)]
    pub fault_type: Option<FaultType>,

    /// Earliest event date (YYYY-MM-DD)
    #[arg(long)]
    pub startdate: Option<String>,

    /// Latest event date (YYYY-MM-DD)
    #[arg(long)]
    pub enddate: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_event_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_event_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub min_event_longitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub max_event_longitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub event_latitude: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub event_longitude: Option<f64>,

    /// Search radius around the event point (km)
    #[arg(long)]
    pub event_radius: Option<f64>,

    #[arg(long)]
    pub eventid: Option<String>,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            return_type: self.return_type,
            process_level: self.process_level,
            group_by: self.group_by,
            minpga: self.minpga,
            maxpga: self.maxpga,
            min_station_dist: self.min_station_dist,
            max_station_dist: self.max_station_dist,
            network: self.network.clone(),
            station_type: self.station_type.clone(),
            include_inactive: self.include_inactive,
            station_name: self.station_name.clone(),
            min_station_latitude: self.min_station_latitude,
            max_station_latitude: self.max_station_latitude,
            min_station_longitude: self.min_station_longitude,
            max_station_longitude: self.max_station_longitude,
            station_latitude: self.station_latitude,
            station_longitude: self.station_longitude,
            station_radius: self.station_radius,
            station_code: self.station_code.clone(),
            event_name: self.event_name.clone(),
            minmag: self.minmag,
            maxmag: self.maxmag,
            fault_type: self.fault_type,
            startdate: self.startdate.clone(),
            enddate: self.enddate.clone(),
            min_event_latitude: self.min_event_latitude,
            max_event_latitude: self.max_event_latitude,
            min_event_longitude: self.min_event_longitude,
            max_event_longitude: self.max_event_longitude,
            event_latitude: self.event_latitude,
            event_longitude: self.event_longitude,
            event_radius: self.event_radius,
            eventid: self.eventid.clone(),
        }
    }

    /// The download this command line asks for, if it asks for one.
    pub fn records_request(&self) -> Option<RecordsRequest> {
        let output = self.output.clone()?;
        let email = self.email.clone()?;
        Some(
            RecordsRequest::new(output, email)
                .unpack(self.unpack)
                .options(self.search_options()),
        )
    }
}

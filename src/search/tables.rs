//! Fixed vocabularies understood by the records service.

/// Records query endpoint.
pub const SERVICE_URL: &str = "https://strongmotioncenter.org/testuser/wserv2/records/query";

/// Parameters appended to every query: nearest stations first, and a
/// 404 status when nothing matches.
pub const FIXED_PARAMETERS: [(&str, &str); 2] = [("orderby", "epidist-asc"), ("nodata", "404")];

/// Known source networks, by code.
pub const NETWORKS: &[(&str, &str)] = &[
    ("08", "Hokkaido University"),
    ("AA", "AA - Anchorage Strong Motion Network"),
    ("AK", "AK - University of Alaska Geophysical Institute"),
    ("AZ", "AZ - Anza"),
    ("BG", "BG - Berkeley Geysers Network"),
    ("BK", "BK - Berkeley Digital Seismic Network"),
    ("C1", "C1 - Red Sismologica Nacional"),
    (
        "CB",
        "CB - Institute of Geophysics China Earthquake Administration (IGP)",
    ),
    ("CE", "CE - California Strong Motion Instrumentation Program"),
    (
        "CF",
        "CF - Red Acelerografica Nacional de la Comision Federal de Electr",
    ),
    ("CI", "CI - California Institute of Technology"),
    ("CU", "CU - Albuquerque Seismological Laboratory"),
    ("C_", "C_ - C&GS"),
    ("EC", "EC - Ecuador Seismic Network"),
    ("ES", "ES - Spanish Digital Seismic Network"),
    ("GI", "GI - Red Sismologica Nacional-Guatemala"),
    ("G_", "G_ - GEOSCOPE"),
    ("HV", "HV - Hawaiian Volcano Observatory Network"),
    ("IT", "IT - Italian Strong Motion Network"),
    ("IU", "IU - GSN - IRIS/USGS"),
    ("IV", "IV - Istituto Nazionale di Geofisica e Vulcanologia"),
    ("JP", "JP - BRI"),
    ("LA", "LA - Los Angeles Basin Seismic Network"),
    ("MN", "MN - Mediterranean Very Broadband Seismographic Network"),
    ("NC", "NC - USGS Northern California Regional Network"),
    ("ND", "ND - New Caledonia Broadband Seismic Network (SismoCal)"),
    ("NM", "NM - New Madrid Seismic Network"),
    ("NN", "NN - Nevada Seismic Network"),
    ("NP", "NP - National Strong Motion Project"),
    ("NZ", "NZ"),
    ("OK", "OK - Oklahoma Geological Survey"),
    (
        "OV",
        "OV - Observatorio Vulcanologico y Sismologico de Costa Rica",
    ),
    ("PA", "PA - Observatorio Sismico del Occidente de Panamá"),
    ("PG", "PG"),
    ("PR", "PR - Puerto Rico Strong Motion Program (PRSMP)"),
    ("TO", "TO - Caltech Tectonic Observatory"),
    ("TU", "TU - Turkey Strong Motion Network"),
    ("US", "US - National Earthquake Information Center"),
    ("UW", "UW - PNSN"),
    ("WR", "WR - California Department of Water Resources"),
    ("_C", "_C - Chile"),
];

/// Known station types, by code.
pub const STATION_TYPES: &[(&str, &str)] = &[
    ("A", "Array"),
    ("G", "Ground"),
    ("B", "Building"),
    ("Br", "Bridge"),
    ("D", "Dam"),
    ("T", "Tunnel"),
    ("W", "Wharf"),
    ("O", "Other"),
];

/// Option names whose wire name differs. Anything absent here is sent
/// under its own name.
pub const KEY_TABLE: &[(&str, &str)] = &[
    ("return_type", "rettype"),
    ("process_level", "download"),
    ("group_by", "groupby"),
    ("min_station_dist", "minepidist"),
    ("max_station_dist", "maxepidist"),
    ("network", "netid"),
    ("station_type", "sttype"),
    ("include_inactive", "abandoned"),
    ("station_name", "stname"),
    ("min_station_latitude", "minlat"),
    ("max_station_latitude", "maxlat"),
    ("min_station_longitude", "minlon"),
    ("max_station_longitude", "maxlon"),
    ("station_latitude", "slat"),
    ("station_longitude", "slon"),
    ("station_radius", "srad"),
    ("station_code", "stcode"),
    ("event_name", "evname"),
    ("fault_type", "faulttype"),
    ("min_event_latitude", "eminlat"),
    ("max_event_latitude", "emaxlat"),
    ("min_event_longitude", "eminlon"),
    ("max_event_longitude", "emaxlon"),
    ("event_latitude", "elat"),
    ("event_longitude", "elon"),
    ("event_radius", "erad"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn codes(table: &'static [(&'static str, &'static str)]) -> Vec<&'static str> {
    table.iter().map(|(k, _)| *k).collect()
}

/// Wire name for an option, falling back to the option name itself.
pub fn wire_key(name: &'static str) -> &'static str {
    lookup(KEY_TABLE, name).unwrap_or(name)
}

pub fn network_description(code: &str) -> Option<&'static str> {
    lookup(NETWORKS, code)
}

pub fn station_type_description(code: &str) -> Option<&'static str> {
    lookup(STATION_TYPES, code)
}

pub fn network_codes() -> Vec<&'static str> {
    codes(NETWORKS)
}

pub fn station_type_codes() -> Vec<&'static str> {
    codes(STATION_TYPES)
}

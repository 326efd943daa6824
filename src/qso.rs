//! Structured contact schema.
//!
//! These types are the typed counterpart of a line-format document. They
//! serialise with camelCase names, which is the JSON form other services
//! exchange.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Timestamp, UploadStatus};

/// A whole log: header plus contacts in log order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Adif {
    /// Document metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    /// Contacts, in the order they appeared in the log.
    pub qsos: Vec<Qso>,
}

impl Adif {
    /// Serialises to the JSON wire form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses the JSON wire form.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Document metadata. Populated from static configuration, never mapped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    /// Line-format version string.
    pub adif_version: String,
    /// When the document was produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<Timestamp>,
    /// Producer name.
    pub program_id: String,
    /// Producer version.
    pub program_version: String,
}

/// One contact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Qso {
    /// The other party.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacted_station: Option<Station>,
    /// The station keeping the log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_station: Option<Station>,
    /// Band, e.g. `20m`.
    pub band: String,
    /// Receive band for cross-band contacts.
    pub band_rx: String,
    /// Frequency in MHz.
    pub freq: f64,
    /// Receive frequency in MHz.
    pub freq_rx: f64,
    /// Mode.
    pub mode: String,
    /// Submode.
    pub submode: String,
    /// Distance in kilometres.
    pub distance_km: u32,
    /// Start of the contact. Midnight UTC may mean the date was logged without a time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_on: Option<Timestamp>,
    /// End of the contact. Midnight UTC may mean the date was logged without a time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_off: Option<Timestamp>,
    /// Random (unscheduled) contact.
    pub random: bool,
    /// Report received.
    pub rst_received: String,
    /// Report sent.
    pub rst_sent: String,
    /// Short-wave listener report.
    pub swl: bool,
    /// Completion state as logged (`Y`, `N`, `NIL`, `?`).
    pub complete: String,
    /// Free-text comment.
    pub comment: String,
    /// Free-text notes.
    pub notes: String,
    /// Contest exchange, present only for contest contacts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contest: Option<ContestData>,
    /// Awards the contact was submitted for.
    pub award_submitted: Vec<String>,
    /// Awards granted for the contact.
    pub award_granted: Vec<String>,
    /// Credits submitted.
    pub credit_submitted: Vec<Credit>,
    /// Credits granted.
    pub credit_granted: Vec<Credit>,
    /// Propagation details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation: Option<Propagation>,
    /// Public encryption key.
    pub public_key: String,
    /// QRZ.com upload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrzcom: Option<Upload>,
    /// HRDLog upload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrdlog: Option<Upload>,
    /// Club Log upload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clublog: Option<Upload>,
    /// Paper card confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Qsl>,
    /// Electronic confirmation, fed by either eQSL or LoTW.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eqsl: Option<Qsl>,
    /// Application-defined fields keyed by lower-case tag.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub app_defined: BTreeMap<String, String>,
}

/// One party to a contact. Used for both the contacted and the logging side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Station {
    /// Operator callsign.
    pub op_call: String,
    /// Operator name.
    pub op_name: String,
    /// Maidenhead locator.
    pub grid_square: String,
    /// Latitude in signed decimal degrees.
    pub latitude: f64,
    /// Longitude in signed decimal degrees.
    pub longitude: f64,
    /// Power in watts.
    pub power: f64,
    /// Equipment description.
    pub rig: String,
    /// Antenna description.
    pub antenna: String,
    /// Antenna azimuth in degrees.
    pub antenna_azimuth: i32,
    /// Antenna elevation in degrees.
    pub antenna_elevation: i32,
    /// Station owner callsign.
    pub owner_call: String,
    /// Callsign used on the air.
    pub station_call: String,
    /// Operator age.
    pub age: u32,
    /// Operator is deceased.
    pub silent_key: bool,
    /// QSL manager or route.
    pub qsl_via: String,
    /// Postal address.
    pub address: String,
    /// Street.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// Secondary subdivision.
    pub county: String,
    /// Primary subdivision.
    pub state: String,
    /// DXCC entity name.
    pub country: String,
    /// DXCC entity code.
    pub dxcc: u32,
    /// Continent.
    pub continent: String,
    /// E-mail address.
    pub email: String,
    /// Web address.
    pub web: String,
    /// CQ zone.
    pub cq_zone: u32,
    /// ITU zone.
    pub itu_zone: u32,
    /// DARC DOK.
    pub darc_dok: String,
    /// FISTS number.
    pub fists: u32,
    /// FISTS century certificate number.
    pub fists_cc: u32,
    /// IOTA designator.
    pub iota: String,
    /// IOTA island identifier.
    pub iota_island_id: u32,
    /// WPX prefix.
    pub pfx: String,
    /// WAE or CQ region.
    pub region: String,
    /// SKCC member number.
    pub skcc: String,
    /// Special interest group.
    pub sig: String,
    /// Special interest group detail.
    pub sig_info: String,
    /// SOTA summit reference.
    pub sota_ref: String,
    /// Ten-Ten number.
    pub ten_ten: u32,
    /// USA-CA counties, colon separated.
    pub usaca_counties: String,
    /// UKSMG member number.
    pub uksmg: u32,
    /// VUCC grid squares.
    pub vucc_grids: String,
}

/// Contest exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContestData {
    /// Contest identifier.
    pub contest_id: String,
    /// Serial number sent.
    pub serial_sent: String,
    /// Serial number received.
    pub serial_received: String,
    /// ARRL section.
    pub arrl_section: String,
    /// Station class.
    pub station_class: String,
    /// Check (year first licensed).
    pub check: String,
    /// Precedence.
    pub precedence: String,
}

/// Propagation details; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Propagation {
    /// Propagation mode.
    pub propagation_mode: String,
    /// Geomagnetic A index.
    pub a_index: u32,
    /// Geomagnetic K index.
    pub k_index: u32,
    /// Solar flux.
    pub solar_flux_index: u32,
    /// Antenna path.
    pub ant_path: String,
    /// Meteor scatter: force initiation.
    pub force_init: bool,
    /// Meteor scatter: longest burst in seconds.
    pub max_bursts: u32,
    /// Meteor shower.
    pub meteor_shower_name: String,
    /// Meteor scatter: burst count.
    pub nr_bursts: u32,
    /// Meteor scatter: ping count.
    pub nr_pings: u32,
    /// Satellite mode.
    pub sat_mode: String,
    /// Satellite name.
    pub sat_name: String,
}

/// Upload state at one logging service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Upload {
    /// Date of the last upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<Timestamp>,
    /// Upload state.
    pub upload_status: UploadStatus,
}

/// Confirmation state. Status tokens are kept exactly as logged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Qsl {
    /// Sent status token (`Y`, `N`, `R`, `Q`, `I`, ...).
    pub sent_status: String,
    /// Date sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_date: Option<Timestamp>,
    /// How it was sent.
    pub sent_via: String,
    /// Received status token.
    pub received_status: String,
    /// Date received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<Timestamp>,
    /// How it was received.
    pub received_via: String,
    /// Message printed on the received card.
    pub received_message: String,
}

/// One credit element: award credit and optional confirmation medium.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credit {
    /// Credit name, e.g. `DXCC`.
    pub credit: String,
    /// Medium, e.g. `CARD`; empty when not given.
    pub qsl_medium: String,
}

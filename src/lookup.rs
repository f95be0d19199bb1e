//! External reference URLs for search hits.
//!
//! A results grid offers "look this up" links for a row: flight status by
//! callsign, airframe history by registration. Only the URL construction
//! lives here; opening a browser is the caller's business.

const FLIGHT_STATUS_BASE: &str =
    "http://www.flightstats.com/go/FlightStatus/flightStatusByFlight.do";
const AIRFRAMES_BASE: &str = "http://www.airframes.org/reg/";

/// Flight status URL for a callsign such as `BAW123`.
///
/// The leading letters are the airline designator and the rest the flight
/// number; callsigns without both parts have no useful lookup.
pub fn flight_status_url(callsign: &str) -> Option<String> {
    let split = callsign.find(|c: char| c.is_ascii_digit())?;
    let (airline, flight) = callsign.split_at(split);
    if airline.is_empty() {
        return None;
    }
    Some(format!(
        "{}?airline={}&flightNumber={}",
        FLIGHT_STATUS_BASE, airline, flight
    ))
}

/// Airframe history URL for a registration such as `G-EUPT`.
///
/// The registry strips dashes from registrations.
pub fn airframe_url(registration: &str) -> Option<String> {
    let slug: String = registration.chars().filter(|c| *c != '-').collect();
    if slug.is_empty() {
        return None;
    }
    Some(format!("{}{}", AIRFRAMES_BASE, slug))
}

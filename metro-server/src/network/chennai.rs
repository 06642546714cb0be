//! The built-in Chennai Metro dataset.
//!
//! Two lines sharing two interchanges: the Blue Line runs Wimco Nagar to
//! Chennai Airport, the Green Line runs Central Metro to St Thomas Mount.
//! They cross at Central Metro and again at Alandur.

use super::{LineName, Network, NetworkBuilder};
use crate::domain::NetworkError;

const BLUE_LINE: &[&str] = &[
    "Wimco Nagar",
    "Kaladipet",
    "Tollgate",
    "New Washermanpet",
    "Tondiarpet",
    "Sir Theagaraya College",
    "Washermanpet",
    "Mannadi",
    "High Court",
    "Central Metro",
    "Government Estate",
    "LIC",
    "Thousand Lights",
    "AG-DMS",
    "Teynampet",
    "Nandanam",
    "Saidapet",
    "Little Mount",
    "Guindy",
    "Alandur",
    "Nanganallur Road",
    "Meenambakkam",
    "Chennai Airport",
];

const GREEN_LINE: &[&str] = &[
    "Central Metro",
    "Egmore",
    "Nehru Park",
    "Kilpauk",
    "Pachaiyappa College",
    "Shenoy Nagar",
    "Anna Nagar East",
    "Anna Nagar Tower",
    "Thirumangalam",
    "Koyambedu",
    "CMBT",
    "Arumbakkam",
    "Vadapalani",
    "Ashok Nagar",
    "Ekkattuthangal",
    "Alandur",
    "St Thomas Mount",
];

/// Build the Chennai Metro network.
///
/// The dataset is static; an error here means the built-in data itself is
/// inconsistent, which is fatal at startup.
pub fn chennai() -> Result<Network, NetworkError> {
    NetworkBuilder::new()
        .station("Wimco Nagar", 13.1725, 80.3069)
        .station("Kaladipet", 13.1648, 80.3033)
        .station("Tollgate", 13.1554, 80.2987)
        .station("New Washermanpet", 13.1432, 80.2917)
        .station("Tondiarpet", 13.1360, 80.2870)
        .station("Sir Theagaraya College", 13.1275, 80.2845)
        .station("Washermanpet", 13.1148, 80.2872)
        .station("Mannadi", 13.0928, 80.2893)
        .station("High Court", 13.0877, 80.2865)
        .station("Central Metro", 13.0814, 80.2727)
        .station("Government Estate", 13.0694, 80.2743)
        .station("LIC", 13.0645, 80.2687)
        .station("Thousand Lights", 13.0583, 80.2580)
        .station("AG-DMS", 13.0494, 80.2505)
        .station("Teynampet", 13.0425, 80.2483)
        .station("Nandanam", 13.0335, 80.2405)
        .station("Saidapet", 13.0245, 80.2245)
        .station("Little Mount", 13.0180, 80.2205)
        .station("Guindy", 13.0093, 80.2206)
        .station("Alandur", 12.9975, 80.2006)
        .station("Nanganallur Road", 12.9880, 80.1905)
        .station("Meenambakkam", 12.9805, 80.1805)
        .station("Chennai Airport", 12.9800, 80.1633)
        .station("Egmore", 13.0732, 80.2609)
        .station("Nehru Park", 13.0765, 80.2500)
        .station("Kilpauk", 13.0785, 80.2425)
        .station("Pachaiyappa College", 13.0795, 80.2300)
        .station("Shenoy Nagar", 13.0820, 80.2225)
        .station("Anna Nagar East", 13.0850, 80.2101)
        .station("Anna Nagar Tower", 13.0875, 80.2050)
        .station("Thirumangalam", 13.0890, 80.1950)
        .station("Koyambedu", 13.0735, 80.1948)
        .station("CMBT", 13.0695, 80.2050)
        .station("Arumbakkam", 13.0620, 80.2110)
        .station("Vadapalani", 13.0500, 80.2120)
        .station("Ashok Nagar", 13.0373, 80.2123)
        .station("Ekkattuthangal", 13.0255, 80.2055)
        .station("St Thomas Mount", 13.0050, 80.1980)
        .line(LineName::Blue, BLUE_LINE)
        .line(LineName::Green, GREEN_LINE)
        .interchange("Alandur")
        .interchange("Central Metro")
        .build()
}

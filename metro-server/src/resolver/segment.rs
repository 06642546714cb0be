//! Contiguous line-segment extraction.

use crate::domain::StationName;
use crate::network::Line;

/// Extract the contiguous stretch of `line` between `a` and `b`, inclusive
/// of both endpoints, oriented to begin at `a` and end at `b`.
///
/// Returns `None` when either station is absent from the line. That is the
/// normal "no path on this line" signal, not an error.
pub fn segment(line: &Line, a: &StationName, b: &StationName) -> Option<Vec<StationName>> {
    let pos_a = line.position(a)?;
    let pos_b = line.position(b)?;
    let stations = line.stations();

    if pos_a <= pos_b {
        Some(stations[pos_a..=pos_b].to_vec())
    } else {
        let mut reversed = stations[pos_b..=pos_a].to_vec();
        reversed.reverse();
        Some(reversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::chennai;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn forward_segment() {
        let network = chennai().unwrap();
        let blue = &network.lines()[0];

        let seg = segment(blue, &station("Central Metro"), &station("Teynampet")).unwrap();
        let names: Vec<&str> = seg.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Central Metro",
                "Government Estate",
                "LIC",
                "Thousand Lights",
                "AG-DMS",
                "Teynampet",
            ]
        );
    }

    #[test]
    fn reversed_segment() {
        let network = chennai().unwrap();
        let blue = &network.lines()[0];

        let seg = segment(blue, &station("Teynampet"), &station("Central Metro")).unwrap();
        assert_eq!(seg.first().unwrap().as_str(), "Teynampet");
        assert_eq!(seg.last().unwrap().as_str(), "Central Metro");
        assert_eq!(seg.len(), 6);
    }

    #[test]
    fn single_station_segment() {
        let network = chennai().unwrap();
        let blue = &network.lines()[0];

        let seg = segment(blue, &station("Guindy"), &station("Guindy")).unwrap();
        assert_eq!(seg.len(), 1);
        assert_eq!(seg[0].as_str(), "Guindy");
    }

    #[test]
    fn absent_station_yields_none() {
        let network = chennai().unwrap();
        let blue = &network.lines()[0];

        // Egmore is a Green Line station
        assert!(segment(blue, &station("Egmore"), &station("Guindy")).is_none());
        assert!(segment(blue, &station("Guindy"), &station("Egmore")).is_none());
        assert!(segment(blue, &station("Nowhere"), &station("Guindy")).is_none());
    }

    #[test]
    fn whole_line_segment() {
        let network = chennai().unwrap();
        let blue = &network.lines()[0];

        let seg = segment(blue, &station("Wimco Nagar"), &station("Chennai Airport")).unwrap();
        assert_eq!(seg, blue.stations().to_vec());
    }
}

//! Route resolution between two stations.
//!
//! Resolution prefers a direct single-line path; otherwise it tries each
//! interchange in declaration order and keeps the candidate with the fewest
//! stations. Finding no route is a normal outcome, reported as `None`.

use std::fmt;

use tracing::{debug, trace};

use crate::domain::StationName;
use crate::network::{Line, LineName, Network};

use super::segment::segment;

/// How a resolved route traverses the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLabel {
    /// The whole route runs along a single line.
    Direct(LineName),

    /// The route changes lines at the named interchange.
    SwitchAt(StationName),
}

impl fmt::Display for RouteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLabel::Direct(line) => write!(f, "Direct ({line})"),
            RouteLabel::SwitchAt(station) => write!(f, "Switch at {station}"),
        }
    }
}

/// A resolved route: the station sequence plus a descriptive label.
///
/// The path is always non-empty and simple (no repeated station). Produced
/// fresh per query and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<StationName>,
    pub label: RouteLabel,
}

impl RouteResult {
    /// Number of stops travelled: one fewer than the stations visited.
    pub fn stops(&self) -> usize {
        self.path.len() - 1
    }
}

/// The first line, in fixed Blue-then-Green order, that calls at both `a`
/// and `b`.
///
/// This is the membership-priority rule used to pick each leg's line in the
/// interchange search, so line choice is deterministic and auditable.
fn line_through<'a>(network: &'a Network, a: &StationName, b: &StationName) -> Option<&'a Line> {
    network
        .lines()
        .iter()
        .find(|line| line.contains(a) && line.contains(b))
}

/// Resolve the shortest valid path from `start` to `end`.
///
/// Policy, in priority order:
/// 1. A direct path on a line carrying both endpoints, unless the other
///    line also carries both (only possible when both endpoints are
///    interchanges), in which case the interchange search decides.
/// 2. A two-leg path through each interchange in declaration order, keeping
///    the candidate with the fewest stations; an exact tie keeps the
///    earlier-declared interchange.
///
/// Returns `None` when no candidate connects the two stations, including
/// when either name is unknown to the network.
pub fn resolve(network: &Network, start: &StationName, end: &StationName) -> Option<RouteResult> {
    let [first, second] = network.lines();

    for (line, other) in [(first, second), (second, first)] {
        let direct = line.contains(start) && line.contains(end);
        let ambiguous = other.contains(start) && other.contains(end);
        if direct && !ambiguous {
            let path = segment(line, start, end)?;
            debug!(line = %line.name(), stations = path.len(), "direct route");
            return Some(RouteResult {
                path,
                label: RouteLabel::Direct(line.name()),
            });
        }
    }

    let mut best: Option<RouteResult> = None;
    for interchange in network.interchanges() {
        let Some(line1) = line_through(network, start, interchange) else {
            continue;
        };
        let Some(line2) = line_through(network, interchange, end) else {
            continue;
        };
        let Some(leg1) = segment(line1, start, interchange) else {
            continue;
        };
        let Some(leg2) = segment(line2, interchange, end) else {
            continue;
        };

        // The interchange ends leg1 and starts leg2; keep it once.
        let mut path = leg1;
        path.extend(leg2.into_iter().skip(1));
        trace!(
            interchange = %interchange,
            leg1 = %line1.name(),
            leg2 = %line2.name(),
            stations = path.len(),
            "interchange candidate"
        );

        // Strict comparison: an exact tie keeps the earlier interchange.
        if best.as_ref().map_or(true, |b| path.len() < b.path.len()) {
            best = Some(RouteResult {
                path,
                label: RouteLabel::SwitchAt(interchange.clone()),
            });
        }
    }

    if let Some(result) = &best {
        debug!(label = %result.label, stations = result.path.len(), "interchange route");
    } else {
        debug!(%start, %end, "no route found");
    }
    best
}

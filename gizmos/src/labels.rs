//! Text shown next to the gizmos.

use planar_geometry::Vector3;

use crate::{Label, ProbeReport, RayOutcome};

/// One label per query: side at the plane's closest point, distance and raycast at the probe.
pub fn probe_labels(report: &ProbeReport, outcome: RayOutcome) -> [Label; 4] {
    let probe = report.ray.origin;
    [
        Label {
            anchor: report.closest_point,
            text: format!("Side: {}", report.side),
        },
        Label {
            anchor: probe,
            text: format!("Signed distance: {:.2}", report.signed_distance),
        },
        Label {
            anchor: report.closest_point,
            text: format!("Closest point: {}", format_point(report.closest_point)),
        },
        Label {
            anchor: probe,
            text: format!("Raycast: {}", format_outcome(outcome)),
        },
    ]
}

fn format_point(p: Vector3) -> String {
    format!("({:.2}, {:.2}, {:.2})", p.x, p.y, p.z)
}

fn format_outcome(outcome: RayOutcome) -> String {
    match outcome {
        RayOutcome::Hit { distance } => format!("hit at {distance:.2}"),
        RayOutcome::Parallel => "parallel".into(),
        RayOutcome::Behind { distance } => format!("behind, {distance:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use planar_geometry::{Ray, Transform};

    use super::*;

    #[test]
    fn labels_for_hit() {
        let report = ProbeReport::evaluate(
            &Transform::IDENTITY,
            &Ray::new((1.0, -2.0, 5.0), (0.0, 0.0, -1.0)),
        );
        let texts = probe_labels(&report, report.ray_outcome(1e-6)).map(|l| l.text);
        assert_eq!(
            texts,
            [
                "Side: positive",
                "Signed distance: 5.00",
                "Closest point: (1.00, -2.00, 0.00)",
                "Raycast: hit at 5.00",
            ]
        );
    }

    #[test]
    fn outcome_texts() {
        assert_eq!(format_outcome(RayOutcome::Parallel), "parallel");
        assert_eq!(
            format_outcome(RayOutcome::Behind { distance: -2.5 }),
            "behind, -2.50"
        );
    }
}

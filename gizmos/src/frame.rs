use euclid::{Point2D, Size2D};
use log::{debug, trace};
use planar_geometry::{Color, Side, Vector3};

use crate::{
    DiscGizmo, DottedLineGizmo, FaceRect, GizmoConfig, GizmoSink, ProbeReport, RayGizmo,
    RayOutcome, RectangleGizmo, Scene, labels,
};

/// Evaluates the plane queries for the current scene and emits the gizmos visualizing them.
///
/// Called once per frame by the host. Order of emitted commands: probe ray, plane face, dotted
/// line from the probe to its closest point, disc at the closest point, then labels if enabled.
/// Without a probe, only the (transparent) plane face is emitted.
///
/// Returns the evaluated queries, if there was a probe.
pub fn update_and_render(
    scene: &Scene,
    config: &GizmoConfig,
    sink: &mut impl GizmoSink,
) -> Option<ProbeReport> {
    let local_to_world = scene.plane.to_matrix4();
    let half = config.plane_size / 2.0;
    let rect = FaceRect::new(
        Point2D::new(-half, -half),
        Size2D::new(config.plane_size, config.plane_size),
    );

    let Some(probe) = &scene.probe else {
        debug!("No probe, drawing the plane only");
        sink.draw(
            RectangleGizmo {
                local_to_world,
                rect,
                face: Color::TRANSPARENT,
                outline: config.colors.outline(),
            }
            .into(),
        );
        return None;
    };

    let report = ProbeReport::evaluate(&scene.plane, probe);
    let outcome = report.ray_outcome(config.parallel_tolerance);
    trace!("Probe: {report:?}, {outcome:?}");

    let ray_color = match outcome {
        RayOutcome::Hit { .. } => config.colors.positive(),
        RayOutcome::Parallel => config.colors.parallel(),
        RayOutcome::Behind { .. } => config.colors.negative(),
    };
    sink.draw(
        RayGizmo {
            origin: probe.origin,
            vector: probe.direction * outcome.ray_length(config.parallel_ray_length),
            color: ray_color,
        }
        .into(),
    );

    let side_color = match report.side {
        Side::Positive => config.colors.positive(),
        Side::Negative => config.colors.negative(),
    };
    sink.draw(
        RectangleGizmo {
            local_to_world,
            rect,
            face: side_color.with_alpha(config.face_alpha),
            outline: config.colors.outline(),
        }
        .into(),
    );

    let local_probe = scene.plane.inverse_transform_point(probe.origin);
    let local_closest = scene.plane.inverse_transform_point(report.closest_point);
    sink.draw(
        DottedLineGizmo {
            local_to_world,
            from: local_probe,
            to: local_closest,
            screen_space_size: config.dotted_line_size,
        }
        .into(),
    );
    sink.draw(
        DiscGizmo {
            local_to_world,
            center: local_closest,
            normal: Vector3::Z,
            radius: config.marker_radius,
        }
        .into(),
    );

    if config.labels {
        for label in labels::probe_labels(&report, outcome) {
            sink.draw(label.into());
        }
    }

    Some(report)
}

use shieldmark_core::{Artwork, BBox, Point};

use crate::violation::{RuleKind, Severity, Violation};

/// Run every rule over the artwork and collect the findings.
pub fn check_artwork(artwork: &Artwork) -> Vec<Violation> {
    let mut violations = Vec::new();

    if artwork.width == 0 || artwork.height == 0 {
        violations.push(Violation::artwork_level(
            RuleKind::ZeroAreaCanvas,
            Severity::Error,
            format!(
                "artwork {:?} declares a {}x{} surface",
                artwork.name, artwork.width, artwork.height
            ),
        ));
    }

    if artwork.group_count() == 0 {
        violations.push(Violation::artwork_level(
            RuleKind::EmptyArtwork,
            Severity::Warning,
            format!("artwork {:?} has no shape groups", artwork.name),
        ));
    }

    let canvas = BBox::new(
        Point::new(0.0, 0.0),
        Point::new(artwork.width as f64, artwork.height as f64),
    );

    for (index, group) in artwork.groups().iter().enumerate() {
        if group.vertex_count() < 3 {
            violations.push(Violation::group_level(
                RuleKind::DegenerateOutline,
                Severity::Error,
                format!(
                    "group {:?} has only {} vertices",
                    group.name,
                    group.vertex_count()
                ),
                index,
            ));
            continue;
        }

        if let Some(p) = group.outline.iter().find(|p| !p.is_finite()) {
            violations.push(Violation::group_level(
                RuleKind::NonFiniteCoordinate,
                Severity::Error,
                format!(
                    "group {:?} contains a non-finite vertex ({}, {})",
                    group.name, p.x, p.y
                ),
                index,
            ));
            continue;
        }

        if let Some(bb) = group.bbox() {
            if bb.min.x < canvas.min.x
                || bb.min.y < canvas.min.y
                || bb.max.x > canvas.max.x
                || bb.max.y > canvas.max.y
            {
                violations.push(
                    Violation::group_level(
                        RuleKind::OutOfBounds,
                        Severity::Warning,
                        format!(
                            "group {:?} extends beyond the {}x{} surface",
                            group.name, artwork.width, artwork.height
                        ),
                        index,
                    )
                    .with_bbox([bb.min.x, bb.min.y, bb.max.x, bb.max.y]),
                );
            }
        }
    }

    log::debug!(
        "checked artwork {:?}: {} violation(s) across {} group(s)",
        artwork.name,
        violations.len(),
        artwork.group_count()
    );
    violations
}

/// True when any finding is error-severity.
pub fn has_errors(violations: &[Violation]) -> bool {
    violations.iter().any(|v| v.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shieldmark_core::{contoso_shield, Rgba, ShapeGroup};

    #[test]
    fn test_builtin_shield_is_clean() {
        let violations = check_artwork(&contoso_shield());
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn test_degenerate_outline_detected() {
        let mut art = Artwork::new("bad", 10, 10);
        art.add_group(ShapeGroup::new(
            "line",
            Rgba::rgb(0, 0, 0),
            vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        ));
        let violations = check_artwork(&art);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::DegenerateOutline);
        assert_eq!(violations[0].group_index, Some(0));
        assert!(has_errors(&violations));
    }

    #[test]
    fn test_non_finite_coordinate_detected() {
        let mut art = Artwork::new("bad", 10, 10);
        art.add_group(ShapeGroup::new(
            "nan",
            Rgba::rgb(0, 0, 0),
            vec![
                Point::new(0.0, 0.0),
                Point::new(f64::NAN, 1.0),
                Point::new(2.0, 2.0),
            ],
        ));
        let violations = check_artwork(&art);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::NonFiniteCoordinate);
    }

    #[test]
    fn test_out_of_bounds_is_warning() {
        let mut art = Artwork::new("overflow", 10, 10);
        art.add_group(ShapeGroup::new(
            "big",
            Rgba::rgb(0, 0, 0),
            vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(20.0, 5.0),
                Point::new(0.0, 5.0),
            ],
        ));
        let violations = check_artwork(&art);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::OutOfBounds);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].bbox, Some([0.0, 0.0, 20.0, 5.0]));
        assert!(!has_errors(&violations));
    }

    #[test]
    fn test_empty_artwork_flagged() {
        let art = Artwork::new("nothing", 10, 10);
        let violations = check_artwork(&art);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, RuleKind::EmptyArtwork);
    }

    #[test]
    fn test_zero_area_canvas_flagged() {
        let art = Artwork::new("flat", 0, 10);
        let violations = check_artwork(&art);
        assert!(violations
            .iter()
            .any(|v| v.rule == RuleKind::ZeroAreaCanvas));
    }
}

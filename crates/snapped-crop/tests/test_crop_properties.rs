#[cfg(test)]
mod tests {
    use shared::geometry::{Point, Rect};
    use snapped_crop::{begin_drag, to_source_space, update_drag};
    use snapped_types::{SourceImageSize, ViewportSize};

    const POINTS: &[(f32, f32)] = &[
        (0.0, 0.0),
        (12.5, 300.0),
        (299.0, 1.0),
        (-40.0, 75.25),
        (150.0, -20.0),
        (512.0, 512.0),
    ];

    #[test]
    fn test_drag_size_is_absolute_delta() {
        for &(ax, ay) in POINTS {
            let anchor = begin_drag(Point::new(ax, ay));
            for &(px, py) in POINTS {
                let rect = update_drag(Point::new(px, py), anchor);
                assert_eq!(rect.width, (px - ax).abs());
                assert_eq!(rect.height, (py - ay).abs());
            }
        }
    }

    #[test]
    fn test_drag_origin_is_min_corner() {
        for &(ax, ay) in POINTS {
            let anchor = begin_drag(Point::new(ax, ay));
            for &(px, py) in POINTS {
                let rect = update_drag(Point::new(px, py), anchor);
                assert_eq!(rect.x, ax.min(px));
                assert_eq!(rect.y, ay.min(py));
            }
        }
    }

    #[test]
    fn test_doubling_source_doubles_output() {
        // Whole-pixel results at both scales, so truncation does not interfere
        let viewport = ViewportSize::new(200.0, 100.0);
        let rect = Rect::new(20.0, 10.0, 40.0, 30.0);

        let single = to_source_space(rect, viewport, SourceImageSize::new(400, 300)).unwrap();
        let double = to_source_space(rect, viewport, SourceImageSize::new(800, 600)).unwrap();

        assert_eq!(double.x, single.x * 2);
        assert_eq!(double.y, single.y * 2);
        assert_eq!(double.width, single.width * 2);
        assert_eq!(double.height, single.height * 2);
    }

    #[test]
    fn test_truncation_never_increases() {
        let viewport = ViewportSize::new(364.0, 512.0);
        let source = SourceImageSize::new(1179, 2556);
        let sx = 1179.0 / 364.0_f64;
        let sy = 2556.0 / 512.0_f64;

        for &(x, y) in POINTS.iter().filter(|(x, y)| *x >= 0.0 && *y >= 0.0) {
            let rect = Rect::new(x, y, x / 2.0 + 1.0, y / 3.0 + 1.0);
            let out = to_source_space(rect, viewport, source).unwrap();

            assert!(f64::from(out.x) <= f64::from(rect.x) * sx);
            assert!(f64::from(out.y) <= f64::from(rect.y) * sy);
            assert!(f64::from(out.width) <= f64::from(rect.width) * sx);
            assert!(f64::from(out.height) <= f64::from(rect.height) * sy);
            assert!(f64::from(out.width) > f64::from(rect.width) * sx - 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::geometry::{Point, Rect, Size};

    #[test]
    fn test_drag_right_and_down() {
        let r = Rect::from_corners(Point::new(10.0, 10.0), Point::new(60.0, 90.0));
        assert_eq!(r, Rect::new(10.0, 10.0, 50.0, 80.0));
    }

    #[test]
    fn test_drag_left_and_up() {
        let r = Rect::from_corners(Point::new(60.0, 90.0), Point::new(10.0, 10.0));
        assert_eq!(r, Rect::new(10.0, 10.0, 50.0, 80.0));
    }

    #[test]
    fn test_zero_length_drag_is_degenerate() {
        let p = Point::new(42.0, 42.0);
        let r = Rect::from_corners(p, p);
        assert!(r.is_degenerate());
        assert_eq!(r.origin(), p);
    }

    #[test]
    fn test_clamped_rect_is_always_within_bounds() {
        let bounds = Size::new(320.0, 480.0);
        let samples = [
            Rect::new(-100.0, -100.0, 50.0, 50.0),
            Rect::new(-10.0, 20.0, 400.0, 30.0),
            Rect::new(300.0, 470.0, 100.0, 100.0),
            Rect::new(1000.0, 1000.0, 1.0, 1.0),
        ];

        for rect in samples {
            let clamped = rect.clamp_within(bounds);
            assert!(clamped.is_within(bounds), "{rect:?} -> {clamped:?}");
            assert!(clamped.width <= rect.width);
            assert!(clamped.height <= rect.height);
        }
    }

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
    }
}

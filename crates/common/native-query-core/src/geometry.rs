/// A location in virtual-desktop coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a surface. The zero value means "unavailable".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle with a non-negative extent.
///
/// Hosts do not always report edges in canonical order, so rectangles coming
/// from the OS go through [`Rect::from_edges`], which sorts each edge pair
/// before measuring it. `x`/`y` are always the minimum edge of their axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Builds a rectangle from two edge pairs given in either order.
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (min_x, max_x) = (left.min(right), left.max(right));
        let (min_y, max_y) = (top.min(bottom), top.max(bottom));

        Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x).abs(),
            height: (max_y - min_y).abs(),
        }
    }

    /// Builds a rectangle from an origin and a possibly negative extent.
    #[must_use]
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Edges are inclusive, so a point on a shared border belongs to both
    /// neighbours.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Squared distance from `point` to the closest point of the rectangle;
    /// zero when the point is inside.
    #[must_use]
    pub fn distance_squared_to(&self, point: Point) -> f64 {
        let dx = axis_gap(point.x, self.x, self.right());
        let dy = axis_gap(point.y, self.y, self.bottom());
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::from_edges(left, top, right, bottom))
    }
}

fn axis_gap(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        0.0
    }
}

/// Pairs an opaque OS monitor handle with the geometry enumerated for it.
///
/// Only lives for the duration of a single resolution call; handles are not
/// stable across calls on every host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorMatch {
    pub handle: u64,
    pub bounds: Rect,
    pub work_area: Rect,
}

impl MonitorMatch {
    /// Picks the monitor containing `point`, or the closest one when the point
    /// lies outside every monitor. Ties keep enumeration order.
    pub fn nearest<I>(point: Point, monitors: I) -> Option<MonitorMatch>
    where
        I: IntoIterator<Item = MonitorMatch>,
    {
        let mut best: Option<(f64, MonitorMatch)> = None;

        for monitor in monitors {
            let distance = monitor.bounds.distance_squared_to(point);
            if distance == 0.0 {
                return Some(monitor);
            }
            if best.is_none_or(|(best_distance, _)| distance < best_distance) {
                best = Some((distance, monitor));
            }
        }

        best.map(|(_, monitor)| monitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(handle: u64, x: f64, y: f64, width: f64, height: f64) -> MonitorMatch {
        let bounds = Rect::from_origin_size(x, y, width, height);
        MonitorMatch {
            handle,
            bounds,
            work_area: bounds,
        }
    }

    #[test]
    fn swapped_edges_measure_the_same() {
        let canonical = Rect::from_edges(-1920.0, 0.0, 0.0, 1080.0);
        let swapped = Rect::from_edges(0.0, 1080.0, -1920.0, 0.0);

        assert_eq!(canonical, swapped);
        assert_eq!(canonical.width, 1920.0);
        assert_eq!(canonical.height, 1080.0);
        assert_eq!(canonical.x, -1920.0);
        assert_eq!(canonical.y, 0.0);
    }

    #[test]
    fn extent_is_never_negative() {
        let samples = [-5000.0, -1.5, 0.0, 0.25, 800.0, 3840.0];
        for &a in &samples {
            for &b in &samples {
                let rect = Rect::from_edges(a, b, b, a);
                assert!(rect.width >= 0.0);
                assert!(rect.height >= 0.0);
                assert_eq!(rect.width, Rect::from_edges(b, a, a, b).width);
            }
        }
    }

    #[test]
    fn negative_extent_is_normalized() {
        let rect = Rect::from_origin_size(100.0, 100.0, -50.0, -20.0);
        assert_eq!(rect, Rect::from_edges(50.0, 80.0, 100.0, 100.0));
    }

    #[test]
    fn default_size_is_empty() {
        assert!(Size::default().is_empty());
        assert!(Rect::default().is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let rect = Rect::from_edges(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(100.0, 50.0)));
        assert!(!rect.contains(Point::new(100.5, 10.0)));
    }

    #[test]
    fn distance_is_zero_inside() {
        let rect = Rect::from_edges(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.distance_squared_to(Point::new(5.0, 5.0)), 0.0);
        assert_eq!(rect.distance_squared_to(Point::new(13.0, 14.0)), 25.0);
        assert_eq!(rect.distance_squared_to(Point::new(-2.0, 5.0)), 4.0);
    }

    #[test]
    fn intersection_clips_reserved_space() {
        let monitor = Rect::from_edges(0.0, 0.0, 1920.0, 1080.0);
        let workarea = Rect::from_edges(0.0, 0.0, 3840.0, 1040.0);

        let work = monitor.intersection(&workarea).unwrap();
        assert_eq!(work, Rect::from_edges(0.0, 0.0, 1920.0, 1040.0));

        let elsewhere = Rect::from_edges(2000.0, 0.0, 2500.0, 100.0);
        assert!(monitor.intersection(&elsewhere).is_none());
    }

    #[test]
    fn nearest_prefers_the_containing_monitor() {
        let monitors = [
            monitor(1, 0.0, 0.0, 1920.0, 1080.0),
            monitor(2, -1280.0, 0.0, 1280.0, 1024.0),
        ];

        let hit = MonitorMatch::nearest(Point::new(-10.0, 500.0), monitors).unwrap();
        assert_eq!(hit.handle, 2);
    }

    #[test]
    fn nearest_falls_back_to_the_closest_monitor() {
        let monitors = [
            monitor(1, 0.0, 0.0, 1920.0, 1080.0),
            monitor(2, 1920.0, 0.0, 1920.0, 1080.0),
        ];

        let hit = MonitorMatch::nearest(Point::new(4000.0, 2000.0), monitors).unwrap();
        assert_eq!(hit.handle, 2);

        let hit = MonitorMatch::nearest(Point::new(-300.0, -300.0), monitors).unwrap();
        assert_eq!(hit.handle, 1);
    }

    #[test]
    fn nearest_keeps_enumeration_order_on_ties() {
        let monitors = [
            monitor(7, 0.0, 0.0, 100.0, 100.0),
            monitor(8, 100.0, 0.0, 100.0, 100.0),
        ];

        let hit = MonitorMatch::nearest(Point::new(100.0, 50.0), monitors).unwrap();
        assert_eq!(hit.handle, 7);
    }

    #[test]
    fn nearest_of_nothing_is_none() {
        assert!(MonitorMatch::nearest(Point::default(), []).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rect_serializes_as_plain_fields() {
        let rect = Rect::from_edges(0.0, 0.0, 2.0, 1.0);
        let json = serde_json::to_value(rect).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "x": 0.0, "y": 0.0, "width": 2.0, "height": 1.0 })
        );
    }
}

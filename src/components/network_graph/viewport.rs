pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.2;
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// `translate(x, y) scale(k)` applied to the whole drawing.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// Additive zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
	pub fn zoom_by(&mut self, delta: f64) {
		self.k = (self.k + delta).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	/// Additive zoom that keeps the graph point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta: f64) {
		let old_k = self.k;
		self.zoom_by(delta);
		let ratio = self.k / old_k;
		self.x = sx - (sx - self.x) * ratio;
		self.y = sy - (sy - self.y) * ratio;
	}

	pub fn zoom_percent(&self) -> i64 {
		(self.k * 100.0).round() as i64
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zoom_never_leaves_bounds() {
		let mut t = ViewTransform::default();
		for _ in 0..50 {
			t.zoom_by(ZOOM_STEP);
			assert!((MIN_ZOOM..=MAX_ZOOM).contains(&t.k));
		}
		assert_eq!(t.k, MAX_ZOOM);
		for _ in 0..50 {
			t.zoom_by(-ZOOM_STEP);
			assert!((MIN_ZOOM..=MAX_ZOOM).contains(&t.k));
		}
		assert_eq!(t.k, MIN_ZOOM);
		t.zoom_by(-1000.0);
		assert_eq!(t.k, MIN_ZOOM);
		t.zoom_by(1000.0);
		assert_eq!(t.k, MAX_ZOOM);
	}

	#[test]
	fn zoom_percent_rounds() {
		let mut t = ViewTransform::default();
		t.zoom_by(ZOOM_STEP);
		assert_eq!(t.zoom_percent(), 120);
		t.zoom_by(-ZOOM_STEP * 3.0);
		assert_eq!(t.zoom_percent(), 60);
	}

	#[test]
	fn screen_to_graph_inverts_transform() {
		let t = ViewTransform {
			x: 30.0,
			y: -10.0,
			k: 2.0,
		};
		assert_eq!(t.screen_to_graph(130.0, 90.0), (50.0, 50.0));
		assert_eq!(t.screen_to_graph(30.0, -10.0), (0.0, 0.0));
	}

	#[test]
	fn zoom_at_keeps_cursor_point_fixed() {
		let mut t = ViewTransform {
			x: 40.0,
			y: 20.0,
			k: 1.0,
		};
		let before = t.screen_to_graph(300.0, 200.0);
		t.zoom_at(300.0, 200.0, 0.5);
		let after = t.screen_to_graph(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
		assert_eq!(t.k, 1.5);
	}
}

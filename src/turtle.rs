//! The turtle-motion collaborator.
//!
//! The interpreter only ever issues commands: move forward, turn, and a
//! final draw once the program has run to completion. It never queries
//! position or heading, so anything that can absorb those three calls can
//! stand in for a renderer: a plotter, a GUI, or the path tracer below.

/// Receives the motion commands of one program run
pub trait Turtle {
	/// Move forward by `distance` along the current heading
	fn forward(&mut self, distance: i64);

	/// Rotate clockwise by `angle` degrees
	fn turn(&mut self, angle: i64);

	/// Finalize the picture after the run completes
	fn draw(&mut self);
}

/// A non-graphical turtle that traces the path it is driven along.
///
/// The turtle starts at the origin facing north; `turn` rotates clockwise.
/// `draw` prints one line per traced segment, which is as much rendering as
/// this crate does itself.
pub struct PathTurtle {
	position: (f64, f64),
	/// Degrees clockwise from north, kept in 0..360
	heading:  i64,
	segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
	from: (f64, f64),
	to:   (f64, f64),
}

impl Default for PathTurtle {
	fn default() -> Self { Self::new() }
}

impl PathTurtle {
	pub fn new() -> Self { Self { position: (0.0, 0.0), heading: 0, segments: Vec::new() } }
}

impl Turtle for PathTurtle {
	fn forward(&mut self, distance: i64) {
		let radians = (self.heading as f64).to_radians();
		let (x, y) = self.position;
		let to = (x + distance as f64 * radians.sin(), y + distance as f64 * radians.cos());
		self.segments.push(Segment { from: self.position, to });
		self.position = to;
	}

	fn turn(&mut self, angle: i64) { self.heading = (self.heading + angle).rem_euclid(360); }

	fn draw(&mut self) {
		for segment in &self.segments {
			let Segment { from: (x1, y1), to: (x2, y2) } = segment;
			println!("({x1:.1}, {y1:.1}) -> ({x2:.1}, {y2:.1})");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
		assert!(
			(actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
			"expected {expected:?}, got {actual:?}"
		);
	}

	#[test]
	fn forward_moves_north_by_default() {
		let mut turtle = PathTurtle::new();
		turtle.forward(10);
		assert_close(turtle.position, (0.0, 10.0));
	}

	#[test]
	fn turn_rotates_clockwise() {
		let mut turtle = PathTurtle::new();
		turtle.turn(90);
		turtle.forward(10);
		assert_close(turtle.position, (10.0, 0.0));
	}

	#[test]
	fn heading_wraps_around() {
		let mut turtle = PathTurtle::new();
		turtle.turn(270);
		turtle.turn(180);
		assert_eq!(turtle.heading, 90);
		turtle.turn(-180);
		assert_eq!(turtle.heading, 270);
	}

	#[test]
	fn square_path_returns_to_the_origin() {
		let mut turtle = PathTurtle::new();
		for _ in 0..4 {
			turtle.forward(10);
			turtle.turn(90);
		}
		assert_eq!(turtle.segments.len(), 4);
		assert_close(turtle.position, (0.0, 0.0));
		assert_eq!(turtle.heading, 0);
	}
}

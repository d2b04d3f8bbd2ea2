use super::vec2::Vec2;

/// Uniform rigid rod, free to translate and rotate in the plane.
///
/// The driving force is applied tangentially at one end, so every step
/// produces a linear acceleration of the center of mass that rotates with
/// the rod plus a constant angular acceleration about it.
pub struct Rod {
    /// World position of the center of mass (meters)
    pub pos: Vec2,
    /// Linear velocity (m/s)
    pub vel: Vec2,
    /// Linear acceleration (m/s^2)
    pub accel: Vec2,
    /// Orientation, radians measured from vertical
    pub theta: f64,
    /// Angular velocity (rad/s)
    pub omega: f64,
    /// Angular acceleration (rad/s^2)
    pub alpha: f64,
    /// Mass (kg)
    pub mass: f64,
    /// Applied force magnitude (N)
    pub force: f64,
    /// Length (m)
    pub length: f64,
    /// Width (m), always length * width_ratio
    pub width: f64,
    width_ratio: f64,
}

impl Rod {
    pub fn new(force: f64, mass: f64, length: f64, width_ratio: f64) -> Self {
        Self {
            pos: Vec2::zero(),
            vel: Vec2::zero(),
            accel: Vec2::zero(),
            theta: 0.0,
            omega: 0.0,
            alpha: 0.0,
            mass,
            force,
            length,
            width: length * width_ratio,
            width_ratio,
        }
    }

    /// Zero all kinematic state. Mass, force and geometry survive.
    pub fn reset(&mut self) {
        self.pos = Vec2::zero();
        self.vel = Vec2::zero();
        self.accel = Vec2::zero();
        self.theta = 0.0;
        self.omega = 0.0;
        self.alpha = 0.0;
        self.reset_width();
    }

    /// Re-derive width from the current length.
    pub fn reset_width(&mut self) {
        self.width = self.length * self.width_ratio;
    }

    /// Moment of inertia of a uniform rod about its center: m*L^2/12.
    pub fn moment_of_inertia(&self) -> f64 {
        self.mass * self.length * self.length / 12.0
    }

    /// Decompose the applied force into linear and angular acceleration.
    /// Writes `accel` and `alpha` only.
    pub fn apply_force(&mut self) {
        // Force stays perpendicular to the rod
        let f = Vec2::new(-self.force * self.theta.sin(), self.force * self.theta.cos());
        self.accel = f * (1.0 / self.mass);

        // Tangential force at the tip: T = F*L/2
        let torque = self.force * self.length / 2.0;
        self.alpha = torque / self.moment_of_inertia();
    }

    /// Advance one semi-implicit Euler step: velocity before position.
    pub fn step(&mut self, dt: f64) {
        self.apply_force();
        self.vel = self.vel + self.accel * dt;
        self.pos = self.pos + self.vel * dt;
        self.omega += self.alpha * dt;
        self.theta += self.omega * dt;
    }

    /// Current speed of the center of mass.
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Steady-state speed predicted by the torque/energy balance,
    /// rendered next to the measured velocity for comparison.
    pub fn expected_speed(&self) -> f64 {
        (std::f64::consts::PI * self.force * self.length / (12.0 * self.mass)).sqrt()
    }
}

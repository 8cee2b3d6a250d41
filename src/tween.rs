// Scalar tween with a start delay and cubic ease-out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    delay: f32,
    timer: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self { from, to, duration, delay: 0.0, timer: 0.0 }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer = (self.timer + dt).min(self.delay + self.duration);
    }

    // Advances and returns the eased value
    pub fn apply(&mut self, dt: f32) -> f32 {
        self.advance(dt);
        self.value()
    }

    pub fn reset(&mut self) {
        self.timer = 0.0;
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.timer >= self.delay { 1.0 } else { 0.0 };
        }
        ((self.timer - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        let t = self.progress();
        let eased = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        raylib::core::math::lerp(self.from, self.to, eased)
    }

    pub fn is_finished(&self) -> bool {
        self.timer >= self.delay + self.duration
    }
}

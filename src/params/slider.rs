use crate::error::{OrientationError, Result};
use crate::params::{ParamSnapshot, ParamSource};

/// A named range input.
///
/// # Examples
/// ```
/// # use rotaviz::params::Slider;
/// let angle = Slider::new("angle", 0.0, 360.0)
///     .with_step(1.0)
///     .with_value(45.0);
/// assert_eq!(angle.value, 45.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// Name under which the value appears in a [`ParamSnapshot`].
    pub name: String,
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
    /// Increment the value snaps to, counted from `min`. Zero means continuous.
    pub step: f32,
    /// Current value, always within `[min, max]`.
    pub value: f32,
}

impl Slider {
    /// Creates a continuous slider over `[min, max]`, starting at `min`.
    ///
    /// The bounds are swapped if given in the wrong order. A non-finite bound
    /// collapses onto the other one, or onto `0` if both are non-finite.
    pub fn new(name: impl Into<String>, min: f32, max: f32) -> Self {
        let (min, max) = match (min.is_finite(), max.is_finite()) {
            (true, true) => (min, max),
            (true, false) => (min, min),
            (false, true) => (max, max),
            (false, false) => (0.0, 0.0),
        };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            name: name.into(),
            min,
            max,
            step: 0.0,
            value: min,
        }
    }

    /// Sets the increment and re-snaps the current value.
    ///
    /// A non-finite step makes the slider continuous.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = if step.is_finite() { step.abs() } else { 0.0 };
        self.value = self.quantize(self.value);
        self
    }

    /// Sets the starting value, clamped and snapped. A non-finite value is ignored.
    pub fn with_value(mut self, value: f32) -> Self {
        if value.is_finite() {
            self.value = self.quantize(value);
        }
        self
    }

    fn quantize(&self, value: f32) -> f32 {
        let snapped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }
}

/// The controls of one scene.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderPanel {
    sliders: Vec<Slider>,
}

impl SliderPanel {
    /// A panel without any control.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slider, replacing any slider with the same name.
    pub fn with_slider(mut self, slider: Slider) -> Self {
        self.sliders.retain(|s| s.name != slider.name);
        self.sliders.push(slider);
        self
    }

    /// Moves the slider `name` to `value`, clamped to its range and snapped to its step.
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, name: &str, value: f32) -> Result<f32> {
        if !value.is_finite() {
            return Err(OrientationError::InvalidArgument(
                "slider value must be finite",
            ));
        }

        let slider = self
            .sliders
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| OrientationError::UnknownParameter(name.to_string()))?;
        slider.value = slider.quantize(value);
        log::trace!("slider `{}` set to {}", name, slider.value);
        Ok(slider.value)
    }

    /// Current value of the slider `name`.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.slider(name).map(|s| s.value)
    }

    /// The slider `name`.
    pub fn slider(&self, name: &str) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.name == name)
    }

    /// All sliders, in insertion order.
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }
}

impl ParamSource for SliderPanel {
    fn snapshot(&self) -> ParamSnapshot {
        self.sliders
            .iter()
            .map(|s| (s.name.as_str(), s.value))
            .collect()
    }
}

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// The values of a scene's controls, frozen for one frame.
///
/// A snapshot is produced once per frame by a [`ParamSource`] and handed by
/// reference to the scene's controller. Reading a name that the source does
/// not provide falls back to the caller's default.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSnapshot {
    values: BTreeMap<String, f32>,
}

impl ParamSnapshot {
    /// An empty snapshot: every lookup yields its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a named value.
    pub fn with(mut self, name: impl Into<String>, value: f32) -> Self {
        let _ = self.values.insert(name.into(), value);
        self
    }

    /// The value named `name`, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<f32> {
        self.values.get(name).copied()
    }

    /// The value named `name`, or `default` if absent.
    #[inline]
    pub fn get_or(&self, name: &str, default: f32) -> f32 {
        self.get(name).unwrap_or(default)
    }

    /// Number of named values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no value at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f32)> for ParamSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, f32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Anything that can report the current value of a scene's controls.
///
/// This is where a UI toolkit plugs in: read the widgets, return a snapshot.
pub trait ParamSource {
    /// Reads the controls once and freezes them.
    fn snapshot(&self) -> ParamSnapshot;
}

/// A fixed snapshot is its own source.
impl ParamSource for ParamSnapshot {
    fn snapshot(&self) -> ParamSnapshot {
        self.clone()
    }
}

/// Shared sources let the UI keep writing to the controls a driver reads from.
impl<P: ParamSource + ?Sized> ParamSource for Rc<RefCell<P>> {
    fn snapshot(&self) -> ParamSnapshot {
        self.borrow().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_fall_back_to_default() {
        let s = ParamSnapshot::new().with("rx", 30.0);
        assert_eq!(s.get_or("rx", 0.0), 30.0);
        assert_eq!(s.get_or("ry", 12.5), 12.5);
        assert_eq!(s.get("rz"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let s: ParamSnapshot = [("t", 0.25), ("angle", 90.0)].into_iter().collect();
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![("angle", 90.0), ("t", 0.25)]);
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let s = ParamSnapshot::new().with("t", 0.1).with("t", 0.9);
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("t"), Some(0.9));
        assert_eq!(s.snapshot(), s);
    }

    #[test]
    fn shared_source_sees_later_writes() {
        let shared = Rc::new(RefCell::new(ParamSnapshot::new().with("t", 0.0)));
        let reader = shared.clone();
        *shared.borrow_mut() = ParamSnapshot::new().with("t", 1.0);
        assert_eq!(reader.snapshot().get("t"), Some(1.0));
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

use super::props::Props;

/// Identifies one animation's contribution to the elements it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

impl LayerId {
    /// A fresh id, never handed out before in this process.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        LayerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

struct Entry<K> {
    target: K,
    layers: Vec<(LayerId, Props)>,
}

/// What every animation currently asks of each target, so that what gets written is
/// the composition of all of them rather than whichever animation ran last.
pub struct LayerStack<K> {
    entries: Vec<Entry<K>>,
}

impl<K> Default for LayerStack<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> LayerStack<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `props` as `layer`'s pose of `target` and returns the composed pose.
    pub fn set(&mut self, target: K, layer: LayerId, props: Props) -> Props {
        let idx = match self.entries.iter().position(|e| e.target == target) {
            Some(i) => i,
            None => {
                self.entries.push(Entry {
                    target,
                    layers: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];
        match entry.layers.iter_mut().find(|(id, _)| *id == layer) {
            Some((_, p)) => *p = props,
            None => entry.layers.push((layer, props)),
        }
        Props::compose(entry.layers.iter().map(|(_, p)| p))
    }

    pub fn composed(&self, target: &K) -> Props {
        self.entries
            .iter()
            .find(|e| e.target == *target)
            .map(|e| Props::compose(e.layers.iter().map(|(_, p)| p)))
            .unwrap_or_default()
    }

    /// Forgets everything `layer` contributed. Targets left without layers are dropped.
    pub fn remove(&mut self, layer: LayerId) {
        for entry in &mut self.entries {
            entry.layers.retain(|(id, _)| *id != layer);
        }
        self.entries.retain(|e| !e.layers.is_empty());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Prop;

    #[test]
    fn test_layers_compose_per_target() {
        let mut stack = LayerStack::new();
        let (intro, hover) = (LayerId::next(), LayerId::next());

        stack.set("cta", intro, Props::new().opacity(0.6).y(30.0));
        let shown = stack.set("cta", hover, Props::new().scale(1.03));
        assert_eq!(shown, Props::new().opacity(0.6).y(30.0).scale(1.03));

        // a later intro frame keeps the hover
        let shown = stack.set("cta", intro, Props::new().opacity(0.9).y(10.0));
        assert_eq!(shown.get(Prop::Scale), Some(1.03));
        assert_eq!(shown.get(Prop::Y), Some(10.0));

        stack.set("other", intro, Props::new().opacity(0.0));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.composed(&"other").get(Prop::Scale), None);
    }

    #[test]
    fn test_remove_layer() {
        let mut stack = LayerStack::new();
        let (a, b) = (LayerId::next(), LayerId::next());
        assert_ne!(a, b);
        stack.set(1, a, Props::new().y(5.0));
        stack.set(1, b, Props::new().y(5.0));
        stack.set(2, b, Props::new().x(1.0));
        stack.remove(b);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.composed(&1), Props::new().y(5.0));
        stack.remove(a);
        assert!(stack.is_empty());
        assert!(stack.composed(&1).is_empty());
    }
}

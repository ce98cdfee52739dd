#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Prop {
    Opacity,
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    /// Horizontal offset as a percentage of the element's own width.
    XPercent,
    Scale,
    /// Degrees.
    Rotation,
    /// Blur radius in px.
    Blur,
    /// Text glow strength, 0 to 1.
    Glow,
    /// CSS width in percent.
    WidthPercent,
}

impl Prop {
    pub const COUNT: usize = 9;
    pub const ALL: [Prop; Prop::COUNT] = [
        Prop::Opacity,
        Prop::X,
        Prop::Y,
        Prop::XPercent,
        Prop::Scale,
        Prop::Rotation,
        Prop::Blur,
        Prop::Glow,
        Prop::WidthPercent,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// How two animations touching this property combine: offsets add up, factors
    /// multiply, and a width is simply the latest one.
    fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Prop::Opacity | Prop::Scale => a * b,
            Prop::WidthPercent => b,
            _ => a + b,
        }
    }

    /// Value an untouched element has for this property.
    pub fn rest(self) -> f64 {
        match self {
            Prop::Opacity | Prop::Scale => 1.0,
            _ => 0.0,
        }
    }
}

/// A sparse set of animated property values.
///
/// Only the properties that were set are written to the element, so two animations
/// touching different properties of the same element don't clobber each other (except
/// for `transform`, which is a single CSS property).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props {
    values: [Option<f64>; Prop::COUNT],
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, prop: Prop, value: f64) -> Self {
        self.set(prop, value);
        self
    }

    pub fn opacity(self, v: f64) -> Self {
        self.with(Prop::Opacity, v)
    }

    pub fn x(self, v: f64) -> Self {
        self.with(Prop::X, v)
    }

    pub fn y(self, v: f64) -> Self {
        self.with(Prop::Y, v)
    }

    pub fn x_percent(self, v: f64) -> Self {
        self.with(Prop::XPercent, v)
    }

    pub fn scale(self, v: f64) -> Self {
        self.with(Prop::Scale, v)
    }

    pub fn rotation(self, v: f64) -> Self {
        self.with(Prop::Rotation, v)
    }

    pub fn blur(self, v: f64) -> Self {
        self.with(Prop::Blur, v)
    }

    pub fn glow(self, v: f64) -> Self {
        self.with(Prop::Glow, v)
    }

    pub fn width_percent(self, v: f64) -> Self {
        self.with(Prop::WidthPercent, v)
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        self.values[prop.index()] = Some(value);
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values[prop.index()]
    }

    /// The set value, or the property's rest value when untouched.
    pub fn value(&self, prop: Prop) -> f64 {
        self.get(prop).unwrap_or_else(|| prop.rest())
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        Prop::ALL
            .iter()
            .filter_map(|p| self.get(*p).map(|v| (*p, v)))
    }

    /// Overwrites every property that `other` sets.
    pub fn merge(&mut self, other: &Props) {
        for (p, v) in other.iter() {
            self.set(p, v);
        }
    }

    /// Stacks independent animations of one element, e.g. a hover lift on top of an
    /// entrance slide. Each property set by any layer is combined in layer order.
    pub fn compose<'a>(layers: impl IntoIterator<Item = &'a Props>) -> Props {
        let mut out = Props::new();
        for layer in layers {
            for (p, v) in layer.iter() {
                let v = match out.get(p) {
                    Some(acc) => p.combine(acc, v),
                    None => v,
                };
                out.set(p, v);
            }
        }
        out
    }

    /// CSS declarations for the touched properties, as `(property, value)` pairs.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();

        let mut transform = Vec::new();
        if let Some(xp) = self.get(Prop::XPercent) {
            transform.push(format!("translateX({}%)", num(xp)));
        }
        if self.get(Prop::X).is_some() || self.get(Prop::Y).is_some() {
            transform.push(format!(
                "translate3d({}px, {}px, 0px)",
                num(self.value(Prop::X)),
                num(self.value(Prop::Y))
            ));
        }
        if let Some(r) = self.get(Prop::Rotation) {
            transform.push(format!("rotate({}deg)", num(r)));
        }
        if let Some(s) = self.get(Prop::Scale) {
            transform.push(format!("scale({})", num(s)));
        }
        if !transform.is_empty() {
            decls.push(("transform", transform.join(" ")));
        }

        if let Some(o) = self.get(Prop::Opacity) {
            decls.push(("opacity", num(o)));
        }
        if let Some(b) = self.get(Prop::Blur) {
            decls.push(("filter", format!("blur({}px)", num(b.max(0.0)))));
        }
        if let Some(g) = self.get(Prop::Glow) {
            decls.push((
                "text-shadow",
                format!("0 0 30px rgba(139, 92, 246, {})", num(0.8 * g.clamp(0.0, 1.0))),
            ));
        }
        if let Some(w) = self.get(Prop::WidthPercent) {
            decls.push(("width", format!("{}%", num(w))));
        }
        decls
    }
}

/// Formats with at most three decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_values() {
        let p = Props::new().opacity(0.0).y(50.0);
        assert_eq!(p.get(Prop::Opacity), Some(0.0));
        assert_eq!(p.get(Prop::Scale), None);
        assert_eq!(p.value(Prop::Scale), 1.0);
        assert_eq!(p.iter().count(), 2);
        assert!(Props::new().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut base = Props::new().opacity(0.0).y(50.0);
        base.merge(&Props::new().y(0.0).blur(2.0));
        assert_eq!(base, Props::new().opacity(0.0).y(0.0).blur(2.0));
    }

    #[test]
    fn test_compose() {
        let entrance = Props::new().opacity(0.5).y(30.0).blur(4.0);
        let hover = Props::new().scale(1.05).y(-10.0);
        let c = Props::compose([&entrance, &hover]);
        assert_eq!(c.get(Prop::Y), Some(20.0));
        assert_eq!(c.get(Prop::Scale), Some(1.05));
        assert_eq!(c.get(Prop::Opacity), Some(0.5));
        assert_eq!(c.get(Prop::Blur), Some(4.0));

        // layers at rest change nothing
        let rest = Props::new().scale(1.0).y(0.0).opacity(1.0);
        assert_eq!(Props::compose([&entrance, &rest]), entrance.scale(1.0));
        assert!(Props::compose([]).is_empty());
    }

    #[test]
    fn test_css() {
        let p = Props::new().opacity(0.5).y(50.0).scale(0.8).blur(10.0);
        assert_eq!(
            p.css(),
            vec![
                ("transform", "translate3d(0px, 50px, 0px) scale(0.8)".to_string()),
                ("opacity", "0.5".to_string()),
                ("filter", "blur(10px)".to_string()),
            ]
        );

        let menu = Props::new().x_percent(100.0);
        assert_eq!(menu.css(), vec![("transform", "translateX(100%)".to_string())]);

        let bar = Props::new().width_percent(33.3333);
        assert_eq!(bar.css(), vec![("width", "33.333%".to_string())]);

        assert!(Props::new().css().is_empty());
    }

    #[test]
    fn test_num() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(-5.0), "-5");
    }
}

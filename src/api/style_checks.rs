use crate::render::Color;

use super::StyleAdvisory;

/// Collects fallbacks applied to out-of-range style fields.
#[derive(Debug, Default)]
pub(super) struct StyleChecks {
    advisories: Vec<StyleAdvisory>,
}

impl StyleChecks {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, advisory: StyleAdvisory) {
        self.advisories.push(advisory);
    }

    pub(super) fn extend(&mut self, advisories: impl IntoIterator<Item = StyleAdvisory>) {
        self.advisories.extend(advisories);
    }

    /// Finite and > 0.
    pub(super) fn positive(&mut self, field: &str, value: f64, fallback: f64) -> f64 {
        if value.is_finite() && value > 0.0 {
            return value;
        }
        self.reject(field, value.to_string(), fallback.to_string());
        fallback
    }

    /// Finite and >= 0.
    pub(super) fn non_negative(&mut self, field: &str, value: f64, fallback: f64) -> f64 {
        if value.is_finite() && value >= 0.0 {
            return value;
        }
        self.reject(field, value.to_string(), fallback.to_string());
        fallback
    }

    /// Finite and within `0..=1`.
    pub(super) fn fraction(&mut self, field: &str, value: f64, fallback: f64) -> f64 {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            return value;
        }
        self.reject(field, value.to_string(), fallback.to_string());
        fallback
    }

    pub(super) fn finite(&mut self, field: &str, value: f64, fallback: f64) -> f64 {
        if value.is_finite() {
            return value;
        }
        self.reject(field, value.to_string(), fallback.to_string());
        fallback
    }

    pub(super) fn count(
        &mut self,
        field: &str,
        value: usize,
        minimum: usize,
        fallback: usize,
    ) -> usize {
        if value >= minimum {
            return value;
        }
        self.reject(field, value.to_string(), fallback.to_string());
        fallback
    }

    pub(super) fn color(&mut self, field: &str, color: Color, fallback: Color) -> Color {
        if color.validate().is_ok() {
            return color;
        }
        self.reject(field, format!("{color:?}"), fallback.to_hex());
        fallback
    }

    pub(super) fn into_advisories(self) -> Vec<StyleAdvisory> {
        for advisory in &self.advisories {
            advisory.log();
        }
        self.advisories
    }

    fn reject(&mut self, field: &str, requested: String, fallback: String) {
        self.advisories.push(StyleAdvisory::InvalidStyleValue {
            field: field.to_owned(),
            requested,
            fallback,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::StyleChecks;
    use crate::api::StyleAdvisory;
    use crate::render::Color;

    #[test]
    fn out_of_range_values_fall_back_and_are_reported() {
        let mut checks = StyleChecks::new();
        assert_eq!(checks.positive("line_width", -1.0, 2.0), 2.0);
        assert_eq!(checks.positive("line_width", 3.0, 2.0), 3.0);
        assert_eq!(checks.fraction("alpha", 1.5, 1.0), 1.0);
        assert_eq!(checks.count("mark_every", 0, 1, 1), 1);
        let color = checks.color("color", Color::rgb(2.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(color, Color::BLACK);

        let advisories = checks.into_advisories();
        assert_eq!(advisories.len(), 4);
        assert!(matches!(
            &advisories[0],
            StyleAdvisory::InvalidStyleValue { field, .. } if field == "line_width"
        ));
    }
}

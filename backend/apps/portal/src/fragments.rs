//! Badge Fragments
//!
//! Two presentational badge components. Each renders the exact label
//! text it was given inside a fixed span shell; there is no other logic.
//! Labels are server-authored strings, so they are embedded unmodified.

use kernel::error::app_error::{AppError, AppResult};

/// Subscription plan badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanBadge {
    label: String,
}

impl PlanBadge {
    /// Create a plan badge; the label must not be empty
    pub fn new(label: impl Into<String>) -> AppResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(AppError::unprocessable("Badge label must not be empty"));
        }
        Ok(Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render the badge markup
    pub fn render(&self) -> String {
        format!(r#"<span class="badge badge-plan">{}</span>"#, self.label)
    }
}

/// Status badge (environment or feature state)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    label: String,
}

impl StatusBadge {
    /// Create a status badge; the label must not be empty
    pub fn new(label: impl Into<String>) -> AppResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(AppError::unprocessable("Badge label must not be empty"));
        }
        Ok(Self { label })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Render the badge markup
    pub fn render(&self) -> String {
        format!(r#"<span class="badge badge-status">{}</span>"#, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_badge_preserves_label_exactly() {
        for label in ["pro", "Enterprise (annual)", "日本語ラベル", "v2.0-beta"] {
            let badge = PlanBadge::new(label).unwrap();
            assert_eq!(badge.label(), label);
            assert!(badge.render().contains(label));
        }
    }

    #[test]
    fn test_status_badge_preserves_label_exactly() {
        for label in ["beta", "Preview", "maintenance mode"] {
            let badge = StatusBadge::new(label).unwrap();
            assert_eq!(badge.label(), label);
            assert!(badge.render().contains(label));
        }
    }

    #[test]
    fn test_badges_render_distinct_shells() {
        let plan = PlanBadge::new("pro").unwrap();
        let status = StatusBadge::new("pro").unwrap();
        assert_eq!(plan.render(), r#"<span class="badge badge-plan">pro</span>"#);
        assert_eq!(
            status.render(),
            r#"<span class="badge badge-status">pro</span>"#
        );
    }

    #[test]
    fn test_empty_labels_are_rejected() {
        assert!(PlanBadge::new("").is_err());
        assert!(PlanBadge::new("   ").is_err());
        assert!(StatusBadge::new("").is_err());
    }
}

use crate::shared::application::outcome::ValidationErrors;

/// Declarative rule table for one command
///
/// Each rule is evaluated eagerly when it is added; every failing rule
/// contributes its message under its field name, so a single pass reports
/// all problems at once.
#[derive(Debug, Clone, Default)]
pub struct ValidationChain {
    errors: ValidationErrors,
}

impl ValidationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `passes` holds
    pub fn rule(mut self, field: &str, passes: bool, message: impl Into<String>) -> Self {
        if !passes {
            self.errors
                .entry(field.to_string())
                .or_default()
                .push(message.into());
        }
        self
    }

    /// Like [`rule`](Self::rule), skipped entirely when `applies` is false
    pub fn rule_when(
        self,
        applies: bool,
        field: &str,
        passes: bool,
        message: impl Into<String>,
    ) -> Self {
        if applies {
            self.rule(field, passes, message)
        } else {
            self
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            log::debug!("Validation failed for fields: {:?}", self.errors.keys());
            Err(self.errors)
        }
    }
}

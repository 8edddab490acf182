//! String-specific combinators.

use super::StringUnit;

impl StringUnit {
    /// Lazily uppercase each generated string.
    pub fn upper_case(&self) -> StringUnit {
        Self::from(self.map(|s| s.to_uppercase()))
    }

    /// Lazily lowercase each generated string.
    pub fn lower_case(&self) -> StringUnit {
        Self::from(self.map(|s| s.to_lowercase()))
    }

    /// Lazily append `suffix` to each generated string.
    pub fn append(&self, suffix: impl Into<String>) -> StringUnit {
        let suffix = suffix.into();
        Self::from(self.map(move |mut s| {
            s.push_str(&suffix);
            s
        }))
    }

    /// Lazily prepend `prefix` to each generated string.
    pub fn prepend(&self, prefix: impl Into<String>) -> StringUnit {
        let prefix = prefix.into();
        Self::from(self.map(move |s| format!("{prefix}{s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_combinators() {
        let unit = StringUnit::new(|| "MiXeD".to_string());

        assert_eq!(unit.upper_case().value(), "MIXED");
        assert_eq!(unit.lower_case().value(), "mixed");
        assert_eq!(unit.value(), "MiXeD", "original unit is unaffected");
    }

    #[test]
    fn test_append_prepend() {
        let unit = StringUnit::new(|| "user".to_string());

        assert_eq!(unit.append("@example.com").value(), "user@example.com");
        assert_eq!(unit.prepend("id-").value(), "id-user");
        assert_eq!(
            unit.prepend("<").append(">").value(),
            "<user>",
            "combinators chain"
        );
    }
}

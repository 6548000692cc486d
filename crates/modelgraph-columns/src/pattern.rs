//! Recognition of derived-column naming templates.
//!
//! Templates are checked in a fixed order and the first match wins:
//!
//! 1. Composite identifier: `A_"<owner role>"_<part role>`. Values are
//!    `A_<part, lower-cased>_<owner>`.
//! 2. Qualifier context: any name containing `composite owner`. Values are
//!    `<part, lower-cased> qua <owner> context`.
//!
//! A composite-identifier name such as `A_"composite owner"_component` also
//! contains the qualifier trigger; rule 1 takes it.

const COMPOSITE_PREFIX: &str = "A_\"";
const COMPOSITE_ROLE_END: &str = "\"_";
const QUALIFIER_TRIGGER: &str = "composite owner";

/// A recognized derived-column template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnPattern {
    /// `A_"<owner_role>"_<part_role>`.
    CompositeIdentifier {
        owner_role: String,
        part_role: String,
    },
    /// A name containing `composite owner`.
    QualifierContext,
}

impl ColumnPattern {
    /// Matches `col_name` against the known templates.
    ///
    /// Returns `None` when no template applies.
    pub fn parse(col_name: &str) -> Option<ColumnPattern> {
        if let Some((owner_role, part_role)) = col_name
            .strip_prefix(COMPOSITE_PREFIX)
            .and_then(|rest| rest.split_once(COMPOSITE_ROLE_END))
        {
            if !owner_role.is_empty() && !part_role.is_empty() {
                return Some(ColumnPattern::CompositeIdentifier {
                    owner_role: owner_role.to_string(),
                    part_role: part_role.to_string(),
                });
            }
        }

        if col_name.contains(QUALIFIER_TRIGGER) {
            return Some(ColumnPattern::QualifierContext);
        }

        None
    }

    /// Renders one row's value from its part and owner strings.
    pub fn render(&self, part: &str, owner: &str) -> String {
        match self {
            ColumnPattern::CompositeIdentifier { .. } => {
                format!("A_{}_{}", part.to_lowercase(), owner)
            }
            ColumnPattern::QualifierContext => {
                format!("{} qua {} context", part.to_lowercase(), owner)
            }
        }
    }
}

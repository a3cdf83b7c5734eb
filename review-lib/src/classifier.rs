use crate::sheet_reader::InputRow;
use crate::vendor::{
    COMMENTS_COLUMN, NEW_ROLE_COLUMN, RETAIN_REVOKE_COLUMN, REVIEWER_NAME_COLUMN, VendorTemplate,
};

/// Decision value that marks an account for removal. Matched exactly,
/// case included, after trimming.
pub const REVOKE_DECISION: &str = "Revoke";

/// Output category of a reviewed row. A row can belong to several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Revoke,
    NewRole,
    Comment,
}

impl Category {
    /// Sheet order inside each vendor block
    pub const ALL: [Category; 3] = [Category::Revoke, Category::NewRole, Category::Comment];

    /// Prefix used in worksheet names
    pub fn label(&self) -> &'static str {
        match self {
            Category::Revoke => "Revoke",
            Category::NewRole => "New Role",
            Category::Comment => "Comments",
        }
    }
}

/// Outcome of classifying every row of one recognized file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub missing_reviewers: usize,
    pub missing_decisions: usize,
    pub revoke: Vec<InputRow>,
    pub new_role: Vec<InputRow>,
    pub comment: Vec<InputRow>,
}

impl Classification {
    /// Field-completeness warnings for the run log. Empty when nothing is missing.
    pub fn warnings(&self, file_name: &str) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.missing_reviewers > 0 {
            warnings.push(format!(
                "*** {} has {} missing Reviewers.",
                file_name, self.missing_reviewers
            ));
        }
        if self.missing_decisions > 0 {
            warnings.push(format!(
                "*** {} has {} missing Retain/Revoke entries.",
                file_name, self.missing_decisions
            ));
        }
        warnings
    }
}

fn value_of(row: &InputRow, index: Option<usize>) -> Option<&str> {
    index.and_then(|i| row.value(i))
}

/// Count missing required fields and pick out revoke, new-role and comment rows.
///
/// The three category tests are independent of each other. Row order within
/// each category follows the input.
pub fn classify(template: &VendorTemplate, rows: &[InputRow]) -> Classification {
    let reviewer = template.column_index(REVIEWER_NAME_COLUMN);
    let decision = template.column_index(RETAIN_REVOKE_COLUMN);
    let new_role = template.column_index(NEW_ROLE_COLUMN);
    let comments = template.column_index(COMMENTS_COLUMN);

    let mut classification = Classification::default();

    for row in rows {
        if value_of(row, reviewer).is_none() {
            classification.missing_reviewers += 1;
        }

        let decision_value = value_of(row, decision);
        if decision_value.is_none() {
            classification.missing_decisions += 1;
        }

        if decision_value == Some(REVOKE_DECISION) {
            classification.revoke.push(row.clone());
        }
        if value_of(row, new_role).is_some() {
            classification.new_role.push(row.clone());
        }
        if value_of(row, comments).is_some() {
            classification.comment.push(row.clone());
        }
    }

    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorRegistry;

    fn ert() -> VendorTemplate {
        VendorRegistry::default().templates()[1].clone()
    }

    /// ERT row: only the reviewer-facing columns vary
    fn ert_row(reviewer: &str, decision: &str, new_role: &str, comment: &str) -> InputRow {
        let cell = |v: &str| if v.is_empty() { None } else { Some(v.to_string()) };
        InputRow::new(vec![
            Some("STUDY-1".to_string()),
            Some("user@example.com".to_string()),
            Some("example.com".to_string()),
            Some("Ann".to_string()),
            Some("Smith".to_string()),
            Some("101".to_string()),
            Some("Site User".to_string()),
            cell(reviewer),
            cell(decision),
            cell(new_role),
            cell(comment),
        ])
    }

    #[test]
    fn test_revoke_is_exact_match() {
        let rows = vec![
            ert_row("R", "Revoke", "", ""),
            ert_row("R", "revoke", "", ""),
            ert_row("R", "REVOKE", "", ""),
            ert_row("R", "Retain", "", ""),
        ];
        let classification = classify(&ert(), &rows);
        assert_eq!(classification.revoke, vec![rows[0].clone()]);
    }

    #[test]
    fn test_categories_are_independent() {
        let rows = vec![
            ert_row("R", "Revoke", "Lead", "gone"),
            ert_row("R", "Retain", "", ""),
            ert_row("R", "Retain", "", "keep"),
        ];
        let classification = classify(&ert(), &rows);
        assert_eq!(classification.revoke.len(), 1);
        assert_eq!(classification.new_role.len(), 1);
        assert_eq!(classification.comment, vec![rows[0].clone(), rows[2].clone()]);
    }

    #[test]
    fn test_missing_counts() {
        let rows = vec![
            ert_row("", "", "", ""),
            ert_row("", "Retain", "", ""),
            ert_row("R", "Retain", "", ""),
        ];
        let classification = classify(&ert(), &rows);
        assert_eq!(classification.missing_reviewers, 2);
        assert_eq!(classification.missing_decisions, 1);
    }

    #[test]
    fn test_warnings_only_when_counts_positive() {
        let clean = Classification::default();
        assert!(clean.warnings("a.xlsx").is_empty());

        let classification = Classification {
            missing_reviewers: 1,
            ..Default::default()
        };
        assert_eq!(
            classification.warnings("a.xlsx"),
            vec!["*** a.xlsx has 1 missing Reviewers.".to_string()]
        );

        let classification = Classification {
            missing_reviewers: 2,
            missing_decisions: 3,
            ..Default::default()
        };
        assert_eq!(
            classification.warnings("b.xlsx"),
            vec![
                "*** b.xlsx has 2 missing Reviewers.".to_string(),
                "*** b.xlsx has 3 missing Retain/Revoke entries.".to_string(),
            ]
        );
    }

    #[test]
    fn test_category_labels() {
        let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
        assert_eq!(labels, vec!["Revoke", "New Role", "Comments"]);
    }
}

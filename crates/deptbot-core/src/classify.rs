//! Keyword routing: the guardrail gate plus department and intent
//! classification.
//!
//! Both classification passes are ordered first-match rule lists over the
//! lower-cased query. Matching is plain substring containment, no
//! tokenization or word boundaries. Rule order is the tie-break policy:
//! "electronics programming lab" resolves to computer science because that
//! rule is evaluated first.

use serde::{Deserialize, Serialize};

use crate::knowledge::DepartmentId;

/// The kind of information a query is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Facilities,
    Admission,
    Courses,
    Fees,
    Description,
    /// No specific intent keyword matched.
    General,
}

impl Intent {
    /// Stable identifier string (wire/logging form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facilities => "facilities",
            Self::Admission => "admission",
            Self::Courses => "courses",
            Self::Fees => "fees",
            Self::Description => "description",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-query classification outcome. Department and intent are independent
/// axes; either may fall back to its `General` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub department: DepartmentId,
    pub intent: Intent,
}

/// Department rules in priority order; the first list with any substring hit
/// wins.
const DEPARTMENT_RULES: &[(&[&str], DepartmentId)] = &[
    (
        &["computer", "cs", "software", "it", "programming"],
        DepartmentId::ComputerScience,
    ),
    (
        &["electrical", "electronics", "power", "circuit"],
        DepartmentId::ElectricalEngineering,
    ),
    (
        &["mechanical", "thermo", "manufacturing"],
        DepartmentId::MechanicalEngineering,
    ),
    (
        &["civil", "structural", "construction"],
        DepartmentId::CivilEngineering,
    ),
    (
        &["architecture", "building", "design"],
        DepartmentId::Architecture,
    ),
];

/// Intent rules in priority order. The description rule matches phrases, not
/// single words.
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (
        &["lab", "facility", "equipment", "infrastructure"],
        Intent::Facilities,
    ),
    (
        &["admission", "apply", "requirement", "eligibility"],
        Intent::Admission,
    ),
    (
        &["course", "program", "subject", "curriculum"],
        Intent::Courses,
    ),
    (&["fee", "tuition", "cost", "payment"], Intent::Fees),
    (
        &["tell me about", "what is", "information about"],
        Intent::Description,
    ),
];

/// Guardrail gate: true iff at least one keyword is a substring of the
/// lower-cased query. An empty keyword set makes every query unrelated.
pub fn is_related(query: &str, keywords: &[String]) -> bool {
    let query = query.to_lowercase();
    keywords.iter().any(|k| query.contains(k.as_str()))
}

/// Runs both classification passes on the query. Always resolves: either
/// axis defaults to `General` when no rule matches.
pub fn classify(query: &str) -> Classification {
    let query = query.to_lowercase();
    Classification {
        department: first_match(DEPARTMENT_RULES, &query).unwrap_or(DepartmentId::General),
        intent: first_match(INTENT_RULES, &query).unwrap_or(Intent::General),
    }
}

fn first_match<T: Copy>(rules: &[(&[&str], T)], query_lower: &str) -> Option<T> {
    rules
        .iter()
        .find(|(words, _)| words.iter().any(|w| query_lower.contains(w)))
        .map(|(_, outcome)| *outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guardrail_rejects_query_without_keywords() {
        let keywords = vec!["department".to_string(), "lab".to_string()];
        assert!(!is_related("hello", &keywords));
        assert!(!is_related("", &keywords));
    }

    #[test]
    fn guardrail_is_case_insensitive_substring() {
        let keywords = vec!["lab".to_string()];
        assert!(is_related("Where is the LAB?", &keywords));
        // Substring containment, no word boundary.
        assert!(is_related("collaborate with me", &keywords));
    }

    #[test]
    fn guardrail_with_empty_keyword_set_rejects_everything() {
        assert!(!is_related("computer science department", &[]));
    }

    #[test]
    fn department_rules_resolve_in_priority_order() {
        // Contains both a computer-science and an electrical keyword; the
        // computer-science rule is evaluated first.
        let c = classify("electronics programming lab");
        assert_eq!(c.department, DepartmentId::ComputerScience);
        assert_eq!(c.intent, Intent::Facilities);
    }

    #[test]
    fn each_department_keyword_routes_to_its_department() {
        let cases = [
            ("software engineering", DepartmentId::ComputerScience),
            ("power systems lecture", DepartmentId::ElectricalEngineering),
            ("manufacturing workshop", DepartmentId::MechanicalEngineering),
            ("structural analysis", DepartmentId::CivilEngineering),
            ("building design", DepartmentId::Architecture),
        ];
        for (query, expected) in cases {
            assert_eq!(classify(query).department, expected, "{query}");
        }
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        // "it" hides inside "circuit" and "architecture"; the computer-science
        // rule fires before the electrical or architecture rules can.
        assert_eq!(
            classify("circuit theory").department,
            DepartmentId::ComputerScience
        );
        assert_eq!(
            classify("architecture studio").department,
            DepartmentId::ComputerScience
        );
    }

    #[test]
    fn unmatched_query_defaults_to_general_general() {
        let c = classify("weather forecast tomorrow");
        assert_eq!(c.department, DepartmentId::General);
        assert_eq!(c.intent, Intent::General);
    }

    #[test]
    fn intent_rules_resolve_in_priority_order() {
        // "lab" (facilities) outranks "admission" even though both appear.
        let c = classify("lab admission requirements");
        assert_eq!(c.intent, Intent::Facilities);
    }

    #[test]
    fn description_intent_matches_phrases() {
        assert_eq!(classify("tell me about mechanical").intent, Intent::Description);
        assert_eq!(classify("what is architecture").intent, Intent::Description);
    }

    #[test]
    fn fee_keywords_route_to_fees() {
        assert_eq!(classify("tuition for electrical").intent, Intent::Fees);
        assert_eq!(classify("semester cost").intent, Intent::Fees);
    }
}

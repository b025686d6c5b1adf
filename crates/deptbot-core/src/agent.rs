//! Query processor: guardrail → classifier → composer, packaged with source
//! labels and the relatedness flag.

use std::sync::Arc;

use crate::classify;
use crate::compose::compose;
use crate::knowledge::KnowledgeBase;
use crate::shared::QueryResponse;

/// Fixed rejection message for queries the guardrail filters out.
const REJECTION_TEXT: &str = "I only answer department-related questions. Please ask about:\n\
    - Department facilities (labs, equipment)\n\
    - Admission requirements\n\
    - Course programs\n\
    - Fee structure\n\
    - General department information";

/// Source attribution for rejected queries.
const REJECTION_SOURCES: [&str; 1] = ["UET Prospectus Guidelines"];

/// Source attribution for every accepted query, regardless of which
/// department or intent matched.
const ACCEPTED_SOURCES: [&str; 3] = [
    "UET Department Information Database",
    "Academic Programs Catalog",
    "Facilities & Infrastructure Guide",
];

/// Stateless per-query orchestrator over the read-only knowledge base.
///
/// `process` is a total function: the guardrail rejection is a valid
/// negative outcome, classification always resolves to a value, and the
/// composer only does table lookups and string formatting. Nothing in this
/// path can fail, so no fallback payload exists and concurrent calls need no
/// locking.
pub struct QueryProcessor {
    knowledge: Arc<KnowledgeBase>,
    guardrail_keywords: Vec<String>,
}

impl QueryProcessor {
    /// The keyword set is fixed at construction; it gates all further
    /// processing and is never empty in normal operation.
    pub fn new(knowledge: Arc<KnowledgeBase>, guardrail_keywords: Vec<String>) -> Self {
        Self {
            knowledge,
            guardrail_keywords,
        }
    }

    /// Answers a free-text query. Rejected queries skip classification and
    /// composition entirely.
    pub fn process(&self, query: &str) -> QueryResponse {
        if !classify::is_related(query, &self.guardrail_keywords) {
            tracing::debug!(target: "deptbot::agent", "query rejected by guardrail");
            return QueryResponse {
                text: REJECTION_TEXT.to_string(),
                is_related: false,
                sources: REJECTION_SOURCES.iter().map(|s| s.to_string()).collect(),
            };
        }

        let classification = classify::classify(query);
        tracing::info!(
            target: "deptbot::agent",
            department = %classification.department,
            intent = %classification.intent,
            "query classified"
        );

        QueryResponse {
            text: compose(
                &self.knowledge,
                classification.department,
                classification.intent,
            ),
            is_related: true,
            sources: ACCEPTED_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CoreConfig;

    fn processor() -> QueryProcessor {
        QueryProcessor::new(
            Arc::new(KnowledgeBase::new()),
            CoreConfig::default_guardrail_keywords(),
        )
    }

    #[test]
    fn off_topic_query_gets_fixed_rejection() {
        let response = processor().process("hello");
        assert!(!response.is_related);
        assert_eq!(response.text, REJECTION_TEXT);
        assert_eq!(response.sources, vec!["UET Prospectus Guidelines"]);
    }

    #[test]
    fn accepted_query_carries_three_fixed_sources() {
        let response = processor().process("What are the admission requirements?");
        assert!(response.is_related);
        assert_eq!(
            response.sources,
            vec![
                "UET Department Information Database",
                "Academic Programs Catalog",
                "Facilities & Infrastructure Guide",
            ]
        );
    }

    #[test]
    fn end_to_end_computer_science_facilities() {
        let response = processor().process("What are the lab facilities in Computer Science?");
        assert!(response.is_related);
        assert!(response.text.starts_with("## Computer Science Department\n"));
        assert!(response
            .text
            .contains("### 🏢 Lab Facilities & Infrastructure"));
        for n in 1..=6 {
            assert!(response.text.contains(&format!("\n{n}. ")), "item {n}");
        }
    }

    #[test]
    fn sources_do_not_depend_on_matched_department() {
        let p = processor();
        let a = p.process("computer lab equipment");
        let b = p.process("civil engineering fee structure");
        assert_eq!(a.sources, b.sources);
    }

    #[test]
    fn empty_keyword_set_rejects_every_query() {
        let p = QueryProcessor::new(Arc::new(KnowledgeBase::new()), Vec::new());
        assert!(!p.process("computer science department lab").is_related);
    }
}

//! Response composition: turns a (department, intent) pair into the final
//! markdown answer.
//!
//! Pure function of the knowledge base and the two classification values.
//! Every branch ends in a string; there is no failing operation anywhere in
//! this path, so the composer is total and needs no error type.

use crate::classify::Intent;
use crate::knowledge::{DepartmentId, KnowledgeBase};

const FALLBACK_DEPARTMENT_NAME: &str = "UET Department";

/// Composes the answer body plus the fixed footer. Calling twice with the
/// same inputs yields byte-identical output.
pub fn compose(kb: &KnowledgeBase, department: DepartmentId, intent: Intent) -> String {
    let record = kb.get(department);
    let general = kb.general();
    let mut parts: Vec<String> = Vec::new();

    if department != DepartmentId::General {
        parts.push(format!(
            "## {}",
            record.name.unwrap_or(FALLBACK_DEPARTMENT_NAME)
        ));
        parts.push(String::new());
    }

    match intent {
        Intent::Facilities => {
            parts.push("### 🏢 Lab Facilities & Infrastructure".to_string());
            if record.facilities.is_empty() {
                parts.push(
                    "This department has state-of-the-art laboratory facilities including \
                     specialized labs, equipment, and research centers."
                        .to_string(),
                );
                parts.push(
                    "*For specific lab details, please check the department section in the UET \
                     Prospectus.*"
                        .to_string(),
                );
            } else {
                push_numbered(&mut parts, record.facilities);
            }
        }
        Intent::Admission => {
            parts.push("### 📝 Admission Requirements".to_string());
            // Department-specific block first, then the campus-wide rules.
            if !record.admission.is_empty() {
                parts.push("**Department-specific requirements:**".to_string());
                push_numbered(&mut parts, record.admission);
                parts.push(String::new());
            }
            if !general.admission.is_empty() {
                parts.push("**General requirements for all UET programs:**".to_string());
                push_numbered(&mut parts, general.admission);
            }
        }
        Intent::Courses => {
            parts.push("### 📚 Academic Programs".to_string());
            if record.courses.is_empty() {
                parts.push(format!(
                    "The {} offers both undergraduate and graduate programs.",
                    record.name.unwrap_or("department")
                ));
                parts.push(
                    "*Detailed course listings are available in the academic programs section.*"
                        .to_string(),
                );
            } else {
                push_numbered(&mut parts, record.courses);
            }
        }
        Intent::Fees => {
            // Fees are never department-specific; always read from General.
            parts.push("### 💰 Fee Structure".to_string());
            if general.fees.is_empty() {
                parts.push(
                    "Approximate tuition fee: $2,000 per semester for undergraduate programs."
                        .to_string(),
                );
                parts.push(
                    "*Exact fee details are provided in the finance section of the prospectus.*"
                        .to_string(),
                );
            } else {
                push_numbered(&mut parts, general.fees);
            }
        }
        Intent::Description => match record.description {
            Some(description) => {
                parts.push("### ℹ️ Overview".to_string());
                parts.push(description.to_string());
            }
            None => {
                parts.push(format!(
                    "### {}",
                    record.name.unwrap_or(FALLBACK_DEPARTMENT_NAME)
                ));
                parts.push(
                    "This department offers quality engineering education with modern facilities \
                     and experienced faculty."
                        .to_string(),
                );
            }
        },
        Intent::General => {
            // Fixed overview; intentionally ignores the matched department.
            parts.push("### ℹ️ UET Department Information".to_string());
            parts.push(
                "The University of Engineering and Technology (UET) offers various engineering \
                 programs through its departments:"
                    .to_string(),
            );
            parts.push(String::new());
            parts.push("- Computer Science & Information Technology".to_string());
            parts.push("- Electrical Engineering".to_string());
            parts.push("- Mechanical Engineering".to_string());
            parts.push("- Civil Engineering".to_string());
            parts.push("- Architecture & Planning".to_string());
            parts.push("- Chemical Engineering".to_string());
            parts.push(String::new());
            parts.push("For specific information, please ask about:".to_string());
            parts.push("- Lab facilities in a department".to_string());
            parts.push("- Admission requirements".to_string());
            parts.push("- Course offerings".to_string());
            parts.push("- Fee structure".to_string());
        }
    }

    parts.push(String::new());
    parts.push("---".to_string());
    parts.push("**Source:** UET Prospectus & Department Information".to_string());
    parts.push(
        "*This information is based on typical UET department offerings. Refer to the official \
         prospectus for exact details.*"
            .to_string(),
    );

    parts.join("\n")
}

/// 1-based sequential numbering with no gaps.
fn push_numbered(parts: &mut Vec<String>, items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        parts.push(format!("{}. {}", i + 1, item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
    }

    const FOOTER: &str = "---\n**Source:** UET Prospectus & Department Information\n\
        *This information is based on typical UET department offerings. Refer to the official \
         prospectus for exact details.*";

    #[test]
    fn facilities_lists_department_facilities_in_order() {
        let out = compose(&kb(), DepartmentId::ComputerScience, Intent::Facilities);
        assert!(out.starts_with("## Computer Science Department\n"));
        assert!(out.contains("### 🏢 Lab Facilities & Infrastructure"));
        assert!(out.contains("1. Advanced Computing Lab with high-performance workstations"));
        assert!(out.contains("6. Computer Architecture and Organization Lab"));
        assert!(!out.contains("7. "));
    }

    #[test]
    fn admission_renders_department_then_general_sections() {
        let out = compose(&kb(), DepartmentId::ComputerScience, Intent::Admission);
        let dept_at = out
            .find("**Department-specific requirements:**")
            .expect("department block");
        let general_at = out
            .find("**General requirements for all UET programs:**")
            .expect("general block");
        assert!(dept_at < general_at);
        assert!(out.contains("1. Minimum 60% marks in Intermediate/FSC"));
        assert!(out.contains("1. Application through UET admission portal"));
    }

    #[test]
    fn admission_without_department_list_renders_general_only() {
        let out = compose(&kb(), DepartmentId::MechanicalEngineering, Intent::Admission);
        assert!(!out.contains("**Department-specific requirements:**"));
        assert!(out.contains("**General requirements for all UET programs:**"));
    }

    #[test]
    fn fees_always_come_from_general() {
        let with_dept = compose(&kb(), DepartmentId::CivilEngineering, Intent::Fees);
        let general_only = compose(&kb(), DepartmentId::General, Intent::Fees);
        for out in [&with_dept, &general_only] {
            assert!(out.contains("### 💰 Fee Structure"));
            assert!(out.contains("1. Tuition fee: Approximately $2,000 per semester"));
            assert!(out.contains("4. Security deposit: $200 (one-time, refundable)"));
        }
        // Only the department header differs.
        assert!(with_dept.starts_with("## Civil Engineering Department\n"));
        assert!(general_only.starts_with("### 💰 Fee Structure"));
    }

    #[test]
    fn courses_fall_back_when_department_has_none() {
        let out = compose(&kb(), DepartmentId::Architecture, Intent::Courses);
        assert!(out.contains(
            "The Architecture Department offers both undergraduate and graduate programs."
        ));
        assert!(out.contains("*Detailed course listings are available"));
    }

    #[test]
    fn description_uses_record_text_or_boilerplate() {
        let described = compose(&kb(), DepartmentId::ComputerScience, Intent::Description);
        assert!(described.contains("### ℹ️ Overview"));
        assert!(described.contains("The Department of Computer Science offers cutting-edge"));

        let boilerplate = compose(&kb(), DepartmentId::CivilEngineering, Intent::Description);
        assert!(boilerplate.contains("### Civil Engineering Department"));
        assert!(boilerplate.contains("quality engineering education"));
    }

    #[test]
    fn general_intent_emits_fixed_overview_ignoring_department() {
        let a = compose(&kb(), DepartmentId::ComputerScience, Intent::General);
        let b = compose(&kb(), DepartmentId::Architecture, Intent::General);
        // Identical bodies apart from the department header lines.
        assert!(a.contains("### ℹ️ UET Department Information"));
        assert!(a.contains("- Chemical Engineering"));
        assert!(a.contains("- Fee structure"));
        assert_eq!(
            a.splitn(3, '\n').nth(2),
            b.splitn(3, '\n').nth(2),
            "overview body must not depend on the matched department"
        );
    }

    #[test]
    fn every_response_ends_with_the_fixed_footer() {
        for department in DepartmentId::all() {
            for intent in [
                Intent::Facilities,
                Intent::Admission,
                Intent::Courses,
                Intent::Fees,
                Intent::Description,
                Intent::General,
            ] {
                let out = compose(&kb(), department, intent);
                assert!(out.ends_with(FOOTER), "{department}/{intent}");
            }
        }
    }

    #[test]
    fn compose_is_idempotent() {
        let kb = kb();
        let first = compose(&kb, DepartmentId::ElectricalEngineering, Intent::Courses);
        let second = compose(&kb, DepartmentId::ElectricalEngineering, Intent::Courses);
        assert_eq!(first, second);
    }
}

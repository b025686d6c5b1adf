//! Enum-keyed, immutable lookup table of department facts.
//!
//! Record fields are `'static` data compiled into the binary; missing fields
//! are an expected state (an empty slice or `None`), not an error.

use serde::{Deserialize, Serialize};

/// Closed set of department identifiers the classifier can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentId {
    ComputerScience,
    ElectricalEngineering,
    MechanicalEngineering,
    CivilEngineering,
    Architecture,
    /// Synthetic bucket for cross-cutting facts (campus-wide admission, fees).
    General,
}

impl DepartmentId {
    /// Stable identifier string (wire/logging form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComputerScience => "computer_science",
            Self::ElectricalEngineering => "electrical_engineering",
            Self::MechanicalEngineering => "mechanical_engineering",
            Self::CivilEngineering => "civil_engineering",
            Self::Architecture => "architecture",
            Self::General => "general",
        }
    }

    /// Index into the [`KnowledgeBase`] record table.
    #[inline]
    fn index(&self) -> usize {
        *self as usize
    }

    /// All identifiers in table order.
    pub fn all() -> [Self; 6] {
        [
            Self::ComputerScience,
            Self::ElectricalEngineering,
            Self::MechanicalEngineering,
            Self::CivilEngineering,
            Self::Architecture,
            Self::General,
        ]
    }
}

impl std::fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One department's facts. Every field is optional; an empty slice means the
/// department has no data for that field and the composer falls back to
/// generic prose (or to the `General` record, for admission and fees).
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentRecord {
    pub name: Option<&'static str>,
    pub facilities: &'static [&'static str],
    pub courses: &'static [&'static str],
    pub admission: &'static [&'static str],
    pub fees: &'static [&'static str],
    pub description: Option<&'static str>,
}

const EMPTY: DepartmentRecord = DepartmentRecord {
    name: None,
    facilities: &[],
    courses: &[],
    admission: &[],
    fees: &[],
    description: None,
};

/// Read-only table of [`DepartmentRecord`]s keyed by [`DepartmentId`].
/// Constructed once before any query is processed and never mutated.
pub struct KnowledgeBase {
    records: [DepartmentRecord; 6],
}

impl KnowledgeBase {
    /// Builds the full table. Indexing must match [`DepartmentId::all`] order.
    pub fn new() -> Self {
        let computer_science = DepartmentRecord {
            name: Some("Computer Science Department"),
            facilities: &[
                "Advanced Computing Lab with high-performance workstations",
                "Network Security Lab with Cisco equipment",
                "AI & Machine Learning Research Center",
                "Software Engineering Lab with development tools",
                "Database Management Systems Lab",
                "Computer Architecture and Organization Lab",
            ],
            courses: &[
                "Bachelor of Science in Computer Science",
                "Bachelor of Science in Software Engineering",
                "Bachelor of Science in Information Technology",
                "Master of Science in Computer Science",
                "PhD in Computer Science",
                "Data Science and Machine Learning Specialization",
            ],
            admission: &[
                "Minimum 60% marks in Intermediate/FSC",
                "UET Entry Test passing score",
                "Mathematics and Physics in intermediate",
                "Interview for merit-based selection",
            ],
            description: Some(
                "The Department of Computer Science offers cutting-edge programs in computing, \
                 software development, and information technology.",
            ),
            ..EMPTY
        };

        let electrical_engineering = DepartmentRecord {
            name: Some("Electrical Engineering Department"),
            facilities: &[
                "Power Systems and High Voltage Lab",
                "Electronics and Circuit Design Lab",
                "Control Systems and Automation Lab",
                "Telecommunications and Signal Processing Lab",
                "Electrical Machines and Drives Lab",
                "Renewable Energy Research Center",
            ],
            courses: &[
                "Bachelor of Science in Electrical Engineering",
                "Bachelor of Science in Electronics Engineering",
                "Master of Science in Power Systems",
                "Master of Science in Electronics",
                "PhD in Electrical Engineering",
            ],
            admission: &[
                "Minimum 60% marks in Intermediate/FSC",
                "Physics, Chemistry, and Mathematics required",
                "UET Entry Test qualification",
                "Pre-engineering background preferred",
            ],
            ..EMPTY
        };

        let mechanical_engineering = DepartmentRecord {
            name: Some("Mechanical Engineering Department"),
            facilities: &[
                "Thermodynamics and Heat Transfer Lab",
                "Fluid Mechanics and Hydraulics Lab",
                "Manufacturing and Workshop",
                "CAD/CAM Design Center",
                "Materials Testing Lab",
                "Automotive Engineering Lab",
            ],
            ..EMPTY
        };

        let civil_engineering = DepartmentRecord {
            name: Some("Civil Engineering Department"),
            facilities: &[
                "Structural Engineering Lab",
                "Concrete and Materials Testing Lab",
                "Surveying and Geomatics Lab",
                "Environmental Engineering Lab",
                "Transportation Engineering Lab",
                "Geotechnical Engineering Lab",
            ],
            ..EMPTY
        };

        let architecture = DepartmentRecord {
            name: Some("Architecture Department"),
            facilities: &[
                "Architectural Design Studio",
                "Building Information Modeling (BIM) Lab",
                "Model Making Workshop",
                "Urban Planning Studio",
                "Digital Fabrication Lab",
                "Environmental Design Research Center",
            ],
            ..EMPTY
        };

        let general = DepartmentRecord {
            admission: &[
                "Application through UET admission portal",
                "Entry test for all engineering programs",
                "Intermediate/FSC with minimum 60% marks",
                "Merit-based selection",
                "Interview for certain departments",
            ],
            fees: &[
                "Tuition fee: Approximately $2,000 per semester for undergraduate programs",
                "Lab charges: $100-200 per semester",
                "Hostel fee: $500 per semester (if applicable)",
                "Security deposit: $200 (one-time, refundable)",
            ],
            ..EMPTY
        };

        Self {
            records: [
                computer_science,
                electrical_engineering,
                mechanical_engineering,
                civil_engineering,
                architecture,
                general,
            ],
        }
    }

    /// Returns the record for the given department.
    #[inline]
    pub fn get(&self, id: DepartmentId) -> &DepartmentRecord {
        &self.records[id.index()]
    }

    /// Shortcut for the cross-cutting `General` record.
    #[inline]
    pub fn general(&self) -> &DepartmentRecord {
        self.get(DepartmentId::General)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

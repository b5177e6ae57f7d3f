use serde::{Deserialize, Serialize};

/// One row of the admission roster exactly as the spreadsheet export spells
/// it, before any cleaning. Serde renames bind the struct to the export's
/// column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawApplicantRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "National_ID")]
    pub national_id: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Program")]
    pub program: String,
    #[serde(rename = "Semester")]
    pub semester: String,
    #[serde(rename = "Bachelor_Major")]
    pub bachelor_major: String,
    #[serde(rename = "Graduated_From")]
    pub graduated_from: String,
    #[serde(rename = "GPA")]
    pub gpa: String,
    #[serde(rename = "Tests_Taken")]
    pub tests_taken: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Aptitude_Score")]
    pub aptitude_score: String,
}

/// The cleaned applicant shape every later stage consumes. Categorical cells
/// are trimmed verbatim strings (empty means the cell was blank); the numeric
/// fields are derived exactly once at intake and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub status: String,
    pub program: String,
    pub semester: String,
    pub bachelor_major: String,
    pub graduated_from: String,
    pub gender: String,
    /// The GPA cell as submitted, kept for audits and row search.
    pub gpa_raw: String,
    /// GPA on the canonical 0-5 scale, `None` when the cell was blank,
    /// unparseable, untagged, or out of range.
    pub gpa_normalized: Option<f64>,
    /// Standardized aptitude exam result, `None` when not numeric.
    pub aptitude_score: Option<f64>,
    /// Count of admission tests taken; unparseable cells coerce to zero.
    pub tests_taken: f64,
    /// Home-institution bonus input: the full bonus or zero, never between.
    pub home_institution_flag: f64,
}

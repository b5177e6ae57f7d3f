use super::common::*;
use crate::cohort::filter::{
    distinct_majors, distinct_programs, distinct_universities, search_records, CohortFilter,
    ProgramSelector,
};

fn mixed_cohort() -> Vec<crate::cohort::domain::ApplicantRecord> {
    vec![
        applicant("Sara Alharbi", "MSc Computer Science", "Computer Science", HOME_INSTITUTION),
        applicant("Omar Alotaibi", "MSc Computer Science", "Information Systems", OTHER_UNIVERSITY),
        applicant("Huda Alqahtani", "MBA", "Accounting", OTHER_UNIVERSITY),
        applicant("Fahad Alshehri", "MBA", "Computer Science", HOME_INSTITUTION),
    ]
}

#[test]
fn default_filter_keeps_everything() {
    let cohort = mixed_cohort();
    let kept = CohortFilter::default().apply(&cohort);
    assert_eq!(kept, cohort);
}

#[test]
fn program_stage_matches_exactly() {
    let cohort = mixed_cohort();
    let kept = CohortFilter::for_program("MBA").apply(&cohort);
    assert_eq!(names(&kept), vec!["Huda Alqahtani", "Fahad Alshehri"]);

    let kept = CohortFilter::for_program("MB").apply(&cohort);
    assert!(kept.is_empty());
}

#[test]
fn major_allow_list_is_absolute() {
    let cohort = mixed_cohort();
    let filter = CohortFilter {
        majors: allow(&["Computer Science"]),
        ..CohortFilter::default()
    };

    let kept = filter.apply(&cohort);
    assert_eq!(names(&kept), vec!["Sara Alharbi", "Fahad Alshehri"]);
}

#[test]
fn empty_allow_list_excludes_every_record() {
    let cohort = mixed_cohort();
    let filter = CohortFilter {
        majors: allow(&[]),
        ..CohortFilter::default()
    };
    assert!(filter.apply(&cohort).is_empty());

    // Even when the other stages would keep everything.
    let filter = CohortFilter {
        program: ProgramSelector::All,
        majors: None,
        universities: allow(&[]),
    };
    assert!(filter.apply(&cohort).is_empty());
}

#[test]
fn stages_intersect_in_cascade_order() {
    let cohort = mixed_cohort();
    let filter = CohortFilter {
        program: ProgramSelector::Only("MSc Computer Science".to_string()),
        majors: allow(&["Computer Science", "Information Systems"]),
        universities: allow(&[HOME_INSTITUTION]),
    };

    let kept = filter.apply(&cohort);
    assert_eq!(names(&kept), vec!["Sara Alharbi"]);
}

#[test]
fn filtering_preserves_order_and_input() {
    let cohort = mixed_cohort();
    let filter = CohortFilter {
        universities: allow(&[OTHER_UNIVERSITY]),
        ..CohortFilter::default()
    };

    let kept = filter.apply(&cohort);
    assert_eq!(names(&kept), vec!["Omar Alotaibi", "Huda Alqahtani"]);
    // The source roster is untouched.
    assert_eq!(cohort.len(), 4);
}

#[test]
fn allow_lists_of_every_distinct_value_change_nothing() {
    let cohort = mixed_cohort();
    let filter = CohortFilter {
        program: ProgramSelector::All,
        majors: Some(distinct_majors(&cohort).into_iter().collect()),
        universities: Some(distinct_universities(&cohort).into_iter().collect()),
    };

    assert_eq!(filter.apply(&cohort), cohort);
}

#[test]
fn distinct_values_are_sorted_and_deduplicated() {
    let cohort = mixed_cohort();

    assert_eq!(distinct_programs(&cohort), vec!["MBA", "MSc Computer Science"]);
    assert_eq!(
        distinct_majors(&cohort),
        vec!["Accounting", "Computer Science", "Information Systems"]
    );
    assert_eq!(
        distinct_universities(&cohort),
        vec![OTHER_UNIVERSITY, HOME_INSTITUTION]
    );
}

#[test]
fn distinct_values_skip_blank_cells() {
    let mut cohort = mixed_cohort();
    cohort[0].bachelor_major = String::new();

    assert_eq!(
        distinct_majors(&cohort),
        vec!["Accounting", "Computer Science", "Information Systems"]
    );
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let cohort = mixed_cohort();

    assert_eq!(names(&search_records(&cohort, "omar")), vec!["Omar Alotaibi"]);
    assert_eq!(names(&search_records(&cohort, "ACCOUNTING")), vec!["Huda Alqahtani"]);
    assert_eq!(search_records(&cohort, "nonexistent"), Vec::new());
}

#[test]
fn search_covers_the_raw_gpa_cell() {
    let mut cohort = mixed_cohort();
    cohort[2].gpa_raw = "88/100".to_string();

    assert_eq!(names(&search_records(&cohort, "88/100")), vec!["Huda Alqahtani"]);
}

#[test]
fn blank_search_term_matches_all_records() {
    let cohort = mixed_cohort();
    assert_eq!(search_records(&cohort, "   "), cohort);
}

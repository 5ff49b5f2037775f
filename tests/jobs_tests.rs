// Tests for the in-memory job catalog and its filtering

use interview_service::jobs::{JobCatalog, JobFilter};

#[test]
fn test_demo_catalog_is_seeded() {
    let catalog = JobCatalog::with_demo_listings();

    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), 6);

    let job = catalog.get("1").expect("job 1");
    assert_eq!(job.company, "TechVision Inc.");
    assert!(catalog.get("does-not-exist").is_none());
}

#[test]
fn test_empty_filter_matches_everything() {
    let catalog = JobCatalog::with_demo_listings();
    let results = catalog.search(&JobFilter::default());

    assert_eq!(results.len(), catalog.len());
}

#[test]
fn test_text_query_matches_title_company_and_skills() {
    let catalog = JobCatalog::with_demo_listings();

    let by_title = catalog.search(&JobFilter {
        query: Some("frontend".to_string()),
        ..JobFilter::default()
    });
    assert!(by_title.iter().any(|j| j.title == "Senior Frontend Engineer"));

    let by_company = catalog.search(&JobFilter {
        query: Some("datamind".to_string()),
        ..JobFilter::default()
    });
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].company, "DataMind AI");

    let by_skill = catalog.search(&JobFilter {
        query: Some("kubernetes".to_string()),
        ..JobFilter::default()
    });
    assert_eq!(by_skill.len(), 2);

    let no_match = catalog.search(&JobFilter {
        query: Some("zzzz".to_string()),
        ..JobFilter::default()
    });
    assert!(no_match.is_empty());
}

#[test]
fn test_whitespace_query_is_ignored() {
    let catalog = JobCatalog::with_demo_listings();
    let results = catalog.search(&JobFilter {
        query: Some("   ".to_string()),
        ..JobFilter::default()
    });
    assert_eq!(results.len(), catalog.len());
}

#[test]
fn test_experience_and_location_filters() {
    let catalog = JobCatalog::with_demo_listings();

    let entry_level = catalog.search(&JobFilter {
        experience: vec!["Entry Level".to_string()],
        ..JobFilter::default()
    });
    assert_eq!(entry_level.len(), 1);
    assert_eq!(entry_level[0].company, "Vertex Systems");

    let multi = catalog.search(&JobFilter {
        experience: vec!["Entry Level".to_string(), "1-2 years".to_string()],
        ..JobFilter::default()
    });
    assert_eq!(multi.len(), 2);

    let austin = catalog.search(&JobFilter {
        locations: vec!["Austin, TX".to_string()],
        ..JobFilter::default()
    });
    assert_eq!(austin.len(), 1);
    assert_eq!(austin[0].company, "BrightPath Labs");
}

#[test]
fn test_salary_band_matches_on_overlap() {
    let catalog = JobCatalog::with_demo_listings();

    // Band that overlaps the 140-180 listing but not the 70-95 one
    let high = catalog.search(&JobFilter {
        salary_min_k: Some(160),
        ..JobFilter::default()
    });
    assert!(high.iter().any(|j| j.id == "1"));
    assert!(!high.iter().any(|j| j.id == "6"));

    let low = catalog.search(&JobFilter {
        salary_max_k: Some(100),
        ..JobFilter::default()
    });
    assert!(low.iter().any(|j| j.id == "6"));
    assert!(!low.iter().any(|j| j.id == "1"));

    // A band no listing reaches
    let none = catalog.search(&JobFilter {
        salary_min_k: Some(300),
        ..JobFilter::default()
    });
    assert!(none.is_empty());
}

#[test]
fn test_filters_are_conjunctive() {
    let catalog = JobCatalog::with_demo_listings();

    let results = catalog.search(&JobFilter {
        query: Some("engineer".to_string()),
        experience: vec!["3-5 years".to_string()],
        salary_min_k: Some(150),
        ..JobFilter::default()
    });

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].company, "DataMind AI");
}

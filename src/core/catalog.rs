// Blueprint - core/catalog.rs
//
// Company catalog: the built-in sample fixture and validation of
// user-supplied catalog JSON.
// Core layer: no file I/O. Reading from disk lives in app::catalog_mgr.

use crate::core::model::CompanyRecord;
use crate::util::constants;
use crate::util::error::CatalogError;
use std::path::Path;

/// Built-in sample records: (name, industry, size, location, founded,
/// employees, funding, image).
const SAMPLE_COMPANIES: &[(&str, &str, &str, &str, &str, &str, &str, &str)] = &[
    (
        "TechCorp Inc.",
        "Software",
        "Large (501-5000)",
        "San Francisco",
        "2010",
        "2,500",
        "$150M",
        "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "AI Innovations",
        "AI/ML",
        "Medium (51-500)",
        "Boston",
        "2018",
        "250",
        "$45M",
        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "GameStudio Pro",
        "Gaming",
        "Startup (1-50)",
        "Austin",
        "2021",
        "35",
        "$8M",
        "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "FinanceFlow",
        "Fintech",
        "Medium (51-500)",
        "New York",
        "2016",
        "450",
        "$85M",
        "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "HealthTech Solutions",
        "Healthcare",
        "Large (501-5000)",
        "Seattle",
        "2012",
        "1,800",
        "$200M",
        "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "CloudSync Systems",
        "Software",
        "Medium (51-500)",
        "Remote",
        "2019",
        "180",
        "$32M",
        "https://images.unsplash.com/photo-1486312338219-ce68e2c6f44d?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "RoboTech Dynamics",
        "Hardware",
        "Large (501-5000)",
        "Los Angeles",
        "2008",
        "3,200",
        "$320M",
        "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&h=400&fit=crop&crop=center",
    ),
    (
        "SocialConnect",
        "Social Media",
        "Enterprise (5000+)",
        "San Francisco",
        "2005",
        "12,000",
        "$1.2B",
        "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=400&fit=crop&crop=center",
    ),
];

/// The built-in directory fixture.
pub fn sample_companies() -> Vec<CompanyRecord> {
    SAMPLE_COMPANIES
        .iter()
        .map(
            |&(name, industry, size, location, founded, employees, funding, image)| {
                CompanyRecord {
                    name: name.to_string(),
                    industry: industry.to_string(),
                    size: size.to_string(),
                    location: location.to_string(),
                    founded: founded.to_string(),
                    employees: employees.to_string(),
                    funding: funding.to_string(),
                    image: Some(image.to_string()),
                }
            },
        )
        .collect()
}

/// Parse catalog JSON (an array of records) and validate it.
///
/// `source_path` is used for error messages only (not for I/O).
pub fn parse_catalog_json(
    content: &str,
    source_path: &Path,
) -> Result<Vec<CompanyRecord>, CatalogError> {
    let records: Vec<CompanyRecord> =
        serde_json::from_str(content).map_err(|e| CatalogError::JsonParse {
            path: source_path.to_path_buf(),
            source: e,
        })?;
    validate_records(records, source_path)
}

/// Check record count limits and required fields.
///
/// Empty image URLs are normalised to `None`.
pub fn validate_records(
    mut records: Vec<CompanyRecord>,
    source_path: &Path,
) -> Result<Vec<CompanyRecord>, CatalogError> {
    if records.is_empty() {
        return Err(CatalogError::Empty {
            path: source_path.to_path_buf(),
        });
    }
    if records.len() > constants::MAX_CATALOG_RECORDS {
        return Err(CatalogError::TooManyRecords {
            count: records.len(),
            max: constants::MAX_CATALOG_RECORDS,
        });
    }

    for (index, record) in records.iter_mut().enumerate() {
        let required = [
            ("name", record.name.as_str()),
            ("industry", record.industry.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::MissingField { index, field });
            }
        }
        if record.image.as_deref().is_some_and(|url| url.trim().is_empty()) {
            record.image = None;
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FilterCategory;

    #[test]
    fn test_sample_fixture_has_eight_records() {
        let companies = sample_companies();
        assert_eq!(companies.len(), 8);
        assert_eq!(companies[0].name, "TechCorp Inc.");
        assert_eq!(companies[7].funding, "$1.2B");
        assert!(companies.iter().all(|c| c.image.is_some()));
    }

    #[test]
    fn test_sample_values_come_from_option_tables() {
        let industries = FilterCategory::Industry.options();
        let sizes = FilterCategory::Size.options();
        let locations = FilterCategory::Location.options();
        for c in sample_companies() {
            assert!(industries.contains(&c.industry.as_str()), "{}", c.industry);
            assert!(sizes.contains(&c.size.as_str()), "{}", c.size);
            assert!(locations.contains(&c.location.as_str()), "{}", c.location);
        }
    }

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"[
            {"name":"Acme","industry":"Hardware","size":"Startup (1-50)",
             "location":"Austin","founded":"2022","employees":"12","funding":"$1M",
             "image":""}
        ]"#;
        let records = parse_catalog_json(json, Path::new("acme.json")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].image, None, "blank image normalised to None");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_catalog_json("{not json", Path::new("bad.json"));
        assert!(matches!(result, Err(CatalogError::JsonParse { .. })));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = parse_catalog_json("[]", Path::new("empty.json"));
        assert!(matches!(result, Err(CatalogError::Empty { .. })));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut records = sample_companies();
        records[3].name = "   ".to_string();
        let result = validate_records(records, Path::new("x.json"));
        assert!(matches!(
            result,
            Err(CatalogError::MissingField {
                index: 3,
                field: "name"
            })
        ));
    }

    #[test]
    fn test_too_many_records_rejected() {
        let one = sample_companies().remove(0);
        let records = vec![one; constants::MAX_CATALOG_RECORDS + 1];
        let result = validate_records(records, Path::new("big.json"));
        assert!(matches!(result, Err(CatalogError::TooManyRecords { .. })));
    }
}

use crate::utils::{classify_without_accounts, single_person};
use dossier::utils::quiet_config;
use dossier::utils::test::{classify_quietly, sample_accounts, sample_directory};
use dossier::{
    BatchDriver, ClassificationRow, InMemoryDirectory, NOT_FOUND, NoAccounts, ReductionLevel,
    SearchFilter,
};

#[tokio::test]
async fn test_scenario_unresolved_token_row() {
    let directory = InMemoryDirectory::new();
    let report = classify_without_accounts(&directory, &["bigfoot"], ReductionLevel::Full).await;

    assert_eq!(report.not_found, 1);
    assert_eq!(report.unreachable, 0);
    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row, &ClassificationRow::not_found("bigfoot"));
    assert!(row.values().iter().enumerate().all(|(i, value)| {
        if ClassificationRow::COLUMNS[i] == "NETID" {
            *value == Some("bigfoot")
        } else {
            value.is_none()
        }
    }));
}

#[tokio::test]
async fn test_sample_batch_rows() {
    let directory = sample_directory();
    let accounts = sample_accounts();
    let tokens = ["rcar", "halverson", "alovelace", "cpena", "ghopper", "sclaus", "bigfoot"];
    let report = classify_quietly(&directory, &accounts, &tokens, ReductionLevel::Full).await;

    let netids: Vec<&str> = report.rows.iter().map(|row| row.netid.as_str()).collect();
    assert_eq!(netids, tokens);
    assert_eq!(report.not_found, 1);
    assert_eq!(report.resolved(), 6);

    let faculty = &report.rows[0];
    assert_eq!(faculty.name.as_deref(), Some("Roberto Car"));
    assert_eq!(faculty.dept.as_deref(), Some("CHEM"));
    assert_eq!(faculty.position.as_deref(), Some("Faculty"));
    assert_eq!(faculty.title.as_deref(), Some("Professor of Chemistry and the PRISM"));
    assert_eq!(faculty.sponsor, None);

    let staff = &report.rows[1];
    assert_eq!(staff.netid_true.as_deref(), Some("jdh4"));
    assert_eq!(staff.dept.as_deref(), Some("CSES"));
    assert_eq!(staff.position.as_deref(), Some("Staff"));
    assert_eq!(staff.office.as_deref(), Some("Research Computing, Lewis Library"));
    assert_eq!(staff.sponsor.as_deref(), Some("Hillegas"));

    let graduate = &report.rows[2];
    assert_eq!(graduate.position.as_deref(), Some("G5"));
    assert_eq!(graduate.acad_level.as_deref(), Some("G5"));

    let affiliate = &report.rows[3];
    assert_eq!(affiliate.name.as_deref(), Some("Catherine J. Peña"));
    assert_eq!(affiliate.dept.as_deref(), Some("MOLBIO"));
    assert_eq!(affiliate.position.as_deref(), Some("DCU (formerly G4)"));
    assert_eq!(affiliate.sponsor.as_deref(), Some("Seyedsayamdost"));

    let undergraduate = &report.rows[4];
    assert_eq!(undergraduate.dept.as_deref(), Some("UDG2026"));
    assert_eq!(undergraduate.position.as_deref(), Some("U2026"));

    let unlisted = &report.rows[5];
    assert_eq!(unlisted.dept.as_deref(), Some(NOT_FOUND));
    assert!(report.missing_departments.contains("North Pole Logistics"));
    assert_eq!(report.missing_departments.len(), 1);
}

#[tokio::test]
async fn test_sample_batch_coarse_level() {
    let directory = sample_directory();
    let tokens = ["rcar", "jdh4", "alovelace", "cpena", "ghopper"];
    let report = classify_without_accounts(&directory, &tokens, ReductionLevel::Coarse).await;

    let positions: Vec<&str> = report
        .rows
        .iter()
        .map(|row| row.position.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(positions, vec!["Faculty", "Staff", "Graduate", "DCU/RCU/RU", "Undergrad"]);
}

#[tokio::test]
async fn test_unreachable_directory_is_counted() {
    let directory = InMemoryDirectory::new()
        .with_failure(SearchFilter::Uid("jdh4".into()))
        .with_failure(SearchFilter::Mail("jdh4@princeton.edu".into()))
        .with_person("rcar", &["pustatus: fac", "title: Professor"]);
    let report =
        classify_without_accounts(&directory, &["jdh4", "rcar", "jdh4"], ReductionLevel::Full)
            .await;

    assert_eq!(report.not_found, 2);
    assert_eq!(report.unreachable, 2);
    assert_eq!(report.rows[1].position.as_deref(), Some("Faculty"));
    assert_eq!(report.rows[2], ClassificationRow::not_found("jdh4"));
}

#[tokio::test]
async fn test_office_only_overrides_placeholder_departments() {
    let directory = InMemoryDirectory::new()
        .with_person("phys", &["ou: Physics", "eduPersonPrimaryAffiliation: staff"])
        .with_person("unsp", &["ou: Unspecified Department"]);
    let accounts = dossier::InMemoryAccounts::new()
        .with_office("phys", "Chemistry, Frick Lab")
        .with_office("unsp", "Chemistry, Frick Lab");
    let report = classify_quietly(&directory, &accounts, &["phys", "unsp"], ReductionLevel::Full).await;

    assert_eq!(report.rows[0].dept.as_deref(), Some("PHYS"));
    assert_eq!(report.rows[1].dept.as_deref(), Some("CHEM"));
    assert_eq!(report.rows[0].office.as_deref(), Some("Chemistry, Frick Lab"));
}

#[tokio::test]
async fn test_position_of_single_token() {
    let directory = single_person("alovelace", &["pustatus: graduate", "puacademiclevel: G5"]);
    let config = quiet_config();
    let driver = BatchDriver::new(&directory, &NoAccounts, &config);
    assert_eq!(driver.position_of("alovelace").await, "G5");
    assert_eq!(driver.position_of("nobody").await, dossier::UNKNOWN);
}

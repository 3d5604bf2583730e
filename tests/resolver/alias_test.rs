use dossier::directory::memory::ldif_response;
use dossier::utils::test::sample_directory;
use dossier::{AliasResolver, Identity, InMemoryDirectory, ResolutionOutcome, SearchFilter, Strategy};

#[tokio::test]
async fn test_login_identifier_resolves_on_primary() {
    let directory = sample_directory();
    let resolver = AliasResolver::new(&directory, "princeton.edu");
    let resolution = resolver.resolve("rcar").await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Resolved(Strategy::Primary));
    assert_eq!(resolution.identity, Identity::resolved("rcar", "rcar"));
    assert!(!resolution.identity.is_alias());
    let lookup = resolution.lookup.expect("matched lookup");
    assert_eq!(lookup.record.first("displayName"), Some("Roberto Car"));
}

#[tokio::test]
async fn test_email_alias_resolves_on_fallback() {
    let directory = sample_directory();
    let resolver = AliasResolver::new(&directory, "princeton.edu");
    let resolution = resolver.resolve("halverson").await;

    assert_eq!(resolution.outcome, ResolutionOutcome::Resolved(Strategy::Fallback));
    assert_eq!(resolution.identity.true_id.as_deref(), Some("jdh4"));
    assert!(resolution.identity.is_alias());
    assert!(!resolution.primary_exception);
}

#[tokio::test]
async fn test_unknown_token_tries_both_strategies() {
    let directory = sample_directory();
    let resolver = AliasResolver::new(&directory, "princeton.edu");
    let resolution = resolver.resolve("bigfoot").await;

    assert_eq!(resolution.outcome, ResolutionOutcome::NotFound);
    assert!(resolution.lookup.is_none());
    assert_eq!(
        directory.queries(),
        vec![
            SearchFilter::Uid("bigfoot".into()),
            SearchFilter::Mail("bigfoot@princeton.edu".into()),
        ]
    );
}

#[tokio::test]
async fn test_custom_email_domain() {
    let directory =
        InMemoryDirectory::new().with_mail("ada@example.org", "alovelace", &["pustatus: graduate"]);
    let resolver = AliasResolver::new(&directory, "example.org");
    let resolution = resolver.resolve("ada").await;
    assert_eq!(resolution.identity.true_id.as_deref(), Some("alovelace"));
}

#[tokio::test]
async fn test_ambiguous_fallback_is_not_found() {
    let filter = SearchFilter::Mail("smith@princeton.edu".into());
    let body = ldif_response(&filter, &[vec!["uid: asmith"], vec!["uid: bsmith"]]);
    let directory = InMemoryDirectory::new().with_response(filter, body);
    let resolver = AliasResolver::new(&directory, "princeton.edu");
    let resolution = resolver.resolve("smith").await;

    assert_eq!(resolution.outcome, ResolutionOutcome::NotFound);
    assert_eq!(resolution.identity, Identity::unresolved("smith"));
}

#[tokio::test]
async fn test_fallback_fault_after_clean_miss_is_not_found() {
    let directory =
        InMemoryDirectory::new().with_failure(SearchFilter::Mail("ghost@princeton.edu".into()));
    let resolver = AliasResolver::new(&directory, "princeton.edu");
    let resolution = resolver.resolve("ghost").await;

    assert_eq!(resolution.outcome, ResolutionOutcome::NotFound);
    assert!(!resolution.primary_exception);
    assert!(resolution.fallback_exception);
}

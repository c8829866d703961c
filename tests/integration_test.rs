/// Integration tests for the application layer
mod test_utilities;

use std::collections::BTreeSet;

use comply_scan::prelude::*;
use test_utilities::mocks::*;

fn rgpd_pii_selection() -> CheckSelection {
    CheckSelection::from_categories([CheckCategory::Rgpd, CheckCategory::Pii])
}

#[tokio::test]
async fn test_end_to_end_submission_happy_path() {
    let analyzer = MockAnalyzer::new();
    let scheduler = InstantScheduler::new();
    let progress_reporter = MockProgressReporter::new();
    let use_case =
        RunAnalysisUseCase::new(analyzer.clone(), scheduler.clone(), progress_reporter.clone());

    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new("https://github.com/acme/widgets", rgpd_pii_selection());
    let submission = use_case.execute(&mut lifecycle, request).await.unwrap();

    // The lifecycle reached Completed with the analyzer's result stored.
    let Submission::Completed(response) = submission else {
        panic!("expected a completed submission");
    };
    assert!(lifecycle.is_completed());
    assert_eq!(
        response.result.repository_reference().as_str(),
        "https://github.com/acme/widgets"
    );

    // The analyzer was invoked exactly once, with exactly {rgpd, pii}.
    let invocations = analyzer.invocations();
    assert_eq!(invocations.len(), 1);
    let expected: BTreeSet<CheckCategory> = [CheckCategory::Rgpd, CheckCategory::Pii]
        .into_iter()
        .collect();
    assert_eq!(invocations[0].1, expected);

    // Progress ran its full deterministic tick sequence.
    let progress_messages: Vec<String> = progress_reporter
        .get_messages()
        .into_iter()
        .filter(|m| m.starts_with("Progress:"))
        .collect();
    assert_eq!(progress_messages.len(), 20);
    assert!(progress_messages
        .last()
        .unwrap()
        .contains("Génération du rapport..."));
}

#[tokio::test]
async fn test_invalid_reference_rejected_before_lifecycle_starts() {
    let analyzer = MockAnalyzer::new();
    let use_case = RunAnalysisUseCase::new(
        analyzer.clone(),
        InstantScheduler::new(),
        MockProgressReporter::new(),
    );

    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new("github.com/acme", rgpd_pii_selection());
    let result = use_case.execute(&mut lifecycle, request).await;

    assert!(result.is_err());
    assert!(lifecycle.is_idle());
    assert!(analyzer.invocations().is_empty());
}

#[tokio::test]
async fn test_analyzer_failure_surfaces_and_returns_to_idle() {
    let analyzer = MockAnalyzer::with_failure("clone timed out");
    let progress_reporter = MockProgressReporter::new();
    let use_case = RunAnalysisUseCase::new(
        analyzer,
        InstantScheduler::new(),
        progress_reporter.clone(),
    );

    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new("https://github.com/acme/widgets", rgpd_pii_selection());
    let result = use_case.execute(&mut lifecycle, request).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("clone timed out"));
    assert!(lifecycle.is_idle());
    assert!(lifecycle.result().is_none());
    assert!(progress_reporter
        .get_messages()
        .iter()
        .any(|m| m.starts_with("Error:")));
}

#[tokio::test]
async fn test_resubmission_after_failure_succeeds() {
    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new("https://github.com/acme/widgets", rgpd_pii_selection());

    let failing = RunAnalysisUseCase::new(
        MockAnalyzer::with_failure("network unreachable"),
        InstantScheduler::new(),
        MockProgressReporter::new(),
    );
    assert!(failing
        .execute(&mut lifecycle, request.clone())
        .await
        .is_err());
    assert!(lifecycle.is_idle());

    // Explicit user-initiated retry with the preserved input.
    let succeeding = RunAnalysisUseCase::new(
        MockAnalyzer::new(),
        InstantScheduler::new(),
        MockProgressReporter::new(),
    );
    let submission = succeeding.execute(&mut lifecycle, request).await.unwrap();
    assert!(matches!(submission, Submission::Completed(_)));
    assert!(lifecycle.is_completed());
}

#[tokio::test]
async fn test_caching_analyzer_repeats_identical_findings() {
    let analyzer = CachingAnalyzer::new(DemoAnalyzer::new());
    let reference = RepositoryReference::parse("https://github.com/acme/widgets").unwrap();
    let checks: BTreeSet<CheckCategory> = [CheckCategory::Rgpd].into_iter().collect();

    let first = analyzer.analyze(&reference, &checks).await.unwrap();
    let second = analyzer.analyze(&reference, &checks).await.unwrap();

    // The cached replay is byte-for-byte the same result, metadata included.
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_session_expansion_survives_filter_round_trip() {
    let preference_store = MockPreferenceStore::new();
    let mut session = Session::initialize(&preference_store);

    let analyzer = DemoAnalyzer::new();
    let reference = RepositoryReference::parse("https://github.com/acme/widgets").unwrap();
    let checks: BTreeSet<CheckCategory> = [CheckCategory::Rgpd].into_iter().collect();
    let result = analyzer.analyze(&reference, &checks).await.unwrap();

    // Expand risk "3" (critical), filter down to low risks, then back to all.
    session.toggle_risk_expanded("3");
    session.set_risk_filter(RiskFilter::Level(RiskLevel::Low));
    let visible_ids: Vec<&str> = session
        .visible_risks(&result)
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(visible_ids, vec!["7", "8"]);
    assert!(session.is_risk_expanded("3"));

    session.set_risk_filter(RiskFilter::All);
    assert!(session.is_risk_expanded("3"));
    assert_eq!(session.visible_risks(&result).len(), 8);
}

#[tokio::test]
async fn test_session_dark_mode_round_trip() {
    let preference_store = MockPreferenceStore::with_value(DARK_MODE_KEY, true);
    let mut session = Session::initialize(&preference_store);
    assert!(session.dark_mode());

    session.toggle_dark_mode(&preference_store).unwrap();
    assert!(!session.dark_mode());
    assert_eq!(preference_store.write_count(), 1);
    assert_eq!(
        preference_store.load_bool(DARK_MODE_KEY).unwrap(),
        Some(false)
    );
}

#[tokio::test]
async fn test_markdown_report_from_demo_analysis() {
    let use_case = RunAnalysisUseCase::new(
        DemoAnalyzer::new(),
        InstantScheduler::new(),
        MockProgressReporter::new(),
    );

    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new(
        "https://github.com/acme/widgets",
        CheckSelection::defaults(),
    );
    let Submission::Completed(response) =
        use_case.execute(&mut lifecycle, request).await.unwrap()
    else {
        panic!("expected a completed submission");
    };

    let report = MarkdownReportFormatter::new()
        .format(&response.result)
        .unwrap();
    assert!(report.contains("# Rapport de conformité — acme/widgets"));
    assert!(report.contains("**67/100** — 🟠 Attention requise"));
    assert!(report.contains("Risques et recommandations (8 total)"));
    assert!(report.contains("Plan d'action recommandé"));
    assert!(report.contains("Services tiers et flux de données"));
    assert!(report.contains("Détail de conformité"));
}

#[tokio::test]
async fn test_json_report_round_trips_the_result() {
    let use_case = RunAnalysisUseCase::new(
        DemoAnalyzer::new(),
        InstantScheduler::new(),
        MockProgressReporter::new(),
    );

    let mut lifecycle = AnalysisLifecycle::new();
    let request = AnalysisRequest::new(
        "https://github.com/acme/widgets",
        CheckSelection::defaults(),
    );
    let Submission::Completed(response) =
        use_case.execute(&mut lifecycle, request).await.unwrap()
    else {
        panic!("expected a completed submission");
    };

    let json = JsonReportFormatter::new().format(&response.result).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, response.result);
    assert!(back.validate().is_ok());
}

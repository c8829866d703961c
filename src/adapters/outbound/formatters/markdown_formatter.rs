use crate::compliance::domain::{
    Action, AnalysisResult, ComplianceBreakdownEntry, PiiFinding, Risk, Score, ServiceFlow,
};
use crate::compliance::services::{RiskAggregator, RiskFilter};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for category sub-scores
const SCORE_TABLE_HEADER: &str = "| Catégorie | Score | Évaluation |\n";
const SCORE_TABLE_SEPARATOR: &str = "|-----------|-------|------------|\n";

/// Markdown table header for PII findings
const PII_TABLE_HEADER: &str = "| Type de donnée | Occurrences |\n";
const PII_TABLE_SEPARATOR: &str = "|----------------|-------------|\n";

/// Markdown table header for third-party service flows
const SERVICE_TABLE_HEADER: &str =
    "| Service | Données partagées | Hébergement | UE | Statut |\n";
const SERVICE_TABLE_SEPARATOR: &str =
    "|---------|-------------------|-------------|----|--------|\n";

/// MarkdownReportFormatter adapter rendering a full compliance report.
///
/// The risks section honors the configured risk filter; every other
/// section always shows the complete result.
pub struct MarkdownReportFormatter {
    risk_filter: RiskFilter,
}

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self {
            risk_filter: RiskFilter::All,
        }
    }

    /// Restricts the risks section to the given filter.
    pub fn with_risk_filter(mut self, risk_filter: RiskFilter) -> Self {
        self.risk_filter = risk_filter;
        self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn score_cell(score: Score) -> String {
        let tier = score.tier();
        format!("{}/100 | {} {}", score, tier.emoji(), tier.label())
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, result: &AnalysisResult) {
        let reference = result.repository_reference();
        output.push_str(&format!(
            "# Rapport de conformité — {}\n\n",
            Self::escape_table_cell(&reference.repo_name())
        ));
        output.push_str(&format!("Repository analysé : {}\n\n", reference.as_str()));
        let metadata = result.metadata();
        output.push_str(&format!(
            "Généré le {} par {} v{}\n\n",
            metadata.generated_at().to_rfc3339(),
            metadata.tool_name(),
            metadata.tool_version()
        ));
    }

    fn render_overall_score(&self, output: &mut String, result: &AnalysisResult) {
        let score = result.overall_score();
        let tier = score.tier();
        output.push_str("## Score global\n\n");
        output.push_str(&format!(
            "**{}/100** — {} {}\n\n",
            score,
            tier.emoji(),
            tier.label()
        ));
        output.push_str("### Scores par catégorie\n\n");
        output.push_str(SCORE_TABLE_HEADER);
        output.push_str(SCORE_TABLE_SEPARATOR);
        for (label, category_score) in result.category_scores().entries() {
            output.push_str(&format!(
                "| {} | {} |\n",
                label,
                Self::score_cell(category_score)
            ));
        }
        output.push('\n');
    }

    fn render_pii_findings(&self, output: &mut String, findings: &[PiiFinding]) {
        if findings.is_empty() {
            return;
        }
        output.push_str("## 🔍 Données personnelles trouvées dans le code\n\n");
        output.push_str(PII_TABLE_HEADER);
        output.push_str(PII_TABLE_SEPARATOR);
        for finding in findings {
            output.push_str(&format!(
                "| {} | {}× |\n",
                Self::escape_table_cell(&finding.category),
                finding.occurrence_count
            ));
        }
        output.push('\n');
    }

    fn render_risks(&self, output: &mut String, risks: &[Risk]) {
        let counts = RiskAggregator::counts(risks);
        output.push_str(&format!(
            "## ⚠️ Risques et recommandations ({} total)\n\n",
            counts.total()
        ));
        output.push_str(&format!(
            "🔴 Critiques : {} · 🟡 Moyens : {} · 🟢 Faibles : {}\n\n",
            counts.critical, counts.medium, counts.low
        ));
        if !matches!(self.risk_filter, RiskFilter::All) {
            output.push_str(&format!("Filtre actif : {}\n\n", self.risk_filter));
        }
        for risk in RiskAggregator::filter(risks, self.risk_filter) {
            output.push_str(&format!(
                "### {} {} [{}] {}\n\n",
                risk.level.badge_emoji(),
                risk.level.badge_label(),
                risk.priority,
                risk.title
            ));
            output.push_str(&format!("{}\n\n", risk.description));
            output.push_str(&format!("- 📁 Source : `{}`\n", risk.source));
            if let Some(article) = &risk.legal_reference {
                output.push_str(&format!("- Référence légale : {}\n", article));
            }
            output.push_str(&format!(
                "- Priorité de correction : **{}** ({})\n\n",
                risk.priority,
                risk.priority.urgency()
            ));
        }
    }

    fn render_actions(&self, output: &mut String, actions: &[Action]) {
        if actions.is_empty() {
            return;
        }
        output.push_str("## ✅ Plan d'action recommandé\n\n");
        for (index, action) in actions.iter().enumerate() {
            output.push_str(&format!(
                "### {}. {} [{}] {}\n\n",
                index + 1,
                action.action_type.badge(),
                action.priority,
                action.title
            ));
            output.push_str(&format!("{}\n\n", action.description));
            output.push_str(&format!(
                "Effort estimé : {} — échéance {}\n\n",
                action.estimated_effort,
                action.priority.urgency()
            ));
            if let Some(snippet) = &action.remediation_snippet {
                output.push_str("Code suggéré :\n\n");
                output.push_str(&format!("```\n{}\n```\n\n", snippet));
            }
        }
    }

    fn render_services(&self, output: &mut String, flows: &[ServiceFlow]) {
        if flows.is_empty() {
            return;
        }
        output.push_str("## 🌐 Services tiers et flux de données\n\n");
        output.push_str(SERVICE_TABLE_HEADER);
        output.push_str(SERVICE_TABLE_SEPARATOR);
        for flow in flows {
            let shared: Vec<&str> = flow
                .data_categories_shared
                .iter()
                .map(String::as_str)
                .collect();
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_table_cell(&flow.service_name),
                Self::escape_table_cell(&shared.join(", ")),
                Self::escape_table_cell(&flow.hosting_location),
                if flow.is_within_jurisdiction {
                    "✅"
                } else {
                    "⚠️"
                },
                flow.status.label()
            ));
        }
        output.push('\n');
    }

    fn render_breakdown(&self, output: &mut String, breakdown: &[ComplianceBreakdownEntry]) {
        if breakdown.is_empty() {
            return;
        }
        output.push_str("## 📊 Détail de conformité\n\n");
        output.push_str(SCORE_TABLE_HEADER);
        output.push_str(SCORE_TABLE_SEPARATOR);
        for entry in breakdown {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_table_cell(&entry.category),
                Self::score_cell(entry.score)
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, result);
        self.render_overall_score(&mut output, result);
        self.render_pii_findings(&mut output, result.pii_findings());
        self.render_risks(&mut output, result.risks());
        self.render_actions(&mut output, result.actions());
        self.render_services(&mut output, result.service_flows());
        self.render_breakdown(&mut output, result.compliance_breakdown());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{
        ActionType, CategoryScores, Priority, RepositoryReference, RiskLevel, Score,
        ServiceStatus, SourceLocation,
    };

    fn sample_result() -> AnalysisResult {
        AnalysisResult::builder(
            RepositoryReference::parse("https://github.com/acme/widgets").unwrap(),
            Score::new(67).unwrap(),
            CategoryScores {
                rgpd: Score::new(62).unwrap(),
                ai_act: Score::new(71).unwrap(),
                security: Score::new(58).unwrap(),
                documentation: Score::new(75).unwrap(),
            },
        )
        .pii_finding("email", 23)
        .pii_finding("IP address", 12)
        .risk(Risk {
            id: "1".to_string(),
            level: RiskLevel::Critical,
            title: "Clé API Stripe hardcodée".to_string(),
            description: "Une clé secrète est présente dans le code source.".to_string(),
            source: SourceLocation::with_line("src/config/payment.ts", 8),
            legal_reference: Some("Article 32 - Sécurité du traitement".to_string()),
            priority: Priority::P0,
        })
        .risk(Risk {
            id: "2".to_string(),
            level: RiskLevel::Low,
            title: "Privacy Policy incomplète".to_string(),
            description: "La politique ne mentionne pas les services d'IA tiers.".to_string(),
            source: SourceLocation::new("public/privacy-policy.md"),
            legal_reference: None,
            priority: Priority::P2,
        })
        .action(Action {
            id: "a1".to_string(),
            action_type: ActionType::Technical,
            title: "Migrer les secrets vers variables d'environnement".to_string(),
            description: "Déplacer les clés API hors du code source.".to_string(),
            remediation_snippet: Some("const KEY = process.env.STRIPE_SECRET_KEY;".to_string()),
            estimated_effort: "1-2 heures".to_string(),
            priority: Priority::P0,
        })
        .service_flow(ServiceFlow {
            service_name: "OpenAI".to_string(),
            data_categories_shared: ["prompts", "emails"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            hosting_location: "USA".to_string(),
            is_within_jurisdiction: false,
            status: ServiceStatus::Warning,
        })
        .breakdown_entry("Minimisation des données", Score::new(45).unwrap())
        .breakdown_entry("Transparence", Score::new(75).unwrap())
        .build()
        .unwrap()
    }

    #[test]
    fn test_format_renders_all_sections() {
        let output = MarkdownReportFormatter::new()
            .format(&sample_result())
            .unwrap();
        assert!(output.contains("# Rapport de conformité — acme/widgets"));
        assert!(output.contains("**67/100** — 🟠 Attention requise"));
        assert!(output.contains("| RGPD | 62/100 |"));
        assert!(output.contains("Données personnelles trouvées"));
        assert!(output.contains("| email | 23× |"));
        assert!(output.contains("Risques et recommandations (2 total)"));
        assert!(output.contains("🔴 Critiques : 1 · 🟡 Moyens : 0 · 🟢 Faibles : 1"));
        assert!(output.contains("Clé API Stripe hardcodée"));
        assert!(output.contains("Article 32"));
        assert!(output.contains("Plan d'action recommandé"));
        assert!(output.contains("```\nconst KEY = process.env.STRIPE_SECRET_KEY;\n```"));
        assert!(output.contains("Services tiers et flux de données"));
        assert!(output.contains("| OpenAI | emails, prompts | USA | ⚠️ | À vérifier |"));
        assert!(output.contains("Détail de conformité"));
        assert!(output.contains("| Minimisation des données | 45/100 | 🔴 Non conforme |"));
    }

    #[test]
    fn test_format_with_risk_filter_hides_other_levels() {
        let output = MarkdownReportFormatter::new()
            .with_risk_filter(RiskFilter::Level(RiskLevel::Critical))
            .format(&sample_result())
            .unwrap();
        assert!(output.contains("Clé API Stripe hardcodée"));
        assert!(!output.contains("Privacy Policy incomplète"));
        assert!(output.contains("Filtre actif : critical"));
        // Counts still reflect the full result.
        assert!(output.contains("(2 total)"));
    }

    #[test]
    fn test_format_urgency_labels() {
        let output = MarkdownReportFormatter::new()
            .format(&sample_result())
            .unwrap();
        assert!(output.contains("**P0** (Immédiate)"));
        assert!(output.contains("**P2** (Ce mois)"));
    }

    #[test]
    fn test_escape_table_cell() {
        assert_eq!(
            MarkdownReportFormatter::escape_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let result = AnalysisResult::builder(
            RepositoryReference::parse("https://github.com/acme/empty").unwrap(),
            Score::new(90).unwrap(),
            CategoryScores {
                rgpd: Score::new(90).unwrap(),
                ai_act: Score::new(90).unwrap(),
                security: Score::new(90).unwrap(),
                documentation: Score::new(90).unwrap(),
            },
        )
        .build()
        .unwrap();
        let output = MarkdownReportFormatter::new().format(&result).unwrap();
        assert!(output.contains("**90/100** — 🟢 Conforme"));
        assert!(!output.contains("Données personnelles"));
        assert!(!output.contains("Plan d'action"));
        assert!(!output.contains("Services tiers"));
    }
}

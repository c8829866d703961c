use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::compliance::domain::{
    Action, ActionType, AnalysisResult, CategoryScores, CheckCategory, Priority,
    RepositoryReference, Risk, RiskLevel, Score, ServiceFlow, ServiceStatus, SourceLocation,
};
use crate::ports::outbound::{AnalysisFailure, Analyzer};

/// DemoAnalyzer adapter producing a fixed, representative result bundle.
///
/// Used when no backend endpoint is configured. The findings are constant
/// demonstration data; only the repository reference is echoed from the
/// request, so repeated runs are fully deterministic as the analyzer
/// contract requires.
pub struct DemoAnalyzer;

impl DemoAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn risks() -> Vec<Risk> {
        vec![
            Risk {
                id: "1".to_string(),
                level: RiskLevel::Critical,
                title: "Données utilisateur envoyées vers OpenAI sans anonymisation".to_string(),
                description: "Le code envoie des données personnelles brutes (emails, noms) \
                              directement à l'API OpenAI sans pseudonymisation préalable, ce qui \
                              viole l'article 25 du RGPD sur la protection des données dès la \
                              conception."
                    .to_string(),
                source: SourceLocation::with_line("src/api/ai-service.ts", 42),
                legal_reference: Some(
                    "Article 25 - Protection des données dès la conception".to_string(),
                ),
                priority: Priority::P0,
            },
            Risk {
                id: "2".to_string(),
                level: RiskLevel::Critical,
                title: "Absence de politique de rétention des données".to_string(),
                description: "Les données personnelles sont conservées indéfiniment sans date \
                              d'expiration définie. L'article 5(1)(e) du RGPD exige une \
                              limitation de la conservation."
                    .to_string(),
                source: SourceLocation::with_line("database/users.sql", 15),
                legal_reference: Some(
                    "Article 5 - Principes relatifs au traitement".to_string(),
                ),
                priority: Priority::P0,
            },
            Risk {
                id: "3".to_string(),
                level: RiskLevel::Critical,
                title: "Clé API Stripe hardcodée dans le code".to_string(),
                description: "Une clé API secrète Stripe est directement présente dans le code \
                              source, créant un risque de sécurité majeur."
                    .to_string(),
                source: SourceLocation::with_line("src/config/payment.ts", 8),
                legal_reference: Some("Article 32 - Sécurité du traitement".to_string()),
                priority: Priority::P0,
            },
            Risk {
                id: "4".to_string(),
                level: RiskLevel::Medium,
                title: "Cookies analytics sans consentement préalable".to_string(),
                description: "Google Analytics est chargé avant que l'utilisateur n'ait donné \
                              son consentement explicite pour les cookies de tracking."
                    .to_string(),
                source: SourceLocation::with_line("src/analytics.js", 3),
                legal_reference: Some("Directive ePrivacy".to_string()),
                priority: Priority::P1,
            },
            Risk {
                id: "5".to_string(),
                level: RiskLevel::Medium,
                title: "Transfert de données vers serveurs US sans SCC".to_string(),
                description: "Les données sont hébergées sur AWS US-East sans clauses \
                              contractuelles types (SCC) documentées pour le transfert hors UE."
                    .to_string(),
                source: SourceLocation::with_line("infrastructure/terraform.tf", 28),
                legal_reference: Some(
                    "Article 46 - Transferts moyennant garanties".to_string(),
                ),
                priority: Priority::P1,
            },
            Risk {
                id: "6".to_string(),
                level: RiskLevel::Medium,
                title: "Modèle IA non documenté selon AI Act".to_string(),
                description: "L'utilisation du modèle GPT-4 n'est pas documentée conformément \
                              aux exigences de transparence de l'AI Act européen."
                    .to_string(),
                source: SourceLocation::new("docs/"),
                legal_reference: Some("AI Act - Article 13 - Transparence".to_string()),
                priority: Priority::P1,
            },
            Risk {
                id: "7".to_string(),
                level: RiskLevel::Low,
                title: "Logs contenant des adresses IP complètes".to_string(),
                description: "Les fichiers de logs conservent les adresses IP non anonymisées \
                              des visiteurs pendant plus de 7 jours."
                    .to_string(),
                source: SourceLocation::new("logs/access.log"),
                legal_reference: None,
                priority: Priority::P2,
            },
            Risk {
                id: "8".to_string(),
                level: RiskLevel::Low,
                title: "Privacy Policy incomplète".to_string(),
                description: "La politique de confidentialité ne mentionne pas l'utilisation de \
                              services d'IA tiers ni les durées de conservation."
                    .to_string(),
                source: SourceLocation::new("public/privacy-policy.md"),
                legal_reference: None,
                priority: Priority::P2,
            },
        ]
    }

    fn actions() -> Vec<Action> {
        vec![
            Action {
                id: "1".to_string(),
                action_type: ActionType::Technical,
                title: "Implémenter l'anonymisation avant envoi à OpenAI".to_string(),
                description: "Créer un middleware qui pseudonymise les données personnelles \
                              (emails, noms) avant tout appel à l'API OpenAI."
                    .to_string(),
                remediation_snippet: Some(
                    r#"// middleware/anonymize.ts
export function anonymizeForAI(data: UserData): UserData {
  return {
    email: hash('sha256', data.email).slice(0, 8) + '@anon.local',
    name: 'User_' + hash('sha256', data.name).slice(0, 6),
    content: data.content.replace(/[\w.-]+@[\w.-]+/g, '[EMAIL_REDACTED]')
  };
}"#
                    .to_string(),
                ),
                estimated_effort: "2-4 heures".to_string(),
                priority: Priority::P0,
            },
            Action {
                id: "2".to_string(),
                action_type: ActionType::Technical,
                title: "Ajouter une politique de rétention automatique".to_string(),
                description: "Implémenter une tâche CRON qui supprime automatiquement les \
                              données personnelles après 24 mois d'inactivité."
                    .to_string(),
                remediation_snippet: Some(
                    r#"-- migrations/add_retention_policy.sql
DELETE FROM users
WHERE last_activity < NOW() - INTERVAL '24 months';"#
                        .to_string(),
                ),
                estimated_effort: "4-6 heures".to_string(),
                priority: Priority::P0,
            },
            Action {
                id: "3".to_string(),
                action_type: ActionType::Technical,
                title: "Migrer les secrets vers variables d'environnement".to_string(),
                description: "Déplacer toutes les clés API du code source vers des variables \
                              d'environnement sécurisées."
                    .to_string(),
                remediation_snippet: Some(
                    r#"// config/payment.ts
const STRIPE_KEY = process.env.STRIPE_SECRET_KEY;
if (!STRIPE_KEY) {
  throw new Error('STRIPE_SECRET_KEY non configurée');
}"#
                    .to_string(),
                ),
                estimated_effort: "1-2 heures".to_string(),
                priority: Priority::P0,
            },
            Action {
                id: "4".to_string(),
                action_type: ActionType::Legal,
                title: "Mettre à jour la Privacy Policy".to_string(),
                description: "Ajouter une section détaillant l'utilisation d'OpenAI, les \
                              transferts hors UE, et les durées de conservation pour chaque \
                              type de données."
                    .to_string(),
                remediation_snippet: None,
                estimated_effort: "1 semaine".to_string(),
                priority: Priority::P1,
            },
            Action {
                id: "5".to_string(),
                action_type: ActionType::Technical,
                title: "Implémenter un bandeau de consentement cookies".to_string(),
                description: "Ajouter un système de gestion des consentements (CMP) qui bloque \
                              le chargement des cookies analytics avant accord explicite."
                    .to_string(),
                remediation_snippet: None,
                estimated_effort: "4-8 heures".to_string(),
                priority: Priority::P1,
            },
            Action {
                id: "6".to_string(),
                action_type: ActionType::Organizational,
                title: "Documenter le système IA pour l'AI Act".to_string(),
                description: "Créer une documentation technique du système d'IA utilisé \
                              incluant: objectif, données d'entrée, mesures de sécurité, et \
                              processus de supervision humaine."
                    .to_string(),
                remediation_snippet: None,
                estimated_effort: "1-2 semaines".to_string(),
                priority: Priority::P1,
            },
        ]
    }

    fn service_flows() -> Vec<ServiceFlow> {
        let categories = |names: &[&str]| -> BTreeSet<String> {
            names.iter().map(|s| s.to_string()).collect()
        };
        vec![
            ServiceFlow {
                service_name: "OpenAI".to_string(),
                data_categories_shared: categories(&["prompts", "emails", "noms"]),
                hosting_location: "USA".to_string(),
                is_within_jurisdiction: false,
                status: ServiceStatus::Warning,
            },
            ServiceFlow {
                service_name: "Stripe".to_string(),
                data_categories_shared: categories(&["payment info", "emails"]),
                hosting_location: "USA".to_string(),
                is_within_jurisdiction: false,
                status: ServiceStatus::Compliant,
            },
            ServiceFlow {
                service_name: "Google Analytics".to_string(),
                data_categories_shared: categories(&["IP", "comportement"]),
                hosting_location: "USA".to_string(),
                is_within_jurisdiction: false,
                status: ServiceStatus::NonCompliant,
            },
            ServiceFlow {
                service_name: "AWS".to_string(),
                data_categories_shared: categories(&["toutes données"]),
                hosting_location: "USA".to_string(),
                is_within_jurisdiction: false,
                status: ServiceStatus::Warning,
            },
        ]
    }
}

impl Default for DemoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for DemoAnalyzer {
    async fn analyze(
        &self,
        reference: &RepositoryReference,
        _selected_checks: &BTreeSet<CheckCategory>,
    ) -> Result<AnalysisResult, AnalysisFailure> {
        let score = |value: u8| {
            Score::new(value)
                .map_err(|e| AnalysisFailure::new(format!("invalid demo score: {}", e)))
        };

        let mut builder = AnalysisResult::builder(
            reference.clone(),
            score(67)?,
            CategoryScores {
                rgpd: score(62)?,
                ai_act: score(71)?,
                security: score(58)?,
                documentation: score(75)?,
            },
        )
        .pii_finding("email", 23)
        .pii_finding("IP address", 12)
        .pii_finding("phone", 5)
        .pii_finding("full name", 45)
        .pii_finding("address", 8);

        for risk in Self::risks() {
            builder = builder.risk(risk);
        }
        for action in Self::actions() {
            builder = builder.action(action);
        }
        for flow in Self::service_flows() {
            builder = builder.service_flow(flow);
        }

        builder
            .breakdown_entry("Minimisation des données", score(45)?)
            .breakdown_entry("Consentement utilisateur", score(52)?)
            .breakdown_entry("Sécurité", score(68)?)
            .breakdown_entry("Transparence", score(75)?)
            .breakdown_entry("Droits des utilisateurs", score(82)?)
            .build()
            .map_err(|e| AnalysisFailure::new(format!("invalid demo bundle: {}", e)))
    }
}

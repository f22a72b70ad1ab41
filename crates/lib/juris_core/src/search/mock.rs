//! Randomized placeholder results.
//!
//! Per selected court: one súmula, one binding thesis for STF/STJ, one
//! acórdão. Numbers and dates are random; the summaries are boilerplate that
//! mention the court and the raw query.

use async_trait::async_trait;
use rand::Rng;

use super::{GeneratorConfig, ResultSource, SearchError};
use crate::courts::CourtCode;
use crate::models::{ResultKind, SearchResult};

/// [`ResultSource`] backed by the random generator.
#[derive(Debug, Clone, Default)]
pub struct MockResultSource {
    config: GeneratorConfig,
}

impl MockResultSource {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ResultSource for MockResultSource {
    async fn search(
        &self,
        query: &str,
        courts: &[CourtCode],
    ) -> Result<Vec<SearchResult>, SearchError> {
        Ok(generate_with_rng(query, courts, &self.config, &mut rand::rng()))
    }
}

/// Generate results with the default config and the thread RNG.
pub fn generate(query: &str, courts: &[CourtCode]) -> Vec<SearchResult> {
    generate_with_rng(query, courts, &GeneratorConfig::default(), &mut rand::rng())
}

/// Generate results for `courts`, or the whole catalog when `courts` is empty.
///
/// Courts are visited in the order given; repeated codes are visited once.
pub fn generate_with_rng<R: Rng + ?Sized>(
    query: &str,
    courts: &[CourtCode],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<SearchResult> {
    let selected = selected_courts(courts);
    let mut results = Vec::with_capacity(selected.len() * 3);

    for court in selected {
        results.push(ruling_summary(court, query, config, rng));
        if court.is_high_tier() {
            results.push(binding_thesis(court, query, config, rng));
        }
        results.push(case_law(court, query, config, rng));
    }

    results
}

fn selected_courts(courts: &[CourtCode]) -> Vec<CourtCode> {
    if courts.is_empty() {
        return CourtCode::ALL.to_vec();
    }
    let mut selected = Vec::with_capacity(courts.len());
    for &code in courts {
        if !selected.contains(&code) {
            selected.push(code);
        }
    }
    selected
}

fn ruling_summary<R: Rng + ?Sized>(
    court: CourtCode,
    query: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> SearchResult {
    let title_number = rng.random_range(0..1000);
    let number = rng.random_range(0..1000);
    record(
        court,
        ResultKind::RulingSummary,
        format!("Súmula {title_number} - {court}"),
        format!(
            "Súmula vinculante relacionada a {query}. Esta súmula estabelece entendimento \
             consolidado do tribunal sobre a matéria em questão, devendo ser observada por \
             todos os órgãos do Judiciário."
        ),
        number.to_string(),
        random_date(config, rng),
    )
}

fn binding_thesis<R: Rng + ?Sized>(
    court: CourtCode,
    query: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> SearchResult {
    let theme = rng.random_range(0..1500);
    let number = rng.random_range(0..1500);
    record(
        court,
        ResultKind::BindingThesis,
        format!("Tema {theme} - {query}"),
        format!(
            "Tese jurídica firmada sobre {query}. O tribunal fixou a seguinte tese para \
             julgamento de casos repetitivos: [descrição da tese estabelecida]. Esta decisão \
             tem eficácia vinculante e deve ser aplicada aos casos similares."
        ),
        format!("Tema {number}"),
        random_date(config, rng),
    )
}

fn case_law<R: Rng + ?Sized>(
    court: CourtCode,
    query: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> SearchResult {
    let docket = rng.random_range(0..100_000);
    record(
        court,
        ResultKind::CaseLaw,
        format!("Acórdão sobre {query}"),
        format!(
            "Decisão colegiada do {court} em caso envolvendo {query}. O tribunal decidiu pela \
             procedência/improcedência do pedido, estabelecendo importantes precedentes sobre a \
             matéria. A decisão foi unânime/por maioria e aborda aspectos relevantes da questão \
             jurídica."
        ),
        format!("{court} {docket}"),
        random_date(config, rng),
    )
}

fn record(
    court: CourtCode,
    kind: ResultKind,
    title: String,
    summary: String,
    number: String,
    date: String,
) -> SearchResult {
    SearchResult {
        court,
        kind,
        label: kind.label(court).to_string(),
        title,
        summary,
        number: Some(number),
        date: Some(date),
        url: Some(court.court().url.to_string()),
    }
}

/// `D/M/YYYY` without zero padding.
fn random_date<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> String {
    let day = rng.random_range(1..=28);
    let month = rng.random_range(1..=12);
    let year = rng.random_range(config.year_from()..config.year_until());
    format!("{day}/{month}/{year}")
}

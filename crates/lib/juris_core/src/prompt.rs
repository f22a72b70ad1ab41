//! Prompt assembly.
//!
//! Builds the message list sent to the completion provider: a fixed system
//! instruction, the conversation so far, and the final user turn rewritten to
//! embed the search results.

use std::fmt::Write;

use crate::courts::catalog;
use crate::models::{Message, SearchResult};

const RESULTS_HEADER: &str = "Resultados encontrados:";
const ANSWER_INSTRUCTION: &str =
    "Com base nesses resultados, forneça uma resposta completa e educativa.";

/// The system instruction, with the court list rendered from the catalog.
pub fn system_instruction() -> String {
    let mut text = String::from(
        "Você é um assistente jurídico especializado em pesquisa de jurisprudência brasileira.\n\
         Você ajuda advogados, estudantes de direito e profissionais do direito a encontrar e \
         entender súmulas, teses e jurisprudências dos tribunais superiores e regionais do Brasil.\n\
         \n\
         Tribunais que você pesquisa:\n",
    );
    for court in catalog() {
        let full_name = court
            .name
            .strip_suffix(&format!(" ({})", court.code))
            .unwrap_or(court.name);
        // Writing into a String never fails.
        let _ = writeln!(
            text,
            "- {} ({}): {}",
            court.code, full_name, court.description
        );
    }
    text.push_str(
        "\n\
         Suas responsabilidades:\n\
         1. Interpretar a pergunta do usuário e identificar os temas jurídicos relevantes\n\
         2. Explicar de forma clara e didática os conceitos jurídicos\n\
         3. Fornecer contexto sobre a aplicação prática das decisões\n\
         4. Indicar quais tribunais são mais relevantes para cada tipo de questão\n\
         5. Explicar a hierarquia e importância das decisões (súmulas vinculantes, repercussão \
         geral, etc.)\n\
         \n\
         Seja sempre preciso, profissional e educado. Use linguagem técnica quando apropriado, \
         mas explique termos complexos.",
    );
    text
}

/// Render results as a numbered list, one blank line between entries.
pub fn render_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. {} - {}: {}\n   {}",
                i + 1,
                r.court,
                r.label,
                r.title,
                r.summary
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Content of the rewritten final user turn.
pub fn contextualize(question: &str, results: &[SearchResult]) -> String {
    format!(
        "{question}\n\n{RESULTS_HEADER}\n{}\n\n{ANSWER_INSTRUCTION}",
        render_results(results)
    )
}

/// Assemble the provider message list.
///
/// Everything in `history` but the last message passes through unchanged;
/// the last message becomes a user turn carrying the results. An empty
/// history is treated as an empty question.
pub fn assemble(history: &[Message], results: &[SearchResult]) -> Vec<Message> {
    let (question, earlier) = match history.split_last() {
        Some((last, earlier)) => (last.content.as_str(), earlier),
        None => ("", history),
    };

    let mut messages = Vec::with_capacity(earlier.len() + 2);
    messages.push(Message::system(system_instruction()));
    messages.extend_from_slice(earlier);
    messages.push(Message::user(contextualize(question, results)));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courts::CourtCode;
    use crate::models::{ResultKind, Role};

    fn result(court: CourtCode, kind: ResultKind, title: &str) -> SearchResult {
        SearchResult {
            court,
            kind,
            label: kind.label(court).to_string(),
            title: title.to_string(),
            summary: format!("resumo de {title}"),
            number: None,
            date: None,
            url: None,
        }
    }

    #[test]
    fn system_instruction_lists_every_court() {
        let text = system_instruction();
        assert!(text.contains("- STF (Supremo Tribunal Federal): Guarda da Constituição"));
        assert!(text.contains("- TJ (Tribunais de Justiça Estaduais): Justiça Estadual"));
        for court in catalog() {
            assert!(text.contains(court.description));
        }
        for n in 1..=5 {
            assert!(text.contains(&format!("\n{n}. ")), "missing item {n}");
        }
    }

    #[test]
    fn render_results_numbers_from_one() {
        let results = vec![
            result(CourtCode::Stf, ResultKind::RulingSummary, "Súmula 1 - STF"),
            result(CourtCode::Stf, ResultKind::BindingThesis, "Tema 9 - x"),
        ];
        assert_eq!(
            render_results(&results),
            "1. STF - Súmula: Súmula 1 - STF\n   resumo de Súmula 1 - STF\n\n\
             2. STF - Tese de Repercussão Geral: Tema 9 - x\n   resumo de Tema 9 - x"
        );
    }

    #[test]
    fn final_turn_is_rewritten_and_history_kept() {
        let history = vec![
            Message::user("o que é usucapião?"),
            Message::assistant("É um modo de aquisição..."),
            Message::user("prazo recursal"),
        ];
        let results = vec![result(CourtCode::Tj, ResultKind::CaseLaw, "Acórdão sobre prazo")];

        let messages = assemble(&history, &results);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1], history[0]);
        assert_eq!(messages[2], history[1]);
        assert_eq!(messages[3].role, Role::User);
        assert_eq!(
            messages[3].content,
            "prazo recursal\n\nResultados encontrados:\n\
             1. TJ - Jurisprudência: Acórdão sobre prazo\n   resumo de Acórdão sobre prazo\n\n\
             Com base nesses resultados, forneça uma resposta completa e educativa."
        );
    }

    #[test]
    fn every_title_appears_in_order() {
        let results = crate::search::generate("férias", &[]);
        let messages = assemble(&[Message::user("férias")], &results);
        let content = &messages.last().expect("final turn").content;

        let mut cursor = 0;
        for (i, r) in results.iter().enumerate() {
            let line = format!("{}. {} - {}: {}", i + 1, r.court, r.label, r.title);
            let pos = content[cursor..]
                .find(&line)
                .unwrap_or_else(|| panic!("missing or out of order: {line}"));
            cursor += pos + line.len();
        }
    }

    #[test]
    fn empty_history_produces_empty_question() {
        let messages = assemble(&[], &[]);
        assert_eq!(messages.len(), 2);
        assert!(messages[1].content.starts_with("\n\nResultados encontrados:\n"));
    }
}

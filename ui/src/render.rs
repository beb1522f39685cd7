use crate::controller::{Phase, QuestionView, SessionView, TypeFilter};
use std::fmt::Write;

/// Renders a session snapshot as plain text.
pub fn render(view: &SessionView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "QuestSearch");
    let _ = writeln!(out, "Search: {}", view.query);
    let _ = writeln!(out, "Type:   {}", filter_bar(view.filter));
    out.push('\n');

    match &view.phase {
        Phase::Loading => {
            let _ = writeln!(out, "Loading questions...");
            return out;
        }
        Phase::Failed(message) => {
            let _ = writeln!(out, "Search failed: {}", message);
            return out;
        }
        Phase::Debouncing => {
            let _ = writeln!(out, "(waiting for typing to settle)");
        }
        Phase::Idle | Phase::Loaded => {}
    }

    if view.questions.is_empty() {
        if view.query.is_empty() {
            let _ = writeln!(out, "Start searching to see results.");
        } else {
            let _ = writeln!(out, "No results found.");
        }
        return out;
    }

    let _ = writeln!(out, "{} result(s)", view.total);
    for (i, question) in view.questions.iter().enumerate() {
        render_question(&mut out, i + 1, question);
    }

    if view.show_pagination {
        out.push('\n');
        let _ = writeln!(out, "{}", pagination_bar(view));
    }

    out
}

fn filter_bar(active: TypeFilter) -> String {
    TypeFilter::CHOICES
        .iter()
        .map(|f| {
            if *f == active {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_question(out: &mut String, position: usize, view: &QuestionView) {
    let question = &view.question;
    let _ = writeln!(out, "{:>2}. [{}] {}", position, question.kind, question.title);

    for (i, option) in question.options.iter().enumerate() {
        let mark = if view.selected.contains(&i) { "x" } else { " " };
        let _ = writeln!(out, "      ({}) {}. {}", mark, i + 1, option.text);
    }

    match view.verdict {
        Some(true) => {
            let _ = writeln!(out, "      Correct!");
        }
        Some(false) => {
            let _ = writeln!(out, "      Incorrect");
        }
        None => {}
    }
}

fn pagination_bar(view: &SessionView) -> String {
    let mut parts = Vec::with_capacity(view.page_buttons.len() + 2);

    parts.push(if view.page == 1 { "  ".to_string() } else { "<-".to_string() });
    for page in &view.page_buttons {
        if *page == view.page {
            parts.push(format!("[{}]", page));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(if view.page >= view.total_pages {
        "  ".to_string()
    } else {
        "->".to_string()
    });

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_search::questions::types::{QuestionOption, QuestionPayload, QuestionType};

    fn view(phase: Phase, query: &str) -> SessionView {
        SessionView {
            query: query.to_string(),
            page: 1,
            page_size: 10,
            filter: TypeFilter::All,
            phase,
            questions: vec![],
            total: 0,
            total_pages: 0,
            show_pagination: false,
            page_buttons: vec![],
        }
    }

    #[test]
    fn test_render_empty_states() {
        assert!(render(&view(Phase::Idle, "")).contains("Start searching to see results."));
        assert!(render(&view(Phase::Loaded, "zzz")).contains("No results found."));
        assert!(render(&view(Phase::Loading, "alg")).contains("Loading questions..."));
        assert!(
            render(&view(Phase::Failed("boom".to_string()), "alg")).contains("Search failed: boom")
        );
    }

    #[test]
    fn test_render_results_and_pagination() {
        let mut v = view(Phase::Loaded, "alg");
        v.questions = vec![QuestionView {
            question: QuestionPayload {
                id: "q1".to_string(),
                title: "Algebra".to_string(),
                kind: QuestionType::Mcq,
                options: vec![
                    QuestionOption {
                        text: "one".to_string(),
                        is_correct_answer: false,
                    },
                    QuestionOption {
                        text: "two".to_string(),
                        is_correct_answer: true,
                    },
                ],
            },
            selected: vec![1],
            verdict: Some(true),
        }];
        v.total = 12;
        v.total_pages = 2;
        v.show_pagination = true;
        v.page_buttons = vec![1, 2];

        let text = render(&v);
        assert!(text.contains("[ALL] MCQ MCM"));
        assert!(text.contains(" 1. [MCQ] Algebra"));
        assert!(text.contains("(x) 2. two"));
        assert!(text.contains("( ) 1. one"));
        assert!(text.contains("Correct!"));
        assert!(text.contains("[1] 2 ->"));
    }
}

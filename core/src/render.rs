use crate::{DocumentRef, ScoredTerm};
use std::collections::BTreeMap;
use time::macros::format_description;
use time::OffsetDateTime;

/// Group marker for terms that do not start with `a`–`z`.
pub const OTHER_GROUP: char = '#';

/// `YYYY-MM-DD HH:MM` in the offset carried by `at`.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| "".into())
}

fn group_key(term: &str) -> char {
    match term.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some(c @ 'a'..='z') => c,
        _ => OTHER_GROUP,
    }
}

fn group_by_first_letter(terms: &[ScoredTerm]) -> BTreeMap<char, Vec<&ScoredTerm>> {
    let mut groups: BTreeMap<char, Vec<&ScoredTerm>> = BTreeMap::new();
    for term in terms {
        groups.entry(group_key(&term.term)).or_default().push(term);
    }
    groups
}

/// Render ranked terms as a markdown index. Score decides inclusion only;
/// display order is alphabetical within each letter group.
pub fn render(terms: &[ScoredTerm], title: &str, generated_at: OffsetDateTime) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# {title}"));
    lines.push(String::new());
    lines.push(format!("Generated: {}", format_timestamp(generated_at)));
    lines.push(String::new());
    lines.push(format!("**{} terms** from vault", terms.len()));
    lines.push(String::new());

    for (letter, mut group) in group_by_first_letter(terms) {
        lines.push(format!("## {}", letter.to_ascii_uppercase()));
        lines.push(String::new());

        group.sort_by(|a, b| {
            a.term.to_lowercase().cmp(&b.term.to_lowercase()).then_with(|| a.term.cmp(&b.term))
        });
        for term in group {
            lines.push(format!("- **{}** ({} references)", term.term, term.total_occurrences));
            // scorer output is already in this order; the stable sort keeps it
            let mut docs: Vec<&DocumentRef> = term.documents.iter().collect();
            docs.sort_by(|a, b| b.count.cmp(&a.count));
            for doc in docs {
                lines.push(format!("  - [[{}]] ({})", doc.display_name, doc.count));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

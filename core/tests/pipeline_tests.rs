use termindex_core::pipeline::rank_terms;
use termindex_core::{generate, IndexError, IndexOptions, RawDocument};
use time::macros::datetime;

fn fixtures() -> Vec<RawDocument> {
    vec![
        RawDocument::new("doc1.md", "doc1", include_str!("fixtures/doc1.md")),
        RawDocument::new("doc2.md", "doc2", include_str!("fixtures/doc2.md")),
        RawDocument::new("doc3.md", "doc3", include_str!("fixtures/doc3.md")),
    ]
}

fn options(top_n: usize, min_occurrences: u32) -> IndexOptions {
    IndexOptions { top_n, min_occurrences }
}

#[test]
fn fixture_corpus_yields_cross_document_bigrams() {
    let report = generate(&fixtures(), &options(50, 2), "Vault Index", datetime!(2025-01-15 10:30 UTC))
        .expect("report");
    assert_eq!(report.document_count, 3);
    assert!(report.term_count > 0);

    let text = &report.text;
    assert!(text.starts_with("# Vault Index\n\nGenerated: 2025-01-15 10:30\n"));
    for bigram in ["machine learning", "neural network", "deep learning", "gradient descent"] {
        assert!(text.contains(&format!("- **{bigram}**")), "missing {bigram}");
    }
    for doc in ["[[doc1]]", "[[doc2]]", "[[doc3]]"] {
        assert!(text.contains(doc), "missing {doc}");
    }
    // code, comments, embeds and frontmatter never reach the index
    for noise in ["torch", "reminder", "chart", "title", "python"] {
        assert!(!text.contains(noise), "leaked {noise}");
    }
    assert!(text.contains("## D\n") && text.contains("## M\n"));
}

#[test]
fn ranked_terms_hold_invariants() {
    let top_n = 8;
    let docs = fixtures();
    let terms = rank_terms(&docs, &options(top_n, 2)).expect("terms");
    assert!(terms.len() <= top_n);
    for pair in terms.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for term in &terms {
        assert!(term.documents.len() >= 2, "{} in one document", term.term);
        assert!(term.total_occurrences >= 2);
        assert_eq!(term.total_occurrences, term.documents.iter().map(|d| d.count).sum::<u32>());
        assert!(term.documents.windows(2).all(|w| w[0].count >= w[1].count));
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let at = datetime!(2025-06-01 00:00 UTC);
    let a = generate(&fixtures(), &options(25, 2), "Index", at).unwrap();
    let b = generate(&fixtures(), &options(25, 2), "Index", at).unwrap();
    assert_eq!(a.text, b.text);
}

#[test]
fn round_trip_example() {
    let docs = vec![
        RawDocument::new("a.md", "A", "machine learning models use neural networks"),
        RawDocument::new("b.md", "B", "neural networks power machine learning systems"),
    ];
    let terms = rank_terms(&docs, &options(50, 2)).unwrap();
    let names: Vec<&str> = terms.iter().map(|t| t.term.as_str()).collect();
    assert!(names.contains(&"machine learning"));
    assert!(names.contains(&"neural networks"));
    assert!(!names.contains(&"models"));
    assert!(!names.contains(&"systems"));
}

#[test]
fn threshold_excludes_rare_terms() {
    let docs = vec![
        RawDocument::new("a.md", "a", "alpha alpha omega omega omega"),
        RawDocument::new("b.md", "b", "alpha omega omega"),
    ];
    let terms = rank_terms(&docs, &options(10, 5)).unwrap();
    assert!(terms.iter().all(|t| t.term != "alpha"));
    assert!(terms.iter().any(|t| t.term == "omega"));
}

#[test]
fn errors_are_distinguishable() {
    assert_eq!(rank_terms(&[], &options(10, 1)).unwrap_err(), IndexError::EmptyInput);
    let lonely = vec![RawDocument::new("a.md", "a", "solitary words here")];
    assert_eq!(
        rank_terms(&lonely, &options(10, 1)).unwrap_err(),
        IndexError::NoQualifyingTerms { min_occurrences: 1 }
    );
}

#[test]
fn scored_terms_serialize_for_callers() {
    let terms = rank_terms(&fixtures(), &options(3, 2)).unwrap();
    let json = serde_json::to_value(&terms).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(terms.len()));
    assert!(json[0]["documents"][0]["display_name"].is_string());
}

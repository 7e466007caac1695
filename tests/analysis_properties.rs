//! Integration tests for the normalization + aggregation pipeline.

use wordfreq::prelude::*;

fn corpus() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "moby.txt",
            "Call me Ishmael. Some years ago - never mind how long precisely - \
             having little or no money in my purse, I thought I would sail about.",
        ),
        (
            "alice.txt",
            "Alice was beginning to get very tired of sitting by her sister on the bank, \
             and of having nothing to do: once or twice she had peeped into the book.",
        ),
        (
            "pride.txt",
            "It is a truth universally acknowledged, that a single man in possession \
             of a good fortune, must be in want of a wife. A truth! A wife!",
        ),
    ]
}

fn config() -> AnalysisConfig {
    AnalysisConfig::default().with_top_n(3)
}

#[test]
fn test_analyze_is_idempotent() -> Result<()> {
    let first = analyze(corpus(), &config())?;
    let second = analyze(corpus(), &config())?;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first)?,
        serde_json::to_string(&second)?
    );
    Ok(())
}

#[test]
fn test_input_order_does_not_matter() -> Result<()> {
    let mut reversed = corpus();
    reversed.reverse();

    assert_eq!(analyze(corpus(), &config())?, analyze(reversed, &config())?);
    Ok(())
}

#[test]
fn test_global_counts_are_sum_of_document_counts() -> Result<()> {
    let normalizer = Normalizer::new(&config())?;
    let report = analyze(corpus(), &config())?;

    for entry in &report.global {
        let expected: u64 = corpus()
            .iter()
            .map(|(_, text)| {
                let per_doc: FrequencyTable = normalizer.tokenize(text).unwrap().into_iter().collect();
                per_doc.get(&entry.word)
            })
            .sum();
        assert_eq!(entry.freq, expected, "count for {}", entry.word);
    }

    let token_total: u64 = report.documents.iter().map(|d| d.token_count).sum();
    assert_eq!(report.total_tokens, token_total);
    assert_eq!(report.global.iter().map(|e| e.freq).sum::<u64>(), token_total);
    Ok(())
}

#[test]
fn test_no_short_words_or_stopwords_in_output() -> Result<()> {
    let config = config().with_min_length(4);
    let stop_words = Normalizer::new(&config)?.stop_words().clone();
    let report = analyze(corpus(), &config)?;

    let words = report
        .global
        .iter()
        .map(|e| e.word.as_str())
        .chain(report.top_per_document.iter().map(|r| r.word.as_str()));
    for word in words {
        assert!(word.len() >= 4, "{word} is too short");
        assert!(!stop_words.contains(word), "{word} is a stopword");
        assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word} is not normalized");
    }
    Ok(())
}

#[test]
fn test_ranking_is_count_then_first_occurrence() -> Result<()> {
    let report = analyze(corpus(), &config())?;
    let rows = report.global.as_slice();

    // alice.txt is processed first, so its words lead every tie.
    assert_eq!(rows[0], RankedEntry::new("truth", 2));
    assert_eq!(rows[1], RankedEntry::new("wife", 2));
    assert_eq!(rows[2].word, "alice");
    assert!(rows.windows(2).all(|pair| pair[0].freq >= pair[1].freq));
    Ok(())
}

#[test]
fn test_top_per_document_grouped_in_id_order() -> Result<()> {
    let report = analyze(corpus(), &config())?;

    let documents: Vec<&str> = report
        .top_per_document
        .iter()
        .map(|r| r.document.as_str())
        .collect();
    assert_eq!(
        documents,
        vec![
            "alice.txt", "alice.txt", "alice.txt", "moby.txt", "moby.txt", "moby.txt",
            "pride.txt", "pride.txt", "pride.txt",
        ]
    );

    let pride: Vec<&str> = report
        .top_per_document
        .iter()
        .filter(|r| r.document == "pride.txt")
        .map(|r| r.word.as_str())
        .collect();
    assert_eq!(pride, vec!["truth", "wife", "universally"]);
    Ok(())
}

#[test]
fn test_top_n_boundaries() -> Result<()> {
    let zero = analyze(corpus(), &config().with_top_n(0))?;
    assert!(zero.top_global.is_empty());
    assert!(zero.top_per_document.is_empty());
    assert!(!zero.global.is_empty());

    let huge = analyze(corpus(), &config().with_top_n(10_000))?;
    assert_eq!(huge.top_global, huge.global);
    Ok(())
}

#[test]
fn test_empty_corpus() -> Result<()> {
    let report = analyze(Vec::<(String, String)>::new(), &config())?;
    let (global, top_global, top_per_document) = report.into_tables();

    assert!(global.is_empty());
    assert!(top_global.is_empty());
    assert!(top_per_document.is_empty());
    Ok(())
}

#[test]
fn test_parallel_run_is_identical() -> Result<()> {
    let sequential = analyze(corpus(), &config())?;
    let parallel = analyze(corpus(), &config().with_parallel(true))?;

    assert_eq!(sequential, parallel);
    Ok(())
}

#[test]
fn test_errors_abort_the_run() {
    let err = analyze(corpus(), &config().with_language("elvish")).unwrap_err();
    assert!(matches!(err, WordFreqError::Configuration(_)));

    let err = analyze(corpus(), &config().with_min_length(0)).unwrap_err();
    assert!(matches!(err, WordFreqError::Configuration(_)));

    let mut duplicated = corpus();
    duplicated.push(("moby.txt", "another text"));
    let err = analyze(duplicated, &config()).unwrap_err();
    assert!(matches!(err, WordFreqError::Input(_)));
}

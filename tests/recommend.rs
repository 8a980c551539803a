use std::sync::Arc;
use std::thread;

use tf_idf_recommender::{
    build_index, build_index_with, recommend, Document, IndexConfig, RankerError, SimilarityMode,
    StopWords, VectorizerConfig, DEFAULT_RECOMMENDATIONS,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn movies() -> Vec<Document<String>> {
    [
        ("Alien", "The crew of a commercial spacecraft encounters a deadly lifeform after investigating a distress call."),
        ("Aliens", "Ripley returns to the planet where her crew found the deadly alien lifeform, this time with marines."),
        ("Heat", "A group of professional bank robbers feel the heat from police after a botched heist."),
        ("Ronin", "A freelancing crew of former spies plans a heist to steal a mysterious briefcase."),
        ("Finding Nemo", "A timid clownfish sets out on a journey across the ocean to bring his son home."),
        ("Untitled", ""),
        ("Sunshine", "A crew of astronauts travels toward the dying sun on a mission to reignite it."),
        ("Moana", "An adventurous teenager sails out on a daring ocean mission to save her people."),
    ]
    .into_iter()
    .map(|(id, text)| Document::new(id.to_string(), text))
    .collect()
}

fn configs() -> Vec<IndexConfig> {
    vec![
        IndexConfig::default(),
        IndexConfig::default().with_mode(SimilarityMode::OnDemand),
        IndexConfig::default().with_parallel(true),
        IndexConfig::default().with_mode(SimilarityMode::OnDemand).with_parallel(true),
    ]
}

#[test]
fn identical_text_ranks_first_then_corpus_order() {
    init_tracing();
    let docs = vec![
        Document::new("A", "a cat sat"),
        Document::new("B", "a cat sat"),
        Document::new("C", "a dog ran"),
    ];
    for config in configs() {
        let handle = build_index_with(&docs, &config).unwrap();
        assert_eq!(recommend(&handle, &"A", 2).unwrap(), vec!["B", "C"]);
    }
}

#[test]
fn single_empty_document_has_no_recommendations() {
    let handle = build_index(&[Document::new("A", "")]).unwrap();
    assert_eq!(recommend(&handle, &"A", 5).unwrap(), Vec::<&str>::new());
    assert!(handle.vocabulary().is_empty());
}

#[test]
fn unknown_identifier_is_not_found() {
    let handle = build_index(&movies()).unwrap();
    let err = recommend(&handle, &"Z".to_string(), 1).unwrap_err();
    assert!(matches!(err, RankerError::NotFound { .. }));
    assert!(handle.similarity_row(&"Z".to_string()).is_err());
}

#[test]
fn empty_corpus_is_rejected() {
    let err = build_index::<String>(&[]).unwrap_err();
    assert_eq!(err, RankerError::EmptyCorpus);
}

#[test]
fn duplicate_identifiers_are_rejected_by_default() {
    let docs = vec![Document::new(1u32, "one"), Document::new(1u32, "uno")];
    assert!(matches!(
        build_index(&docs).unwrap_err(),
        RankerError::DuplicateIdentifier { first: 0, second: 1, .. }
    ));
}

#[test]
fn query_is_never_recommended_and_lengths_are_bounded() {
    let docs = movies();
    for config in configs() {
        let handle = build_index_with(&docs, &config).unwrap();
        let n = handle.len();
        for doc in &docs {
            for k in [1, 3, n - 1, n + 4] {
                let recs = handle.recommend(&doc.id, k).unwrap();
                assert!(!recs.contains(&doc.id));
                assert_eq!(recs.len(), k.min(n - 1));
            }
        }
    }
}

#[test]
fn similarity_is_symmetric_with_unit_diagonal() {
    let docs = movies();
    for config in configs() {
        let handle = build_index_with(&docs, &config).unwrap();
        for a in &docs {
            let self_sim = handle.similarity(&a.id, &a.id).unwrap();
            if a.text.is_empty() {
                assert_eq!(self_sim, 0.0);
            } else {
                assert_eq!(self_sim, 1.0);
            }
            for b in &docs {
                let ab = handle.similarity(&a.id, &b.id).unwrap();
                let ba = handle.similarity(&b.id, &a.id).unwrap();
                assert_eq!(ab, ba);
                assert!((0.0..=1.0).contains(&ab));
            }
        }
    }
}

#[test]
fn rankings_follow_shared_vocabulary() {
    let handle = build_index(&movies()).unwrap();
    let alien = handle.recommend(&"Alien".to_string(), 1).unwrap();
    assert_eq!(alien, vec!["Aliens".to_string()]);
    let heat = handle.recommend(&"Heat".to_string(), 1).unwrap();
    assert_eq!(heat, vec!["Ronin".to_string()]);

    let scored = handle.recommend_scored(&"Finding Nemo".to_string(), DEFAULT_RECOMMENDATIONS).unwrap();
    assert_eq!(scored.list[0].key, "Moana");
    assert_eq!(scored.len(), handle.len() - 1);
    assert!(scored.list.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn similarity_row_includes_query_in_corpus_order() {
    let docs = movies();
    let handle = build_index(&docs).unwrap();
    let row = handle.similarity_row(&"Heat".to_string()).unwrap();
    assert_eq!(row.len(), docs.len());
    assert_eq!(
        row.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        docs.iter().map(|d| d.id.as_str()).collect::<Vec<_>>()
    );
    assert_eq!(row[2].1, 1.0);
}

#[test]
fn rebuilding_is_deterministic() {
    let docs = movies();
    let first = build_index(&docs).unwrap();
    let second = build_index_with(&docs, &IndexConfig::default().with_parallel(true)).unwrap();
    assert_eq!(first.vocabulary(), second.vocabulary());
    for doc in &docs {
        assert_eq!(
            first.recommend_scored(&doc.id, 4).unwrap(),
            second.recommend_scored(&doc.id, 4).unwrap()
        );
    }
}

#[test]
fn stop_words_are_configurable() {
    let docs = vec![Document::new("x", "the end"), Document::new("y", "the start")];
    let keep_all = IndexConfig::default()
        .with_vectorizer(VectorizerConfig::default().with_stop_words(StopWords::None));
    let handle = build_index_with(&docs, &keep_all).unwrap();
    assert!(handle.similarity(&"x", &"y").unwrap() > 0.0);

    let default = build_index(&docs).unwrap();
    assert_eq!(default.similarity(&"x", &"y").unwrap(), 0.0);
}

#[test]
fn handle_serves_concurrent_readers() {
    let handle = Arc::new(build_index(&movies()).unwrap());
    let expected = handle.recommend(&"Sunshine".to_string(), 3).unwrap();
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = Arc::clone(&handle);
            thread::spawn(move || handle.recommend(&"Sunshine".to_string(), 3).unwrap())
        })
        .collect();
    for worker in workers {
        assert_eq!(worker.join().unwrap(), expected);
    }
}

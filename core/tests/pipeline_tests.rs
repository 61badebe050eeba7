use moviematch_core::{
    build_index, build_vectors, cosine_similarity, prepare, recommend, Corpus, RecommendError,
};
use moviematch_core::tokenizer::tokenize;
use proptest::prelude::*;
use std::collections::HashSet;

fn movies() -> Corpus {
    [
        ("The Godfather", "Crime,Drama An offer you can't refuse. Marlon Brando Al Pacino Francis Ford Coppola Mario Puzo"),
        ("The Godfather Part II", "Crime,Drama Al Pacino Robert De Niro Francis Ford Coppola Mario Puzo"),
        ("Star Wars", "Action,Adventure,Fantasy A long time ago in a galaxy far, far away. Mark Hamill George Lucas"),
        ("The Empire Strikes Back", "Action,Adventure,Fantasy Mark Hamill Harrison Ford Irvin Kershner George Lucas"),
        ("Amélie", "Comedy,Romance Audrey Tautou Jean-Pierre Jeunet"),
        ("Untitled", ""),
    ]
    .into_iter()
    .collect()
}

#[test]
fn end_to_end_space_scenario() {
    let corpus: Corpus = [
        ("A", "space adventure crew"),
        ("B", "space opera crew"),
        ("C", "romance drama"),
    ]
    .into_iter()
    .collect();
    let index = build_index(&corpus);
    let (vectors, _) = build_vectors(&corpus, &index);
    let recs = recommend("A", &corpus, &vectors, 2).unwrap();
    let titles: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);
}

#[test]
fn sequels_rank_first() {
    let snap = prepare(movies());
    let recs = snap.recommend("The Godfather", 3).unwrap();
    assert_eq!(recs[0].title, "The Godfather Part II");
    let recs = snap.recommend("Star Wars", 3).unwrap();
    assert_eq!(recs[0].title, "The Empire Strikes Back");
}

#[test]
fn recommendations_are_sorted_and_exclude_target() {
    let snap = prepare(movies());
    for title in snap.corpus().titles() {
        let recs = snap.recommend(title, 5).unwrap();
        assert!(recs.len() <= 5);
        assert!(recs.iter().all(|r| r.title != title));
        assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn empty_document_has_zero_similarity() {
    let snap = prepare(movies());
    let recs = snap.recommend("Untitled", 10).unwrap();
    assert_eq!(recs.len(), 5);
    assert!(recs.iter().all(|r| r.score == 0.0));
    assert_eq!(snap.empty_documents(), 1);
}

#[test]
fn unknown_title_is_typed_error() {
    let snap = prepare(movies());
    assert!(matches!(
        snap.recommend("Nonexistent", 5),
        Err(RecommendError::NotFound { title }) if title == "Nonexistent"
    ));
    // Lookup is exact.
    assert!(snap.recommend("the godfather", 5).is_err());
}

#[test]
fn empty_corpus() {
    let snap = prepare(Corpus::new());
    assert!(snap.vocabulary().is_empty());
    assert!(snap.vectors().is_empty());
    assert!(snap.index().is_empty());
}

#[test]
fn idf_decreases_with_document_frequency() {
    let snap = prepare(movies());
    let index = snap.index();
    let vocab = snap.vocabulary();
    for (a, _) in index.iter() {
        for (b, _) in index.iter() {
            let (ta, tb) = (index.term_id(a).unwrap(), index.term_id(b).unwrap());
            if index.df(ta) < index.df(tb) {
                assert!(vocab.idf(ta).unwrap() > vocab.idf(tb).unwrap());
            }
        }
    }
}

fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    let word = prop::sample::select(vec!["space", "crew", "love", "war", "Crime", "drama", "ford", "_x", "42"]);
    let text = prop::collection::vec(word, 0..8).prop_map(|ws| ws.join(", "));
    prop::collection::vec(("[A-Z][a-z]{0,6}", text), 0..12)
}

proptest! {
    #[test]
    fn index_membership_matches_tokens(docs in corpus_strategy()) {
        let corpus: Corpus = docs.into_iter().collect();
        let index = build_index(&corpus);
        for (term, postings) in index.iter() {
            let unique: HashSet<_> = postings.iter().collect();
            prop_assert_eq!(unique.len(), postings.len());
            for (doc_id, doc) in corpus.iter() {
                let has = tokenize(&doc.text).iter().any(|t| t == term);
                prop_assert_eq!(postings.contains(&doc_id), has);
            }
        }
        for (doc_id, doc) in corpus.iter() {
            for token in tokenize(&doc.text) {
                prop_assert!(index.postings(&token).is_some_and(|p| p.contains(&doc_id)));
            }
        }
    }

    #[test]
    fn vectors_share_dimension(docs in corpus_strategy()) {
        let corpus: Corpus = docs.into_iter().collect();
        let index = build_index(&corpus);
        let (vectors, vocab) = build_vectors(&corpus, &index);
        prop_assert_eq!(vectors.len(), corpus.len());
        for (_, v) in vectors.iter() {
            prop_assert_eq!(v.to_dense().len(), vocab.len());
        }
    }

    #[test]
    fn cosine_properties(a in prop::collection::vec(-10.0f64..10.0, 1..16)) {
        let b: Vec<f64> = a.iter().rev().copied().collect();
        let zero = vec![0.0; a.len()];
        if a.iter().any(|&x| x != 0.0) {
            prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
        }
        prop_assert_eq!(cosine_similarity(&a, &zero), 0.0);
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
        let s = cosine_similarity(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&s));
    }

    #[test]
    fn ranking_is_bounded_and_sorted(docs in corpus_strategy(), top_n in 0usize..6) {
        let corpus: Corpus = docs.into_iter().collect();
        let snap = prepare(corpus.clone());
        for title in corpus.titles() {
            let recs = snap.recommend(title, top_n).unwrap();
            prop_assert!(recs.len() <= top_n);
            prop_assert!(recs.len() <= corpus.len() - 1);
            prop_assert!(recs.iter().all(|r| r.title != title));
            prop_assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}

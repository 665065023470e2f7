use std::path::Path;

use wavess_analysis::{
    analyze, AnalysisError, AnalysisOptions, Field, Lexicon, SentimentLabel,
};
use wavess_core::{load_dataset, AudienceMember, Comment, Dataset, DatasetPaths, Post};

fn sample_dataset() -> Dataset {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data");
    let paths = DatasetPaths {
        posts: dir.join("linkedin_post.csv"),
        audience: dir.join("audience_data.csv"),
        comments: dir.join("comments_data.csv"),
    };
    load_dataset(&paths).expect("sample data should load")
}

fn small_dataset() -> Dataset {
    Dataset {
        posts: vec![
            Post {
                id: "1".to_string(),
                text: "Great news! #Launch #AI and more #AI".to_string(),
                likes: 100,
                comments: 20,
                shares: 10,
            },
            Post {
                id: "2".to_string(),
                text: "Second post".to_string(),
                likes: 160,
                comments: 0,
                shares: 0,
            },
        ],
        audience: vec![
            AudienceMember {
                name: "A".to_string(),
                role: "Marketing Lead".to_string(),
                relevance_to_icp: 0.8,
            },
            AudienceMember {
                name: "B".to_string(),
                role: "Digital Marketing".to_string(),
                relevance_to_icp: 0.6,
            },
            AudienceMember {
                name: "C".to_string(),
                role: "Research Fellow".to_string(),
                relevance_to_icp: 0.9,
            },
        ],
        comments: vec![
            Comment {
                text: "Love it".to_string(),
            },
            Comment {
                text: "Meh".to_string(),
            },
        ],
    }
}

#[test]
fn analyze_small_dataset() {
    let report = analyze(
        &small_dataset(),
        &Lexicon::default(),
        &AnalysisOptions::default(),
    )
    .unwrap();

    assert_eq!(report.hashtags, vec!["#Launch", "#AI", "#AI"]);
    assert_eq!(report.posts.len(), 2);
    assert_eq!(report.primary_post.as_ref().unwrap().post.id, "1");

    let summary = &report.summary;
    assert_eq!(summary.post_sentiment_label, SentimentLabel::Positive);
    assert_eq!(summary.best_post_id, "2");
    assert!((summary.best_post_score - 80.0).abs() < 1e-9);
    assert_eq!(summary.top_field, Field::Research);
    assert!((summary.avg_icp_relevance - 0.766_666_666_666_666_7).abs() < 1e-9);
    // "Love it" = 0.5, "Meh" = 0.0
    assert!((summary.avg_comment_sentiment - 0.25).abs() < 1e-12);

    assert_eq!(report.field_aggregates.len(), 2);
    assert_eq!(report.field_aggregates[1].field, Field::Marketing);
    assert_eq!(report.comment_histogram.len(), 10);
    let binned: usize = report.comment_histogram.iter().map(|b| b.count).sum();
    assert_eq!(binned, 2);
}

#[test]
fn analyze_respects_top_keywords_option() {
    let options = AnalysisOptions {
        top_keywords: 1,
        histogram_bins: 4,
    };
    let report = analyze(&small_dataset(), &Lexicon::default(), &options).unwrap();
    assert_eq!(report.keywords.len(), 1);
    assert_eq!(report.keywords[0].keyword, "great");
    assert_eq!(report.comment_histogram.len(), 4);
}

#[test]
fn analyze_sample_files() {
    let report = analyze(
        &sample_dataset(),
        &Lexicon::default(),
        &AnalysisOptions::default(),
    )
    .unwrap();

    assert_eq!(
        report.hashtags,
        vec!["#ClimateTech", "#ESG", "#Sustainability"]
    );
    assert_eq!(report.summary.post_sentiment_label, SentimentLabel::Positive);
    // 101: 120 + 10.8 + 3.6 = 134.4; 103: 90 + 15.6 + 2.2 = 107.8
    assert_eq!(report.summary.best_post_id, "101");
    assert!((report.summary.best_post_score - 134.4).abs() < 1e-9);
    assert_eq!(report.summary.top_field, Field::Sustainability);
    assert!(report.summary.avg_comment_sentiment > 0.0);
    assert!(report
        .comments
        .iter()
        .all(|c| (-1.0..=1.0).contains(&c.sentiment_polarity)));
    assert_eq!(report.audience.len(), 8);
}

#[test]
fn analyze_is_idempotent() {
    let dataset = small_dataset();
    let lexicon = Lexicon::default();
    let options = AnalysisOptions::default();
    let a = analyze(&dataset, &lexicon, &options).unwrap();
    let b = analyze(&dataset, &lexicon, &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_comments_fail() {
    let mut dataset = small_dataset();
    dataset.comments.clear();
    let err = analyze(&dataset, &Lexicon::default(), &AnalysisOptions::default()).unwrap_err();
    assert!(
        matches!(err, AnalysisError::EmptyInput { what: "comments" }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn empty_audience_fails() {
    let mut dataset = small_dataset();
    dataset.audience.clear();
    let err = analyze(&dataset, &Lexicon::default(), &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { what: "audience" }));
}

#[test]
fn empty_posts_fail_at_best_post() {
    let mut dataset = small_dataset();
    dataset.posts.clear();
    let err = analyze(&dataset, &Lexicon::default(), &AnalysisOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyInput { what: "posts" }));
}

#[test]
fn custom_lexicon_changes_sentiment() {
    let lexicon = Lexicon::from_yaml_str("words:\n  meh: -0.4\n").unwrap();
    let report = analyze(&small_dataset(), &lexicon, &AnalysisOptions::default()).unwrap();
    // "Love it" = 0.5, "Meh" = -0.4
    assert!((report.summary.avg_comment_sentiment - 0.05).abs() < 1e-12);
}

#[test]
fn report_serializes_to_json() {
    let report = analyze(
        &small_dataset(),
        &Lexicon::default(),
        &AnalysisOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["top_field"], "Research");
    assert_eq!(json["summary"]["post_sentiment_label"], "Positive");
    // flattened records
    assert_eq!(json["posts"][0]["id"], "1");
    assert_eq!(json["audience"][0]["field"], "Marketing");
    assert_eq!(json["comments"][0]["text"], "Love it");
}

//! End-to-end guesses through the engine facade

use nameguess_common::answers::GenderAnswer;
use nameguess_common::config::EngineConfig;
use nameguess_common::events::EngineEvent;
use nameguess_common::tags::{LengthBucket, StartClass};
use nameguess_common::AnswerSet;
use nameguess_engine::db::source::StaticLineSource;
use nameguess_engine::db::{LineSource, SourceFormat};
use nameguess_engine::ranker::{MAX_CONFIDENCE, MIN_CONFIDENCE};
use nameguess_engine::{Engine, EngineError, GuessSource, LinearNamePredictor, NoNoise};
use std::sync::Arc;

fn national(year: u16, lines: &[&str]) -> Box<dyn LineSource> {
    Box::new(StaticLineSource::new(
        format!("yob{}", year),
        SourceFormat::National { year },
        lines.iter().copied(),
    ))
}

fn deterministic(sources: Vec<Box<dyn LineSource>>) -> Engine {
    Engine::new(sources, EngineConfig::default())
        .with_noise(Arc::new(NoNoise))
        .with_predictor(None)
}

fn scenario_answers() -> AnswerSet {
    AnswerSet::from_json_str(
        r#"{"gender": "F", "decade": 1980, "length": "medium", "starts_with": "vowel"}"#,
    )
    .unwrap()
}

#[tokio::test]
async fn test_vowel_medium_names_outrank_equally_popular_others() {
    let engine = deterministic(vec![national(
        1980,
        &[
            "Monica,F,400",
            "Olivia,F,400",
            "Brenda,F,400",
            "Emily,F,400",
            "Amy,F,400",
        ],
    )]);

    let guesses = engine
        .calculate_top_guesses(&scenario_answers(), 5)
        .await
        .unwrap();
    let order: Vec<&str> = guesses.iter().map(|g| g.name.as_str()).collect();

    let pos = |name: &str| order.iter().position(|n| *n == name).unwrap();
    assert!(pos("Olivia") < pos("Monica"));
    assert!(pos("Olivia") < pos("Brenda"));
    assert!(pos("Emily") < pos("Monica"));
    assert!(pos("Emily") < pos("Brenda"));
    // Amy is short and not in the gender+length pool
    assert!(!order.contains(&"Amy"));
    assert!(guesses.iter().all(|g| g.source == GuessSource::RuleBased));
}

#[tokio::test]
async fn test_top_k_bounds_and_confidence_range() {
    let engine = Engine::new(
        vec![national(
            1985,
            &[
                "Jessica,F,50000",
                "Jennifer,F,45000",
                "Amanda,F,30000",
                "Ashley,F,28000",
                "Sarah,F,20000",
                "Emily,F,9000",
                "Olivia,F,800",
            ],
        )],
        EngineConfig::default(),
    );

    for k in 1..=5 {
        let guesses = engine
            .calculate_top_guesses(&scenario_answers(), k)
            .await
            .unwrap();
        assert!(!guesses.is_empty());
        assert!(guesses.len() <= k);
        assert!(guesses
            .iter()
            .all(|g| (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&g.confidence)));
    }
}

#[tokio::test]
async fn test_confidence_never_increases_down_the_list() {
    let engine = deterministic(vec![national(
        1990,
        &["Olivia,F,900", "Emily,F,800", "Avery,F,700", "Monica,F,600"],
    )]);
    let guesses = engine
        .calculate_top_guesses(&scenario_answers(), 4)
        .await
        .unwrap();
    assert!(guesses
        .windows(2)
        .all(|w| w[0].confidence >= w[1].confidence));
}

#[tokio::test]
async fn test_empty_answers_still_produce_guesses() {
    let engine = deterministic(vec![national(1990, &["Olivia,F,900", "Noah,M,800"])]);
    let guesses = engine
        .calculate_top_guesses(&AnswerSet::default(), 5)
        .await
        .unwrap();
    assert_eq!(guesses.len(), 2);
}

#[tokio::test]
async fn test_non_binary_without_shared_names_uses_fallback_list() {
    let engine = deterministic(vec![national(1990, &["Olivia,F,900", "Noah,M,800"])]);
    let answers = AnswerSet {
        gender: Some(GenderAnswer::NonBinary),
        length: Some(LengthBucket::Short),
        ..AnswerSet::default()
    };
    let guesses = engine.calculate_top_guesses(&answers, 5).await.unwrap();
    assert_eq!(guesses.len(), 5);
    assert!(guesses.iter().all(|g| g.name.chars().count() <= 4));
}

#[tokio::test]
async fn test_builtin_predictor_blends_with_rule_scores() {
    let engine = Engine::new(
        vec![national(1990, &["Olivia,F,900", "Emily,F,800", "Monica,F,700"])],
        EngineConfig::default(),
    )
    .with_noise(Arc::new(NoNoise))
    .with_predictor(Some(Arc::new(LinearNamePredictor::builtin())));

    let guesses = engine
        .calculate_top_guesses(&scenario_answers(), 5)
        .await
        .unwrap();
    assert!(guesses.len() <= 5);
    // Olivia and Emily are in both the pool and the built-in vocabulary
    assert!(guesses
        .iter()
        .any(|g| g.name == "Olivia" && g.source == GuessSource::Hybrid));
}

#[tokio::test]
async fn test_lookups_require_load_but_guessing_loads() {
    let engine = deterministic(vec![national(1990, &["Olivia,F,900"])]);
    assert!(matches!(
        engine.get_candidates(&scenario_answers()),
        Err(EngineError::NotLoaded)
    ));
    assert!(!engine.is_loaded());

    let guesses = engine
        .calculate_top_guesses(&scenario_answers(), 5)
        .await
        .unwrap();
    assert_eq!(guesses[0].name, "Olivia");
    assert!(engine.is_loaded());
    assert_eq!(engine.database().load_count(), 1);

    let by_gender = engine
        .names_by_gender(nameguess_engine::GenderCode::F)
        .unwrap();
    assert_eq!(by_gender.len(), 1);
    assert!(engine
        .names_by_all_criteria(
            None,
            nameguess_engine::GenderCode::F,
            LengthBucket::Medium,
            StartClass::Vowel,
            nameguess_engine::record::PopularityBucket::VeryPopular,
        )
        .unwrap()
        .iter()
        .any(|r| r.name == "Olivia"));
}

#[tokio::test]
async fn test_guesses_event_is_broadcast() {
    let engine = deterministic(vec![national(1990, &["Olivia,F,900"])]);
    let mut rx = engine.subscribe();

    engine
        .calculate_top_guesses(&scenario_answers(), 3)
        .await
        .unwrap();

    loop {
        match rx.recv().await.unwrap() {
            EngineEvent::GuessesProduced { count, top, .. } => {
                assert_eq!(count, 1);
                assert_eq!(top.as_deref(), Some("Olivia"));
                break;
            }
            _ => continue,
        }
    }
}

#[tokio::test]
async fn test_engine_from_config_falls_back_when_model_missing() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("yob1990.txt"), "Olivia,F,900\n").unwrap();

    let mut config = nameguess_common::config::TomlConfig::default();
    config.engine.model_path = Some(dir.path().join("missing-model.json"));
    config.engine.confidence_noise = 0.0;

    let engine = Engine::from_config(dir.path(), &config).unwrap();
    let guesses = engine.top_guesses(&scenario_answers()).await.unwrap();
    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses[0].source, GuessSource::RuleBased);
}

#[tokio::test]
async fn test_engine_rejects_non_finite_noise_and_direct_engine_still_guesses() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("yob1990.txt"), "Olivia,F,900\n").unwrap();

    let config: nameguess_common::config::TomlConfig =
        toml::from_str("[engine]\nconfidence_noise = inf\n").unwrap();
    assert!(Engine::from_config(dir.path(), &config).is_err());

    // Engine::new skips validation; the noise source ignores the bad amplitude
    let engine = Engine::new(vec![national(1990, &["Olivia,F,900"])], config.engine.clone())
        .with_predictor(None);
    let guesses = engine.top_guesses(&scenario_answers()).await.unwrap();
    assert_eq!(guesses[0].name, "Olivia");
    assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&guesses[0].confidence));
}

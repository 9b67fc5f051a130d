use std::collections::HashSet;

use yesno::answer::Answer;
use yesno::engine::ResponseEngine;
use yesno::keywords::{KeywordSet, Score};
use yesno::random::mock::ScriptedRandom;
use yesno::random::{SeededRandom, SystemRandom};

/// An engine whose every draw is `draw`.
fn fixed(draw: f64) -> ResponseEngine {
    ResponseEngine::new(KeywordSet::default(), Box::new(ScriptedRandom::constant(draw)))
}

const POSITIVE_LEANING: &[&str] = &[
    "Isso é bom?",
    "Vale a pena tentar?",
    "Vou ter sucesso e ser feliz?",
    "É FÁCIL e SIMPLES?",
    "posso ir? consigo?",
];

const NEGATIVE_LEANING: &[&str] = &[
    "Isso é ruim?",
    "Nunca vai dar certo, não é?",
    "Isso é impossível e ruim",
    "Tenho medo do risco",
    "É mentira ou é falso?",
];

#[test]
fn positive_lean_with_high_draw_is_yes() {
    for q in POSITIVE_LEANING {
        let engine = fixed(0.75);
        let score = engine.score(q);
        assert!(score.positive > score.negative, "not positive: {q}");
        assert_eq!(engine.generate_response(q), Answer::Yes, "{q}");
    }
}

#[test]
fn negative_lean_with_high_draw_is_no() {
    for q in NEGATIVE_LEANING {
        let engine = fixed(0.75);
        let score = engine.score(q);
        assert!(score.negative > score.positive, "not negative: {q}");
        assert_eq!(engine.generate_response(q), Answer::No, "{q}");
    }
}

#[test]
fn low_draw_overturns_the_lean() {
    assert_eq!(fixed(0.2).generate_response("Isso é bom?"), Answer::No);
    assert_eq!(fixed(0.2).generate_response("Isso é ruim?"), Answer::Yes);
}

#[test]
fn threshold_itself_overturns_the_lean() {
    assert_eq!(fixed(0.3).generate_response("Isso é bom?"), Answer::No);
}

#[test]
fn neutral_question_reaches_both_answers() {
    let engine = ResponseEngine::new(KeywordSet::default(), Box::new(SystemRandom));
    assert_eq!(engine.score("asdf asdf asdf"), Score::default());

    let seen: HashSet<Answer> = (0..200)
        .map(|_| engine.generate_response("asdf asdf asdf"))
        .collect();
    assert_eq!(seen.len(), 2);
}

#[test]
fn devo_estudar_is_a_coin_flip() {
    let q = "Devo estudar mais?";
    assert_eq!(fixed(0.1).score(q), Score::default());
    assert_eq!(fixed(0.1).generate_response(q), Answer::Yes);
    assert_eq!(fixed(0.6).generate_response(q), Answer::No);
}

#[test]
fn impossivel_e_ruim_leans_no() {
    let q = "Isso é impossível e ruim";
    let engine = fixed(0.5);
    assert_eq!(engine.score(q), Score { positive: 1, negative: 2 });
    assert_eq!(engine.generate_response(q), Answer::No);
    assert_eq!(fixed(0.1).generate_response(q), Answer::Yes);
}

#[test]
fn case_does_not_matter() {
    let engine = fixed(0.5);
    assert_eq!(engine.score("BOM dia"), engine.score("bom dia"));
}

#[test]
fn substring_counts() {
    let engine = fixed(0.5);
    assert_eq!(engine.score("nuncaa").negative, 1);
}

#[test]
fn leaning_split_is_roughly_seventy_thirty() {
    let engine = ResponseEngine::new(KeywordSet::default(), Box::new(SeededRandom::new(2024)));
    let trials = 10_000;
    let yes = (0..trials)
        .filter(|_| engine.generate_response("Isso é bom?") == Answer::Yes)
        .count();
    let share = yes as f64 / trials as f64;
    assert!((0.66..0.74).contains(&share), "share was {share}");
}

#[test]
fn negative_split_is_roughly_seventy_thirty() {
    let engine = ResponseEngine::new(KeywordSet::default(), Box::new(SeededRandom::new(2024)));
    let trials = 10_000;
    let no = (0..trials)
        .filter(|_| engine.generate_response("Isso é ruim?") == Answer::No)
        .count();
    let share = no as f64 / trials as f64;
    assert!((0.66..0.74).contains(&share), "share was {share}");
}

#[test]
fn tie_split_is_roughly_even() {
    let engine = ResponseEngine::new(KeywordSet::default(), Box::new(SeededRandom::new(2024)));
    let trials = 10_000;
    let yes = (0..trials)
        .filter(|_| engine.generate_response("asdf asdf asdf") == Answer::Yes)
        .count();
    let share = yes as f64 / trials as f64;
    assert!((0.46..0.54).contains(&share), "share was {share}");
}

#[test]
fn seeded_engines_agree() {
    let a = ResponseEngine::new(KeywordSet::default(), Box::new(SeededRandom::new(9)));
    let b = ResponseEngine::new(KeywordSet::default(), Box::new(SeededRandom::new(9)));
    for q in NEGATIVE_LEANING.iter().chain(POSITIVE_LEANING) {
        assert_eq!(a.generate_response(q), b.generate_response(q));
    }
}

#[test]
fn custom_keywords_drive_the_lean() {
    let keywords = KeywordSet::new(["rain"], ["sun"]);
    let engine = ResponseEngine::new(keywords, Box::new(ScriptedRandom::constant(0.9)));
    assert_eq!(engine.generate_response("Will it RAIN?"), Answer::Yes);
    assert_eq!(engine.generate_response("Sunny?"), Answer::No);
    // Portuguese defaults are gone
    assert_eq!(engine.score("bom"), Score::default());
}

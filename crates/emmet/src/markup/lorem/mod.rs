//! Lorem-ipsum generator: a node named `lorem`, `lorem10` or `lorem5-10`
//! (optionally with a vocabulary suffix like `loremru`) is replaced with
//! generated filler text.

mod latin;
mod russian;
mod spanish;

use std::sync::LazyLock;

use emmet_abbreviation::ast::{AbbreviationNode, ValueToken};
use emmet_abbreviation::tokenizer::tokens::Repeater;
use rand::RngCore;
use rand::Rng;
use regex::Regex;

use crate::config::Config;
use crate::markup::AncestorScope;
use crate::markup::implicit_tag::resolve_implicit_tag;

static RE_LOREM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^lorem([a-z]*)(\d*)(-\d*)?$").unwrap());

struct Vocabulary {
	common: &'static [&'static str],
	words: &'static [&'static str],
}

// Biased toward full stops
const SENTENCE_ENDS: &[char] = &['?', '!', '.', '.', '.'];

fn vocabulary(lang: &str) -> Vocabulary {
	match lang {
		"ru" => Vocabulary {
			common: russian::COMMON,
			words: russian::WORDS,
		},
		"sp" => Vocabulary {
			common: spanish::COMMON,
			words: spanish::WORDS,
		},
		_ => Vocabulary {
			common: latin::COMMON,
			words: latin::WORDS,
		},
	}
}

pub fn lorem(
	node: &mut AbbreviationNode,
	ancestors: &[AncestorScope],
	config: &Config,
	rng: &mut dyn RngCore,
) {
	let Some(name) = node.name.clone() else {
		return;
	};

	let Some(captures) = RE_LOREM.captures(&name) else {
		return;
	};

	let db = vocabulary(&captures[1].to_lowercase());
	let min_words: usize = captures
		.get(2)
		.and_then(|m| m.as_str().parse().ok())
		.map(|count: usize| count.max(1))
		.unwrap_or(30);
	let max_words = captures
		.get(3)
		.and_then(|m| m.as_str()[1..].parse().ok())
		.map(|count: usize| count.max(min_words))
		.unwrap_or(min_words);
	let word_count = rng.random_range(min_words..=max_words);

	let repeat = node.repeat.or_else(|| find_repeater(ancestors));
	let start_with_common = repeat.is_none_or(|repeat| repeat.value == 0);

	node.attributes = None;
	node.value = Some(vec![ValueToken::Text(paragraph(
		&db,
		word_count,
		start_with_common,
		rng,
	))]);

	if node.repeat.is_some() && !ancestors.is_empty() {
		node.name = None;
		resolve_implicit_tag(node, ancestors, config);
	} else {
		node.name = None;
	}
}

/// Generates a paragraph of "Lorem ipsum" text with `word_count` words;
/// `start_with_common` opens with the canonical first sentence.
fn paragraph(
	db: &Vocabulary,
	word_count: usize,
	start_with_common: bool,
	rng: &mut dyn RngCore,
) -> String {
	let mut result: Vec<String> = Vec::new();
	let mut total_words = 0;

	if start_with_common && !db.common.is_empty() {
		let words: Vec<String> = db.common[..db.common.len().min(word_count)]
			.iter()
			.map(|s| s.to_string())
			.collect();
		total_words += words.len();
		result.push(sentence(insert_commas(words, rng), Some('.'), rng));
	}

	while total_words < word_count {
		let chunk = rng.random_range(2..=30).min(word_count - total_words);
		let words = sample(db.words, chunk, rng);
		total_words += words.len();
		result.push(sentence(insert_commas(words, rng), None, rng));
	}

	result.join(" ")
}

/// Picks `count` distinct words from the vocabulary.
fn sample(words: &[&str], count: usize, rng: &mut dyn RngCore) -> Vec<String> {
	let iterations = count.min(words.len());
	let mut result: Vec<String> = Vec::with_capacity(iterations);

	while result.len() < iterations {
		let word = words[rng.random_range(0..words.len())];
		if !result.iter().any(|picked| picked == word) {
			result.push(word.to_string());
		}
	}

	result
}

fn sentence(mut words: Vec<String>, end: Option<char>, rng: &mut dyn RngCore) -> String {
	if let Some(first) = words.first_mut() {
		*first = capitalize(first);
	}

	let end = end.unwrap_or_else(|| SENTENCE_ENDS[rng.random_range(0..SENTENCE_ENDS.len())]);
	format!("{}{end}", words.join(" "))
}

/// Inserts commas at randomly selected words.
fn insert_commas(words: Vec<String>, rng: &mut dyn RngCore) -> Vec<String> {
	if words.len() < 2 {
		return words;
	}

	let mut words = words;
	let len = words.len();
	let total_commas = match len {
		4..=6 => rng.random_range(0..=1),
		7..=12 => rng.random_range(0..=2),
		_ => rng.random_range(1..=4),
	};

	for _ in 0..total_commas {
		let pos = rng.random_range(0..len - 1);
		if !words[pos].ends_with(',') {
			words[pos].push(',');
		}
	}

	words
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

fn find_repeater(ancestors: &[AncestorScope]) -> Option<Repeater> {
	ancestors.iter().rev().find_map(|scope| scope.repeat)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn test_paragraph_word_count() {
		let mut rng = StdRng::seed_from_u64(42);
		let db = vocabulary("");

		let text = paragraph(&db, 5, true, &mut rng);
		assert_eq!(text.split(' ').count(), 5);
		assert!(text.starts_with("Lorem"));

		let text = paragraph(&db, 40, true, &mut rng);
		assert_eq!(text.split(' ').count(), 40);
	}

	#[test]
	fn test_seeded_reproducibility() {
		let db = vocabulary("");
		let a = paragraph(&db, 12, true, &mut StdRng::seed_from_u64(7));
		let b = paragraph(&db, 12, true, &mut StdRng::seed_from_u64(7));
		assert_eq!(a, b);
	}

	#[test]
	fn test_vocabulary_choice() {
		let mut rng = StdRng::seed_from_u64(1);
		let db = vocabulary("ru");
		let text = paragraph(&db, 4, true, &mut rng);
		assert!(text.starts_with("Далеко-далеко"));
	}
}

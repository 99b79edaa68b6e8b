use crate::model::Phase;
use crate::parsing::blank_to_none;
use crate::rng::SyntheticRng;
use crate::rules::schema::SentimentLexicon;

/// Estimate a satisfaction score in 1..=5 from free text.
///
/// Placeholder heuristic, not a sentiment model: counts lexicon hits and
/// draws uniformly from a range picked per phase. Kept behind this single
/// entry point so a real model can replace it without touching callers.
///
/// - Initial, missing text: 2..=3
/// - Initial, more negative than positive hits: 1..=2, otherwise 2..=3
/// - Final, missing text: absent
/// - Final, more positive: 4..=5; tied: 3..=4; more negative: 2..=3
pub fn estimate_satisfaction(
    lexicon: &SentimentLexicon,
    text: Option<&str>,
    phase: Phase,
    rng: &mut SyntheticRng,
) -> Option<u8> {
    let Some(text) = blank_to_none(text) else {
        return match phase {
            Phase::Initial => Some(rng.score_between(2, 3)),
            Phase::Final => None,
        };
    };

    let lower = text.to_lowercase();
    let negative = count_hits(&lower, &lexicon.negative);
    let positive = count_hits(&lower, &lexicon.positive);

    let score = match phase {
        Phase::Initial => {
            if negative > positive {
                rng.score_between(1, 2)
            } else {
                rng.score_between(2, 3)
            }
        }
        Phase::Final => {
            if positive > negative {
                rng.score_between(4, 5)
            } else if positive == negative {
                rng.score_between(3, 4)
            } else {
                rng.score_between(2, 3)
            }
        }
    };
    Some(score)
}

fn count_hits(text: &str, words: &[String]) -> usize {
    words.iter().filter(|w| text.contains(w.as_str())).count()
}

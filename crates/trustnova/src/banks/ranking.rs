//! Similarity ranking over the offers that match a loan query.
//!
//! Offers are scored by how representative their (interest rate, processing
//! time) profile is of the matching cohort: features are standardized over the
//! cohort, and each offer's score is its mean cosine similarity to every
//! cohort member, itself included.

use std::collections::HashSet;

use super::domain::{BankOffer, LoanQuery, RecommendationResult};

pub const MAX_RECOMMENDATIONS: usize = 3;

const STD_DEV_TOLERANCE: f64 = 1e-12;

/// An offer paired with its cohort similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOffer<'a> {
    pub offer: &'a BankOffer,
    pub score: f64,
}

/// Filters, ranks, deduplicates by bank name and keeps the top three.
pub fn recommend(offers: &[BankOffer], query: &LoanQuery) -> RecommendationResult {
    let cohort: Vec<&BankOffer> = offers.iter().filter(|offer| offer.matches(query)).collect();
    if cohort.is_empty() {
        return RecommendationResult::unmatched();
    }

    let ranked = rank(&cohort);
    let mut seen: HashSet<String> = HashSet::new();
    let offers = ranked
        .into_iter()
        .filter(|scored| seen.insert(scored.offer.bank_name.clone()))
        .take(MAX_RECOMMENDATIONS)
        .map(|scored| scored.offer.view())
        .collect();

    RecommendationResult {
        offers,
        matched: true,
    }
}

/// Scores every offer in the cohort and orders them by descending score.
/// Equal scores keep cohort order.
pub fn rank<'a>(cohort: &[&'a BankOffer]) -> Vec<ScoredOffer<'a>> {
    let rates: Vec<f64> = cohort.iter().map(|offer| offer.interest_rate).collect();
    let days: Vec<f64> = cohort
        .iter()
        .map(|offer| offer.processing_time_days)
        .collect();
    let rates = standardize(&rates);
    let days = standardize(&days);

    let vectors: Vec<[f64; 2]> = rates
        .iter()
        .zip(days.iter())
        .map(|(rate, day)| [*rate, *day])
        .collect();

    let count = vectors.len() as f64;
    let mut scored: Vec<ScoredOffer<'a>> = cohort
        .iter()
        .enumerate()
        .map(|(i, offer)| {
            let mut similarities: Vec<f64> = vectors
                .iter()
                .enumerate()
                .map(|(j, other)| {
                    if i == j {
                        1.0
                    } else {
                        cosine_similarity(&vectors[i], other)
                    }
                })
                .collect();
            // rows with equal features share these terms, summed sorted they total
            // bit-identically
            similarities.sort_by(f64::total_cmp);
            let total: f64 = similarities.iter().sum();
            ScoredOffer {
                offer: *offer,
                score: total / count,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Rescales to zero mean and unit population variance. A constant column
/// maps to all zeros.
pub fn standardize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    // summing equal values can leave a rounding residue in the mean
    if std_dev <= STD_DEV_TOLERANCE * mean.abs().max(1.0) {
        return vec![0.0; values.len()];
    }

    values.iter().map(|value| (value - mean) / std_dev).collect()
}

/// Cosine of the angle between `u` and `v`; 0.0 when either is a zero vector.
pub fn cosine_similarity(u: &[f64], v: &[f64]) -> f64 {
    let dot: f64 = u.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
    let norm_u = u.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_v = v.iter().map(|b| b * b).sum::<f64>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }

    dot / (norm_u * norm_v)
}

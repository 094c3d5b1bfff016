//! Fuzzy matching implementation for contact lookup.
//!
//! This module provides forgiving contact search with:
//! - Exact matching on phone numbers
//! - Fuzzy name matching (substring and edit distance)
//! - Confidence scoring (0-100 scale)

use crate::book::AddressBook;
use crate::domain::PhoneNumber;
use crate::models::Record;

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct ContactMatcher;

impl ContactMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find contacts matching a free-text query.
    ///
    /// A query that looks like a phone number is first compared against
    /// every stored phone; otherwise (or if that finds nothing for a
    /// record) the query is fuzzy-matched against the contact name.
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name, limited
    /// to `max_results`.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        book: &'a AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let phone_query = Self::normalize_phone(query);
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in book {
            if PhoneNumber::is_valid(&phone_query) && record.find_phone(&phone_query).is_some() {
                results.push(MatchResult {
                    record,
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name().as_str()) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().cmp(b.record.name()))
        });
        results.truncate(max_results);

        tracing::debug!(query = %query, matches = results.len(), "Contact search completed");
        results
    }

    /// Fuzzy match a query against a contact name.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, contact_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(contact_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Substring match scales with how much of the name the query covers
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of a full matrix
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;

            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Normalize a phone query for comparison.
    ///
    /// Keeps only the digits.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_of(entries: &[(&str, Option<&str>)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phone) in entries {
            let mut record = Record::new(*name).unwrap();
            if let Some(phone) = phone {
                record.add_phone(phone).unwrap();
            }
            book.add_record(record);
        }
        book
    }

    fn matched_names<'a>(results: &[MatchResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.record.name().as_str()).collect()
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(ContactMatcher::normalize_phone("050-123-45 67"), "0501234567");
        assert_eq!(ContactMatcher::normalize_phone("abc"), "");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(ContactMatcher::normalize_name("  John   Doe  "), "john doe");
        assert_eq!(ContactMatcher::normalize_name("JANE SMITH"), "jane smith");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(ContactMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(ContactMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_fuzzy_name_match() {
        let matcher = ContactMatcher::new();

        assert_eq!(matcher.fuzzy_match_name("john doe", "John Doe"), Some(95));

        let partial = matcher.fuzzy_match_name("john", "John Doe").unwrap();
        assert!(partial >= 50);

        assert!(matcher.fuzzy_match_name("johnn doe", "John Doe").is_some());
        assert!(matcher.fuzzy_match_name("zzz", "John Doe").is_none());
    }

    #[test]
    fn test_find_matches_by_phone() {
        let book = book_of(&[("John", Some("1234567890")), ("Jane", Some("5555555555"))]);
        let results = ContactMatcher::new().find_matches("555-555-5555", &book, 5, 0);

        assert_eq!(matched_names(&results), vec!["Jane"]);
        assert_eq!(results[0].confidence, 100);
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_find_matches_by_name_sorted() {
        let book = book_of(&[
            ("Johnny", None),
            ("John", None),
            ("Alice", None),
        ]);
        let results = ContactMatcher::new().find_matches("john", &book, 5, 30);

        assert_eq!(matched_names(&results), vec!["John", "Johnny"]);
        assert!(results.iter().all(|r| r.match_type == MatchType::FuzzyName));
    }

    #[test]
    fn test_confidence_threshold() {
        let book = book_of(&[("John Doe", None), ("Alice Smith", None)]);
        let matcher = ContactMatcher::new();

        let count_low = matcher.find_matches("john", &book, 5, 0).len();
        let count_high = matcher.find_matches("john", &book, 5, 90).len();

        assert!(count_high <= count_low);
    }

    #[test]
    fn test_max_results_limit() {
        let book = book_of(&[
            ("John Doe", None),
            ("John Smith", None),
            ("Johnny Walker", None),
        ]);
        let results = ContactMatcher::new().find_matches("john", &book, 2, 0);
        assert_eq!(results.len(), 2);
    }
}

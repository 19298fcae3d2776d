// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation fixtures for regression checks.
//!
//! A fixture is a hand with the ranked hand the evaluator returned for it,
//! fixtures are stored as JSON and can be verified against the current
//! evaluator since the evaluation of a set of cards is deterministic.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use crate::{Card, RankedHand, evaluate};

/// A hand and its evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// The evaluated cards.
    pub hand: Vec<Card>,
    /// The evaluator result.
    pub result: RankedHand,
}

/// A fixture whose hand now evaluates to a different result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The recorded fixture.
    pub fixture: Fixture,
    /// The current evaluator result.
    pub actual: RankedHand,
}

/// Evaluates the given hands into fixtures.
///
/// Fails on the first hand that is not a valid 5 to 7 cards hand.
pub fn record<I>(hands: I) -> Result<Vec<Fixture>>
where
    I: IntoIterator<Item = Vec<Card>>,
{
    hands
        .into_iter()
        .enumerate()
        .map(|(idx, hand)| {
            let result = evaluate(&hand).with_context(|| format!("hand {idx}"))?;
            Ok(Fixture { hand, result })
        })
        .collect()
}

/// Evaluates the fixtures hands and returns the ones with a different result.
///
/// Fails on the first fixture with an invalid hand.
pub fn verify(fixtures: &[Fixture]) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();

    for (idx, fixture) in fixtures.iter().enumerate() {
        let actual = evaluate(&fixture.hand).with_context(|| format!("fixture {idx}"))?;
        if actual != fixture.result {
            mismatches.push(Mismatch {
                fixture: fixture.clone(),
                actual,
            });
        }
    }

    Ok(mismatches)
}

/// Writes fixtures as JSON.
pub fn write_to<W: Write>(writer: W, fixtures: &[Fixture]) -> Result<()> {
    serde_json::to_writer_pretty(writer, fixtures)?;
    Ok(())
}

/// Reads fixtures from JSON.
pub fn read_from<R: Read>(reader: R) -> Result<Vec<Fixture>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Saves fixtures to a file.
pub fn save<P: AsRef<Path>>(path: P, fixtures: &[Fixture]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    write_to(&mut writer, fixtures)?;
    writer.flush()?;

    Ok(())
}

/// Loads fixtures from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Fixture>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_from(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, EvalError, parse_cards};

    fn hands() -> Vec<Vec<Card>> {
        ["AD 4D AH 8D KD 4S 2D", "3S 4S AH 5D 6H 4C 7D", "AC KD 9H 7S 5C"]
            .into_iter()
            .map(|h| parse_cards(h).unwrap())
            .collect()
    }

    #[test]
    fn record_and_reload() {
        let fixtures = record(hands()).unwrap();
        assert_eq!(fixtures.len(), 3);
        assert_eq!(fixtures[0].result.category(), Category::Flush);
        assert_eq!(fixtures[1].result.category(), Category::Straight);
        assert_eq!(fixtures[2].result.category(), Category::HighCard);

        let mut buf = Vec::new();
        write_to(&mut buf, &fixtures).unwrap();

        let json = String::from_utf8(buf.clone()).unwrap();
        assert!(json.contains(r#""category": "flush""#));

        let loaded = read_from(buf.as_slice()).unwrap();
        assert_eq!(loaded, fixtures);
        assert!(verify(&loaded).unwrap().is_empty());
    }

    #[test]
    fn verify_reports_mismatch() {
        let mut fixtures = record(hands()).unwrap();
        let straight = fixtures[1].result;
        fixtures[0].result = straight;

        let mismatches = verify(&fixtures).unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].fixture.result, straight);
        assert_eq!(mismatches[0].actual.category(), Category::Flush);
    }

    #[test]
    fn read_invalid_json() {
        assert!(read_from(r#"[{"hand": [["X", 3]]}]"#.as_bytes()).is_err());
        assert!(load("/nonexistent/oddsmith/fixtures.json").is_err());
    }

    #[test]
    fn invalid_fixture_hands() {
        let fixture = record(hands()).unwrap().remove(2);

        // Four cards.
        let mut short = fixture.clone();
        short.hand.truncate(4);
        let mut buf = Vec::new();
        write_to(&mut buf, &[short]).unwrap();
        let loaded = read_from(buf.as_slice()).unwrap();
        let err = verify(&loaded).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::HandSize(4))
        );

        // The same card twice.
        let mut duplicate = fixture;
        duplicate.hand[1] = duplicate.hand[0];
        let mut buf = Vec::new();
        write_to(&mut buf, &[duplicate]).unwrap();
        let loaded = read_from(buf.as_slice()).unwrap();
        let err = verify(&loaded).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EvalError>(),
            Some(EvalError::Card(_))
        ));

        assert!(record(vec![parse_cards("AS KS QS").unwrap()]).is_err());
    }
}

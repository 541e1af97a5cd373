//! Tempo to delay/frequency conversion
//! One beat (quarter note) lasts 60000 / bpm milliseconds

use serde::Serialize;

use super::error::TempoError;
use crate::types::subdivision::{NoteSubdivision, NOTE_SUBDIVISIONS};

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_SECOND: f64 = 1_000.0;

/// Delay and frequency for one subdivision at a given tempo
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    #[serde(rename = "note")]
    pub subdivision: &'static NoteSubdivision,
    pub delay_ms: f64,
    pub frequency_hz: f64,
}

/// Check that a tempo is finite and strictly positive
pub fn validate_bpm(bpm: f64) -> Result<f64, TempoError> {
    if !bpm.is_finite() {
        return Err(TempoError::NotFinite);
    }
    if bpm <= 0.0 {
        return Err(TempoError::NonPositive(bpm));
    }
    Ok(bpm)
}

/// Parse tempo text as typed by the user
pub fn parse_bpm(text: &str) -> Result<f64, TempoError> {
    let trimmed = text.trim();
    let bpm = trimmed
        .parse::<f64>()
        .map_err(|_| TempoError::NotANumber(trimmed.to_string()))?;
    validate_bpm(bpm)
}

/// Length of one beat in milliseconds
pub fn quarter_note_ms(bpm: f64) -> Result<f64, TempoError> {
    let beat_ms = MS_PER_MINUTE / validate_bpm(bpm)?;
    // Tiny tempos overflow the beat length
    if !beat_ms.is_finite() {
        return Err(TempoError::NotFinite);
    }
    Ok(beat_ms)
}

/// Compute delay and frequency for every subdivision, in table order
pub fn convert(bpm: f64) -> Result<Vec<ConversionResult>, TempoError> {
    let beat_ms = quarter_note_ms(bpm)?;

    NOTE_SUBDIVISIONS
        .iter()
        .map(|subdivision| {
            let delay_ms = beat_ms * subdivision.multiplier.value();
            let frequency_hz = MS_PER_SECOND / delay_ms;
            if !delay_ms.is_finite() || delay_ms <= 0.0 || !frequency_hz.is_finite() {
                return Err(TempoError::NotFinite);
            }
            Ok(ConversionResult {
                subdivision,
                delay_ms,
                frequency_hz,
            })
        })
        .collect()
}

/// Parse then convert; what the UI calls on every edit
pub fn convert_text(text: &str) -> Result<Vec<ConversionResult>, TempoError> {
    convert(parse_bpm(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(results: &'a [ConversionResult], label: &str) -> &'a ConversionResult {
        results
            .iter()
            .find(|r| r.subdivision.label == label)
            .unwrap()
    }

    #[test]
    fn test_120_bpm() {
        let results = convert(120.0).unwrap();
        assert_eq!(results.len(), NOTE_SUBDIVISIONS.len());

        let quarter = find(&results, "1/4");
        assert!((quarter.delay_ms - 500.0).abs() < 1e-9);
        assert!((quarter.frequency_hz - 2.0).abs() < 1e-9);

        let eighth = find(&results, "1/8");
        assert!((eighth.delay_ms - 250.0).abs() < 1e-9);
        assert!((eighth.frequency_hz - 4.0).abs() < 1e-9);

        let dotted_quarter = find(&results, "1/4d");
        assert!((dotted_quarter.delay_ms - 750.0).abs() < 1e-9);
        assert!((dotted_quarter.frequency_hz - 1.3333).abs() < 0.001);
    }

    #[test]
    fn test_90_bpm_whole_note() {
        let results = convert(90.0).unwrap();
        let whole = &results[0];
        assert_eq!(whole.subdivision.label, "1/1");
        assert!((whole.delay_ms - 2666.6667).abs() < 0.001);
        assert!((whole.frequency_hz - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_delay_matches_formula() {
        for bpm in [1.0, 33.3, 60.0, 90.0, 120.0, 174.5, 300.0, 1000.0] {
            let beat = 60000.0 / bpm;
            let results = convert(bpm).unwrap();
            for (result, subdivision) in results.iter().zip(NOTE_SUBDIVISIONS.iter()) {
                assert_eq!(result.subdivision, subdivision);
                assert_eq!(result.delay_ms, beat * subdivision.multiplier.value());
                assert_eq!(result.frequency_hz, 1000.0 / result.delay_ms);
            }
        }
    }

    #[test]
    fn test_delays_strictly_decreasing() {
        for bpm in [40.0, 128.0, 999.9] {
            let results = convert(bpm).unwrap();
            for pair in results.windows(2) {
                assert!(pair[0].delay_ms > pair[1].delay_ms);
                assert!(pair[1].delay_ms > 0.0);
            }
        }
    }

    #[test]
    fn test_invalid_tempo() {
        assert_eq!(convert(0.0), Err(TempoError::NonPositive(0.0)));
        assert_eq!(convert(-60.0), Err(TempoError::NonPositive(-60.0)));
        assert_eq!(convert(f64::INFINITY), Err(TempoError::NotFinite));
        assert_eq!(convert(f64::NAN), Err(TempoError::NotFinite));
    }

    #[test]
    fn test_extreme_tempos() {
        // Beat length itself overflows
        assert_eq!(quarter_note_ms(1e-305), Err(TempoError::NotFinite));
        assert_eq!(convert(parse_bpm("1e-305").unwrap()), Err(TempoError::NotFinite));

        // Beat length fits but the whole note (x4) does not
        assert!(quarter_note_ms(5e-304).is_ok());
        assert_eq!(convert(5e-304), Err(TempoError::NotFinite));

        let results = convert(f64::MAX).unwrap();
        assert!(results.iter().all(|r| r.delay_ms > 0.0 && r.frequency_hz.is_finite()));
        for pair in results.windows(2) {
            assert!(pair[0].delay_ms > pair[1].delay_ms);
        }
    }

    #[test]
    fn test_parse_bpm() {
        assert_eq!(parse_bpm(" 120 "), Ok(120.0));
        assert_eq!(parse_bpm("97.5"), Ok(97.5));
        assert_eq!(parse_bpm("abc"), Err(TempoError::NotANumber("abc".to_string())));
        assert_eq!(parse_bpm(""), Err(TempoError::NotANumber(String::new())));
        assert_eq!(parse_bpm("0"), Err(TempoError::NonPositive(0.0)));
        assert_eq!(parse_bpm("-60"), Err(TempoError::NonPositive(-60.0)));
        assert_eq!(parse_bpm("inf"), Err(TempoError::NotFinite));
        assert_eq!(parse_bpm("NaN"), Err(TempoError::NotFinite));
    }

    #[test]
    fn test_convert_text() {
        assert_eq!(convert_text("120").unwrap(), convert(120.0).unwrap());
        assert!(convert_text("12o").is_err());
    }

    #[test]
    fn test_quarter_note_ms() {
        assert_eq!(quarter_note_ms(120.0), Ok(500.0));
        assert!(quarter_note_ms(0.0).is_err());
    }
}

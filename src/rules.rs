use crate::models::{SentimentLabel, WindowedRecord};

/// Deviation-significance test: the distance from the moving average must be
/// at least `threshold` standard deviations. An exact-zero deviation is never
/// significant, so a flat window (std = 0) does not trip on `0 >= 0`.
fn is_significant(value: f64, mean: f64, std: f64, threshold: f64) -> bool {
    let deviation = (value - mean).abs();
    deviation > 0.0 && deviation >= threshold * std
}

/// Classify one windowed record given its immediate predecessor's net-OI
/// moving average. Pure function; no side effects.
///
/// Decision table on (direction of the net-OI moving average, LTP vs its MA):
/// rising OI with price above its MA is ambiguous fresh-writing (weak bullish),
/// rising OI with price below is strong bearish, falling OI flips both, and a
/// flat OI MA is an explicit tie.
pub fn classify_record(
    record: &WindowedRecord,
    prev_net_oi_ma: Option<f64>,
    threshold: f64,
) -> SentimentLabel {
    let Some(stats) = record.stats else {
        return SentimentLabel::NotEnoughData;
    };

    let ltp_significant = is_significant(record.base.ltp, stats.ltp_ma, stats.ltp_std, threshold);
    let netoi_significant = is_significant(
        record.base.net_oi_change as f64,
        stats.net_oi_ma,
        stats.net_oi_std,
        threshold,
    );

    if !(ltp_significant || netoi_significant) {
        return SentimentLabel::SidewaysChop;
    }

    let Some(prev_ma) = prev_net_oi_ma else {
        return SentimentLabel::NotEnoughData;
    };

    let direction = stats.net_oi_ma - prev_ma;
    let price_above_ma = record.base.ltp > stats.ltp_ma;

    if direction > 0.0 {
        if price_above_ma {
            SentimentLabel::WeakBullishCaution
        } else {
            SentimentLabel::StrongBearish
        }
    } else if direction < 0.0 {
        if price_above_ma {
            SentimentLabel::StrongBullish
        } else {
            SentimentLabel::WeakBearishCaution
        }
    } else {
        SentimentLabel::Neutral
    }
}

/// Classify the full ordered sequence for one symbol. "Previous" always means
/// the immediately preceding record of the same sequence.
pub fn classify_sequence(records: &[WindowedRecord], threshold: f64) -> Vec<SentimentLabel> {
    let mut prev_net_oi_ma = None;
    records
        .iter()
        .map(|record| {
            let label = classify_record(record, prev_net_oi_ma, threshold);
            prev_net_oi_ma = record.stats.map(|s| s.net_oi_ma);
            label
        })
        .collect()
}

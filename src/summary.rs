//! Percentage Summary Module
//!
//! 列に含まれる一意な値の出現割合を計算するモジュール。
//! すべての値を文字列化してから数え上げるため、数値と文字列が
//! 混在した列もそのまま集計できます。

use serde::Serialize;
use std::collections::BTreeMap;

/// 一意な値ごとの出現割合（パーセント）
///
/// 列の各値を文字列表現へ変換し、一意な文字列ごとの出現回数を
/// 全体に対するパーセントとして保持します。エントリは文字列キーの
/// 辞書順に並びます（出現順や頻度順ではありません）。
///
/// 各パーセント値は最近接偶数丸め（銀行丸め）で整数に丸められるため、
/// 合計は厳密に100になるとは限りません。一意な値の個数をnとすると、
/// 合計は100±nの範囲に収まります。
///
/// # 使用例
///
/// ```rust
/// use chartzero::summarize;
///
/// let summary = summarize(vec!["c", "4", "c", "c"]);
/// assert_eq!(summary.get("c"), Some(75.0));
/// assert_eq!(summary.get("4"), Some(25.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PercentageSummary {
    /// 一意な値（文字列化済み）→ パーセント。キーの辞書順
    entries: BTreeMap<String, f64>,

    /// 集計対象となった値の総数
    total_count: usize,
}

impl PercentageSummary {
    /// 列の値から集計を生成する
    ///
    /// 空の列からは空の集計が生成されます（ゼロ除算は発生しません）。
    ///
    /// # 引数
    ///
    /// * `values` - 集計対象の値の列。各値は`ToString`で文字列化される
    pub fn from_values<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total_count = 0usize;

        for value in values {
            *counts.entry(value.to_string()).or_insert(0) += 1;
            total_count += 1;
        }

        let entries = counts
            .into_iter()
            .map(|(key, count)| {
                let percentage = count as f64 * 100.0 / total_count as f64;
                (key, round_half_to_even(percentage))
            })
            .collect();

        Self {
            entries,
            total_count,
        }
    }

    /// 指定した値のパーセントを取得する
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// 一意な値の個数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 集計が空かどうか（空の列を集計した場合）
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 集計対象となった値の総数
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// エントリを文字列キーの辞書順で走査する
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, pct)| (key.as_str(), *pct))
    }

    /// 丸め後のパーセントの合計
    pub fn percentage_sum(&self) -> f64 {
        self.entries.values().sum()
    }
}

/// 列の値を一意な値ごとの出現割合へ集計する
///
/// `PercentageSummary::from_values`の薄いエイリアスです。
///
/// # 使用例
///
/// ```rust
/// use chartzero::summarize;
///
/// let summary = summarize(vec![2, 5, 5, 4]);
/// assert_eq!(summary.get("5"), Some(50.0));
/// ```
pub fn summarize<I, T>(column: I) -> PercentageSummary
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    PercentageSummary::from_values(column)
}

/// 最近接偶数丸め（銀行丸め）
///
/// ちょうど.5の場合は偶数側へ丸める。それ以外は通常の四捨五入。
fn round_half_to_even(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor == 0.5 {
        if (floor as i64) % 2 == 0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        value.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_mixed_column() {
        // "c"が3回、"4"が1回の4要素の列
        let summary = summarize(vec!["c", "4", "c", "c"]);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.get("4"), Some(25.0));
        assert_eq!(summary.get("c"), Some(75.0));
        assert_eq!(summary.total_count(), 4);
    }

    #[test]
    fn test_summarize_numeric_column() {
        let summary = summarize(vec![2, 5, 5, 4]);

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.get("2"), Some(25.0));
        assert_eq!(summary.get("4"), Some(25.0));
        assert_eq!(summary.get("5"), Some(50.0));
    }

    #[test]
    fn test_summarize_key_order_is_lexicographic() {
        // 出現順（b, a, c）ではなく辞書順（a, b, c）で並ぶ
        let summary = summarize(vec!["b", "a", "c", "a"]);
        let keys: Vec<&str> = summary.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_summarize_empty_column() {
        let summary = summarize(Vec::<String>::new());
        assert!(summary.is_empty());
        assert_eq!(summary.len(), 0);
        assert_eq!(summary.total_count(), 0);
        assert_eq!(summary.percentage_sum(), 0.0);
    }

    #[test]
    fn test_summarize_single_value() {
        let summary = summarize(vec!["only"]);
        assert_eq!(summary.get("only"), Some(100.0));
        assert_eq!(summary.percentage_sum(), 100.0);
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // 8要素: "a"×1 (12.5%), "b"×3 (37.5%), "c"×4 (50%)
        // 12.5 → 12（12は偶数）、37.5 → 38（37は奇数）
        let summary = summarize(vec!["a", "b", "b", "b", "c", "c", "c", "c"]);
        assert_eq!(summary.get("a"), Some(12.0));
        assert_eq!(summary.get("b"), Some(38.0));
        assert_eq!(summary.get("c"), Some(50.0));
        assert_eq!(summary.percentage_sum(), 100.0);
    }

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_half_to_even(12.5), 12.0);
        assert_eq!(round_half_to_even(37.5), 38.0);
        assert_eq!(round_half_to_even(33.333333), 33.0);
        assert_eq!(round_half_to_even(66.666666), 67.0);
        assert_eq!(round_half_to_even(100.0), 100.0);
        assert_eq!(round_half_to_even(0.0), 0.0);
    }

    #[test]
    fn test_summary_is_serializable() {
        let summary = summarize(vec!["x", "y", "x", "x"]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"x\":75.0"));
        assert!(json.contains("\"total_count\":4"));
    }

    // プロパティベーステスト: 丸め誤差の上限
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// 丸め後のパーセント合計は、一意な値の個数をnとして
            /// 100±nの範囲に収まることを検証します。
            #[test]
            fn test_percentage_sum_is_near_100(
                values in proptest::collection::vec(0u8..6, 1..60)
            ) {
                let summary = summarize(values);
                let distinct = summary.len() as f64;
                let sum = summary.percentage_sum();

                prop_assert!(
                    (sum - 100.0).abs() <= distinct,
                    "sum {} outside 100±{}",
                    sum,
                    distinct
                );
            }

            /// 同じ列を2回集計しても同じ結果になることを検証します。
            #[test]
            fn test_summarize_is_deterministic(
                values in proptest::collection::vec(".{0,8}", 0..40)
            ) {
                let first = summarize(values.clone());
                let second = summarize(values);
                prop_assert_eq!(first, second);
            }
        }
    }
}

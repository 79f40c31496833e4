//! Formatter Module
//!
//! セル値を集計キーへ文字列化する処理を提供するモジュール。
//! 日付セルは`DateFormat`に従って文字列化されます。

use calamine::Data;

use crate::api::DateFormat;

/// セル値フォーマッター
///
/// calamineのセル値を集計キーとなる文字列へ変換します。
/// 数値はそのままの文字列表現、論理値はTRUE/FALSE、日付セルは
/// 設定された日付形式で文字列化されます。
#[derive(Debug, Clone)]
pub(crate) struct ValueFormatter {
    /// 日付の文字列化形式
    date_format: DateFormat,
}

impl ValueFormatter {
    /// 新しいValueFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }

    /// セル値を文字列化する
    ///
    /// # 引数
    ///
    /// * `value` - calamineのセル値
    ///
    /// # 戻り値
    ///
    /// 集計キーとして使用する文字列。空セルは空文字列になります
    /// （通常は呼び出し側で事前に除外されます）。
    pub fn format(&self, value: &Data) -> String {
        match value {
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            Data::String(s) => s.clone(),
            Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Data::DateTime(dt) => self.format_datetime(dt),
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
            Data::Error(e) => e.to_string(),
            Data::Empty => String::new(),
        }
    }

    /// 日付セルを文字列化する
    ///
    /// エポック処理（1900/1904システム、Excelのうるう年バグを含む）は
    /// calamineに委譲し、得られた日時をchronoでフォーマットします。
    /// 日時へ変換できないシリアル値は数値のまま文字列化されます。
    fn format_datetime(&self, dt: &calamine::ExcelDateTime) -> String {
        let Some(datetime) = dt.as_datetime() else {
            return dt.as_f64().to_string();
        };

        match &self.date_format {
            DateFormat::Iso8601 => {
                // 時刻成分を持たない値は日付のみで文字列化する
                if datetime.time() == chrono::NaiveTime::MIN {
                    datetime.format("%Y-%m-%d").to_string()
                } else {
                    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            DateFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> ValueFormatter {
        ValueFormatter::new(DateFormat::Iso8601)
    }

    #[test]
    fn test_format_int() {
        assert_eq!(formatter().format(&Data::Int(4)), "4");
        assert_eq!(formatter().format(&Data::Int(-12)), "-12");
    }

    #[test]
    fn test_format_float() {
        // 整数値のf64は小数点なしで文字列化される
        assert_eq!(formatter().format(&Data::Float(4.0)), "4");
        assert_eq!(formatter().format(&Data::Float(123.45)), "123.45");
    }

    #[test]
    fn test_format_string() {
        assert_eq!(
            formatter().format(&Data::String("hello".to_string())),
            "hello"
        );
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(formatter().format(&Data::Bool(true)), "TRUE");
        assert_eq!(formatter().format(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(formatter().format(&Data::Empty), "");
    }

    #[test]
    fn test_format_iso_strings_pass_through() {
        assert_eq!(
            formatter().format(&Data::DateTimeIso("2025-01-02T03:04:05".to_string())),
            "2025-01-02T03:04:05"
        );
        assert_eq!(
            formatter().format(&Data::DurationIso("PT1H30M".to_string())),
            "PT1H30M"
        );
    }

    #[test]
    fn test_same_numeric_value_collapses_across_types() {
        // Int(5)とFloat(5.0)は同じ集計キーになる
        let formatter = formatter();
        assert_eq!(
            formatter.format(&Data::Int(5)),
            formatter.format(&Data::Float(5.0))
        );
    }
}

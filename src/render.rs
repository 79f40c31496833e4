//! Summary Render Module
//!
//! 集計結果のテキスト出力（Markdown / CSV / JSON）を提供するモジュール。

use crate::api::SummaryFormat;
use crate::error::ChartZeroError;
use crate::summary::PercentageSummary;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// 集計結果を指定されたフォーマットで出力する
///
/// # 引数
///
/// * `title` - 列タイトル
/// * `summary` - 出力する集計結果
/// * `format` - 出力フォーマット
/// * `writer` - 出力先のライター
///
/// # 使用例
///
/// ```rust
/// use chartzero::{render_summary, summarize, SummaryFormat};
///
/// # fn main() -> Result<(), chartzero::ChartZeroError> {
/// let summary = summarize(vec!["c", "4", "c", "c"]);
/// let mut output = Vec::new();
/// render_summary("Answers", &summary, SummaryFormat::Markdown, &mut output)?;
/// # Ok(())
/// # }
/// ```
pub fn render_summary<W: Write>(
    title: &str,
    summary: &PercentageSummary,
    format: SummaryFormat,
    writer: &mut W,
) -> Result<(), ChartZeroError> {
    match format {
        SummaryFormat::Markdown => render_markdown(title, summary, writer),
        SummaryFormat::Csv => render_csv(title, summary, writer),
        SummaryFormat::Json => render_json(title, summary, writer),
    }
}

/// Markdownテーブル形式で出力
///
/// 列幅は全角文字を考慮した表示幅（unicode-width）で揃えます。
fn render_markdown<W: Write>(
    title: &str,
    summary: &PercentageSummary,
    writer: &mut W,
) -> Result<(), ChartZeroError> {
    const NAME_HEADER: &str = "Name";
    const PCT_HEADER: &str = "Percentages";

    writeln!(writer, "# {}\n", title)?;

    // 1. 列幅の計算
    let mut name_width = NAME_HEADER.width();
    let mut pct_width = PCT_HEADER.width();
    for (key, percentage) in summary.iter() {
        name_width = name_width.max(key.width());
        pct_width = pct_width.max(percentage.to_string().width());
    }

    // 2. ヘッダー行と区切り行
    writeln!(
        writer,
        "| {} | {} |",
        pad(NAME_HEADER, name_width),
        pad(PCT_HEADER, pct_width)
    )?;
    writeln!(writer, "| {} | {} |", "-".repeat(name_width), "-".repeat(pct_width))?;

    // 3. データ行（キーの辞書順）
    for (key, percentage) in summary.iter() {
        writeln!(
            writer,
            "| {} | {} |",
            pad(key, name_width),
            pad(&percentage.to_string(), pct_width)
        )?;
    }

    Ok(())
}

/// CSV形式で出力
fn render_csv<W: Write>(
    _title: &str,
    summary: &PercentageSummary,
    writer: &mut W,
) -> Result<(), ChartZeroError> {
    writeln!(writer, "Name,Percentages")?;
    for (key, percentage) in summary.iter() {
        writeln!(writer, "{},{}", escape_csv(key), percentage)?;
    }
    Ok(())
}

/// JSON形式で出力
fn render_json<W: Write>(
    title: &str,
    summary: &PercentageSummary,
    writer: &mut W,
) -> Result<(), ChartZeroError> {
    let mut percentages = serde_json::Map::new();
    for (key, percentage) in summary.iter() {
        percentages.insert(key.to_string(), serde_json::json!(percentage));
    }

    let json = serde_json::json!({
        "column": title,
        "total": summary.total_count(),
        "percentages": percentages,
    });

    serde_json::to_writer_pretty(&mut *writer, &json)
        .map_err(|e| ChartZeroError::Config(format!("JSON serialization error: {}", e)))?;
    writeln!(writer)?;

    Ok(())
}

/// 表示幅に合わせて右側を空白で埋める
fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

/// CSVフィールドのエスケープ
///
/// カンマ・引用符・改行を含むフィールドは引用符で囲みます。
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize;

    fn render_to_string(format: SummaryFormat) -> String {
        let summary = summarize(vec!["c", "4", "c", "c"]);
        let mut output = Vec::new();
        render_summary("Answers", &summary, format, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_render_markdown() {
        let output = render_to_string(SummaryFormat::Markdown);
        assert_eq!(
            output,
            "# Answers\n\n\
             | Name | Percentages |\n\
             | ---- | ----------- |\n\
             | 4    | 25          |\n\
             | c    | 75          |\n"
        );
    }

    #[test]
    fn test_render_markdown_wide_keys() {
        let summary = summarize(vec!["はい", "いいえ", "はい", "はい"]);
        let mut output = Vec::new();
        render_summary("回答", &summary, SummaryFormat::Markdown, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        // 全角キーでも各行の表示幅が揃う
        let rows: Vec<&str> = text.lines().skip(2).collect();
        let widths: Vec<usize> = rows.iter().map(|row| row.width()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_render_csv() {
        let output = render_to_string(SummaryFormat::Csv);
        assert_eq!(output, "Name,Percentages\n4,25\nc,75\n");
    }

    #[test]
    fn test_render_csv_escapes_commas() {
        let summary = summarize(vec!["a,b", "a,b", "plain", "plain"]);
        let mut output = Vec::new();
        render_summary("Keys", &summary, SummaryFormat::Csv, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("\"a,b\",50"));
        assert!(text.contains("plain,50"));
    }

    #[test]
    fn test_render_json() {
        let output = render_to_string(SummaryFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["column"], "Answers");
        assert_eq!(value["total"], 4);
        assert_eq!(value["percentages"]["4"], 25.0);
        assert_eq!(value["percentages"]["c"], 75.0);
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = summarize(Vec::<String>::new());
        let mut output = Vec::new();
        render_summary("Empty", &summary, SummaryFormat::Csv, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Name,Percentages\n");
    }
}

//! Report Module
//!
//! Fluent Builder APIを提供し、列の読み込み・集計・グラフ付き
//! レポート生成を一括で実行するファサードを構築する。

use crate::api::{ColumnSelector, DateFormat, SheetSelector, SummaryFormat};
use crate::chart::{HBarChart, Region};
use crate::error::ChartZeroError;
use crate::formatter::ValueFormatter;
use crate::options::ChartStyle;
use crate::reader::ColumnReader;
use crate::render::render_summary;
use crate::summary::{summarize, PercentageSummary};
use chrono::NaiveDate;
use rayon::prelude::*;
use rust_xlsxwriter::{Format, Workbook};
use std::collections::HashSet;
use std::io::{BufWriter, Read, Seek, Write};

/// レポート生成の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ReportConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 集計対象の列（空の場合は先頭列）
    pub columns: Vec<ColumnSelector>,

    /// 1行目をヘッダー行として扱うか
    pub has_header: bool,

    /// 日付の文字列化形式
    pub date_format: DateFormat,

    /// グラフスタイル
    pub style: ChartStyle,

    /// グラフの配置領域
    pub region: Region,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            columns: Vec::new(),
            has_header: true,
            date_format: DateFormat::Iso8601,
            style: ChartStyle::default(),
            region: Region::default(),
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Report`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use chartzero::{ChartStyle, ColumnSelector, ReportBuilder};
///
/// # fn main() -> Result<(), chartzero::ChartZeroError> {
/// let report = ReportBuilder::new()
///     .add_column(ColumnSelector::Header("Answers".to_string()))
///     .with_style(ChartStyle::Canonical)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    /// 内部設定（構築中）
    config: ReportConfig,
}

impl ReportBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 最初のシート
    /// - 集計対象: 先頭列
    /// - ヘッダー行: あり
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    /// - グラフスタイル: すべて未指定（各オプションのデフォルト）
    /// - 配置領域: `{x: 1, y: 1, width: 8, height: 6}`（インチ）
    pub fn new() -> Self {
        Self::default()
    }

    /// 集計対象の列を含むシートを選択する
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 集計対象の列を追加する
    ///
    /// 複数回呼び出すと、列ごとにワークシートとグラフが生成されます。
    /// 一度も呼ばれなかった場合は先頭列（`ColumnSelector::Index(0)`）が
    /// 対象になります。
    pub fn add_column(mut self, selector: ColumnSelector) -> Self {
        self.config.columns.push(selector);
        self
    }

    /// 1行目をヘッダー行として扱うかを指定する
    ///
    /// # 引数
    ///
    /// * `has_header: bool`:
    ///   * `true`: 1行目は列タイトル（デフォルト）
    ///   * `false`: 1行目から値として集計する
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// 日付セルの文字列化形式を指定する
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// グラフスタイルを指定する
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.config.style = style;
        self
    }

    /// グラフの配置領域を指定する（インチ単位）
    pub fn with_region(mut self, region: Region) -> Self {
        self.config.region = region;
        self
    }

    /// 設定を検証し、`Report`インスタンスを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ChartZeroError::Config(String)`: 設定の検証に失敗した場合
    ///   * ヘッダー行なしでヘッダー名による列選択を指定した
    ///   * カスタム日付形式が不正な書式文字列
    ///   * 配置領域が不正（負の座標、非正のサイズ）
    pub fn build(mut self) -> Result<Report, ChartZeroError> {
        // 1. 列選択の既定値
        if self.config.columns.is_empty() {
            self.config.columns.push(ColumnSelector::Index(0));
        }

        // 2. ヘッダー選択とヘッダー行設定の整合性
        if !self.config.has_header {
            if let Some(ColumnSelector::Header(name)) = self
                .config
                .columns
                .iter()
                .find(|selector| matches!(selector, ColumnSelector::Header(_)))
            {
                return Err(ChartZeroError::Config(format!(
                    "Column selector by header ('{}') requires a header row",
                    name
                )));
            }
        }

        // 3. カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            // テスト用の日付でフォーマット試行
            let test_date = NaiveDate::from_ymd_opt(2025, 1, 1)
                .ok_or_else(|| ChartZeroError::Config("Failed to create test date".to_string()))?;
            let formatted = test_date.format(format_str).to_string();
            if formatted.is_empty() {
                return Err(ChartZeroError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        // 4. 配置領域の検証
        self.config.region.validate()?;

        Ok(Report::new(self.config))
    }
}

/// レポート生成のファサード
///
/// 入力ワークブックから列を読み込み、一意な値の出現割合を集計し、
/// 集計テーブルとグラフを持つワークブックを出力するメインエントリー
/// ポイントです。
///
/// # 使用例
///
/// ```rust,no_run
/// use chartzero::ReportBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), chartzero::ChartZeroError> {
/// let report = ReportBuilder::new().build()?;
/// let input = File::open("survey.xlsx")?;
/// let output = File::create("report.xlsx")?;
/// report.generate(input, output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Report {
    /// レポート設定
    config: ReportConfig,

    /// セル値フォーマッター
    formatter: ValueFormatter,
}

impl Report {
    pub(crate) fn new(config: ReportConfig) -> Self {
        Self {
            formatter: ValueFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// 選択された列の集計結果を計算する
    ///
    /// # 引数
    ///
    /// * `input` - 入力ワークブックのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<(String, PercentageSummary)>)` - 列タイトルと集計結果のペア（列の指定順）
    /// * `Err(ChartZeroError)` - エラーが発生した場合
    pub fn summaries<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<Vec<(String, PercentageSummary)>, ChartZeroError> {
        // 1. ワークブックを開き、シートを選択
        let mut reader = ColumnReader::open(input)?;
        let sheet_name = reader.select_sheet(&self.config.sheet_selector)?;
        let range = reader.read_range(&sheet_name)?;

        // 2. 列の抽出と文字列化
        let mut columns = Vec::with_capacity(self.config.columns.len());
        for selector in &self.config.columns {
            let column = ColumnReader::extract_column(&range, selector, self.config.has_header)?;
            let values: Vec<String> = column
                .values
                .iter()
                .map(|value| self.formatter.format(value))
                .collect();
            columns.push((column.title, values));
        }

        // 3. 集計を列単位で並列化（結果の順序は列の指定順に保たれる）
        let summaries = columns
            .into_par_iter()
            .map(|(title, values)| (title, summarize(values)))
            .collect();

        Ok(summaries)
    }

    /// レポートを生成し、出力ライターへ書き込む
    ///
    /// 列ごとにワークシートを生成し、`Name`/`Percentages`の集計
    /// テーブルと、設定されたスタイルのグラフを配置します。空の列は
    /// テーブルのみ（グラフなし）になります。
    ///
    /// # 引数
    ///
    /// * `input` - 入力ワークブックのリーダー（Read + Seekトレイトを実装）
    /// * `output` - 出力先のライター（Writeトレイトを実装）
    pub fn generate<R: Read + Seek, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<(), ChartZeroError> {
        let buffer = self.generate_to_buffer(input)?;

        let mut writer = BufWriter::new(output);
        writer.write_all(&buffer)?;
        writer.flush()?;

        Ok(())
    }

    /// レポートを生成し、XLSXのバイト列として返す
    pub fn generate_to_buffer<R: Read + Seek>(
        &self,
        input: R,
    ) -> Result<Vec<u8>, ChartZeroError> {
        let summaries = self.summaries(input)?;

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let mut used_names = HashSet::new();

        for (index, (title, summary)) in summaries.iter().enumerate() {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_name_for(title, index, &mut used_names))?;

            // 1. 集計テーブルのヘッダー行
            worksheet.write_with_format(0, 0, "Name", &header_format)?;
            worksheet.write_with_format(0, 1, "Percentages", &header_format)?;

            // 2. テーブル本体とグラフ（空の列はテーブルのみ）
            if summary.is_empty() {
                continue;
            }
            let chart = HBarChart::from_summary(title.as_str(), summary)?;
            chart.insert_into(worksheet, (1, 0), self.config.region, &self.config.style)?;
        }

        Ok(workbook.save_to_buffer()?)
    }

    /// 集計結果をテキスト形式で出力する
    ///
    /// 複数列を集計した場合、各列の出力は空行で区切られます。
    ///
    /// # 引数
    ///
    /// * `input` - 入力ワークブックのリーダー（Read + Seekトレイトを実装）
    /// * `output` - 出力先のライター（Writeトレイトを実装）
    /// * `format` - 出力フォーマット
    pub fn export_summaries<R: Read + Seek, W: Write>(
        &self,
        input: R,
        output: W,
        format: SummaryFormat,
    ) -> Result<(), ChartZeroError> {
        let summaries = self.summaries(input)?;

        let mut writer = BufWriter::new(output);
        for (index, (title, summary)) in summaries.iter().enumerate() {
            if index > 0 {
                writeln!(writer)?;
            }
            render_summary(title, summary, format, &mut writer)?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// 列タイトルからワークシート名を生成する
///
/// Excelのシート名制約（31文字以内、`[]:*?/\`禁止）を満たすよう
/// 変換し、重複時はインデックスで一意化します。
fn sheet_name_for(title: &str, index: usize, used_names: &mut HashSet<String>) -> String {
    const MAX_SHEET_NAME_CHARS: usize = 31;

    let sanitized: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME_CHARS)
        .collect();

    let mut name = if sanitized.trim().is_empty() {
        format!("Column{}", index + 1)
    } else {
        sanitized
    };

    if used_names.contains(&name) {
        let suffix = format!(" ({})", index + 1);
        let keep = MAX_SHEET_NAME_CHARS.saturating_sub(suffix.chars().count());
        name = name.chars().take(keep).collect::<String>() + &suffix;
    }

    used_names.insert(name.clone());
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LegendPosition;
    use crate::options::ChartStyleBuilder;

    #[test]
    fn test_report_builder_defaults() {
        let builder = ReportBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::First);
        assert!(builder.config.columns.is_empty());
        assert!(builder.config.has_header);
        assert_eq!(builder.config.date_format, DateFormat::Iso8601);
        assert_eq!(builder.config.region, Region::default());
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ReportBuilder::new()
            .with_sheet_selector(SheetSelector::Name("Survey".to_string()))
            .add_column(ColumnSelector::Index(2))
            .add_column(ColumnSelector::Header("Answers".to_string()))
            .with_header(true)
            .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()))
            .with_region(Region::new(0.5, 0.5, 4.0, 3.0));

        assert_eq!(builder.config.columns.len(), 2);
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Survey"
        ));
    }

    #[test]
    fn test_build_defaults_to_first_column() {
        let report = ReportBuilder::new().build().unwrap();
        assert_eq!(report.config.columns, vec![ColumnSelector::Index(0)]);
    }

    #[test]
    fn test_build_with_style() {
        let style = ChartStyleBuilder::new()
            .with_legend(LegendPosition::Bottom)
            .build()
            .unwrap();
        let report = ReportBuilder::new().with_style(style.clone()).build().unwrap();
        assert_eq!(report.config.style, style);
    }

    #[test]
    fn test_build_header_selector_without_header_row() {
        let result = ReportBuilder::new()
            .add_column(ColumnSelector::Header("Answers".to_string()))
            .with_header(false)
            .build();

        match result {
            Err(ChartZeroError::Config(msg)) => {
                assert!(msg.contains("requires a header row"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_build_with_valid_custom_date_format() {
        let result = ReportBuilder::new()
            .with_date_format(DateFormat::Custom("%Y-%m-%d".to_string()))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_invalid_custom_date_format() {
        // 空のフォーマット文字列は無効
        let result = ReportBuilder::new()
            .with_date_format(DateFormat::Custom("".to_string()))
            .build();
        assert!(matches!(result, Err(ChartZeroError::Config(_))));
    }

    #[test]
    fn test_build_with_invalid_region() {
        let result = ReportBuilder::new()
            .with_region(Region::new(1.0, 1.0, 0.0, 6.0))
            .build();
        assert!(matches!(result, Err(ChartZeroError::Config(_))));
    }

    #[test]
    fn test_sheet_name_sanitization() {
        let mut used = HashSet::new();
        assert_eq!(sheet_name_for("Answers", 0, &mut used), "Answers");
        assert_eq!(sheet_name_for("a/b:c*d", 1, &mut used), "a_b_c_d");
        assert_eq!(sheet_name_for("", 2, &mut used), "Column3");
        assert_eq!(sheet_name_for("   ", 3, &mut used), "Column4");
    }

    #[test]
    fn test_sheet_name_truncation() {
        let mut used = HashSet::new();
        let long_title = "x".repeat(64);
        let name = sheet_name_for(&long_title, 0, &mut used);
        assert_eq!(name.chars().count(), 31);
    }

    #[test]
    fn test_sheet_name_uniqueness() {
        let mut used = HashSet::new();
        let first = sheet_name_for("Answers", 0, &mut used);
        let second = sheet_name_for("Answers", 1, &mut used);
        assert_ne!(first, second);
        assert!(second.chars().count() <= 31);
    }

    // 入出力を伴うテストは、実際のXLSXファイルが必要なため
    // 統合テスト（tests/）で実装します。
}

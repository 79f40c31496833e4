//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// シート選択方式
///
/// 集計対象の列を含むシートを選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 最初のシートを使用（デフォルト）
    First,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(1)` は2番目のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Survey".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::First
    }
}

/// 列選択方式
///
/// 集計対象の列を選択する方法を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColumnSelector {
    /// 列インデックス指定（0始まり、A列 = 0）
    Index(u32),

    /// ヘッダー名指定
    ///
    /// シートの1行目をヘッダー行として検索します。
    /// `ReportBuilder::with_header(false)`と組み合わせた場合は設定エラーになります。
    Header(String),
}

/// 日付の文字列化形式
///
/// 日付セルを集計キーへ文字列化する際の形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（YYYY-MM-DD）
    ///
    /// 例: `2025-11-20`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use chartzero::{DateFormat, ReportBuilder};
    ///
    /// # fn main() -> Result<(), chartzero::ChartZeroError> {
    /// let report = ReportBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::Iso8601
    }
}

/// 凡例の表示位置
///
/// グラフの凡例を配置できる4つの位置。JSON設定では小文字の文字列
/// （`"left"`など）で指定し、未知の値はデシリアライズエラーになります。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LegendPosition {
    /// グラフの左側
    Left,

    /// グラフの右側
    Right,

    /// グラフの上側
    Top,

    /// グラフの下側
    Bottom,
}

/// 集計結果のテキスト出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryFormat {
    /// Markdownテーブル形式（デフォルト）
    ///
    /// # 出力例
    ///
    /// ```markdown
    /// | Name | Percentages |
    /// | ---- | ----------- |
    /// | 4    | 25          |
    /// | c    | 75          |
    /// ```
    Markdown,

    /// CSV形式
    Csv,

    /// JSON形式
    ///
    /// 各列は`{"column": ..., "total": ..., "percentages": {...}}`の
    /// オブジェクトとして出力されます。
    Json,
}

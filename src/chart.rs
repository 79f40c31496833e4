//! Chart Placement Module
//!
//! 積み上げ横棒グラフの生成とワークシートへの配置を提供するモジュール。
//! 実際の描画・XML生成はすべてrust_xlsxwriterに委譲します。

use crate::error::ChartZeroError;
use crate::options::ChartStyle;
use crate::style;
use crate::summary::PercentageSummary;
use rust_xlsxwriter::{Chart, ChartType, Worksheet};
use serde::{Deserialize, Serialize};

/// インチ→ピクセル換算（96dpi）
const PIXELS_PER_INCH: f64 = 96.0;

/// グラフの配置領域
///
/// ワークシート上の配置位置とサイズをインチ単位で指定します。
/// デフォルトは`{x: 1, y: 1, width: 8, height: 6}`です。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// 左端位置（インチ）
    pub x: f64,

    /// 上端位置（インチ）
    pub y: f64,

    /// 幅（インチ）
    pub width: f64,

    /// 高さ（インチ）
    pub height: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            width: 8.0,
            height: 6.0,
        }
    }
}

impl Region {
    /// 新しい配置領域を生成する
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// 配置オフセットをピクセルへ換算する
    pub(crate) fn offset_pixels(&self) -> (u32, u32) {
        (
            (self.x * PIXELS_PER_INCH).round() as u32,
            (self.y * PIXELS_PER_INCH).round() as u32,
        )
    }

    /// サイズをピクセルへ換算する
    pub(crate) fn size_pixels(&self) -> (u32, u32) {
        (
            (self.width * PIXELS_PER_INCH).round() as u32,
            (self.height * PIXELS_PER_INCH).round() as u32,
        )
    }

    /// 領域の妥当性を検証する
    pub(crate) fn validate(&self) -> Result<(), ChartZeroError> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();

        if !finite || self.x < 0.0 || self.y < 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Err(ChartZeroError::Config(format!(
                "Invalid chart region: {:?}",
                self
            )));
        }

        Ok(())
    }
}

/// 積み上げ横棒グラフ
///
/// タイトル付きの単一系列（カテゴリと値の組）を保持し、ワークシート
/// 上の指定領域へグラフとして配置します。rust_xlsxwriterのグラフは
/// セル範囲を参照するため、配置時に系列データをアンカー位置へ書き
/// 込み、その範囲を系列として参照します。
///
/// # 使用例
///
/// ```rust,no_run
/// use chartzero::{summarize, ChartStyle, HBarChart, Region};
/// use rust_xlsxwriter::Workbook;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = summarize(vec!["c", "4", "c", "c"]);
/// let chart = HBarChart::from_summary("Answers", &summary)?;
///
/// let mut workbook = Workbook::new();
/// let worksheet = workbook.add_worksheet();
/// chart.insert_into(worksheet, (0, 0), Region::default(), &ChartStyle::default())?;
/// workbook.save("report.xlsx")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HBarChart {
    /// 系列名（グラフの凡例やタイトルに使われる）
    title: String,

    /// カテゴリラベル
    categories: Vec<String>,

    /// カテゴリごとの値
    values: Vec<f64>,
}

impl HBarChart {
    /// カテゴリと値の組からグラフを生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `ChartZeroError::Config(String)`: カテゴリと値の個数が
    ///   一致しない、またはデータが空の場合
    pub fn new(
        title: impl Into<String>,
        categories: Vec<String>,
        values: Vec<f64>,
    ) -> Result<Self, ChartZeroError> {
        if categories.len() != values.len() {
            return Err(ChartZeroError::Config(format!(
                "categories and values must have the same length ({} vs {})",
                categories.len(),
                values.len()
            )));
        }
        if categories.is_empty() {
            return Err(ChartZeroError::Config(
                "chart data must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title: title.into(),
            categories,
            values,
        })
    }

    /// 集計結果からグラフを生成する
    ///
    /// カテゴリは一意な値、値はパーセントになります（辞書順）。
    /// 空の集計からはグラフを生成できません。
    pub fn from_summary(
        title: impl Into<String>,
        summary: &PercentageSummary,
    ) -> Result<Self, ChartZeroError> {
        let mut categories = Vec::with_capacity(summary.len());
        let mut values = Vec::with_capacity(summary.len());
        for (key, percentage) in summary.iter() {
            categories.push(key.to_string());
            values.push(percentage);
        }

        Self::new(title, categories, values)
    }

    /// 系列のデータ点数
    pub fn point_count(&self) -> usize {
        self.categories.len()
    }

    /// 系列名
    pub fn title(&self) -> &str {
        &self.title
    }

    /// グラフをワークシートへ配置する
    ///
    /// 系列データを`anchor`（(行, 列)、0始まり）へ2列で書き込み、
    /// スタイルを適用した積み上げ横棒グラフを`region`の位置へ挿入
    /// します。呼び出しは一回限りの冪等な操作で、同じスタイルを
    /// 再適用しても外観は変わりません。
    ///
    /// # 引数
    ///
    /// * `worksheet` - 配置先のワークシート
    /// * `anchor` - 系列データを書き込む左上セル（(行, 列)）
    /// * `region` - グラフの配置領域（インチ単位）
    /// * `style` - 適用するグラフスタイル
    pub fn insert_into(
        &self,
        worksheet: &mut Worksheet,
        anchor: (u32, u16),
        region: Region,
        style: &ChartStyle,
    ) -> Result<(), ChartZeroError> {
        region.validate()?;

        let options = style.options();
        let sheet_name = worksheet.name();
        let (first_row, col) = anchor;
        let point_count = self.categories.len();
        let last_row = first_row + point_count as u32 - 1;

        // 1. 系列データの書き込み（カテゴリ列 + 値列）
        for (i, (category, value)) in self.categories.iter().zip(&self.values).enumerate() {
            let row = first_row + i as u32;
            worksheet.write_string(row, col, category)?;
            worksheet.write_number(row, col + 1, *value)?;
        }

        // 2. グラフの構築とスタイル適用
        let mut chart = Chart::new(ChartType::BarStacked);
        style::configure_value_axis(&mut chart, &options);
        style::configure_legend(&mut chart, &options);
        if options.legend.is_none() {
            // 新規グラフの既定は凡例なし。configure_legendは指定時のみ有効化する
            chart.legend().set_hidden();
        }

        let series = chart.add_series();
        series.set_name(self.title.as_str());
        series.set_categories((sheet_name.as_str(), first_row, col, last_row, col));
        series.set_values((sheet_name.as_str(), first_row, col + 1, last_row, col + 1));
        style::set_series_colors(series, point_count, &options)?;
        style::configure_data_labels(series, &options)?;

        // 3. 配置領域への挿入
        let (width, height) = region.size_pixels();
        chart.set_width(width);
        chart.set_height(height);

        let (x_offset, y_offset) = region.offset_pixels();
        worksheet.insert_chart_with_offset(0, 0, &chart, x_offset, y_offset)?;

        Ok(())
    }
}
